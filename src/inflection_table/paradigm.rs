use serde::{Deserialize, Serialize};

use crate::inflection_table::error::InflectionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TableKind {
    Verb,
    Noun,
}

impl TableKind {
    // "Verb" in the part-of-speech heading selects the verb layout
    pub fn from_part_of_speech(heading: &str) -> Self {
        if heading.contains("Verb") {
            Self::Verb
        } else {
            Self::Noun
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParadigmMeta {
    pub word: String,
    pub paradigm_class: String,     // Kotus type, e.g. "53"
    pub paradigm_exemplar: String, // Kotus word, e.g. "muistaa"
    pub gradation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParadigmNode {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ParadigmNode>,
}

// Root node labeled "table"; one child per mood or case
pub type ParadigmTree = ParadigmNode;

impl ParadigmNode {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: None,
            children: Vec::new(),
        }
    }

    pub fn leaf(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: Some(value.into()),
            children: Vec::new(),
        }
    }

    pub fn with_children(label: impl Into<String>, children: Vec<ParadigmNode>) -> Self {
        Self {
            label: label.into(),
            value: None,
            children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    // Appends and returns the new child
    pub fn push(&mut self, child: ParadigmNode) -> &mut ParadigmNode {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    pub fn child(&self, label: &str) -> Option<&ParadigmNode> {
        self.children.iter().find(|c| c.label == label)
    }

    pub fn child_mut(&mut self, label: &str) -> Option<&mut ParadigmNode> {
        self.children.iter_mut().find(|c| c.label == label)
    }

    // Follows a '/'-separated label path from this node
    pub fn get(&self, path: &str) -> Option<&ParadigmNode> {
        path.split('/')
            .filter(|label| !label.is_empty())
            .try_fold(self, |node, label| node.child(label))
    }

    pub fn value_at(&self, path: &str) -> Option<&str> {
        self.get(path)?.value.as_deref()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.children.iter().map(|c| c.label.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InflectionTable {
    pub kind: TableKind,
    pub meta: ParadigmMeta,
    pub table: ParadigmTree,

    // Recoverable anomalies met while walking the rows
    #[serde(skip)]
    pub diagnostics: Vec<InflectionError>,
}

impl InflectionTable {
    // Single node for insertion into the article tree
    pub fn to_document(&self) -> ParadigmNode {
        let meta = ParadigmNode::with_children(
            "meta",
            vec![
                ParadigmNode::with_children(
                    "kotus",
                    vec![
                        ParadigmNode::leaf("type", &self.meta.paradigm_class),
                        ParadigmNode::leaf("word", &self.meta.paradigm_exemplar),
                    ],
                ),
                ParadigmNode::leaf("gradation", &self.meta.gradation),
                ParadigmNode::leaf("word", &self.meta.word),
            ],
        );

        ParadigmNode::with_children("Inflection_Table", vec![meta, self.table.clone()])
    }
}

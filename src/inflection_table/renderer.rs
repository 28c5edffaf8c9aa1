use std::fmt::Write;

use serde::Serialize;

use crate::inflection_table::paradigm::ParadigmNode;

// One inflected form with its label path below the root
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlatForm {
    pub path: String,
    pub value: String,
}

// Valued nodes in document order
pub fn flatten_forms(root: &ParadigmNode) -> Vec<FlatForm> {
    let mut forms = Vec::new();
    for child in &root.children {
        collect_forms(child, child.label.clone(), &mut forms);
    }
    forms
}

fn collect_forms(node: &ParadigmNode, path: String, forms: &mut Vec<FlatForm>) {
    if let Some(value) = &node.value {
        forms.push(FlatForm {
            path: path.clone(),
            value: value.clone(),
        });
    }
    for child in &node.children {
        collect_forms(child, format!("{}/{}", path, child.label), forms);
    }
}

pub fn render_csv(root: &ParadigmNode) -> csv::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for form in flatten_forms(root) {
        writer.serialize(&form)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| csv::Error::from(err.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

// Indented element text; empty leaves are written as <label/>
pub fn render_xml(root: &ParadigmNode) -> String {
    let mut ret = String::new();
    write_xml_node(root, 0, &mut ret);
    ret
}

fn write_xml_node(node: &ParadigmNode, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    let label = &node.label;

    match (&node.value, node.children.is_empty()) {
        (None, true) => {
            let _ = writeln!(out, "{}<{}/>", indent, label);
        }
        (Some(value), true) => {
            let _ = writeln!(out, "{}<{}>{}</{}>", indent, label, escape_xml(value), label);
        }
        (value, false) => {
            let text = value.as_deref().map(escape_xml).unwrap_or_default();
            let _ = writeln!(out, "{}<{}>{}", indent, label, text);
            for child in &node.children {
                write_xml_node(child, depth + 1, out);
            }
            let _ = writeln!(out, "{}</{}>", indent, label);
        }
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

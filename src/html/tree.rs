use serde::Serialize;

use crate::html::tokenizer::HtmlToken;

pub const ROOT_NAME: &str = "#root";

static VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "type")]
pub enum HtmlNode {
    Element(HtmlElement),
    Text { value: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HtmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<HtmlNode>,
}

impl HtmlElement {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .map_or(false, |c| c.split_whitespace().any(|c| c == class))
    }

    // Concatenated text of all descendants
    pub fn text(&self) -> String {
        let mut ret = String::new();
        self.collect_text(&mut ret);
        ret
    }

    fn collect_text(&self, buffer: &mut String) {
        for child in &self.children {
            match child {
                HtmlNode::Text { value } => buffer.push_str(value),
                HtmlNode::Element(el) => el.collect_text(buffer),
            }
        }
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &HtmlElement> {
        self.children.iter().filter_map(|child| match child {
            HtmlNode::Element(el) => Some(el),
            HtmlNode::Text { .. } => None,
        })
    }

    // Depth-first, excluding self
    pub fn find_first(&self, name: &str) -> Option<&HtmlElement> {
        for child in self.child_elements() {
            if child.is(name) {
                return Some(child);
            }
            if let Some(found) = child.find_first(name) {
                return Some(found);
            }
        }
        None
    }

    pub fn find_all<'a>(&'a self, name: &str) -> Vec<&'a HtmlElement> {
        let mut ret = Vec::new();
        self.collect_all(name, &mut ret);
        ret
    }

    fn collect_all<'a>(&'a self, name: &str, buffer: &mut Vec<&'a HtmlElement>) {
        for child in self.child_elements() {
            if child.is(name) {
                buffer.push(child);
            }
            child.collect_all(name, buffer);
        }
    }
}

// Builds the element tree under a synthetic root
pub fn build_html_tree(tokens: &[HtmlToken]) -> HtmlElement {
    // Open elements; index 0 is the root and is never popped
    let mut stack = vec![HtmlElement::new(ROOT_NAME)];

    for token in tokens {
        match token {
            HtmlToken::Text(value) => {
                push_node(&mut stack, HtmlNode::Text {
                    value: value.clone(),
                });
            }

            HtmlToken::StartTag {
                name,
                attributes,
                self_closing,
            } => {
                match name.as_str() {
                    "tr" => close_implied(&mut stack, &["td", "th", "tr"]),
                    "td" | "th" => close_implied(&mut stack, &["td", "th"]),
                    "thead" | "tbody" | "tfoot" => {
                        close_implied(&mut stack, &["td", "th", "tr", "thead", "tbody", "tfoot"])
                    }
                    _ => {}
                }

                let element = HtmlElement {
                    name: name.clone(),
                    attributes: attributes.clone(),
                    children: Vec::new(),
                };

                if *self_closing || VOID_ELEMENTS.contains(&name.as_str()) {
                    push_node(&mut stack, HtmlNode::Element(element));
                } else {
                    stack.push(element);
                }
            }

            HtmlToken::EndTag { name } => {
                let open_index = stack
                    .iter()
                    .rposition(|el| &el.name == name)
                    .filter(|&index| 0 < index);
                if let Some(index) = open_index {
                    while index < stack.len() {
                        pop_element(&mut stack);
                    }
                }
            }
        }
    }

    while 1 < stack.len() {
        pop_element(&mut stack);
    }

    stack.pop().unwrap_or_else(|| HtmlElement::new(ROOT_NAME))
}

fn push_node(stack: &mut [HtmlElement], node: HtmlNode) {
    if let Some(top) = stack.last_mut() {
        top.children.push(node);
    }
}

fn pop_element(stack: &mut Vec<HtmlElement>) {
    if stack.len() <= 1 {
        return;
    }
    if let Some(element) = stack.pop() {
        push_node(stack, HtmlNode::Element(element));
    }
}

// Closes open elements named in `names` until a table boundary is reached
fn close_implied(stack: &mut Vec<HtmlElement>, names: &[&str]) {
    let boundary = stack
        .iter()
        .rposition(|el| el.is("table") || el.is(ROOT_NAME))
        .unwrap_or(0);

    let open_index = stack[boundary..]
        .iter()
        .position(|el| names.contains(&el.name.as_str()))
        .map(|i| i + boundary);

    if let Some(index) = open_index {
        while index < stack.len() {
            pop_element(stack);
        }
    }
}

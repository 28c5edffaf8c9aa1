use crate::{
    html::tree::HtmlElement,
    inflection_table::error::{InflectionError, Result},
};

pub const INFLECTION_TABLE_CLASS: &str = "inflection-table";

// The element itself counts when it is the table
pub fn locate_inflection_table(root: &HtmlElement) -> Result<&HtmlElement> {
    if root.is("table") && root.has_class(INFLECTION_TABLE_CLASS) {
        return Ok(root);
    }

    root.find_all("table")
        .into_iter()
        .find(|table| table.has_class(INFLECTION_TABLE_CLASS))
        .ok_or(InflectionError::MissingTable)
}

// One tr with its direct header and data cells
#[derive(Debug, Clone)]
pub struct TableRow<'a> {
    pub element: &'a HtmlElement,
    pub headers: Vec<&'a HtmlElement>,
    pub cells: Vec<&'a HtmlElement>,
}

impl<'a> TableRow<'a> {
    pub fn new(element: &'a HtmlElement) -> Self {
        let headers = element.child_elements().filter(|c| c.is("th")).collect();
        let cells = element.child_elements().filter(|c| c.is("td")).collect();
        Self {
            element,
            headers,
            cells,
        }
    }

    pub fn header_text(&self, index: usize) -> Option<String> {
        self.headers.get(index).map(|h| h.text())
    }

    pub fn cell_text(&self, index: usize) -> Option<String> {
        self.cells.get(index).map(|c| c.text())
    }
}

// Rows of the table itself; rows of nested tables are not included
pub fn table_rows(table: &HtmlElement) -> Vec<TableRow<'_>> {
    let mut rows = Vec::new();
    for child in table.child_elements() {
        match child.name.as_str() {
            "tr" => rows.push(TableRow::new(child)),
            "thead" | "tbody" | "tfoot" => rows.extend(
                child
                    .child_elements()
                    .filter(|c| c.is("tr"))
                    .map(TableRow::new),
            ),
            _ => {}
        }
    }
    rows
}

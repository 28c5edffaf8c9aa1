use crate::inflection_table::{table::TableRow, text::clean_label};

pub const NOMINAL_FORMS_LABEL: &str = "nominal_forms";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowKind {
    // At least one data cell; the subject is in the leading header cell
    DataRow,
    // Single header cell opening a mood
    MoodBoundary { label: String },
    // Single header cell opening the trailing nominal forms block
    NominalFormsMarker,
    // Two header cells naming a tense pair
    TensePairHeader { first: String, second: String },
    // Six header cells of column titles
    ColumnTitleRow,
    Unclassified { headers: usize, cells: usize },
}

pub fn classify_row(row: &TableRow) -> RowKind {
    let headers = row.headers.len();
    let cells = row.cells.len();

    if 0 < cells {
        return RowKind::DataRow;
    }

    match headers {
        1 => {
            let label = clean_label(&row.headers[0].text());
            if label.eq_ignore_ascii_case(NOMINAL_FORMS_LABEL) {
                RowKind::NominalFormsMarker
            } else {
                RowKind::MoodBoundary { label }
            }
        }
        2 => RowKind::TensePairHeader {
            first: clean_label(&row.headers[0].text()),
            second: clean_label(&row.headers[1].text()),
        },
        6 => RowKind::ColumnTitleRow,
        _ => RowKind::Unclassified { headers, cells },
    }
}

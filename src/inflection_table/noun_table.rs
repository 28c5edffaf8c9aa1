use tracing::debug;

use crate::inflection_table::{
    error::{InflectionError, Result},
    options::Diagnostics,
    paradigm::{ParadigmNode, ParadigmTree},
    table::TableRow,
    text::clean,
};

#[derive(Debug, Default)]
struct NounWalkState {
    // The column title row (empty leading header) has been passed
    headers_seen: bool,
    // Index of the accusative case waiting for its genitive row
    pending_accusative: Option<usize>,
}

// Row 0 (the headline) is not part of the walk
pub(crate) fn build_noun_table(
    rows: &[TableRow],
    diagnostics: &mut Diagnostics,
) -> Result<ParadigmTree> {
    let mut root = ParadigmNode::new("table");
    let mut state = NounWalkState::default();

    for (index, row) in rows.iter().enumerate().skip(1) {
        let case_name = row.header_text(0).map(|text| clean(&text));
        debug!(index, ?case_name, "noun row");

        if let Some(case) = state.pending_accusative.take() {
            // second accusative row
            match row.cell_text(0) {
                Some(text) => {
                    root.children[case].push(ParadigmNode::leaf("genitive", clean(&text)));
                }
                None => diagnostics.report(InflectionError::malformed_row(
                    index,
                    "accusative continuation without a form",
                ))?,
            }
            continue;
        }

        let case_name = match case_name {
            Some(case_name) => case_name,
            None => {
                diagnostics.report(InflectionError::malformed_row(index, "row without a case"))?;
                continue;
            }
        };

        if case_name.is_empty() {
            debug!(index, "column titles");
            state.headers_seen = true;
            continue;
        }

        if !state.headers_seen {
            debug!(index, %case_name, "row before column titles");
            continue;
        }

        let forms = match number_forms(row, index, &case_name) {
            Ok(forms) => forms,
            Err(err) => {
                diagnostics.report(err)?;
                continue;
            }
        };

        if case_name == "accusative" {
            root.push(ParadigmNode::with_children(
                case_name,
                vec![ParadigmNode::with_children("nominative", forms)],
            ));
            state.pending_accusative = Some(root.children.len() - 1);
        } else {
            root.push(ParadigmNode::with_children(case_name, forms));
        }
    }

    if state.pending_accusative.is_some() {
        diagnostics.report(InflectionError::malformed_row(
            rows.len(),
            "table ends before the accusative continuation",
        ))?;
    }

    Ok(root)
}

// singular / plural leaves of one case row
fn number_forms(row: &TableRow, index: usize, case_name: &str) -> Result<Vec<ParadigmNode>> {
    let (singular, plural) = match (row.cells.first(), row.cells.get(1)) {
        (Some(singular), Some(plural)) => (singular, plural),
        _ => {
            return Err(InflectionError::malformed_row(
                index,
                format!("expected 2 form cells, found {}", row.cells.len()),
            ))
        }
    };

    let plural = if case_name == "genitive" {
        // the plural forms are wrapped one level deeper
        match plural.find_first("span") {
            Some(span) => span.text(),
            None => {
                debug!(index, "genitive plural without a span");
                plural.text()
            }
        }
    } else {
        plural.text()
    };

    Ok(vec![
        ParadigmNode::leaf("singular", clean(&singular.text())),
        ParadigmNode::leaf("plural", clean(&plural)),
    ])
}

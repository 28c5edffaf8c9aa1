use tracing::{debug, info};

use crate::{
    html::{tokenizer::tokenize_html, tree::build_html_tree},
    inflection_table::{
        error::{InflectionError, Result},
        headline::extract_headline,
        noun_table::build_noun_table,
        options::{Diagnostics, ParseOptions},
        paradigm::{InflectionTable, TableKind},
        table::{locate_inflection_table, table_rows},
        verb_table::build_verb_table,
    },
};

pub fn parse_inflection_table(html: &str, kind: TableKind) -> Result<InflectionTable> {
    parse_inflection_table_with(html, kind, &ParseOptions::default())
}

// `html` is the table itself or a fragment containing it
pub fn parse_inflection_table_with(
    html: &str,
    kind: TableKind,
    options: &ParseOptions,
) -> Result<InflectionTable> {
    let root = build_html_tree(&tokenize_html(html));
    let table = locate_inflection_table(&root)?;

    let rows = table_rows(table);
    debug!(rows = rows.len(), ?kind, "inflection table");

    let headline = rows
        .first()
        .and_then(|row| row.element.find_first("th"))
        .ok_or_else(|| InflectionError::StructuralMismatch(String::new()))?;
    let meta = extract_headline(&headline.text())?;

    let mut diagnostics = Diagnostics::new(options);
    let tree = match kind {
        TableKind::Verb => build_verb_table(&rows, &mut diagnostics)?,
        TableKind::Noun => build_noun_table(&rows, &mut diagnostics)?,
    };
    let diagnostics = diagnostics.into_vec();

    info!(
        word = meta.word.as_str(),
        groups = tree.children.len(),
        anomalies = diagnostics.len(),
        "parsed inflection table"
    );

    Ok(InflectionTable {
        kind,
        meta,
        table: tree,
        diagnostics,
    })
}

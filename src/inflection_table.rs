// Reconstruction of Wiktionary inflection tables (Finnish conjugation / declension)
//
// The tables are hand-authored templates, not a fixed schema. The layout below is what
// the templates rendered as of this version; anything else is reported, not guessed:
// - row 0 is the headline "Inflection of WORD (Kotus type NN/EXEMPLAR, GRADATION gradation)"
// - verb tables: a single header cell opens a mood, two header cells name a tense pair,
//   six header cells are column titles, rows with data cells carry the forms
// - the "Nominal forms" mood is always last: two column-title rows, then exactly 13 rows
//   in a fixed order (see nominal_forms)
// - noun tables: one row per case, accusative spans two rows (nominative / genitive),
//   the genitive plural cell wraps its form in a span

pub mod error;
pub mod headline;
mod nominal_forms;
mod noun_table;
pub mod options;
pub mod paradigm;
pub mod parser;
pub mod renderer;
pub mod row_classifier;
pub mod table;
pub mod text;
mod verb_table;

pub use error::{InflectionError, Result};
pub use nominal_forms::{extract_nominal_forms, NOMINAL_FORMS_ROW_COUNT};
pub use options::{ParseOptions, RowPolicy};
pub use paradigm::{InflectionTable, ParadigmMeta, ParadigmNode, ParadigmTree, TableKind};
pub use parser::{parse_inflection_table, parse_inflection_table_with};

use tracing::debug;

use crate::inflection_table::{
    error::{InflectionError, Result},
    nominal_forms::extract_nominal_forms,
    options::Diagnostics,
    paradigm::{ParadigmNode, ParadigmTree},
    row_classifier::{classify_row, RowKind},
    table::TableRow,
    text::clean_label,
};

const POLARITIES: [&str; 2] = ["positive", "negative"];
const NUMBERS: [&str; 3] = ["singular", "plural", "passive"];

// Column titles between the nominal forms marker and its first form row
const NOMINAL_FORMS_TITLE_ROWS: usize = 2;

// Subject header => (person, number)
fn subject(label: &str) -> Option<(&'static str, &'static str)> {
    match label {
        "1st_sing." => Some(("first", "singular")),
        "2nd_sing." => Some(("second", "singular")),
        "3rd_sing." => Some(("third", "singular")),
        "1st_plur." => Some(("first", "plural")),
        "2nd_plur." => Some(("second", "plural")),
        "3rd_plur." => Some(("third", "plural")),
        "passive" => Some(("passive", "passive")),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum WalkState {
    Start,
    InMood {
        // index of the mood under the root
        mood: usize,
        // indices of the current tense pair under the mood
        tenses: Option<[usize; 2]>,
    },
    Done,
}

struct VerbTableBuilder {
    root: ParadigmTree,
    state: WalkState,
}

impl VerbTableBuilder {
    fn new() -> Self {
        Self {
            root: ParadigmNode::new("table"),
            state: WalkState::Start,
        }
    }

    fn step(
        &mut self,
        rows: &[TableRow],
        index: usize,
        diagnostics: &mut Diagnostics,
    ) -> Result<()> {
        let row = &rows[index];
        let kind = classify_row(row);
        debug!(
            index,
            headers = row.headers.len(),
            cells = row.cells.len(),
            ?kind,
            "verb row"
        );

        match kind {
            RowKind::DataRow => {
                if let Err(err) = self.fill_forms(row, index) {
                    diagnostics.report(err)?;
                }
            }

            RowKind::MoodBoundary { label } => {
                self.root.push(ParadigmNode::new(label));
                self.state = WalkState::InMood {
                    mood: self.root.children.len() - 1,
                    tenses: None,
                };
            }

            RowKind::NominalFormsMarker => {
                let start = index + 1 + NOMINAL_FORMS_TITLE_ROWS;
                self.root.push(extract_nominal_forms(rows, start)?);
                self.state = WalkState::Done;
            }

            RowKind::TensePairHeader { first, second } => {
                if let Err(err) = self.open_tense_pair(index, [first, second]) {
                    diagnostics.report(err)?;
                }
            }

            RowKind::ColumnTitleRow => {}

            RowKind::Unclassified { headers, cells } => {
                diagnostics.report(InflectionError::UnclassifiedRow {
                    row: index,
                    headers,
                    cells,
                })?;
            }
        }

        Ok(())
    }

    fn open_tense_pair(&mut self, index: usize, titles: [String; 2]) -> Result<()> {
        let mood = match self.state {
            WalkState::InMood { mood, .. } => mood,
            _ => {
                return Err(InflectionError::malformed_row(
                    index,
                    "tense header outside of a mood",
                ))
            }
        };
        debug!(?titles, "new tense pair");

        let mood_node = &mut self.root.children[mood];
        let mut tenses = [0; 2];
        for (column, title) in titles.into_iter().enumerate() {
            let tense = mood_node.push(ParadigmNode::new(title));
            for polarity in POLARITIES {
                let polarity = tense.push(ParadigmNode::new(polarity));
                for number in NUMBERS {
                    polarity.push(ParadigmNode::new(number));
                }
            }
            tenses[column] = mood_node.children.len() - 1;
        }

        self.state = WalkState::InMood {
            mood,
            tenses: Some(tenses),
        };
        Ok(())
    }

    // Cells run tense1-positive, tense1-negative, tense2-positive, tense2-negative
    fn fill_forms(&mut self, row: &TableRow, index: usize) -> Result<()> {
        let (mood, tenses) = match self.state {
            WalkState::InMood {
                mood,
                tenses: Some(tenses),
            } => (mood, tenses),
            _ => {
                return Err(InflectionError::malformed_row(
                    index,
                    "forms outside of a tense pair",
                ))
            }
        };

        let title = row
            .header_text(0)
            .map(|text| clean_label(&text))
            .ok_or_else(|| InflectionError::malformed_row(index, "forms without a subject"))?;
        let (person, number) = subject(&title).ok_or_else(|| {
            InflectionError::malformed_row(index, format!("unknown subject {:?}", title))
        })?;

        let columns = tenses.len() * POLARITIES.len();
        if row.cells.len() < columns {
            return Err(InflectionError::malformed_row(
                index,
                format!("expected {} form cells, found {}", columns, row.cells.len()),
            ));
        }
        debug!(%title, person, number, "forms");

        let mood_node = &mut self.root.children[mood];
        let mut cells = row.cells.iter();
        for tense in tenses {
            for polarity in POLARITIES {
                let text = cells
                    .next()
                    .map(|cell| cell.text().trim().to_owned())
                    .unwrap_or_default();

                let number_node = mood_node.children[tense]
                    .child_mut(polarity)
                    .and_then(|p| p.child_mut(number))
                    .ok_or_else(|| {
                        InflectionError::malformed_row(index, "tense pair is incomplete")
                    })?;

                if person == "passive" {
                    number_node.value = Some(text);
                } else {
                    number_node.push(ParadigmNode::leaf(person, text));
                }
            }
        }

        Ok(())
    }

    fn is_done(&self) -> bool {
        self.state == WalkState::Done
    }
}

// Row 0 (the headline) is not part of the walk
pub(crate) fn build_verb_table(
    rows: &[TableRow],
    diagnostics: &mut Diagnostics,
) -> Result<ParadigmTree> {
    let mut builder = VerbTableBuilder::new();

    for index in 1..rows.len() {
        builder.step(rows, index, diagnostics)?;
        if builder.is_done() {
            debug!(index, "reached nominal forms");
            break;
        }
    }

    Ok(builder.root)
}

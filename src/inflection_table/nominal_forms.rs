// Nominal forms (infinitives and participles) of a verb table
//
// The block is decoded by fixed row offsets relative to its first form row:
//
//   row  0     1st infinitive        | present participle (active, passive)
//   row  1     long 1st infinitive   | past participle (active, passive)
//   row  2     2nd inf. inessive (active, passive) | agent participle
//   row  3     2nd inf. instructive (active, passive) | negative participle
//   rows 4-9   3rd infinitive, 6 forms (active, passive); row 4 leads with a section title
//   rows 10-11 4th infinitive, 2 forms; row 10 leads with a section title
//   row  12    5th infinitive
//
// Any other layout is rejected with MalformedNominalBlock.

use tracing::debug;

use crate::inflection_table::{
    error::{InflectionError, Result},
    paradigm::ParadigmNode,
    table::TableRow,
    text::{clean, clean_label},
};

pub const NOMINAL_FORMS_ROW_COUNT: usize = 13;

const THIRD_INFINITIVE_ROWS: usize = 6;
const FOURTH_INFINITIVE_ROWS: usize = 2;

// Bounds-checked access to the 13-row window
struct NominalBlock<'r, 'a> {
    rows: &'r [TableRow<'a>],
    start: usize,
}

impl<'r, 'a> NominalBlock<'r, 'a> {
    fn new(rows: &'r [TableRow<'a>], start: usize) -> Result<Self> {
        let available = rows.len().saturating_sub(start);
        if available < NOMINAL_FORMS_ROW_COUNT {
            return Err(InflectionError::malformed_nominal_block(format!(
                "expected {} rows from row {}, found {}",
                NOMINAL_FORMS_ROW_COUNT, start, available
            )));
        }

        Ok(Self { rows, start })
    }

    fn row(&self, offset: usize) -> &TableRow<'a> {
        &self.rows[self.start + offset]
    }

    fn cell(&self, offset: usize, index: usize) -> Result<String> {
        self.row(offset)
            .cell_text(index)
            .map(|text| clean(&text))
            .ok_or_else(|| {
                InflectionError::malformed_nominal_block(format!(
                    "row {} has no data cell {}",
                    self.start + offset,
                    index
                ))
            })
    }

    fn header(&self, offset: usize, index: usize) -> Result<String> {
        self.row(offset)
            .header_text(index)
            .map(|text| clean_label(&text))
            .ok_or_else(|| {
                InflectionError::malformed_nominal_block(format!(
                    "row {} has no header cell {}",
                    self.start + offset,
                    index
                ))
            })
    }

    // active / passive pair from cells `index` and `index + 1`
    fn voice_pair(&self, label: &str, offset: usize, index: usize) -> Result<ParadigmNode> {
        Ok(ParadigmNode::with_children(
            label,
            vec![
                ParadigmNode::leaf("active", self.cell(offset, index)?),
                ParadigmNode::leaf("passive", self.cell(offset, index + 1)?),
            ],
        ))
    }
}

// `start` is the index of the first form row (three rows after the marker)
pub fn extract_nominal_forms(rows: &[TableRow], start: usize) -> Result<ParadigmNode> {
    let block = NominalBlock::new(rows, start)?;

    let mut infinitives = ParadigmNode::new("infinitives");
    let mut participles = ParadigmNode::new("participles");

    // rows 0-1
    for (offset, infinitive, participle) in [(0, "first", "present"), (1, "long_first", "past")] {
        infinitives.push(ParadigmNode::leaf(infinitive, block.cell(offset, 0)?));
        participles.push(block.voice_pair(participle, offset, 1)?);
    }

    // rows 2-3
    let mut second = ParadigmNode::new("second");
    for (offset, infinitive, participle) in [(2, "inessive", "agent"), (3, "instructive", "negative")]
    {
        second.push(block.voice_pair(infinitive, offset, 0)?);
        participles.push(ParadigmNode::leaf(participle, block.cell(offset, 2)?));
    }
    infinitives.push(second);

    // rows 4-9
    let mut third = ParadigmNode::new("third");
    for i in 0..THIRD_INFINITIVE_ROWS {
        let offset = 4 + i;
        // the first row also carries the section title
        let label = block.header(offset, if i == 0 { 1 } else { 0 })?;
        third.push(block.voice_pair(&label, offset, 0)?);
    }
    infinitives.push(third);

    // rows 10-11
    let mut fourth = ParadigmNode::new("fourth");
    for i in 0..FOURTH_INFINITIVE_ROWS {
        let offset = 10 + i;
        let label = block.header(offset, if i == 0 { 1 } else { 0 })?;
        fourth.push(ParadigmNode::leaf(label, block.cell(offset, 0)?));
    }
    infinitives.push(fourth);

    // row 12
    infinitives.push(ParadigmNode::leaf("fifth", block.cell(12, 0)?));

    debug!(start, "nominal forms extracted");

    Ok(ParadigmNode::with_children(
        "nominal_forms",
        vec![infinitives, participles],
    ))
}

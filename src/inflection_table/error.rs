use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InflectionError {
    // Headline text is not "Inflection of ... gradation)"
    #[error("Headline does not match the inflection table shape: {0:?}")]
    StructuralMismatch(String),

    #[error("No inflection table present")]
    MissingTable,

    #[error("Row {row} has an unrecognized shape ({headers} header cells, {cells} data cells)")]
    UnclassifiedRow {
        row: usize,
        headers: usize,
        cells: usize,
    },

    #[error("Malformed nominal forms block: {0}")]
    MalformedNominalBlock(String),

    // Classified row whose content cannot be placed in the tree
    #[error("Row {row} is malformed: {reason}")]
    MalformedRow { row: usize, reason: String },
}

impl InflectionError {
    pub fn malformed_row(row: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRow {
            row,
            reason: reason.into(),
        }
    }

    pub fn malformed_nominal_block(reason: impl Into<String>) -> Self {
        Self::MalformedNominalBlock(reason.into())
    }

    // Recoverable errors leave the rest of the table (or the article) usable
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::MissingTable | Self::UnclassifiedRow { .. } | Self::MalformedRow { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, InflectionError>;

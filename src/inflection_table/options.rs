use tracing::warn;

use crate::inflection_table::error::{InflectionError, Result};

// What to do with a row that cannot be placed in the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowPolicy {
    // Report and continue with the next row
    #[default]
    Tolerate,
    // Abort the table at the first such row
    Reject,
}

#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    pub row_policy: RowPolicy,
}

impl ParseOptions {
    pub fn strict() -> Self {
        Self {
            row_policy: RowPolicy::Reject,
        }
    }
}

// Collects row-level anomalies during one table walk
#[derive(Debug)]
pub(crate) struct Diagnostics {
    policy: RowPolicy,
    reported: Vec<InflectionError>,
}

impl Diagnostics {
    pub fn new(options: &ParseOptions) -> Self {
        Self {
            policy: options.row_policy,
            reported: Vec::new(),
        }
    }

    pub fn report(&mut self, err: InflectionError) -> Result<()> {
        match self.policy {
            RowPolicy::Reject => Err(err),
            RowPolicy::Tolerate => {
                warn!("{}", err);
                self.reported.push(err);
                Ok(())
            }
        }
    }

    pub fn into_vec(self) -> Vec<InflectionError> {
        self.reported
    }
}

//! Data shapes produced by the extraction routines

mod table;
mod tally;
pub mod taxonomy;

pub use table::Table;
pub use tally::ProposalTally;
pub use taxonomy::StatusTaxonomy;

use crate::config::Config;

impl StatusTaxonomy {
    /// Builds the taxonomy from the `[expected-status]` section
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.expected_status.clone())
    }
}

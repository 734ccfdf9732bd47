//! Pipeline entry points.
//!
//! - `run_pipeline`: Fetch, merge and write the aggregated feed
//! - `run_validate`: Check the configuration without fetching anything
//! - `run_info`: Describe the configuration and the current output file

pub mod info;
pub mod run;
pub mod validate;

pub use info::run_info;
pub use run::{outcome_report, run_pipeline};
pub use validate::run_validate;

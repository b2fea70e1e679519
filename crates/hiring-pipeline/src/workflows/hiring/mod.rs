//! Simulated hiring pipeline.
//!
//! A run walks four phases in a fixed order: the roster is listed, candidates
//! are screened against the salary budget until the openings are filled, the
//! selected candidates are contacted with a bounded number of attempts, and a
//! final report summarizes the outcome. Every phase returns its narration as
//! data so callers decide where the transcript goes.

mod config;
pub mod contact;
pub mod pipeline;
mod randomness;
pub mod report;
mod roster;
pub mod selection;

#[cfg(test)]
mod tests;

pub use config::{HiringConfig, HiringConfigError, HiringParameters};
pub use contact::{run_contact, ContactOutcome, ContactResult, ContactStatus};
pub use pipeline::{HiringPipeline, PipelineRun};
pub use randomness::{
    contact_attempt_succeeds, EntropySource, RandomSource, CONTACT_OUTCOMES,
    CONTACT_SUCCESS_OUTCOME,
};
pub use report::{FillVerdict, HiringReport, HiringReportSummary};
pub use roster::{CandidateRoster, RosterListing, STANDARD_CANDIDATES};
pub use selection::{run_selection, CandidateEvaluation, SelectionDecision, SelectionOutcome};

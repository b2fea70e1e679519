use super::config::HiringConfig;
use super::contact::{run_contact, ContactOutcome};
use super::randomness::RandomSource;
use super::report::{HiringReport, HiringReportSummary};
use super::roster::{CandidateRoster, RosterListing};
use super::selection::{run_selection, SelectionOutcome};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use tracing::info;

pub const TITLE_HEADING: &str = "=== HIRING PIPELINE SIMULATION ===";
pub const ROSTER_HEADING: &str = "=== CANDIDATE ROSTER ===";
pub const SELECTION_HEADING: &str = "=== SELECTION PHASE ===";
pub const CONTACT_HEADING: &str = "=== CONTACT PHASE ===";
pub const REPORT_HEADING: &str = "=== FINAL REPORT ===";

/// Composes the roster, selection, contact, and reporting phases.
#[derive(Debug, Clone)]
pub struct HiringPipeline {
    config: HiringConfig,
    roster: CandidateRoster,
}

impl HiringPipeline {
    pub fn new(config: HiringConfig, roster: CandidateRoster) -> Self {
        Self { config, roster }
    }

    pub fn standard() -> Self {
        Self::new(HiringConfig::standard(), CandidateRoster::standard())
    }

    pub fn config(&self) -> &HiringConfig {
        &self.config
    }

    pub fn roster(&self) -> &CandidateRoster {
        &self.roster
    }

    pub fn run<R>(&self, rng: &mut R) -> PipelineRun
    where
        R: RandomSource + ?Sized,
    {
        self.run_at(rng, Utc::now())
    }

    pub fn run_at<R>(&self, rng: &mut R, started_at: DateTime<Utc>) -> PipelineRun
    where
        R: RandomSource + ?Sized,
    {
        info!(
            openings = self.config.openings(),
            roster = self.roster.len(),
            "hiring pipeline started"
        );

        let roster = self.roster.listing();
        let selection = run_selection(&self.roster, &self.config, rng);
        let contact = run_contact(&selection.selected, &self.config, rng);
        let summary = HiringReport::new(self.config.openings(), &selection.selected)
            .with_contacts(&contact)
            .summary();

        PipelineRun {
            started_at,
            config: self.config.clone(),
            roster,
            selection,
            contact,
            summary,
        }
    }
}

impl Default for HiringPipeline {
    fn default() -> Self {
        Self::standard()
    }
}

/// Everything a single run produced, in phase order.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineRun {
    pub started_at: DateTime<Utc>,
    pub config: HiringConfig,
    pub roster: RosterListing,
    pub selection: SelectionOutcome,
    pub contact: ContactOutcome,
    pub summary: HiringReportSummary,
}

impl PipelineRun {
    pub fn header(&self) -> Vec<String> {
        vec![
            TITLE_HEADING.to_string(),
            format!(
                "Openings: {} | Offered salary: {:.2}",
                self.config.openings(),
                self.config.offered_salary()
            ),
            format!(
                "Run started {}",
                self.started_at.to_rfc3339_opts(SecondsFormat::Secs, true)
            ),
        ]
    }

    /// Full text transcript: header followed by the four labeled sections.
    pub fn transcript(&self) -> Vec<String> {
        let mut lines = self.header();
        lines.push(String::new());

        lines.extend(roster_section(&self.roster));
        lines.push(String::new());

        lines.push(SELECTION_HEADING.to_string());
        lines.extend(self.selection.narration.iter().cloned());

        lines.push(CONTACT_HEADING.to_string());
        lines.extend(self.contact.narration.iter().cloned());

        lines.push(REPORT_HEADING.to_string());
        lines.extend(self.summary.lines());
        lines
    }
}

pub fn roster_section(listing: &RosterListing) -> Vec<String> {
    let mut lines = vec![ROSTER_HEADING.to_string(), String::new()];
    lines.extend(listing.lines());
    lines
}

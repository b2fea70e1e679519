use super::super::contact::ContactOutcome;
use super::views::{FillVerdict, HiringReportSummary};
use tracing::info;

/// Final tally of a run: openings against the candidates that were selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HiringReport {
    openings: usize,
    selected: Vec<String>,
    contacts_established: Option<usize>,
}

impl HiringReport {
    pub fn new(openings: usize, selected: &[String]) -> Self {
        Self {
            openings,
            selected: selected.to_vec(),
            contacts_established: None,
        }
    }

    /// Adds the number of selected candidates that were reached. Does not
    /// affect the verdict.
    pub fn with_contacts(mut self, contact: &ContactOutcome) -> Self {
        self.contacts_established = Some(contact.established_count());
        self
    }

    pub fn verdict(&self) -> FillVerdict {
        FillVerdict::from_counts(self.selected.len(), self.openings)
    }

    pub fn summary(&self) -> HiringReportSummary {
        let verdict = self.verdict();
        info!(
            openings = self.openings,
            selected = self.selected.len(),
            %verdict,
            "hiring report compiled"
        );

        HiringReportSummary {
            openings: self.openings,
            selected_count: self.selected.len(),
            selected: self.selected.clone(),
            contacts_established: self.contacts_established,
            verdict,
            verdict_label: verdict.to_string(),
        }
    }
}

impl HiringReportSummary {
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Total openings: {}", self.openings),
            format!("Candidates selected: {}", self.selected_count),
        ];

        if let Some(reached) = self.contacts_established {
            lines.push(format!("Candidates reached: {reached}"));
        }

        if !self.selected.is_empty() {
            lines.push(String::new());
            lines.push("Hired candidates:".to_string());
            lines.extend(self.selected.iter().map(|name| format!("- {name}")));
        }

        lines.push(String::new());
        lines.push(format!(
            "Result: {}",
            self.verdict_label.to_ascii_uppercase()
        ));
        lines
    }
}

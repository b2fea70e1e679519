use super::config::HiringConfig;
use super::randomness::RandomSource;
use super::roster::CandidateRoster;
use serde::Serialize;
use tracing::{debug, info};

/// Outcome of screening one candidate's salary expectation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionDecision {
    Selected,
    OverBudget,
}

impl SelectionDecision {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Selected => "SELECTED",
            Self::OverBudget => "NOT SELECTED (expectation above budget)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateEvaluation {
    /// 1-based roster position.
    pub position: usize,
    pub candidate: String,
    pub salary_expectation: f64,
    pub decision: SelectionDecision,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionOutcome {
    /// Accepted candidates in roster order.
    pub selected: Vec<String>,
    pub evaluations: Vec<CandidateEvaluation>,
    #[serde(skip)]
    pub narration: Vec<String>,
}

impl SelectionOutcome {
    pub fn evaluated(&self) -> usize {
        self.evaluations.len()
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }
}

/// Screens roster entries in order until the openings are filled or the roster
/// runs out. Each considered candidate consumes exactly one expectation draw.
pub fn run_selection<R>(
    roster: &CandidateRoster,
    config: &HiringConfig,
    rng: &mut R,
) -> SelectionOutcome
where
    R: RandomSource + ?Sized,
{
    let total = roster.len();
    let mut selected = Vec::with_capacity(config.openings().min(total));
    let mut evaluations = Vec::new();
    let mut narration = vec![
        format!(
            "Reviewing candidates against an offered salary of {:.2}...",
            config.offered_salary()
        ),
        String::new(),
    ];

    for (index, candidate) in roster.iter().enumerate() {
        if selected.len() >= config.openings() {
            break;
        }

        let salary_expectation =
            rng.uniform(config.expectation_floor(), config.expectation_ceiling());
        let decision = if config.within_budget(salary_expectation) {
            SelectionDecision::Selected
        } else {
            SelectionDecision::OverBudget
        };

        debug!(
            candidate,
            position = index + 1,
            salary_expectation,
            ?decision,
            "candidate screened"
        );

        narration.push(format!("Candidate {}/{}: {}", index + 1, total, candidate));
        narration.push(format!("Salary expectation: {salary_expectation:.2}"));
        narration.push(format!("Status: {}", decision.label()));
        narration.push(String::new());

        if decision == SelectionDecision::Selected {
            selected.push(candidate.to_string());
        }
        evaluations.push(CandidateEvaluation {
            position: index + 1,
            candidate: candidate.to_string(),
            salary_expectation,
            decision,
        });
    }

    info!(
        evaluated = evaluations.len(),
        selected = selected.len(),
        openings = config.openings(),
        "selection phase complete"
    );

    SelectionOutcome {
        selected,
        evaluations,
        narration,
    }
}

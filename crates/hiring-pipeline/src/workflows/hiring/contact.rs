use super::config::HiringConfig;
use super::randomness::{contact_attempt_succeeds, RandomSource};
use serde::Serialize;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactStatus {
    Established,
    NotEstablished,
}

impl ContactStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Established => "CONTACT ESTABLISHED",
            Self::NotEstablished => "COULD NOT ESTABLISH CONTACT",
        }
    }
}

/// Final contact state for one selected candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactResult {
    pub candidate: String,
    pub attempts: u32,
    pub status: ContactStatus,
}

impl ContactResult {
    pub fn established(&self) -> bool {
        self.status == ContactStatus::Established
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactOutcome {
    pub results: Vec<ContactResult>,
    #[serde(skip)]
    pub narration: Vec<String>,
}

impl ContactOutcome {
    pub fn established_count(&self) -> usize {
        self.results.iter().filter(|result| result.established()).count()
    }
}

/// Tries each selected candidate in order, up to the configured attempt limit
/// per candidate and stopping at the first answered attempt.
pub fn run_contact<R>(selected: &[String], config: &HiringConfig, rng: &mut R) -> ContactOutcome
where
    R: RandomSource + ?Sized,
{
    let mut narration = vec![
        format!(
            "Starting contact attempts with {} selected candidate(s)...",
            selected.len()
        ),
        String::new(),
    ];

    let mut results = Vec::with_capacity(selected.len());
    for candidate in selected {
        narration.push(format!("Candidate: {candidate}"));
        let result = attempt_contact(candidate, config.max_contact_attempts(), rng, &mut narration);
        narration.push(format!("Status: {}", result.status.label()));
        narration.push(String::new());
        results.push(result);
    }

    let outcome = ContactOutcome { results, narration };
    info!(
        contacted = outcome.results.len(),
        established = outcome.established_count(),
        "contact phase complete"
    );
    outcome
}

fn attempt_contact<R>(
    candidate: &str,
    max_attempts: u32,
    rng: &mut R,
    narration: &mut Vec<String>,
) -> ContactResult
where
    R: RandomSource + ?Sized,
{
    for attempt in 1..=max_attempts {
        let answered = contact_attempt_succeeds(rng);
        debug!(candidate, attempt, answered, "contact attempt");

        if answered {
            narration.push(format!(
                "Attempt {attempt}/{max_attempts}... reached {candidate} on attempt {attempt}"
            ));
            return ContactResult {
                candidate: candidate.to_string(),
                attempts: attempt,
                status: ContactStatus::Established,
            };
        }
        narration.push(format!("Attempt {attempt}/{max_attempts}... no answer"));
    }

    ContactResult {
        candidate: candidate.to_string(),
        attempts: max_attempts,
        status: ContactStatus::NotEstablished,
    }
}

use serde::Serialize;
use std::fmt;

/// Whether a run filled every opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FillVerdict {
    AllFilled,
    PartiallyFilled { filled: usize, openings: usize },
}

impl FillVerdict {
    pub fn from_counts(filled: usize, openings: usize) -> Self {
        if filled == openings {
            Self::AllFilled
        } else {
            Self::PartiallyFilled { filled, openings }
        }
    }
}

impl fmt::Display for FillVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllFilled => write!(f, "all openings filled"),
            Self::PartiallyFilled { filled, openings } => {
                write!(f, "only {filled} of {openings} openings filled")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HiringReportSummary {
    pub openings: usize,
    pub selected_count: usize,
    pub selected: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contacts_established: Option<usize>,
    pub verdict: FillVerdict,
    pub verdict_label: String,
}

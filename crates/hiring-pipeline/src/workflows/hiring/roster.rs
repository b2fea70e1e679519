use serde::{Deserialize, Serialize};

pub const STANDARD_CANDIDATES: [&str; 10] = [
    "FELIPE", "MARCIA", "JULIA", "PAULO", "AUGUSTO", "MONICA", "FABRICIO", "MIRELA", "DANIELA",
    "JORGE",
];

/// Ordered candidate list fixed for the lifetime of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRoster {
    candidates: Vec<String>,
}

impl CandidateRoster {
    pub fn new<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            candidates: candidates.into_iter().map(Into::into).collect(),
        }
    }

    pub fn standard() -> Self {
        Self::new(STANDARD_CANDIDATES)
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.candidates.iter().map(String::as_str)
    }

    /// Renders the roster twice: with `01 - NAME` indices and as a bullet list.
    pub fn listing(&self) -> RosterListing {
        let indexed = self
            .iter()
            .enumerate()
            .map(|(index, name)| format!("{:02} - {}", index + 1, name))
            .collect();
        let bulleted = self.iter().map(|name| format!("- {name}")).collect();

        RosterListing { indexed, bulleted }
    }
}

impl Default for CandidateRoster {
    fn default() -> Self {
        Self::standard()
    }
}

/// Both textual renderings of a roster, in roster order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterListing {
    pub indexed: Vec<String>,
    pub bulleted: Vec<String>,
}

impl RosterListing {
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.indexed.len() + self.bulleted.len() + 4);
        lines.push("Indexed list:".to_string());
        lines.extend(self.indexed.iter().cloned());
        lines.push(String::new());
        lines.push("Plain list:".to_string());
        lines.extend(self.bulleted.iter().cloned());
        lines
    }
}

use serde::{Deserialize, Serialize};

/// Raw hiring parameters, validated into a [`HiringConfig`] before use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HiringParameters {
    pub openings: usize,
    pub offered_salary: f64,
    pub max_contact_attempts: u32,
    pub expectation_floor: f64,
    pub expectation_ceiling: f64,
}

impl HiringParameters {
    pub const fn standard() -> Self {
        Self {
            openings: 5,
            offered_salary: 2000.0,
            max_contact_attempts: 3,
            expectation_floor: 1800.0,
            expectation_ceiling: 2200.0,
        }
    }
}

impl Default for HiringParameters {
    fn default() -> Self {
        Self::standard()
    }
}

/// Validated, immutable hiring configuration shared by every phase of a run.
///
/// Degenerate values are rejected by [`HiringConfig::new`], so the phases can
/// treat the openings, attempt limit, and expectation range as well-formed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HiringConfig {
    openings: usize,
    offered_salary: f64,
    max_contact_attempts: u32,
    expectation_floor: f64,
    expectation_ceiling: f64,
}

impl HiringConfig {
    pub fn new(parameters: HiringParameters) -> Result<Self, HiringConfigError> {
        let HiringParameters {
            openings,
            offered_salary,
            max_contact_attempts,
            expectation_floor,
            expectation_ceiling,
        } = parameters;

        if openings == 0 {
            return Err(HiringConfigError::NoOpenings);
        }
        if max_contact_attempts == 0 {
            return Err(HiringConfigError::NoContactAttempts);
        }
        if !offered_salary.is_finite() || offered_salary <= 0.0 {
            return Err(HiringConfigError::InvalidOfferedSalary(offered_salary));
        }
        if !expectation_floor.is_finite()
            || !expectation_ceiling.is_finite()
            || expectation_floor >= expectation_ceiling
            || !(expectation_ceiling - expectation_floor).is_finite()
        {
            return Err(HiringConfigError::InvalidExpectationBounds {
                floor: expectation_floor,
                ceiling: expectation_ceiling,
            });
        }

        Ok(Self {
            openings,
            offered_salary,
            max_contact_attempts,
            expectation_floor,
            expectation_ceiling,
        })
    }

    /// Five openings at 2000.00, three contact attempts, expectations drawn
    /// from `[1800.00, 2200.00)`.
    pub fn standard() -> Self {
        let HiringParameters {
            openings,
            offered_salary,
            max_contact_attempts,
            expectation_floor,
            expectation_ceiling,
        } = HiringParameters::standard();

        Self {
            openings,
            offered_salary,
            max_contact_attempts,
            expectation_floor,
            expectation_ceiling,
        }
    }

    pub fn openings(&self) -> usize {
        self.openings
    }

    pub fn offered_salary(&self) -> f64 {
        self.offered_salary
    }

    pub fn max_contact_attempts(&self) -> u32 {
        self.max_contact_attempts
    }

    pub fn expectation_floor(&self) -> f64 {
        self.expectation_floor
    }

    pub fn expectation_ceiling(&self) -> f64 {
        self.expectation_ceiling
    }

    /// Whether a salary expectation fits the budget. Equality is within budget.
    pub fn within_budget(&self, expectation: f64) -> bool {
        expectation <= self.offered_salary
    }
}

impl Default for HiringConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<HiringParameters> for HiringConfig {
    type Error = HiringConfigError;

    fn try_from(parameters: HiringParameters) -> Result<Self, Self::Error> {
        Self::new(parameters)
    }
}

/// Reasons a set of hiring parameters cannot drive a run.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HiringConfigError {
    #[error("at least one opening is required")]
    NoOpenings,
    #[error("at least one contact attempt is required")]
    NoContactAttempts,
    #[error("offered salary must be a positive amount, got {0}")]
    InvalidOfferedSalary(f64),
    #[error(
        "salary expectation bounds must be finite with minimum < maximum, got [{floor}, {ceiling})"
    )]
    InvalidExpectationBounds { floor: f64, ceiling: f64 },
}

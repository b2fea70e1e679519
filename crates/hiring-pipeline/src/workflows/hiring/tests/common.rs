use std::collections::VecDeque;

use crate::workflows::hiring::{
    CandidateRoster, HiringConfig, HiringParameters, RandomSource, CONTACT_OUTCOMES,
    CONTACT_SUCCESS_OUTCOME,
};

/// Replays fixed expectation and contact draws, panicking once a script runs dry.
#[derive(Debug, Default)]
pub(super) struct ScriptedSource {
    expectations: VecDeque<f64>,
    outcomes: VecDeque<u32>,
    pub(super) uniform_calls: usize,
    pub(super) discrete_calls: usize,
}

impl ScriptedSource {
    pub(super) fn new(expectations: &[f64], outcomes: &[u32]) -> Self {
        Self {
            expectations: expectations.iter().copied().collect(),
            outcomes: outcomes.iter().copied().collect(),
            ..Self::default()
        }
    }

    pub(super) fn expectations(expectations: &[f64]) -> Self {
        Self::new(expectations, &[])
    }

    pub(super) fn contacts(outcomes: &[u32]) -> Self {
        Self::new(&[], outcomes)
    }
}

impl RandomSource for ScriptedSource {
    fn uniform(&mut self, _low: f64, _high: f64) -> f64 {
        self.uniform_calls += 1;
        self.expectations
            .pop_front()
            .expect("scripted expectations exhausted")
    }

    fn discrete(&mut self, outcomes: u32) -> u32 {
        assert_eq!(outcomes, CONTACT_OUTCOMES);
        self.discrete_calls += 1;
        self.outcomes
            .pop_front()
            .expect("scripted contact outcomes exhausted")
    }
}

/// Every expectation draw returns the same value and every contact attempt
/// draws the same outcome.
#[derive(Debug)]
pub(super) struct ConstantSource {
    pub(super) expectation: f64,
    pub(super) outcome: u32,
    pub(super) discrete_calls: usize,
}

impl ConstantSource {
    pub(super) fn always_answers() -> Self {
        Self {
            expectation: 1900.0,
            outcome: CONTACT_SUCCESS_OUTCOME,
            discrete_calls: 0,
        }
    }

    pub(super) fn never_answers() -> Self {
        Self {
            expectation: 1900.0,
            outcome: 0,
            discrete_calls: 0,
        }
    }
}

impl RandomSource for ConstantSource {
    fn uniform(&mut self, _low: f64, _high: f64) -> f64 {
        self.expectation
    }

    fn discrete(&mut self, _outcomes: u32) -> u32 {
        self.discrete_calls += 1;
        self.outcome
    }
}

pub(super) const SCENARIO_EXPECTATIONS: [f64; 10] = [
    1700.0, 1900.0, 2300.0, 1850.0, 1999.0, 2100.0, 1801.0, 2199.0, 1950.0, 2000.0,
];

pub(super) fn config_with_openings(openings: usize) -> HiringConfig {
    HiringConfig::new(HiringParameters {
        openings,
        ..HiringParameters::standard()
    })
    .expect("valid test config")
}

pub(super) fn short_roster() -> CandidateRoster {
    CandidateRoster::new(["ANA", "BRUNO", "CARLA"])
}

pub(super) fn names(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

use crate::types::scenario::Scenario;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The year and scenario a projection is requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueryParams {
    pub year: i32,
    pub scenario: Scenario,
}

impl QueryParams {
    pub fn new(year: i32, scenario: Scenario) -> Self {
        Self { year, scenario }
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.scenario, self.year)
    }
}

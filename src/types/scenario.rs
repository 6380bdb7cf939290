//! Defines the climate projection pathways that can be queried.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A Representative Concentration Pathway used to filter projected data.
///
/// # Examples
///
/// ```
/// use climate_risk::Scenario;
///
/// let scenario: Scenario = "rcp8.5".parse().unwrap();
/// assert_eq!(scenario, Scenario::Rcp85);
/// assert_eq!(scenario.label(), "business as usual");
/// assert_eq!(scenario.to_string(), "rcp8.5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scenario {
    /// Emissions peak around 2040 and stabilise by the end of the century.
    #[serde(rename = "rcp4.5")]
    Rcp45,
    /// Emissions keep rising through the century.
    #[serde(rename = "rcp8.5")]
    Rcp85,
}

/// Wire value and human label for every scenario, in display order.
pub const RCP_OPTIONS: &[(Scenario, &str, &str)] = &[
    (Scenario::Rcp45, "rcp4.5", "emissions stable by 2100"),
    (Scenario::Rcp85, "rcp8.5", "business as usual"),
];

impl Scenario {
    /// The value the data service stores in its `scenario` column.
    pub fn value(&self) -> &'static str {
        self.option().1
    }

    /// Short phrase used in sentences shown to users.
    pub fn label(&self) -> &'static str {
        self.option().2
    }

    fn option(&self) -> &'static (Scenario, &'static str, &'static str) {
        match self {
            Scenario::Rcp45 => &RCP_OPTIONS[0],
            Scenario::Rcp85 => &RCP_OPTIONS[1],
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown scenario '{0}', expected one of: rcp4.5, rcp8.5")]
pub struct ScenarioParseError(pub String);

impl FromStr for Scenario {
    type Err = ScenarioParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        RCP_OPTIONS
            .iter()
            .find(|(_, value, _)| value.eq_ignore_ascii_case(trimmed))
            .map(|(scenario, _, _)| *scenario)
            .ok_or_else(|| ScenarioParseError(s.to_string()))
    }
}

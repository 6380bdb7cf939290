//! Output types of the transform step: chart points and the warming summary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One month of the chart, relative to the historical baseline.
///
/// `month`, `stddev` and `count` are carried over from the historical row.
/// `avg`, `lower_stddev`, `upper_stddev` and `rcp` are deviations from the
/// annual baseline in °C; any of them is `None` when an input it depends on
/// was missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    pub month: u32,
    pub avg: Option<f64>,
    pub stddev: Option<f64>,
    pub count: Option<i64>,
    pub lower_stddev: Option<f64>,
    pub upper_stddev: Option<f64>,
    pub rcp: Option<f64>,
}

/// Direction of the projected change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Statement {
    Warmer,
    Colder,
}

impl Statement {
    pub fn as_str(&self) -> &'static str {
        match self {
            Statement::Warmer => "warmer",
            Statement::Colder => "colder",
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a chart and its summary sentence need.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRiskData {
    pub chart_data: Vec<ChartPoint>,
    /// Historical baseline, the sum of monthly means divided by 12.
    pub annual_avg_temp: f64,
    /// Projected annual mean for the requested year and scenario.
    pub annual_avg_future_temp: f64,
    pub statement: Statement,
    /// `annual_avg_future_temp - annual_avg_temp`, one decimal place.
    pub temp_change: String,
}

use crate::types::monthly_record::MonthlyRecord;
use serde::{Deserialize, Serialize};

/// The two row sets a single fetch produces.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScenarioRows {
    /// Monthly means and standard deviations over the historical record.
    pub historical_data: Vec<MonthlyRecord>,
    /// Monthly means for the requested year and scenario.
    pub rcp_data: Vec<MonthlyRecord>,
}

use crate::presentation::{render_template, ASSET_RISK_TEMPLATE};
use crate::types::asset_risk::AssetRiskData;
use crate::types::query_params::QueryParams;
use serde::{Deserialize, Serialize};

/// Transformed data together with the parameters it was requested for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRiskReport {
    pub params: QueryParams,
    pub data: AssetRiskData,
}

impl AssetRiskReport {
    pub fn new(params: QueryParams, data: AssetRiskData) -> Self {
        Self { params, data }
    }

    /// The summary sentence, with the scenario shown by its label.
    ///
    /// ```
    /// use climate_risk::{transform, AssetRiskReport, MonthlyRecord, QueryParams, Scenario};
    ///
    /// let historical: Vec<_> = (1..=12).map(|m| MonthlyRecord::historical(m, 10.0, 1.0)).collect();
    /// let projected: Vec<_> = (1..=12).map(|m| MonthlyRecord::projected(m, 11.5, 30)).collect();
    /// let report = AssetRiskReport::new(
    ///     QueryParams::new(2050, Scenario::Rcp45),
    ///     transform(&historical, &projected),
    /// );
    ///
    /// assert_eq!(
    ///     report.sentence(),
    ///     "Temperatures in 2050, in a scenario of emissions stable by 2100, will be warmer \
    ///      than historical records by an average of 1.5°C across your asset portfolio."
    /// );
    /// ```
    pub fn sentence(&self) -> String {
        render_template(
            ASSET_RISK_TEMPLATE,
            &[
                ("year", self.params.year.to_string()),
                ("scenario", self.params.scenario.label().to_string()),
                ("statement", self.data.statement.to_string()),
                ("tempChange", self.data.temp_change.clone()),
            ],
        )
    }

    /// Position of the chart's vertical reference line.
    pub fn x_reference(&self) -> String {
        self.params.year.to_string()
    }
}

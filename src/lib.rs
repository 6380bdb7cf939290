mod climate_risk;
mod error;
mod presentation;
mod query;
mod report;
mod transform;
mod types;
mod utils;

#[cfg(test)]
mod test_server;

pub use climate_risk::*;
pub use error::ClimateRiskError;
pub use report::AssetRiskReport;
pub use transform::transform;

pub use presentation::{celsius_tick_label, month_tick_label, render_template, ASSET_RISK_TEMPLATE};

pub use query::error::QueryError;
pub use query::fetcher::ScenarioFetcher;
pub use query::row_cache::RowCache;
pub use query::signal_query::{SignalQuery, DEFAULT_DATASET};
pub use query::sql_client::{SqlClient, DEFAULT_ENDPOINT};

pub use types::asset_risk::{AssetRiskData, ChartPoint, Statement};
pub use types::monthly_record::MonthlyRecord;
pub use types::query_params::QueryParams;
pub use types::scenario::{Scenario, ScenarioParseError, RCP_OPTIONS};
pub use types::scenario_rows::ScenarioRows;

pub use utils::format_fixed;

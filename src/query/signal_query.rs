//! SQL sent to the data service, and the cache key each statement maps to.

use crate::types::query_params::QueryParams;

pub const DEFAULT_DATASET: &str = "hinc_signals";
const HISTORICAL_SCENARIO: &str = "historical";

/// A read query against the signals dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalQuery {
    /// Monthly mean and standard deviation over the whole historical record.
    Historical,
    /// Monthly mean and sample count for one projected year.
    Projection(QueryParams),
}

impl SignalQuery {
    /// Renders the statement against `dataset`.
    ///
    /// The scenario comes from a closed enum and the year is an integer, so
    /// neither can inject SQL.
    pub fn sql(&self, dataset: &str) -> String {
        match self {
            SignalQuery::Historical => format!(
                "SELECT month, AVG(metric), STDDEV(metric) from {dataset} \
                 WHERE scenario = '{HISTORICAL_SCENARIO}' GROUP BY(month) ORDER BY(month)"
            ),
            SignalQuery::Projection(params) => format!(
                "SELECT month, AVG(metric), COUNT(metric) from {dataset} \
                 WHERE year = {} AND scenario = '{}' GROUP BY(month)",
                params.year,
                params.scenario.value()
            ),
        }
    }

    pub(crate) fn cache_file_name(&self, dataset: &str) -> String {
        match self {
            SignalQuery::Historical => format!("{HISTORICAL_SCENARIO}-{dataset}.bin"),
            SignalQuery::Projection(params) => format!(
                "{}-{}-{dataset}.bin",
                params.scenario.value(),
                params.year
            ),
        }
    }
}

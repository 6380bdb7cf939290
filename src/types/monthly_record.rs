use serde::{Deserialize, Serialize};

/// One aggregated row returned by the data service, grouped by calendar month.
///
/// Historical rows carry `stddev`, scenario rows carry `count`. Every numeric
/// field is optional: the service returns `null` for empty aggregates and a
/// missing column is tolerated rather than failing the whole response.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MonthlyRecord {
    #[serde(default)]
    pub month: u32, // 1-12
    #[serde(default)]
    pub avg: Option<f64>,
    #[serde(default)]
    pub stddev: Option<f64>,
    #[serde(default)]
    pub count: Option<i64>,
}

impl MonthlyRecord {
    /// A historical row: monthly mean and standard deviation.
    pub fn historical(month: u32, avg: f64, stddev: f64) -> Self {
        Self {
            month,
            avg: Some(avg),
            stddev: Some(stddev),
            count: None,
        }
    }

    /// A projected row: monthly mean and the number of samples behind it.
    pub fn projected(month: u32, avg: f64, count: i64) -> Self {
        Self {
            month,
            avg: Some(avg),
            stddev: None,
            count: Some(count),
        }
    }
}

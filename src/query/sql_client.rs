use crate::query::error::QueryError;
use crate::types::monthly_record::MonthlyRecord;
use log::{debug, warn};
use reqwest::Client;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub const DEFAULT_ENDPOINT: &str = "https://cervest-science.carto.com/api/v2/sql";

#[derive(Debug, Deserialize)]
struct SqlResponse {
    #[serde(default)]
    rows: Vec<WireRow>,
}

/// A row as the service sends it. A value of the wrong JSON type (a string
/// avg, a fractional count) reads as missing instead of failing the response.
#[derive(Debug, Deserialize)]
struct WireRow {
    #[serde(default, deserialize_with = "lenient_u32")]
    month: Option<u32>,
    #[serde(default, deserialize_with = "lenient_f64")]
    avg: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    stddev: Option<f64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    count: Option<i64>,
}

impl From<WireRow> for MonthlyRecord {
    fn from(row: WireRow) -> Self {
        Self {
            month: row.month.unwrap_or_default(),
            avg: row.avg,
            stddev: row.stddev,
            count: row.count,
        }
    }
}

fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(Value::deserialize(deserializer)?.as_f64())
}

fn lenient_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
            .map(|f| f as i64)
    }))
}

fn lenient_u32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    Ok(lenient_i64(deserializer)?.and_then(|m| u32::try_from(m).ok()))
}

#[derive(Debug, Default, Deserialize)]
struct SqlErrorBody {
    #[serde(default)]
    error: Vec<String>,
}

/// Thin client for a SQL-over-HTTP endpoint that answers `GET ?q=<sql>`
/// with `{"rows": [...]}`.
#[derive(Debug, Clone)]
pub struct SqlClient {
    endpoint: String,
    http: Client,
}

impl SqlClient {
    pub fn new(endpoint: impl Into<String>, http: Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            http,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Runs `sql` and decodes the returned rows.
    ///
    /// A body without a `rows` key yields an empty row set.
    pub async fn rows(&self, sql: &str) -> Result<Vec<MonthlyRecord>, QueryError> {
        debug!("Querying {}: {}", self.endpoint, sql);

        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("q", sql)])
            .send()
            .await
            .map_err(|e| QueryError::NetworkRequest(self.endpoint.clone(), e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let messages = serde_json::from_str::<SqlErrorBody>(&body)
                .unwrap_or_default()
                .error;
            warn!(
                "HTTP error {} for {}: {}",
                status,
                self.endpoint,
                messages.join("; ")
            );
            return Err(QueryError::Service {
                url: self.endpoint.clone(),
                status,
                messages,
            });
        }

        let body: SqlResponse = response
            .json()
            .await
            .map_err(|e| QueryError::Decode(self.endpoint.clone(), e))?;
        Ok(body.rows.into_iter().map(MonthlyRecord::from).collect())
    }
}

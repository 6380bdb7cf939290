use crate::query::error::QueryError;
use crate::query::row_cache::RowCache;
use crate::query::signal_query::SignalQuery;
use crate::query::sql_client::SqlClient;
use crate::types::monthly_record::MonthlyRecord;
use crate::types::query_params::QueryParams;
use crate::types::scenario_rows::ScenarioRows;
use log::{info, warn};

/// Issues the historical and projection queries for one request.
#[derive(Debug, Clone)]
pub struct ScenarioFetcher {
    sql: SqlClient,
    dataset: String,
    cache: Option<RowCache>,
}

impl ScenarioFetcher {
    pub fn new(sql: SqlClient, dataset: impl Into<String>, cache: Option<RowCache>) -> Self {
        Self {
            sql,
            dataset: dataset.into(),
            cache,
        }
    }

    pub fn dataset(&self) -> &str {
        &self.dataset
    }

    pub fn cache(&self) -> Option<&RowCache> {
        self.cache.as_ref()
    }

    /// Runs both queries concurrently and returns once both have completed.
    /// If either fails the whole fetch fails.
    pub async fn fetch(&self, params: &QueryParams) -> Result<ScenarioRows, QueryError> {
        info!(
            "Fetching historical and {} rows from {} ({})",
            params,
            self.dataset,
            self.sql.endpoint()
        );
        let (historical_data, rcp_data) = tokio::try_join!(
            self.rows(SignalQuery::Historical),
            self.rows(SignalQuery::Projection(*params)),
        )?;
        Ok(ScenarioRows {
            historical_data,
            rcp_data,
        })
    }

    async fn rows(&self, query: SignalQuery) -> Result<Vec<MonthlyRecord>, QueryError> {
        let file_name = query.cache_file_name(&self.dataset);

        if let Some(cache) = &self.cache {
            match cache.get(&file_name).await {
                Ok(Some(rows)) => {
                    info!("Cache hit for {} in {:?}", file_name, cache.dir());
                    return Ok(rows);
                }
                Ok(None) => warn!("Cache miss for {}. Querying service.", file_name),
                // An unreadable file is refetched and overwritten below.
                Err(QueryError::CacheDecode(path, e)) => warn!(
                    "Discarding unreadable cache file {:?} ({}). Querying service.",
                    path, e
                ),
                Err(e) => return Err(e),
            }
        }

        let rows = self.sql.rows(&query.sql(&self.dataset)).await?;

        if let Some(cache) = &self.cache {
            cache.put(&file_name, &rows).await?;
        }
        Ok(rows)
    }
}

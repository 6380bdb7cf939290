//! Main entry point: a client that fetches historical and projected signals
//! from the data service and turns them into an [`AssetRiskReport`].

use crate::error::ClimateRiskError;
use crate::query::fetcher::ScenarioFetcher;
use crate::query::row_cache::RowCache;
use crate::query::signal_query::DEFAULT_DATASET;
use crate::query::sql_client::{SqlClient, DEFAULT_ENDPOINT};
use crate::report::AssetRiskReport;
use crate::transform::transform;
use crate::types::query_params::QueryParams;
use crate::types::scenario::Scenario;
use crate::types::scenario_rows::ScenarioRows;
use crate::utils::{ensure_cache_dir_exists, get_cache_dir};
use bon::bon;
use reqwest::Client;
use std::path::PathBuf;

/// Client for the climate signals service.
///
/// Create one with [`ClimateRisk::new()`] for the public endpoint without
/// caching, [`ClimateRisk::with_default_cache()`] to keep row sets in the user
/// cache directory, or [`ClimateRisk::builder()`] for full control.
///
/// # Examples
///
/// ```no_run
/// # use climate_risk::{ClimateRisk, ClimateRiskError, Scenario};
/// # #[tokio::main]
/// # async fn main() -> Result<(), ClimateRiskError> {
/// let client = ClimateRisk::new();
/// let report = client
///     .asset_risk()
///     .year(2050)
///     .scenario(Scenario::Rcp85)
///     .call()
///     .await?;
/// println!("{}", report.sentence());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ClimateRisk {
    fetcher: ScenarioFetcher,
}

impl Default for ClimateRisk {
    fn default() -> Self {
        Self::new()
    }
}

#[bon]
impl ClimateRisk {
    /// A client for the public endpoint and default dataset, without caching.
    pub fn new() -> Self {
        Self {
            fetcher: ScenarioFetcher::new(
                SqlClient::new(DEFAULT_ENDPOINT, Client::new()),
                DEFAULT_DATASET,
                None,
            ),
        }
    }

    /// A client that caches row sets under the system cache directory
    /// (e.g. `~/.cache/climate_risk_cache` on Linux).
    ///
    /// # Errors
    ///
    /// Returns [`ClimateRiskError::CacheDirResolution`] if the system cache
    /// directory cannot be found and [`ClimateRiskError::CacheDirCreation`] if
    /// it cannot be created.
    pub async fn with_default_cache() -> Result<Self, ClimateRiskError> {
        let cache_folder = get_cache_dir().map_err(ClimateRiskError::CacheDirResolution)?;
        Self::builder().cache_folder(cache_folder).build().await
    }

    /// Builds a client from explicit settings.
    ///
    /// * `.endpoint(..)`: SQL-over-HTTP endpoint. Defaults to the public Carto endpoint.
    /// * `.dataset(..)`: table queried. Defaults to `hinc_signals`.
    /// * `.http_client(reqwest::Client)`: client used for every request, e.g. one
    ///   with a timeout or proxy configured.
    /// * `.cache_folder(PathBuf)`: directory for cached row sets. Without it every
    ///   call goes to the network.
    ///
    /// ```no_run
    /// # use climate_risk::{ClimateRisk, ClimateRiskError};
    /// # async fn run() -> Result<(), ClimateRiskError> {
    /// let client = ClimateRisk::builder()
    ///     .endpoint("https://example.carto.com/api/v2/sql")
    ///     .dataset("hinc_signals")
    ///     .cache_folder(std::env::temp_dir().join("climate_risk"))
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    #[builder(start_fn = builder, finish_fn = build)]
    #[doc(hidden)]
    pub async fn from_settings(
        #[builder(into)] endpoint: Option<String>,
        #[builder(into)] dataset: Option<String>,
        http_client: Option<Client>,
        cache_folder: Option<PathBuf>,
    ) -> Result<Self, ClimateRiskError> {
        let cache = match cache_folder {
            Some(folder) => {
                ensure_cache_dir_exists(&folder)
                    .await
                    .map_err(|e| ClimateRiskError::CacheDirCreation(folder.clone(), e))?;
                Some(RowCache::new(&folder))
            }
            None => None,
        };

        let sql = SqlClient::new(
            endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            http_client.unwrap_or_default(),
        );
        Ok(Self {
            fetcher: ScenarioFetcher::new(
                sql,
                dataset.unwrap_or_else(|| DEFAULT_DATASET.to_string()),
                cache,
            ),
        })
    }

    /// Fetches and transforms the data for one year and scenario.
    ///
    /// * `.year(i32)`: **Required.** Projection year.
    /// * `.scenario(Scenario)`: **Required.** Emissions pathway.
    ///
    /// # Errors
    ///
    /// Returns [`ClimateRiskError::Query`] if either query fails.
    #[builder]
    pub async fn asset_risk(
        &self,
        year: i32,
        scenario: Scenario,
    ) -> Result<AssetRiskReport, ClimateRiskError> {
        self.report(QueryParams::new(year, scenario)).await
    }

    /// Same as [`ClimateRisk::asset_risk`], taking the parameters as one value.
    pub async fn report(&self, params: QueryParams) -> Result<AssetRiskReport, ClimateRiskError> {
        let rows = self.fetch(&params).await?;
        Ok(AssetRiskReport::new(
            params,
            transform(&rows.historical_data, &rows.rcp_data),
        ))
    }

    /// Fetches the raw historical and projected rows without transforming them.
    pub async fn fetch(&self, params: &QueryParams) -> Result<ScenarioRows, ClimateRiskError> {
        self.fetcher.fetch(params).await.map_err(ClimateRiskError::from)
    }

    /// Deletes cached row sets. Does nothing when caching is off.
    pub async fn clear_cache(&self) -> Result<(), ClimateRiskError> {
        if let Some(cache) = self.fetcher.cache() {
            cache.clear().await?;
        }
        Ok(())
    }

    pub fn dataset(&self) -> &str {
        self.fetcher.dataset()
    }
}

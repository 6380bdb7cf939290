pub mod error;
pub mod fetcher;
pub mod row_cache;
pub mod signal_query;
pub mod sql_client;

pub mod asset_risk;
pub mod monthly_record;
pub mod query_params;
pub mod scenario;
pub mod scenario_rows;

pub mod config;
pub mod filters;
pub mod generator;
pub mod reconcile;

pub use config::{
    CuisineDistribution, PlanRequest, PlannerConfig, DEFAULT_BUSY_TIME_LIMIT,
    DEFAULT_DAILY_TIME_LIMIT, REFERENCE_HOUSEHOLD,
};
pub use filters::{filter_by_diet_mode, filter_by_time_limit};
pub use generator::MenuPlanner;
pub use reconcile::{apply_inventory, scaled_amount, InventoryLedger};

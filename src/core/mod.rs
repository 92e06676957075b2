pub mod config;
pub mod normalize;
pub mod planner;

pub use config::{AppConfig, Credential};
pub use normalize::{normalize_document, normalize_response, Normalized};
pub use planner::TravelPlanner;

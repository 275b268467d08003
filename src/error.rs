use thiserror::Error;

use crate::models::TableFamily;

/// Error type for dive planning, table lookups and gas calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlannerError {
    #[error("no dive segments provided")]
    NoSegments,

    #[error("invalid segment {index}: {reason}")]
    InvalidSegment { index: u32, reason: String },

    #[error("invalid gas: {0}")]
    InvalidGas(String),

    #[error("invalid gas notation at position {position}: {message}")]
    InvalidGasNotation { position: u32, message: String },

    #[error("invalid planner options: {0}")]
    InvalidOptions(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("depth {depth_m} m is not covered by the reference tables (deepest {max_depth_m} m)")]
    UnsupportedDepth { depth_m: f64, max_depth_m: u32 },

    #[error("table family {0} is not implemented")]
    UnsupportedTableFamily(TableFamily),

    #[error(
        "bottom time {duration_min} min exceeds the {depth_m} m table (longest entry {max_duration_min} min)"
    )]
    DurationExceedsTable {
        depth_m: u32,
        duration_min: f64,
        max_duration_min: u32,
    },

    #[error("consumption rate must be positive, got {0} L/min")]
    InvalidConsumptionRate(f64),
}

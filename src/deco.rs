//! Decompression stop composition.
//!
//! Turns a table row into the ordered stop segments a diver follows on the
//! way up: the named 15/12/9/6 m stops, deepest first, then one 3 m stop
//! holding whatever part of the total decompression the named stops leave.

use crate::models::{DiveSegment, Gas};
use crate::tables::TableEntry;

/// Depth (m) of the final stop that absorbs the residual decompression time.
pub const RESIDUAL_STOP_DEPTH_M: f64 = 3.0;

/// Gases breathed at the composed stops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopGases {
    /// Gas at the named 15/12/9/6 m stops
    pub named: Gas,
    /// Gas at the 3 m residual stop
    pub shallow: Gas,
}

/// Expand a table row into stop segments, deepest first.
///
/// Stop durations always sum to `entry.total_deco_min`. A row without
/// decompression yields no stops.
pub fn compose_stops(entry: &TableEntry, gases: &StopGases) -> Vec<DiveSegment> {
    if entry.total_deco_min == 0 {
        return Vec::new();
    }

    let mut stops: Vec<DiveSegment> = entry
        .named_stops()
        .map(|(depth_m, minutes)| {
            DiveSegment::flat(f64::from(depth_m), f64::from(minutes), gases.named)
        })
        .collect();

    let residual_min = entry
        .total_deco_min
        .saturating_sub(entry.named_stop_total_min());
    if residual_min > 0 {
        stops.push(DiveSegment::flat(
            RESIDUAL_STOP_DEPTH_M,
            f64::from(residual_min),
            gases.shallow,
        ));
    }

    stops
}

/// Sum of stop durations (min).
pub fn total_stop_time_min(stops: &[DiveSegment]) -> f64 {
    stops.iter().map(|s| s.duration_min).sum()
}

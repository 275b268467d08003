//! Reference decompression tables and the lookup engine.
//!
//! Each table family is a set of [`DepthTable`]s, one per reference depth.
//! A lookup rounds the requested depth up to the next reference depth and
//! picks the first row whose bottom time is not shorter than the requested
//! one. Nothing here falls back to a "no decompression" answer: every input
//! the tables cannot answer is reported as an error.

mod dciem;
pub mod repetitive;

use crate::deco::{compose_stops, StopGases};
use crate::error::PlannerError;
use crate::gas::AIR;
use crate::models::{DiveTableResult, TableFamily};

/// Depths (m) of the named decompression stops, deepest first.
pub const NAMED_STOP_DEPTHS_M: [u32; 4] = [15, 12, 9, 6];

/// Depths below this use the shallowest table.
const MIN_REFERENCE_DEPTH_M: u32 = 6;

pub(crate) const NO_STOPS: [u32; 4] = [0; 4];

/// One row of a depth table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableEntry {
    /// Bottom-time breakpoint (min)
    pub bottom_time_min: u32,
    /// Repetitive group letter, or "NRG"
    pub group: &'static str,
    /// Total decompression time (min)
    pub total_deco_min: u32,
    /// Stop durations (min) at 15, 12, 9 and 6 m; 0 means no stop
    pub stops_min: [u32; 4],
}

impl TableEntry {
    /// Named stops with a positive duration, as `(depth_m, minutes)`, deepest first.
    pub fn named_stops(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        NAMED_STOP_DEPTHS_M
            .iter()
            .copied()
            .zip(self.stops_min.iter().copied())
            .filter(|&(_, minutes)| minutes > 0)
    }

    pub fn named_stop_total_min(&self) -> u32 {
        self.stops_min.iter().sum()
    }
}

pub(crate) const fn row(
    bottom_time_min: u32,
    group: &'static str,
    total_deco_min: u32,
    stops_min: [u32; 4],
) -> TableEntry {
    TableEntry {
        bottom_time_min,
        group,
        total_deco_min,
        stops_min,
    }
}

/// All rows for one reference depth, sorted by bottom time.
#[derive(Debug, Clone, Copy)]
pub struct DepthTable {
    pub depth_m: u32,
    pub entries: &'static [TableEntry],
}

impl DepthTable {
    /// Ceiling match on bottom time. Returns the entry and whether the
    /// requested time ran past the last row.
    pub fn entry_for(&self, duration_min: f64) -> Option<(&'static TableEntry, bool)> {
        let entries = self.entries;
        match entries
            .iter()
            .find(|e| duration_min <= f64::from(e.bottom_time_min))
        {
            Some(entry) => Some((entry, false)),
            None => entries.last().map(|entry| (entry, true)),
        }
    }

    pub fn max_bottom_time_min(&self) -> u32 {
        self.entries.last().map(|e| e.bottom_time_min).unwrap_or(0)
    }
}

/// Depth tables of a family, shallowest first.
pub fn tables_for(family: TableFamily) -> Result<&'static [DepthTable], PlannerError> {
    match family {
        TableFamily::Dciem => Ok(&dciem::DCIEM_TABLES),
        TableFamily::UsNavy | TableFamily::Recreational => {
            Err(PlannerError::UnsupportedTableFamily(family))
        }
    }
}

/// A table row selected for a (depth, bottom time) pair.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedEntry {
    pub reference_depth_m: u32,
    pub entry: &'static TableEntry,
    pub exceeds_table_range: bool,
    pub max_bottom_time_min: u32,
}

/// Select the table row for `depth_m` and `duration_min`.
pub fn resolve(
    depth_m: f64,
    duration_min: f64,
    family: TableFamily,
) -> Result<ResolvedEntry, PlannerError> {
    if !depth_m.is_finite() || depth_m < 0.0 {
        return Err(PlannerError::InvalidInput(format!(
            "depth must be a non-negative number of meters, got {depth_m}"
        )));
    }
    if !duration_min.is_finite() || duration_min <= 0.0 {
        return Err(PlannerError::InvalidInput(format!(
            "bottom time must be positive, got {duration_min}"
        )));
    }

    let tables = tables_for(family)?;
    let table = table_for_depth(tables, depth_m)?;
    let (entry, exceeds_table_range) = table.entry_for(duration_min).ok_or(
        PlannerError::UnsupportedDepth {
            depth_m,
            max_depth_m: table.depth_m,
        },
    )?;

    if exceeds_table_range {
        tracing::warn!(
            family = %family,
            reference_depth_m = table.depth_m,
            duration_min,
            max_bottom_time_min = table.max_bottom_time_min(),
            "bottom time exceeds table, clamped to longest entry"
        );
    }
    tracing::debug!(
        family = %family,
        depth_m,
        duration_min,
        reference_depth_m = table.depth_m,
        breakpoint_min = entry.bottom_time_min,
        group = entry.group,
        total_deco_min = entry.total_deco_min,
        "resolved table entry"
    );

    Ok(ResolvedEntry {
        reference_depth_m: table.depth_m,
        entry,
        exceeds_table_range,
        max_bottom_time_min: table.max_bottom_time_min(),
    })
}

fn table_for_depth(
    tables: &'static [DepthTable],
    depth_m: f64,
) -> Result<&'static DepthTable, PlannerError> {
    let deepest = tables.last().map(|t| t.depth_m).unwrap_or(0);
    // Anything deeper than the deepest table cannot round into it.
    if depth_m > f64::from(deepest) {
        return Err(PlannerError::UnsupportedDepth {
            depth_m,
            max_depth_m: deepest,
        });
    }
    let rounded = if depth_m < f64::from(MIN_REFERENCE_DEPTH_M) {
        MIN_REFERENCE_DEPTH_M
    } else {
        depth_m.ceil() as u32
    };
    tables
        .iter()
        .find(|t| t.depth_m >= rounded)
        .ok_or(PlannerError::UnsupportedDepth {
            depth_m,
            max_depth_m: deepest,
        })
}

/// Look up a dive in a table family.
///
/// The returned stops use air at the named depths and at the 3 m residual
/// stop; [`crate::planner::plan`] substitutes the diver's gases.
pub fn lookup(
    depth_m: f64,
    duration_min: f64,
    family: TableFamily,
) -> Result<DiveTableResult, PlannerError> {
    let resolved = resolve(depth_m, duration_min, family)?;
    let gases = StopGases {
        named: AIR,
        shallow: AIR,
    };
    Ok(DiveTableResult {
        reference_depth_m: resolved.reference_depth_m,
        breakpoint_min: resolved.entry.bottom_time_min,
        residual_group: resolved.entry.group.to_string(),
        total_deco_min: resolved.entry.total_deco_min,
        decompression_stops: compose_stops(resolved.entry, &gases),
        exceeds_table_range: resolved.exceeds_table_range,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DiveSegment;

    fn dciem() -> &'static [DepthTable] {
        tables_for(TableFamily::Dciem).unwrap()
    }

    fn stop_pairs(stops: &[DiveSegment]) -> Vec<(f64, f64)> {
        stops
            .iter()
            .map(|s| (s.start_depth_m, s.duration_min))
            .collect()
    }

    #[test]
    fn test_dciem_reference_depths() {
        let depths: Vec<u32> = dciem().iter().map(|t| t.depth_m).collect();
        assert_eq!(
            depths,
            vec![6, 9, 12, 15, 18, 21, 24, 27, 30, 33, 36, 39, 42, 45, 48]
        );
    }

    #[test]
    fn test_dciem_breakpoints_strictly_increasing() {
        for table in dciem() {
            assert!(!table.entries.is_empty(), "{} m table is empty", table.depth_m);
            for pair in table.entries.windows(2) {
                assert!(
                    pair[0].bottom_time_min < pair[1].bottom_time_min,
                    "{} m: breakpoints {} and {} out of order",
                    table.depth_m,
                    pair[0].bottom_time_min,
                    pair[1].bottom_time_min
                );
            }
        }
    }

    #[test]
    fn test_dciem_total_deco_monotonic() {
        for table in dciem() {
            for pair in table.entries.windows(2) {
                assert!(
                    pair[0].total_deco_min <= pair[1].total_deco_min,
                    "{} m: total deco drops from {} to {} between {} and {} min",
                    table.depth_m,
                    pair[0].total_deco_min,
                    pair[1].total_deco_min,
                    pair[0].bottom_time_min,
                    pair[1].bottom_time_min
                );
            }
        }
    }

    #[test]
    fn test_dciem_named_stops_fit_total() {
        for table in dciem() {
            for entry in table.entries {
                assert!(
                    entry.named_stop_total_min() <= entry.total_deco_min,
                    "{} m / {} min: named stops {} exceed total {}",
                    table.depth_m,
                    entry.bottom_time_min,
                    entry.named_stop_total_min(),
                    entry.total_deco_min
                );
            }
        }
    }

    #[test]
    fn test_lookup_exact_fixture_18m_60min() {
        let result = lookup(18.0, 60.0, TableFamily::Dciem).unwrap();
        assert_eq!(result.reference_depth_m, 18);
        assert_eq!(result.breakpoint_min, 60);
        assert_eq!(result.residual_group, "I");
        assert_eq!(result.total_deco_min, 5);
        assert_eq!(stop_pairs(&result.decompression_stops), vec![(6.0, 5.0)]);
        assert!(!result.exceeds_table_range);
    }

    #[test]
    fn test_lookup_exact_fixture_30m_60min() {
        let result = lookup(30.0, 60.0, TableFamily::Dciem).unwrap();
        assert_eq!(result.residual_group, "NRG");
        assert_eq!(result.total_deco_min, 55);
        assert_eq!(
            stop_pairs(&result.decompression_stops),
            vec![(9.0, 6.0), (6.0, 9.0), (3.0, 40.0)]
        );
    }

    #[test]
    fn test_lookup_exact_fixture_30m_30min() {
        let result = lookup(30.0, 30.0, TableFamily::Dciem).unwrap();
        assert_eq!(result.residual_group, "G");
        assert_eq!(result.total_deco_min, 15);
        assert_eq!(
            stop_pairs(&result.decompression_stops),
            vec![(6.0, 5.0), (3.0, 10.0)]
        );
    }

    #[test]
    fn test_lookup_ceiling_between_breakpoints() {
        for table in dciem() {
            for pair in table.entries.windows(2) {
                let (lower, upper) = (pair[0].bottom_time_min, pair[1].bottom_time_min);
                for duration in [f64::from(lower) + 0.5, f64::from(upper) - 0.5] {
                    let resolved =
                        resolve(f64::from(table.depth_m), duration, TableFamily::Dciem).unwrap();
                    assert_eq!(
                        resolved.entry.bottom_time_min, upper,
                        "{} m / {} min should use the {} min row",
                        table.depth_m, duration, upper
                    );
                }
            }
        }
    }

    #[test]
    fn test_lookup_short_dive_uses_first_row() {
        let resolved = resolve(30.0, 1.0, TableFamily::Dciem).unwrap();
        assert_eq!(resolved.entry.bottom_time_min, 5);
        assert_eq!(resolved.entry.group, "A");
    }

    #[test]
    fn test_lookup_shallow_depth_clamps_to_6m() {
        let result = lookup(3.5, 45.0, TableFamily::Dciem).unwrap();
        assert_eq!(result.reference_depth_m, 6);
        assert_eq!(result.breakpoint_min, 60);
        assert_eq!(result.residual_group, "B");
        assert_eq!(result.total_deco_min, 1);

        let result = lookup(0.0, 10.0, TableFamily::Dciem).unwrap();
        assert_eq!(result.reference_depth_m, 6);
    }

    #[test]
    fn test_lookup_depth_rounds_up_to_next_table() {
        assert_eq!(lookup(18.2, 20.0, TableFamily::Dciem).unwrap().reference_depth_m, 21);
        assert_eq!(lookup(19.0, 20.0, TableFamily::Dciem).unwrap().reference_depth_m, 21);
        assert_eq!(lookup(6.01, 20.0, TableFamily::Dciem).unwrap().reference_depth_m, 9);
        assert_eq!(lookup(47.5, 20.0, TableFamily::Dciem).unwrap().reference_depth_m, 48);
        assert_eq!(lookup(48.0, 20.0, TableFamily::Dciem).unwrap().reference_depth_m, 48);
    }

    #[test]
    fn test_lookup_depth_beyond_tables() {
        assert_eq!(
            lookup(48.5, 20.0, TableFamily::Dciem),
            Err(PlannerError::UnsupportedDepth {
                depth_m: 48.5,
                max_depth_m: 48,
            })
        );
        assert!(matches!(
            lookup(60.0, 10.0, TableFamily::Dciem),
            Err(PlannerError::UnsupportedDepth { .. })
        ));
    }

    #[test]
    fn test_lookup_duration_beyond_table_is_flagged() {
        let result = lookup(30.0, 150.0, TableFamily::Dciem).unwrap();
        assert!(result.exceeds_table_range);
        assert_eq!(result.breakpoint_min, 110);
        assert_eq!(result.total_deco_min, 158);
    }

    #[test]
    fn test_lookup_zero_deco_row_has_no_stops() {
        let result = lookup(21.0, 10.0, TableFamily::Dciem).unwrap();
        assert_eq!(result.residual_group, "A");
        assert_eq!(result.total_deco_min, 0);
        assert!(result.decompression_stops.is_empty());
    }

    #[test]
    fn test_lookup_unimplemented_families() {
        assert_eq!(
            lookup(18.0, 30.0, TableFamily::UsNavy),
            Err(PlannerError::UnsupportedTableFamily(TableFamily::UsNavy))
        );
        assert_eq!(
            lookup(18.0, 30.0, TableFamily::Recreational),
            Err(PlannerError::UnsupportedTableFamily(TableFamily::Recreational))
        );
    }

    #[test]
    fn test_lookup_rejects_invalid_input() {
        assert!(matches!(
            lookup(-1.0, 30.0, TableFamily::Dciem),
            Err(PlannerError::InvalidInput(_))
        ));
        assert!(matches!(
            lookup(18.0, 0.0, TableFamily::Dciem),
            Err(PlannerError::InvalidInput(_))
        ));
        assert!(matches!(
            lookup(f64::NAN, 30.0, TableFamily::Dciem),
            Err(PlannerError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_every_lookup_stop_total_matches_table() {
        for table in dciem() {
            for entry in table.entries {
                let result = lookup(
                    f64::from(table.depth_m),
                    f64::from(entry.bottom_time_min),
                    TableFamily::Dciem,
                )
                .unwrap();
                let total: f64 = result.decompression_stops.iter().map(|s| s.duration_min).sum();
                assert_eq!(total, f64::from(entry.total_deco_min));
                assert_eq!(result.breakpoint_min, entry.bottom_time_min);
            }
        }
    }
}

//! DCIEM repetitive-dive support.
//!
//! A residual group and the surface interval give a repetitive factor; the
//! factor and the next dive's depth give the no-decompression limit for that
//! repetitive dive.

use serde::{Deserialize, Serialize};

use crate::error::PlannerError;

/// Group code for exposures that allow no repetitive dive.
pub const NO_REPETITIVE_GROUP: &str = "NRG";

/// Surface intervals shorter than this count as one continuous dive.
const MIN_SURFACE_INTERVAL_MIN: u32 = 15;

/// Surface intervals longer than this leave no residual nitrogen.
const MAX_SURFACE_INTERVAL_MIN: u32 = 18 * 60;

/// Lower bound (min) of each surface-interval column:
/// 0:15, 0:30, 1:00, 1:30, 2:00, 3:00, 4:00, 6:00, 9:00, 12:00, 15:00.
const INTERVAL_STARTS_MIN: [u32; 11] = [15, 30, 60, 90, 120, 180, 240, 360, 540, 720, 900];

const NRD: Option<f64> = None;

/// Repetitive factor per residual group and surface-interval column.
/// `None` means no repetitive dive is allowed.
static REPETITIVE_FACTORS: [(&str, [Option<f64>; 11]); 15] = [
    ("A", [Some(1.4), Some(1.2), Some(1.1), Some(1.1), Some(1.1), Some(1.1), Some(1.1), Some(1.1), Some(1.0), Some(1.0), Some(1.0)]),
    ("B", [Some(1.5), Some(1.3), Some(1.2), Some(1.2), Some(1.2), Some(1.1), Some(1.1), Some(1.1), Some(1.0), Some(1.0), Some(1.0)]),
    ("C", [Some(1.6), Some(1.4), Some(1.3), Some(1.2), Some(1.2), Some(1.2), Some(1.1), Some(1.1), Some(1.1), Some(1.0), Some(1.0)]),
    ("D", [Some(1.8), Some(1.5), Some(1.3), Some(1.2), Some(1.2), Some(1.2), Some(1.1), Some(1.1), Some(1.1), Some(1.1), Some(1.0)]),
    ("E", [Some(1.9), Some(1.6), Some(1.5), Some(1.4), Some(1.3), Some(1.2), Some(1.2), Some(1.2), Some(1.1), Some(1.1), Some(1.1)]),
    ("F", [Some(2.0), Some(1.7), Some(1.6), Some(1.5), Some(1.4), Some(1.3), Some(1.3), Some(1.2), Some(1.2), Some(1.1), Some(1.1)]),
    ("G", [NRD, Some(1.9), Some(1.7), Some(1.6), Some(1.5), Some(1.4), Some(1.3), Some(1.2), Some(1.1), Some(1.1), Some(1.0)]),
    ("H", [NRD, NRD, NRD, Some(1.9), Some(1.7), Some(1.6), Some(1.5), Some(1.4), Some(1.3), Some(1.1), Some(1.1)]),
    ("I", [NRD, NRD, NRD, Some(2.0), Some(1.8), Some(1.7), Some(1.5), Some(1.4), Some(1.3), Some(1.1), Some(1.1)]),
    ("J", [NRD, NRD, NRD, NRD, Some(1.9), Some(1.8), Some(1.6), Some(1.5), Some(1.3), Some(1.2), Some(1.1)]),
    ("K", [NRD, NRD, NRD, Some(2.0), Some(1.9), Some(1.7), Some(1.5), Some(1.3), Some(1.2), Some(1.1), Some(1.1)]),
    ("L", [NRD, NRD, NRD, NRD, Some(2.0), Some(1.7), Some(1.6), Some(1.4), Some(1.2), Some(1.1), Some(1.1)]),
    ("M", [NRD, NRD, NRD, NRD, NRD, Some(1.8), Some(1.6), Some(1.4), Some(1.2), Some(1.1), Some(1.1)]),
    ("N", [NRD, NRD, NRD, NRD, NRD, Some(1.9), Some(1.7), Some(1.4), Some(1.2), Some(1.1), Some(1.1)]),
    ("O", [NRD, NRD, NRD, NRD, NRD, Some(2.0), Some(1.7), Some(1.4), Some(1.2), Some(1.1), Some(1.1)]),
];

/// Repetitive factor columns, in tenths: 1.1 to 2.0.
const MIN_FACTOR_TENTHS: u32 = 11;
const MAX_FACTOR_TENTHS: u32 = 20;

/// No-decompression limit (min) of a repetitive dive per reference depth,
/// for factors 1.1 to 2.0.
static REPETITIVE_NO_DECO_LIMITS: [(u32, [u32; 10]); 13] = [
    (9, [272, 250, 230, 214, 200, 187, 176, 166, 157, 150]),
    (12, [136, 125, 115, 107, 100, 93, 88, 83, 78, 75]),
    (15, [60, 55, 50, 45, 41, 38, 36, 34, 32, 31]),
    (18, [40, 35, 31, 29, 27, 26, 24, 23, 22, 21]),
    (21, [30, 25, 21, 19, 18, 17, 16, 15, 14, 13]),
    (24, [20, 16, 15, 14, 13, 12, 12, 11, 11, 11]),
    (27, [16, 14, 12, 11, 10, 9, 9, 8, 8, 7]),
    (30, [13, 11, 11, 10, 9, 8, 7, 7, 7, 6]),
    (33, [10, 9, 8, 7, 6, 6, 6, 5, 5, 5]),
    (36, [9, 7, 6, 6, 5, 5, 5, 5, 5, 4]),
    (39, [7, 6, 6, 5, 5, 5, 5, 5, 5, 4]),
    (42, [6, 5, 5, 4, 4, 4, 4, 3, 3, 3]),
    (45, [5, 5, 4, 4, 4, 3, 3, 3, 3, 2]),
];

/// What a surface interval allows for the next dive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SurfaceIntervalCredit {
    /// Multiply the repetitive dive's bottom time by `value`
    Factor { value: f64 },
    /// Not enough off-gassing for a repetitive dive
    NoRepetitiveDive,
}

/// Repetitive factor after `interval_min` minutes at the surface in `group`.
pub fn surface_interval_credit(
    group: &str,
    interval_min: u32,
) -> Result<SurfaceIntervalCredit, PlannerError> {
    let group = group.trim();
    if group.eq_ignore_ascii_case(NO_REPETITIVE_GROUP) {
        return Ok(SurfaceIntervalCredit::NoRepetitiveDive);
    }

    let (_, factors) = REPETITIVE_FACTORS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(group))
        .ok_or_else(|| {
            PlannerError::InvalidInput(format!("unknown repetitive group '{group}'"))
        })?;

    if interval_min < MIN_SURFACE_INTERVAL_MIN {
        return Err(PlannerError::InvalidInput(format!(
            "surface interval of {interval_min} min is under {MIN_SURFACE_INTERVAL_MIN} min and counts as the same dive"
        )));
    }
    if interval_min > MAX_SURFACE_INTERVAL_MIN {
        return Ok(SurfaceIntervalCredit::Factor { value: 1.0 });
    }

    let column = INTERVAL_STARTS_MIN
        .iter()
        .rposition(|&start| start <= interval_min)
        .unwrap_or(0);

    Ok(match factors[column] {
        Some(value) => SurfaceIntervalCredit::Factor { value },
        None => SurfaceIntervalCredit::NoRepetitiveDive,
    })
}

/// Factor rounded up to the next tenth, as an integer number of tenths.
fn factor_tenths(factor: f64) -> u32 {
    let scaled = factor * 10.0;
    let nearest = scaled.round();
    if (scaled - nearest).abs() < 1e-6 {
        nearest as u32
    } else {
        scaled.ceil() as u32
    }
}

/// No-decompression limit (min) for a repetitive dive to `depth_m` with
/// the given repetitive factor.
pub fn repetitive_no_deco_limit(depth_m: f64, factor: f64) -> Result<u32, PlannerError> {
    if !depth_m.is_finite() || depth_m < 0.0 {
        return Err(PlannerError::InvalidInput(format!(
            "depth must be a non-negative number of meters, got {depth_m}"
        )));
    }
    if !factor.is_finite() || factor < 1.0 {
        return Err(PlannerError::InvalidInput(format!(
            "repetitive factor must be at least 1.0, got {factor}"
        )));
    }

    let tenths = factor_tenths(factor).max(MIN_FACTOR_TENTHS);
    if tenths > MAX_FACTOR_TENTHS {
        return Err(PlannerError::InvalidInput(format!(
            "repetitive factor {factor} is above 2.0"
        )));
    }

    let (_, limits) = REPETITIVE_NO_DECO_LIMITS
        .iter()
        .find(|(reference_m, _)| depth_m <= f64::from(*reference_m))
        .ok_or(PlannerError::UnsupportedDepth {
            depth_m,
            max_depth_m: REPETITIVE_NO_DECO_LIMITS[REPETITIVE_NO_DECO_LIMITS.len() - 1].0,
        })?;

    Ok(limits[(tenths - MIN_FACTOR_TENTHS) as usize])
}

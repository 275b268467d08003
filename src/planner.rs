//! Dive plan aggregation.
//!
//! Validates the caller's profile, resolves the table row for the deepest
//! point and the total bottom time, composes the decompression stops and
//! attaches oxygen exposure and advisory warnings.

use tracing::warn;

use crate::deco::{compose_stops, total_stop_time_min, StopGases};
use crate::error::PlannerError;
use crate::gas::{equivalent_narcotic_depth, AIR};
use crate::models::{DivePlan, DiveResult, DiveSegment, Gas, PlannerOptions};
use crate::oxygen::{peak_ppo2, OxygenExposure};
use crate::tables;

fn validate_segments(segments: &[DiveSegment]) -> Result<(), PlannerError> {
    if segments.is_empty() {
        return Err(PlannerError::NoSegments);
    }

    for (i, segment) in segments.iter().enumerate() {
        let invalid = |reason: String| PlannerError::InvalidSegment {
            index: i as u32,
            reason,
        };

        for (name, depth) in [
            ("start depth", segment.start_depth_m),
            ("end depth", segment.end_depth_m),
        ] {
            if !depth.is_finite() || depth < 0.0 {
                return Err(invalid(format!(
                    "{name} must be a non-negative number of meters, got {depth}"
                )));
            }
        }
        if !segment.duration_min.is_finite() || segment.duration_min <= 0.0 {
            return Err(invalid(format!(
                "duration must be positive, got {}",
                segment.duration_min
            )));
        }
        segment
            .gas
            .validate()
            .map_err(|e| invalid(e.to_string()))?;
    }

    Ok(())
}

/// Distinct gases in first-use order.
fn distinct_gases(segments: &[DiveSegment]) -> Vec<Gas> {
    let mut gases: Vec<Gas> = Vec::new();
    for segment in segments {
        if !gases.contains(&segment.gas) {
            gases.push(segment.gas);
        }
    }
    gases
}

fn collect_warnings(
    segments: &[DiveSegment],
    stops: &[DiveSegment],
    options: &PlannerOptions,
) -> Vec<String> {
    let mut warnings = Vec::new();

    for (i, segment) in segments.iter().enumerate() {
        let ppo2 = peak_ppo2(segment);
        if ppo2 > options.max_ppo2 {
            warnings.push(format!(
                "segment {i}: ppO2 {ppo2:.2} bar exceeds limit of {:.2} bar",
                options.max_ppo2
            ));
        }
        if let Some(mod_m) = segment.gas.mod_m {
            if segment.max_depth_m() > mod_m {
                warnings.push(format!(
                    "segment {i}: depth {:.1} m is below the gas MOD of {mod_m:.1} m",
                    segment.max_depth_m()
                ));
            }
        }
    }

    for stop in stops {
        let ppo2 = peak_ppo2(stop);
        if ppo2 > options.max_deco_ppo2 {
            warnings.push(format!(
                "stop at {:.0} m: ppO2 {ppo2:.2} bar exceeds decompression limit of {:.2} bar",
                stop.start_depth_m, options.max_deco_ppo2
            ));
        }
    }

    warnings
}

/// Plan a dive: decompression stops, totals and oxygen loading.
///
/// The table row is chosen from the deepest point of any segment and the
/// summed duration of all segments. Stops are not counted toward CNS and
/// OTU unless `include_deco_in_oxygen_exposure` is set.
pub fn plan(segments: &[DiveSegment], options: &PlannerOptions) -> Result<DiveResult, PlannerError> {
    validate_segments(segments)?;
    options.validate()?;

    let max_depth_m = segments
        .iter()
        .map(DiveSegment::max_depth_m)
        .fold(0.0_f64, f64::max);
    let bottom_time_min: f64 = segments.iter().map(|s| s.duration_min).sum();

    let resolved = tables::resolve(max_depth_m, bottom_time_min, options.table_type)?;
    if resolved.exceeds_table_range && options.strict_table_range {
        return Err(PlannerError::DurationExceedsTable {
            depth_m: resolved.reference_depth_m,
            duration_min: bottom_time_min,
            max_duration_min: resolved.max_bottom_time_min,
        });
    }

    let gases = StopGases {
        named: options.deco_gas.unwrap_or(AIR),
        shallow: options.shallow_stop_gas.unwrap_or(segments[0].gas),
    };
    let decompression = compose_stops(resolved.entry, &gases);
    let total_time_min = bottom_time_min + total_stop_time_min(&decompression);

    let exposure = if options.include_deco_in_oxygen_exposure {
        OxygenExposure::compute(segments.iter().chain(decompression.iter()))
    } else {
        OxygenExposure::compute(segments)
    };

    let max_end_m = segments
        .iter()
        .max_by(|a, b| a.max_depth_m().total_cmp(&b.max_depth_m()))
        .map_or(0.0, |deepest| {
            equivalent_narcotic_depth(&deepest.gas, deepest.max_depth_m(), options.oxygen_narcotic)
        });

    let mut warnings = collect_warnings(segments, &decompression, options);
    if resolved.exceeds_table_range {
        warnings.push(format!(
            "bottom time {bottom_time_min} min exceeds the {} m table ({} min max); \
             decompression shown for the longest entry",
            resolved.reference_depth_m, resolved.max_bottom_time_min
        ));
    }
    for warning in &warnings {
        warn!(warning = %warning, "dive plan warning");
    }

    Ok(DiveResult {
        plan: DivePlan {
            segments: segments.to_vec(),
            total_time_min,
            max_depth_m,
            gases: distinct_gases(segments),
        },
        decompression,
        cns_percent: exposure.cns_percent,
        otu: exposure.otu,
        table_group: resolved.entry.group.to_string(),
        reference_depth_m: resolved.reference_depth_m,
        breakpoint_min: resolved.entry.bottom_time_min,
        exceeds_table_range: resolved.exceeds_table_range,
        max_end_m,
        warnings,
    })
}

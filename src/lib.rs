pub mod deco;
pub mod error;
pub mod gas;
pub mod models;
pub mod oxygen;
pub mod planner;
pub mod supply;
pub mod tables;
pub mod units;

uniffi::include_scaffolding!("decoplan");

pub use error::PlannerError;
pub use gas::{equivalent_narcotic_depth, max_operating_depth, parse_gas, partial_pressure_o2};
pub use models::{
    DivePlan, DiveResult, DiveSegment, DiveTableResult, Gas, PlannerOptions, TableFamily,
};
pub use supply::{bottom_time_at_depth, calculate_gas_supply, consumption_rates, GasSupply};
pub use tables::repetitive::{
    repetitive_no_deco_limit, surface_interval_credit, SurfaceIntervalCredit,
};
pub use units::{
    bar_to_psi, cubic_feet_to_liters, feet_to_meters, liters_to_cubic_feet, meters_to_feet,
    psi_to_bar,
};

/// Plan a dive from its segments.
pub fn plan_dive(
    segments: Vec<DiveSegment>,
    options: PlannerOptions,
) -> Result<DiveResult, PlannerError> {
    planner::plan(&segments, &options)
}

/// Look up the table row for a single depth and bottom time.
pub fn lookup_table(
    depth_m: f64,
    duration_min: f64,
    family: TableFamily,
) -> Result<DiveTableResult, PlannerError> {
    tables::lookup(depth_m, duration_min, family)
}

pub fn default_planner_options() -> PlannerOptions {
    PlannerOptions::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_dive_matches_planner() {
        let segments = vec![DiveSegment::flat(30.0, 30.0, gas::AIR)];
        let options = default_planner_options();
        assert_eq!(
            plan_dive(segments.clone(), options.clone()),
            planner::plan(&segments, &options)
        );
    }

    #[test]
    fn test_lookup_table_dciem() {
        let result = lookup_table(18.0, 60.0, TableFamily::Dciem).unwrap();
        assert_eq!(result.residual_group, "I");
        assert_eq!(result.total_deco_min, 5);
    }

    #[test]
    fn test_lookup_table_unimplemented_family() {
        assert_eq!(
            lookup_table(18.0, 60.0, TableFamily::Recreational),
            Err(PlannerError::UnsupportedTableFamily(TableFamily::Recreational))
        );
    }
}

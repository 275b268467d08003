//! Gas supply arithmetic: how long a cylinder lasts.

use serde::{Deserialize, Serialize};

use crate::error::PlannerError;

/// Consumption rates (L/min) offered to the user.
const CONSUMPTION_RATE_MIN_LPM: u32 = 10;
const CONSUMPTION_RATE_MAX_LPM: u32 = 120;
const CONSUMPTION_RATE_STEP_LPM: u32 = 10;

/// Share of surface gas time lost at depth, by depth in 5 m steps.
///
/// Rounded values of `1 - 1 / (depth / 10 + 1)`.
const DEPTH_TIME_REDUCTION: [(u32, f64); 11] = [
    (0, 0.0),
    (5, 0.33),
    (10, 0.50),
    (15, 0.60),
    (20, 0.67),
    (25, 0.71),
    (30, 0.75),
    (35, 0.77),
    (40, 0.80),
    (45, 0.82),
    (50, 0.84),
];

/// Available gas for a cylinder fill.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GasSupply {
    /// Free gas volume (L)
    #[serde(rename = "totalVolume")]
    pub total_volume_l: f64,
    /// Whole minutes of gas at the given consumption rate
    #[serde(rename = "availableTime")]
    pub available_time_min: u32,
}

/// Compute free gas volume and time available at a consumption rate.
pub fn calculate_gas_supply(
    volume_l: f64,
    pressure_bar: f64,
    consumption_rate_lpm: f64,
) -> Result<GasSupply, PlannerError> {
    if !consumption_rate_lpm.is_finite() || consumption_rate_lpm <= 0.0 {
        return Err(PlannerError::InvalidConsumptionRate(consumption_rate_lpm));
    }
    if !volume_l.is_finite() || volume_l < 0.0 {
        return Err(PlannerError::InvalidInput(format!(
            "cylinder volume must not be negative, got {volume_l} L"
        )));
    }
    if !pressure_bar.is_finite() || pressure_bar < 0.0 {
        return Err(PlannerError::InvalidInput(format!(
            "cylinder pressure must not be negative, got {pressure_bar} bar"
        )));
    }

    let total_volume_l = volume_l * pressure_bar;
    let available_time_min = (total_volume_l / consumption_rate_lpm).floor() as u32;

    Ok(GasSupply {
        total_volume_l,
        available_time_min,
    })
}

/// Selectable consumption rates, 10 to 120 L/min in steps of 10.
pub fn consumption_rates() -> Vec<u32> {
    (CONSUMPTION_RATE_MIN_LPM..=CONSUMPTION_RATE_MAX_LPM)
        .step_by(CONSUMPTION_RATE_STEP_LPM as usize)
        .collect()
}

/// Minutes of the supply usable at `depth_m`.
///
/// The depth rounds up to the next 5 m step.
pub fn bottom_time_at_depth(supply: &GasSupply, depth_m: f64) -> Result<u32, PlannerError> {
    if !depth_m.is_finite() || depth_m < 0.0 {
        return Err(PlannerError::InvalidInput(format!(
            "depth must be a non-negative number of meters, got {depth_m}"
        )));
    }
    let (_, reduction) = DEPTH_TIME_REDUCTION
        .iter()
        .find(|(step_m, _)| depth_m <= f64::from(*step_m))
        .ok_or(PlannerError::UnsupportedDepth {
            depth_m,
            max_depth_m: DEPTH_TIME_REDUCTION[DEPTH_TIME_REDUCTION.len() - 1].0,
        })?;

    Ok((f64::from(supply.available_time_min) * (1.0 - reduction)).floor() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gas_supply_12l_200bar() {
        let supply = calculate_gas_supply(12.0, 200.0, 20.0).unwrap();
        assert_eq!(supply.total_volume_l, 2400.0);
        assert_eq!(supply.available_time_min, 120);
    }

    #[test]
    fn test_gas_supply_floors_available_time() {
        let supply = calculate_gas_supply(10.0, 200.0, 30.0).unwrap();
        assert_eq!(supply.total_volume_l, 2000.0);
        assert_eq!(supply.available_time_min, 66);
    }

    #[test]
    fn test_gas_supply_empty_cylinder() {
        let supply = calculate_gas_supply(12.0, 0.0, 20.0).unwrap();
        assert_eq!(supply.total_volume_l, 0.0);
        assert_eq!(supply.available_time_min, 0);
    }

    #[test]
    fn test_gas_supply_rejects_non_positive_rate() {
        assert_eq!(
            calculate_gas_supply(12.0, 200.0, 0.0),
            Err(PlannerError::InvalidConsumptionRate(0.0))
        );
        assert_eq!(
            calculate_gas_supply(12.0, 200.0, -5.0),
            Err(PlannerError::InvalidConsumptionRate(-5.0))
        );
    }

    #[test]
    fn test_gas_supply_rejects_negative_inputs() {
        assert!(matches!(
            calculate_gas_supply(-1.0, 200.0, 20.0),
            Err(PlannerError::InvalidInput(_))
        ));
        assert!(matches!(
            calculate_gas_supply(12.0, -200.0, 20.0),
            Err(PlannerError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_consumption_rates() {
        let rates = consumption_rates();
        assert_eq!(rates.len(), 12);
        assert_eq!(rates.first(), Some(&10));
        assert_eq!(rates.last(), Some(&120));
        assert!(rates.windows(2).all(|w| w[1] - w[0] == 10));
    }

    #[test]
    fn test_bottom_time_at_depth() {
        let supply = calculate_gas_supply(12.0, 200.0, 20.0).unwrap();
        assert_eq!(bottom_time_at_depth(&supply, 0.0).unwrap(), 120);
        assert_eq!(bottom_time_at_depth(&supply, 10.0).unwrap(), 60);
        assert_eq!(bottom_time_at_depth(&supply, 30.0).unwrap(), 30);
        // 12 m rounds up to the 15 m step
        assert_eq!(bottom_time_at_depth(&supply, 12.0).unwrap(), 48);
    }

    #[test]
    fn test_bottom_time_beyond_table() {
        let supply = calculate_gas_supply(12.0, 200.0, 20.0).unwrap();
        assert_eq!(
            bottom_time_at_depth(&supply, 51.0),
            Err(PlannerError::UnsupportedDepth {
                depth_m: 51.0,
                max_depth_m: 50,
            })
        );
    }
}

//! Breathing gas helpers: validation, standard mixes, MOD, ppO2 and END.
//!
//! Gas mixes can also be written in the usual shorthand and parsed with
//! [`parse_gas`]:
//!
//! ```
//! use decoplan::gas::{parse_gas, max_operating_depth};
//!
//! let ean32 = parse_gas("EAN32").expect("valid notation");
//! assert!((ean32.o2_fraction - 0.32).abs() < 1e-9);
//!
//! let mod_m = max_operating_depth(&ean32, 1.4).expect("valid limit");
//! assert!((mod_m - 33.75).abs() < 1e-9);
//! ```

pub mod parser;

pub use parser::parse_gas;

use crate::error::PlannerError;
use crate::models::Gas;

/// Tolerance for fraction sums written as percentages (e.g. 21 + 79).
const FRACTION_EPSILON: f64 = 1e-9;

/// Narcotic fraction of air (N2 only).
const AIR_NARCOTIC_N2: f64 = 0.79;

pub const AIR: Gas = Gas {
    o2_fraction: 0.21,
    he_fraction: 0.0,
    mod_m: None,
};

pub const NITROX_32: Gas = Gas {
    o2_fraction: 0.32,
    he_fraction: 0.0,
    mod_m: None,
};

pub const NITROX_36: Gas = Gas {
    o2_fraction: 0.36,
    he_fraction: 0.0,
    mod_m: None,
};

pub const TRIMIX_18_45: Gas = Gas {
    o2_fraction: 0.18,
    he_fraction: 0.45,
    mod_m: None,
};

pub const TRIMIX_10_70: Gas = Gas {
    o2_fraction: 0.10,
    he_fraction: 0.70,
    mod_m: None,
};

pub const OXYGEN: Gas = Gas {
    o2_fraction: 1.0,
    he_fraction: 0.0,
    mod_m: None,
};

/// Mixes offered to the user, keyed by their short name.
pub fn standard_mixes() -> Vec<(&'static str, Gas)> {
    vec![
        ("air", AIR),
        ("nitrox32", NITROX_32),
        ("nitrox36", NITROX_36),
        ("trimix1845", TRIMIX_18_45),
        ("trimix1070", TRIMIX_10_70),
        ("oxygen", OXYGEN),
    ]
}

impl Gas {
    /// Build a validated gas from O2 and He fractions.
    pub fn new(o2_fraction: f64, he_fraction: f64) -> Result<Self, PlannerError> {
        let gas = Gas {
            o2_fraction,
            he_fraction,
            mod_m: None,
        };
        gas.validate()?;
        Ok(gas)
    }

    pub fn validate(&self) -> Result<(), PlannerError> {
        let (o2, he) = (self.o2_fraction, self.he_fraction);
        if !o2.is_finite() || o2 <= 0.0 || o2 > 1.0 {
            return Err(PlannerError::InvalidGas(format!(
                "O2 fraction must be in (0, 1], got {o2}"
            )));
        }
        if !he.is_finite() || !(0.0..1.0).contains(&he) {
            return Err(PlannerError::InvalidGas(format!(
                "He fraction must be in [0, 1), got {he}"
            )));
        }
        if o2 + he > 1.0 + FRACTION_EPSILON {
            return Err(PlannerError::InvalidGas(format!(
                "O2 + He fractions exceed 1.0 ({o2} + {he})"
            )));
        }
        if let Some(mod_m) = self.mod_m {
            if !mod_m.is_finite() || mod_m < 0.0 {
                return Err(PlannerError::InvalidGas(format!(
                    "MOD must be a non-negative depth, got {mod_m}"
                )));
            }
        }
        Ok(())
    }

    pub fn nitrogen_fraction(&self) -> f64 {
        (1.0 - self.o2_fraction - self.he_fraction).max(0.0)
    }

    /// Annotate the gas with its maximum operating depth for `max_ppo2`.
    pub fn with_mod(self, max_ppo2: f64) -> Result<Self, PlannerError> {
        let mod_m = max_operating_depth(&self, max_ppo2)?;
        Ok(Gas {
            mod_m: Some(mod_m),
            ..self
        })
    }
}

/// Maximum operating depth (m) for a ppO2 limit, using a 1 bar surface.
pub fn max_operating_depth(gas: &Gas, max_ppo2: f64) -> Result<f64, PlannerError> {
    gas.validate()?;
    if !max_ppo2.is_finite() || max_ppo2 <= 0.0 {
        return Err(PlannerError::InvalidInput(format!(
            "ppO2 limit must be positive, got {max_ppo2}"
        )));
    }
    Ok((max_ppo2 / gas.o2_fraction - 1.0) * 10.0)
}

/// Oxygen partial pressure (bar) at `depth_m`, using a 1 bar surface.
pub fn partial_pressure_o2(gas: &Gas, depth_m: f64) -> f64 {
    gas.o2_fraction * (depth_m / 10.0 + 1.0)
}

/// Equivalent narcotic depth (m) of `gas` breathed at `depth_m`.
///
/// With `oxygen_narcotic` both O2 and N2 count, so only helium reduces
/// the narcotic load relative to air.
pub fn equivalent_narcotic_depth(gas: &Gas, depth_m: f64, oxygen_narcotic: bool) -> f64 {
    let (narcotic, air_narcotic) = if oxygen_narcotic {
        (gas.o2_fraction + gas.nitrogen_fraction(), 1.0)
    } else {
        (gas.nitrogen_fraction(), AIR_NARCOTIC_N2)
    };
    ((depth_m + 10.0) * narcotic / air_narcotic - 10.0).max(0.0)
}

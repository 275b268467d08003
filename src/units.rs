//! Metric/imperial conversions used by the planner UI.

const FEET_PER_METER: f64 = 3.28084;
const PSI_PER_BAR: f64 = 14.5038;
const CUBIC_FEET_PER_LITER: f64 = 0.035315;

pub fn meters_to_feet(meters: f64) -> f64 {
    meters * FEET_PER_METER
}

pub fn feet_to_meters(feet: f64) -> f64 {
    feet / FEET_PER_METER
}

pub fn bar_to_psi(bar: f64) -> f64 {
    bar * PSI_PER_BAR
}

pub fn psi_to_bar(psi: f64) -> f64 {
    psi / PSI_PER_BAR
}

pub fn liters_to_cubic_feet(liters: f64) -> f64 {
    liters * CUBIC_FEET_PER_LITER
}

pub fn cubic_feet_to_liters(cubic_feet: f64) -> f64 {
    cubic_feet / CUBIC_FEET_PER_LITER
}

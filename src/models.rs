use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::PlannerError;

/// Breathing gas, expressed as oxygen and helium fractions.
///
/// Nitrogen makes up the remainder.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Gas {
    /// Fraction of O2 (0.0 exclusive – 1.0)
    #[serde(rename = "fO2")]
    pub o2_fraction: f64,
    /// Fraction of He (0.0 – 1.0 exclusive)
    #[serde(rename = "fHe", default)]
    pub he_fraction: f64,
    /// Maximum operating depth annotation in meters
    #[serde(rename = "mod", default, skip_serializing_if = "Option::is_none")]
    pub mod_m: Option<f64>,
}

/// One leg of a dive profile: descent, bottom, ascent or stop.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiveSegment {
    #[serde(rename = "startDepth")]
    pub start_depth_m: f64,
    #[serde(rename = "endDepth")]
    pub end_depth_m: f64,
    #[serde(rename = "duration")]
    pub duration_min: f64,
    pub gas: Gas,
}

impl DiveSegment {
    /// Segment held at a constant depth.
    pub fn flat(depth_m: f64, duration_min: f64, gas: Gas) -> Self {
        Self {
            start_depth_m: depth_m,
            end_depth_m: depth_m,
            duration_min,
            gas,
        }
    }

    pub fn mean_depth_m(&self) -> f64 {
        (self.start_depth_m + self.end_depth_m) / 2.0
    }

    pub fn max_depth_m(&self) -> f64 {
        self.start_depth_m.max(self.end_depth_m)
    }
}

/// Reference table family used for the lookup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableFamily {
    #[default]
    Dciem,
    UsNavy,
    Recreational,
}

impl TableFamily {
    pub fn label(&self) -> &'static str {
        match self {
            TableFamily::Dciem => "DCIEM",
            TableFamily::UsNavy => "US_NAVY",
            TableFamily::Recreational => "RECREATIONAL",
        }
    }
}

impl fmt::Display for TableFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Planning configuration supplied by the caller.
///
/// Field names on the wire follow the surrounding application. Any field
/// missing from serialized input takes the value from [`Default`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerOptions {
    /// Depth of the last decompression stop (m)
    #[serde(rename = "lastStopDepth")]
    pub last_stop_depth_m: f64,
    /// Distance between decompression stops (m)
    #[serde(rename = "decoStopDistance")]
    pub deco_stop_distance_m: f64,
    /// Ascent speed from 6 m to the surface (m/min)
    #[serde(rename = "ascentSpeed6m")]
    pub ascent_speed_6m: f64,
    /// Ascent speed up to 50% of the average depth (m/min)
    #[serde(rename = "ascentSpeed50perc")]
    pub ascent_speed_50_percent: f64,
    /// Descent speed (m/min)
    #[serde(rename = "descentSpeed")]
    pub descent_speed: f64,
    /// Time reserved at depth for problem solving (min)
    #[serde(rename = "problemSolvingDuration")]
    pub problem_solving_duration_min: f64,
    /// ppO2 limit for bottom and travel segments (bar)
    #[serde(rename = "maxPpO2")]
    pub max_ppo2: f64,
    /// ppO2 limit during decompression (bar)
    #[serde(rename = "maxDecoPpO2")]
    pub max_deco_ppo2: f64,
    /// Whether oxygen counts toward narcotic loading
    #[serde(rename = "oxygenNarcotic")]
    pub oxygen_narcotic: bool,
    #[serde(rename = "tableType")]
    pub table_type: TableFamily,
    /// Gas breathed at the 15/12/9/6 m stops. Air when unset.
    #[serde(rename = "decoGas", skip_serializing_if = "Option::is_none")]
    pub deco_gas: Option<Gas>,
    /// Gas breathed at the 3 m residual stop. First segment gas when unset.
    #[serde(rename = "shallowStopGas", skip_serializing_if = "Option::is_none")]
    pub shallow_stop_gas: Option<Gas>,
    /// Count decompression stops toward CNS and OTU
    #[serde(rename = "includeDecoInOxygenExposure")]
    pub include_deco_in_oxygen_exposure: bool,
    /// Fail instead of clamping when bottom time exceeds the table
    #[serde(rename = "strictTableRange")]
    pub strict_table_range: bool,
}

impl Default for PlannerOptions {
    fn default() -> Self {
        Self {
            last_stop_depth_m: 3.0,
            deco_stop_distance_m: 3.0,
            ascent_speed_6m: 3.0,
            ascent_speed_50_percent: 9.0,
            descent_speed: 18.0,
            problem_solving_duration_min: 1.0,
            max_ppo2: 1.4,
            max_deco_ppo2: 1.6,
            oxygen_narcotic: true,
            table_type: TableFamily::Dciem,
            deco_gas: None,
            shallow_stop_gas: None,
            include_deco_in_oxygen_exposure: false,
            strict_table_range: false,
        }
    }
}

impl PlannerOptions {
    /// Reject options that would make a plan meaningless.
    pub fn validate(&self) -> Result<(), PlannerError> {
        let positive = [
            ("lastStopDepth", self.last_stop_depth_m),
            ("decoStopDistance", self.deco_stop_distance_m),
            ("ascentSpeed6m", self.ascent_speed_6m),
            ("ascentSpeed50perc", self.ascent_speed_50_percent),
            ("descentSpeed", self.descent_speed),
            ("maxPpO2", self.max_ppo2),
            ("maxDecoPpO2", self.max_deco_ppo2),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(PlannerError::InvalidOptions(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        if !self.problem_solving_duration_min.is_finite() || self.problem_solving_duration_min < 0.0
        {
            return Err(PlannerError::InvalidOptions(format!(
                "problemSolvingDuration must not be negative, got {}",
                self.problem_solving_duration_min
            )));
        }

        if self.max_deco_ppo2 < self.max_ppo2 {
            return Err(PlannerError::InvalidOptions(format!(
                "maxDecoPpO2 ({}) is below maxPpO2 ({})",
                self.max_deco_ppo2, self.max_ppo2
            )));
        }

        for (name, gas) in [
            ("decoGas", &self.deco_gas),
            ("shallowStopGas", &self.shallow_stop_gas),
        ] {
            if let Some(gas) = gas {
                gas.validate()
                    .map_err(|e| PlannerError::InvalidOptions(format!("{name}: {e}")))?;
            }
        }

        Ok(())
    }
}

/// Outcome of a single table lookup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiveTableResult {
    /// Reference depth of the table that was used (m)
    #[serde(rename = "referenceDepth")]
    pub reference_depth_m: u32,
    /// Bottom-time breakpoint of the selected row (min)
    #[serde(rename = "breakpoint")]
    pub breakpoint_min: u32,
    /// Repetitive group letter, or "NRG"
    #[serde(rename = "residualGroup")]
    pub residual_group: String,
    /// Total decompression time of the selected row (min)
    #[serde(rename = "decompression")]
    pub total_deco_min: u32,
    /// Stops deepest first; durations sum to `total_deco_min`
    #[serde(rename = "decompressionStops")]
    pub decompression_stops: Vec<DiveSegment>,
    /// Bottom time was longer than the longest row and got clamped to it
    #[serde(rename = "exceedsTableRange")]
    pub exceeds_table_range: bool,
}

/// The resolved profile of a planned dive.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DivePlan {
    pub segments: Vec<DiveSegment>,
    /// Bottom time plus decompression (min)
    #[serde(rename = "totalTime")]
    pub total_time_min: f64,
    #[serde(rename = "maxDepth")]
    pub max_depth_m: f64,
    /// Distinct input gases in first-use order
    pub gases: Vec<Gas>,
}

/// Aggregate output of [`crate::planner::plan`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiveResult {
    pub plan: DivePlan,
    pub decompression: Vec<DiveSegment>,
    /// CNS oxygen toxicity load (%); may exceed 100
    #[serde(rename = "cns")]
    pub cns_percent: f64,
    /// Pulmonary oxygen toxicity units
    pub otu: f64,
    #[serde(rename = "tableGroup")]
    pub table_group: String,
    #[serde(rename = "referenceDepth")]
    pub reference_depth_m: u32,
    #[serde(rename = "breakpoint")]
    pub breakpoint_min: u32,
    #[serde(rename = "exceedsTableRange")]
    pub exceeds_table_range: bool,
    /// Equivalent narcotic depth at the deepest point of the profile (m)
    #[serde(rename = "maxEnd")]
    pub max_end_m: f64,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub warnings: Vec<String>,
}

//! Oxygen exposure estimates for a dive profile.
//!
//! Both figures use the mean depth of each segment and are coarse
//! approximations rather than the NOAA exposure curves.

use crate::models::DiveSegment;

/// Surface atmospheric pressure (bar) at sea level.
pub const SURFACE_PRESSURE_BAR: f64 = 1.01325;

/// ppO2 (bar) above which CNS loading uses the high rate.
const CNS_HIGH_PPO2: f64 = 1.4;

/// CNS percent per minute at or below [`CNS_HIGH_PPO2`].
const CNS_LOW_RATE: f64 = 0.25;

/// CNS percent per minute above [`CNS_HIGH_PPO2`].
const CNS_HIGH_RATE: f64 = 0.5;

/// ppO2 (bar) below which no OTUs accumulate.
const OTU_THRESHOLD_PPO2: f64 = 0.5;

/// Absolute pressure (bar) at `depth_m` of seawater.
pub fn ambient_pressure(depth_m: f64) -> f64 {
    depth_m / 10.0 + SURFACE_PRESSURE_BAR
}

/// ppO2 (bar) at the mean depth of a segment.
pub fn segment_ppo2(segment: &DiveSegment) -> f64 {
    segment.gas.o2_fraction * ambient_pressure(segment.mean_depth_m())
}

/// ppO2 (bar) at the deepest point of a segment.
pub fn peak_ppo2(segment: &DiveSegment) -> f64 {
    segment.gas.o2_fraction * ambient_pressure(segment.max_depth_m())
}

/// CNS contribution (%) of one segment.
pub fn segment_cns(segment: &DiveSegment) -> f64 {
    let rate = if segment_ppo2(segment) > CNS_HIGH_PPO2 {
        CNS_HIGH_RATE
    } else {
        CNS_LOW_RATE
    };
    segment.duration_min * rate
}

/// OTU contribution of one segment.
pub fn segment_otu(segment: &DiveSegment) -> f64 {
    let ppo2 = segment_ppo2(segment);
    if ppo2 > OTU_THRESHOLD_PPO2 {
        segment.duration_min * ppo2
    } else {
        0.0
    }
}

/// Accumulated oxygen loading over a set of segments.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OxygenExposure {
    /// CNS load (%); not capped at 100
    pub cns_percent: f64,
    pub otu: f64,
}

impl OxygenExposure {
    pub fn compute<'a, I>(segments: I) -> Self
    where
        I: IntoIterator<Item = &'a DiveSegment>,
    {
        segments
            .into_iter()
            .fold(OxygenExposure::default(), |acc, segment| OxygenExposure {
                cns_percent: acc.cns_percent + segment_cns(segment),
                otu: acc.otu + segment_otu(segment),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gas::{AIR, NITROX_32, OXYGEN};

    #[test]
    fn test_ambient_pressure() {
        assert_eq!(ambient_pressure(0.0), SURFACE_PRESSURE_BAR);
        assert!((ambient_pressure(18.0) - 2.81325).abs() < 1e-12);
    }

    #[test]
    fn test_cns_low_ppo2_air_18m() {
        // ppO2 = 0.21 * 2.81325 ≈ 0.59 bar, below the high-rate threshold
        let segment = DiveSegment::flat(18.0, 40.0, AIR);
        assert!((segment_ppo2(&segment) - 0.5907825).abs() < 1e-9);
        assert!((segment_cns(&segment) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_cns_high_ppo2_uses_high_rate() {
        // Oxygen at 6 m: 1.61325 bar
        let segment = DiveSegment::flat(6.0, 10.0, OXYGEN);
        assert!(segment_ppo2(&segment) > CNS_HIGH_PPO2);
        assert!((segment_cns(&segment) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_cns_uses_mean_depth() {
        // Descent 0 -> 30 m on EAN32: mean 15 m, ppO2 ≈ 0.80
        let segment = DiveSegment {
            start_depth_m: 0.0,
            end_depth_m: 30.0,
            duration_min: 4.0,
            gas: NITROX_32,
        };
        let expected = 0.32 * (1.5 + SURFACE_PRESSURE_BAR);
        assert!((segment_ppo2(&segment) - expected).abs() < 1e-12);
        assert!((peak_ppo2(&segment) - 0.32 * (3.0 + SURFACE_PRESSURE_BAR)).abs() < 1e-12);
    }

    #[test]
    fn test_otu_below_threshold_is_zero() {
        // Air at the surface: 0.21 * 1.01325 bar
        let segment = DiveSegment::flat(0.0, 60.0, AIR);
        assert_eq!(segment_otu(&segment), 0.0);
    }

    #[test]
    fn test_otu_above_threshold() {
        let segment = DiveSegment::flat(18.0, 40.0, AIR);
        let expected = 40.0 * 0.21 * 2.81325;
        assert!((segment_otu(&segment) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_exposure_sums_segments() {
        let segments = vec![
            DiveSegment::flat(18.0, 40.0, AIR),
            DiveSegment::flat(6.0, 10.0, OXYGEN),
            DiveSegment::flat(0.0, 5.0, AIR),
        ];
        let exposure = OxygenExposure::compute(&segments);

        assert!((exposure.cns_percent - (10.0 + 5.0 + 1.25)).abs() < 1e-9);
        let expected_otu = 40.0 * 0.21 * 2.81325 + 10.0 * 1.61325;
        assert!((exposure.otu - expected_otu).abs() < 1e-9);
    }

    #[test]
    fn test_exposure_empty() {
        let exposure = OxygenExposure::compute(&Vec::<DiveSegment>::new());
        assert_eq!(exposure, OxygenExposure::default());
    }

    #[test]
    fn test_cns_not_capped() {
        let segment = DiveSegment::flat(10.0, 500.0, OXYGEN);
        let exposure = OxygenExposure::compute([&segment]);
        assert!(exposure.cns_percent > 100.0);
    }
}

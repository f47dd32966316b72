use crate::evaluation::matcher::MatchResult;
use crate::prelude::{EvalError, EvalResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fraction of the raw mean IoU awarded at full remaining time.
pub const TIME_BONUS_FACTOR: f64 = 0.2;

/// Lower bounds of the 3/2/1-star bands. Bands are inclusive on the lower
/// bound, non-overlapping, and cover `[0, 1]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StarThresholds {
    pub three: f64,
    pub two: f64,
    pub one: f64,
}

impl Default for StarThresholds {
    fn default() -> Self {
        Self {
            three: 0.85,
            two: 0.70,
            one: 0.50,
        }
    }
}

/// Lower bounds of the qualitative bands. Deliberately a separate policy
/// from [`StarThresholds`]; the product shows them in different places.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BandThresholds {
    pub excellent: f64,
    pub good: f64,
    pub acceptable: f64,
}

impl Default for BandThresholds {
    fn default() -> Self {
        Self {
            excellent: 0.9,
            good: 0.75,
            acceptable: 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreBand {
    Excellent,
    Good,
    Acceptable,
    Miss,
}

impl ScoreBand {
    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "excellent",
            ScoreBand::Good => "good",
            ScoreBand::Acceptable => "acceptable",
            ScoreBand::Miss => "miss",
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn stars_for_iou(iou: f64, thresholds: &StarThresholds) -> u8 {
    if iou >= thresholds.three {
        3
    } else if iou >= thresholds.two {
        2
    } else if iou >= thresholds.one {
        1
    } else {
        0
    }
}

pub fn band_for_iou(iou: f64, thresholds: &BandThresholds) -> ScoreBand {
    if iou >= thresholds.excellent {
        ScoreBand::Excellent
    } else if iou >= thresholds.good {
        ScoreBand::Good
    } else if iou >= thresholds.acceptable {
        ScoreBand::Acceptable
    } else {
        ScoreBand::Miss
    }
}

/// Arithmetic mean of the per-object IoU values. An empty round is a caller
/// contract violation, not a zero score.
pub fn mean_iou(results: &[MatchResult]) -> EvalResult<f64> {
    if results.is_empty() {
        return Err(EvalError::EmptyRound(
            "mean IoU requires at least one object".into(),
        ));
    }
    Ok(results.iter().map(|r| r.iou).sum::<f64>() / results.len() as f64)
}

/// Timed-round bonus: `min(1.0, raw * (1 + remaining/limit * 0.2))`.
///
/// Zero remaining time leaves the raw mean unchanged; the result never
/// exceeds `1.0`. A non-positive limit is a caller contract violation.
pub fn apply_time_bonus(raw_mean: f64, time_remaining: f64, time_limit: f64) -> EvalResult<f64> {
    if time_limit <= 0.0 {
        return Err(EvalError::InvalidConfig(format!(
            "time limit must be positive, got {}",
            time_limit
        )));
    }
    let remaining = time_remaining.clamp(0.0, time_limit);
    Ok((raw_mean * (1.0 + remaining / time_limit * TIME_BONUS_FACTOR)).min(1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Rect, Shape};
    use crate::scene::DetectionObject;

    fn result_with_iou(iou: f64) -> MatchResult {
        MatchResult {
            object: DetectionObject::new(1, "Cat", Shape::Rect(Rect::new(0.0, 0.0, 1.0, 1.0))),
            iou,
            matched_annotation: Some(0),
        }
    }

    #[test]
    fn star_bands_are_inclusive_on_the_lower_bound() {
        let thresholds = StarThresholds::default();
        assert_eq!(stars_for_iou(0.85, &thresholds), 3);
        assert_eq!(stars_for_iou(0.8499, &thresholds), 2);
        assert_eq!(stars_for_iou(0.70, &thresholds), 2);
        assert_eq!(stars_for_iou(0.6999, &thresholds), 1);
        assert_eq!(stars_for_iou(0.50, &thresholds), 1);
        assert_eq!(stars_for_iou(0.4999, &thresholds), 0);
        assert_eq!(stars_for_iou(1.0, &thresholds), 3);
        assert_eq!(stars_for_iou(0.0, &thresholds), 0);
    }

    #[test]
    fn band_policy_uses_its_own_cutoffs() {
        let thresholds = BandThresholds::default();
        assert_eq!(band_for_iou(0.9, &thresholds), ScoreBand::Excellent);
        assert_eq!(band_for_iou(0.89, &thresholds), ScoreBand::Good);
        assert_eq!(band_for_iou(0.75, &thresholds), ScoreBand::Good);
        assert_eq!(band_for_iou(0.5, &thresholds), ScoreBand::Acceptable);
        assert_eq!(band_for_iou(0.49, &thresholds), ScoreBand::Miss);
        // 0.86 is three stars but not yet "excellent"; the policies differ.
        assert_eq!(stars_for_iou(0.86, &StarThresholds::default()), 3);
        assert_eq!(band_for_iou(0.86, &thresholds), ScoreBand::Good);
    }

    #[test]
    fn mean_iou_averages_per_object_values() {
        let results = vec![result_with_iou(1.0), result_with_iou(0.5), result_with_iou(0.0)];
        assert!((mean_iou(&results).unwrap() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn mean_iou_of_empty_round_fails_loudly() {
        assert!(matches!(mean_iou(&[]), Err(EvalError::EmptyRound(_))));
    }

    #[test]
    fn time_bonus_never_exceeds_one() {
        let adjusted = apply_time_bonus(0.95, 30.0, 30.0).unwrap();
        assert_eq!(adjusted, 1.0);
    }

    #[test]
    fn zero_remaining_time_leaves_raw_mean() {
        let adjusted = apply_time_bonus(0.6, 0.0, 30.0).unwrap();
        assert!((adjusted - 0.6).abs() < 1e-12);
    }

    #[test]
    fn partial_time_scales_the_bonus() {
        // Half the time left: 0.5 * (1 + 0.5 * 0.2) = 0.55.
        let adjusted = apply_time_bonus(0.5, 15.0, 30.0).unwrap();
        assert!((adjusted - 0.55).abs() < 1e-12);
    }

    #[test]
    fn non_positive_time_limit_is_rejected() {
        assert!(matches!(
            apply_time_bonus(0.5, 1.0, 0.0),
            Err(EvalError::InvalidConfig(_))
        ));
    }
}

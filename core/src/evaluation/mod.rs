pub mod matcher;
pub mod scoring;
pub mod suppression;

pub use matcher::{GreedyMatcher, MatchResult};
pub use scoring::{
    apply_time_bonus, band_for_iou, mean_iou, stars_for_iou, BandThresholds, ScoreBand,
    StarThresholds, TIME_BONUS_FACTOR,
};
pub use suppression::{run_non_max_suppression, SuppressionOutcome, DEFAULT_OVERLAP_THRESHOLD};

use crate::workflow::config::WorkflowConfig;
use annocore::evaluation::{
    apply_time_bonus, band_for_iou, mean_iou, run_non_max_suppression, stars_for_iou,
    GreedyMatcher, MatchResult, ScoreBand, SuppressionOutcome,
};
use annocore::prelude::AnnotationMatcher;
use annocore::scene::{Candidate, RoundScenario, RoundSubmission};
use annocore::telemetry::MetricsRecorder;
use anyhow::Context;
use std::sync::Arc;

/// Fully scored round, ready for the UI.
pub struct RoundOutcome {
    pub matches: Vec<MatchResult>,
    pub mean_iou: f64,
    pub adjusted_iou: f64,
    pub stars: u8,
    pub band: ScoreBand,
}

#[derive(Clone)]
pub struct Runner {
    config: WorkflowConfig,
    metrics: Arc<MetricsRecorder>,
}

impl Runner {
    pub fn new(config: WorkflowConfig) -> Self {
        Self {
            config,
            metrics: Arc::new(MetricsRecorder::new()),
        }
    }

    /// Scores one submission against one scenario: greedy match, mean IoU,
    /// time bonus when the round is timed, then stars and band.
    pub fn execute(
        &self,
        scenario: &RoundScenario,
        submission: &RoundSubmission,
    ) -> anyhow::Result<RoundOutcome> {
        let matcher = GreedyMatcher::new(self.config.to_eval_config());
        let matches = matcher.match_annotations(&submission.annotations, &scenario.objects);

        let raw_mean = mean_iou(&matches)
            .map_err(|err| {
                self.metrics.record_fault();
                err
            })
            .context("aggregating round IoU")?;

        let adjusted_iou = match (scenario.time_limit, submission.time_remaining) {
            (Some(limit), Some(remaining)) => apply_time_bonus(raw_mean, remaining, limit)
                .map_err(|err| {
                    self.metrics.record_fault();
                    err
                })
                .context("applying time bonus")?,
            _ => raw_mean,
        };

        let stars = stars_for_iou(adjusted_iou, &self.config.stars);
        let band = band_for_iou(adjusted_iou, &self.config.bands);
        self.metrics.record_round();

        Ok(RoundOutcome {
            matches,
            mean_iou: raw_mean,
            adjusted_iou,
            stars,
            band,
        })
    }

    /// Runs the suppression demo over a candidate list.
    pub fn suppress(&self, candidates: &[Candidate]) -> anyhow::Result<SuppressionOutcome> {
        run_non_max_suppression(candidates, self.config.overlap_threshold)
            .map_err(|err| {
                self.metrics.record_fault();
                err
            })
            .context("running suppression demo")
    }

    pub fn metrics_snapshot(&self) -> (usize, usize) {
        self.metrics.snapshot()
    }
}

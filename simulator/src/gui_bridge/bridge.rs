use crate::generator::profile::{build_candidates_from_config, GeneratorConfig};
use crate::gui_bridge::model::EvaluationModel;
use crate::workflow::runner::Runner;
use annocore::scene::{RoundScenario, RoundSubmission};
use anyhow::Result;
use serde::Deserialize;
use serde_json::json;
use std::{
    net::SocketAddr,
    sync::{Arc, RwLock},
    thread,
};
use tokio::runtime::Builder;
use warp::{http::StatusCode, Filter};

fn gui_bind_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 9100))
}

#[derive(Debug)]
struct WarpError;

impl warp::reject::Reject for WarpError {}

/// Round scored on behalf of the UI.
#[derive(Debug, Deserialize)]
struct SubmitRequest {
    scenario: RoundScenario,
    submission: RoundSubmission,
}

/// Suppression demo request: a scenario to jitter plus generator knobs.
#[derive(Debug, Deserialize)]
struct GenerateRequest {
    scenario: RoundScenario,
    #[serde(default)]
    generator: GeneratorConfig,
}

/// Bridge hosting the localhost endpoint the browser UI polls.
pub struct GuiBridge {
    state: Arc<RwLock<EvaluationModel>>,
}

impl GuiBridge {
    pub fn new(runner: Arc<Runner>) -> Self {
        let state = Arc::new(RwLock::new(EvaluationModel::default()));
        let state_for_filter = state.clone();
        let state_filter = warp::any().map(move || state_for_filter.clone());
        let runner_filter = warp::any().map(move || runner.clone());

        let get_route = warp::path("round")
            .and(warp::get())
            .and(state_filter.clone())
            .map(|state: Arc<RwLock<EvaluationModel>>| {
                warp::reply::json(&*state.read().unwrap())
            });

        let submit_route = warp::path("submit")
            .and(warp::post())
            .and(warp::body::json())
            .and(state_filter.clone())
            .and(runner_filter.clone())
            .and_then(
                |request: SubmitRequest,
                 state: Arc<RwLock<EvaluationModel>>,
                 runner: Arc<Runner>| async move {
                    match runner.execute(&request.scenario, &request.submission) {
                        Ok(outcome) => {
                            let mut guard = state.write().unwrap();
                            *guard = EvaluationModel {
                                round_name: request.scenario.name.clone(),
                                matches: outcome.matches.clone(),
                                mean_iou: outcome.mean_iou,
                                adjusted_iou: outcome.adjusted_iou,
                                stars: outcome.stars,
                                band: outcome.band.label().to_string(),
                                ..Default::default()
                            };
                            Ok::<_, warp::Rejection>(warp::reply::with_status(
                                warp::reply::json(&json!({
                                    "status": "ok",
                                    "stars": outcome.stars,
                                    "band": outcome.band.label(),
                                })),
                                StatusCode::OK,
                            ))
                        }
                        Err(err) => {
                            eprintln!("submit error: {}", err);
                            Err(warp::reject::custom(WarpError))
                        }
                    }
                },
            );

        let generate_route = warp::path("generate")
            .and(warp::post())
            .and(warp::body::json())
            .and(state_filter)
            .and(runner_filter)
            .and_then(
                |request: GenerateRequest,
                 state: Arc<RwLock<EvaluationModel>>,
                 runner: Arc<Runner>| async move {
                    match build_candidates_from_config(&request.scenario, &request.generator)
                        .and_then(|candidates| runner.suppress(&candidates))
                    {
                        Ok(outcome) => {
                            let kept = outcome.kept().count();
                            let mut guard = state.write().unwrap();
                            guard.round_name = request.scenario.name.clone();
                            guard.candidates = outcome.candidates.clone();
                            guard.suppression_order = outcome.suppression_order.clone();
                            Ok::<_, warp::Rejection>(warp::reply::with_status(
                                warp::reply::json(&json!({
                                    "status": "ok",
                                    "kept": kept,
                                    "suppressed": outcome.suppression_order.len(),
                                    "description":
                                        request.generator.description.clone().unwrap_or_default(),
                                })),
                                StatusCode::OK,
                            ))
                        }
                        Err(err) => {
                            eprintln!("generate error: {}", err);
                            Err(warp::reject::custom(WarpError))
                        }
                    }
                },
            );

        thread::spawn(move || {
            let routes = get_route.or(submit_route).or(generate_route);
            let runtime = Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("failed to build runtime");
            runtime.block_on(async move {
                warp::serve(routes).run(gui_bind_address()).await;
            });
        });

        Self { state }
    }

    pub fn publish(&self, model: &EvaluationModel) -> Result<()> {
        let mut guard = self.state.write().unwrap();
        *guard = model.clone();
        println!(
            "[GUI] round {}: mean IoU {:.4}, {} stars, band {}",
            guard.round_name, guard.mean_iou, guard.stars, guard.band
        );
        Ok(())
    }

    pub fn publish_status(&self, message: &str) {
        println!("[GUI] {}", message);
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> EvaluationModel {
        self.state.read().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::template::{demo_scenario, demo_submission};
    use crate::workflow::config::WorkflowConfig;
    use crate::workflow::runner::Runner;
    use std::sync::Arc;

    #[test]
    fn gui_bridge_updates_state() {
        let cfg = WorkflowConfig::from_args(4.0, 0.4);
        let runner = Arc::new(Runner::new(cfg));
        let gui = GuiBridge::new(runner.clone());

        let scenario = demo_scenario();
        let submission = demo_submission(&scenario);
        let outcome = runner.execute(&scenario, &submission).unwrap();

        let model = EvaluationModel {
            round_name: scenario.name.clone(),
            matches: outcome.matches.clone(),
            mean_iou: outcome.mean_iou,
            adjusted_iou: outcome.adjusted_iou,
            stars: outcome.stars,
            band: outcome.band.label().to_string(),
            ..Default::default()
        };
        gui.publish(&model).unwrap();
        assert_eq!(gui.snapshot().stars, outcome.stars);
        assert_eq!(gui.snapshot().round_name, "backyard-pets");
    }
}

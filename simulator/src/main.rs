use annocore::evaluation::DEFAULT_OVERLAP_THRESHOLD;
use annocore::geometry::DEFAULT_SAMPLE_STEP;
use anyhow::Context;
use clap::Parser;
use generator::profile::{build_candidates_from_config, GeneratorConfig};
use generator::template::{demo_scenario, demo_submission};
use gui_bridge::bridge::GuiBridge;
use gui_bridge::model::EvaluationModel;
use log::info;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;
use workflow::config::{load_scenario, WorkflowConfig};
use workflow::runner::Runner;

mod generator;
mod gui_bridge;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Annotation-evaluation workflow driver")]
struct Args {
    /// Score a demo round and run the suppression demo, then exit
    #[arg(long, default_value_t = false)]
    offline: bool,
    /// Load evaluation thresholds from YAML
    #[arg(long)]
    workflow: Option<PathBuf>,
    /// Load a round scenario from YAML instead of the built-in scene
    #[arg(long)]
    scenario: Option<PathBuf>,
    /// Grid step for sampled polygon IoU
    #[arg(long, default_value_t = DEFAULT_SAMPLE_STEP)]
    sampling_step: f64,
    /// IoU above which a lower-confidence candidate is suppressed
    #[arg(long, default_value_t = DEFAULT_OVERLAP_THRESHOLD)]
    overlap_threshold: f64,
    /// Keep the HTTP bridge alive for the browser UI
    #[arg(long, default_value_t = false)]
    serve: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let workflow_config = if let Some(path) = args.workflow {
        WorkflowConfig::load(path)?
    } else {
        WorkflowConfig::from_args(args.sampling_step, args.overlap_threshold)
    };

    let scenario = if let Some(path) = args.scenario {
        load_scenario(path)?
    } else {
        demo_scenario()
    };

    info!(
        "workflow config: sampling step {}, overlap threshold {}",
        workflow_config.sampling_step, workflow_config.overlap_threshold
    );

    let runner = Runner::new(workflow_config.clone());
    let gui_bridge = GuiBridge::new(Arc::new(runner.clone()));

    if args.offline {
        let submission = demo_submission(&scenario);
        let outcome = runner.execute(&scenario, &submission)?;

        let generator_config = GeneratorConfig::default();
        let candidates = build_candidates_from_config(&scenario, &generator_config)?;
        let suppression = runner.suppress(&candidates)?;
        let kept = suppression.kept().count();

        println!(
            "Offline round {} -> mean IoU {:.4}, {} stars, band {}",
            scenario.name,
            outcome.mean_iou,
            outcome.stars,
            outcome.band.label()
        );
        println!(
            "Suppression demo -> kept {}, suppressed {}",
            kept,
            suppression.suppression_order.len()
        );

        let model = EvaluationModel {
            round_name: scenario.name.clone(),
            matches: outcome.matches.clone(),
            mean_iou: outcome.mean_iou,
            adjusted_iou: outcome.adjusted_iou,
            stars: outcome.stars,
            band: outcome.band.label().to_string(),
            candidates: suppression.candidates.clone(),
            suppression_order: suppression.suppression_order.clone(),
        };
        gui_bridge.publish(&model)?;
        gui_bridge.publish_status("Offline round results ready.");

        let report = format!(
            "round={} mean_iou={:.4} stars={} band={} kept={} suppressed={}\n",
            scenario.name,
            outcome.mean_iou,
            outcome.stars,
            outcome.band.label(),
            kept,
            suppression.suppression_order.len()
        );
        let report_path = PathBuf::from("tools/data/offline_rounds.log");
        if let Some(parent) = report_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&report_path)?;
        file.write_all(report.as_bytes())?;
        info!("appended offline report to {}", report_path.display());
    }

    if args.serve {
        gui_bridge.publish_status("HTTP bridge running (Ctrl+C to stop)...");
        let runtime = TokioBuilder::new_current_thread()
            .enable_all()
            .build()
            .context("creating runtime for signal handling")?;
        runtime.block_on(async {
            signal::ctrl_c().await.context("awaiting Ctrl+C to exit")?;
            Ok::<(), anyhow::Error>(())
        })?;
    }

    Ok(())
}

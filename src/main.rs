mod app;
mod cluster;
mod report;
mod similarity;
mod util;

use std::path::PathBuf;

use anyhow::anyhow;
use clap::Parser;

use crate::cluster::GraphModel;
use crate::similarity::{ScoreScale, load_graph};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Similarity graph JSON with `nodes` and `links`.
    graph: PathBuf,
    /// Initial similarity threshold (higher keeps fewer, closer pairs).
    #[arg(long, default_value_t = 0.0)]
    threshold: f64,
    /// Top of the raw score scale; similarity is `max_scale - value`.
    #[arg(long, default_value_t = ScoreScale::DEFAULT_MAX)]
    max_scale: f64,
    /// Print the groups at `--threshold` and exit instead of opening a window.
    #[arg(long)]
    report: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let scale = ScoreScale::new(args.max_scale);

    if args.report {
        let graph = load_graph(&args.graph)?;
        let model = GraphModel::new(graph, scale, args.threshold);
        print!("{}", report::render(&model));
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1440.0, 920.0]),
        ..Default::default()
    };

    eframe::run_native(
        "simgraph",
        options,
        Box::new(move |cc| {
            Ok(Box::new(app::SimGraphApp::new(
                cc,
                args.graph.clone(),
                scale,
                args.threshold,
            )))
        }),
    )
    .map_err(|error| anyhow!("failed to run viewer: {error}"))
}

//! Tabiso command-line front end.
//!
//! Loads a labelled graph and a numbered distance table, finds every way the
//! table's positions can be relabelled into the graph, and prints the
//! positions the requested vertices occupy.

#[global_allocator]
/// Global allocator using jemalloc for better performance in parallel workloads.
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

mod args;
mod exercise;
mod problem;
mod report;

use clap::Parser;
use tracing::info;

use args::Args;
use problem::Problem;
use report::Render;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_thread_ids(true)
        .init();

    let args = Args::parse();
    let config = args.to_config();

    let problem = Problem::load(&args.input, config.weight_mode)?;
    let outcome = problem.solve(&config)?;
    info!(
        "{} isomorphisms, {} candidates tried",
        outcome.mappings.len(),
        outcome.candidates_tried
    );

    let render = Render {
        mappings: args.mappings,
        json: args.json,
        separator: args.separator,
    };
    println!("{}", render.render(outcome)?);

    Ok(())
}

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("dojo=warn,dojo_core=warn"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match args.command {
        Command::Replay {
            hits,
            course,
            exams,
            json,
        } => commands::replay::run(&hits, course.as_deref(), exams, json),
        Command::Inspect { course } => commands::inspect::run(&course),
        Command::Labels => commands::labels::run(),
    }
}

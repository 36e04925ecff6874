//! CLI entry point for running maze grid command scripts

use clap::Parser;
use mazegrid::io::cli::{Cli, ScriptProcessor};

fn main() -> mazegrid::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut processor = ScriptProcessor::new(cli);
    processor.process()
}

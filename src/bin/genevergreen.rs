//! Prints the generated evergreen task graph as JSON.

use std::process;

use clap::Parser;
use mongocli::cli::output;
use mongocli::evergreen::generate;
use mongocli::exitcode;

#[derive(Parser, Debug)]
#[command(name = "genevergreen", version, about = "Generate evergreen tasks")]
struct Args {
    /// Tool to generate tasks for (atlascli or mongocli)
    #[arg(long = "tool_name")]
    tool_name: Option<String>,

    /// Type of task to be generated (repo or postpkg)
    #[arg(long = "tasks")]
    tasks: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = match generate(args.tool_name.as_deref(), args.tasks.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            output::error(&e);
            process::exit(exitcode::USAGE);
        }
    };
    match config.to_json() {
        Ok(json) => println!("{json}"),
        Err(e) => {
            output::error(&e);
            process::exit(exitcode::SOFTWARE);
        }
    }
}

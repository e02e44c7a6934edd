use clap::Parser;
use trendscope::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}

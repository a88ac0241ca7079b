//! Launch CLI - prints the dashboard's chart data from the command line.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "launch-cli",
    version,
    about = "SpaceX launch records toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: launch_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    launch_cmd::run(cli.command)
}

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

mod dispatch;
mod prefix;
mod render;
mod update;


#[derive(Parser, Debug)]
#[command(name = "pakt")]
#[command(about = "Native package manager", long_about = None)]
struct Cli {
    #[arg(long)]
    prefix: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Update {
        packages: Vec<String>,
        #[arg(long)]
        global: bool,
        #[arg(long)]
        depth: Option<u32>,
    },
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    dispatch::run_cli(cli)
}

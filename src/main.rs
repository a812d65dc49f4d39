//! CLI entry point for the non-adjacent selection tool

use clap::Parser;
use nonadjacent::io::cli::{Cli, CommandRunner};

fn main() -> nonadjacent::Result<()> {
    let cli = Cli::parse();
    let runner = CommandRunner::new(cli);
    runner.run()
}

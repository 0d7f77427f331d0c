// src/bin/pathways.rs
use std::process;

use clap::Parser;
use colored::Colorize;

use pathways_core::cli::{dispatch, Cli};

fn main() {
    let cli = Cli::parse();
    match dispatch::execute(cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            process::exit(1);
        }
    }
}

// src/main.rs
use std::process::ExitCode;

use clap::Parser;
use lowerlines::{
    cli::Args,
    processor::{ProcessOptions, run_stdio},
};

fn main() -> ExitCode {
    let args = Args::parse();
    let options = ProcessOptions::from(args);

    match run_stdio(options) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

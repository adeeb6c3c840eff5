use clap::Parser;
use nordic_processor::cli::{Args, run};
use std::process;

fn main() {
    let args = Args::parse();

    match run(args) {
        Ok(_stats) => {
            // Stats have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

// src/bin/cli.rs
use teamhub::cli;

fn main() {
    env_logger::init();
    if let Err(e) = color_eyre::install() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    if let Err(e) = cli::run() {
        eprintln!("Error: {e:?}");
        std::process::exit(1);
    }
}

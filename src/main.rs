use std::process::ExitCode;

use clap::Parser;
use rand::Rng;

use starmap::cli::{args::Args, logger};
use starmap::io::TerminalIO;
use starmap::services::game::Game;
use starmap::{GalaxyConfig, GameResult, Session};

fn run(args: Args) -> GameResult<()> {
    let config = match &args.config {
        Some(path) => GalaxyConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => GalaxyConfig::default(),
    };
    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    log::info!("seed: {seed}");

    println!("*** STAR MAP ***");
    println!();

    let session = Session::with_config(&config, seed)?;
    Game::new(session, TerminalIO, TerminalIO).run()
}

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(e) = logger::init(args.verbose) {
        eprintln!("Error: {}", e);
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

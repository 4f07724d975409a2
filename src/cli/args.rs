use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "starmap", about = "Explore a randomly populated galaxy")]
pub struct Args {
    #[arg(short, long, help = "Seed for the random number generator")]
    pub seed: Option<u64>,

    #[arg(short, long, help = "JSON file overriding the galaxy population")]
    pub config: Option<PathBuf>,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Log more (repeat for debug output)")]
    pub verbose: u8,
}

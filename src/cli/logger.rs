use env_logger::{Builder, Env};
use log::{LevelFilter, SetLoggerError};

/// Map `-v` repetitions to a level: warnings by default, then info, then debug.
pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

/// Logger writing to stderr so records don't interleave with game output.
/// `-v` sets the base level; directives in `env` (normally `RUST_LOG`)
/// are applied on top.
fn builder(verbose: u8, env: Env) -> Builder {
    let mut builder = Builder::new();
    builder.filter_level(level_for(verbose)).parse_env(env);
    builder
}

/// Install the global logger. Fails if one is already installed.
pub fn init(verbose: u8) -> Result<(), SetLoggerError> {
    builder(verbose, Env::default()).try_init()
}

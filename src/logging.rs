//! Tracing subscriber setup for the CLI.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

fn default_level(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Installs a compact stderr subscriber. `RUST_LOG` overrides the default level.
pub fn init_tracing(verbosity: u8, quiet: bool) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level(verbosity, quiet).into())
        .from_env_lossy();

    // A subscriber may already be installed when embedded in another tool.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_the_level() {
        assert_eq!(default_level(0, false), LevelFilter::WARN);
        assert_eq!(default_level(2, false), LevelFilter::DEBUG);
        assert_eq!(default_level(7, false), LevelFilter::TRACE);
        assert_eq!(default_level(3, true), LevelFilter::ERROR);
    }
}

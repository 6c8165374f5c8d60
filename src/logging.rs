//! Log output goes to stderr through `env_logger` natively and to the browser
//! console through `console_log` on the web.

use log::LevelFilter;

/// Level used until the config has been read.
const STARTUP_LEVEL: LevelFilter = LevelFilter::Info;

/// Installs the logger. Calling this more than once is harmless.
pub(crate) fn init() {
    if install().is_err() {
        log::debug!("logger already installed");
    }
    set_level(STARTUP_LEVEL);
}

/// Caps every log record at `level`.
///
/// Natively, `RUST_LOG` can still narrow this further per module.
pub(crate) fn set_level(level: LevelFilter) {
    log::set_max_level(level);
}

#[cfg(not(target_family = "wasm"))]
fn install() -> Result<(), log::SetLoggerError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("trace"))
        .try_init()
}

#[cfg(target_family = "wasm")]
fn install() -> Result<(), log::SetLoggerError> {
    console_log::init_with_level(log::Level::Trace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_follows_config() {
        init();
        assert_eq!(log::max_level(), STARTUP_LEVEL);

        set_level(LevelFilter::Debug);
        assert_eq!(log::max_level(), LevelFilter::Debug);

        // A second init keeps the installed logger and resets the cap.
        init();
        assert_eq!(log::max_level(), STARTUP_LEVEL);
    }
}

use clap::ArgMatches;
use env_logger::Env;
use glone_core::config::GlobalConfig;

pub struct GlobalOptionHandler();

impl GlobalOptionHandler {
    pub fn config(matches: &ArgMatches) -> GlobalConfig {
        let verbose = matches.get_flag("verbose");

        GlobalConfig { verbose }
    }

    /// RUST_LOG still wins over the level picked from --verbose.
    pub fn init_logger(global_config: &GlobalConfig) {
        let level = if global_config.verbose { "debug" } else { "warn" };

        env_logger::Builder::from_env(Env::default().default_filter_or(level))
            .format_timestamp(None)
            .init();
    }
}

use std::env;
use std::path::PathBuf;

/// Resolved configuration, built once at startup and passed by reference
/// into every component that needs it. Nothing in the crate reads ambient
/// global state, so two history stores can run with independent settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub log_dir: PathBuf,
    pub history_dir: PathBuf,
    pub history_file: PathBuf,
    pub max_history_size: usize,
    pub auto_save: bool,
    pub precision: u32,
    pub max_input_value: f64,
    pub encoding: String,
}

impl Default for Config {
    fn default() -> Self {
        let history_dir = PathBuf::from("history");
        Config {
            log_dir: PathBuf::from("logs"),
            history_file: history_dir.join("history.csv"),
            history_dir,
            max_history_size: 1000,
            auto_save: true,
            precision: 6,
            max_input_value: 1e9,
            encoding: String::from("utf-8"),
        }
    }
}

impl Config {
    /// Resolve configuration from `CALCULATOR_*` environment variables,
    /// falling back to defaults for absent or malformed values.
    pub fn from_env() -> Self {
        let defaults = Config::default();
        let history_dir = env::var("CALCULATOR_HISTORY_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.history_dir);
        Config {
            log_dir: env::var("CALCULATOR_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            history_file: history_dir.join("history.csv"),
            history_dir,
            max_history_size: parsed_var("CALCULATOR_MAX_HISTORY_SIZE", defaults.max_history_size),
            auto_save: env::var("CALCULATOR_AUTO_SAVE")
                .map(|raw| truthy(&raw))
                .unwrap_or(defaults.auto_save),
            precision: parsed_var("CALCULATOR_PRECISION", defaults.precision),
            max_input_value: parsed_var("CALCULATOR_MAX_INPUT_VALUE", defaults.max_input_value),
            encoding: env::var("CALCULATOR_DEFAULT_ENCODING").unwrap_or(defaults.encoding),
        }
    }
}

fn parsed_var<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(default)
}

fn truthy(raw: &str) -> bool {
    matches!(
        raw.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "y" | "on"
    )
}

use std::sync::Once;

/// Environment variable consulted when neither an explicit filter nor
/// `RUST_LOG` is set.
pub const TESSERA_LOG_ENV: &str = "TESSERA_LOG";

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "tessera_theme=debug,tessera_richtext=trace").
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl LoggingConfig {
    /// Only warnings and errors, regardless of the environment.
    pub fn quiet() -> Self {
        Self { env_filter: Some("warn".to_string()), ..Self::default() }
    }

    /// Resolves the filter string in precedence order: explicit filter,
    /// `RUST_LOG`, `TESSERA_LOG`.
    fn resolve_filter(&self) -> Option<String> {
        self.env_filter
            .clone()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .or_else(|| std::env::var(TESSERA_LOG_ENV).ok())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Subsequent calls are ignored. Intended usage is early in `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.resolve_filter() {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                builder.filter_level(log::LevelFilter::Info);
            }
        }

        builder.write_style(config.write_style);

        // Another logger may already be installed (e.g. by a test harness).
        if builder.try_init().is_err() {
            return;
        }

        log::debug!("logging initialized");
    });
}

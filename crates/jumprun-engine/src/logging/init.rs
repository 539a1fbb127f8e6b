use std::sync::Once;

/// Filter used when neither the config nor `RUST_LOG` provides one.
///
/// GPU backend crates are chatty at `info`; keep them at `warn`.
pub const DEFAULT_FILTER: &str = "info,wgpu_core=warn,wgpu_hal=warn,naga=warn";

/// Logger configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `env_logger` filter syntax, e.g. `"jumprun_game=debug,info"`.
    /// Takes precedence over `RUST_LOG`.
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
    /// Millisecond timestamps; phase transitions happen several times a second.
    pub timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
            timestamps: true,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once. Later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let rust_log = std::env::var("RUST_LOG").ok();
        let filter = effective_filter(config.env_filter.as_deref(), rust_log.as_deref());

        let mut builder = env_logger::Builder::new();
        builder.parse_filters(filter);
        builder.write_style(config.write_style);
        if config.timestamps {
            builder.format_timestamp_millis();
        } else {
            builder.format_timestamp(None);
        }

        // Another logger may already be installed (tests, embedding); keep it.
        if builder.try_init().is_ok() {
            log::debug!("logging initialized with filter `{filter}`");
        }
    });
}

/// Config filter, then `RUST_LOG`, then [`DEFAULT_FILTER`]. Blank values are skipped.
fn effective_filter<'a>(configured: Option<&'a str>, rust_log: Option<&'a str>) -> &'a str {
    configured
        .into_iter()
        .chain(rust_log)
        .find(|f| !f.trim().is_empty())
        .unwrap_or(DEFAULT_FILTER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_filter_wins() {
        assert_eq!(effective_filter(Some("debug"), Some("warn")), "debug");
    }

    #[test]
    fn falls_back_to_rust_log_then_default() {
        assert_eq!(effective_filter(None, Some("warn")), "warn");
        assert_eq!(effective_filter(Some("  "), None), DEFAULT_FILTER);
        assert_eq!(effective_filter(None, None), DEFAULT_FILTER);
    }
}

use std::io;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "info,tower_http=info,axum=info";

/// Initialize tracing subscriber with sensible defaults and stdout writer.
/// - Respects `RUST_LOG` if set
/// - Falls back to `info,tower_http=info,axum=info`
/// - Writes to stdout to improve visibility in environments that hide stderr
pub fn init_logging_default() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_writer(io::stdout)
        .try_init();
}

/// Initialize tracing subscriber with JSON structured output.
/// - Respects `RUST_LOG` if set
/// - Emits structured JSON logs for container log collectors
pub fn init_logging_json() {
    // 默认 info（含 tower_http 请求 span）；store 请求细节为 debug，需 RUST_LOG=info,service=debug 才可见
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .json()
        .with_writer(io::stdout)
        .try_init();
}

/// Pick the output format from `LOG_FORMAT` (`json` or anything else for compact).
pub fn init_logging_from_env() {
    if is_json_format(std::env::var("LOG_FORMAT").ok().as_deref()) {
        init_logging_json();
    } else {
        init_logging_default();
    }
}

fn is_json_format(value: Option<&str>) -> bool {
    matches!(value.map(|v| v.trim().to_ascii_lowercase()).as_deref(), Some("json"))
}

#[cfg(test)]
mod tests {
    use super::{is_json_format, DEFAULT_FILTER};
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::EnvFilter;

    #[test]
    fn json_format_is_case_insensitive() {
        assert!(is_json_format(Some("JSON")));
        assert!(is_json_format(Some(" json ")));
    }

    #[test]
    fn other_formats_fall_back_to_compact() {
        assert!(!is_json_format(None));
        assert!(!is_json_format(Some("pretty")));
    }

    #[test]
    fn default_filter_hides_store_debug_events() {
        assert_eq!(EnvFilter::new(DEFAULT_FILTER).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(EnvFilter::new("info,service=debug").max_level_hint(), Some(LevelFilter::DEBUG));
    }
}

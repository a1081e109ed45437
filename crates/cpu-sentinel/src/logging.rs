use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "info";

/// Diagnostics go to stderr; stdout carries the console report.
pub fn init(json: bool) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter(std::env::var("RUST_LOG").ok()))
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn filter(directives: Option<String>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_info() {
        assert_eq!(filter(None).to_string(), "info");
    }

    #[test]
    fn rust_log_directives_win() {
        assert_eq!(filter(Some("debug".into())).to_string(), "debug");
    }

    #[test]
    fn unparsable_directives_fall_back_to_info() {
        assert_eq!(filter(Some("cpu_sentinel=loud".into())).to_string(), "info");
    }
}

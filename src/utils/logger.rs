use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_DIRECTIVE: &str = "cos_upload_provider=info,warn";
pub const VERBOSE_DIRECTIVE: &str = "cos_upload_provider=debug,info";

/// `RUST_LOG` wins over `default_directive`
fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

pub fn init_cli_logger(verbose: bool) {
    init_cli_logger_with(if verbose {
        VERBOSE_DIRECTIVE
    } else {
        DEFAULT_DIRECTIVE
    });
}

pub fn init_cli_logger_with(default_directive: &str) {
    tracing_subscriber::registry()
        .with(env_filter(default_directive))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

/// JSON 格式，給託管環境的日誌收集用
pub fn init_json_logger(default_directive: &str) {
    tracing_subscriber::registry()
        .with(env_filter(default_directive))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr)
                .json(),
        )
        .init();
}

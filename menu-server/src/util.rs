//! Shared utility functions for menu-server

use std::path::Path;

pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Initialize tracing.
///
/// `RUST_LOG` overrides the default filter. When `log_dir` exists, output
/// goes to a daily rolling file instead of stdout.
pub fn init_logger(log_dir: Option<&str>) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "menu_server=info,tower_http=info".into());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.exists() {
            let file_appender = tracing_appender::rolling::daily(log_path, "menu-server");
            subscriber.with_writer(file_appender).with_ansi(false).init();
            return;
        }
        eprintln!("LOG_DIR {dir} does not exist, logging to stdout");
    }

    subscriber.init();
}

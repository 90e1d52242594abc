use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LOG_DIR: &str = "logs";

fn log_dir() -> PathBuf {
    std::env::var("MAPS_PROXY_LOG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_LOG_DIR))
}

/// Initialize logger system
pub fn init_logger() {
    // Capture log macro logs
    let _ = tracing_log::LogTracer::init();

    // Console output layer
    let console_layer = fmt::Layer::new()
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true);

    // File output layer, daily rolling, ANSI disabled
    let file_layer = match fs::create_dir_all(log_dir()) {
        Ok(()) => {
            let file_appender = tracing_appender::rolling::daily(log_dir(), "maps-proxy.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            // Leak the guard so the writer lives until process exit
            std::mem::forget(guard);

            Some(
                fmt::Layer::new()
                    .with_writer(non_blocking)
                    .with_ansi(false)
                    .with_target(true)
                    .with_level(true),
            )
        }
        Err(e) => {
            eprintln!("Failed to create log directory {:?}: {}", log_dir(), e);
            None
        }
    };

    // Default to INFO and above
    let filter_layer = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // try_init avoids a crash on re-initialization (tests)
    let _ = tracing_subscriber::registry()
        .with(filter_layer)
        .with(console_layer)
        .with(file_layer)
        .try_init();

    info!("Logger system initialized (console + daily rolling file)");
}

use anyhow::Result;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize structured logging based on verbosity level
pub fn init_logging(verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("addon_installer=debug,info"))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("addon_installer=info,warn,error"))
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(true)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    if verbose {
        tracing::info!("Verbose logging enabled");
    }

    Ok(())
}

/// Log a file load or save
pub fn log_file_operation(operation: &str, path: &Path, success: bool) {
    if success {
        tracing::debug!(
            operation = operation,
            path = %path.display(),
            "File operation completed"
        );
    } else {
        tracing::warn!(
            operation = operation,
            path = %path.display(),
            "File operation failed"
        );
    }
}

/// Log a process launch
pub fn log_shell_command(program: &str, dir: &Path) {
    tracing::debug!(
        program = program,
        dir = %dir.display(),
        "Launching process"
    );
}

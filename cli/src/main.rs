use clap::Parser;
mod commands;
use chartops_core::error;
use commands::cli;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

static LOG_GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
    std::sync::OnceLock::new();

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let exit = match real_main().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            exit_code_for_error(&e)
        }
    };

    std::process::exit(exit);
}

async fn real_main() -> Result<i32, error::CliError> {
    let args = cli::Args::parse();
    let cfg = chartops_core::config::load(args.config.as_deref())
        .map_err(|e| error::CliError::Config(format!("{e:#}")))?;
    init_tracing(&cfg.logging).map_err(error::CliError::Command)?;

    tracing::debug!(command = ?args.command, "dispatching");
    dispatch(args.command, &cfg).await
}

fn exit_code_for_error(e: &error::CliError) -> i32 {
    // 0: success
    // 1: a job failed, a chart is invalid, or a status update was rejected (not an error)
    // 11: config error
    // 20: IO / scan error
    match e {
        error::CliError::Config(_) => 11,
        error::CliError::Io(_) => 20,
        error::CliError::Command(_) => 20,
        error::CliError::Validate(_) => 20,
    }
}

async fn dispatch(
    cmd: cli::Commands,
    cfg: &chartops_core::config::AppConfig,
) -> Result<i32, error::CliError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cmd {
        cli::Commands::Generate(generate_args) => {
            commands::generate::handle_generate(generate_args, cfg, &mut out).await
        }
        cli::Commands::Status(status_args) => {
            commands::status::handle_status(status_args, cfg, &mut out)
        }
        cli::Commands::Validate => commands::validate::handle_validate(cfg, &mut out),
    }
}

fn init_tracing(logging: &chartops_core::config::LoggingConfig) -> Result<(), String> {
    if !logging.enabled {
        return Ok(());
    }

    let filter = match std::env::var("RUST_LOG") {
        Ok(v) if !v.trim().is_empty() => EnvFilter::from_default_env(),
        _ => EnvFilter::try_new(logging.level.clone()).map_err(|e| e.to_string())?,
    };

    let mut maybe_writer = None;

    if logging.file {
        let dir = match logging
            .directory
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            Some(d) => std::path::PathBuf::from(d),
            None => std::env::temp_dir().join("chartops"),
        };

        std::fs::create_dir_all(&dir).map_err(|e| format!("create log dir failed: {e}"))?;
        let file_name = format!("chartops.{}.log", std::process::id());
        let appender = tracing_appender::rolling::never(dir, file_name);
        let (non_blocking, guard) = tracing_appender::non_blocking(appender);
        let _ = LOG_GUARD.set(guard);
        maybe_writer = Some(non_blocking);
    }

    if !logging.console && maybe_writer.is_none() {
        return Err("logging disabled for both console and file".to_string());
    }

    let console_layer = logging.console.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(atty::is(atty::Stream::Stderr))
            .with_target(false)
    });

    let file_layer = maybe_writer.map(|w| {
        tracing_subscriber::fmt::layer()
            .with_writer(w)
            .with_ansi(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(())
}

use std::io::{self, Write};
use std::process::ExitCode;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

mod app;
mod cli;
mod config;
mod db;
mod error;
mod models;

use app::App;
use config::Config;
use error::{AppError, Result};

#[tokio::main]
async fn main() -> ExitCode {
    // Only warnings and errors unless RUST_LOG says otherwise
    tracing_subscriber::fmt()
        .with_env_filter(log_filter().from_env_lossy())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => return fail(e),
    };

    // Open the store and create the schema before anything else
    let app = match connect(&config, &mut io::stdout()).await {
        Ok(app) => app,
        Err(e) => return fail(e),
    };

    let result = run(&app, &args, &mut io::stdout().lock()).await;

    if let Err(e) = app.close().await {
        tracing::warn!(error = %e, "failed to close database");
    }

    if let Err(e) = &result {
        eprintln!("Error: {}", e);
    }
    ExitCode::from(exit_status(&result))
}

fn log_filter() -> tracing_subscriber::filter::Builder {
    EnvFilter::builder().with_default_directive(LevelFilter::WARN.into())
}

async fn connect<W: Write>(config: &Config, out: &mut W) -> Result<App> {
    let app = App::new(config).await?;
    writeln!(out, "Database connected!")?;
    Ok(app)
}

async fn run<W: Write>(app: &App, args: &[String], out: &mut W) -> Result<()> {
    let command = cli::parse_args(args)?;
    cli::dispatch(app, command, out).await?;
    out.flush()?;
    Ok(())
}

/// Status code for the outcome of `connect` or `run`: any error that
/// reaches here is fatal.
fn exit_status(result: &Result<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(_) => 1,
    }
}

fn fail(e: AppError) -> ExitCode {
    eprintln!("Error: {}", e);
    ExitCode::from(exit_status(&Err(e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn argv(list: &[&str]) -> Vec<String> {
        std::iter::once("todo")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    fn temp_config(dir: &TempDir) -> Config {
        Config {
            db_path: dir.path().join("todo.db"),
        }
    }

    #[test]
    fn debug_directive_is_kept() {
        let filter = log_filter().parse_lossy("debug");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn defaults_to_warn() {
        let filter = log_filter().parse_lossy("");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }

    #[tokio::test]
    async fn connected_is_printed_on_every_invocation() {
        let dir = TempDir::new().unwrap();
        let config = temp_config(&dir);

        for _ in 0..2 {
            let mut out = Vec::new();
            let app = connect(&config, &mut out).await.unwrap();
            assert_eq!(String::from_utf8(out).unwrap(), "Database connected!\n");
            app.close().await.unwrap();
        }
    }

    #[tokio::test]
    async fn non_numeric_id_exits_with_failure() {
        let dir = TempDir::new().unwrap();
        let app = App::new(&temp_config(&dir)).await.unwrap();

        for verb in ["delete", "complete"] {
            let mut out = Vec::new();
            let result = run(&app, &argv(&[verb, "abc"]), &mut out).await;
            assert!(matches!(result, Err(AppError::InvalidId)));
            assert_eq!(exit_status(&result), 1);
            assert!(out.is_empty());
        }
    }

    #[tokio::test]
    async fn user_errors_exit_with_success() {
        let dir = TempDir::new().unwrap();
        let app = App::new(&temp_config(&dir)).await.unwrap();

        for args in [
            argv(&["add", ""]),
            argv(&["delete", "999"]),
            argv(&["complete", "999"]),
            argv(&["bogus", "1"]),
            argv(&["help"]),
            argv(&[]),
        ] {
            let mut out = Vec::new();
            let result = run(&app, &args, &mut out).await;
            assert_eq!(exit_status(&result), 0, "args: {args:?}");
        }
    }

    #[tokio::test]
    async fn store_failure_on_show_exits_with_failure() {
        let dir = TempDir::new().unwrap();
        let app = App::new(&temp_config(&dir)).await.unwrap();
        app.repository.drop_table().await.unwrap();

        let mut out = Vec::new();
        let result = run(&app, &argv(&["show"]), &mut out).await;
        assert!(matches!(result, Err(AppError::Database(_))));
        assert_eq!(exit_status(&result), 1);

        let mut out = Vec::new();
        let result = run(&app, &argv(&["add", "x"]), &mut out).await;
        assert_eq!(exit_status(&result), 0);
    }
}

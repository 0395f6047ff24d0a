//! Apply or inspect the school schema.
//!
//! Usage: `migrate [up|down|status|fresh]` (default `up`). Connection settings
//! come from `config.toml` / `CONFIG_PATH`, with `DATABASE_URL` as fallback.

use std::process::ExitCode;

use configs::{AppConfig, LogFormat};
use migration::{Migrator, MigratorTrait};
use tracing::{error, info};

#[derive(Clone, Copy, Debug)]
enum Command {
    Up,
    Down,
    Status,
    Fresh,
}

impl Command {
    fn parse(arg: Option<&str>) -> anyhow::Result<Self> {
        match arg.map(str::to_ascii_lowercase).as_deref() {
            None | Some("up") => Ok(Command::Up),
            Some("down") => Ok(Command::Down),
            Some("status") => Ok(Command::Status),
            Some("fresh") => Ok(Command::Fresh),
            Some(other) => Err(anyhow::anyhow!("unknown command `{}`; expected up, down, status or fresh", other)),
        }
    }
}

async fn run(cfg: &AppConfig, command: Command) -> anyhow::Result<()> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    match command {
        Command::Up => Migrator::up(&db, None).await?,
        Command::Down => Migrator::down(&db, Some(1)).await?,
        Command::Status => Migrator::status(&db).await?,
        Command::Fresh => Migrator::fresh(&db).await?,
    }
    info!(service = "migrate", event = "done", ?command, "migration command finished");
    Ok(())
}

fn main() -> ExitCode {
    let cfg = match AppConfig::load_and_validate() {
        Ok(cfg) => cfg,
        Err(e) => {
            common::init_logging_default(common::DEFAULT_FILTER);
            error!(service = "migrate", event = "config_invalid", error = %e, "failed to load configuration");
            return ExitCode::FAILURE;
        }
    };
    common::init_logging(cfg.logging.format == LogFormat::Json, &cfg.logging.filter);

    let arg = std::env::args().nth(1);
    let command = match Command::parse(arg.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            error!(service = "migrate", event = "bad_arguments", error = %e, "invalid arguments");
            return ExitCode::FAILURE;
        }
    };

    let rt = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "migrate", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(service = "migrate", event = "start", ?command, version = env!("CARGO_PKG_VERSION"), "running migrations");
    match rt.block_on(run(&cfg, command)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(service = "migrate", event = "failed", error = %e, "migration command failed");
            ExitCode::FAILURE
        }
    }
}

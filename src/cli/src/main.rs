use anyhow::Result;
use env_logger::{Builder, Env, Target};
use esp_led_remote::{
    config::AppConfig, http_client::ReqwestExecutor, shell::Shell, storage::IniStore,
};
use log::{error, info};
use std::io::Write;
use tokio::io::BufReader;

#[tokio::main]
async fn main() {
    log_panics::init();

    initialize_logging();

    info!("module version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run().await {
        error!("application error: {e:#}");
        std::process::exit(1);
    }
}

fn initialize_logging() {
    let mut builder = if cfg!(debug_assertions) {
        Builder::from_env(Env::default().default_filter_or("debug"))
    } else {
        Builder::from_env(Env::default().default_filter_or("info"))
    };

    builder.format(|f, record| match record.level() {
        log::Level::Error => writeln!(f, "error: {}", record.args()),
        _ => writeln!(f, "{}", record.args()),
    });

    // stdout belongs to the view
    builder.target(Target::Stderr).init();
}

async fn run() -> Result<()> {
    let config = AppConfig::get();
    info!("storage file: {:?}", config.storage.file);

    let http = ReqwestExecutor::new()?;
    let store = IniStore::new(&config.storage.file);
    let mut shell = Shell::new(http, store, std::io::stdout());

    shell.run(BufReader::new(tokio::io::stdin())).await?;

    info!("good bye");
    Ok(())
}

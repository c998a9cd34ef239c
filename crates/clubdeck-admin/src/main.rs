#![forbid(unsafe_code)]

//! `clubdeck` — terminal admin console for the clubdeck backend.

mod app;
mod cli;
mod fixtures;

use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use clubdeck_client::ApiClient;
use clubdeck_forms::i18n::Lang;

use crate::app::App;
use crate::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cli.log_filter())),
        )
        .with_writer(io::stderr)
        .init();

    let lang = Lang::from_code(&cli.lang);
    let client = ApiClient::new(&cli.api, lang)?;
    let users = fixtures::load(cli.fixture.as_deref())?;
    tracing::info!(rows = users.len(), api = %cli.api, "starting console");
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let mut app = App::new(client, rt, users, cli.per_page, lang);
    app.run(&mut io::stdout())
}

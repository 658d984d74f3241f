use crate::opt::{Cli, Commands, Db, Run};
use anyhow::{Context, Result};
use axum::serve;
use clap::Parser;
use handlebars::Handlebars;
use manabi_db::migration;
use manabi_db::sea_orm::{ConnectOptions, Database};
use manabi_utils::net::create_listener;
use std::env;
use std::error::Error;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use url::Url;

mod app;
mod opt;
mod routes;
mod views;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
const DEFAULT_PORT: u16 = 8000;

pub(crate) struct InnerAppConfig {
    templates: Handlebars<'static>,
}

#[derive(Clone)]
pub(crate) struct AppConfig(Arc<InnerAppConfig>);

impl AppConfig {
    pub fn new(templates: Handlebars<'static>) -> Self {
        Self(Arc::new(InnerAppConfig { templates }))
    }

    pub fn templates(&self) -> &Handlebars<'static> {
        &self.0.templates
    }
}

async fn run(opt: Run) -> Result<()> {
    manabi_utils::tracing::setup()?;

    let db_url = match opt.database_url {
        Some(url) => url,
        None => {
            let raw = env::var("DATABASE_URL").context("pass --database-url or set DATABASE_URL")?;
            Url::parse(&raw)?
        }
    };

    let pool = Database::connect(build_connect_options(&opt.db, db_url)).await?;
    migration::migrate(&pool)
        .await
        .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to run migrations"))?;

    let app_config = AppConfig::new(views::create_engine()?);
    let app = app::create_app(app_config, opt.deletable, pool);

    let listener = create_listener((opt.host, opt.port), (DEFAULT_HOST, DEFAULT_PORT)).await?;
    tracing::info!(local_addr = %listener.local_addr()?, "starting app");
    serve::serve(listener, app.into_make_service()).await?;
    Ok(())
}

fn build_connect_options(db_options: &Db, db_url: Url) -> ConnectOptions {
    let mut options = ConnectOptions::new(db_url);
    if let Some(min_connections) = db_options.db_min_connections {
        options.min_connections(min_connections);
    }
    if let Some(max_connections) = db_options.db_max_connections {
        options.max_connections(max_connections);
    }
    options
}

fn main() -> Result<()> {
    let main = async {
        let opt = Cli::parse();

        match opt.command {
            Commands::Run(o) => run(o).await?,
        }
        Ok(())
    };

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(main)
}

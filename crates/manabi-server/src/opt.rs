use clap::{Args, Parser, Subcommand};
use std::net::IpAddr;
use url::Url;

#[derive(Debug, Parser)]
#[command(name = "manabi", about = "Run the learning log server")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    Run(Run),
}

#[derive(Debug, Clone, Args)]
#[group(multiple = true, required = false)]
pub(crate) struct Db {
    #[arg(long, help = "Min connections")]
    pub(crate) db_min_connections: Option<u32>,

    #[arg(long, help = "Max connections")]
    pub(crate) db_max_connections: Option<u32>,
}

#[derive(Debug, Clone, Parser)]
pub(crate) struct Run {
    #[arg(long)]
    pub(crate) host: Option<IpAddr>,

    #[arg(short, long)]
    pub(crate) port: Option<u16>,

    #[arg(long, help = "The database url, falls back to the DATABASE_URL environment variable")]
    pub(crate) database_url: Option<Url>,

    #[arg(long, help = "If set topics can be deleted through the maintenance routes")]
    pub(crate) deletable: bool,

    #[command(flatten)]
    pub(crate) db: Db,
}

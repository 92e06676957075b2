use crate::{core::AppConfig, server, TravelPlanner};
use anyhow::Context;
use clap::{Arg, Command};
use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: &str = "5000";

fn command() -> Command {
    Command::new("travel-planner")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Travel-planning proxy over Gemini, SerpAPI and ExchangeRate-API")
        .arg(
            Arg::new("host")
                .long("host")
                .value_name("HOST")
                .env("TRAVEL_PLANNER_HOST")
                .help("Address to bind")
                .default_value(DEFAULT_HOST),
        )
        .arg(
            Arg::new("port")
                .short('p')
                .long("port")
                .value_name("PORT")
                .env("TRAVEL_PLANNER_PORT")
                .help("Port to listen on")
                .value_parser(clap::value_parser!(u16))
                .default_value(DEFAULT_PORT),
        )
}

/// Accepts IPv4 and bare IPv6 hosts (`::1`, not `[::1]`).
fn bind_address(host: &str, port: u16) -> anyhow::Result<SocketAddr> {
    let ip: IpAddr = host
        .trim()
        .parse()
        .with_context(|| format!("invalid bind host `{}`", host))?;
    Ok(SocketAddr::new(ip, port))
}

/// CLI entry point: load `.env`, configure logging, serve.
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let matches = command().get_matches();
    let host = matches
        .get_one::<String>("host")
        .map(String::as_str)
        .unwrap_or(DEFAULT_HOST);
    let port = matches.get_one::<u16>("port").copied().unwrap_or(5000);
    let addr = bind_address(host, port)?;

    let config = AppConfig::from_env().context("failed to load configuration")?;
    info!(
        model = config.gemini_model(),
        timeout_secs = config.timeout().as_secs(),
        "configuration loaded"
    );
    let planner = TravelPlanner::new(&config).context("failed to build travel planner")?;

    server::serve(addr, Arc::new(planner))
        .await
        .context("server terminated")?;
    Ok(())
}

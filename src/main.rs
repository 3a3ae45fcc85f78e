use std::{
    net::Ipv4Addr,
    panic::{set_hook, take_hook},
    process::exit,
};

use anyhow::{anyhow, Error};
use axum::serve;
use log::{error, info};
use psp_pagination_api::{api, config::CONFIG, state::STATE};
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();

    let default_panic = take_hook();
    set_hook(Box::new(move |info| {
        error!("Panic: {}", info);
        default_panic(info);
        exit(1);
    }));

    let default_level = match CONFIG.is_dev {
        true => LevelFilter::DEBUG,
        false => LevelFilter::INFO,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env()?
        .add_directive("h2=info".parse()?)
        .add_directive("hyper=info".parse()?)
        .add_directive("tower_http=debug".parse()?);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .init();
    info!(
        "Serving {}-wide page windows, {} items per page by default",
        STATE.window.max_visible(),
        STATE.default_items_per_page
    );

    let app = api::app(STATE.clone());
    let listener = TcpListener::bind((Ipv4Addr::UNSPECIFIED, CONFIG.port)).await?;
    info!("Server is listening on http://0.0.0.0:{}", CONFIG.port);
    serve(listener, app)
        .await
        .map_err(|e| anyhow!("Server error: {}", e))?;

    Ok(())
}

use actix_web::{App, HttpServer, middleware::Logger};
use anyhow::Context;
use env_logger::Env;

mod config;
mod serve;

use config::Config;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // a missing .env is fine
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?;
    if !config.index_file().is_file() {
        log::warn!(
            "{} not found; build the ui with trunk first",
            config.index_file().display()
        );
    }

    log::info!(
        "serving {} on http://{}:{}",
        config.dist_dir.display(),
        config.host,
        config.port
    );

    let site = config.clone();
    HttpServer::new(move || {
        let site = site.clone();
        App::new()
            .wrap(Logger::default())
            .configure(move |cfg| serve::configure(cfg, &site))
    })
    .bind((config.host.as_str(), config.port))
    .with_context(|| format!("binding {}:{}", config.host, config.port))?
    .run()
    .await
    .context("http server stopped")
}

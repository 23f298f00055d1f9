mod api;
mod blockchain;
mod config;
mod error;
mod network;
mod node;
#[cfg(test)]
mod testing;
mod transaction;

use actix_web::{App, HttpServer, middleware::Logger, web};
use dotenvy::dotenv;
use env_logger::Env;
use log::info;
use std::env;

use config::Settings;
use node::Node;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let _ = dotenv();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let settings = Settings::from_env().with_args(env::args());
    let node = Node::new(&settings).map_err(std::io::Error::other)?;

    info!(
        "⛓️ Starting ledger node at http://{}:{} (difficulty={})",
        settings.host,
        settings.port,
        node.difficulty()
    );

    let node = web::Data::new(node);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(node.clone())
            .configure(api::init_routes)
    })
    .bind((settings.host.as_str(), settings.port))?
    .run()
    .await
}

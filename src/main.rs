mod logger;
mod server;

use clap::Parser;
use log::info;
use server::config::ServerConfig;
use server::HttpServer;

fn main() -> std::io::Result<()> {
    logger::init();

    let config = ServerConfig::parse();
    info!("Starting dev server with config: {:?}", config);

    server::signal::install()?;

    let server = HttpServer::new(&config)?;
    server.run()
}

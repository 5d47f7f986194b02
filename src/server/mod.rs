pub mod config;
pub mod http_status;
pub mod mime;
mod request_handler;
pub mod response;
pub mod signal;

use log::{debug, error, info};
use std::io::ErrorKind;
use std::net::TcpListener;
use std::path::PathBuf;

use config::ServerConfig;
use request_handler::handle_client;

pub struct HttpServer {
    listener: TcpListener,
    document_root: PathBuf,
}

impl HttpServer {
    pub fn new(config: &ServerConfig) -> std::io::Result<Self> {
        let addr = format!("{}:{}", config.host, config.port);
        let listener = TcpListener::bind(&addr)?;

        // File lookups are relative to the document root from here on.
        std::env::set_current_dir(&config.document_root)?;

        info!("Server started on http://{}", listener.local_addr()?);

        Ok(Self {
            listener,
            document_root: PathBuf::from("."),
        })
    }

    /// Accepts and serves connections one at a time until an interrupt is
    /// received.
    pub fn run(&self) -> std::io::Result<()> {
        info!("Press Ctrl+C to stop the server");

        let mut served = 0usize;

        loop {
            if signal::shutdown_requested() {
                info!("Server stopped ({} requests served)", served);
                return Ok(());
            }

            match self.listener.accept() {
                Ok((stream, addr)) => {
                    debug!("New connection from {}", addr);
                    handle_client(stream, &self.document_root);
                    served += 1;
                }
                // SIGINT lands here as EINTR; the flag check above decides.
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => {
                    error!("Error accepting connection: {}", e);
                }
            }
        }
    }
}

use crate::Server;
use actix_web::{
    web::{get, post, PathConfig},
    App, HttpServer,
};
use log::info;

mod v1;
pub use v1::{PathRequest, PathResponse};
use v1::{find_path, get_moves, square_selector_error};

/*
Endpoints:
* POST /api/v1/path               -> find_path(body.start, body.target)
* GET  /api/v1/moves/{row}/{col}  -> knight_moves((row, col))

Path segments that are not integers are answered with 400, like off-board squares.

Every request runs its own search, the server keeps no state between requests.
*/

pub struct ApiServer {
    pub port: u16,
    pub host: String,
}

impl Server for ApiServer {
    type ErrorKind = std::io::Error;

    fn new(host: String, port: u16) -> Self {
        Self { port, host }
    }

    fn default() -> Self {
        Self {
            port: Self::DEFAULT_PORT,
            host: Self::DEFAULT_HOST.to_string(),
        }
    }

    fn get_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn from_env() -> Self {
        let port = std::env::var("API_PORT").unwrap_or_else(|_| Self::DEFAULT_PORT.to_string());
        let host = std::env::var("API_HOST").unwrap_or_else(|_| Self::DEFAULT_HOST.to_string());
        let port = port.parse::<u16>().unwrap_or(Self::DEFAULT_PORT);
        Self::new(host, port)
    }

    async fn start(&mut self) -> Result<(), std::io::Error> {
        info!("starting api server on {}", self.get_address());
        let server = HttpServer::new(|| {
            App::new()
                .app_data(PathConfig::default().error_handler(square_selector_error))
                .route("/api/v1/path", post().to(find_path))
                .route("/api/v1/moves/{row}/{col}", get().to(get_moves))
        })
        .bind(self.get_address())?
        .run();
        server.await
    }
}

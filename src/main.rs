use knight_travails::{ApiServer, Server};

use log::info;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let mut api = ApiServer::from_env();
    info!("serving knight paths on {}", api.get_address());
    api.start().await
}

use std::path::PathBuf;

use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    env_logger::init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let products = match std::env::var_os("FIXTURES_DIR") {
        Some(dir) => mock_server::load_products(&PathBuf::from(dir))?,
        None => mock_server::bundled_products()?,
    };
    log::info!("serving {} product(s)", products.len());

    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    log::info!("listening on {addr}");
    mock_server::run(listener, products).await
}

use crate::config::Config;
use log::info;
use mongodb::bson::doc;
use mongodb::Client;

/// Opens the MongoDB client and verifies the server is reachable.
///
/// The caller owns the client and is expected to call `Client::shutdown`
/// once the server has stopped.
pub async fn connect_to_database(config: &Config) -> mongodb::error::Result<Client> {
    let client = Client::with_uri_str(&config.mongo_uri).await?;
    client
        .database(&config.db_name)
        .run_command(doc! { "ping": 1 })
        .await?;
    info!("Connected to MongoDB database {}", config.db_name);
    Ok(client)
}

pub async fn close_database(client: Client) {
    client.shutdown().await;
    info!("MongoDB connection closed");
}

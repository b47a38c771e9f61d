#![allow(non_snake_case)]

mod client;

#[cfg(feature = "server")]
use miaclub::server;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(client::App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use crate::server::{
            config::Config,
            model::app::{AppState, StorageConfig},
            startup,
        };

        dotenvy::dotenv().ok();
        let config = match Config::from_env() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            }
        };

        let session = startup::connect_to_session(&config).await?;
        let db = startup::connect_to_database(&config).await?;
        startup::prepare_storage(&config).await?;

        tracing::info!("Starting server");

        let state = AppState {
            db,
            storage: StorageConfig {
                root: config.storage_dir.clone(),
                public_url: config.public_url.clone(),
            },
        };

        let mut router = dioxus::server::router(client::App);
        let server_routes = server::router::routes().with_state(state).layer(session);
        router = router.merge(server_routes);

        Ok(router)
    })
}

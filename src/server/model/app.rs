use std::path::PathBuf;

use sea_orm::DatabaseConnection;

/// Location of the object storage buckets and the base of their public URLs
#[derive(Clone, Debug)]
pub struct StorageConfig {
    /// Directory holding one subdirectory per bucket
    pub root: PathBuf,
    /// Base URL without a trailing slash, e.g. `https://miaclub.pe`
    pub public_url: String,
}

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub storage: StorageConfig,
}

impl From<(DatabaseConnection, PathBuf, String)> for AppState {
    fn from((db, root, public_url): (DatabaseConnection, PathBuf, String)) -> Self {
        Self {
            db,
            storage: StorageConfig { root, public_url },
        }
    }
}

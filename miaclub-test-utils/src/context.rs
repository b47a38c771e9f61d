//! Test context returned by [`crate::TestBuilder::build`].

use std::{path::PathBuf, sync::Arc};

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tempfile::TempDir;
use tower_sessions::{MemoryStore, Session};

use crate::{constant::TEST_PUBLIC_URL, error::TestError};

/// Resources available to a running test.
///
/// The storage directory is removed when the context is dropped.
pub struct TestContext {
    pub db: DatabaseConnection,
    pub session: Session,
    pub storage: TempDir,
}

impl TestContext {
    /// Converts the context into the server's application state.
    ///
    /// Any type constructible from the database, the storage root and the public URL works,
    /// which keeps this crate independent of the server crate.
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<(DatabaseConnection, PathBuf, String)>,
    {
        T::from((
            self.db.clone(),
            self.storage_root(),
            TEST_PUBLIC_URL.to_string(),
        ))
    }

    pub fn storage_root(&self) -> PathBuf {
        self.storage.path().to_path_buf()
    }

    pub(crate) async fn new() -> Result<Self, TestError> {
        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;
        let storage = tempfile::tempdir()?;

        Ok(TestContext {
            db,
            session,
            storage,
        })
    }

    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}

use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use uuid::Uuid;

use crate::server::error::Error;

pub const SESSION_ACCOUNT_ID_KEY: &str = "miaclub:account:id";

/// ID of the auth account signed in with this session
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionAccountId(pub String);

impl SessionAccountId {
    pub async fn insert(session: &Session, account_id: Uuid) -> Result<(), Error> {
        session
            .insert(SESSION_ACCOUNT_ID_KEY, SessionAccountId(account_id.to_string()))
            .await?;

        Ok(())
    }

    pub async fn get(session: &Session) -> Result<Option<Uuid>, Error> {
        session
            .get::<SessionAccountId>(SESSION_ACCOUNT_ID_KEY)
            .await?
            .map(|SessionAccountId(id_str)| {
                Uuid::parse_str(&id_str).map_err(|e| {
                    Error::ParseError(format!("Failed to parse session account id: {}", e))
                })
            })
            .transpose()
    }
}

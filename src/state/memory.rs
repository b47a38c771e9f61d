//! In-memory collection and auth client for unit tests.

use std::{
    cell::{Cell, RefCell},
    collections::{HashMap, HashSet},
    fmt::Display,
};

use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::{
    model::{
        auth::AuthUserDto, backoffice_user::BackofficeUserDto, storage::UploadDto,
        web_config::WebConfigEntryDto,
    },
    state::collection::{
        AuthClient, ClientError, Collection, CollectionClient, ListQuery, Record,
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    Select,
    SelectOne,
    Insert,
    Update,
    Delete,
    FindByEmail,
    SelectConfig,
    UpsertConfig,
    Upload,
    SignUp,
    SignIn,
    SignOut,
    GetSession,
    ResetPassword,
}

pub const CREATED_AT: &str = "2025-01-01T00:00:00";

#[derive(Default)]
pub struct MemoryClient {
    rows: RefCell<HashMap<Collection, Vec<Value>>>,
    next_id: Cell<i32>,
    next_account: Cell<u128>,
    config: RefCell<Vec<WebConfigEntryDto>>,
    failing: RefCell<HashSet<Op>>,
    accounts: RefCell<Vec<(AuthUserDto, String)>>,
    session: RefCell<Option<AuthUserDto>>,
    calls: RefCell<Vec<Op>>,
}

impl MemoryClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every later call of `op` fails with a 500 status
    pub fn fail(&self, op: Op) {
        self.failing.borrow_mut().insert(op);
    }

    pub fn seed<R: Record + Serialize>(&self, rows: Vec<R>) {
        let values = rows
            .iter()
            .map(|row| serde_json::to_value(row).unwrap())
            .collect();
        self.rows.borrow_mut().insert(R::COLLECTION, values);
    }

    pub fn rows<R: Record>(&self) -> Vec<R> {
        self.rows
            .borrow()
            .get(&R::COLLECTION)
            .map(|values| {
                values
                    .iter()
                    .map(|value| serde_json::from_value(value.clone()).unwrap())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn seed_config(&self, entries: Vec<WebConfigEntryDto>) {
        *self.config.borrow_mut() = entries;
    }

    pub fn config(&self) -> Vec<WebConfigEntryDto> {
        self.config.borrow().clone()
    }

    pub fn add_account(&self, email: &str, password: &str) -> AuthUserDto {
        let next = self.next_account.get() + 1;
        self.next_account.set(next);

        let user = AuthUserDto {
            id: Uuid::from_u128(next),
            email: email.to_string(),
        };
        self.accounts
            .borrow_mut()
            .push((user.clone(), password.to_string()));

        user
    }

    pub fn set_session(&self, user: Option<AuthUserDto>) {
        *self.session.borrow_mut() = user;
    }

    pub fn session(&self) -> Option<AuthUserDto> {
        self.session.borrow().clone()
    }

    pub fn called(&self, op: Op) -> bool {
        self.calls.borrow().contains(&op)
    }

    fn check(&self, op: Op) -> Result<(), ClientError> {
        self.calls.borrow_mut().push(op);

        if self.failing.borrow().contains(&op) {
            return Err(ClientError::Status {
                status: 500,
                message: "Internal server error".to_string(),
            });
        }

        Ok(())
    }

    fn matches_id(value: &Value, id: &impl Display) -> bool {
        let id = id.to_string();
        match value.get("id") {
            Some(Value::Number(n)) => n.to_string() == id,
            Some(Value::String(s)) => *s == id,
            _ => false,
        }
    }

    fn not_found() -> ClientError {
        ClientError::Status {
            status: 404,
            message: "Not found".to_string(),
        }
    }
}

impl CollectionClient for MemoryClient {
    async fn select<R: Record>(&self, _query: ListQuery) -> Result<Vec<R>, ClientError> {
        self.check(Op::Select)?;

        Ok(self.rows::<R>())
    }

    async fn select_one<R: Record>(&self, id: &R::Id) -> Result<Option<R>, ClientError> {
        self.check(Op::SelectOne)?;

        Ok(self
            .rows
            .borrow()
            .get(&R::COLLECTION)
            .and_then(|values| values.iter().find(|v| Self::matches_id(v, id)).cloned())
            .map(|value| serde_json::from_value(value).unwrap()))
    }

    async fn insert<R: Record, I: Serialize>(&self, input: &I) -> Result<R, ClientError> {
        self.check(Op::Insert)?;

        let mut value = serde_json::to_value(input).unwrap();
        let object = value.as_object_mut().unwrap();
        if !object.contains_key("id") {
            let next = self.next_id.get() + 1;
            self.next_id.set(next);
            object.insert("id".to_string(), Value::from(next + 1000));
        }
        object
            .entry("created_at")
            .or_insert_with(|| Value::from(CREATED_AT));

        self.rows
            .borrow_mut()
            .entry(R::COLLECTION)
            .or_default()
            .insert(0, value.clone());

        serde_json::from_value(value).map_err(|e| ClientError::Decode(e.to_string()))
    }

    async fn update<R: Record, I: Serialize>(
        &self,
        id: &R::Id,
        input: &I,
    ) -> Result<R, ClientError> {
        self.check(Op::Update)?;

        let patch = serde_json::to_value(input).unwrap();
        let mut rows = self.rows.borrow_mut();
        let row = rows
            .get_mut(&R::COLLECTION)
            .and_then(|values| values.iter_mut().find(|v| Self::matches_id(v, id)))
            .ok_or_else(Self::not_found)?;

        if let (Some(row), Some(patch)) = (row.as_object_mut(), patch.as_object()) {
            for (key, value) in patch {
                row.insert(key.clone(), value.clone());
            }
        }

        serde_json::from_value(row.clone()).map_err(|e| ClientError::Decode(e.to_string()))
    }

    async fn delete<R: Record>(&self, id: &R::Id) -> Result<(), ClientError> {
        self.check(Op::Delete)?;

        if let Some(values) = self.rows.borrow_mut().get_mut(&R::COLLECTION) {
            values.retain(|v| !Self::matches_id(v, id));
        }

        Ok(())
    }

    async fn find_user_by_email(
        &self,
        email: &str,
    ) -> Result<Option<BackofficeUserDto>, ClientError> {
        self.check(Op::FindByEmail)?;

        Ok(self
            .rows::<BackofficeUserDto>()
            .into_iter()
            .find(|user| user.email == email))
    }

    async fn select_config(&self) -> Result<Vec<WebConfigEntryDto>, ClientError> {
        self.check(Op::SelectConfig)?;

        Ok(self.config())
    }

    async fn upsert_config(
        &self,
        entries: &[WebConfigEntryDto],
    ) -> Result<Vec<WebConfigEntryDto>, ClientError> {
        self.check(Op::UpsertConfig)?;

        let mut config = self.config.borrow_mut();
        for entry in entries {
            match config
                .iter_mut()
                .find(|existing| existing.config_name == entry.config_name)
            {
                Some(existing) => existing.config_value = entry.config_value.clone(),
                None => config.push(entry.clone()),
            }
        }

        Ok(entries.to_vec())
    }

    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        _bytes: Vec<u8>,
    ) -> Result<UploadDto, ClientError> {
        self.check(Op::Upload)?;

        Ok(UploadDto {
            path: path.to_string(),
            public_url: format!("http://localhost/storage/{}/{}", bucket, path),
        })
    }
}

impl AuthClient for MemoryClient {
    async fn sign_up(&self, email: &str, password: &str) -> Result<AuthUserDto, ClientError> {
        self.check(Op::SignUp)?;

        if self.accounts.borrow().iter().any(|(user, _)| user.email == email) {
            return Err(ClientError::Status {
                status: 409,
                message: "User already registered".to_string(),
            });
        }

        Ok(self.add_account(email, password))
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthUserDto, ClientError> {
        self.check(Op::SignIn)?;

        let user = self
            .accounts
            .borrow()
            .iter()
            .find(|(user, stored)| user.email == email && stored == password)
            .map(|(user, _)| user.clone())
            .ok_or_else(|| ClientError::Status {
                status: 401,
                message: "Invalid login credentials".to_string(),
            })?;

        self.set_session(Some(user.clone()));

        Ok(user)
    }

    async fn sign_out(&self) -> Result<(), ClientError> {
        self.check(Op::SignOut)?;

        self.set_session(None);

        Ok(())
    }

    async fn get_session(&self) -> Result<Option<AuthUserDto>, ClientError> {
        self.check(Op::GetSession)?;

        Ok(self.session())
    }

    async fn reset_password_for_email(&self, _email: &str) -> Result<(), ClientError> {
        self.check(Op::ResetPassword)
    }
}

//! Password authentication.
//!
//! Accounts are stored with an argon2 hash. Recovery only records a token; delivering it is
//! left to whoever operates the deployment.

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::auth::AuthUserDto,
    server::{
        data::auth_account::AuthAccountRepository,
        error::{auth::AuthError, Error},
        model::db::AuthAccountModel,
    },
    state::validation::is_valid_email,
};

/// Minimum password length accepted on sign up
pub const MIN_PASSWORD_LEN: usize = 6;

fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::PasswordHash(e.to_string()))
}

fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Emails are compared case-insensitively
fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

impl From<AuthAccountModel> for AuthUserDto {
    fn from(account: AuthAccountModel) -> Self {
        Self {
            id: account.id,
            email: account.email,
        }
    }
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an auth account.
    ///
    /// # Returns
    /// - `Ok(AuthUserDto)` - The new account
    /// - `Err(AuthError::InvalidEmail)` - Email does not look like `a@b.c`
    /// - `Err(AuthError::WeakPassword)` - Password shorter than [`MIN_PASSWORD_LEN`]
    /// - `Err(AuthError::EmailTaken)` - An account already uses the email
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<AuthUserDto, Error> {
        let email = normalize_email(email);
        if !is_valid_email(&email) {
            return Err(AuthError::InvalidEmail.into());
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::WeakPassword(MIN_PASSWORD_LEN).into());
        }

        let repo = AuthAccountRepository::new(self.db);
        if repo.find_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailTaken.into());
        }

        let account = repo.create(&email, hash_password(password)?).await?;

        tracing::info!("Created auth account {}", account.id);

        Ok(account.into())
    }

    /// Checks the credentials and records the sign in time.
    ///
    /// Unknown emails and wrong passwords both return [`AuthError::InvalidCredentials`].
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthUserDto, Error> {
        let repo = AuthAccountRepository::new(self.db);

        let Some(account) = repo.find_by_email(&normalize_email(email)).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &account.password_hash) {
            tracing::debug!("Wrong password for account {}", account.id);

            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(repo.update_last_sign_in(account).await?.into())
    }

    pub async fn get_account(&self, account_id: Uuid) -> Result<Option<AuthUserDto>, Error> {
        let account = AuthAccountRepository::new(self.db).get(account_id).await?;

        Ok(account.map(AuthUserDto::from))
    }

    /// Issues a recovery token when the email belongs to an account.
    ///
    /// Succeeds for unknown emails as well so callers cannot probe which emails exist.
    pub async fn request_recovery(&self, email: &str) -> Result<(), Error> {
        let email = normalize_email(email);
        if !is_valid_email(&email) {
            return Err(AuthError::InvalidEmail.into());
        }

        let repo = AuthAccountRepository::new(self.db);
        let Some(account) = repo.find_by_email(&email).await? else {
            tracing::debug!("Password recovery requested for unknown email");

            return Ok(());
        };

        let account = repo
            .set_recovery_token(account, Uuid::new_v4().to_string())
            .await?;

        tracing::info!("Issued password recovery token for account {}", account.id);

        Ok(())
    }
}

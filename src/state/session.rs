//! Session gates for the two halves of the product.
//!
//! [`BackofficeGate`] resolves the signed-in auth account into a role-bearing identity.
//! [`MemberLogin`] and [`MemberSession`] drive the storefront's simulated member login. The two
//! share no state.

use dioxus_logger::tracing;
use uuid::Uuid;

use crate::{
    model::{
        auth::AuthUserDto,
        backoffice_user::{BackofficeUserDto, NewBackofficeUserDto, Role},
        member::MemberProfile,
    },
    state::{
        collection::{AuthClient, ClientError, CollectionClient, RemoteClient},
        validation::is_valid_email,
        StatusMessage,
    },
};

pub const EMPTY_CREDENTIALS: &str = "Por favor, introduce tu email y contraseña.";
pub const INVALID_CREDENTIALS: &str = "Email o contraseña incorrectos.";
pub const ACCESS_DENIED: &str = "Acceso denegado: Tu cuenta no tiene permisos de BackOffice.";
pub const LOGIN_ERROR: &str = "Error al iniciar sesión";
pub const INVALID_EMAIL: &str = "Por favor, introduce un email válido.";
pub const RECOVERY_SENT: &str =
    "Se ha enviado un enlace de recuperación a tu email. Por favor, revisa tu bandeja de entrada.";
pub const RECOVERY_ERROR: &str = "Error al enviar el enlace";

/// Message the auth service returns for a wrong email or password
const INVALID_LOGIN_MESSAGE: &str = "Invalid login credentials";

/// The signed-in backoffice account
#[derive(Clone, Debug, PartialEq)]
pub struct BackofficeIdentity {
    pub id: Uuid,
    pub email: String,
    /// Local part of the email
    pub name: String,
    pub role: Role,
}

impl BackofficeIdentity {
    fn from_record(record: BackofficeUserDto) -> Self {
        let name = record
            .email
            .split('@')
            .next()
            .unwrap_or_default()
            .to_string();

        Self {
            id: record.id,
            email: record.email,
            name,
            role: record.role,
        }
    }
}

/// Outcome of looking up the role record of an auth account
#[derive(Clone, Debug, PartialEq)]
pub enum RoleLookup {
    Found(BackofficeUserDto),
    Absent,
    Failed(ClientError),
}

impl RoleLookup {
    pub async fn by_id<C: CollectionClient>(client: &C, id: &Uuid) -> Self {
        client.select_one::<BackofficeUserDto>(id).await.into()
    }

    pub async fn by_email<C: CollectionClient>(client: &C, email: &str) -> Self {
        client.find_user_by_email(email).await.into()
    }
}

impl From<Result<Option<BackofficeUserDto>, ClientError>> for RoleLookup {
    fn from(result: Result<Option<BackofficeUserDto>, ClientError>) -> Self {
        match result {
            Ok(Some(record)) => Self::Found(record),
            Ok(None) => Self::Absent,
            Err(err) => Self::Failed(err),
        }
    }
}

/// Outcome of resolving a session or a sign-in attempt
#[derive(Clone, Debug, PartialEq)]
pub enum Admission {
    Admitted(BackofficeIdentity),
    SignedOut,
    /// Denied or failed, with the message for the login form
    Rejected(String),
}

impl Admission {
    /// Resolves the session that exists when the backoffice mounts
    pub async fn restore<C: RemoteClient>(client: &C) -> Self {
        let session = match client.get_session().await {
            Ok(session) => session,
            Err(err) => {
                tracing::error!("Failed to fetch backoffice session: {}", err);
                None
            }
        };

        Self::from_session(client, session).await
    }

    pub async fn from_session<C: RemoteClient>(client: &C, session: Option<AuthUserDto>) -> Self {
        match session {
            Some(account) => Self::resolve_account(client, account).await,
            None => Self::SignedOut,
        }
    }

    async fn resolve_account<C: RemoteClient>(client: &C, account: AuthUserDto) -> Self {
        match RoleLookup::by_id(client, &account.id).await {
            found @ RoleLookup::Found(_) => Self::admit(client, found).await,
            RoleLookup::Absent => {
                let record = NewBackofficeUserDto {
                    id: account.id,
                    email: account.email.clone(),
                    role: Role::default(),
                    is_active: true,
                };

                match client.insert::<BackofficeUserDto, _>(&record).await {
                    Ok(created) => {
                        tracing::info!("Provisioned backoffice user {}", created.email);

                        Self::Admitted(BackofficeIdentity::from_record(created))
                    }
                    Err(err) => {
                        tracing::error!(
                            "Failed to provision backoffice user {}: {}",
                            account.email,
                            err
                        );

                        Self::deny(client).await
                    }
                }
            }
            RoleLookup::Failed(err) => {
                tracing::error!("Failed to look up role of {}: {}", account.email, err);

                Self::deny(client).await
            }
        }
    }

    /// Signs in with email and password, then checks the role record by email
    pub async fn sign_in<C: RemoteClient>(client: &C, email: &str, password: &str) -> Self {
        let email = email.trim();
        if email.is_empty() || password.trim().is_empty() {
            return Self::Rejected(EMPTY_CREDENTIALS.to_string());
        }

        if let Err(err) = client.sign_in_with_password(email, password).await {
            tracing::debug!("Backoffice sign in failed for {}: {}", email, err);

            return Self::Rejected(if err.to_string() == INVALID_LOGIN_MESSAGE {
                INVALID_CREDENTIALS.to_string()
            } else {
                format!("{}: {}", LOGIN_ERROR, err)
            });
        }

        let lookup = RoleLookup::by_email(client, email).await;
        if let RoleLookup::Failed(err) = &lookup {
            tracing::error!("Failed to look up role of {}: {}", email, err);
        }

        Self::admit(client, lookup).await
    }

    /// Admits an active role record, denying anything else
    async fn admit<C: AuthClient>(client: &C, lookup: RoleLookup) -> Self {
        match lookup {
            RoleLookup::Found(record) if record.is_active => {
                Self::Admitted(BackofficeIdentity::from_record(record))
            }
            RoleLookup::Found(record) => {
                tracing::warn!("Inactive backoffice user {} denied", record.email);

                Self::deny(client).await
            }
            RoleLookup::Absent | RoleLookup::Failed(_) => Self::deny(client).await,
        }
    }

    async fn deny<C: AuthClient>(client: &C) -> Self {
        if let Err(err) = client.sign_out().await {
            tracing::error!("Failed to sign out denied account: {}", err);
        }

        Self::Rejected(ACCESS_DENIED.to_string())
    }
}

/// Authentication gate in front of every backoffice screen
#[derive(Clone, Debug, PartialEq)]
pub struct BackofficeGate {
    identity: Option<BackofficeIdentity>,
    loading: bool,
    message: Option<String>,
}

impl Default for BackofficeGate {
    fn default() -> Self {
        Self {
            identity: None,
            loading: true,
            message: None,
        }
    }
}

impl BackofficeGate {
    pub fn identity(&self) -> Option<&BackofficeIdentity> {
        self.identity.as_ref()
    }

    /// `true` until the first session resolution finished
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Inline error of the login form
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    pub async fn restore<C: RemoteClient>(&mut self, client: &C) {
        let admission = Admission::restore(client).await;
        self.apply(admission);
    }

    /// Re-resolves the identity after the auth session changed
    pub async fn on_auth_state_change<C: RemoteClient>(
        &mut self,
        client: &C,
        session: Option<AuthUserDto>,
    ) {
        let admission = Admission::from_session(client, session).await;
        self.apply(admission);
    }

    /// Returns `true` when the account was admitted
    pub async fn login<C: RemoteClient>(&mut self, client: &C, email: &str, password: &str) -> bool {
        let admission = Admission::sign_in(client, email, password).await;
        self.apply(admission)
    }

    /// Takes on a resolved admission, returning `true` when it admitted an identity
    pub fn apply(&mut self, admission: Admission) -> bool {
        self.loading = false;

        match admission {
            Admission::Admitted(identity) => {
                self.identity = Some(identity);
                self.message = None;
                true
            }
            Admission::SignedOut => {
                self.identity = None;
                false
            }
            Admission::Rejected(message) => {
                self.identity = None;
                self.message = Some(message);
                false
            }
        }
    }

    pub async fn logout<C: AuthClient>(&mut self, client: &C) {
        let result = client.sign_out().await;
        self.apply_sign_out(result);
    }

    /// Drops the identity, keeping it when the auth service failed to sign out
    pub fn apply_sign_out(&mut self, result: Result<(), ClientError>) {
        match result {
            Ok(()) => {
                self.identity = None;
                self.message = None;
            }
            Err(err) => tracing::error!("Failed to sign out: {}", err),
        }
    }
}

/// Requests a backoffice password reset link, returning the banner to show
pub async fn recover_backoffice_password<C: AuthClient>(client: &C, email: &str) -> StatusMessage {
    let email = email.trim();
    if !is_valid_email(email) {
        return StatusMessage::error(INVALID_EMAIL);
    }

    match client.reset_password_for_email(email).await {
        Ok(()) => StatusMessage::success(RECOVERY_SENT),
        Err(err) => {
            tracing::error!("Failed to send recovery link to {}: {}", email, err);

            StatusMessage::error(format!("{}: {}", RECOVERY_ERROR, err))
        }
    }
}

pub const REMEMBERED_EMAIL_KEY: &str = "rememberedEmail";

/// Small persistent key value store, local storage on the web
#[allow(async_fn_in_trait)]
pub trait RememberStore {
    async fn get(&self, key: &str) -> Option<String>;

    async fn set(&self, key: &str, value: &str);

    async fn remove(&self, key: &str);
}

#[derive(Debug, Default)]
pub struct MemoryRememberStore {
    values: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

impl RememberStore for MemoryRememberStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    async fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    async fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

pub const DEMO_EMAIL: &str = "test@example.com";
pub const DEMO_PASSWORD: &str = "Password123!";
pub const MEMBER_INVALID_CREDENTIALS: &str = "Email o contraseña incorrectos. Inténtalo de nuevo.";
pub const MEMBER_LOGIN_SUCCESS: &str = "¡Inicio de sesión exitoso!";
pub const MEMBER_RECOVERY_SENT: &str = "Se ha enviado un enlace de recuperación a tu email.";

/// Storefront login modal.
///
/// Login is simulated: [`MemberLogin::begin`] validates the form and captures the submitted
/// credentials, the caller persists the remembered email and waits
/// [`crate::state::LOGIN_DELAY`], then [`MemberLogin::finish`] checks the captured pair against the
/// demo credentials.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemberLogin {
    pub email: String,
    pub password: String,
    pub remember: bool,
    attempt: Option<LoginAttempt>,
    status: Option<StatusMessage>,
}

/// Credentials captured when the login form was submitted
#[derive(Clone, Debug, PartialEq)]
pub struct LoginAttempt {
    email: String,
    password: String,
    remember: bool,
}

impl LoginAttempt {
    /// Stores or forgets the email depending on "remember me"
    pub async fn persist<S: RememberStore>(&self, store: &S) {
        if self.remember {
            store.set(REMEMBERED_EMAIL_KEY, &self.email).await;
        } else {
            store.remove(REMEMBERED_EMAIL_KEY).await;
        }
    }
}

impl MemberLogin {
    /// Fresh form, pre-filled with the remembered email if any
    pub async fn open<S: RememberStore>(store: &S) -> Self {
        match store.get(REMEMBERED_EMAIL_KEY).await {
            Some(email) => Self {
                email,
                remember: true,
                ..Self::default()
            },
            None => Self::default(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.attempt.is_some()
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Captures the submitted credentials, `None` when the form is incomplete
    pub fn begin(&mut self) -> Option<LoginAttempt> {
        self.status = None;

        if self.email.trim().is_empty() || self.password.trim().is_empty() {
            self.status = Some(StatusMessage::error(EMPTY_CREDENTIALS));
            return None;
        }

        let attempt = LoginAttempt {
            email: self.email.clone(),
            password: self.password.clone(),
            remember: self.remember,
        };
        self.attempt = Some(attempt.clone());

        Some(attempt)
    }

    /// Returns `false` when the form is incomplete and nothing should be awaited
    pub async fn start<S: RememberStore>(&mut self, store: &S) -> bool {
        match self.begin() {
            Some(attempt) => {
                attempt.persist(store).await;
                true
            }
            None => false,
        }
    }

    /// Checks the captured credentials once the simulated delay elapsed
    pub fn finish(&mut self) -> Option<MemberProfile> {
        let attempt = self.attempt.take()?;

        if attempt.email == DEMO_EMAIL && attempt.password == DEMO_PASSWORD {
            self.status = Some(StatusMessage::success(MEMBER_LOGIN_SUCCESS));

            Some(MemberProfile {
                first_name: "Usuario".to_string(),
                last_name: "MiaClub".to_string(),
                email: attempt.email,
                ..MemberProfile::default()
            })
        } else {
            self.status = Some(StatusMessage::error(MEMBER_INVALID_CREDENTIALS));
            None
        }
    }
}

/// Storefront forgot password modal, simulated
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemberRecovery {
    pub email: String,
    loading: bool,
    status: Option<StatusMessage>,
}

impl MemberRecovery {
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Returns `false` when the email is malformed
    pub fn start(&mut self) -> bool {
        if !is_valid_email(self.email.trim()) {
            self.status = Some(StatusMessage::error(INVALID_EMAIL));
            return false;
        }

        self.status = None;
        self.loading = true;
        true
    }

    /// Reports success after [`crate::state::RECOVERY_DELAY`]
    pub fn finish(&mut self) {
        self.loading = false;
        self.status = Some(StatusMessage::success(MEMBER_RECOVERY_SENT));
    }
}

/// The logged-in storefront member
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemberSession {
    profile: Option<MemberProfile>,
}

impl MemberSession {
    pub fn profile(&self) -> Option<&MemberProfile> {
        self.profile.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.profile.is_some()
    }

    pub fn sign_in(&mut self, profile: MemberProfile) {
        self.profile = Some(profile);
    }

    /// Replaces the profile of a logged-in member, ignored otherwise
    pub fn update(&mut self, profile: MemberProfile) {
        if self.profile.is_some() {
            self.profile = Some(profile);
        }
    }

    pub fn sign_out(&mut self) {
        self.profile = None;
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;

    use super::*;
    use crate::state::memory::{MemoryClient, Op};

    fn record(account: &AuthUserDto, role: Role, is_active: bool) -> BackofficeUserDto {
        BackofficeUserDto {
            id: account.id,
            email: account.email.clone(),
            role,
            is_active,
            created_at: NaiveDateTime::parse_from_str("2025-01-01 00:00:00", "%Y-%m-%d %H:%M:%S")
                .unwrap(),
        }
    }

    mod restore_tests {
        use super::*;

        /// Expect an identity named after the email local part when the role record exists
        #[tokio::test]
        async fn test_restore_found() {
            let client = MemoryClient::new();
            let account = client.add_account("maria@miaclub.pe", "secreto");
            client.seed(vec![record(&account, Role::Editor, true)]);
            client.set_session(Some(account.clone()));

            let mut gate = BackofficeGate::default();
            assert!(gate.is_loading());
            gate.restore(&client).await;

            let identity = gate.identity().unwrap();
            assert_eq!(identity.id, account.id);
            assert_eq!(identity.name, "maria");
            assert_eq!(identity.role, Role::Editor);
            assert!(!gate.is_loading());
        }

        /// Expect an absent role record to be provisioned as viewer
        #[tokio::test]
        async fn test_restore_absent_provisions_viewer() {
            let client = MemoryClient::new();
            let account = client.add_account("nuevo@miaclub.pe", "secreto");
            client.set_session(Some(account.clone()));

            let mut gate = BackofficeGate::default();
            gate.restore(&client).await;

            assert_eq!(gate.identity().unwrap().role, Role::Visualizador);

            let rows = client.rows::<BackofficeUserDto>();
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].id, account.id);
            assert!(rows[0].is_active);
        }

        /// Expect a failed provision to sign out and deny
        #[tokio::test]
        async fn test_restore_absent_insert_error() {
            let client = MemoryClient::new();
            let account = client.add_account("nuevo@miaclub.pe", "secreto");
            client.set_session(Some(account));
            client.fail(Op::Insert);

            let mut gate = BackofficeGate::default();
            gate.restore(&client).await;

            assert!(gate.identity().is_none());
            assert!(client.session().is_none());
            assert_eq!(gate.message(), Some(ACCESS_DENIED));
        }

        /// Expect a failed lookup to sign out without provisioning
        #[tokio::test]
        async fn test_restore_lookup_error() {
            let client = MemoryClient::new();
            let account = client.add_account("maria@miaclub.pe", "secreto");
            client.set_session(Some(account));
            client.fail(Op::SelectOne);

            let mut gate = BackofficeGate::default();
            gate.restore(&client).await;

            assert!(gate.identity().is_none());
            assert!(client.session().is_none());
            assert!(!client.called(Op::Insert));
        }

        /// Expect inactive records to be denied
        #[tokio::test]
        async fn test_restore_inactive_denied() {
            let client = MemoryClient::new();
            let account = client.add_account("maria@miaclub.pe", "secreto");
            client.seed(vec![record(&account, Role::Administrador, false)]);
            client.set_session(Some(account));

            let mut gate = BackofficeGate::default();
            gate.restore(&client).await;

            assert!(gate.identity().is_none());
            assert!(client.session().is_none());
        }

        /// Expect no identity and no lookup without a session
        #[tokio::test]
        async fn test_restore_without_session() {
            let client = MemoryClient::new();

            let mut gate = BackofficeGate::default();
            gate.restore(&client).await;

            assert!(gate.identity().is_none());
            assert!(!gate.is_loading());
            assert!(!client.called(Op::SelectOne));
        }

        /// Expect a cleared session to drop the identity
        #[tokio::test]
        async fn test_auth_change_to_signed_out() {
            let client = MemoryClient::new();
            let account = client.add_account("maria@miaclub.pe", "secreto");
            client.seed(vec![record(&account, Role::Editor, true)]);

            let mut gate = BackofficeGate::default();
            gate.on_auth_state_change(&client, Some(account)).await;
            assert!(gate.identity().is_some());

            gate.on_auth_state_change(&client, None).await;
            assert!(gate.identity().is_none());
        }

        /// Expect a sign out seen while the form shows an error to keep that error
        #[tokio::test]
        async fn test_signed_out_keeps_message() {
            let client = MemoryClient::new();
            let mut gate = BackofficeGate::default();
            gate.login(&client, "", "").await;

            let admission = Admission::from_session(&client, None).await;
            assert_eq!(admission, Admission::SignedOut);
            assert!(!gate.apply(admission));

            assert_eq!(gate.message(), Some(EMPTY_CREDENTIALS));
            assert!(!gate.is_loading());
        }
    }

    mod login_tests {
        use super::*;

        /// Expect empty fields to be rejected before calling the auth service
        #[tokio::test]
        async fn test_login_empty_fields() {
            let client = MemoryClient::new();
            let mut gate = BackofficeGate::default();

            let result = gate.login(&client, "  ", "secreto").await;

            assert!(!result);
            assert_eq!(gate.message(), Some(EMPTY_CREDENTIALS));
            assert!(!client.called(Op::SignIn));
        }

        #[tokio::test]
        async fn test_login_blank_password() {
            let client = MemoryClient::new();
            let mut gate = BackofficeGate::default();

            assert!(!gate.login(&client, "maria@miaclub.pe", "  ").await);
            assert_eq!(gate.message(), Some(EMPTY_CREDENTIALS));
            assert!(!client.called(Op::SignIn));
        }

        /// Expect the friendly message for wrong credentials
        #[tokio::test]
        async fn test_login_invalid_credentials() {
            let client = MemoryClient::new();
            client.add_account("maria@miaclub.pe", "secreto");
            let mut gate = BackofficeGate::default();

            let result = gate.login(&client, "maria@miaclub.pe", "otra").await;

            assert!(!result);
            assert_eq!(gate.message(), Some(INVALID_CREDENTIALS));
        }

        /// Expect other failures to carry the raw error
        #[tokio::test]
        async fn test_login_service_error() {
            let client = MemoryClient::new();
            client.fail(Op::SignIn);
            let mut gate = BackofficeGate::default();

            gate.login(&client, "maria@miaclub.pe", "secreto").await;

            assert_eq!(
                gate.message(),
                Some("Error al iniciar sesión: Internal server error")
            );
        }

        /// Expect an account with an active role record to be admitted
        #[tokio::test]
        async fn test_login_admitted() {
            let client = MemoryClient::new();
            let account = client.add_account("maria@miaclub.pe", "secreto");
            client.seed(vec![record(&account, Role::Administrador, true)]);
            let mut gate = BackofficeGate::default();

            let result = gate.login(&client, "maria@miaclub.pe", "secreto").await;

            assert!(result);
            assert_eq!(gate.identity().unwrap().role, Role::Administrador);
            assert!(gate.message().is_none());
        }

        /// Expect no provisioning when logging in without a role record
        #[tokio::test]
        async fn test_login_without_record_denied() {
            let client = MemoryClient::new();
            client.add_account("maria@miaclub.pe", "secreto");
            let mut gate = BackofficeGate::default();

            let result = gate.login(&client, "maria@miaclub.pe", "secreto").await;

            assert!(!result);
            assert_eq!(gate.message(), Some(ACCESS_DENIED));
            assert!(client.session().is_none());
            assert!(!client.called(Op::Insert));
        }

        /// Expect the identity to survive a failed sign out
        #[tokio::test]
        async fn test_logout_error_keeps_identity() {
            let client = MemoryClient::new();
            let account = client.add_account("maria@miaclub.pe", "secreto");
            client.seed(vec![record(&account, Role::Editor, true)]);
            let mut gate = BackofficeGate::default();
            gate.login(&client, "maria@miaclub.pe", "secreto").await;

            client.fail(Op::SignOut);
            gate.logout(&client).await;

            assert!(gate.identity().is_some());
        }

        #[tokio::test]
        async fn test_logout_clears_identity() {
            let client = MemoryClient::new();
            let account = client.add_account("maria@miaclub.pe", "secreto");
            client.seed(vec![record(&account, Role::Editor, true)]);
            let mut gate = BackofficeGate::default();
            gate.login(&client, "maria@miaclub.pe", "secreto").await;

            gate.logout(&client).await;

            assert!(gate.identity().is_none());
            assert!(client.session().is_none());
        }
    }

    mod recovery_tests {
        use super::*;

        #[tokio::test]
        async fn test_backoffice_recovery_invalid_email() {
            let client = MemoryClient::new();

            let status = recover_backoffice_password(&client, "maria@").await;

            assert_eq!(status, StatusMessage::error(INVALID_EMAIL));
            assert!(!client.called(Op::ResetPassword));
        }

        #[tokio::test]
        async fn test_backoffice_recovery_sent() {
            let client = MemoryClient::new();

            let status = recover_backoffice_password(&client, "maria@miaclub.pe").await;

            assert_eq!(status, StatusMessage::success(RECOVERY_SENT));
        }

        #[tokio::test]
        async fn test_backoffice_recovery_error() {
            let client = MemoryClient::new();
            client.fail(Op::ResetPassword);

            let status = recover_backoffice_password(&client, "maria@miaclub.pe").await;

            assert_eq!(
                status,
                StatusMessage::error("Error al enviar el enlace: Internal server error")
            );
        }

        #[test]
        fn test_member_recovery() {
            let mut recovery = MemberRecovery {
                email: "no-es-email".to_string(),
                ..MemberRecovery::default()
            };
            assert!(!recovery.start());

            recovery.email = "socio@correo.com".to_string();
            assert!(recovery.start());
            assert!(recovery.is_loading());

            recovery.finish();
            assert_eq!(
                recovery.status(),
                Some(&StatusMessage::success(MEMBER_RECOVERY_SENT))
            );
        }
    }

    mod member_login_tests {
        use super::*;

        /// Expect the demo pair to yield the fixed profile
        #[tokio::test]
        async fn test_member_login_demo_pair() {
            let store = MemoryRememberStore::default();
            let mut login = MemberLogin::open(&store).await;
            login.email = DEMO_EMAIL.to_string();
            login.password = DEMO_PASSWORD.to_string();

            assert!(login.start(&store).await);
            assert!(login.is_loading());

            let profile = login.finish().unwrap();
            assert_eq!(profile.first_name, "Usuario");
            assert_eq!(profile.last_name, "MiaClub");
            assert_eq!(profile.email, DEMO_EMAIL);
        }

        /// Expect any other pair to fail with an inline error
        #[tokio::test]
        async fn test_member_login_wrong_pair() {
            let store = MemoryRememberStore::default();
            let mut login = MemberLogin::open(&store).await;
            login.email = DEMO_EMAIL.to_string();
            login.password = "password123!".to_string();

            assert!(login.start(&store).await);
            assert!(login.finish().is_none());
            assert_eq!(
                login.status(),
                Some(&StatusMessage::error(MEMBER_INVALID_CREDENTIALS))
            );
        }

        #[tokio::test]
        async fn test_member_login_empty_fields() {
            let store = MemoryRememberStore::default();
            let mut login = MemberLogin::open(&store).await;

            assert!(!login.start(&store).await);
            assert!(!login.is_loading());
            assert_eq!(
                login.status(),
                Some(&StatusMessage::error(EMPTY_CREDENTIALS))
            );
        }

        /// Expect a whitespace-only password to count as missing
        #[tokio::test]
        async fn test_member_login_blank_password() {
            let store = MemoryRememberStore::default();
            let mut login = MemberLogin::open(&store).await;
            login.email = DEMO_EMAIL.to_string();
            login.password = "   ".to_string();

            assert!(!login.start(&store).await);
            assert_eq!(
                login.status(),
                Some(&StatusMessage::error(EMPTY_CREDENTIALS))
            );
        }

        /// Expect the email to be compared exactly as typed
        #[tokio::test]
        async fn test_member_login_untrimmed_email() {
            let store = MemoryRememberStore::default();
            let mut login = MemberLogin::open(&store).await;
            login.email = format!(" {}", DEMO_EMAIL);
            login.password = DEMO_PASSWORD.to_string();

            assert!(login.start(&store).await);
            assert!(login.finish().is_none());
        }

        /// Expect the submitted pair to be checked, not what was typed during the delay
        #[tokio::test]
        async fn test_member_login_checks_submitted_pair() {
            let store = MemoryRememberStore::default();
            let mut login = MemberLogin::open(&store).await;
            login.email = DEMO_EMAIL.to_string();
            login.password = DEMO_PASSWORD.to_string();

            let attempt = login.begin().unwrap();
            attempt.persist(&store).await;
            login.password.clear();

            assert!(login.finish().is_some());
            assert!(!login.is_loading());
        }

        /// Expect only the email to be remembered, and pre-filled on the next open
        #[tokio::test]
        async fn test_member_login_remembers_email() {
            let store = MemoryRememberStore::default();
            let mut login = MemberLogin::open(&store).await;
            login.email = "socio@correo.com".to_string();
            login.password = "incorrecta".to_string();
            login.remember = true;

            login.start(&store).await;
            login.finish();

            assert_eq!(
                store.get(REMEMBERED_EMAIL_KEY).await.as_deref(),
                Some("socio@correo.com")
            );

            let reopened = MemberLogin::open(&store).await;
            assert_eq!(reopened.email, "socio@correo.com");
            assert!(reopened.remember);
            assert!(reopened.password.is_empty());
        }

        #[tokio::test]
        async fn test_member_login_unchecked_forgets_email() {
            let store = MemoryRememberStore::default();
            store.set(REMEMBERED_EMAIL_KEY, "socio@correo.com").await;

            let mut login = MemberLogin::open(&store).await;
            login.remember = false;
            login.password = "x".to_string();
            login.start(&store).await;

            assert!(store.get(REMEMBERED_EMAIL_KEY).await.is_none());
        }

        #[test]
        fn test_member_session_update_requires_login() {
            let mut session = MemberSession::default();
            session.update(MemberProfile::default());
            assert!(!session.is_logged_in());

            session.sign_in(MemberProfile {
                email: DEMO_EMAIL.to_string(),
                ..MemberProfile::default()
            });
            assert!(session.is_logged_in());

            session.sign_out();
            assert!(session.profile().is_none());
        }
    }
}

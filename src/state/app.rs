//! Root state of the single-page application.

use crate::{
    model::{member::MemberProfile, web_config::WebConfig},
    state::session::MemberSession,
};

/// Top level screen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Home,
    Registration,
    Member,
    Backoffice,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    show_registration: bool,
    show_backoffice: bool,
    pub login_open: bool,
    pub forgot_password_open: bool,
    pub member: MemberSession,
    pub web_config: WebConfig,
    /// Bumped after every saved configuration change so the shell refetches
    config_revision: u64,
}

impl AppState {
    pub fn view(&self) -> View {
        if self.show_backoffice {
            View::Backoffice
        } else if self.member.is_logged_in() {
            View::Member
        } else if self.show_registration {
            View::Registration
        } else {
            View::Home
        }
    }

    pub fn config_revision(&self) -> u64 {
        self.config_revision
    }

    pub fn go_home(&mut self) {
        self.show_backoffice = false;
        self.show_registration = false;
        self.login_open = false;
        self.forgot_password_open = false;
    }

    pub fn navigate_to_register(&mut self) {
        self.show_registration = true;
        self.login_open = false;
        self.show_backoffice = false;
    }

    pub fn navigate_to_login(&mut self) {
        self.login_open = true;
        self.show_registration = false;
        self.show_backoffice = false;
    }

    pub fn open_forgot_password(&mut self) {
        self.login_open = false;
        self.forgot_password_open = true;
    }

    pub fn admin_login(&mut self) {
        self.show_backoffice = true;
    }

    pub fn registration_success(&mut self, profile: MemberProfile) {
        self.member.sign_in(profile);
        self.show_registration = false;
    }

    pub fn login_success(&mut self, profile: MemberProfile) {
        self.member.sign_in(profile);
        self.login_open = false;
    }

    pub fn save_profile(&mut self, profile: MemberProfile) {
        self.member.update(profile);
    }

    pub fn logout(&mut self) {
        self.member.sign_out();
        self.show_backoffice = false;
    }

    /// Signals that the stored site configuration changed
    pub fn notify_config_updated(&mut self) {
        self.config_revision = self.config_revision.wrapping_add(1);
    }
}

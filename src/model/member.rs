use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Storefront member profile, held client side for the session
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MemberProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub birth_date: Option<NaiveDate>,
    pub dni: String,
    pub ruc: Option<String>,
    pub company_name: Option<String>,
}

impl MemberProfile {
    pub fn display_name(&self) -> &str {
        if self.first_name.is_empty() {
            &self.email
        } else {
            &self.first_name
        }
    }
}

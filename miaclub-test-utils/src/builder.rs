//! Declarative test setup.
//!
//! Configuration methods only queue work; tables and fixtures are created by
//! [`TestBuilder::build`] in the order tables, accounts, backoffice users.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_auth_tables: bool,
    accounts: Vec<String>,
    // (email, role, is_active)
    staff: Vec<(String, String, bool)>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_auth_tables: false,
            accounts: Vec::new(),
            staff: Vec::new(),
        }
    }

    /// Creates the auth account and backoffice user tables before any other table
    pub fn with_auth_tables(mut self) -> Self {
        self.include_auth_tables = true;
        self
    }

    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Creates the four storefront content tables
    pub fn with_content_tables(self) -> Self {
        self.with_table(entity::prelude::Offer)
            .with_table(entity::prelude::Event)
            .with_table(entity::prelude::Banner)
            .with_table(entity::prelude::Benefit)
    }

    /// Auth account without a backoffice record, password [`crate::constant::TEST_PASSWORD`]
    pub fn with_account(mut self, email: &str) -> Self {
        self.include_auth_tables = true;
        self.accounts.push(email.to_string());
        self
    }

    /// Auth account plus a backoffice record with the given role name
    pub fn with_staff(mut self, email: &str, role: &str, is_active: bool) -> Self {
        self.include_auth_tables = true;
        self.staff
            .push((email.to_string(), role.to_string(), is_active));
        self
    }

    pub async fn build(self) -> Result<TestContext, TestError> {
        let test = TestContext::new().await?;

        let mut all_tables = Vec::new();
        if self.include_auth_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.push(schema.create_table_from_entity(entity::prelude::AuthAccount));
            all_tables.push(schema.create_table_from_entity(entity::prelude::BackofficeUser));
        }
        all_tables.extend(self.tables);
        test.with_tables(all_tables).await?;

        for email in self.accounts {
            test.auth().insert_account(&email).await?;
        }

        for (email, role, is_active) in self.staff {
            test.auth().insert_staff(&email, &role, is_active).await?;
        }

        Ok(test)
    }
}

/// Creates a [`crate::TestContext`] with a table for each given entity.
///
/// Without arguments no tables are created, which makes every query fail and is used by
/// the error path tests.
#[macro_export]
macro_rules! test_setup_with_tables {
    () => {{
        $crate::TestBuilder::new().build().await
    }};

    ($($entity:expr),+ $(,)?) => {{
        $crate::TestBuilder::new()
            $(.with_table($entity))+
            .build()
            .await
    }};
}

/// Like [`test_setup_with_tables!`] but always includes the auth account and backoffice
/// user tables.
#[macro_export]
macro_rules! test_setup_with_auth_tables {
    () => {{
        $crate::TestBuilder::new().with_auth_tables().build().await
    }};

    ($($entity:expr),+ $(,)?) => {{
        $crate::TestBuilder::new()
            .with_auth_tables()
            $(.with_table($entity))+
            .build()
            .await
    }};
}

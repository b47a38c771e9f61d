use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use miaclub::{
    model::backoffice_user::{
        BackofficeUserDto, NewBackofficeUserDto, Role, UpdateBackofficeUserDto,
    },
    server::controller::backoffice_user::{
        create_backoffice_user, delete_backoffice_user, get_backoffice_user,
        get_backoffice_user_by_email, get_backoffice_users, update_backoffice_user, EmailQuery,
        UserListQuery,
    },
};
use miaclub_test_utils::prelude::*;
use uuid::Uuid;

use crate::util::{read_json, sign_in, sign_in_staff};

fn order(order: Option<&str>) -> Query<UserListQuery> {
    Query(UserListQuery {
        order: order.map(str::to_string),
    })
}

mod list {
    use super::*;

    /// Expect users ordered by email by default
    #[tokio::test]
    async fn orders_by_email() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_staff("zoe@miaclub.pe", "Editor", true)
            .with_staff("bruno@miaclub.pe", "Visualizador", false)
            .build()
            .await?;
        sign_in_staff(&test, "maria@miaclub.pe", "Administrador").await?;

        let result = get_backoffice_users(
            State(test.to_app_state()),
            test.session.clone(),
            order(None),
        )
        .await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        let users: Vec<BackofficeUserDto> = read_json(resp).await;
        let emails: Vec<&str> = users.iter().map(|u| u.email.as_str()).collect();
        assert_eq!(
            emails,
            vec!["bruno@miaclub.pe", "maria@miaclub.pe", "zoe@miaclub.pe"]
        );

        Ok(())
    }

    /// Expect 400 bad request for an unknown ordering
    #[tokio::test]
    async fn rejects_unknown_order() -> Result<(), TestError> {
        let test = test_setup_with_auth_tables!()?;
        sign_in_staff(&test, "maria@miaclub.pe", "Administrador").await?;

        let result = get_backoffice_users(
            State(test.to_app_state()),
            test.session.clone(),
            order(Some("role")),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    /// Expect 401 unauthorized without a session
    #[tokio::test]
    async fn requires_session() -> Result<(), TestError> {
        let test = test_setup_with_auth_tables!()?;

        let result = get_backoffice_users(
            State(test.to_app_state()),
            test.session.clone(),
            order(None),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        Ok(())
    }
}

mod lookup {
    use super::*;

    /// Expect the signed in account to find its own record by ID
    #[tokio::test]
    async fn finds_record_by_id() -> Result<(), TestError> {
        let test = test_setup_with_auth_tables!()?;
        let id = sign_in_staff(&test, "maria@miaclub.pe", "Editor").await?;

        let result = get_backoffice_user(State(test.to_app_state()), test.session.clone(), Path(id)).await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        let user: BackofficeUserDto = read_json(resp).await;
        assert_eq!(user.role, Role::Editor);

        Ok(())
    }

    /// Expect 404 not found for an account without a backoffice record
    #[tokio::test]
    async fn not_found_without_record() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_account("cliente@miaclub.pe")
            .build()
            .await?;
        let account = test.auth().account_by_email("cliente@miaclub.pe").await?.unwrap();
        sign_in(&test, account.id).await?;

        let result = get_backoffice_user(
            State(test.to_app_state()),
            test.session.clone(),
            Path(account.id),
        )
        .await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }

    #[tokio::test]
    async fn finds_record_by_email() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_staff("zoe@miaclub.pe", "Editor", true)
            .build()
            .await?;
        sign_in_staff(&test, "maria@miaclub.pe", "Visualizador").await?;

        let result = get_backoffice_user_by_email(
            State(test.to_app_state()),
            test.session.clone(),
            Query(EmailQuery {
                email: "zoe@miaclub.pe".to_string(),
            }),
        )
        .await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        let user: BackofficeUserDto = read_json(resp).await;
        assert_eq!(user.email, "zoe@miaclub.pe");

        Ok(())
    }
}

mod create {
    use super::*;

    fn new_user(id: Uuid, role: Role) -> Json<NewBackofficeUserDto> {
        Json(NewBackofficeUserDto {
            id,
            email: "ignorado@miaclub.pe".to_string(),
            role,
            is_active: true,
        })
    }

    /// Expect an account without a record to provision itself as an active viewer
    #[tokio::test]
    async fn self_provision_forces_viewer() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_account("nuevo@miaclub.pe")
            .build()
            .await?;
        let account = test.auth().account_by_email("nuevo@miaclub.pe").await?.unwrap();
        sign_in(&test, account.id).await?;

        let result = create_backoffice_user(
            State(test.to_app_state()),
            test.session.clone(),
            new_user(account.id, Role::Administrador),
        )
        .await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::CREATED);
        let user: BackofficeUserDto = read_json(resp).await;
        assert_eq!(user.id, account.id);
        assert_eq!(user.email, "nuevo@miaclub.pe");
        assert_eq!(user.role, Role::Visualizador);
        assert!(user.is_active);

        Ok(())
    }

    /// Expect 403 forbidden when an account without a record targets another account
    #[tokio::test]
    async fn cannot_provision_someone_else() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_account("nuevo@miaclub.pe")
            .with_account("otro@miaclub.pe")
            .build()
            .await?;
        let account = test.auth().account_by_email("nuevo@miaclub.pe").await?.unwrap();
        let other = test.auth().account_by_email("otro@miaclub.pe").await?.unwrap();
        sign_in(&test, account.id).await?;

        let result = create_backoffice_user(
            State(test.to_app_state()),
            test.session.clone(),
            new_user(other.id, Role::Visualizador),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        Ok(())
    }

    /// Expect an administrator to create a record with the requested role
    #[tokio::test]
    async fn administrator_sets_role() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_account("nuevo@miaclub.pe")
            .build()
            .await?;
        let account = test.auth().account_by_email("nuevo@miaclub.pe").await?.unwrap();
        sign_in_staff(&test, "maria@miaclub.pe", "Administrador").await?;

        let result = create_backoffice_user(
            State(test.to_app_state()),
            test.session.clone(),
            new_user(account.id, Role::Editor),
        )
        .await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::CREATED);
        let user: BackofficeUserDto = read_json(resp).await;
        assert_eq!(user.role, Role::Editor);

        Ok(())
    }

    /// Expect 403 forbidden when an editor creates a record for someone else
    #[tokio::test]
    async fn editor_cannot_create() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_account("nuevo@miaclub.pe")
            .build()
            .await?;
        let account = test.auth().account_by_email("nuevo@miaclub.pe").await?.unwrap();
        sign_in_staff(&test, "editor@miaclub.pe", "Editor").await?;

        let result = create_backoffice_user(
            State(test.to_app_state()),
            test.session.clone(),
            new_user(account.id, Role::Editor),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        Ok(())
    }
}

mod update_and_delete {
    use super::*;

    /// Expect the role to change and the active flag to stay when omitted
    #[tokio::test]
    async fn administrator_changes_role() -> Result<(), TestError> {
        let test = test_setup_with_auth_tables!()?;
        let (target, _) = test
            .auth()
            .insert_staff("zoe@miaclub.pe", "Visualizador", false)
            .await?;
        sign_in_staff(&test, "maria@miaclub.pe", "Administrador").await?;

        let result = update_backoffice_user(
            State(test.to_app_state()),
            test.session.clone(),
            Path(target.id),
            Json(UpdateBackofficeUserDto {
                role: Role::Editor,
                is_active: None,
            }),
        )
        .await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        let user: BackofficeUserDto = read_json(resp).await;
        assert_eq!(user.role, Role::Editor);
        assert!(!user.is_active);

        Ok(())
    }

    /// Expect 403 forbidden for an editor
    #[tokio::test]
    async fn editor_cannot_update() -> Result<(), TestError> {
        let test = test_setup_with_auth_tables!()?;
        let (target, _) = test
            .auth()
            .insert_staff("zoe@miaclub.pe", "Visualizador", true)
            .await?;
        sign_in_staff(&test, "editor@miaclub.pe", "Editor").await?;

        let result = update_backoffice_user(
            State(test.to_app_state()),
            test.session.clone(),
            Path(target.id),
            Json(UpdateBackofficeUserDto {
                role: Role::Administrador,
                is_active: Some(true),
            }),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        Ok(())
    }

    /// Expect 403 forbidden for an inactive administrator
    #[tokio::test]
    async fn inactive_administrator_denied() -> Result<(), TestError> {
        let test = test_setup_with_auth_tables!()?;
        let (target, _) = test
            .auth()
            .insert_staff("zoe@miaclub.pe", "Visualizador", true)
            .await?;
        let (admin, _) = test
            .auth()
            .insert_staff("maria@miaclub.pe", "Administrador", false)
            .await?;
        sign_in(&test, admin.id).await?;

        let result = delete_backoffice_user(
            State(test.to_app_state()),
            test.session.clone(),
            Path(target.id),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        Ok(())
    }

    /// Expect 204 no content, then 404 not found for the same record
    #[tokio::test]
    async fn delete_twice() -> Result<(), TestError> {
        let test = test_setup_with_auth_tables!()?;
        let (target, _) = test
            .auth()
            .insert_staff("zoe@miaclub.pe", "Visualizador", true)
            .await?;
        sign_in_staff(&test, "maria@miaclub.pe", "Administrador").await?;

        let first = delete_backoffice_user(
            State(test.to_app_state()),
            test.session.clone(),
            Path(target.id),
        )
        .await;
        let second = delete_backoffice_user(
            State(test.to_app_state()),
            test.session.clone(),
            Path(target.id),
        )
        .await;

        assert_eq!(first.unwrap().into_response().status(), StatusCode::NO_CONTENT);
        assert_eq!(
            second.err().unwrap().into_response().status(),
            StatusCode::NOT_FOUND
        );

        Ok(())
    }
}

use super::*;
use crate::domain::{EntryId, Error, ErrorCode, LoginCredentials};
use actix_rt::System;
use rstest::{fixture, rstest};
use std::sync::Arc;

#[fixture]
fn entry_id() -> EntryId {
    EntryId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("valid id")
}

#[rstest]
#[case(
    EntryRepositoryError::connection("pool timed out"),
    "entry repository connection failed: pool timed out"
)]
#[case(
    EntryRepositoryError::query("syntax error"),
    "entry repository query failed: syntax error"
)]
fn repository_errors_render_their_message(
    #[case] error: EntryRepositoryError,
    #[case] expected: &str,
) {
    assert_eq!(error.to_string(), expected);
}

#[rstest]
fn mocked_repository_serves_through_the_trait_object(entry_id: EntryId) {
    let mut mock = MockEntryRepository::new();
    let expected = entry_id;
    mock.expect_find_by_id()
        .withf(move |id| *id == expected)
        .times(1)
        .returning(|_| Ok(None));
    mock.expect_delete()
        .times(1)
        .returning(|_| Err(EntryRepositoryError::connection("refused")));
    let repo: Arc<dyn EntryRepository> = Arc::new(mock);

    System::new().block_on(async move {
        let found = repo.find_by_id(&entry_id).await.expect("lookup succeeds");
        assert!(found.is_none());
        let err = repo.delete(&entry_id).await.expect_err("delete fails");
        assert!(matches!(err, EntryRepositoryError::Connection { .. }));
    });
}

#[rstest]
fn mocked_login_service_reports_domain_errors() {
    let mut mock = MockLoginService::new();
    mock.expect_authenticate()
        .withf(|credentials| credentials.email() == "admin@example.com")
        .returning(|_| Err(Error::unauthorized("Invalid login.")));
    let login: Arc<dyn LoginService> = Arc::new(mock);
    let credentials =
        LoginCredentials::try_from_parts("admin@example.com", "guess").expect("valid form");

    System::new().block_on(async move {
        let err = login
            .authenticate(&credentials)
            .await
            .expect_err("login rejected");
        assert_eq!(err.code(), ErrorCode::Unauthorized);
        assert_eq!(err.message(), "Invalid login.");
    });
}

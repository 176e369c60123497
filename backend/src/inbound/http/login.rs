//! Admin login handlers.
//!
//! ```text
//! GET  /login    {"isAdmin":false}
//! POST /login    email=me@example.com&password=...   (or multipart)
//! ```

use actix_web::{HttpRequest, HttpResponse, get, post, web};
use futures_util::TryStreamExt;
use serde::Deserialize;

use super::ApiResult;
use super::entries::see_other;
use super::form_body::{FormBody, malformed_body, read_text_part};
use super::schemas::ErrorSchema;
use super::session::SessionContext;
use super::state::HttpState;
use super::views::SessionView;
use crate::domain::{Error, LoginCredentials};

/// Login form. Absent fields are reported like blank ones.
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct LoginForm {
    #[schema(example = "me@example.com")]
    pub email: Option<String>,
    pub password: Option<String>,
}

impl LoginForm {
    /// Read the form from a URL-encoded or multipart body.
    ///
    /// Other bodies answer with the standard error payload.
    async fn from_request(req: &HttpRequest, payload: web::Payload) -> Result<Self, Error> {
        let mut multipart = match FormBody::<Self>::from_request(req, payload).await? {
            FormBody::Fields(form) => return Ok(form),
            FormBody::Multipart(multipart) => multipart,
        };
        let mut form = Self::default();
        while let Some(mut field) = multipart.try_next().await.map_err(malformed_body)? {
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };
            match name.as_str() {
                "email" => form.email = Some(read_text_part(&mut field, &name).await?),
                "password" => form.password = Some(read_text_part(&mut field, &name).await?),
                _ => {}
            }
        }
        Ok(form)
    }
}

/// Session state for the login page.
#[utoipa::path(
    get,
    path = "/login",
    responses((status = 200, description = "Session state", body = SessionView)),
    tags = ["session"],
    operation_id = "loginPage",
    security([])
)]
#[get("/login")]
pub async fn login_page(session: SessionContext) -> web::Json<SessionView> {
    web::Json(SessionView {
        is_admin: session.is_admin(),
    })
}

/// Check the admin credentials and flag the session.
#[utoipa::path(
    post,
    path = "/login",
    request_body(
        content(
            (LoginForm = "application/x-www-form-urlencoded"),
            (LoginForm = "multipart/form-data")
        )
    ),
    responses(
        (
            status = 303,
            description = "Signed in; back to the journal",
            headers(("Set-Cookie" = String, description = "Session cookie"))
        ),
        (status = 400, description = "Body is not a form", body = ErrorSchema),
        (status = 401, description = "Missing or wrong credentials", body = ErrorSchema)
    ),
    tags = ["session"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    req: HttpRequest,
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Payload,
) -> ApiResult<HttpResponse> {
    let LoginForm { email, password } = LoginForm::from_request(&req, payload).await?;
    let credentials = LoginCredentials::try_from_parts(
        email.as_deref().unwrap_or_default(),
        password.as_deref().unwrap_or_default(),
    )
    .map_err(|err| Error::unauthorized(err.to_string()))?;
    state.login.authenticate(&credentials).await?;
    session.mark_admin()?;
    Ok(see_other("/"))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::{StatusCode, header};
    use actix_web::{App, test as actix_test};
    use rstest::rstest;
    use serde_json::Value;

    use super::*;
    use crate::domain::{AdminCredentials, AdminLoginService, JournalService};
    use crate::inbound::http::test_utils::{
        MultipartBody, session_cookie, test_session_middleware,
    };
    use crate::outbound::memory::InMemoryEntryRepository;

    fn state() -> web::Data<HttpState> {
        let journal = Arc::new(JournalService::new(
            Arc::new(InMemoryEntryRepository::new()),
            Arc::new(mockable::DefaultClock),
        ));
        web::Data::new(HttpState::new(
            Arc::new(AdminLoginService::new(AdminCredentials::new(
                "me@example.com",
                "hunter2",
            ))),
            journal.clone(),
            journal,
        ))
    }

    fn form_post(body: &str) -> actix_test::TestRequest {
        actix_test::TestRequest::post()
            .uri("/login")
            .insert_header((header::CONTENT_TYPE, "application/x-www-form-urlencoded"))
            .set_payload(body.to_owned())
    }

    #[rstest]
    #[case("password=hunter2", "Email is required.")]
    #[case("email=%20%20&password=hunter2", "Email is required.")]
    #[case("email=me%40example.com", "Password is required.")]
    #[case("email=me%40example.com&password=nope", "Invalid login.")]
    #[case("email=ME%40example.com&password=hunter2", "Invalid login.")]
    #[case("email=%20me%40example.com&password=hunter2", "Invalid login.")]
    #[actix_web::test]
    async fn failed_logins_are_unauthorised(#[case] body: &str, #[case] message: &str) {
        let app = actix_test::init_service(
            App::new()
                .app_data(state())
                .wrap(test_session_middleware())
                .service(login),
        )
        .await;
        let res = actix_test::call_service(&app, form_post(body).to_request()).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        let value: Value =
            serde_json::from_slice(&actix_test::read_body(res).await).expect("error payload");
        assert_eq!(value["message"], message);
        assert_eq!(value["code"], "unauthorized");
    }

    #[rstest]
    #[case::valid(
        MultipartBody::new()
            .text("email", "me@example.com")
            .text("password", "hunter2"),
        StatusCode::SEE_OTHER
    )]
    #[case::missing_password(
        MultipartBody::new().text("email", "me@example.com"),
        StatusCode::UNAUTHORIZED
    )]
    #[actix_web::test]
    async fn multipart_logins_are_accepted(
        #[case] form: MultipartBody,
        #[case] expected: StatusCode,
    ) {
        let app = actix_test::init_service(
            App::new()
                .app_data(state())
                .wrap(test_session_middleware())
                .service(login),
        )
        .await;
        let req = actix_test::TestRequest::post()
            .uri("/login")
            .insert_header((header::CONTENT_TYPE, form.content_type()))
            .set_payload(form.into_bytes())
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), expected);
    }

    #[actix_web::test]
    async fn non_form_body_is_bad_request() {
        let app = actix_test::init_service(
            App::new()
                .app_data(state())
                .wrap(test_session_middleware())
                .service(login),
        )
        .await;
        let req = actix_test::TestRequest::post()
            .uri("/login")
            .set_json(serde_json::json!({ "email": "me@example.com" }))
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn successful_login_redirects_and_flags_session() {
        let app = actix_test::init_service(
            App::new()
                .app_data(state())
                .wrap(test_session_middleware())
                .service(login)
                .service(login_page),
        )
        .await;

        let anonymous =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri("/login").to_request())
                .await;
        let value: Value =
            serde_json::from_slice(&actix_test::read_body(anonymous).await).expect("session json");
        assert_eq!(value["isAdmin"], false);

        let res = actix_test::call_service(
            &app,
            form_post("email=me%40example.com&password=hunter2").to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            res.headers().get(header::LOCATION).and_then(|v| v.to_str().ok()),
            Some("/")
        );
        let cookie = session_cookie(&res);

        let page = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/login")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        let value: Value =
            serde_json::from_slice(&actix_test::read_body(page).await).expect("session json");
        assert_eq!(value["isAdmin"], true);
    }
}

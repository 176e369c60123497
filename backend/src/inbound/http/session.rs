//! Cookie session wrapper exposing the admin flag.
//!
//! Handlers only ask "is this visitor the admin?"; the Actix session API and
//! cookie format stay behind this type.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;

use crate::domain::Error;

pub(crate) const IS_ADMIN_KEY: &str = "is_admin";

/// Message returned when an admin-only route is hit without the flag.
pub const NOT_AUTHENTICATED_MESSAGE: &str = "Not authenticated";

/// Newtype wrapper over the Actix session.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Record a successful admin login. The session identity is renewed.
    pub fn mark_admin(&self) -> Result<(), Error> {
        self.0.renew();
        self.0
            .insert(IS_ADMIN_KEY, true)
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Whether the session carries the admin flag.
    ///
    /// Unreadable values are treated as "not admin".
    pub fn is_admin(&self) -> bool {
        match self.0.get::<bool>(IS_ADMIN_KEY) {
            Ok(flag) => flag.unwrap_or(false),
            Err(error) => {
                tracing::warn!(%error, "invalid admin flag in session cookie");
                false
            }
        }
    }

    /// Require the admin flag or fail with `401 Unauthorized`.
    pub fn require_admin(&self) -> Result<(), Error> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(Error::unauthorized(NOT_AUTHENTICATED_MESSAGE))
        }
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::test_utils::{session_cookie, test_session_middleware};
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test, web};

    async fn require(session: SessionContext) -> Result<HttpResponse, Error> {
        session.require_admin()?;
        Ok(HttpResponse::Ok().finish())
    }

    #[actix_web::test]
    async fn admin_flag_round_trips_through_cookie() {
        let app = test::init_service(
            App::new()
                .wrap(test_session_middleware())
                .route(
                    "/mark",
                    web::get().to(|session: SessionContext| async move {
                        session.mark_admin()?;
                        Ok::<_, Error>(HttpResponse::Ok().finish())
                    }),
                )
                .route("/require", web::get().to(require)),
        )
        .await;

        let marked =
            test::call_service(&app, test::TestRequest::get().uri("/mark").to_request()).await;
        let cookie = session_cookie(&marked);

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/require")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn missing_flag_is_unauthorised() {
        let app = test::init_service(
            App::new()
                .wrap(test_session_middleware())
                .route("/require", web::get().to(require)),
        )
        .await;

        let res =
            test::call_service(&app, test::TestRequest::get().uri("/require").to_request()).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        let body: Error = test::read_body_json(res).await;
        assert_eq!(body.message(), NOT_AUTHENTICATED_MESSAGE);
    }

    #[actix_web::test]
    async fn non_boolean_flag_is_not_admin() {
        let app = test::init_service(
            App::new()
                .wrap(test_session_middleware())
                .route(
                    "/tamper",
                    web::get().to(|session: Session| async move {
                        session
                            .insert(IS_ADMIN_KEY, "yes")
                            .expect("store tampered flag");
                        HttpResponse::Ok().finish()
                    }),
                )
                .route("/require", web::get().to(require)),
        )
        .await;

        let tampered =
            test::call_service(&app, test::TestRequest::get().uri("/tamper").to_request()).await;
        let cookie = session_cookie(&tampered);

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/require")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }
}

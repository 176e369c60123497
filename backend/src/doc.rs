//! OpenAPI documentation for the journal HTTP interface.
//!
//! Registers every page handler, the health checks, the schema wrappers from
//! [`crate::inbound::http::schemas`] and the session cookie scheme. Swagger UI
//! serves it in debug builds and `openapi-dump` prints it for tooling.

use crate::inbound::http::schemas::{EntryFormSchema, ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::views::{EntryView, JournalView, SessionView, WeekView};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Encrypted session cookie issued by POST /login.",
            ))),
        );
    }
}

/// OpenAPI document for the journal.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Journal API",
        description = "Weekly work journal: public listing, admin-only editing."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::entries::journal_index,
        crate::inbound::http::entries::create_entry,
        crate::inbound::http::entries::edit_entry_page,
        crate::inbound::http::entries::update_entry,
        crate::inbound::http::login::login_page,
        crate::inbound::http::login::login,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        EntryFormSchema,
        EntryView,
        WeekView,
        JournalView,
        SessionView
    )),
    tags(
        (name = "journal", description = "Journal entries grouped by week"),
        (name = "session", description = "Admin sign-in"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    // utoipa replaces :: with . in schema names
    const ERROR_SCHEMA_NAME: &str = "crate.domain.Error";

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    fn error_schema_has_required_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error_schema = schemas.get(ERROR_SCHEMA_NAME).expect("Error schema");

        assert_object_schema_has_field(error_schema, "code");
        assert_object_schema_has_field(error_schema, "message");
    }

    #[rstest]
    fn week_view_exposes_kind_buckets() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let week = schemas.get("WeekView").expect("WeekView schema");
        for field in ["start", "label", "work", "learnings", "interestingThings"] {
            assert_object_schema_has_field(week, field);
        }
    }

    #[rstest]
    #[case("/")]
    #[case("/entries/{id}/edit")]
    #[case("/login")]
    #[case("/health/ready")]
    fn every_route_is_documented(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }

    #[rstest]
    fn session_cookie_scheme_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("SessionCookie"));
    }
}

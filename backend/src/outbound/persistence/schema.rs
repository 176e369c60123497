//! Diesel table definitions mirroring `backend/migrations`.
//!
//! Keep in step with the migrations; `diesel print-schema` regenerates this
//! from a live database.

diesel::table! {
    /// Journal entries.
    ///
    /// At most one of `image_data` and `image_url` is set; `image_data` is
    /// always paired with `image_content_type`.
    entries (id) {
        id -> Uuid,
        entry_date -> Date,
        /// One of `work`, `learning`, `interesting-thing`.
        kind -> Varchar,
        body -> Text,
        image_data -> Nullable<Bytea>,
        image_content_type -> Nullable<Text>,
        image_url -> Nullable<Text>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

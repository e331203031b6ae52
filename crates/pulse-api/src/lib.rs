pub mod boards;
pub mod error;
pub mod middleware;
pub mod posts;
pub mod votes;

use std::sync::Arc;

use mongodb::bson::oid::ObjectId;

use pulse_db::Database;

use crate::error::ApiError;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub db: Database,
}

/// Ids arrive as hex strings in query parameters. A missing or unparseable
/// id is a caller mistake, reported as a 400 with the given message rather
/// than surfacing as a cast failure deep in the store.
pub(crate) fn parse_object_id(raw: Option<&str>, missing: &'static str) -> Result<ObjectId, ApiError> {
    let raw = raw.ok_or(ApiError::Validation(missing))?;
    ObjectId::parse_str(raw).map_err(|_| ApiError::Validation(missing))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_id_is_a_validation_error() {
        let err = parse_object_id(None, "postId is required").unwrap_err();
        assert!(matches!(err, ApiError::Validation("postId is required")));
    }

    #[test]
    fn garbage_id_is_a_validation_error() {
        let err = parse_object_id(Some("not-an-oid"), "postId is required").unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn valid_hex_id_parses() {
        let id = ObjectId::new();
        let parsed = parse_object_id(Some(&id.to_hex()), "postId is required").unwrap();
        assert_eq!(parsed, id);
    }
}

//! Error taxonomy: status-code mapping and unique-violation detection.

use std::error::Error as StdError;
use std::fmt;

use actix_web::ResponseError;
use codenames_server::error::{is_unique_violation, ApiError};
use sqlx::error::{DatabaseError, ErrorKind};

/// Minimal driver-error stand-in so the duplicate-name path can be
/// exercised without a live database.
#[derive(Debug)]
struct StubDbError {
    unique: bool,
}

impl fmt::Display for StubDbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("stub database error")
    }
}

impl StdError for StubDbError {}

impl DatabaseError for StubDbError {
    fn message(&self) -> &str {
        "stub database error"
    }

    fn kind(&self) -> ErrorKind {
        if self.unique {
            ErrorKind::UniqueViolation
        } else {
            ErrorKind::Other
        }
    }

    fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self
    }

    fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
        self
    }

    fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
        self
    }
}

fn db_error(unique: bool) -> sqlx::Error {
    sqlx::Error::Database(Box::new(StubDbError { unique }))
}

#[test]
fn unique_violations_are_detected() {
    assert!(is_unique_violation(&db_error(true)));
    assert!(!is_unique_violation(&db_error(false)));
    // Errors without a driver payload never count as duplicates.
    assert!(!is_unique_violation(&sqlx::Error::RowNotFound));
}

#[test]
fn status_codes_follow_the_taxonomy() {
    assert_eq!(ApiError::Unauthorized.status_code().as_u16(), 401);
    assert_eq!(ApiError::validation("bad input").status_code().as_u16(), 400);
    assert_eq!(
        ApiError::conflict("Player name already exists")
            .status_code()
            .as_u16(),
        409
    );
    assert_eq!(ApiError::from(db_error(false)).status_code().as_u16(), 500);
    assert_eq!(ApiError::internal("broken").status_code().as_u16(), 500);
}

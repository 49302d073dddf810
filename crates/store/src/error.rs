//! The module contains the errors the store can throw.
//!
//! - [`UserNotFound`] when no row carries the requested id.
//! - [`InvalidField`] when a required column would be blank.
//! - [`Database`] for anything the driver reports.
//!
//!  [`UserNotFound`]: StoreError::UserNotFound
//!  [`InvalidField`]: StoreError::InvalidField
//!  [`Database`]: StoreError::Database
use sea_orm::DbErr;
use thiserror::Error;

/// Store custom errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("user {0} not found")]
    UserNotFound(i64),
    #[error("Invalid field: {0}")]
    InvalidField(String),
    #[error("no database connection configured")]
    MissingDatabase,
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for StoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::UserNotFound(a), Self::UserNotFound(b)) => a == b,
            (Self::InvalidField(a), Self::InvalidField(b)) => a == b,
            (Self::MissingDatabase, Self::MissingDatabase) => true,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}

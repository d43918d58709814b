use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Invalid store endpoint configuration: {0}")]
    ConnectionConfig(String),

    #[error("Failed to connect to the store: {0}")]
    Connection(#[source] sqlx::Error),

    #[error("Database migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Store operation failed: {0}")]
    Store(#[source] sqlx::Error),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("The requested record was not found.")]
    NotFound,
}

/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Carts are keyed by an opaque UUID handed to the client.
pub type CartId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Crate-wide result type. Ports and views return `anyhow::Error` so callers can
/// add context and still `downcast_ref` to [`crate::shared::error::ApiError`].
pub type Result<T> = std::result::Result<T, anyhow::Error>;

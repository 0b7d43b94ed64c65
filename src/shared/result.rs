/// Result alias used across every layer; errors carry context via anyhow
pub type Result<T> = std::result::Result<T, anyhow::Error>;

/// Placeholder the endpoint reports for fields it cannot resolve.
pub const UNKNOWN_FIELD: &str = "unknown";

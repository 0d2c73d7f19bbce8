//! Fixed response messages shared by every route.

pub const NOT_FOUND: &str = "Not Found";
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

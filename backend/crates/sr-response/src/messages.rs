//! Default messages for the shorthand error responders.

/// 404
pub const NOT_FOUND: &str = "Not Found!";

/// 400
pub const WRONG_ARGUMENTS: &str = "Wrong Arguments!";

/// 401
pub const NOT_AUTHORIZED: &str = "Not authorized!";

/// 403
pub const FORBIDDEN: &str = "Forbidden!";

/// 405
pub const METHOD_NOT_ALLOWED: &str = "HTTP Method Not Allowed!";

/// 429
pub const TOO_MANY_REQUESTS: &str = "Too many requests";

/// 500
pub const INTERNAL_ERROR: &str = "Internal Error!";

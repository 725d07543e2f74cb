//! Standard error codes for JSON error responses.

/// Malformed request
pub const BAD_REQUEST: &str = "BAD_REQUEST";

/// No authenticated user
pub const UNAUTHORIZED: &str = "UNAUTHORIZED";

/// Authenticated user lacks access
pub const FORBIDDEN: &str = "FORBIDDEN";

/// Resource not found
pub const NOT_FOUND: &str = "NOT_FOUND";

/// Resource was modified or already exists
pub const CONFLICT: &str = "CONFLICT";

/// Input validation failed
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";

/// Too many requests
pub const RATE_LIMIT_EXCEEDED: &str = "RATE_LIMIT_EXCEEDED";

/// Dependency down or maintenance
pub const SERVICE_UNAVAILABLE: &str = "SERVICE_UNAVAILABLE";

/// Operation not allowed in the entity's current state
pub const INVALID_STATE: &str = "INVALID_STATE";

/// Undo token expired, unknown or already used
pub const INVALID_UNDO_TOKEN: &str = "INVALID_UNDO_TOKEN";

/// Second factor needed to finish authentication
pub const TWO_FACTOR_REQUIRED: &str = "TWO_FACTOR_REQUIRED";

/// Second factor code rejected
pub const TWO_FACTOR_INVALID: &str = "TWO_FACTOR_INVALID";

/// Project parent links form a cycle
pub const CYCLIC_HIERARCHY: &str = "CYCLIC_HIERARCHY";

/// Project nesting passes the configured depth limit
pub const HIERARCHY_TOO_DEEP: &str = "HIERARCHY_TOO_DEEP";

/// Two projects share an id
pub const DUPLICATE_PROJECT_ID: &str = "DUPLICATE_PROJECT_ID";

/// Internal server error
pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";

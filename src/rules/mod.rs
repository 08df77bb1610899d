pub mod markers;
pub mod server_id;
pub mod upload_spec;

pub use markers::*;
pub use server_id::*;
pub use upload_spec::*;

/// Server id used when no `Artifactory.server(...)` call is found
pub const FALLBACK_SERVER_ID: &str = "ecosysjfrog";

/// Upload pattern used when no `"pattern"` field is found
pub const FALLBACK_UPLOAD_PATTERN: &str = "*.txt";

/// Upload target used when no `"target"` field is found
pub const FALLBACK_UPLOAD_TARGET: &str = "repo/";

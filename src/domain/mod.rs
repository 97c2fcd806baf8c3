pub mod context_map;
pub mod error;
pub mod options;
pub mod paths;
pub mod secret;
pub mod units;

pub use context_map::ContextMap;
pub use error::AppError;
pub use options::{non_empty_string, truthy};
pub use paths::AgentPaths;
pub use secret::generate_password;
pub use units::{normalize_unit_name, sorted_ids};

use std::io;

use thiserror::Error;

/// Library-wide error type for dashboard-agent operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A hook tool could not be spawned or exited non-zero.
    #[error("hook tool error running '{command}': {details}")]
    HookTool { command: String, details: String },

    /// The hook environment is missing something the dispatcher should provide.
    #[error("hook environment incomplete: {0}")]
    Environment(String),

    /// `prefer-ipv6` is set but address enumeration produced no candidates.
    #[error("prefer-ipv6 is set but no global IPv6 address is available")]
    NoIpv6Address,

    /// Certificate material was present but not decodable.
    #[error("invalid {what}: {details}")]
    InvalidCertificate { what: String, details: String },

    /// Template rendering failed.
    #[error("failed to render {template}: {details}")]
    Render { template: String, details: String },

    /// `--only` named a target this agent does not manage.
    #[error("unknown render target '{name}'. Available: {available}")]
    UnknownTarget { name: String, available: String },
}

use thiserror::Error;

/// Errors surfaced by platform controller implementations.
///
/// The taxonomy is deliberately shallow: a capability either does not exist
/// on the platform at all, exists but not at this OS version, or failed
/// transiently. Nothing is retried internally; every variant reaches the
/// caller as a failed call.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// The platform has no counterpart for this operation (e.g. showing the
    /// navigation bar on the web).
    #[error("not implemented on this platform: {0}")]
    Unimplemented(String),

    /// The operation exists but requires a newer OS version.
    #[error("{capability} requires API {required_api}, device is API {actual_api}")]
    PlatformUnsupported {
        capability: String,
        required_api: u32,
        actual_api: u32,
    },

    /// The platform accepted the call but failed to carry it out (e.g. a
    /// browser rejecting a Fullscreen API request).
    #[error("platform operation failed: {0}")]
    OperationFailed(String),
}

/// Rejected color literal. Colors are validated at the type boundary; the
/// resolver and controllers only ever see well-formed values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid color {value:?}: expected #RRGGBB or #AARRGGBB")]
pub struct ColorParseError {
    pub value: String,
}

pub type Result<T> = std::result::Result<T, BridgeError>;

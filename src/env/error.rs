use crate::bridge::host::HostError;

/// Failure surfaced to guest code by the environment shim.
///
/// The shim itself only produces resolution and dispatch errors. Host
/// failures ride through in `Host` exactly as the bridge raised them —
/// no rewording, no retry, no recovery.
#[derive(Debug, Clone, PartialEq)]
pub enum EnvError {
    ReferenceError(String),
    TypeError(String),
    Host(HostError),
}

impl std::fmt::Display for EnvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnvError::ReferenceError(m) => write!(f, "Uncaught reference error: {}.", m),
            EnvError::TypeError(m) => write!(f, "Uncaught type error: {}.", m),
            EnvError::Host(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for EnvError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EnvError::Host(e) => Some(e),
            _ => None,
        }
    }
}

impl From<HostError> for EnvError {
    fn from(e: HostError) -> Self {
        EnvError::Host(e)
    }
}

//! Error types.
//!
//! [`VlsmError`] is returned by the allocator and carries structured fields only.
//! [`InputError`] belongs to the interactive collector and never reaches the allocator.

use thiserror::Error;

/// Terminal failure of an allocation call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VlsmError {
    /// The base network string has no `/prefix` part.
    #[error("base network '{input}' has no prefix length (expected e.g. 10.0.0.0/8)")]
    MissingPrefix { input: String },

    #[error("invalid IPv4 address '{input}'")]
    InvalidAddress { input: String },

    #[error("invalid prefix length '{input}' (must be 0-32)")]
    InvalidPrefix { input: String },

    /// A request does not fit in the space left in the base network.
    #[error(
        "insufficient space for {requested} hosts (needs /{required_prefix}, \
         {available_addresses} addresses left)"
    )]
    InsufficientSpace {
        requested: u32,
        required_prefix: u8,
        available_addresses: u64,
    },

    /// The request needs more than 2^32 addresses.
    #[error("{requested} hosts cannot fit in any IPv4 network")]
    HostCountTooLarge { requested: u32 },
}

/// Errors raised while collecting input from the user.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("invalid host count '{input}': {reason}")]
    InvalidHostCount { input: String, reason: String },

    #[error("input closed before all values were entered")]
    Closed,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_space_message() {
        let e = VlsmError::InsufficientSpace {
            requested: 10,
            required_prefix: 28,
            available_addresses: 4,
        };
        assert_eq!(
            e.to_string(),
            "insufficient space for 10 hosts (needs /28, 4 addresses left)"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe");
        let e: InputError = io.into();
        assert!(matches!(e, InputError::Io(_)));
    }
}

//! Security utilities for credential protection and identifier handling.
//!
//! # Security Guarantees
//! - Credentials are stored in `Zeroizing` containers for automatic memory clearing
//! - Connection strings are parsed to extract credentials safely
//! - Passwords never appear in `Debug` output, logs or error messages
//! - Values interpolated into catalog SQL carry the `SanitizedIdent` type
//!
//! # Module Structure
//! - `credentials`: Secure credential container with automatic memory zeroing
//! - `connection`: Connection string parsing and info extraction
//! - `identifier`: Caller-sanitized identifiers for catalog filters

mod connection;
mod credentials;
mod identifier;

pub use connection::{ConnectionInfo, parse_connection_string};
pub use credentials::Credentials;
pub use identifier::{MAX_IDENTIFIER_LEN, SanitizedIdent};

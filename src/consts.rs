//! # Constants
//!
//! Protocol constants for the envelope format and the password KDF.
//! These are pinned once here and never re-derived per call.

/// The only envelope version produced and accepted by this library.
pub const VERSION: u8 = 1;

/// Type tag for envelopes encrypted with a raw [`Key`](crate::Key).
pub const TYPE_KEY: u8 = 1;

/// Type tag for envelopes encrypted with a [`Password`](crate::Password).
pub const TYPE_PASSWORD: u8 = 2;

/// AES block size in bytes.
pub const BLOCK_SIZE: usize = 16;

/// CBC initialization vector size in bytes.
pub const IV_SIZE: usize = 16;

/// HMAC-SHA256 trailer size in bytes.
pub const MAC_SIZE: usize = 32;

/// PBKDF2 salt size in bytes.
pub const SALT_SIZE: usize = 64;

/// Size of the big-endian iteration count in password envelopes.
pub const ITERATIONS_SIZE: usize = 4;

/// `version` + `type`.
pub const PREAMBLE_SIZE: usize = 2;

/// Type-specific header length for key envelopes (`iv`).
pub const KEY_HEADER_SIZE: usize = IV_SIZE;

/// Type-specific header length for password envelopes (`iterations ++ salt ++ iv`).
pub const PASSWORD_HEADER_SIZE: usize = ITERATIONS_SIZE + SALT_SIZE + IV_SIZE;

/// Default encrypt secret size for generated keys (AES-256).
pub const DEFAULT_ENCRYPT_SECRET_SIZE: usize = 32;

/// Authentication secret size (HMAC-SHA256 key).
pub const AUTH_SECRET_SIZE: usize = 32;

/// PBKDF2 output length: encrypt secret followed by auth secret.
pub const DERIVED_KEY_SIZE: usize = 64;

/// Minimum accepted PBKDF2 iteration count.
pub const MIN_ITERATIONS: u32 = 1;

/// Default PBKDF2 iteration count used by the password builder.
///
/// Tuned for roughly 0.05–0.1s on current hardware with HMAC-SHA256.
pub const DEFAULT_ITERATIONS: u32 = 100_000;

/// Maximum accepted PBKDF2 iteration count.
///
/// Encryption refuses larger counts. On decryption the count comes from an
/// unauthenticated header; larger values are reported as
/// [`CipherOutcome::InvalidMac`](crate::CipherOutcome::InvalidMac) without deriving.
pub const MAX_ITERATIONS: u32 = 5_000_000;

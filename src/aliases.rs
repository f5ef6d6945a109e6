//! # Secure-Gate Type Aliases
//!
//! Type aliases for secret material held in [`secure-gate`](https://github.com/Slurp9187/secure-gate)
//! wrappers. Reading requires an explicit `.expose_secret()`.
//!
//! The wrappers implement `Zeroize` but do not wipe themselves. Owners do it:
//! [`Key`](crate::Key), [`EncryptSecret`](crate::EncryptSecret) and
//! [`Password`](crate::Password) zeroize in `Drop`, and transient buffers
//! such as [`DerivedKey64`] are zeroized right after use.
//!
//! ## Type Categories
//!
//! ### HMAC Primitives
//! - [`HmacSha256`] - envelope authentication and the PBKDF2 PRF
//!
//! ### Fixed-Size Secrets
//! - [`Aes128Key16`] / [`Aes256Key32`] - encrypt secrets
//! - [`AuthSecret32`] - HMAC-SHA256 authentication secret
//! - [`DerivedKey64`] - raw PBKDF2 output before it is split
//! - [`Block16`] - one plaintext AES block
//!
//! ### Dynamic Secrets
//! - [`PasswordBytes`] - password material of any length
//!
//! ### Public Header Values
//! - [`Iv16`], [`Salt64`], [`MacTag32`] - plain arrays; they travel in the clear.

use crate::consts::{AUTH_SECRET_SIZE, BLOCK_SIZE, DERIVED_KEY_SIZE, IV_SIZE, MAC_SIZE, SALT_SIZE};
use hmac::Hmac;
use sha2::Sha256;

// ─────────────────────────────────────────────────────────────────────────────
// HMAC primitives
// ─────────────────────────────────────────────────────────────────────────────
pub type HmacSha256 = Hmac<Sha256>;

// ─────────────────────────────────────────────────────────────────────────────
// SpanBuffer — generic secure stack buffer (direct alias to secure-gate's Fixed)
// ─────────────────────────────────────────────────────────────────────────────
pub type SpanBuffer<const N: usize> = secure_gate::Fixed<[u8; N]>;

pub type Aes128Key16 = SpanBuffer<16>;
pub type Aes256Key32 = SpanBuffer<32>;
pub type AuthSecret32 = SpanBuffer<AUTH_SECRET_SIZE>;
pub type DerivedKey64 = SpanBuffer<DERIVED_KEY_SIZE>;
pub type Block16 = SpanBuffer<BLOCK_SIZE>; // one AES block

// ─────────────────────────────────────────────────────────────────────────────
// Dynamic secrets
// ─────────────────────────────────────────────────────────────────────────────
pub type PasswordBytes = secure_gate::Dynamic<Vec<u8>>;

// ─────────────────────────────────────────────────────────────────────────────
// Public values — written to the envelope in the clear
// ─────────────────────────────────────────────────────────────────────────────
pub type Iv16 = [u8; IV_SIZE];
pub type Salt64 = [u8; SALT_SIZE];
pub type MacTag32 = [u8; MAC_SIZE];

// src/lib.rs

pub mod aliases;
#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod builders;
pub mod cipher;
pub mod consts;
pub mod crypter;
pub mod crypto;
pub mod encoding;
pub mod error;
pub mod header;
pub mod key;
pub mod password;
pub mod stream;
pub mod utils;

// High-level API
pub use crypter::Crypter;
pub use error::LockboxError;
pub use key::{EncryptSecret, Key, KeyGenerator};
pub use password::Password;

// Engines and their parameters
pub use builders::PasswordParametersBuilder;
pub use cipher::{
    Cipher, CipherOutcome, CipherResult, CipherState, DecryptCipher, DecryptParameters,
    EncryptCipher, EncryptParameters,
};
pub use stream::{CipherStream, CipherWriter, StreamAdapter, StreamEnd};

// Collaborators that callers inject
pub use crypto::kdf::{DerivedKey, KeyDeriver};
pub use crypto::rng::{FixedRandomSource, OsRandomSource, RandomSource};
pub use encoding::{Base64Url, Decoder, Encoder};

pub use crypto::kdf::pbkdf2::derive_secure_pbkdf2_key;

#[cfg(feature = "batch-ops")]
pub use batch_ops::{decrypt_batch, encrypt_batch};

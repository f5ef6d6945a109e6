//! src/crypto/cbc.rs
//! AES-CBC, one block at a time.
//!
//! Chaining is done by hand with [`xor_blocks`] so the engine can emit each
//! ciphertext block as soon as its plaintext is complete. Key schedules are
//! wiped on drop (`aes` is built with its `zeroize` feature), and so are the
//! per-block temporaries that hold plaintext.

use crate::aliases::{Block16, Iv16};
use crate::consts::BLOCK_SIZE;
use crate::key::EncryptSecret;
use crate::utils::xor_blocks;
use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use aes::{Aes128Dec, Aes128Enc, Aes256Dec, Aes256Enc, Block as AesBlock};
use zeroize::Zeroize;

enum BlockEncryptor {
    Aes128(Aes128Enc),
    Aes256(Aes256Enc),
}

impl BlockEncryptor {
    fn new(secret: &EncryptSecret) -> Self {
        match secret {
            EncryptSecret::Aes128(key) => {
                Self::Aes128(Aes128Enc::new(GenericArray::from_slice(key.expose_secret())))
            }
            EncryptSecret::Aes256(key) => {
                Self::Aes256(Aes256Enc::new(GenericArray::from_slice(key.expose_secret())))
            }
        }
    }

    #[inline(always)]
    fn encrypt_block(&self, block: &mut AesBlock) {
        match self {
            Self::Aes128(cipher) => cipher.encrypt_block(block),
            Self::Aes256(cipher) => cipher.encrypt_block(block),
        }
    }
}

enum BlockDecryptor {
    Aes128(Aes128Dec),
    Aes256(Aes256Dec),
}

impl BlockDecryptor {
    fn new(secret: &EncryptSecret) -> Self {
        match secret {
            EncryptSecret::Aes128(key) => {
                Self::Aes128(Aes128Dec::new(GenericArray::from_slice(key.expose_secret())))
            }
            EncryptSecret::Aes256(key) => {
                Self::Aes256(Aes256Dec::new(GenericArray::from_slice(key.expose_secret())))
            }
        }
    }

    #[inline(always)]
    fn decrypt_block(&self, block: &mut AesBlock) {
        match self {
            Self::Aes128(cipher) => cipher.decrypt_block(block),
            Self::Aes256(cipher) => cipher.decrypt_block(block),
        }
    }
}

/// CBC encryption state: key schedule plus the previous ciphertext block.
pub(crate) struct CbcEncryptor {
    cipher: BlockEncryptor,
    prev_block: [u8; BLOCK_SIZE],
}

impl CbcEncryptor {
    pub(crate) fn new(secret: &EncryptSecret, iv: &Iv16) -> Self {
        Self {
            cipher: BlockEncryptor::new(secret),
            prev_block: *iv,
        }
    }

    /// Encrypt one 16-byte plaintext block and return its ciphertext.
    ///
    /// # Panics (by contract)
    ///
    /// Panics if `plaintext` is shorter than 16 bytes.
    #[inline]
    pub(crate) fn encrypt_block(&mut self, plaintext: &[u8]) -> [u8; BLOCK_SIZE] {
        let mut xored = Block16::new([0u8; BLOCK_SIZE]);
        xor_blocks(plaintext, &self.prev_block, xored.expose_secret_mut());

        let mut aes_block = AesBlock::clone_from_slice(xored.expose_secret());
        xored.zeroize();
        self.cipher.encrypt_block(&mut aes_block);

        self.prev_block.copy_from_slice(&aes_block);
        self.prev_block
    }
}

/// CBC decryption state.
pub(crate) struct CbcDecryptor {
    cipher: BlockDecryptor,
    prev_block: [u8; BLOCK_SIZE],
}

impl CbcDecryptor {
    pub(crate) fn new(secret: &EncryptSecret, iv: &Iv16) -> Self {
        Self {
            cipher: BlockDecryptor::new(secret),
            prev_block: *iv,
        }
    }

    /// Decrypt one 16-byte ciphertext block into `output`.
    ///
    /// # Panics (by contract)
    ///
    /// Panics if `ciphertext` or `output` is shorter than 16 bytes.
    #[inline]
    pub(crate) fn decrypt_block(&mut self, ciphertext: &[u8], output: &mut [u8]) {
        let mut aes_block = AesBlock::clone_from_slice(&ciphertext[..BLOCK_SIZE]);
        self.cipher.decrypt_block(&mut aes_block);
        xor_blocks(&aes_block, &self.prev_block, output);
        aes_block.as_mut_slice().zeroize();
        self.prev_block.copy_from_slice(&ciphertext[..BLOCK_SIZE]);
    }
}

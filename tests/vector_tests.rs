//! tests/vector_tests.rs
//! Known-answer envelopes, generated independently with a reference AES/HMAC/PBKDF2 stack.

mod common;

use common::{fixed_crypter, sequential_key};
use hex::decode;
use lockbox_rs::{CipherOutcome, DecryptParameters, EncryptParameters, Key, Password};

const IV: [u8; 16] = [
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f,
];

const KEY_256_FOOBAR: &str = "0101000102030405060708090a0b0c0d0e0f71f50dbc29782137790d1ea18d9e653dec1385f82336de94ee9c2c2db7bb0148670151e0af93a4f7161f762510bebe29";

const KEY_128_FOOBAR: &str = "0101000102030405060708090a0b0c0d0e0f785382295d69875ef530f340cb48fd4e5f987be47adda40977245cf3aa7e7b79804cf49eb76423d77ee1a7d163dae7fd";

const PASSWORD_FOOBAR: &str = "01020000000a404142434445464748494a4b4c4d4e4f505152535455565758595a5b5c5d5e5f606162636465666768696a6b6c6d6e6f707172737475767778797a7b7c7d7e7fa0a1a2a3a4a5a6a7a8a9aaabacadaeafe1439bd1de582aba746d36e46851c1b3e116c39e7c01a1da81974ffcfa03880df13b5083d2cbc87a23b2a44bb559efdd";

fn key_128() -> Key {
    let encrypt: Vec<u8> = (0x00..0x10).collect();
    let auth: Vec<u8> = (0x20..0x40).collect();
    Key::new(&encrypt, &auth, None, None).unwrap()
}

fn password_salt() -> [u8; 64] {
    let mut salt = [0u8; 64];
    for (i, b) in salt.iter_mut().enumerate() {
        *b = 0x40 + i as u8;
    }
    salt
}

fn password_iv() -> [u8; 16] {
    let mut iv = [0u8; 16];
    for (i, b) in iv.iter_mut().enumerate() {
        *b = 0xa0 + i as u8;
    }
    iv
}

#[test]
fn aes256_key_envelope_matches_vector() {
    let key = sequential_key();
    let envelope = fixed_crypter()
        .encrypt(EncryptParameters::Key { key: &key, iv: Some(IV) }, b"foobar")
        .unwrap();
    assert_eq!(hex::encode(&envelope), KEY_256_FOOBAR);
}

#[test]
fn aes128_key_envelope_matches_vector() {
    let key = key_128();
    let envelope = fixed_crypter()
        .encrypt(EncryptParameters::Key { key: &key, iv: Some(IV) }, b"foobar")
        .unwrap();
    assert_eq!(hex::encode(&envelope), KEY_128_FOOBAR);
}

#[test]
fn password_envelope_matches_vector() {
    let password = Password::from("password");
    let params = lockbox_rs::PasswordParametersBuilder::new(&password)
        .with_iterations(10)
        .with_salt(password_salt())
        .with_iv(password_iv())
        .build();

    let envelope = fixed_crypter().encrypt(params, b"foobar").unwrap();
    assert_eq!(hex::encode(&envelope), PASSWORD_FOOBAR);
}

#[test]
fn vectors_decrypt() {
    let crypter = fixed_crypter();

    let result = crypter
        .decrypt(DecryptParameters::Key(&sequential_key()), &decode(KEY_256_FOOBAR).unwrap())
        .unwrap();
    assert_eq!(result.data(), Some(&b"foobar"[..]));

    let result = crypter
        .decrypt(DecryptParameters::Key(&key_128()), &decode(KEY_128_FOOBAR).unwrap())
        .unwrap();
    assert_eq!(result.data(), Some(&b"foobar"[..]));

    let password = Password::from("password");
    let result = crypter
        .decrypt(DecryptParameters::Password(&password), &decode(PASSWORD_FOOBAR).unwrap())
        .unwrap();
    assert_eq!(result.outcome(), CipherOutcome::Success);
    assert_eq!(result.data(), Some(&b"foobar"[..]));
    assert_eq!(result.iterations(), Some(10));
}

#[test]
fn pbkdf2_sha256_64_byte_output() {
    let mut out = lockbox_rs::aliases::DerivedKey64::new([0u8; 64]);
    lockbox_rs::derive_secure_pbkdf2_key(b"password", &password_salt(), 10, &mut out).unwrap();
    assert_eq!(
        hex::encode(out.expose_secret()),
        "a9ffcda6854ce1957c9ad1a5be0bea46b6cbd4da9eebf9a81bf67cb4abb50239\
         a6a1b45b6020d86fdbebea74d3b0c0d049e30a3c51586681de5031f51ff3db54"
    );
}

// src/auth/token.rs
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

pub const TOKEN_BYTES: usize = 32;

/// Fresh URL-safe token from the OS RNG. Used for login links and sessions.
pub fn new_token() -> String {
    generate_token(&mut OsRng, TOKEN_BYTES)
}

/// Base64 URL-safe, no padding. 32 bytes -> 43 chars.
pub fn generate_token<R: RngCore>(rng: &mut R, nbytes: usize) -> String {
    let mut buf = vec![0u8; nbytes];
    rng.fill_bytes(&mut buf);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(&buf)
}

/// SHA-256 of the raw token. Only this goes into the database.
pub fn hash_token(token: &str) -> [u8; 32] {
    let digest = Sha256::digest(token.as_bytes());
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    out
}

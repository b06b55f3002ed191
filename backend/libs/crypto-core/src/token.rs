use rand::{rngs::OsRng, RngCore};

/// Number of random bytes behind an email verification token.
pub const VERIFICATION_TOKEN_BYTES: usize = 20;

/// Generate `len` random bytes from the OS RNG and hex-encode them.
///
/// The result is always `2 * len` lowercase hex characters.
pub fn random_hex_token(len: usize) -> String {
    let mut buf = vec![0u8; len];
    OsRng.fill_bytes(&mut buf);
    hex::encode(buf)
}

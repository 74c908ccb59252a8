//! Random password generation for user registration.

use base64::prelude::*;
use rand::RngCore;

/// Number of random bytes behind a generated password.
pub const PASSWORD_BYTES: usize = 32;

/// Generates a URL-safe random password.
///
/// [`PASSWORD_BYTES`] bytes from a cryptographically secure generator are
/// encoded as unpadded URL-safe base64, giving a 43-character string.
#[must_use]
pub fn generate_password() -> String {
    let mut bytes = [0u8; PASSWORD_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    BASE64_URL_SAFE_NO_PAD.encode(bytes)
}

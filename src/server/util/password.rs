use sha2::{Digest, Sha256};

/// Hashes a plaintext password into the hex digest stored in the `user` table.
pub fn hash_password(password: &str) -> String {
    format!("{:x}", Sha256::digest(password.as_bytes()))
}

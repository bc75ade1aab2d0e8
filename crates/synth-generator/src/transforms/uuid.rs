//! UUID value generator.

use rand::Rng;
use uuid::Uuid;

/// Generate an upper-case, hyphenated v4 UUID using the provided RNG.
pub fn generate_uuid<R: Rng>(rng: &mut R) -> String {
    // Generate 16 random bytes
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);

    // Set version (4) and variant (RFC 4122) bits
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;

    Uuid::from_bytes(bytes)
        .hyphenated()
        .to_string()
        .to_ascii_uppercase()
}

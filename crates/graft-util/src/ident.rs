//! Randomized identifier tokens.

use uuid::Uuid;

/// Generate a new randomized identifier.
///
/// The token is a UUID v4 in canonical hyphenated form: five hex groups of
/// 8, 4, 4, 4, and 12 digits, with the literal version nibble `4` opening
/// the third group and a variant nibble in `{8, 9, a, b}` opening the
/// fourth. Uniqueness is probabilistic; collisions are neither detected nor
/// retried.
pub fn new_identifier() -> String {
    Uuid::new_v4().to_string()
}

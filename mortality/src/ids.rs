//! Identifier generation for people and pets
//!
//! Ids are short random base-36 tokens. They are not cryptographically
//! strong and not globally unique; the store re-rolls on a clash inside one
//! record.

use rand::Rng;

use crate::components::EntityId;

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
pub const ID_LENGTH: usize = 7;

/// Generate a random 7-character id
pub fn generate_id() -> EntityId {
    let mut rng = rand::thread_rng();
    let token: String = (0..ID_LENGTH)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect();
    EntityId(token)
}

/// Generate an id for which `taken` returns false
pub fn generate_unique_id(taken: impl Fn(&str) -> bool) -> EntityId {
    loop {
        let id = generate_id();
        if !taken(id.as_str()) {
            return id;
        }
        tracing::debug!(id = %id, "generated id already in use, retrying");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_id_shape() {
        let id = generate_id();
        assert_eq!(id.as_str().len(), ID_LENGTH);
        assert!(id
            .as_str()
            .bytes()
            .all(|b| b.is_ascii_digit() || b.is_ascii_lowercase()));
    }

    #[test]
    fn test_unique_id_retries() {
        let calls = Cell::new(0);
        let id = generate_unique_id(|_| {
            calls.set(calls.get() + 1);
            calls.get() < 3
        });
        assert_eq!(calls.get(), 3);
        assert_eq!(id.as_str().len(), ID_LENGTH);
    }
}

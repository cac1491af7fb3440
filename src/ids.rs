//! Opaque identifier generation for entity records.

use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Length of the fallback id when no strong randomness is available.
const FALLBACK_ID_LEN: usize = 8;

/// Generate a collision-resistant opaque id for a new record.
///
/// Produces a v4 UUID from the thread RNG. If the RNG cannot supply
/// bytes, falls back to a clock-seeded alphanumeric string. Never
/// fails; ids are unique for any realistic process lifetime.
pub fn new_id() -> String {
    let mut bytes = [0u8; 16];
    match rand::thread_rng().try_fill_bytes(&mut bytes) {
        Ok(()) => uuid::Builder::from_random_bytes(bytes)
            .into_uuid()
            .to_string(),
        Err(_) => fallback_id(),
    }
}

fn fallback_id() -> String {
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    StdRng::seed_from_u64(seed)
        .sample_iter(&Alphanumeric)
        .take(FALLBACK_ID_LEN)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let a = new_id();
        let b = new_id();
        assert!(!a.is_empty());
        assert_ne!(a, b);
    }

    #[test]
    fn test_id_is_uuid_shaped() {
        let id = new_id();
        assert_eq!(id.len(), 36);
        assert_eq!(id.chars().filter(|c| *c == '-').count(), 4);
    }

    #[test]
    fn test_fallback_id_is_alphanumeric() {
        let id = fallback_id();
        assert_eq!(id.len(), FALLBACK_ID_LEN);
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_many_ids_no_collision() {
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            assert!(seen.insert(new_id()));
        }
    }
}

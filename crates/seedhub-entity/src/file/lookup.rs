//! Key lookup over embedded collections.

/// Index of the first item whose key equals `key`.
///
/// Embedded collections hold one entry per participant, so a linear scan is
/// all that is needed; only the uniqueness of keys matters, never their
/// position.
pub fn position_by_key<T, K, F>(items: &[T], key: &K, key_of: F) -> Option<usize>
where
    K: PartialEq + ?Sized,
    F: Fn(&T) -> &K,
{
    items.iter().position(|item| key_of(item) == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_first_match() {
        let pairs = [("a", 1), ("b", 2), ("b", 3)];
        assert_eq!(position_by_key(&pairs, "b", |p| p.0), Some(1));
        assert_eq!(position_by_key(&pairs, "z", |p| p.0), None);
    }

    #[test]
    fn test_empty_slice() {
        let empty: [(u8, u8); 0] = [];
        assert_eq!(position_by_key(&empty, &0, |p| &p.0), None);
    }
}

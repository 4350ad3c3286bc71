use crate::{ParsedName, Slot};
use std::hash::{Hash, Hasher};

/// Slot-for-slot equality over the six name slots.
///
/// # WARNING
///
/// This is deliberately not a full equivalence relation: an unparsable
/// value compares unequal to everything, *including itself*, the way
/// float `NaN` does. Empty or garbage inputs must never be treated as
/// the same person, even when their raw text matches. For the same
/// reason there is no `Eq` impl, so `ParsedName` cannot silently serve
/// as a hash-map key.
impl PartialEq for ParsedName {
    fn eq(&self, other: &ParsedName) -> bool {
        if self.is_unparsable() || other.is_unparsable() {
            return false;
        }

        Slot::ALL
            .iter()
            .all(|&slot| self.words(slot) == other.words(slot))
    }
}

/// Hashes the slot contents, so two equal parsable values hash
/// identically. Unparsable values all hash alike despite never
/// comparing equal; collections relying on hashing want `Eq` anyway,
/// which this type intentionally does not provide.
impl Hash for ParsedName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for &slot in Slot::ALL.iter() {
            for word in self.words(slot).iter() {
                word.hash(state);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_slots_compare_equal() {
        let a = ParsedName::parse("John Doe");
        let b = ParsedName::parse("JOHN DOE");
        assert_eq!(a, b);
    }

    #[test]
    fn different_formats_same_decomposition() {
        let a = ParsedName::parse("Doe, John A. Jr.");
        let b = ParsedName::parse("John A. Doe Jr.");
        assert_eq!(a, b);
    }

    #[test]
    fn different_names_compare_unequal() {
        let a = ParsedName::parse("John Doe");
        let b = ParsedName::parse("Jane Doe");
        assert_ne!(a, b);
    }

    #[test]
    fn unparsable_equals_nothing() {
        let a = ParsedName::parse("");
        let b = ParsedName::parse("");
        assert_ne!(a, b);
        assert_ne!(b, a);

        let parsed = ParsedName::parse("John Doe");
        assert_ne!(a, parsed);
        assert_ne!(parsed, a);
    }

    #[test]
    fn unparsable_is_not_even_self_equal() {
        let a = ParsedName::parse("!!!");
        assert!(a.is_unparsable());
        assert_ne!(a, a);
    }
}

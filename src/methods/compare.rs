use std::cmp::Ordering;

use crate::UUID;

impl UUID {
    /// Total-order comparison, `-1`/`0`/`+1`, mirroring the C `uuid_compare`
    /// contract where either handle may be absent.
    ///
    /// Two absent identifiers compare equal; a present identifier compares
    /// against an absent one by whether the present one is nil (an absent
    /// identifier behaves like nil for ordering purposes).
    #[must_use]
    pub fn compare(a: Option<&Self>, b: Option<&Self>) -> i32 {
        let ordering = match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(b)) => Self::nil().cmp(b),
            (Some(a), None) => a.cmp(&Self::nil()),
            (Some(a), Some(b)) => a.cmp(b),
        };

        match ordering {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::UUID;
    use std::str::FromStr;

    #[test]
    fn equal_identifiers_compare_zero() {
        let a = UUID::from_str("f81d4fae-7dec-11d0-a765-00a0c91e6bf6").unwrap();
        let b = a;
        assert_eq!(UUID::compare(Some(&a), Some(&b)), 0);
    }

    fn from_u8(last: u8) -> UUID {
        let mut bytes = [0u8; 16];
        bytes[15] = last;
        UUID::from_bytes(bytes)
    }

    #[test]
    fn ordering_is_antisymmetric() {
        let a = UUID::nil();
        let b = from_u8(1);
        assert_eq!(UUID::compare(Some(&a), Some(&b)), -1);
        assert_eq!(UUID::compare(Some(&b), Some(&a)), 1);
    }

    #[test]
    fn both_absent_compare_equal() {
        assert_eq!(UUID::compare(None, None), 0);
    }

    #[test]
    fn absent_compares_as_nil() {
        let nil = UUID::nil();
        let non_nil = from_u8(1);

        assert_eq!(UUID::compare(None, Some(&nil)), 0);
        assert_eq!(UUID::compare(None, Some(&non_nil)), -1);
        assert_eq!(UUID::compare(Some(&non_nil), None), 1);
    }

    #[test]
    fn is_total_order_transitively() {
        let a = UUID::nil();
        let b = from_u8(1);
        let c = from_u8(2);

        assert_eq!(UUID::compare(Some(&a), Some(&b)), -1);
        assert_eq!(UUID::compare(Some(&b), Some(&c)), -1);
        assert_eq!(UUID::compare(Some(&a), Some(&c)), -1);
    }
}

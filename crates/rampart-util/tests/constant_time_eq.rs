// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod constant_time_eq_tests {
    use proptest::prelude::*;
    use rampart_util::constant_time_eq;

    #[test]
    fn test_equal_tags() {
        let tag = [0x5Au8; 32];
        assert!(constant_time_eq(&tag, &tag.clone()));
    }

    #[test]
    fn test_last_byte_differs() {
        let a = [7u8; 32];
        let mut b = a;
        b[31] ^= 0x01;
        assert!(!constant_time_eq(&a, &b));
    }

    #[test]
    fn test_first_byte_differs() {
        let a = [7u8; 32];
        let mut b = a;
        b[0] ^= 0x80;
        assert!(!constant_time_eq(&a, &b));
    }

    #[test]
    fn test_length_mismatch() {
        assert!(!constant_time_eq(&[1, 2, 3, 4, 5], &[1, 2, 3, 4]));
        assert!(!constant_time_eq(&[], &[0]));
    }

    #[test]
    fn test_empty_slices() {
        let a: [u8; 0] = [];
        assert!(constant_time_eq(&a, &a));
    }

    proptest! {
        #[test]
        fn prop_matches_slice_eq(
            a in proptest::collection::vec(any::<u8>(), 0..64),
            b in proptest::collection::vec(any::<u8>(), 0..64),
        ) {
            prop_assert_eq!(constant_time_eq(&a, &b), a == b);
        }
    }
}

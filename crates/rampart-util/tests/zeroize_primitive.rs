// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod zeroize_primitive_tests {
    use rampart_util::zeroize_primitive;

    #[test]
    fn test_zeroize_integers() {
        let mut a = 0xDEADBEEFu32;
        let mut b = u64::MAX;
        let mut c = -1i64;
        zeroize_primitive(&mut a);
        zeroize_primitive(&mut b);
        zeroize_primitive(&mut c);
        assert_eq!((a, b, c), (0, 0, 0));
    }

    #[test]
    fn test_zeroize_bool_and_usize() {
        let mut flag = true;
        let mut len = 4096usize;
        zeroize_primitive(&mut flag);
        zeroize_primitive(&mut len);
        assert!(!flag);
        assert_eq!(len, 0);
    }
}

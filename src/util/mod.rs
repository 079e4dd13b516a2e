// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod rand;

use num_bigint_dig::BigUint;
use num_traits::One;

/// L(x) = (x - 1) / n
///
/// This function appears in the decryption algorithm. It's well-defined
/// because x = 1 (mod n) on the decryption path.
#[inline]
pub fn l_function(x: &BigUint, n: &BigUint) -> BigUint {
    (x - BigUint::one()) / n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn l_function_divides_out_the_modulus() {
        let n = BigUint::from(143u32);
        // x = 1 + 7n
        let x = BigUint::from(1u32) + BigUint::from(7u32) * &n;
        assert_eq!(l_function(&x, &n), BigUint::from(7u32));
        assert_eq!(l_function(&BigUint::from(1u32), &n), BigUint::from(0u32));
    }
}

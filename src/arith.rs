// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Modular arithmetic over arbitrary-precision signed integers.
//!
//! Inputs are signed; every modular result is the canonical nonnegative
//! residue in `[0, n)`, returned as a `BigUint`.

use num_bigint_dig::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::error::{Error, Result};

/// Mathematical absolute value.
#[inline]
pub fn abs(a: &BigInt) -> BigInt {
    a.abs()
}

/// Number of bits required to represent |a|. Zero for a = 0.
#[inline]
pub fn bit_length(a: &BigInt) -> usize {
    magnitude(a).bits()
}

/// |a| as an unsigned integer.
#[inline]
pub(crate) fn magnitude(a: &BigInt) -> BigUint {
    a.abs().to_biguint().unwrap_or_default()
}

/// Greatest common divisor. Always nonnegative; gcd(a, 0) = |a| and
/// gcd(0, 0) = 0.
pub fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    BigInt::from(magnitude(a).gcd(&magnitude(b)))
}

/// Least common multiple, |a·b| / gcd(a, b), with lcm(0, 0) = 0.
pub fn lcm(a: &BigInt, b: &BigInt) -> BigInt {
    if a.is_zero() && b.is_zero() {
        return BigInt::zero();
    }
    (a * b).abs() / gcd(a, b)
}

/// Bezout coefficients produced by [`egcd`]: a·x + b·y = g.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Egcd {
    pub g: BigInt,
    pub x: BigInt,
    pub y: BigInt,
}

/// Iterative extended Euclidean algorithm.
///
/// Both operands must be strictly positive.
pub fn egcd(a: &BigInt, b: &BigInt) -> Result<Egcd> {
    if !a.is_positive() || !b.is_positive() {
        return Err(Error::NonPositiveOperand);
    }

    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_x, mut x) = (BigInt::one(), BigInt::zero());
    let (mut old_y, mut y) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let q = &old_r / &r;
        let next_r = &old_r - &q * &r;
        old_r = std::mem::replace(&mut r, next_r);
        let next_x = &old_x - &q * &x;
        old_x = std::mem::replace(&mut x, next_x);
        let next_y = &old_y - &q * &y;
        old_y = std::mem::replace(&mut y, next_y);
    }

    Ok(Egcd {
        g: old_r,
        x: old_x,
        y: old_y,
    })
}

/// Canonical representative of `a` in `[0, n)`.
pub fn to_zn(a: &BigInt, n: &BigInt) -> Result<BigUint> {
    if !n.is_positive() {
        return Err(Error::NonPositiveModulus);
    }
    let mut r = a % n;
    if r.is_negative() {
        r = r + n;
    }
    Ok(r.to_biguint().unwrap_or_default())
}

/// Modular inverse of `a` modulo `n`, defined when gcd(a, n) = 1.
pub fn mod_inv(a: &BigInt, n: &BigInt) -> Result<BigUint> {
    let residue = to_zn(a, n)?;
    if residue.is_zero() {
        return Err(Error::NoInverse);
    }
    let e = egcd(&BigInt::from(residue), n)?;
    if !e.g.is_one() {
        return Err(Error::NoInverse);
    }
    to_zn(&e.x, n)
}

/// Modular exponentiation, a^e mod n, with signed base and exponent.
///
/// A negative exponent computes the positive power first and then inverts
/// it, so the base must be a unit modulo `n` in that case. The nonnegative
/// core is square-and-multiply with a reduction at every step; the full
/// power a^e is never materialized.
pub fn mod_pow(base: &BigInt, exponent: &BigInt, n: &BigInt) -> Result<BigUint> {
    if !n.is_positive() {
        return Err(Error::NonPositiveModulus);
    }
    if n.is_one() {
        return Ok(BigUint::zero());
    }

    let b = to_zn(base, n)?;
    let modulus = magnitude(n);
    let power = b.modpow(&magnitude(exponent), &modulus);
    if exponent.is_negative() {
        return mod_inv(&BigInt::from(power), n);
    }
    Ok(power)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(v: i64) -> BigInt {
        BigInt::from(v)
    }

    fn uint(v: u64) -> BigUint {
        BigUint::from(v)
    }

    #[test]
    fn abs_and_bit_length() {
        assert_eq!(abs(&int(-7)), int(7));
        assert_eq!(abs(&int(7)), int(7));
        assert_eq!(bit_length(&int(0)), 0);
        assert_eq!(bit_length(&int(1)), 1);
        assert_eq!(bit_length(&int(-8)), 4);
        assert_eq!(bit_length(&int(255)), 8);
        assert_eq!(bit_length(&int(256)), 9);
    }

    #[test]
    fn gcd_handles_signs_and_zero() {
        assert_eq!(gcd(&int(12), &int(18)), int(6));
        assert_eq!(gcd(&int(-12), &int(18)), int(6));
        assert_eq!(gcd(&int(12), &int(-18)), int(6));
        assert_eq!(gcd(&int(-17), &int(0)), int(17));
        assert_eq!(gcd(&int(0), &int(0)), int(0));
    }

    #[test]
    fn lcm_handles_signs_and_zero() {
        assert_eq!(lcm(&int(4), &int(6)), int(12));
        assert_eq!(lcm(&int(-4), &int(6)), int(12));
        assert_eq!(lcm(&int(0), &int(5)), int(0));
        assert_eq!(lcm(&int(0), &int(0)), int(0));
    }

    #[test]
    fn egcd_produces_bezout_coefficients() {
        let e = egcd(&int(240), &int(46)).unwrap();
        assert_eq!(e.g, int(2));
        assert_eq!(&int(240) * &e.x + &int(46) * &e.y, e.g);

        for (a, b) in [(1i64, 1), (17, 13), (13, 17), (1000, 6), (6, 1000)] {
            let e = egcd(&int(a), &int(b)).unwrap();
            assert_eq!(&int(a) * &e.x + &int(b) * &e.y, e.g);
        }
    }

    #[test]
    fn egcd_rejects_non_positive_operands() {
        assert_eq!(egcd(&int(0), &int(5)), Err(Error::NonPositiveOperand));
        assert_eq!(egcd(&int(5), &int(0)), Err(Error::NonPositiveOperand));
        assert_eq!(egcd(&int(-3), &int(5)), Err(Error::NonPositiveOperand));
    }

    #[test]
    fn to_zn_canonicalizes() {
        assert_eq!(to_zn(&int(12), &int(5)).unwrap(), uint(2));
        assert_eq!(to_zn(&int(-7), &int(5)).unwrap(), uint(3));
        assert_eq!(to_zn(&int(-10), &int(5)).unwrap(), uint(0));
        assert_eq!(to_zn(&int(3), &int(0)), Err(Error::NonPositiveModulus));
        assert_eq!(to_zn(&int(3), &int(-4)), Err(Error::NonPositiveModulus));
    }

    #[test]
    fn mod_inv_inverts_units() {
        assert_eq!(mod_inv(&int(3), &int(7)).unwrap(), uint(5));
        assert_eq!(mod_inv(&int(120), &int(143)).unwrap(), uint(87));

        for a in [1i64, 2, 4, 7, 8, 11, 13, 14] {
            let inv = mod_inv(&int(a), &int(15)).unwrap();
            assert_eq!((uint(a as u64) * inv) % uint(15), uint(1));
        }
    }

    #[test]
    fn mod_inv_rejects_non_units() {
        assert_eq!(mod_inv(&int(2), &int(4)), Err(Error::NoInverse));
        assert_eq!(mod_inv(&int(0), &int(7)), Err(Error::NoInverse));
        assert_eq!(mod_inv(&int(21), &int(7)), Err(Error::NoInverse));
        assert_eq!(mod_inv(&int(3), &int(0)), Err(Error::NonPositiveModulus));
    }

    #[test]
    fn mod_pow_basics() {
        assert_eq!(mod_pow(&int(4), &int(0), &int(9)).unwrap(), uint(1));
        assert_eq!(mod_pow(&int(4), &int(1), &int(9)).unwrap(), uint(4));
        assert_eq!(mod_pow(&int(3), &int(4), &int(5)).unwrap(), uint(1));
        assert_eq!(mod_pow(&int(2), &int(10), &int(1000)).unwrap(), uint(24));
        assert_eq!(mod_pow(&int(5), &int(100), &int(1)).unwrap(), uint(0));
        assert_eq!(
            mod_pow(&int(2), &int(3), &int(0)),
            Err(Error::NonPositiveModulus)
        );
    }

    #[test]
    fn mod_pow_negative_base_and_exponent() {
        // -2 = 5 (mod 7), and 5^3 = 125 = 6 (mod 7)
        assert_eq!(mod_pow(&int(-2), &int(3), &int(7)).unwrap(), uint(6));
        // 3^-1 mod 7
        assert_eq!(mod_pow(&int(3), &int(-1), &int(7)).unwrap(), uint(5));
        // (2^2)^-1 = 4^-1 = 2 (mod 7)
        assert_eq!(mod_pow(&int(2), &int(-2), &int(7)).unwrap(), uint(2));
        // non-unit base with negative exponent has no inverse
        assert_eq!(mod_pow(&int(2), &int(-1), &int(4)), Err(Error::NoInverse));
    }

    #[test]
    fn mod_pow_is_multiplicative_in_the_exponent() {
        let n = int(143);
        for (b, e1, e2) in [(7i64, 3i64, 9i64), (2, 15, 4), (5, 0, 11)] {
            let lhs = mod_pow(&int(b), &int(e1 + e2), &n).unwrap();
            let rhs = (mod_pow(&int(b), &int(e1), &n).unwrap()
                * mod_pow(&int(b), &int(e2), &n).unwrap())
                % uint(143);
            assert_eq!(lhs, rhs);
        }
    }
}

// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Secure random sampling of bytes, fixed-width integers and ranges.
//!
//! All entropy comes from the operating system CSPRNG ([`OsRng`]); there is
//! no way to plug in a different generator.

use num_bigint_dig::BigUint;
use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::{Error, Result};

/// `byte_len` cryptographically secure random bytes.
pub fn rand_bytes(byte_len: usize) -> Result<Vec<u8>> {
    if byte_len < 1 {
        return Err(Error::InvalidByteLength(byte_len));
    }
    let mut buf = vec![0u8; byte_len];
    OsRng.fill_bytes(&mut buf);
    Ok(buf)
}

/// A random integer carrying exactly `bit_len` bits of entropy.
///
/// Draws the minimal number of bytes and clears the excess high bits of the
/// leading byte. With `force_top` the most significant of the `bit_len`
/// bits is set to 1, so the result has bit length exactly `bit_len`.
pub fn rand_bits(bit_len: usize, force_top: bool) -> Result<BigUint> {
    if bit_len < 1 {
        return Err(Error::InvalidBitLength(bit_len));
    }
    Ok(random_bits_unchecked(bit_len, force_top))
}

/// [`rand_bits`] without the length check. Callers guarantee `bit_len >= 1`.
pub(crate) fn random_bits_unchecked(bit_len: usize, force_top: bool) -> BigUint {
    let byte_len = (bit_len + 7) / 8;
    let mut buf = vec![0u8; byte_len];
    OsRng.fill_bytes(&mut buf);

    // Bits carried by the leading (big-endian) byte.
    let top_bits = bit_len - 8 * (byte_len - 1);
    if top_bits < 8 {
        buf[0] &= (1u8 << top_bits) - 1;
    }
    if force_top {
        buf[0] |= 1u8 << (top_bits - 1);
    }

    BigUint::from_bytes_be(&buf)
}

/// Uniform random integer in the inclusive range `[min, max]`.
///
/// Rejection sampling: draw bit_length(max - min) random bits until the
/// value falls inside the interval, then shift by `min`. Unbiased, at the
/// cost of less than two draws on average.
pub fn rand_between(min: &BigUint, max: &BigUint) -> Result<BigUint> {
    if max <= min {
        return Err(Error::EmptyRange);
    }
    let interval = max - min;
    let bits = interval.bits();
    loop {
        let draw = random_bits_unchecked(bits, false);
        if draw <= interval {
            return Ok(min + draw);
        }
    }
}

// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Encryption and the homomorphic operations available to holders of the
//! public key.

use num_bigint_dig::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::One;

use crate::arith;
use crate::error::{Error, Result};
use crate::key::PublicKey;
use crate::util::rand::rand_between;

impl PublicKey {
    /// Encrypt `m` under this key: g^m * r^n mod n^2.
    ///
    /// When `r` is omitted a fresh nonce is drawn uniformly from [1, n),
    /// rejected until coprime to n. Plaintexts are read modulo n; values
    /// at or above n are accepted and wrap.
    pub fn encrypt(&self, m: &BigUint, r: Option<&BigUint>) -> Result<BigUint> {
        let nonce = match r {
            Some(r) => r.clone(),
            None => self.sample_nonce()?,
        };

        let gm = self.g().modpow(m, self.n_squared());
        let rn = nonce.modpow(self.n(), self.n_squared());
        Ok((gm * rn) % self.n_squared())
    }

    /// Uniform draw from [1, n) coprime to n. Checking gcd against n is
    /// enough: gcd(r, n) = 1 iff gcd(r, n^2) = 1.
    fn sample_nonce(&self) -> Result<BigUint> {
        let one = BigUint::one();
        let upper = self.n() - &one;
        loop {
            let r = rand_between(&one, &upper)?;
            if r.gcd(self.n()).is_one() {
                return Ok(r);
            }
        }
    }

    /// Homomorphic addition: the product of the given ciphertexts mod n^2
    /// decrypts to the sum of their plaintexts mod n.
    ///
    /// At least two ciphertexts are required.
    pub fn addition(&self, ciphertexts: &[BigUint]) -> Result<BigUint> {
        if ciphertexts.len() < 2 {
            return Err(Error::TooFewCiphertexts);
        }
        Ok(ciphertexts
            .iter()
            .fold(BigUint::one(), |acc, c| (acc * c) % self.n_squared()))
    }

    /// Fold plaintext constants into a ciphertext without spending a nonce
    /// per addend: c * g^m1 * ... * g^mk mod n^2 decrypts to
    /// m + m1 + ... + mk mod n.
    pub fn plaintext_addition(&self, ciphertext: &BigUint, addends: &[BigUint]) -> BigUint {
        addends
            .iter()
            .fold(ciphertext % self.n_squared(), |acc, m| {
                (acc * self.g().modpow(m, self.n_squared())) % self.n_squared()
            })
    }

    /// Pseudo-homomorphic scalar multiplication: c^k mod n^2 decrypts to
    /// k * m mod n.
    ///
    /// Negative scalars are supported through the modular inverse of the
    /// ciphertext, which exists because ciphertexts are units mod n^2.
    pub fn multiply(&self, ciphertext: &BigUint, k: &BigInt) -> Result<BigUint> {
        multiply_mod(ciphertext, k, self.n_squared())
    }
}

/// Scalar multiplication of a ciphertext under an externally supplied
/// modulus square.
///
/// This is the cross-key form of [`PublicKey::multiply`]: together with
/// [`dual_generator`](crate::dual_generator) it lets ciphertexts produced
/// under one key participate in arithmetic interpreted under another
/// key's n^2.
pub fn multiply_mod(ciphertext: &BigUint, k: &BigInt, n_squared: &BigUint) -> Result<BigUint> {
    arith::mod_pow(
        &BigInt::from(ciphertext.clone()),
        k,
        &BigInt::from(n_squared.clone()),
    )
}

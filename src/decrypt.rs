// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Decryption and nonce recovery, the operations requiring the private
//! key.

use num_bigint_dig::{BigInt, BigUint};
use num_traits::{One, Zero};

use crate::arith;
use crate::error::{Error, Result};
use crate::key::PrivateKey;
use crate::util::l_function;

impl PrivateKey {
    /// Decrypt a ciphertext: L(c^lambda mod n^2) * mu mod n.
    ///
    /// The result lies in [0, n).
    pub fn decrypt(&self, ciphertext: &BigUint) -> Result<BigUint> {
        let n = self.public_key().n();
        let nn = self.public_key().n_squared();

        let x = ciphertext.modpow(self.lambda(), nn);
        if x.is_zero() {
            // c shares every prime factor with n; no valid encryption
            // produces such a value
            return Err(Error::InvalidCiphertext);
        }

        Ok((l_function(&x, n) * self.mu()) % n)
    }

    /// Recover the nonce a simple-variant ciphertext was encrypted with.
    ///
    /// With g = n + 1 and m = decrypt(c), the product c * (1 - m*n) is
    /// congruent to r^n mod n^2, and raising it to n^-1 mod phi(n) undoes
    /// the n-th power. Requires the key's prime factors.
    pub fn random_factor(&self, ciphertext: &BigUint) -> Result<BigUint> {
        if !self.public_key().is_simple_variant() {
            return Err(Error::NotSimpleVariant);
        }
        let (p, q) = self.primes()?;

        let n = self.public_key().n();
        let nn = self.public_key().n_squared();
        let one = BigUint::one();

        let m = self.decrypt(ciphertext)?;
        let phi = BigInt::from((p - &one) * (q - &one));
        let n_inv = arith::mod_inv(&BigInt::from(n.clone()), &phi)?;

        let c1 = arith::to_zn(
            &(BigInt::from(ciphertext.clone()) * (BigInt::one() - BigInt::from(m * n))),
            &BigInt::from(nn.clone()),
        )?;
        arith::mod_pow(
            &BigInt::from(c1),
            &BigInt::from(n_inv),
            &BigInt::from(n.clone()),
        )
    }
}

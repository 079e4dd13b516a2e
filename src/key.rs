// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use num_bigint_dig::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Error, Result};

/// Public parameters of the cryptosystem.
///
/// The modulus `n` is a product of two distinct odd primes and `g` is a
/// generator in the multiplicative group modulo `n^2`. The square `n^2`,
/// the ring ciphertexts live in, is cached at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    n: BigUint,
    g: BigUint,
    nn: BigUint,
    bit_length: usize,
}

impl PublicKey {
    /// Construct a public key from its components.
    ///
    /// `n` must be odd and at least 4; `g` must be a nonzero unit modulo
    /// `n^2`.
    pub fn new(n: BigUint, g: BigUint, bit_length: usize) -> Result<Self> {
        if n < BigUint::from(4u32) || n.is_even() {
            return Err(Error::InvalidPublicKey);
        }
        let nn = &n * &n;
        if g.is_zero() || g >= nn || !g.gcd(&nn).is_one() {
            return Err(Error::InvalidPublicKey);
        }

        Ok(Self {
            n,
            g,
            nn,
            bit_length,
        })
    }

    /// Return the public modulus `n`.
    #[inline]
    pub fn n(&self) -> &BigUint {
        &self.n
    }

    /// Return the generator `g`.
    #[inline]
    pub fn g(&self) -> &BigUint {
        &self.g
    }

    /// Return the cached square of the modulus.
    #[inline]
    pub fn n_squared(&self) -> &BigUint {
        &self.nn
    }

    /// Return the configured bit length of the modulus.
    #[inline]
    pub fn bit_length(&self) -> usize {
        self.bit_length
    }

    /// True when the key uses the simple-variant generator g = n + 1,
    /// the setup that permits nonce recovery.
    pub fn is_simple_variant(&self) -> bool {
        self.g == &self.n + BigUint::one()
    }
}

/// Secret key material.
///
/// `lambda` and `mu` drive decryption. The prime factors are carried when
/// known; reconstructed keys may omit them, giving up nonce recovery.
/// Sensitive fields are zeroized on drop. `num-bigint-dig` implements
/// `Zeroize` for `BigUint`, which wipes the underlying digit vectors.
#[allow(missing_debug_implementations)]
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey {
    #[zeroize(skip)]
    public_key: PublicKey,
    lambda: BigUint,
    mu: BigUint,
    p: Option<BigUint>,
    q: Option<BigUint>,
}

impl PrivateKey {
    /// Construct a private key from its components.
    ///
    /// When both primes are given they must reconstruct the public
    /// modulus.
    pub fn new(
        public_key: PublicKey,
        lambda: BigUint,
        mu: BigUint,
        p: Option<BigUint>,
        q: Option<BigUint>,
    ) -> Result<Self> {
        if let (Some(p), Some(q)) = (&p, &q) {
            if &(p * q) != public_key.n() {
                return Err(Error::InvalidPrivateKey);
            }
        }

        Ok(Self {
            public_key,
            lambda,
            mu,
            p,
            q,
        })
    }

    /// Return a reference to the associated public key.
    #[inline]
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Return the secret exponent lambda.
    #[inline]
    pub fn lambda(&self) -> &BigUint {
        &self.lambda
    }

    /// Return the secret multiplier mu.
    #[inline]
    pub fn mu(&self) -> &BigUint {
        &self.mu
    }

    /// The public modulus, for convenience.
    #[inline]
    pub fn n(&self) -> &BigUint {
        self.public_key.n()
    }

    /// Both prime factors, when the key carries them.
    pub(crate) fn primes(&self) -> Result<(&BigUint, &BigUint)> {
        match (&self.p, &self.q) {
            (Some(p), Some(q)) => Ok((p, q)),
            _ => Err(Error::MissingPrimes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uint(v: u64) -> BigUint {
        BigUint::from(v)
    }

    #[test]
    fn public_key_accepts_valid_components() {
        let key = PublicKey::new(uint(143), uint(144), 8).unwrap();
        assert_eq!(key.n(), &uint(143));
        assert_eq!(key.g(), &uint(144));
        assert_eq!(key.n_squared(), &uint(20449));
        assert_eq!(key.bit_length(), 8);
        assert!(key.is_simple_variant());
    }

    #[test]
    fn public_key_rejects_bad_components() {
        // even modulus
        assert_eq!(
            PublicKey::new(uint(10), uint(11), 4),
            Err(Error::InvalidPublicKey)
        );
        // modulus too small
        assert_eq!(
            PublicKey::new(uint(3), uint(4), 2),
            Err(Error::InvalidPublicKey)
        );
        // g = 0 and g outside the ring
        assert_eq!(
            PublicKey::new(uint(143), uint(0), 8),
            Err(Error::InvalidPublicKey)
        );
        assert_eq!(
            PublicKey::new(uint(143), uint(20449), 8),
            Err(Error::InvalidPublicKey)
        );
        // g shares a factor with n^2
        assert_eq!(
            PublicKey::new(uint(143), uint(11), 8),
            Err(Error::InvalidPublicKey)
        );
    }

    #[test]
    fn private_key_checks_prime_consistency() {
        let public = PublicKey::new(uint(143), uint(144), 8).unwrap();
        assert!(PrivateKey::new(
            public.clone(),
            uint(120),
            uint(87),
            Some(uint(11)),
            Some(uint(13)),
        )
        .is_ok());

        assert_eq!(
            PrivateKey::new(public, uint(120), uint(87), Some(uint(11)), Some(uint(17)))
                .err(),
            Some(Error::InvalidPrivateKey)
        );
    }

    #[test]
    fn private_key_without_primes_reports_them_missing() {
        let public = PublicKey::new(uint(143), uint(144), 8).unwrap();
        let secret = PrivateKey::new(public, uint(120), uint(87), None, None).unwrap();
        assert_eq!(secret.primes(), Err(Error::MissingPrimes));
        assert_eq!(secret.n(), &uint(143));
    }
}

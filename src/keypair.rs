// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Key-pair generation: random keys via the builder, reconstruction from
//! known primes, and generator selection.

use num_bigint_dig::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::One;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::arith;
use crate::error::{Error, Result};
use crate::key::{PrivateKey, PublicKey};
use crate::primes::{probable_prime, probable_prime_sync, DEFAULT_MILLER_RABIN_ROUNDS};
use crate::util::l_function;
use crate::util::rand::rand_between;

/// Default modulus size in bits.
pub const DEFAULT_BIT_LENGTH: usize = 3072;

/// Smallest accepted modulus size. Far below any secure size; kept this
/// low so deterministic small-parameter tests remain possible.
const MIN_BIT_LENGTH: usize = 4;

/// Generator draws attempted before key generation gives up. A draw is
/// only rejected when L(g^lambda mod n^2) has no inverse, which a random
/// draw avoids with overwhelming probability.
const MAX_GENERATOR_ATTEMPTS: usize = 128;

/// A complete key pair.
///
/// The private key's embedded public key is the same value as `public`.
/// Secret material is zeroized when dropped.
#[allow(missing_debug_implementations)]
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct KeyPair {
    #[zeroize(skip)]
    public: PublicKey,
    secret: PrivateKey,
}

impl KeyPair {
    /// Generate a key pair with default parameters (3072-bit modulus,
    /// general variant).
    pub fn generate() -> Result<Self> {
        KeyPairBuilder::new().build()
    }

    /// As [`generate`](Self::generate), without spawning worker threads.
    pub fn generate_sync() -> Result<Self> {
        KeyPairBuilder::new().build_sync()
    }

    /// Generate a key pair with a custom modulus size.
    pub fn generate_with_size(bit_length: usize) -> Result<Self> {
        KeyPairBuilder::new().bit_length(bit_length).build()
    }

    /// Reconstruct a key pair from known primes (general variant).
    ///
    /// When `g` is omitted a generator is sampled, retrying on the rare
    /// degenerate draw; a supplied `g` that admits no `mu` fails with
    /// [`Error::NoInverse`]. Callers are trusted on the primality of `p`
    /// and `q`; only distinctness is enforced.
    pub fn from_primes(p: &BigUint, q: &BigUint, g: Option<BigUint>) -> Result<Self> {
        if p == q {
            return Err(Error::KeyGenerationFailed("primes must be distinct".into()));
        }
        let n = p * q;
        let nn = &n * &n;
        let (g, lambda, mu) = general_variant_params(p, q, &n, &nn, g)?;
        Self::assemble_parts(n, g, lambda, mu, p.clone(), q.clone())
    }

    /// Reconstruct a simple-variant key pair (g = n + 1) from known
    /// primes. Such keys support nonce recovery.
    pub fn from_primes_simple(p: &BigUint, q: &BigUint) -> Result<Self> {
        if p == q {
            return Err(Error::KeyGenerationFailed("primes must be distinct".into()));
        }
        let n = p * q;
        let (g, lambda, mu) = simple_variant_params(p, q, &n)?;
        Self::assemble_parts(n, g, lambda, mu, p.clone(), q.clone())
    }

    /// Return the public key.
    #[inline]
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// Return the private key.
    #[inline]
    pub fn private_key(&self) -> &PrivateKey {
        &self.secret
    }

    fn assemble_parts(
        n: BigUint,
        g: BigUint,
        lambda: BigUint,
        mu: BigUint,
        p: BigUint,
        q: BigUint,
    ) -> Result<Self> {
        let bit_length = n.bits();
        let public = PublicKey::new(n, g, bit_length)?;
        let secret = PrivateKey::new(public.clone(), lambda, mu, Some(p), Some(q))?;
        Ok(Self { public, secret })
    }
}

/// Builder for generating key pairs with configurable parameters.
#[derive(Debug)]
pub struct KeyPairBuilder {
    bit_length: usize,
    simple_variant: bool,
    rounds: usize,
}

impl KeyPairBuilder {
    /// Create a builder with default parameters.
    pub fn new() -> Self {
        Self {
            bit_length: DEFAULT_BIT_LENGTH,
            simple_variant: false,
            rounds: DEFAULT_MILLER_RABIN_ROUNDS,
        }
    }

    /// Set the desired modulus bit length.
    pub fn bit_length(mut self, bits: usize) -> Self {
        self.bit_length = bits;
        self
    }

    /// Use the g = n + 1 setup, which permits nonce recovery.
    pub fn simple_variant(mut self, simple: bool) -> Self {
        self.simple_variant = simple;
        self
    }

    /// Miller-Rabin iteration count used while searching for primes.
    pub fn miller_rabin_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    /// Generate the key pair.
    ///
    /// The two prime searches run concurrently, each racing candidates
    /// across the available cores.
    pub fn build(self) -> Result<KeyPair> {
        let rounds = self.rounds;
        self.assemble(move |p_bits, q_bits| {
            let (p, q) = rayon::join(
                || probable_prime(p_bits, rounds),
                || probable_prime(q_bits, rounds),
            );
            Ok((p?, q?))
        })
    }

    /// Generate the key pair entirely on the calling thread.
    pub fn build_sync(self) -> Result<KeyPair> {
        let rounds = self.rounds;
        self.assemble(move |p_bits, q_bits| {
            Ok((
                probable_prime_sync(p_bits, rounds)?,
                probable_prime_sync(q_bits, rounds)?,
            ))
        })
    }

    fn assemble(
        self,
        draw: impl Fn(usize, usize) -> Result<(BigUint, BigUint)>,
    ) -> Result<KeyPair> {
        if self.bit_length < MIN_BIT_LENGTH {
            return Err(Error::InvalidKeySize {
                min: MIN_BIT_LENGTH,
                actual: self.bit_length,
            });
        }

        // With |p| = floor(b/2) + 1 and |q| = floor(b/2) the product has
        // either b or b + 1 bits; redraw until it lands on b exactly.
        let p_bits = self.bit_length / 2 + 1;
        let q_bits = self.bit_length / 2;

        loop {
            let (p, q) = draw(p_bits, q_bits)?;
            if p == q {
                continue;
            }
            let n = &p * &q;
            if n.bits() != self.bit_length {
                continue;
            }
            let nn = &n * &n;

            let params = if self.simple_variant {
                simple_variant_params(&p, &q, &n)
            } else {
                general_variant_params(&p, &q, &n, &nn, None)
            };
            let (g, lambda, mu) = match params {
                Ok(parts) => parts,
                // lambda not invertible for this prime pair; draw another
                Err(Error::NoInverse) => continue,
                Err(e) => return Err(e),
            };

            let public = PublicKey::new(n, g, self.bit_length)?;
            let secret = PrivateKey::new(public.clone(), lambda, mu, Some(p), Some(q))?;
            return Ok(KeyPair { public, secret });
        }
    }
}

impl Default for KeyPairBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Derive (g, lambda, mu) for the simple variant: g = n + 1,
/// lambda = (p-1)(q-1), mu = lambda^-1 mod n.
fn simple_variant_params(
    p: &BigUint,
    q: &BigUint,
    n: &BigUint,
) -> Result<(BigUint, BigUint, BigUint)> {
    let one = BigUint::one();
    let g = n + &one;
    let lambda = (p - &one) * (q - &one);
    let mu = arith::mod_inv(&BigInt::from(lambda.clone()), &BigInt::from(n.clone()))?;
    Ok((g, lambda, mu))
}

/// Derive (g, lambda, mu) for the general variant:
/// lambda = lcm(p-1, q-1), mu = (L(g^lambda mod n^2))^-1 mod n.
///
/// Without a pinned `g`, a draw whose `mu` does not exist is resampled, up
/// to [`MAX_GENERATOR_ATTEMPTS`]; with one, the failure propagates.
fn general_variant_params(
    p: &BigUint,
    q: &BigUint,
    n: &BigUint,
    nn: &BigUint,
    pinned_g: Option<BigUint>,
) -> Result<(BigUint, BigUint, BigUint)> {
    let one = BigUint::one();
    let lambda = arith::magnitude(&arith::lcm(
        &BigInt::from(p - &one),
        &BigInt::from(q - &one),
    ));
    let n_int = BigInt::from(n.clone());
    let retry = pinned_g.is_none();

    let mut attempts = 0usize;
    loop {
        let g = match &pinned_g {
            Some(g) => g.clone(),
            None => sample_generator(n, nn)?,
        };

        let mu = if g.gcd(n).is_one() {
            let l = l_function(&g.modpow(&lambda, nn), n);
            arith::mod_inv(&BigInt::from(l), &n_int)
        } else {
            Err(Error::NoInverse)
        };

        match mu {
            Ok(mu) => return Ok((g, lambda, mu)),
            Err(Error::NoInverse) if retry => {
                attempts += 1;
                if attempts >= MAX_GENERATOR_ATTEMPTS {
                    return Err(Error::KeyGenerationFailed(
                        "no usable generator found".into(),
                    ));
                }
            }
            Err(e) => return Err(e),
        }
    }
}

/// Draw a generator candidate for the multiplicative group modulo `n^2`.
///
/// Samples alpha and beta uniformly from [1, n) and returns
/// (alpha * n + 1) * beta^n mod n^2. The first factor has order n; the
/// second lands in the subgroup of n-th powers, so the product's order is
/// a multiple of n with overwhelming probability.
pub(crate) fn sample_generator(n: &BigUint, nn: &BigUint) -> Result<BigUint> {
    let one = BigUint::one();
    let upper = n - &one;
    let alpha = rand_between(&one, &upper)?;
    let beta = rand_between(&one, &upper)?;
    Ok(((alpha * n + &one) * beta.modpow(n, nn)) % nn)
}

/// A value usable as a generator alongside two independently generated
/// moduli: drawn uniformly from [1, n1) until coprime to both `n1` and
/// `n2`.
pub fn dual_generator(n1: &BigUint, n2: &BigUint) -> Result<BigUint> {
    let one = BigUint::one();
    let upper = n1 - &one;
    loop {
        let r = rand_between(&one, &upper)?;
        if r.gcd(n1).is_one() && r.gcd(n2).is_one() {
            return Ok(r);
        }
    }
}

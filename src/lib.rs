// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Paillier Cryptosystem
//!
//! Probabilistic public-key encryption with additive homomorphism, based
//! on the decisional composite residuosity assumption over Z/n^2 Z.
//!
//! Reference: [Paillier (1999), EUROCRYPT](https://link.springer.com/chapter/10.1007/3-540-48910-X_16)
//!
//! Plaintexts and ciphertexts are plain `BigUint` values; a ciphertext of
//! `m` under the public key `(n, g)` is `g^m * r^n mod n^2` for a fresh
//! random nonce `r`. Multiplying two ciphertexts adds their plaintexts,
//! and raising a ciphertext to a scalar multiplies its plaintext. Keys
//! built with the simple-variant generator `g = n + 1` additionally allow
//! the holder of the private key to recover the nonce of any ciphertext.
//!
//! ## Security
//!
//! Key primes are certified by the FIPS 186-4 Miller-Rabin test, with all
//! entropy drawn from the platform CSPRNG. The private key (lambda, mu,
//! p, q) is automatically zeroized on drop via the `zeroize` crate.

pub mod arith;
pub mod primes;
pub mod util;

mod decrypt;
mod encrypt;
mod error;
mod key;
mod keypair;

pub use encrypt::multiply_mod;
pub use error::*;
pub use key::*;
pub use keypair::*;

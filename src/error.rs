// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Errors that can occur during cryptographic operations.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid key size: must be at least {min} bits, got {actual}")]
    InvalidKeySize { min: usize, actual: usize },

    #[error("Invalid byte length: {0}")]
    InvalidByteLength(usize),

    #[error("Invalid bit length: {0}")]
    InvalidBitLength(usize),

    #[error("Invalid sampling range: max must be greater than min")]
    EmptyRange,

    #[error("Modulus must be strictly positive")]
    NonPositiveModulus,

    #[error("Extended gcd requires strictly positive operands")]
    NonPositiveOperand,

    #[error("No modular inverse exists")]
    NoInverse,

    #[error("Invalid public key")]
    InvalidPublicKey,

    #[error("Invalid private key")]
    InvalidPrivateKey,

    #[error("Ciphertext is invalid or corrupted")]
    InvalidCiphertext,

    #[error("Homomorphic addition requires at least two ciphertexts")]
    TooFewCiphertexts,

    #[error("Operation requires a simple-variant key with g = n + 1")]
    NotSimpleVariant,

    #[error("Operation requires the private key's prime factors")]
    MissingPrimes,

    #[error("Key generation failed: {0}")]
    KeyGenerationFailed(String),
}

pub type Result<T> = std::result::Result<T, Error>;

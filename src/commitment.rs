//! # Commitment
//! Hash-based commitment to a [`Choice`], blinded by a [`Nonce`].

use crate::{
    choice::Choice,
    nonce::{Nonce, NONCE_DIGITS},
};
use num_bigint::BigUint;
use rand::Rng;
use sha2::{Digest, Sha256};
use std::{fmt, io::Write};

/// Length of the preimage of every commitment: one code digit plus the nonce digits.
pub const PREIMAGE_LEN: usize = 1 + NONCE_DIGITS;

/// Decimal digits of `code` immediately followed by the decimal digits of `nonce`.
pub fn preimage(code: u8, nonce: &BigUint) -> String {
    format!("{code}{nonce}")
}

/// SHA-256 over the UTF-8 bytes of [`preimage`].
pub fn commitment_digest(code: u8, nonce: &BigUint) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(preimage(code, nonce).as_bytes());
    hasher.finalize().into()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Commitment {
    choice: Choice,
    nonce: Nonce,
    digest: [u8; 32],
}

impl Commitment {
    pub fn new(choice: Choice, nonce: Nonce) -> Self {
        // codes are single digits and nonces have a fixed width, which keeps the
        // separator-free concatenation injective
        let code = choice.code();
        let preimage_len = preimage(code, nonce.value()).len();
        debug_assert_eq!(preimage_len, PREIMAGE_LEN);
        let digest = commitment_digest(code, nonce.value());
        tracing::debug!(code, preimage_len, "computed commitment");
        Commitment {
            choice,
            nonce,
            digest,
        }
    }

    /// Commits to `choice` with a fresh nonce drawn from `rng`.
    pub fn generate<R: Rng + ?Sized>(choice: Choice, rng: &mut R) -> Self {
        Self::new(choice, Nonce::sample(rng))
    }

    pub fn choice(&self) -> Choice {
        self.choice
    }

    pub fn code(&self) -> u8 {
        self.choice.code()
    }

    pub fn nonce(&self) -> &Nonce {
        &self.nonce
    }

    pub fn digest(&self) -> &[u8; 32] {
        &self.digest
    }

    /// The digest as `0x` followed by 64 lowercase hex characters.
    pub fn hash_hex(&self) -> String {
        format!("0x{}", hex::encode(self.digest))
    }

    /// Writes the six-line `Choice:`/`Num:`/`Hash:` report.
    pub fn write_report<W: Write + ?Sized>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "{self}")?;
        out.flush()
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Choice:\n{}\nNum:\n{}\nHash:\n{}",
            self.code(),
            self.nonce,
            self.hash_hex()
        )
    }
}

//! # Nonce
//! The 51-digit blinding value mixed into every commitment.

use crate::error::Error;
use lazy_static::lazy_static;
use num_bigint::{BigUint, RandBigInt};
use num_traits::Num;
use rand::Rng;
use std::{fmt, str::FromStr};

/// Number of decimal digits of every nonce.
pub const NONCE_DIGITS: usize = 51;

lazy_static! {
    /// Smallest valid nonce, 10^50.
    pub static ref NONCE_LOWER: BigUint = BigUint::from(10u8).pow(NONCE_DIGITS as u32 - 1);
    /// Exclusive upper bound, 10^51.
    pub static ref NONCE_UPPER: BigUint = BigUint::from(10u8).pow(NONCE_DIGITS as u32);
}

/// A value in `[10^50, 10^51)`. The range is enforced on construction, so the
/// decimal form is always [`NONCE_DIGITS`] long.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Nonce(BigUint);

impl Nonce {
    pub fn new(value: BigUint) -> Result<Self, Error> {
        if value < *NONCE_LOWER || value >= *NONCE_UPPER {
            return Err(Error::NonceOutOfRange);
        }
        Ok(Nonce(value))
    }

    /// Draws a nonce uniformly from `[10^50, 10^51)`.
    ///
    /// Hiding the committed choice relies entirely on `rng` being unpredictable,
    /// so callers outside of tests should pass a cryptographically secure generator.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Nonce(rng.gen_biguint_range(&NONCE_LOWER, &NONCE_UPPER))
    }

    pub fn value(&self) -> &BigUint {
        &self.0
    }
}

impl FromStr for Nonce {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::ParseNonce);
        }
        let value = BigUint::from_str_radix(s, 10).map_err(|_| Error::ParseNonce)?;
        Nonce::new(value)
    }
}

impl fmt::Display for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub mod choice;
pub mod commitment;
pub mod error;
pub mod nonce;

use crate::error::Error;
use choice::Choice;
use commitment::Commitment;
use nonce::Nonce;
use rand::Rng;
use std::io::Write;
use tracing::{span, Level};

/// Commits to `choice` (`r`, `p` or `s`) with a nonce drawn from `rng` and writes
/// the report to `out`.
///
/// The choice is validated before anything is written, so on error `out` is left
/// untouched.
pub fn generate_commitment<R, W>(
    choice: &str,
    rng: &mut R,
    out: &mut W,
) -> Result<Commitment, Error>
where
    R: Rng + ?Sized,
    W: Write + ?Sized,
{
    let _span = span!(Level::DEBUG, "generate_commitment").entered();
    let choice: Choice = choice.parse()?;

    let commitment = Commitment::generate(choice, rng);
    commitment.write_report(out)?;
    Ok(commitment)
}

/// Like [`generate_commitment`], but with a caller-supplied decimal nonce.
pub fn generate_commitment_with_nonce<W>(
    choice: &str,
    nonce: &str,
    out: &mut W,
) -> Result<Commitment, Error>
where
    W: Write + ?Sized,
{
    let _span = span!(Level::DEBUG, "generate_commitment_with_nonce").entered();
    let choice: Choice = choice.parse()?;
    let nonce: Nonce = nonce.parse()?;

    let commitment = Commitment::new(choice, nonce);
    commitment.write_report(out)?;
    Ok(commitment)
}

#[cfg(test)]
mod commitment_test {
    use super::*;
    use crate::nonce::{NONCE_LOWER, NONCE_UPPER};
    use rand::{rngs::StdRng, thread_rng, SeedableRng};

    #[test]
    fn known_codes() {
        let mut rng = thread_rng();
        for (symbol, code) in [("r", 1), ("p", 2), ("s", 3)] {
            let mut out = Vec::new();
            let com = generate_commitment(symbol, &mut rng, &mut out).unwrap();
            assert_eq!(com.code(), code);
            assert!(String::from_utf8(out)
                .unwrap()
                .starts_with(&format!("Choice:\n{code}\nNum:\n")));
        }
    }

    #[test]
    fn unknown_choice_writes_nothing() {
        let mut rng = thread_rng();
        for symbol in ["x", "", "R", "1", "q"] {
            let mut out = Vec::new();
            let result = generate_commitment(symbol, &mut rng, &mut out);
            assert!(matches!(result, Err(Error::UnrecognizedChoice(_))));
            assert!(out.is_empty());
        }
    }

    #[test]
    fn report_matches_commitment() {
        let mut rng = thread_rng();
        let mut out = Vec::new();
        let com = generate_commitment("s", &mut rng, &mut out).unwrap();
        assert!(*com.nonce().value() >= *NONCE_LOWER);
        assert!(*com.nonce().value() < *NONCE_UPPER);

        let report = String::from_utf8(out).unwrap();
        let nonce = com.nonce().to_string();
        let hash = com.hash_hex();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(
            lines,
            vec!["Choice:", "3", "Num:", nonce.as_str(), "Hash:", hash.as_str()]
        );
    }

    #[test]
    fn fresh_nonce_per_call() {
        let mut rng = thread_rng();
        let a = generate_commitment("r", &mut rng, &mut std::io::sink()).unwrap();
        let b = generate_commitment("r", &mut rng, &mut std::io::sink()).unwrap();
        assert_ne!(a.nonce(), b.nonce());
        assert_ne!(a.digest(), b.digest());
    }

    #[test]
    fn seeded_rng_reproducible() {
        let a = generate_commitment("p", &mut StdRng::seed_from_u64(7), &mut std::io::sink())
            .unwrap();
        let b = generate_commitment("p", &mut StdRng::seed_from_u64(7), &mut std::io::sink())
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn pinned_nonce() {
        let nonce = "123456789012345678901234567890123456789012345678901";
        let expected = "0x3dcf6fb3862debda8906a48d11e0251f870a91a0fa3a29c3546f2fe49f495956";

        let mut out = Vec::new();
        let com = generate_commitment_with_nonce("r", nonce, &mut out).unwrap();
        assert_eq!(com.hash_hex(), expected);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("Choice:\n1\nNum:\n{nonce}\nHash:\n{expected}\n")
        );
    }

    #[test]
    fn pinned_nonce_rejected() {
        let mut out = Vec::new();
        assert!(matches!(
            generate_commitment_with_nonce("q", "5", &mut out),
            Err(Error::UnrecognizedChoice(_))
        ));
        assert!(matches!(
            generate_commitment_with_nonce("r", "5", &mut out),
            Err(Error::NonceOutOfRange)
        ));
        assert!(matches!(
            generate_commitment_with_nonce("r", "0xa", &mut out),
            Err(Error::ParseNonce)
        ));
        assert!(out.is_empty());
    }
}

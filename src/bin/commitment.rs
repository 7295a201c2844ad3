// cargo run --release --bin commitment -- --choice <CHOICE> [--nonce <NONCE> | --seed <SEED>]
// e.g., cargo run --release --bin commitment -- --choice r

use clap::Parser;
use rand::{rngs::StdRng, thread_rng, SeedableRng};
use rps_commit::{
    commitment::Commitment, error::Error, generate_commitment, generate_commitment_with_nonce,
};
use std::io::Write;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// The choice: r (rock), p (paper) or s (scissors)
    #[arg(short, long)]
    choice: String,

    /// Use this 51-digit decimal nonce instead of drawing one
    #[arg(short, long)]
    nonce: Option<String>,

    /// Draw the nonce from a generator seeded with this value (reproducible, NOT secure)
    #[arg(short, long, conflicts_with = "nonce")]
    seed: Option<u64>,
}

fn run<W: Write>(args: &Args, out: &mut W) -> Result<Commitment, Error> {
    match (&args.nonce, args.seed) {
        (Some(nonce), _) => generate_commitment_with_nonce(&args.choice, nonce, out),
        (None, Some(seed)) => {
            tracing::warn!("nonce drawn from a seeded generator, the commitment is not hiding");
            generate_commitment(&args.choice, &mut StdRng::seed_from_u64(seed), out)
        }
        (None, None) => generate_commitment(&args.choice, &mut thread_rng(), out),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    if let Err(e) = run(&args, &mut std::io::stdout().lock()) {
        eprintln!("Failed to generate the commitment: {}", e);
        std::process::exit(1);
    }
}

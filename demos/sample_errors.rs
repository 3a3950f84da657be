//! Sampling a flood of errors down to a bounded, representative summary.
//!
//! A worker loop produces 10,000 error messages; the reservoir keeps 8 of
//! them, chosen uniformly across the whole run. Seeded here so the output
//! is stable; use `Reservoir::new` in real services.
//!
//! Run with: `cargo run --example sample_errors`

use errsample::Reservoir;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn main() {
    let errors = Reservoir::with_rng(8, ChaCha8Rng::seed_from_u64(42));

    for i in 0..10_000 {
        let err = match i % 3 {
            0 => format!("request {i}: connection refused"),
            1 => format!("request {i}: timeout after 5s"),
            _ => format!("request {i}: upstream returned 503"),
        };
        errors.add(err);
    }

    println!(
        "saw {} errors, kept {} (capacity {}):",
        errors.added(),
        errors.len(),
        errors.capacity()
    );
    for err in errors.sample(8) {
        println!("  {err}");
    }
}

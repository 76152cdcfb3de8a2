//! Generate a synthetic trace pair plus an absorption-line table in the
//! instrument text formats, for demos and manual testing.
//!
//! Usage: `cargo run --bin generate_sample [output_dir]`

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn gaussian(x: f64, mu: f64, sigma: f64, amplitude: f64) -> f64 {
    amplitude * (-(x - mu).powi(2) / (2.0 * sigma.powi(2))).exp()
}

/// One absorption feature: center frequency, width, depth.
const LINES: &[(f64, f64, f64)] = &[
    (18_150.0, 2.5, 0.8),
    (18_230.0, 1.8, 0.5),
    (18_310.0, 3.0, 1.1),
    (18_420.0, 2.2, 0.6),
];

const F_START: f64 = 18_100.0;
const F_STEP: f64 = 0.5;
const N_SAMPLES: usize = 800;
const BASELINE: f64 = 0.15;
const NOISE: f64 = 0.02;

fn trace(with_lines: bool, rng: &mut StdRng) -> String {
    let mut out = String::from("  N        FREQ/MHZ    INTEN     NOISE    GAMMA     FLAG\n");
    for i in 0..N_SAMPLES {
        let freq = F_START + i as f64 * F_STEP;
        let mut gamma = BASELINE + (rng.gen::<f64>() - 0.5) * 2.0 * NOISE;
        if with_lines {
            for &(mu, sigma, depth) in LINES {
                gamma += gaussian(freq, mu, sigma, depth);
            }
        }
        writeln!(out, "{i:>4}  {freq:>12.4}  {:>7.4}  {NOISE:>7.4}  {gamma:>8.5}  0", 1.0).unwrap();
    }
    out.push_str("* END OF RECORD\n");
    out
}

fn line_table() -> String {
    let mut out = String::from("FREQ\tGAMMA\tSRC\n");
    for &(mu, sigma, depth) in LINES {
        let gamma = BASELINE + gaussian(mu, mu, sigma, depth);
        writeln!(out, "{mu:.4}\t{gamma:.5}\ttrue").unwrap();
    }
    out
}

fn main() -> Result<()> {
    let dir = std::env::args().nth(1).unwrap_or_else(|| "sample_data".into());
    let dir = Path::new(&dir);
    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

    let mut rng = StdRng::seed_from_u64(42);

    std::fs::write(dir.join("with_substance.txt"), trace(true, &mut rng))?;
    std::fs::write(dir.join("without_substance.txt"), trace(false, &mut rng))?;
    std::fs::write(dir.join("absorption_lines.txt"), line_table())?;

    println!(
        "wrote with_substance.txt, without_substance.txt, absorption_lines.txt to {}",
        dir.display()
    );
    Ok(())
}

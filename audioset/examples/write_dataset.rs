//! Write a synthetic AudioSet record and read it back

use audioset::{constants::clip, AudioSetFile, DenseMatrix, Labels, Matrix, Waveform};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::Instant;

fn main() -> audioset::Result<()> {
    let nclips = 64;
    let nlabels = 527;
    let path = "example_dataset.dat.gz";

    println!(
        "Writing {nclips} clips x {} samples with {nlabels} classes...",
        clip::SAMPLES_PER_CLIP
    );

    let start = Instant::now();
    let (waveform, labels) = build_demo_dataset(nclips, nlabels)?;
    println!("Built dataset in {:?}", start.elapsed());

    let start = Instant::now();
    AudioSetFile::write(path, &waveform, &labels)?;
    println!("Wrote {path} in {:?}", start.elapsed());

    let start = Instant::now();
    let (decoded, decoded_labels) = AudioSetFile::read(path)?;
    println!("Read back in {:?}", start.elapsed());

    let max_error = waveform
        .as_slice()
        .iter()
        .zip(decoded.as_slice())
        .fold(0.0f32, |m, (a, b)| m.max((a - b).abs()));
    println!("Max sample error: {max_error:.6}");
    println!("Labels identical: {}", labels == decoded_labels);
    Ok(())
}

/// Sine tones of random pitch, two random classes per clip
fn build_demo_dataset(nclips: usize, nlabels: usize) -> audioset::Result<(Waveform, Labels)> {
    let mut rng = StdRng::seed_from_u64(7);
    let nsamples = clip::SAMPLES_PER_CLIP;
    let rate = clip::SAMPLE_RATE as f32;

    let mut samples = Vec::with_capacity(nclips * nsamples);
    let mut flags = vec![0i32; nclips * nlabels];

    for row in 0..nclips {
        let pitch: f32 = rng.gen_range(110.0..880.0);
        let gain: f32 = rng.gen_range(0.1..0.9);
        samples.extend(
            (0..nsamples).map(|t| gain * (std::f32::consts::TAU * pitch * t as f32 / rate).sin()),
        );

        for _ in 0..2 {
            flags[row * nlabels + rng.gen_range(0..nlabels)] = 1;
        }
    }

    Ok((
        Matrix::from_vec(nclips, nsamples, samples)?,
        Matrix::from_vec(nclips, nlabels, flags)?,
    ))
}

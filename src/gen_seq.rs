//! This module is to generate some random sequence to exercise the model.
//! Usually, it would not be used in the real-applications.
use rand::seq::SliceRandom;

/// A uniformly random DNA sequence of the given length.
pub fn generate_seq<T: rand::Rng>(rng: &mut T, len: usize) -> Vec<u8> {
    let bases = b"ACTG";
    (0..len)
        .filter_map(|_| bases.choose(rng))
        .copied()
        .collect()
}

/// A random DNA sequence with the given per-base weights (A, C, G, T order).
pub fn generate_skewed_seq<T: rand::Rng>(rng: &mut T, len: usize, weights: &[f64; 4]) -> Vec<u8> {
    let bases = b"ACGT";
    (0..len)
        .map(|_| {
            let pos = *[0usize, 1, 2, 3]
                .choose_weighted(rng, |&i| weights[i])
                .unwrap();
            bases[pos]
        })
        .collect()
}

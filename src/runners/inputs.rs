//! Generates benchmark-ready symbol sequences -- random, compositionally biased or
//! derived from a base sequence by small edits -- reproducibly, from an explicit seed.\
//! The default alphabet is DNA, but the solvers are alphabet-agnostic and so is [SequenceGenerator].

use rand::{rngs::StdRng, Rng, SeedableRng};


/// the DNA alphabet used by default
pub const DNA_BASES: [char; 4] = ['A', 'C', 'G', 'T'];


/// Seeded sequence factory -- two generators built with the same seed & alphabet produce
/// identical sequences in identical order
pub struct SequenceGenerator {
    rng:      StdRng,
    alphabet: Vec<char>,
}

impl SequenceGenerator {

    /// A generator over [DNA_BASES]
    pub fn new(seed: u64) -> Self {
        Self::with_alphabet(seed, &DNA_BASES)
    }

    /// A generator over a caller-supplied, non-empty alphabet
    pub fn with_alphabet(seed: u64, alphabet: &[char]) -> Self {
        assert!(!alphabet.is_empty(), "the alphabet must have at least one symbol");
        Self {
            rng:      StdRng::seed_from_u64(seed),
            alphabet: alphabet.to_vec(),
        }
    }

    /// A uniformly random sequence of `len` symbols
    pub fn random(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| self.alphabet[self.rng.gen_range(0..self.alphabet.len())])
            .collect()
    }

    /// A DNA sequence of `len` symbols where each position is G/C with probability
    /// `gc_bias` and A/T otherwise -- for compositional-bias cases (GC-rich vs AT-rich)
    pub fn biased_dna(&mut self, len: usize, gc_bias: f64) -> String {
        (0..len)
            .map(|_| if self.rng.gen_bool(gc_bias) {
                if self.rng.gen_bool(0.5) { 'G' } else { 'C' }
            } else {
                if self.rng.gen_bool(0.5) { 'A' } else { 'T' }
            })
            .collect()
    }

    /// A copy of `base` with `mutations` positions replaced by a *different* alphabet
    /// symbol -- point-mutation cases. Needs an alphabet of 2+ symbols and a base at least
    /// `mutations` long; positions are sampled without replacement.
    pub fn mutated(&mut self, base: &str, mutations: usize) -> String {
        let mut symbols: Vec<char> = base.chars().collect();
        assert!(self.alphabet.len() >= 2, "mutations need an alternative symbol to mutate into");
        assert!(mutations <= symbols.len(), "cannot mutate {mutations} positions of a {}-symbol sequence", symbols.len());
        let mut untouched: Vec<usize> = (0..symbols.len()).collect();
        for _ in 0..mutations {
            let pick = self.rng.gen_range(0..untouched.len());
            let position = untouched.swap_remove(pick);
            let old = symbols[position];
            loop {
                let replacement = self.alphabet[self.rng.gen_range(0..self.alphabet.len())];
                if replacement != old {
                    symbols[position] = replacement;
                    break;
                }
            }
        }
        symbols.into_iter().collect()
    }

    /// A copy of `base` with 1 to `max_deletion` trailing symbols removed -- indel cases
    pub fn deleted_suffix(&mut self, base: &str, max_deletion: usize) -> String {
        let symbols: Vec<char> = base.chars().collect();
        let deletions = self.rng.gen_range(1..=max_deletion.min(symbols.len()));
        symbols[..symbols.len() - deletions].iter().collect()
    }

}

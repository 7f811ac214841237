//! Password generation.
//!
//! A password is `length` independent, uniform draws (with replacement) from
//! the character pool built from [`GenerationOptions`]. There is no
//! guarantee that every selected class shows up in the output.

use std::fmt;

use rand::Rng;
use zeroize::Zeroizing;

use crate::error::GenerateError;
use crate::options::{GenerationOptions, MAX_LENGTH, MIN_LENGTH};

/// Source of uniform random indices.
///
/// Every [`rand::Rng`] is one, so callers can pass `OsRng`, a seeded
/// `StdRng`, or anything else without changing the algorithm.
pub trait IndexSource {
    /// Return an index uniformly distributed in `0..bound`. `bound` is never zero.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<R: Rng + ?Sized> IndexSource for R {
    fn next_index(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}

/// A freshly generated password. Wiped from memory on drop.
#[derive(Clone)]
pub struct GeneratedPassword(Zeroizing<String>);

impl GeneratedPassword {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Debug for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GeneratedPassword(<{} chars>)", self.len())
    }
}

/// Generate a password using the operating system RNG.
pub fn generate(options: &GenerationOptions) -> Result<GeneratedPassword, GenerateError> {
    generate_with(options, &mut rand::rngs::OsRng)
}

/// Generate a password drawing indices from `source`.
///
/// The length is checked before the pool, so an out-of-range length is
/// reported even when no class is selected.
pub fn generate_with<S: IndexSource + ?Sized>(
    options: &GenerationOptions,
    source: &mut S,
) -> Result<GeneratedPassword, GenerateError> {
    let length = options.length;
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        log::debug!("rejected generation: length {} out of range", length);
        return Err(GenerateError::InvalidLength(length));
    }

    let pool = options.pool();
    if pool.is_empty() {
        log::debug!("rejected generation: no character class selected");
        return Err(GenerateError::EmptyPool);
    }

    let chars = pool.as_slice();
    let mut out = Zeroizing::new(String::with_capacity(length as usize));
    for _ in 0..length {
        out.push(chars[source.next_index(chars.len())]);
    }

    log::debug!(
        "generated {}-character password from a pool of {}",
        length,
        chars.len()
    );
    Ok(GeneratedPassword(out))
}

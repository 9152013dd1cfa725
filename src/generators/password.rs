// src/generators/password.rs
use std::collections::HashSet;

use rand::{rngs::OsRng, seq::SliceRandom, Rng};
use thiserror::Error;

use crate::models::GenerationConfig;

pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";
pub const SYMBOLS: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

// Glyphs that are easy to misread: zero/oh, one/ell/eye.
pub const AMBIGUOUS: &[u8] = b"0O1lI";

// Per-position draw attempts before falling back to a deterministic pick.
const FILL_RETRIES: usize = 16;
// Full reshuffle attempts before switching to local repair.
const SHUFFLE_RETRIES: usize = 100;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("at least one character class must be selected")]
    NoClassSelected,

    #[error("length {length} is too short to seat {required} required character classes")]
    LengthTooShort { length: usize, required: usize },

    #[error("usable character pool has fewer than 2 distinct characters; cannot exclude consecutive repeats")]
    DegeneratePool,

    #[error("could not arrange password without consecutive repeats after retry limit")]
    RetryLimitExceeded,
}

impl GeneratorError {
    /// True for errors caused by the caller's configuration, as opposed to
    /// generation running out of retries.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, GeneratorError::RetryLimitExceeded)
    }
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Generate a password satisfying every constraint in `config`, using the
/// operating system CSPRNG.
///
/// One character per selected class is seated first, drawn from the full
/// class string. Ambiguous-glyph exclusion applies only to the shared fill
/// pool, so a seated character may still be an ambiguous glyph.
pub fn generate(config: &GenerationConfig) -> Result<String> {
    let classes = selected_classes(config);
    if classes.is_empty() {
        return Err(GeneratorError::NoClassSelected);
    }
    if config.length < classes.len() {
        return Err(GeneratorError::LengthTooShort {
            length: config.length,
            required: classes.len(),
        });
    }

    let mut rng = OsRng;

    // One required character per selected class, in class order, unfiltered.
    let mut chars: Vec<u8> = classes
        .iter()
        .map(|class| class[rng.gen_range(0..class.len())])
        .collect();

    // Class strings are disjoint, so concatenation is already duplicate-free.
    let mut pool: Vec<u8> = classes.concat();
    if config.exclude_ambiguous {
        pool.retain(|c| !AMBIGUOUS.contains(c));
    }

    if config.exclude_consecutive_repeats && distinct_count(&pool) < 2 {
        // Rejection sampling against a single-glyph pool never terminates.
        return Err(GeneratorError::DegeneratePool);
    }

    let mut prev: Option<u8> = None;
    for _ in classes.len()..config.length {
        let mut next = pool[rng.gen_range(0..pool.len())];
        if config.exclude_consecutive_repeats {
            let mut attempts = 0;
            while Some(next) == prev && attempts < FILL_RETRIES {
                next = pool[rng.gen_range(0..pool.len())];
                attempts += 1;
            }
            if Some(next) == prev {
                // Pool has >= 2 distinct glyphs, so a differing one exists.
                next = *pool
                    .iter()
                    .find(|&&c| Some(c) != prev)
                    .ok_or(GeneratorError::DegeneratePool)?;
            }
        }
        chars.push(next);
        prev = Some(next);
    }

    chars.shuffle(&mut rng);

    if config.exclude_consecutive_repeats {
        let mut attempts = 0;
        while has_adjacent_repeat(&chars) && attempts < SHUFFLE_RETRIES {
            chars.shuffle(&mut rng);
            attempts += 1;
        }
        if has_adjacent_repeat(&chars) && !break_adjacent_repeats(&mut chars) {
            return Err(GeneratorError::RetryLimitExceeded);
        }
    }

    Ok(chars.iter().map(|&c| c as char).collect())
}

fn selected_classes(config: &GenerationConfig) -> Vec<&'static [u8]> {
    let mut classes = Vec::with_capacity(4);
    if config.include_lowercase {
        classes.push(LOWERCASE);
    }
    if config.include_uppercase {
        classes.push(UPPERCASE);
    }
    if config.include_digits {
        classes.push(DIGITS);
    }
    if config.include_symbols {
        classes.push(SYMBOLS);
    }
    classes
}

fn distinct_count(pool: &[u8]) -> usize {
    pool.iter().collect::<HashSet<_>>().len()
}

fn has_adjacent_repeat(chars: &[u8]) -> bool {
    chars.windows(2).any(|pair| pair[0] == pair[1])
}

fn count_adjacent_repeats(chars: &[u8]) -> usize {
    chars.windows(2).filter(|pair| pair[0] == pair[1]).count()
}

/// Deterministic fallback once reshuffling has hit its retry cap: swap each
/// offending character with another position whenever that strictly reduces
/// the number of adjacent equal pairs. Returns false if no such swap exists,
/// meaning the multiset admits no repeat-free arrangement.
fn break_adjacent_repeats(chars: &mut [u8]) -> bool {
    loop {
        let before = count_adjacent_repeats(chars);
        if before == 0 {
            return true;
        }
        let offender = match chars.windows(2).position(|pair| pair[0] == pair[1]) {
            Some(i) => i + 1,
            None => return true,
        };
        let mut improved = false;
        for j in 0..chars.len() {
            if j == offender {
                continue;
            }
            chars.swap(offender, j);
            if count_adjacent_repeats(chars) < before {
                improved = true;
                break;
            }
            chars.swap(offender, j);
        }
        if !improved {
            return false;
        }
    }
}

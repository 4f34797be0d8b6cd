//! Opaque game seeds.
//!
//! A seed is backend-defined text sufficient to deterministically
//! reconstruct an initial puzzle state from a set of parameters. It is the
//! only value this engine ever treats as persistent.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use super::rng::SessionRng;

/// Number of digits in a randomly generated seed.
///
/// 15 digits comes to about 48 bits of entropy, which is plenty for
/// distinguishing puzzle instances.
pub const SEED_DIGITS: usize = 15;

/// Opaque text encoding of a puzzle instance.
///
/// The engine never interprets seed text; backends consume it to
/// reconstruct a state deterministically.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seed(String);

impl Seed {
    /// Wrap existing seed text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Generate a fresh random seed: [`SEED_DIGITS`] decimal digits.
    ///
    /// The leading digit is never zero, in case anything downstream
    /// processes the text as an integer rather than a string.
    #[must_use]
    pub fn random(rng: &mut SessionRng) -> Self {
        let mut text = String::with_capacity(SEED_DIGITS);
        text.push(char::from(b'1' + rng.gen_range_usize(0..9) as u8));
        for _ in 1..SEED_DIGITS {
            text.push(char::from(b'0' + rng.gen_range_usize(0..10) as u8));
        }
        Self(text)
    }

    /// The seed text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hash the seed text to a numeric seed for a [`SessionRng`].
    #[must_use]
    pub fn hash_u64(&self) -> u64 {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.0.hash(&mut hasher);
        hasher.finish()
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Seed {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Seed {
    fn from(text: String) -> Self {
        Self(text)
    }
}

//! Random string generator
//!
//! Stateless character sampling: letters always, digits and symbols
//! opt-in. Independent of the translation session.

use rand::Rng;
use serde::{Deserialize, Serialize};

const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const NUMBERS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 1000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorOptions {
    pub length: usize,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            length: 12,
            include_numbers: true,
            include_symbols: true,
        }
    }
}

pub fn generate(options: &GeneratorOptions) -> String {
    let mut charset = String::from(LETTERS);
    if options.include_numbers {
        charset.push_str(NUMBERS);
    }
    if options.include_symbols {
        charset.push_str(SYMBOLS);
    }

    let chars: Vec<char> = charset.chars().collect();
    let length = options.length.clamp(MIN_LENGTH, MAX_LENGTH);

    let mut rng = rand::thread_rng();
    (0..length).map(|_| chars[rng.gen_range(0..chars.len())]).collect()
}

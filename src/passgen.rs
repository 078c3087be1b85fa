//  ____  ____     __        __     ____
// |  _ \|  _ \ __ \ \      / /__  / ___| ___ _ __
// | |_) | |_) / _` \ \/\ / / _ \ | |  _ / _ \ '_ \
// |  _ <|  __/ (_| |\ V  V / (_) | |_| |  __/ | | |
// |_| \_\_|   \__,_| \_/\_/ \___/ \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-01
// Version : 0.1.0
// License : Mulan PSL v2
//
// Password generator

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::fmt;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const NUMBERS: &str = "0123456789";
const SPECIAL: &str = "!#@$%^&*~+_-=[]{}'";

// Password generation options. Lowercase letters are always included
// and are not a configurable flag.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PasswordOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_numbers: bool,
    pub include_special: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: 8,
            include_uppercase: true,
            include_numbers: false,
            include_special: false,
        }
    }
}

#[derive(Debug)]
pub enum PassGenError {
    InvalidConfig(String),
}

impl fmt::Display for PassGenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PassGenError::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for PassGenError {}

/// Build the combined character pool for the given options, in fixed
/// order: lowercase, uppercase, numbers, special characters.
/// Lowercase is unconditional, so the pool is never empty.
pub fn effective_pool(options: &PasswordOptions) -> Vec<char> {
    let mut char_pool = String::from(LOWERCASE);
    if options.include_uppercase {
        char_pool.push_str(UPPERCASE);
    }
    if options.include_numbers {
        char_pool.push_str(NUMBERS);
    }
    if options.include_special {
        char_pool.push_str(SPECIAL);
    }
    char_pool.chars().collect()
}

/// Generate a random password of `options.length` characters, each drawn
/// independently and uniformly from the effective pool. Draws are with
/// replacement: repeats are possible and no class is guaranteed to appear.
pub fn generate_password(options: &PasswordOptions) -> Result<String, PassGenError> {
    if options.length == 0 {
        return Err(PassGenError::InvalidConfig(
            "Password length must be a positive integer".to_string(),
        ));
    }

    let all_chars = effective_pool(options);

    let mut rng = OsRng::default();
    let mut password_chars = Vec::with_capacity(options.length);
    for _ in 0..options.length {
        password_chars.push(*all_chars.choose(&mut rng).unwrap());
    }

    Ok(password_chars.into_iter().collect())
}

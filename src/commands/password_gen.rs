use std::path::Path;

use crate::configtool;
use crate::passgen::{self, PasswordOptions};
use crate::setclip;

// Bounds for interactive length input; options files bypass them.
const MIN_LENGTH: usize = 6;
const MAX_LENGTH: usize = 100;

pub fn generate_random(
    length: usize,
    no_uppercase: bool,
    numbers: bool,
    special: bool,
    config: Option<String>,
    copy: bool,
    clear_after: u64,
) -> Result<(), String> {
    let options = match config {
        Some(path) => configtool::load_options(Path::new(&path))
            .map_err(|e| format!("Failed to load options file: {}", e))?,
        None => {
            if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
                return Err(format!(
                    "Password length must be between {} and {}",
                    MIN_LENGTH, MAX_LENGTH
                ));
            }
            PasswordOptions {
                length,
                include_uppercase: !no_uppercase,
                include_numbers: numbers,
                include_special: special,
            }
        }
    };

    let password = passgen::generate_password(&options)
        .map_err(|e| format!("Failed to generate password: {}", e))?;
    println!("Generated password: {}", password);

    if copy {
        setclip::copy_to_clipboard(&password, clear_after)
            .map_err(|e| format!("Failed to copy password to clipboard: {}", e))?;
        println!(
            "Password copied to clipboard, clears in {} seconds",
            clear_after
        );
    }

    Ok(())
}

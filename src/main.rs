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
// A random password generator written in Rust.

use clap::Parser;

use rpawogen::commands::password_gen;
use rpawogen::setclip;

#[derive(Debug, Parser)]
#[command(name = "rpawogen")]
#[command(about = "A random password generator written in Rust", long_about = None)]
enum Cli {
    /// Generate a new random password
    Gen(GenArgs),
}

#[derive(Debug, Parser)]
struct GenArgs {
    /// Length of the password (6-100)
    #[arg(short, long, default_value_t = 8)]
    length: usize,

    /// Exclude uppercase letters
    #[arg(long, default_value_t = false)]
    no_uppercase: bool,

    /// Include numbers
    #[arg(short = 'n', long, default_value_t = false)]
    numbers: bool,

    /// Include special characters
    #[arg(short = 's', long, default_value_t = false)]
    special: bool,

    /// Read generation options from a JSON file instead of the flags above
    #[arg(short, long)]
    config: Option<String>,

    /// Copy the generated password to the clipboard
    #[arg(long, default_value_t = false)]
    copy: bool,

    /// Seconds before a copied password is cleared from the clipboard
    #[arg(long, default_value_t = 30)]
    clear_after: u64,
}

fn main() -> Result<(), String> {
    // Daemon re-entry happens before argument parsing: the re-executed
    // binary carries no CLI arguments, only environment variables.
    if setclip::is_daemon() {
        return setclip::run_daemon().map_err(|e| e.to_string());
    }

    let cli = Cli::parse();

    match cli {
        Cli::Gen(args) => password_gen::generate_random(
            args.length,
            args.no_uppercase,
            args.numbers,
            args.special,
            args.config,
            args.copy,
            args.clear_after,
        ),
    }
}

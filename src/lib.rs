use std::error::Error;

use checksum_tool::{compute_xor_with, ByteOrder, FoldMode, Width, XorError};
use clap::Parser;

/// The usage line printed when not enough arguments are given
pub const USAGE: &str = "xor <file name> <block size>";

/// Enum that represents all possible commandline arguments
#[derive(Parser, Debug)]
#[command(name = "xor", version, override_usage = USAGE)]
pub struct Arguments {
    /// The file of which the XOR checksum is computed, taken as is even when it starts with a `-`
    #[arg(allow_hyphen_values = true)]
    pub file_path: String,
    /// The width of the words in bits, one of 8, 16, 32 or 64
    #[arg(value_parser = parse_width, allow_hyphen_values = true)]
    pub width: Width,
    /// The byte order used to build a word out of the bytes of the file
    #[arg(long, value_enum, default_value_t = ByteOrder::Native)]
    pub byte_order: ByteOrder,
    /// Only reduce the buffer left after the last read (legacy output, the XOR of the final partial block).
    /// 32 and 64 bit results are not truncated and sign-extended the way the C tool does.
    #[arg(long)]
    pub last_block_only: bool,
    /// Positional arguments after the width are ignored
    #[arg(hide = true)]
    pub ignored: Vec<String>,
}

pub fn print_usage() {
    println!("{}", USAGE);
}

/// Parses the width the same way C's `atoi` does: anything that is not a number becomes 0
pub fn parse_width(value: &str) -> Result<Width, XorError> {
    Width::try_from(atoi(value))
}

fn atoi(value: &str) -> i64 {
    let value = value.trim_start();
    let (negative, digits) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };

    let number = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0_i64, |acc, digit| acc.saturating_mul(10).saturating_add(i64::from(digit - b'0')));

    if negative { -number } else { number }
}

/// Formats a checksum as a lowercase hexadecimal number prefixed with `0x`
pub fn format_checksum(checksum: u64) -> String {
    format!("0x{:x}", checksum)
}

/// Computes the checksum requested by `args` and prints it to stdout
///
/// # Errors
///
/// Returns the error that occurred while opening or reading the file. Nothing besides the progress line is printed in that case.
pub fn run(args: Arguments) -> Result<(), Box<dyn Error>> {
    let Arguments { file_path, width, byte_order, last_block_only, .. } = args;
    let fold_mode = if last_block_only { FoldMode::LastBlock } else { FoldMode::Cumulative };

    println!("computing {} bit XOR for file '{}'", width, file_path);

    let checksum = compute_xor_with(&file_path, width, byte_order, fold_mode)?;
    println!("{}", format_checksum(checksum));

    Ok(())
}

pub mod width;
pub mod xor_error;

use std::fs::File;
use std::io::{self, Read};

pub use width::{ByteOrder, Width};
pub use xor_error::XorError;

/// Size of the block that is read from the input at once (1 MiB)
pub const BUFFER_SIZE: usize = 1_048_576;

/// Decides which blocks of the input end up in the checksum
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FoldMode {
    /// Every block that is read is XOR'ed into the result
    #[default]
    Cumulative,
    /// Only the buffer as it is after the last read attempt is reduced.
    /// A file whose length is a multiple of `BUFFER_SIZE` therefore yields 0, the same block the C `xor` tool reduces.
    /// Unlike that tool, 32 and 64 bit results are not truncated to a signed 32 bit value and sign-extended.
    LastBlock,
}

/// Computes the XOR checksum of a file, reading the words in native byte order and folding every block
///
/// # Arguments
/// * `file_name` - The path to the file
/// * `width` - The width of the words the file is split into
///
/// # Returns
///
/// Returns the XOR of all words, zero-extended to 64 bits
///
/// # Errors
///
/// Returns an `XorError` if the file could not be opened or read
pub fn compute_xor(file_name: &str, width: Width) -> Result<u64, XorError> {
    compute_xor_with(file_name, width, ByteOrder::Native, FoldMode::Cumulative)
}

/// Same as `compute_xor`, with an explicit byte order and fold mode
pub fn compute_xor_with(
    file_name: &str,
    width: Width,
    byte_order: ByteOrder,
    fold_mode: FoldMode,
) -> Result<u64, XorError> {
    let file = File::open(file_name).map_err(|source| XorError::Open {
        path: file_name.to_string(),
        source,
    })?;
    compute_xor_from_reader(file, file_name, width, byte_order, fold_mode)
}

/// Computes the XOR checksum over everything `reader` yields
///
/// # Arguments
/// * `reader` - The source of the bytes
/// * `name` - Name of the source, only used in error messages
/// * `width` - The width of the words the input is split into
/// * `byte_order` - How the bytes of a word are combined
/// * `fold_mode` - Which blocks are folded into the result
///
/// # Errors
///
/// Returns `XorError::Read` as soon as a read fails, the partial result is dropped
pub fn compute_xor_from_reader<R: Read>(
    mut reader: R,
    name: &str,
    width: Width,
    byte_order: ByteOrder,
    fold_mode: FoldMode,
) -> Result<u64, XorError> {
    let mut buffer = vec![0_u8; BUFFER_SIZE];
    let mut hash = 0_u64;

    loop {
        let count = read_block(&mut reader, &mut buffer).map_err(|source| XorError::Read {
            path: name.to_string(),
            source,
        })?;

        if fold_mode == FoldMode::Cumulative && count > 0 {
            // the tail after `count` is zeroed, so it does not change the XOR
            hash ^= xor_chunk(&buffer, width, byte_order);
        }

        // a short block means we reached the end of the input
        if count < BUFFER_SIZE {
            break;
        }
    }

    if fold_mode == FoldMode::LastBlock {
        hash = xor_chunk(&buffer, width, byte_order);
    }

    Ok(hash)
}

/// Zeroes `buffer` and fills it with as many bytes from `reader` as possible
///
/// Short reads and interrupts are retried, so the returned count is only smaller than the buffer at the end of the stream.
pub fn read_block<R: Read>(reader: &mut R, buffer: &mut [u8]) -> io::Result<usize> {
    buffer.fill(0);

    let mut total = 0;
    while total < buffer.len() {
        match reader.read(&mut buffer[total..]) {
            Ok(0) => break,
            Ok(n) => total += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(total)
}

/// XOR's all `width`-bit words of `data` together and zero-extends the result to 64 bits
///
/// Trailing bytes that do not form a complete word are ignored.
pub fn xor_chunk(data: &[u8], width: Width, byte_order: ByteOrder) -> u64 {
    match width {
        Width::W8 => u64::from(data.iter().fold(0_u8, |acc, byte| acc ^ byte)),
        Width::W16 => u64::from(
            data.chunks_exact(width.bytes())
                .map(|chunk| byte_order.u16_from(to_array(chunk)))
                .fold(0_u16, |acc, word| acc ^ word),
        ),
        Width::W32 => u64::from(
            data.chunks_exact(width.bytes())
                .map(|chunk| byte_order.u32_from(to_array(chunk)))
                .fold(0_u32, |acc, word| acc ^ word),
        ),
        Width::W64 => data
            .chunks_exact(width.bytes())
            .map(|chunk| byte_order.u64_from(to_array(chunk)))
            .fold(0_u64, |acc, word| acc ^ word),
    }
}

fn to_array<const N: usize>(chunk: &[u8]) -> [u8; N] {
    let mut bytes = [0_u8; N];
    bytes.copy_from_slice(chunk);
    bytes
}

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while turning a ROM file into a [`Cartridge`].
///
/// None of these are transient. A file that fails once will fail every time.
///
/// [`Cartridge`]: crate::rom::model::Cartridge
#[derive(Error, Debug)]
pub enum RomError {
    /// Bytes 0..4 are not `NES<EOF>`.
    #[error("illegal NES game rom format: missing NES<EOF> signature")]
    InvalidSignature,

    /// A read asked for more bytes than the buffer has left.
    #[error("truncated input: requested {requested} bytes, {remaining} remaining")]
    TruncatedInput { requested: usize, remaining: usize },

    /// NES 2.0 size MSB nibble of 0xF selects the exponent-multiplier form.
    #[error("exponent-multiplier size encoding is not supported ({region} memory)")]
    UnsupportedExponentEncoding { region: &'static str },

    #[error("unknown console type {0}")]
    UnknownConsoleType(u8),

    #[error("unsupported feature: {0}")]
    UnsupportedFeature(&'static str),

    #[error("no game rom file given")]
    NoInputFile,

    #[error("could not read {}: {source}", path.display())]
    FileReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

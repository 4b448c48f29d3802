//! Reading `.nes` cartridge images: the 16-byte iNES / NES 2.0 header and the PRG/CHR
//! regions that follow it.

pub mod cursor;
pub mod loader;
pub mod model;
pub mod reader;
pub mod writer;

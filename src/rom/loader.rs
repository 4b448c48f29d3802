use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::error::RomError;
use crate::rom::cursor::RomData;
use crate::rom::model::*;
use crate::rom::reader::{decode_header, HEADER_SIZE};
use tracing::{debug, info, warn};

/// Size of the PlayChoice-10 INST-ROM that may follow CHR ROM.
pub const INST_ROM_SIZE: usize = 8 * 1024;

/// Turns raw image bytes into a [`Cartridge`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Loader {
    config: Config,
}

impl Loader {
    pub fn new(config: Config) -> Loader {
        Loader { config }
    }

    /// Read the file at `path` and load it.
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<Cartridge, RomError> {
        let data = read_rom_file(path)?;
        self.load(&data)
    }

    /// Decode the header, then slice out PRG ROM, CHR ROM and (PlayChoice-10 only)
    /// INST-ROM in file order. `data` is left untouched.
    ///
    /// Region lengths are not checked against the file size up front; a region that runs
    /// off the end fails with [`RomError::TruncatedInput`].
    pub fn load(&self, data: &[u8]) -> Result<Cartridge, RomError> {
        debug!("rom file is {:#x} bytes", data.len());

        let mut rom = RomData::new(data).with_trace_reads(self.config.debug);
        let header = decode_header(rom.read(HEADER_SIZE)?)?;

        if header.has_trainer {
            warn!("trainer present, refusing to load");
            return Err(RomError::UnsupportedFeature("trainer region"));
        }

        let prg_rom = rom.read(header.prg_rom_size)?.to_vec();
        let chr_rom = rom.read(header.chr_rom_size)?.to_vec();

        let inst_rom = if header.console_type == ConsoleType::PlayChoice10
            && rom.remaining() >= INST_ROM_SIZE
        {
            rom.read(INST_ROM_SIZE)?.to_vec()
        } else {
            Vec::new()
        };

        info!(
            format = ?header.format_version,
            mapper = header.mapper,
            prg_rom = prg_rom.len(),
            chr_rom = chr_rom.len(),
            inst_rom = inst_rom.len(),
            "loaded cartridge"
        );

        Ok(Cartridge {
            header,
            trainer: Vec::new(),
            prg_rom,
            chr_rom,
            inst_rom,
        })
    }
}

/// Load with the default configuration.
pub fn load_cartridge(data: &[u8]) -> Result<Cartridge, RomError> {
    Loader::default().load(data)
}

/// Read a whole ROM file into memory.
pub fn read_rom_file<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, RomError> {
    let path = path.as_ref();
    fs::read(path).map_err(|source| RomError::FileReadError {
        path: path.to_path_buf(),
        source,
    })
}

use crate::rom::model::*;
use crate::rom::reader::{
    Flags6,
    Flags7,
    CHR_ROM_PAGE_SIZE,
    HEADER_SIZE,
    NES_SIGNATURE,
    PRG_RAM_PAGE_SIZE,
    PRG_ROM_PAGE_SIZE,
};

impl NESHeader {
    /// Encode back into the 16 raw header bytes.
    ///
    /// Any header produced by [`decode_header`](crate::rom::reader::decode_header) decodes
    /// from these bytes to an identical value. iNES sizes are truncated to whole pages.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut bytes = [0u8; HEADER_SIZE];
        bytes[..4].copy_from_slice(NES_SIGNATURE);

        let mut flags6 = Flags6::empty();
        flags6.set(Flags6::VERTICAL_MIRRORING, self.mirroring == MirroringMode::Vertical);
        flags6.set(Flags6::BATTERY_BACKED_RAM, self.has_battery);
        if self.has_trainer {
            flags6.insert(Flags6::TRAINER_EXISTS);
        }
        flags6.set(Flags6::FOUR_SCREEN_MIRRORING, self.has_four_screen_mode);

        let mut flags7 = Flags7::empty();

        match self.format_version {
            FormatVersion::INES => {
                bytes[4] = (self.prg_rom_size / PRG_ROM_PAGE_SIZE) as u8;
                bytes[5] = (self.chr_rom_size / CHR_ROM_PAGE_SIZE) as u8;
                flags6 |= Flags6::from_bits_truncate(self.mapper << 4);
                flags7 |= Flags7::from_bits_truncate(self.mapper & 0xF0);
                match self.console_type {
                    ConsoleType::VsSystem => flags7.insert(Flags7::VS_SYSTEM),
                    ConsoleType::PlayChoice10 => flags7.insert(Flags7::PLAYCHOICE_10),
                    ConsoleType::NES | ConsoleType::Extended => {}
                }
                bytes[8] = (self.prg_ram_size / PRG_RAM_PAGE_SIZE) as u8;
            }
            FormatVersion::NES2 => {
                bytes[4] = self.prg_rom_size as u8;
                bytes[5] = self.chr_rom_size as u8;
                flags7 |= Flags7::from_bits_truncate(2 << 2);
                flags7 |= Flags7::from_bits_truncate(match self.console_type {
                    ConsoleType::NES => 0,
                    ConsoleType::VsSystem => 1,
                    ConsoleType::PlayChoice10 => 2,
                    ConsoleType::Extended => 3,
                });
                let prg_rom_msb = ((self.prg_rom_size >> 8) & 0x0F) as u8;
                let chr_rom_msb = ((self.chr_rom_size >> 8) & 0x0F) as u8;
                bytes[9] = (chr_rom_msb << 4) | prg_rom_msb;
                bytes[10] = (self.prg_nvram_shift_count << 4) | (self.prg_ram_shift_count & 0x0F);
                bytes[11] = (self.chr_nvram_shift_count << 4) | (self.chr_ram_shift_count & 0x0F);
                bytes[12] = match self.cpu_timing_mode {
                    CPUTimingMode::RP2C02 => 0,
                    CPUTimingMode::RP2C07 => 1,
                    CPUTimingMode::MultipleRegion => 2,
                    CPUTimingMode::UMC6527P => 3,
                };
            }
        }

        bytes[6] = flags6.bits();
        bytes[7] = flags7.bits();
        bytes
    }
}

/// The decoded 16-byte header at the start of every `.nes` image.
///
/// Which fields are populated depends on `format_version`. Legacy-only fields stay zero for
/// NES 2.0 headers and vice versa; nothing is carried across branches.
///
/// Reference: https://wiki.nesdev.com/w/index.php/NES_2.0
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct NESHeader {
    // The size of PRG (Program) ROM, in bytes for iNES, as the raw 12-bit count for NES 2.0.
    pub prg_rom_size: usize,
    // The size of CHR (Character / pattern) ROM, same units as `prg_rom_size`.
    pub chr_rom_size: usize,
    // The nametable mirror mode.
    pub mirroring: MirroringMode,
    pub has_battery: bool,
    pub has_trainer: bool,
    pub has_four_screen_mode: bool,
    // The target hardware.
    pub console_type: ConsoleType,
    pub format_version: FormatVersion,

    // iNES only.
    pub mapper: u8,
    // The size of PRG (Program) RAM in bytes. iNES only.
    pub prg_ram_size: usize,

    // NES 2.0 only. Each shift count `n` describes a size of `64 << n` bytes (0 means none).
    pub prg_ram_shift_count: u8,
    pub prg_nvram_shift_count: u8,
    pub chr_ram_shift_count: u8,
    pub chr_nvram_shift_count: u8,
    pub cpu_timing_mode: CPUTimingMode,
}

/// Definition of possible nametable mirror modes.
///
/// Reference: https://wiki.nesdev.com/w/index.php/Mirroring#Nametable_Mirroring
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum MirroringMode {
    Horizontal,
    Vertical,
}

/// Definition of possible console types.
///
/// Reference: https://wiki.nesdev.com/w/index.php/NES_2.0#Console_Type
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum ConsoleType {
    NES,
    VsSystem,
    PlayChoice10,
    /// Only reachable through an NES 2.0 header.
    Extended,
}

/// Header flavour, taken from bits 2-3 of byte 7.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum FormatVersion {
    INES,
    NES2,
}

/// CPU/PPU timing declared by byte 12 of an NES 2.0 header.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum CPUTimingMode {
    /// NTSC NES.
    RP2C02,
    /// Licensed PAL NES.
    RP2C07,
    MultipleRegion,
    /// Dendy.
    UMC6527P,
}

/// A fully loaded image: the header plus every region sliced out of the file.
///
/// The regions are copies; the buffer they came from is left untouched.
#[derive(PartialEq, Debug, Clone)]
pub struct Cartridge {
    pub header: NESHeader,
    // 0 or 512 bytes. Always empty, trainers are rejected at load time.
    pub trainer: Vec<u8>,
    pub prg_rom: Vec<u8>,
    pub chr_rom: Vec<u8>,
    // 0 or 8192 bytes, PlayChoice-10 only.
    pub inst_rom: Vec<u8>,
}

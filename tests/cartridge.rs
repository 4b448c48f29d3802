use nesrom::config::Config;
use nesrom::error::RomError;
use nesrom::rom::loader::{load_cartridge, Loader};
use nesrom::rom::model::{ConsoleType, FormatVersion, MirroringMode};

use expectest::prelude::*;

const PRG: usize = 32768;
const CHR: usize = 8192;

/// `NES<EOF>`, 2 x 16 KiB PRG, 1 x 8 KiB CHR, no flags, followed by both regions.
fn nrom_image(flags6: u8) -> Vec<u8> {
    let mut data = vec![0x4E, 0x45, 0x53, 0x1A, 0x02, 0x01, flags6, 0x00, 0x00, 0x00];
    data.resize(16, 0x00);
    data.extend((0..PRG).map(|i| i as u8));
    data.extend((0..CHR).map(|i| !(i as u8)));
    data
}

#[test]
fn nrom_end_to_end() {
    let data = nrom_image(0x00);
    let cart = load_cartridge(&data).unwrap();

    expect!(cart.header.prg_rom_size).to(be_eq(32768));
    expect!(cart.header.chr_rom_size).to(be_eq(8192));
    expect!(cart.header.mirroring).to(be_eq(MirroringMode::Horizontal));
    expect!(cart.header.format_version).to(be_eq(FormatVersion::INES));
    expect!(cart.header.console_type).to(be_eq(ConsoleType::NES));

    // Exactly 32768 then 8192 bytes, starting right after the header.
    expect!(&cart.prg_rom[..]).to(be_eq(&data[16..16 + PRG]));
    expect!(&cart.chr_rom[..]).to(be_eq(&data[16 + PRG..16 + PRG + CHR]));
}

#[test]
fn vertical_mirroring_end_to_end() {
    let horizontal = load_cartridge(&nrom_image(0x00)).unwrap();
    let vertical = load_cartridge(&nrom_image(0x01)).unwrap();

    expect!(vertical.header.mirroring).to(be_eq(MirroringMode::Vertical));
    expect!(vertical.header.prg_rom_size).to(be_eq(horizontal.header.prg_rom_size));
    expect!(vertical.header.chr_rom_size).to(be_eq(horizontal.header.chr_rom_size));
    expect!(vertical.header.format_version).to(be_eq(horizontal.header.format_version));
    expect!(vertical.header.has_trainer).to(be_false());
    expect!(vertical.prg_rom).to(be_eq(horizontal.prg_rom));
    expect!(vertical.chr_rom).to(be_eq(horizontal.chr_rom));
}

#[test]
fn source_buffer_is_untouched() {
    let data = nrom_image(0x00);
    let copy = data.clone();
    Loader::new(Config::new(true)).load(&data).unwrap();

    expect!(data).to(be_eq(copy));
}

#[test]
fn bad_signature() {
    let mut data = nrom_image(0x00);
    data[3] = 0x1B;

    let err = load_cartridge(&data).unwrap_err();
    expect!(matches!(err, RomError::InvalidSignature)).to(be_true());
}

#[test]
fn header_only_partially_present() {
    let data = nrom_image(0x00);

    let err = load_cartridge(&data[..10]).unwrap_err();
    expect!(matches!(err, RomError::TruncatedInput { requested: 16, remaining: 10 })).to(be_true());
}

#[test]
fn chr_rom_cut_short() {
    let data = nrom_image(0x00);

    let err = load_cartridge(&data[..data.len() - 1]).unwrap_err();
    expect!(matches!(err, RomError::TruncatedInput { requested: 8192, remaining: 8191 })).to(be_true());
}

#[test]
fn trainer_is_rejected() {
    let err = load_cartridge(&nrom_image(0x03)).unwrap_err();

    expect!(matches!(err, RomError::UnsupportedFeature(_))).to(be_true());
    expect!(err.to_string()).to(be_eq("unsupported feature: trainer region".to_string()));
}

#[test]
fn nes2_sizes_are_raw_counts() {
    let mut data = vec![0x4E, 0x45, 0x53, 0x1A, 0x03, 0x02, 0x00, 0x08, 0x00, 0x00];
    data.resize(16, 0x00);
    data.extend(std::iter::repeat(0x11).take(3));
    data.extend(std::iter::repeat(0x22).take(2));

    let cart = load_cartridge(&data).unwrap();
    expect!(cart.header.format_version).to(be_eq(FormatVersion::NES2));
    expect!(cart.prg_rom).to(be_eq(vec![0x11, 0x11, 0x11]));
    expect!(cart.chr_rom).to(be_eq(vec![0x22, 0x22]));
}

#[test]
fn missing_rom_file() {
    let err = Loader::default().load_file("does/not/exist.nes").unwrap_err();

    expect!(matches!(err, RomError::FileReadError { .. })).to(be_true());
    expect!(err.to_string().starts_with("could not read does/not/exist.nes")).to(be_true());
}

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::FmtSubscriber;

use nesrom::config::Config;
use nesrom::error::RomError;
use nesrom::rom::loader::Loader;
use nesrom::rom::model::Cartridge;

/// Decode the header of an iNES / NES 2.0 ROM and slice out its regions.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the NES ROM file
    rom: Option<PathBuf>,

    /// Show debug messages
    #[arg(short, long)]
    debug: bool,
}

fn init_tracing(config: &Config) {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.max_level())
        .with_target(false)
        .with_file(config.show_source_location())
        .with_line_number(config.show_source_location())
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to install log subscriber: {err}");
    }
}

fn run(args: Args, config: Config) -> Result<Cartridge, RomError> {
    let path = args.rom.ok_or(RomError::NoInputFile)?;
    Loader::new(config).load_file(path)
}

fn main() {
    let args = Args::parse();
    let config = Config::new(args.debug);
    init_tracing(&config);

    match run(args, config) {
        Ok(cart) => {
            println!("{:#?}", cart.header);
            println!("trainer:  {} bytes", cart.trainer.len());
            println!("prg rom:  {} bytes", cart.prg_rom.len());
            println!("chr rom:  {} bytes", cart.chr_rom.len());
            println!("inst rom: {} bytes", cart.inst_rom.len());
        }
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    }
}

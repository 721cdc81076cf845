mod args;
mod runner;
mod verdict;

use nes_core::NES;
use std::{env, fs, process};

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let config = match args::parse(env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}\n\n{}", args::USAGE);
            process::exit(2);
        }
    };

    let image = match fs::read(&config.rom_path) {
        Ok(image) => image,
        Err(err) => {
            eprintln!("cannot read {}: {err}", config.rom_path.display());
            process::exit(2);
        }
    };
    let mut nes = match NES::from_rom_bytes(&image) {
        Ok(nes) => nes,
        Err(err) => {
            eprintln!("cannot load {}: {err}", config.rom_path.display());
            process::exit(2);
        }
    };
    log::info!("loaded {} ({:?})", config.rom_path.display(), config.budget);

    let summary = runner::run(&mut nes, config.budget, config.result_addr);
    if config.verbose {
        println!(
            "frames={} dots={} cpu_cycles={} status[${:04X}]=0x{:02X}",
            summary.frames, summary.dots, summary.cpu_cycles, config.result_addr, summary.status
        );
    }
    nes_core::trace_dump!();

    let verdict = summary.verdict();
    println!("{verdict}");
    process::exit(verdict.exit_code());
}

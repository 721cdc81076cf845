//! Builders for small synthetic cartridges and images

use crate::nes::NES;
use crate::nes::cartridge::{Cartridge, Mirroring, new_mapper};

pub const PRG_BANK_SIZE: usize = 0x4000;
pub const CHR_BANK_SIZE: usize = 0x2000;

/// Entry point for programs built by [`nrom_with_program`]
pub const PROGRAM_START: u16 = 0x8000;

/// 32 KiB of PRG with `program` at $8000 and the reset vector pointing at it
///
/// NMI and IRQ vectors default to `nmi` and `irq`, which may point anywhere in the image.
pub fn nrom_prg(program: &[u8], nmi: u16, irq: u16) -> Vec<u8> {
    let mut prg = vec![0xEA; PRG_BANK_SIZE * 2];
    prg[..program.len()].copy_from_slice(program);
    write_vector(&mut prg, 0xFFFA, nmi);
    write_vector(&mut prg, 0xFFFC, PROGRAM_START);
    write_vector(&mut prg, 0xFFFE, irq);
    prg
}

/// Reset console running `program` from $8000 on an NROM board with 8 KiB of CHR-RAM
pub fn nrom_with_program(program: &[u8]) -> NES {
    let prg = nrom_prg(program, PROGRAM_START, PROGRAM_START);
    nes_with_cartridge(Cartridge::new(prg, vec![], 0, Mirroring::Horizontal))
}

/// Reset console around `cartridge`
///
/// # Panics
///
/// If the cartridge names an unsupported mapper
pub fn nes_with_cartridge(cartridge: Cartridge) -> NES {
    let mapper = match new_mapper(cartridge) {
        Ok(mapper) => mapper,
        Err(err) => panic!("test cartridge rejected: {err}"),
    };
    let mut nes = NES::new(mapper);
    nes.reset();
    nes
}

/// Minimal iNES 1.0 image
pub fn ines_image(prg: &[u8], chr: &[u8], mapper: u8, flags6: u8) -> Vec<u8> {
    let mut raw = vec![0u8; 16];
    raw[0..4].copy_from_slice(b"NES\x1A");
    raw[4] = (prg.len() / PRG_BANK_SIZE) as u8;
    raw[5] = (chr.len() / CHR_BANK_SIZE) as u8;
    raw[6] = (mapper << 4) | (flags6 & 0x0F);
    raw[7] = mapper & 0xF0;
    raw.extend_from_slice(prg);
    raw.extend_from_slice(chr);
    raw
}

fn write_vector(prg: &mut [u8], addr: u16, target: u16) {
    let offset = (addr as usize - PROGRAM_START as usize) % prg.len();
    prg[offset] = target as u8;
    prg[offset + 1] = (target >> 8) as u8;
}

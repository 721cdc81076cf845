use log::debug;
use mapper000_nrom::NromCart;
use mapper001_mmc1::Mmc1;
use mapper002_ux_rom::Mapper002UxRom;
use mapper003_cn_rom::Mapper003CnRom;
use mapper004_mmc3::Mmc3;
use thiserror::Error;

pub mod mapper000_nrom;
pub mod mapper001_mmc1;
pub mod mapper002_ux_rom;
pub mod mapper003_cn_rom;
pub mod mapper004_mmc3;
pub mod rom;

pub const PRG_RAM_SIZE: usize = 0x2000;
pub const CHR_RAM_SIZE: usize = 0x2000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartridgeError {
    #[error("Unsupported Mapper: {0}")]
    UnsupportedMapper(u8),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mirroring {
    Vertical,
    Horizontal,
    FourScreen,
    Single0,
    Single1,
}

/// Raw cartridge contents, before a mapper has been picked for them
#[derive(Clone, Debug)]
pub struct Cartridge {
    pub prg_rom: Vec<u8>,
    pub chr_rom: Vec<u8>,
    pub mapper: u8,
    pub mirroring: Mirroring,
}

impl Cartridge {
    pub fn new(prg_rom: Vec<u8>, chr_rom: Vec<u8>, mapper: u8, mirroring: Mirroring) -> Self {
        Self {
            prg_rom,
            chr_rom,
            mapper,
            mirroring,
        }
    }
}

pub trait Mapper {
    /// CPU read ($8000–$FFFF)
    fn read_prg(&mut self, addr: u16) -> u8;

    /// CPU write ($8000–$FFFF), usually a bank register write
    fn write_prg(&mut self, addr: u16, value: u8);

    /// PPU read ($0000–$1FFF)
    fn read_chr(&mut self, addr: u16) -> u8;

    /// PPU write ($0000–$1FFF), ignored by boards whose pattern memory is read-only
    fn write_chr(&mut self, addr: u16, value: u8);

    /// Backing store of the $6000–$7FFF window
    fn prg_ram(&mut self) -> &mut [u8];

    /// CPU read of PRG-RAM ($6000–$7FFF)
    fn read_ram(&mut self, addr: u16) -> u8 {
        read_wrapped(self.prg_ram(), addr as usize)
    }

    /// CPU write of PRG-RAM ($6000–$7FFF)
    fn write_ram(&mut self, addr: u16, value: u8) {
        let ram = self.prg_ram();
        let index = wrap_index(ram, addr as usize);
        if let Some(byte) = ram.get_mut(index) {
            *byte = value;
        }
    }

    /// Nametable mirroring mode
    fn mirroring(&self) -> Mirroring;

    /// Scanline clock, driven by the PPU once per rendered line
    fn step(&mut self) {}

    /// Level of the cartridge IRQ line
    fn irq_pending(&self) -> bool {
        false
    }
}

/// Picks the mapper implementation for `cartridge.mapper`
pub fn new_mapper(cartridge: Cartridge) -> Result<Box<dyn Mapper>, CartridgeError> {
    let Cartridge {
        prg_rom,
        chr_rom,
        mapper,
        mirroring,
    } = cartridge;

    debug!(
        "mapper {} selected: PRG {} KiB, CHR {} KiB, {:?}",
        mapper,
        prg_rom.len() / 1024,
        chr_rom.len() / 1024,
        mirroring
    );

    match mapper {
        0 => Ok(Box::new(NromCart::new(prg_rom, chr_rom, mirroring))),
        1 => Ok(Box::new(Mmc1::new(prg_rom, chr_rom))),
        2 => Ok(Box::new(Mapper002UxRom::new(prg_rom, chr_rom, mirroring))),
        3 => Ok(Box::new(Mapper003CnRom::new(prg_rom, chr_rom, mirroring))),
        4 => Ok(Box::new(Mmc3::new(prg_rom, chr_rom, mirroring))),
        id => Err(CartridgeError::UnsupportedMapper(id)),
    }
}

/// Index into a bank-switched array, wrapping at its length
#[inline]
pub(crate) fn wrap_index(data: &[u8], offset: usize) -> usize {
    if data.is_empty() { 0 } else { offset % data.len() }
}

/// Reads from a possibly empty array, returning 0 when there is nothing to read
#[inline]
pub(crate) fn read_wrapped(data: &[u8], offset: usize) -> u8 {
    data.get(wrap_index(data, offset)).copied().unwrap_or(0)
}

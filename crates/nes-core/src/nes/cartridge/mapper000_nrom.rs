use super::{CHR_RAM_SIZE, Mapper, Mirroring, PRG_RAM_SIZE, read_wrapped, wrap_index};

// NROM (iNES mapper #0): no bank switching
#[derive(Debug)]
pub struct NromCart {
    pub chr: Vec<u8>,
    pub chr_is_ram: bool,
    pub prg_rom: Vec<u8>,
    pub prg_ram: Vec<u8>,
    pub mirroring: Mirroring,
}

impl NromCart {
    pub fn new(prg_rom: Vec<u8>, chr_rom: Vec<u8>, mirroring: Mirroring) -> NromCart {
        let chr_is_ram = chr_rom.is_empty();
        NromCart {
            prg_rom,
            prg_ram: vec![0; PRG_RAM_SIZE],
            chr: if chr_is_ram {
                vec![0u8; CHR_RAM_SIZE]
            } else {
                chr_rom
            },
            mirroring,
            chr_is_ram,
        }
    }
}

impl Mapper for NromCart {
    fn read_prg(&mut self, addr: u16) -> u8 {
        // NROM-128 mirrors its single 16 KiB bank into both halves
        read_wrapped(&self.prg_rom, (addr & 0x7FFF) as usize)
    }

    fn write_prg(&mut self, _addr: u16, _value: u8) {}

    fn read_chr(&mut self, addr: u16) -> u8 {
        read_wrapped(&self.chr, (addr & 0x1FFF) as usize)
    }

    fn write_chr(&mut self, addr: u16, value: u8) {
        if self.chr_is_ram {
            let index = wrap_index(&self.chr, (addr & 0x1FFF) as usize);
            self.chr[index] = value;
        }
    }

    fn prg_ram(&mut self) -> &mut [u8] {
        &mut self.prg_ram
    }

    fn mirroring(&self) -> Mirroring {
        self.mirroring
    }
}

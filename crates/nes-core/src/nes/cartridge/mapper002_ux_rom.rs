use super::{CHR_RAM_SIZE, Mapper, Mirroring, PRG_RAM_SIZE, read_wrapped, wrap_index};

const PRG_BANK_SIZE: usize = 0x4000;

// UxROM (iNES mapper #2): switchable 16 KiB bank at $8000, last bank fixed at $C000
#[derive(Debug)]
pub struct Mapper002UxRom {
    pub chr: Vec<u8>,
    pub prg_rom: Vec<u8>,
    pub prg_ram: Vec<u8>,
    pub mirroring: Mirroring,
    bank_select: usize,
}

impl Mapper002UxRom {
    pub fn new(prg_rom: Vec<u8>, chr_rom: Vec<u8>, mirroring: Mirroring) -> Mapper002UxRom {
        Mapper002UxRom {
            prg_rom,
            prg_ram: vec![0; PRG_RAM_SIZE],
            chr: if chr_rom.is_empty() {
                vec![0u8; CHR_RAM_SIZE]
            } else {
                chr_rom
            },
            mirroring,
            bank_select: 0,
        }
    }

    fn prg_bank_count(&self) -> usize {
        (self.prg_rom.len() / PRG_BANK_SIZE).max(1)
    }
}

impl Mapper for Mapper002UxRom {
    fn read_prg(&mut self, addr: u16) -> u8 {
        let bank_count = self.prg_bank_count();
        let bank = if addr < 0xC000 {
            // Switchable bank
            self.bank_select % bank_count
        } else {
            // Fixed bank
            bank_count - 1
        };
        read_wrapped(&self.prg_rom, bank * PRG_BANK_SIZE + (addr as usize & 0x3FFF))
    }

    fn write_prg(&mut self, _addr: u16, value: u8) {
        /*
           7  bit  0
           ---- ----
           xxxx pPPP
                ||||
                ++++- Select 16 KB PRG ROM bank for CPU $8000-$BFFF
                     (UNROM uses bits 2-0; UOROM uses bits 3-0)
        */
        self.bank_select = (value & 0x0F) as usize;
    }

    fn read_chr(&mut self, addr: u16) -> u8 {
        read_wrapped(&self.chr, (addr & 0x1FFF) as usize)
    }

    fn write_chr(&mut self, addr: u16, value: u8) {
        // The board wires its pattern memory as RAM even when the image ships CHR data
        let index = wrap_index(&self.chr, (addr & 0x1FFF) as usize);
        if let Some(byte) = self.chr.get_mut(index) {
            *byte = value;
        }
    }

    fn prg_ram(&mut self) -> &mut [u8] {
        &mut self.prg_ram
    }

    fn mirroring(&self) -> Mirroring {
        self.mirroring
    }
}

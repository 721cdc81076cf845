use super::{CHR_RAM_SIZE, Mapper, Mirroring, PRG_RAM_SIZE, read_wrapped, wrap_index};

const SHIFT_RESET: u8 = 0x10;

// MMC1 mapper (iNES mapper #1)
pub struct Mmc1 {
    prg_rom: Vec<u8>,
    chr: Vec<u8>,
    chr_is_ram: bool,
    prg_ram: Vec<u8>,

    // Serial shift register. The initial 1 marks how many bits are still missing
    shift_reg: u8,

    // Internal MMC1 registers
    control: u8,
    chr_bank0: u8,
    chr_bank1: u8,
    prg_bank: u8,
}

impl Mmc1 {
    pub fn new(prg_rom: Vec<u8>, chr_data: Vec<u8>) -> Self {
        let chr_is_ram = chr_data.is_empty();
        Mmc1 {
            prg_rom,
            chr: if chr_is_ram {
                vec![0; CHR_RAM_SIZE]
            } else {
                chr_data
            },
            chr_is_ram,
            prg_ram: vec![0; PRG_RAM_SIZE],
            shift_reg: SHIFT_RESET,
            control: 0x0C, // default: PRG mode=3, CHR mode=0, nametable=0
            chr_bank0: 0,
            chr_bank1: 0,
            prg_bank: 0,
        }
    }

    fn serial_write(&mut self, addr: u16, data: u8) {
        // Reset shift register if bit 7 set ($80-$FF)
        if data & 0x80 != 0 {
            self.shift_reg = SHIFT_RESET;
            self.control |= 0x0C; // PRG mode = 3
            return;
        }

        // The marker bit falls out on the fifth write
        let complete = self.shift_reg & 1 != 0;
        self.shift_reg = (self.shift_reg >> 1) | ((data & 1) << 4);

        if complete {
            let value = self.shift_reg & 0x1F;
            match (addr >> 13) & 0b11 {
                0 => self.control = value,
                1 => self.chr_bank0 = value,
                2 => self.chr_bank1 = value,
                _ => self.prg_bank = value & 0x1F,
            }
            self.shift_reg = SHIFT_RESET;
        }
    }

    fn prg_offset(&self, addr: u16) -> usize {
        let bank_count = (self.prg_rom.len() / 0x4000).max(1);
        let last_bank = bank_count - 1;
        let selected = (self.prg_bank & 0x0F) as usize;
        let addr = addr as usize;

        match (self.control >> 2) & 0b11 {
            // 32 KiB mode, low bit of the bank number ignored
            0 | 1 => (selected & 0x0E) * 0x4000 + (addr & 0x7FFF),
            // First bank fixed at $8000
            2 => {
                if addr < 0xC000 {
                    addr & 0x3FFF
                } else {
                    selected * 0x4000 + (addr & 0x3FFF)
                }
            }
            // Last bank fixed at $C000
            _ => {
                if addr < 0xC000 {
                    selected * 0x4000 + (addr & 0x3FFF)
                } else {
                    last_bank * 0x4000 + (addr & 0x3FFF)
                }
            }
        }
    }

    fn chr_offset(&self, addr: u16) -> usize {
        let addr = (addr & 0x1FFF) as usize;
        let mode_4k = self.control & 0x10 != 0;
        if mode_4k {
            let bank = if addr < 0x1000 {
                self.chr_bank0
            } else {
                self.chr_bank1
            } as usize;
            bank * 0x1000 + (addr & 0x0FFF)
        } else {
            (self.chr_bank0 & 0x1E) as usize * 0x1000 + addr
        }
    }

    fn prg_ram_enabled(&self) -> bool {
        self.prg_bank & 0x10 == 0
    }
}

impl Mapper for Mmc1 {
    fn read_prg(&mut self, addr: u16) -> u8 {
        read_wrapped(&self.prg_rom, self.prg_offset(addr))
    }

    fn write_prg(&mut self, addr: u16, value: u8) {
        self.serial_write(addr, value);
    }

    fn read_chr(&mut self, addr: u16) -> u8 {
        read_wrapped(&self.chr, self.chr_offset(addr))
    }

    fn write_chr(&mut self, addr: u16, value: u8) {
        if self.chr_is_ram {
            let index = wrap_index(&self.chr, self.chr_offset(addr));
            self.chr[index] = value;
        }
    }

    fn prg_ram(&mut self) -> &mut [u8] {
        &mut self.prg_ram
    }

    fn read_ram(&mut self, addr: u16) -> u8 {
        if self.prg_ram_enabled() {
            read_wrapped(&self.prg_ram, addr as usize)
        } else {
            0
        }
    }

    fn write_ram(&mut self, addr: u16, value: u8) {
        if self.prg_ram_enabled() {
            let index = wrap_index(&self.prg_ram, addr as usize);
            self.prg_ram[index] = value;
        }
    }

    fn mirroring(&self) -> Mirroring {
        match self.control & 0x03 {
            0 => Mirroring::Single0,
            1 => Mirroring::Single1,
            2 => Mirroring::Vertical,
            _ => Mirroring::Horizontal,
        }
    }
}

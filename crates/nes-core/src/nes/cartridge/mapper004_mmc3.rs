use super::{CHR_RAM_SIZE, Mapper, Mirroring, PRG_RAM_SIZE, read_wrapped, wrap_index};

const PRG_BANK_SIZE: usize = 0x2000;
const CHR_BANK_SIZE: usize = 0x0400;

// MMC3 (iNES mapper #4): 8 KiB PRG windows, 1 KiB CHR windows, scanline IRQ counter
pub struct Mmc3 {
    prg_rom: Vec<u8>,
    prg_ram: Vec<u8>,
    chr: Vec<u8>,
    chr_is_ram: bool,

    prg_banks: usize,
    chr_banks: usize,

    bank_select: u8,
    bank_registers: [u8; 8],

    prg_mode: bool,
    chr_mode: bool,

    irq_latch: u8,
    irq_counter: u8,
    irq_reload: bool,
    irq_enabled: bool,
    irq_flag: bool,

    mirroring: Mirroring,
}

impl Mmc3 {
    pub fn new(prg_rom: Vec<u8>, chr_rom: Vec<u8>, mirroring: Mirroring) -> Self {
        let chr_is_ram = chr_rom.is_empty();
        let chr = if chr_is_ram {
            vec![0; CHR_RAM_SIZE]
        } else {
            chr_rom
        };
        let prg_banks = (prg_rom.len() / PRG_BANK_SIZE).max(1);
        let chr_banks = (chr.len() / CHR_BANK_SIZE).max(1);

        Self {
            prg_rom,
            prg_ram: vec![0; PRG_RAM_SIZE],
            chr,
            chr_is_ram,
            prg_banks,
            chr_banks,
            bank_select: 0,
            bank_registers: [0, 2, 4, 5, 6, 7, 0, 1],
            prg_mode: false,
            chr_mode: false,
            irq_latch: 0,
            irq_counter: 0,
            irq_reload: false,
            irq_enabled: false,
            irq_flag: false,
            mirroring,
        }
    }

    fn prg_offset(&self, addr: u16) -> usize {
        let window = ((addr & 0x7FFF) / 0x2000) as usize;
        let second_last = self.prg_banks.saturating_sub(2);
        let last = self.prg_banks - 1;
        let r6 = self.bank_registers[6] as usize;
        let r7 = self.bank_registers[7] as usize;

        let bank = match (self.prg_mode, window) {
            (false, 0) => r6,
            (true, 0) => second_last,
            (_, 1) => r7,
            (false, 2) => second_last,
            (true, 2) => r6,
            _ => last,
        };
        (bank % self.prg_banks) * PRG_BANK_SIZE + (addr as usize & 0x1FFF)
    }

    fn chr_offset(&self, addr: u16) -> usize {
        let addr = (addr & 0x1FFF) as usize;
        let r = &self.bank_registers;
        // Layout in 1 KiB windows, R0/R1 select 2 KiB pairs
        let layout = [
            r[0] & 0xFE,
            r[0] | 0x01,
            r[1] & 0xFE,
            r[1] | 0x01,
            r[2],
            r[3],
            r[4],
            r[5],
        ];
        let mut window = addr / CHR_BANK_SIZE;
        if self.chr_mode {
            window ^= 0b100;
        }
        let bank = layout[window] as usize % self.chr_banks;
        bank * CHR_BANK_SIZE + (addr % CHR_BANK_SIZE)
    }
}

impl Mapper for Mmc3 {
    fn read_prg(&mut self, addr: u16) -> u8 {
        read_wrapped(&self.prg_rom, self.prg_offset(addr))
    }

    fn write_prg(&mut self, addr: u16, value: u8) {
        let even = addr & 1 == 0;
        match addr {
            0x8000..=0x9FFF => {
                if even {
                    self.bank_select = value & 0x07;
                    self.prg_mode = value & 0x40 != 0;
                    self.chr_mode = value & 0x80 != 0;
                } else {
                    self.bank_registers[self.bank_select as usize] = value;
                }
            }
            0xA000..=0xBFFF => {
                // Odd writes are PRG-RAM protect, not emulated
                if even && self.mirroring != Mirroring::FourScreen {
                    self.mirroring = if value & 1 == 0 {
                        Mirroring::Vertical
                    } else {
                        Mirroring::Horizontal
                    };
                }
            }
            0xC000..=0xDFFF => {
                if even {
                    self.irq_latch = value;
                } else {
                    self.irq_reload = true;
                }
            }
            0xE000..=0xFFFF => {
                if even {
                    self.irq_enabled = false;
                    self.irq_flag = false;
                } else {
                    self.irq_enabled = true;
                }
            }
            _ => {}
        }
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

    fn mirroring(&self) -> Mirroring {
        self.mirroring
    }

    fn step(&mut self) {
        if self.irq_counter == 0 || self.irq_reload {
            self.irq_counter = self.irq_latch;
            self.irq_reload = false;
        } else {
            self.irq_counter -= 1;
        }

        if self.irq_counter == 0 && self.irq_enabled {
            self.irq_flag = true;
        }
    }

    fn irq_pending(&self) -> bool {
        self.irq_flag
    }
}

use super::{CHR_RAM_SIZE, Mapper, Mirroring, PRG_RAM_SIZE, read_wrapped, wrap_index};

const CHR_BANK_SIZE: usize = 0x2000;

// CNROM (iNES mapper #3): fixed PRG, switchable 8 KiB CHR bank
#[derive(Debug)]
pub struct Mapper003CnRom {
    pub prg_rom: Vec<u8>,
    pub prg_ram: Vec<u8>,
    pub chr: Vec<u8>,
    pub chr_is_ram: bool,
    pub mirroring: Mirroring,
    chr_bank: usize,
}

impl Mapper003CnRom {
    pub fn new(prg_rom: Vec<u8>, chr_rom: Vec<u8>, mirroring: Mirroring) -> Mapper003CnRom {
        let chr_is_ram = chr_rom.is_empty();
        Mapper003CnRom {
            prg_rom,
            prg_ram: vec![0; PRG_RAM_SIZE],
            chr: if chr_is_ram {
                vec![0u8; CHR_RAM_SIZE]
            } else {
                chr_rom
            },
            chr_is_ram,
            mirroring,
            chr_bank: 0,
        }
    }

    fn chr_offset(&self, addr: u16) -> usize {
        self.chr_bank * CHR_BANK_SIZE + (addr & 0x1FFF) as usize
    }
}

impl Mapper for Mapper003CnRom {
    fn read_prg(&mut self, addr: u16) -> u8 {
        read_wrapped(&self.prg_rom, (addr & 0x7FFF) as usize)
    }

    fn write_prg(&mut self, _addr: u16, value: u8) {
        self.chr_bank = (value & 0b11) as usize;
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chr_bank_select() {
        let chr: Vec<u8> = (0..4 * CHR_BANK_SIZE)
            .map(|i| (i / CHR_BANK_SIZE) as u8)
            .collect();
        let mut cart = Mapper003CnRom::new(vec![0; 0x8000], chr, Mirroring::Vertical);
        assert_eq!(cart.read_chr(0x0000), 0);

        cart.write_prg(0x8000, 0x02);
        assert_eq!(cart.read_chr(0x0000), 2);
        assert_eq!(cart.read_chr(0x1FFF), 2);

        // Only the low two bits are used
        cart.write_prg(0x8000, 0xFF);
        assert_eq!(cart.read_chr(0x0100), 3);
    }

    #[test]
    fn test_chr_bank_wraps_on_small_image() {
        let chr: Vec<u8> = (0..2 * CHR_BANK_SIZE)
            .map(|i| (i / CHR_BANK_SIZE) as u8)
            .collect();
        let mut cart = Mapper003CnRom::new(vec![0; 0x8000], chr, Mirroring::Vertical);
        cart.write_prg(0x8000, 0x03);
        assert_eq!(cart.read_chr(0x0000), 1);
    }

    #[test]
    fn test_16k_prg_mirrored() {
        let prg: Vec<u8> = (0..0x4000).map(|i| (i % 13) as u8).collect();
        let mut cart = Mapper003CnRom::new(prg, vec![0; 0x2000], Mirroring::Horizontal);
        assert_eq!(cart.read_prg(0x8123), cart.read_prg(0xC123));
    }
}

use super::{Cartridge, CartridgeError, Mapper, Mirroring, new_mapper};
use thiserror::Error;

const NES_MAGIC_BYTES: &[u8; 4] = b"NES\x1A";
const HEADER_SIZE: usize = 16;
const TRAINER_SIZE: usize = 512;
const TRAINER_RAM_ADDR: u16 = 0x7000;
const PRG_ROM_PAGE_SIZE: usize = 0x4000;
const CHR_ROM_PAGE_SIZE: usize = 0x2000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RomError {
    #[error("{0}")]
    InvalidFormat(String),

    #[error("Unsupported ROM version: v{0}")]
    UnsupportedVersion(u8),
}

/// A parsed iNES 1.0 image
pub struct Rom {
    pub cartridge: Cartridge,
    pub trainer: Option<Vec<u8>>,
}

impl Rom {
    pub fn parse(raw: &[u8]) -> Result<Rom, RomError> {
        // Check NES magic bytes
        if raw.len() < HEADER_SIZE || &raw[0..4] != NES_MAGIC_BYTES {
            return Err(RomError::InvalidFormat("Not an iNES file".into()));
        }

        // Extract mapper information
        let mapper = (raw[7] & 0b1111_0000) | (raw[6] >> 4);

        // iNES 2.0 is flagged by bits 2-3 of byte 7 being 0b10
        let ines_ver = (raw[7] >> 2) & 0b11;
        if ines_ver == 0b10 {
            return Err(RomError::UnsupportedVersion(2));
        }

        // Determine mirroring type
        let four_screen = raw[6] & 0b1000 != 0;
        let vertical_mirroring = raw[6] & 0b1 != 0;
        let mirroring = match (four_screen, vertical_mirroring) {
            (true, _) => Mirroring::FourScreen,
            (false, true) => Mirroring::Vertical,
            (false, false) => Mirroring::Horizontal,
        };

        let prg_rom_size = raw[4] as usize * PRG_ROM_PAGE_SIZE;
        let chr_rom_size = raw[5] as usize * CHR_ROM_PAGE_SIZE;
        if prg_rom_size == 0 {
            return Err(RomError::InvalidFormat("Image declares no PRG-ROM".into()));
        }

        let has_trainer = raw[6] & 0b100 != 0;
        let trainer_start = HEADER_SIZE;
        let prg_rom_start = trainer_start + if has_trainer { TRAINER_SIZE } else { 0 };
        let chr_rom_start = prg_rom_start + prg_rom_size;
        let end = chr_rom_start + chr_rom_size;

        if raw.len() < end {
            return Err(RomError::InvalidFormat(format!(
                "Truncated image: expected {} bytes, got {}",
                end,
                raw.len()
            )));
        }

        let trainer = has_trainer.then(|| raw[trainer_start..prg_rom_start].to_vec());

        Ok(Rom {
            cartridge: Cartridge::new(
                raw[prg_rom_start..chr_rom_start].to_vec(),
                raw[chr_rom_start..end].to_vec(),
                mapper,
                mirroring,
            ),
            trainer,
        })
    }

    /// Builds the mapper for this image, preloading the trainer into PRG-RAM at $7000
    pub fn into_mapper(self) -> Result<Box<dyn Mapper>, CartridgeError> {
        let mut mapper = new_mapper(self.cartridge)?;
        if let Some(trainer) = self.trainer {
            for (i, byte) in trainer.into_iter().enumerate() {
                mapper.write_ram(TRAINER_RAM_ADDR + i as u16, byte);
            }
        }
        Ok(mapper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ines_image(prg_pages: u8, chr_pages: u8, flags6: u8, flags7: u8) -> Vec<u8> {
        let mut raw = vec![0u8; HEADER_SIZE];
        raw[0..4].copy_from_slice(NES_MAGIC_BYTES);
        raw[4] = prg_pages;
        raw[5] = chr_pages;
        raw[6] = flags6;
        raw[7] = flags7;
        if flags6 & 0b100 != 0 {
            raw.extend(std::iter::repeat_n(0xEE, TRAINER_SIZE));
        }
        raw.extend(std::iter::repeat_n(0xAA, prg_pages as usize * PRG_ROM_PAGE_SIZE));
        raw.extend(std::iter::repeat_n(0xBB, chr_pages as usize * CHR_ROM_PAGE_SIZE));
        raw
    }

    #[test]
    fn test_parse_header_fields() {
        let raw = ines_image(2, 1, 0b0100_0001, 0b0000_0000);
        let rom = Rom::parse(&raw).unwrap();
        assert_eq!(rom.cartridge.prg_rom.len(), 0x8000);
        assert_eq!(rom.cartridge.chr_rom.len(), 0x2000);
        assert_eq!(rom.cartridge.mapper, 4);
        assert_eq!(rom.cartridge.mirroring, Mirroring::Vertical);
        assert!(rom.trainer.is_none());
        assert_eq!(rom.cartridge.prg_rom[0], 0xAA);
        assert_eq!(rom.cartridge.chr_rom[0], 0xBB);
    }

    #[test]
    fn test_parse_mapper_high_nibble_and_four_screen() {
        let raw = ines_image(1, 0, 0b0001_1000, 0b0000_0000);
        let rom = Rom::parse(&raw).unwrap();
        assert_eq!(rom.cartridge.mapper, 1);
        assert_eq!(rom.cartridge.mirroring, Mirroring::FourScreen);
        assert!(rom.cartridge.chr_rom.is_empty());
    }

    #[test]
    fn test_trainer_is_skipped_and_loaded_into_prg_ram() {
        let raw = ines_image(1, 1, 0b0000_0100, 0);
        let rom = Rom::parse(&raw).unwrap();
        assert_eq!(rom.trainer.as_ref().map(|t| t.len()), Some(TRAINER_SIZE));
        assert_eq!(rom.cartridge.prg_rom[0], 0xAA);

        let mut mapper = rom.into_mapper().unwrap();
        assert_eq!(mapper.read_ram(0x7000), 0xEE);
        assert_eq!(mapper.read_ram(0x71FF), 0xEE);
        assert_eq!(mapper.read_ram(0x6FFF), 0x00);
    }

    #[test]
    fn test_rejects_bad_magic() {
        let mut raw = ines_image(1, 1, 0, 0);
        raw[3] = 0;
        assert!(matches!(Rom::parse(&raw), Err(RomError::InvalidFormat(_))));
    }

    #[test]
    fn test_rejects_truncated_image() {
        let mut raw = ines_image(2, 1, 0, 0);
        raw.truncate(raw.len() - 1);
        assert!(matches!(Rom::parse(&raw), Err(RomError::InvalidFormat(_))));
        assert!(matches!(Rom::parse(&raw[..8]), Err(RomError::InvalidFormat(_))));
    }

    #[test]
    fn test_rejects_nes2_header() {
        let raw = ines_image(1, 1, 0, 0b0000_1000);
        assert_eq!(Rom::parse(&raw).err(), Some(RomError::UnsupportedVersion(2)));
    }

    #[test]
    fn test_unsupported_mapper_fails_at_construction() {
        let raw = ines_image(1, 1, 0b0101_0000, 0);
        let rom = Rom::parse(&raw).unwrap();
        assert_eq!(
            rom.into_mapper().err(),
            Some(CartridgeError::UnsupportedMapper(5))
        );
    }
}

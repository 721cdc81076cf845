use super::PPU;
use crate::nes::cartridge::Mapper;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct SpritePixel {
    pub palette: u8,
    pub pixel: u8,
    /// OAM attribute bit 5 clear
    pub in_front: bool,
    pub is_sprite_zero: bool,
}

/// Sprites the hardware can fetch for a single scanline
const SPRITES_PER_LINE: usize = 8;

impl PPU {
    /// Raises the overflow flag when more sprites cover `y` than one line can hold
    pub(super) fn evaluate_sprite_overflow(&mut self, y: u8) {
        let height = self.ctrl_register.sprite_size() as u16;
        let y = y as u16;
        let in_range = self
            .oam_data
            .chunks_exact(4)
            .filter(|sprite| {
                let sprite_y = sprite[0] as u16;
                y >= sprite_y && y < sprite_y + height
            })
            .count();
        if in_range > SPRITES_PER_LINE {
            self.status_register.set_sprite_overflow();
        }
    }

    /// First opaque sprite pixel at (`x`, `y`) in OAM order, if any
    pub(super) fn sprite_pixel(&self, x: u8, y: u8, mapper: &mut dyn Mapper) -> Option<SpritePixel> {
        let height = self.ctrl_register.sprite_size() as u16;
        let (x, y) = (x as u16, y as u16);

        for (i, sprite) in self.oam_data.chunks_exact(4).enumerate() {
            let sprite_y = sprite[0] as u16;
            let tile = sprite[1] as u16;
            let attr = sprite[2];
            let sprite_x = sprite[3] as u16;

            if y < sprite_y || y >= sprite_y + height {
                continue;
            }
            if x < sprite_x || x >= sprite_x + 8 {
                continue;
            }

            let mut fine_y = y - sprite_y;
            if attr & 0x80 != 0 {
                fine_y = height - 1 - fine_y; // vertical flip
            }

            let pattern_addr = if height == 16 {
                // 8x16: bank from tile bit 0, bottom half is the next tile
                let bank = if tile & 1 != 0 { 0x1000 } else { 0x0000 };
                let tile_index = (tile & 0xFE) + if fine_y >= 8 { 1 } else { 0 };
                bank + tile_index * 16 + (fine_y & 7)
            } else {
                self.ctrl_register.sprite_pattern_addr() + tile * 16 + fine_y
            };

            let lo = self.read_bus(pattern_addr, mapper);
            let hi = self.read_bus(pattern_addr + 8, mapper);
            let x_in_sprite = (x - sprite_x) as u8;
            let bit = if attr & 0x40 != 0 { x_in_sprite } else { 7 - x_in_sprite };
            let pixel = ((lo >> bit) & 1) | (((hi >> bit) & 1) << 1);

            if pixel != 0 {
                return Some(SpritePixel {
                    palette: attr & 0b11,
                    pixel,
                    in_front: (attr >> 5) & 1 == 0,
                    is_sprite_zero: i == 0,
                });
            }
        }
        None
    }
}

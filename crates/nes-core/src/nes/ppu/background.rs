use super::PPU;
use crate::nes::cartridge::Mapper;

impl PPU {
    /// Background pixel at screen column `x` on the current scanline
    ///
    /// Returns `(palette, pixel)` where `pixel` 0 is transparent
    pub(super) fn background_pixel(&self, x: u8, mapper: &mut dyn Mapper) -> (u8, u8) {
        let scroll = &self.scroll_register;
        let coarse_y = scroll.coarse_y();
        let fine_y = scroll.fine_y();

        // Absolute X within the two horizontally adjacent nametables
        let mut scroll_x = scroll.coarse_x() * 8 + scroll.x as u16 + x as u16;
        let mut nt_x = scroll.nametable_x();
        let nt_y = scroll.nametable_y();
        if scroll_x >= 256 {
            nt_x ^= 1;
            scroll_x -= 256;
        }

        let tile_x = scroll_x >> 3;
        let pixel_x = (scroll_x & 7) as u8;
        let nt_base = 0x2000 | (nt_x << 10) | (nt_y << 11);

        let tile_id = self.read_bus(nt_base + coarse_y * 32 + tile_x, mapper) as u16;

        let attr_addr = nt_base + 0x3C0 + (coarse_y >> 2) * 8 + (tile_x >> 2);
        let attr = self.read_bus(attr_addr, mapper);
        let shift = (if tile_x & 2 != 0 { 2 } else { 0 }) | (if coarse_y & 2 != 0 { 4 } else { 0 });
        let palette = (attr >> shift) & 0b11;

        let pattern_addr = self.ctrl_register.background_pattern_addr() + tile_id * 16 + fine_y;
        let lo = self.read_bus(pattern_addr, mapper);
        let hi = self.read_bus(pattern_addr + 8, mapper);

        let bit = 7 - pixel_x;
        let pixel = ((lo >> bit) & 1) | (((hi >> bit) & 1) << 1);
        (palette, pixel)
    }
}

use crate::trace;
use bitflags::bitflags;

bitflags! {
    /* See: https://www.nesdev.org/wiki/PPU_registers#PPUSTATUS
        7  bit  0
        ---- ----
        VSOx xxxx
        |||| ||||
        |||+-++++- (PPU open bus or 2C05 PPU identifier)
        ||+------- Sprite overflow flag
        |+-------- Sprite 0 hit flag
        +--------- Vblank flag, cleared on read.
     */
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct StatusRegister: u8 {
        const SPRITE_OVERFLOW  = 0b00100000;
        const SPRITE_ZERO_HIT  = 0b01000000;
        const VBLANK_STARTED   = 0b10000000;
    }
}

impl Default for StatusRegister {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusRegister {
    pub fn new() -> Self {
        StatusRegister::empty()
    }

    pub fn set_vblank_status(&mut self) {
        trace!("SET VBLANK");
        self.insert(StatusRegister::VBLANK_STARTED);
    }

    pub fn reset_vblank_status(&mut self) {
        if self.contains(StatusRegister::VBLANK_STARTED) {
            trace!("CLEAR VBLANK: set -> unset");
        }
        self.remove(StatusRegister::VBLANK_STARTED);
    }

    pub fn set_sprite_zero_hit(&mut self, status: bool) {
        self.set(StatusRegister::SPRITE_ZERO_HIT, status);
    }

    pub fn set_sprite_overflow(&mut self) {
        self.insert(StatusRegister::SPRITE_OVERFLOW);
    }

    /// Pre-render line: vblank, sprite-0 hit and overflow all drop together
    pub fn clear_for_prerender(&mut self) {
        self.reset_vblank_status();
        self.remove(StatusRegister::SPRITE_ZERO_HIT | StatusRegister::SPRITE_OVERFLOW);
    }

    pub fn is_in_vblank(&self) -> bool {
        self.contains(StatusRegister::VBLANK_STARTED)
    }
}

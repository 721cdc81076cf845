use crate::nes::cartridge::{Mapper, Mirroring};
use crate::nes::ppu::consts::{
    DOTS_PER_SCANLINE, FRAME_SIZE, MAPPER_STEP_DOT, PRERENDER_SCANLINE, SCANLINES_PER_FRAME,
    SCREEN_HEIGHT, SCREEN_WIDTH, VBLANK_SCANLINE, packed_rgb,
};
use crate::nes::ppu::registers::control_register::ControlRegister;
use crate::nes::ppu::registers::mask_register::MaskRegister;
use crate::nes::ppu::registers::scroll_register::ScrollRegister;
use crate::nes::ppu::registers::status_register::StatusRegister;
use crate::nes::tracer::traceable::Traceable;
use crate::{trace_obj, trace_ppu_event};

mod background;
pub mod consts;
pub mod registers;
mod sprites;

const OAM_SIZE: usize = 256;
// 2 KiB on the console plus 2 KiB a four-screen cartridge provides
const RAM_SIZE: usize = 4096;
const NAME_TABLE_SIZE: u16 = 0x400; // Size of each nametable (1 KB)
const PALETTE_SIZE: usize = 0x20; // Size of the palette memory

pub struct PPU {
    pub dot: u16,
    pub scanline: u16,
    pub frame_count: u64,

    pub v_ram: [u8; RAM_SIZE],
    pub palette_table: [u8; PALETTE_SIZE],
    pub oam_data: [u8; OAM_SIZE], // $2004 (R/W) Object Attribute Memory
    pub oam_addr: u8,             // $2003 (W)
    internal_data: u8,            // $2007 read buffer

    pub ctrl_register: ControlRegister,  // $2000 (W)
    pub mask_register: MaskRegister,     // $2001 (W)
    pub status_register: StatusRegister, // $2002 (R)
    pub scroll_register: ScrollRegister, // $2005 / $2006 (write latched)

    pub frame_buffer: Box<[u32; FRAME_SIZE]>,

    nmi_pending: bool,
    frame_ready: bool,
}

impl Default for PPU {
    fn default() -> Self {
        Self::new()
    }
}

impl PPU {
    pub fn new() -> Self {
        Self {
            dot: 0,
            scanline: 0,
            frame_count: 0,
            v_ram: [0; RAM_SIZE],
            palette_table: [0; PALETTE_SIZE],
            oam_data: [0; OAM_SIZE],
            oam_addr: 0,
            internal_data: 0,
            ctrl_register: ControlRegister::new(),
            mask_register: MaskRegister::new(),
            status_register: StatusRegister::new(),
            scroll_register: ScrollRegister::new(),
            frame_buffer: Box::new([0; FRAME_SIZE]),
            nmi_pending: false,
            frame_ready: false,
        }
    }

    /// Register state back to power-on; memories are left as they are
    pub fn reset(&mut self) {
        self.dot = 0;
        self.scanline = 0;
        self.oam_addr = 0;
        self.internal_data = 0;
        self.ctrl_register = ControlRegister::new();
        self.mask_register = MaskRegister::new();
        self.status_register = StatusRegister::new();
        self.scroll_register = ScrollRegister::new();
        self.nmi_pending = false;
        self.frame_ready = false;
    }

    pub fn read_register(&mut self, addr: u16, mapper: &mut dyn Mapper) -> u8 {
        match addr & 7 {
            2 => {
                // PPUSTATUS
                let status = self.status_register.bits();
                self.status_register.reset_vblank_status();
                self.scroll_register.reset_latch();
                status
            }
            4 => {
                // OAMDATA
                let value = self.oam_data[self.oam_addr as usize];
                self.oam_addr = self.oam_addr.wrapping_add(1);
                value
            }
            7 => self.read_memory(mapper),
            // write-only registers
            _ => 0,
        }
    }

    pub fn write_register(&mut self, addr: u16, value: u8, mapper: &mut dyn Mapper) {
        match addr & 7 {
            0 => self.write_to_ctrl(value),
            1 => self.mask_register.update(value),
            2 => {} // PPUSTATUS is read-only
            3 => self.oam_addr = value,
            4 => self.write_to_oam_data(value),
            5 => self.scroll_register.write_scroll(value),
            6 => self.scroll_register.write_to_addr(value),
            _ => self.write_memory(value, mapper),
        }
    }

    /// Advances the PPU by one dot
    ///
    /// # Returns
    ///
    /// `true` on the dot where vblank begins and the frame buffer is complete
    pub fn tick(&mut self, mapper: &mut dyn Mapper) -> bool {
        self.dot += 1;
        if self.dot >= DOTS_PER_SCANLINE {
            self.dot = 0;
            self.scanline += 1;
            if self.scanline >= SCANLINES_PER_FRAME {
                self.scanline = 0;
                self.frame_count += 1;
            }
        }

        let visible = self.scanline < SCREEN_HEIGHT as u16;
        let prerender = self.scanline == PRERENDER_SCANLINE;

        if visible && (1..=SCREEN_WIDTH as u16).contains(&self.dot) {
            self.render_pixel(mapper);
        }

        if self.mask_register.rendering_enabled() && (visible || prerender) {
            match self.dot {
                256 => self.scroll_register.increment_y(),
                257 => {
                    self.scroll_register.copy_horizontal_bits();
                    if visible {
                        self.evaluate_sprite_overflow(self.scanline as u8);
                    }
                }
                MAPPER_STEP_DOT if visible => mapper.step(),
                280..=304 if prerender => self.scroll_register.copy_vertical_bits(),
                _ => {}
            }
        }

        let mut frame_done = false;
        if self.scanline == VBLANK_SCANLINE && self.dot == 1 {
            self.status_register.set_vblank_status();
            if self.ctrl_register.generate_vblank_nmi() {
                self.nmi_pending = true;
                trace_ppu_event!("NMI raised frame={}", self.frame_count);
            }
            self.frame_ready = true;
            frame_done = true;
            trace_obj!(self);
        }

        if prerender && self.dot == 1 {
            self.status_register.clear_for_prerender();
            self.nmi_pending = false;
        }

        frame_done
    }

    pub fn nmi_pending(&self) -> bool {
        self.nmi_pending
    }

    pub fn clear_nmi(&mut self) {
        self.nmi_pending = false;
    }

    /// Returns whether a frame completed since the last call, clearing the flag
    pub fn take_frame_ready(&mut self) -> bool {
        std::mem::take(&mut self.frame_ready)
    }

    pub fn frame_buffer(&self) -> &[u32; FRAME_SIZE] {
        &self.frame_buffer
    }

    /// OAMDATA port, also the destination of OAM DMA
    pub fn write_to_oam_data(&mut self, value: u8) {
        self.oam_data[self.oam_addr as usize] = value;
        self.oam_addr = self.oam_addr.wrapping_add(1);
    }

    fn write_to_ctrl(&mut self, value: u8) {
        let nmi_was_enabled = self.ctrl_register.generate_vblank_nmi();
        self.ctrl_register.update(value);
        self.scroll_register
            .write_nametable_select(self.ctrl_register.nametable_bits());

        // Enabling NMI in the middle of vblank fires it straight away
        if !nmi_was_enabled
            && self.ctrl_register.generate_vblank_nmi()
            && self.status_register.is_in_vblank()
        {
            self.nmi_pending = true;
            trace_ppu_event!("NMI raised by PPUCTRL write sl={} dot={}", self.scanline, self.dot);
        }
    }

    fn render_pixel(&mut self, mapper: &mut dyn Mapper) {
        let x = (self.dot - 1) as u8;
        let y = self.scanline as u8;

        let (mut bg_palette, mut bg_pixel) = (0, 0);
        if self.mask_register.show_background() {
            (bg_palette, bg_pixel) = self.background_pixel(x, mapper);
        }

        let mut sprite = None;
        if self.mask_register.show_sprites() {
            sprite = self.sprite_pixel(x, y, mapper);
        }

        // Left 8 pixel clipping
        if x < 8 {
            if !self.mask_register.leftmost_8pxl_background() {
                bg_pixel = 0;
            }
            if !self.mask_register.leftmost_8pxl_sprite() {
                sprite = None;
            }
        }

        let (mut palette, mut pixel) = (bg_palette, bg_pixel);
        if let Some(sprite) = sprite {
            if sprite.is_sprite_zero && bg_pixel != 0 && x != 255 {
                self.status_register.set_sprite_zero_hit(true);
            }
            if bg_pixel == 0 || sprite.in_front {
                palette = sprite.palette + 4;
                pixel = sprite.pixel;
            }
        }

        let palette_addr = if pixel == 0 {
            0x3F00
        } else {
            0x3F00 + ((palette as u16) << 2) + pixel as u16
        };
        let color = self.read_bus(palette_addr, mapper);
        self.frame_buffer[y as usize * SCREEN_WIDTH + x as usize] = packed_rgb(color);
    }

    /// PPUDATA read; buffered except for palette addresses
    fn read_memory(&mut self, mapper: &mut dyn Mapper) -> u8 {
        let addr = self.scroll_register.get_addr();
        let result = if addr >= 0x3F00 {
            // The buffer is filled with the nametable byte "under" the palette
            self.internal_data = self.read_bus(addr & 0x2FFF, mapper);
            self.read_bus(addr, mapper)
        } else {
            let buffered = self.internal_data;
            self.internal_data = self.read_bus(addr, mapper);
            buffered
        };
        self.increment_addr();
        result
    }

    fn write_memory(&mut self, value: u8, mapper: &mut dyn Mapper) {
        let addr = self.scroll_register.get_addr();
        self.write_bus(addr, value, mapper);
        self.increment_addr();
    }

    fn increment_addr(&mut self) {
        let inc = self.ctrl_register.addr_increment();
        self.scroll_register.increment_addr(inc);
    }

    pub(crate) fn read_bus(&self, addr: u16, mapper: &mut dyn Mapper) -> u8 {
        let addr = addr & 0x3FFF;
        match addr {
            0x0000..=0x1FFF => mapper.read_chr(addr),
            0x2000..=0x3EFF => self.v_ram[self.mirror_ram_addr(addr, mapper.mirroring())],
            _ => self.palette_table[self.mirror_palette_addr(addr)] & 0x3F,
        }
    }

    pub(crate) fn write_bus(&mut self, addr: u16, value: u8, mapper: &mut dyn Mapper) {
        let addr = addr & 0x3FFF;
        match addr {
            0x0000..=0x1FFF => mapper.write_chr(addr, value),
            0x2000..=0x3EFF => {
                let index = self.mirror_ram_addr(addr, mapper.mirroring());
                self.v_ram[index] = value;
            }
            _ => {
                let index = self.mirror_palette_addr(addr);
                self.palette_table[index] = value & 0x3F;
            }
        }
    }

    /// Maps $3F00-$3FFF to a palette index; $10/$14/$18/$1C alias $00/$04/$08/$0C
    pub fn mirror_palette_addr(&self, addr: u16) -> usize {
        let index = (addr & 0x1F) as usize;
        if index >= 0x10 && index & 0x03 == 0 {
            index & 0x0F
        } else {
            index
        }
    }

    /// Maps $2000-$3EFF to an offset into nametable RAM
    pub fn mirror_ram_addr(&self, addr: u16, mirroring: Mirroring) -> usize {
        let addr = addr & 0x0FFF;
        let table = addr / NAME_TABLE_SIZE;
        let offset = addr % NAME_TABLE_SIZE;

        let physical = match mirroring {
            Mirroring::Horizontal => table >> 1, // A A B B
            Mirroring::Vertical => table & 1,    // A B A B
            Mirroring::Single0 => 0,
            Mirroring::Single1 => 1,
            Mirroring::FourScreen => table,
        };
        (physical * NAME_TABLE_SIZE + offset) as usize
    }
}

impl Traceable for PPU {
    fn trace_name(&self) -> &'static str {
        "PPU"
    }

    fn trace_state(&self) -> Option<String> {
        Some(format!(
            "sl={} dot={} v={:04X} t={:04X} x={} ctrl={:02X} mask={:02X} status={:02X}",
            self.scanline,
            self.dot,
            self.scroll_register.v,
            self.scroll_register.t,
            self.scroll_register.x,
            self.ctrl_register.bits(),
            self.mask_register.bits(),
            self.status_register.bits(),
        ))
    }
}

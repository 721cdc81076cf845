/* See: https://www.nesdev.org/wiki/PPU_scrolling#PPU_internal_registers
   1st write
   7  bit  0
   ---- ----
   XXXX XXXX
   |||| ||||
   ++++-++++- X scroll bits 7-0 (bit 8 in PPUCTRL bit 0)

   2nd write
   7  bit  0
   ---- ----
   YYYY YYYY
   |||| ||||
   ++++-++++- Y scroll bits 7-0 (bit 8 in PPUCTRL bit 1)
*/

/// Fields:
/// - `t`: Temporary VRAM address (15 bits). Used to compose scroll and addressing data.
/// - `v`: Current VRAM address (15 bits). Used for actual PPU memory reads/writes.
/// - `x`: Fine X scroll (3 bits). Controls horizontal pixel offset within a tile (0–7).
/// - `w`: First/second write toggle, shared by $2005 and $2006.
#[derive(Clone, Debug, Default)]
pub struct ScrollRegister {
    pub v: u16, // Current VRAM address (15 bits)

    /// Temporary VRAM address (15 bits)
    ///
    /// ```text
    /// yyy NN YYYYY XXXXX
    /// ||| || ||||| +++++-- coarse X scroll (5 bits)
    /// ||| || +++++-------- coarse Y scroll (5 bits)
    /// ||| ++-------------- nametable select (2 bits)
    /// +++----------------- fine Y scroll (3 bits)
    /// ```
    pub t: u16,

    /// Fine X scroll (3 bits)
    pub x: u8,

    /// First/second write toggle
    pub w: bool,
}

impl ScrollRegister {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_scroll(&mut self, data: u8) {
        if !self.w {
            // First write to $2005, horizontal scroll
            self.x = data & 0b0000_0111;
            self.t = (self.t & !0x001F) | (data >> 3) as u16;
        } else {
            // Second write to $2005, vertical scroll
            let data = data as u16;
            self.t = (self.t & !0x73E0) | ((data & 0xF8) << 2) | ((data & 0x07) << 12);
        }
        self.w = !self.w;
    }

    pub fn write_to_addr(&mut self, data: u8) {
        if !self.w {
            // First write (high byte of address)
            self.t = (self.t & 0x00FF) | (((data as u16) & 0x3F) << 8);
        } else {
            // Second write (low byte of address)
            self.t = (self.t & 0xFF00) | (data as u16);
            self.v = self.t;
        }
        self.w = !self.w;
    }

    /// PPUCTRL bits 0-1 land in t bits 10-11
    pub fn write_nametable_select(&mut self, bits: u16) {
        self.t = (self.t & !0x0C00) | ((bits & 0b11) << 10);
    }

    pub fn get_addr(&self) -> u16 {
        self.v & 0x3FFF // mirror down to 0x0000–0x3FFF
    }

    pub fn increment_addr(&mut self, inc: u16) {
        self.v = self.v.wrapping_add(inc) & 0x7FFF;
    }

    pub fn reset_latch(&mut self) {
        self.w = false;
    }

    pub fn increment_y(&mut self) {
        // Increment fine Y
        if (self.v & 0x7000) != 0x7000 {
            self.v += 0x1000;
        } else {
            // Fine Y wraps around to 0
            self.v &= !0x7000;
            let mut y = (self.v >> 5) & 0x1F; // Get coarse Y

            if y == 29 {
                y = 0;
                self.v ^= 0x0800; // Toggle vertical nametable
            } else if y == 31 {
                y = 0; // Attribute rows wrap without switching nametable
            } else {
                y += 1;
            }

            self.v = (self.v & !0x03E0) | (y << 5);
        }
    }

    pub fn copy_horizontal_bits(&mut self) {
        // NT X + coarse X
        let mask = 0b0000_0100_0001_1111;
        self.v = (self.v & !mask) | (self.t & mask);
    }

    pub fn copy_vertical_bits(&mut self) {
        // Fine Y + NT Y + coarse Y
        let mask = 0b0111_1011_1110_0000;
        self.v = (self.v & !mask) | (self.t & mask);
    }

    pub fn coarse_x(&self) -> u16 {
        self.v & 0x001F
    }

    pub fn coarse_y(&self) -> u16 {
        (self.v >> 5) & 0x001F
    }

    pub fn fine_y(&self) -> u16 {
        (self.v >> 12) & 0x0007
    }

    pub fn nametable_x(&self) -> u16 {
        (self.v >> 10) & 1
    }

    pub fn nametable_y(&self) -> u16 {
        (self.v >> 11) & 1
    }
}

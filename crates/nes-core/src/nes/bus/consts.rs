pub const CPU_RAM_SIZE: usize = 2048;
pub const CPU_RAM_START: u16 = 0x0000;
pub const CPU_RAM_END: u16 = 0x1FFF;

pub const PPU_REGISTERS_START: u16 = 0x2000;
pub const PPU_REGISTERS_END: u16 = 0x3FFF;

pub const OAM_DMA: u16 = 0x4014;
pub const JOYPAD_1: u16 = 0x4016;
pub const JOYPAD_2: u16 = 0x4017;
pub const IO_START: u16 = 0x4000;
pub const IO_END: u16 = 0x401F;

pub const PRG_RAM_START: u16 = 0x6000;
pub const PRG_RAM_END: u16 = 0x7FFF;
pub const PRG_ROM_START: u16 = 0x8000;
pub const PRG_ROM_END: u16 = 0xFFFF;

/// Upper bits of a controller read, left over from the last value on the data bus
pub const JOYPAD_OPEN_BUS: u8 = 0x40;

pub const OAM_DMA_CYCLES: u32 = 513;

//! Convenient imports for consumers of nes-core
//!
//! Pull in everything commonly needed in one line:
//! ```rust
//! use nes_core::prelude::*;
//! ```

// Main NES emulator API
pub use crate::nes::{NES, NesError};
pub use crate::nes::cartridge::rom::{Rom, RomError};
pub use crate::nes::controller::joypad::JoypadButton;

// Cartridge types
pub use crate::nes::cartridge::{Cartridge, CartridgeError, Mapper, Mirroring, new_mapper};

// Macros
pub use crate::trace_dump;

// Constants
pub use crate::nes::ppu::consts::{FRAME_SIZE, NES_SYSTEM_PALETTE, SCREEN_HEIGHT, SCREEN_WIDTH};

// Conditional testing utilities
#[cfg(feature = "testing-utils")]
pub use crate::nes::test_utils::*;

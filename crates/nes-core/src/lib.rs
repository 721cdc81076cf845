// NES core modules
pub mod nes;
pub mod prelude;

// Re-exports
pub use nes::{NES, NesError};

pub use nes::cartridge::rom::{Rom, RomError};
pub use nes::cartridge::{Cartridge, CartridgeError, Mapper, Mirroring};

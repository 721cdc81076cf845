pub mod consts;
pub mod nes_bus;
pub mod simple_bus;

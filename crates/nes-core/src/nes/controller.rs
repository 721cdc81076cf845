pub mod joypad;

pub trait NesController {
    /// Serial read of the next button bit ($4016 / $4017)
    fn read(&mut self) -> u8;

    /// Strobe write ($4016)
    fn write(&mut self, data: u8);
}

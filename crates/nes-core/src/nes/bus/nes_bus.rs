use crate::nes::bus::consts::*;
use crate::nes::cartridge::Mapper;
use crate::nes::controller::NesController;
use crate::nes::controller::joypad::Joypad;
use crate::nes::cpu::CpuBusInterface;
use crate::nes::ppu::PPU;

pub struct NesBus {
    cart: Box<dyn Mapper>,

    pub cpu_ram: [u8; CPU_RAM_SIZE],
    pub ppu: PPU,
    pub joypads: [Joypad; 2],

    oam_dma_pending: bool,
}

impl NesBus {
    pub fn new(cart: Box<dyn Mapper>) -> NesBus {
        NesBus {
            cart,
            cpu_ram: [0; CPU_RAM_SIZE],
            ppu: PPU::new(),
            joypads: [Joypad::new(), Joypad::new()],
            oam_dma_pending: false,
        }
    }

    pub fn reset_components(&mut self) {
        self.cpu_ram = [0; CPU_RAM_SIZE];
        self.oam_dma_pending = false;
        self.ppu.reset();
    }

    /// Advances the PPU by one dot, lending it the cartridge
    ///
    /// Returns `true` when the dot completed a frame
    pub fn tick_ppu(&mut self) -> bool {
        self.ppu.tick(self.cart.as_mut())
    }

    pub fn mapper_irq(&self) -> bool {
        self.cart.irq_pending()
    }

    pub fn set_controller_state(&mut self, pad: usize, state: u8) {
        if let Some(joypad) = self.joypads.get_mut(pad) {
            joypad.set_state(state);
        }
    }

    /// Copies a CPU page into OAM through the OAMDATA port
    fn oam_dma(&mut self, page: u8) {
        let base = (page as u16) << 8;
        for i in 0..=0xFF {
            let value = self.cpu_bus_read(base | i);
            self.ppu.write_to_oam_data(value);
        }
        self.oam_dma_pending = true;
        log::trace!("OAM DMA from ${:04X}", base);
    }
}

impl CpuBusInterface for NesBus {
    fn cpu_bus_read(&mut self, addr: u16) -> u8 {
        match addr {
            CPU_RAM_START..=CPU_RAM_END => {
                // RAM mirrored every 0x0800
                self.cpu_ram[(addr & 0x07FF) as usize]
            }
            PPU_REGISTERS_START..=PPU_REGISTERS_END => {
                // PPU Registers mirrored every 8 bytes
                self.ppu.read_register(addr, self.cart.as_mut())
            }
            JOYPAD_1 => JOYPAD_OPEN_BUS | self.joypads[0].read(),
            JOYPAD_2 => JOYPAD_OPEN_BUS | self.joypads[1].read(),
            // APU and test registers; no audio
            IO_START..=IO_END => 0,
            PRG_RAM_START..=PRG_RAM_END => self.cart.read_ram(addr),
            PRG_ROM_START..=PRG_ROM_END => self.cart.read_prg(addr),
            // Expansion area
            _ => 0,
        }
    }

    fn cpu_bus_write(&mut self, addr: u16, value: u8) {
        match addr {
            CPU_RAM_START..=CPU_RAM_END => {
                self.cpu_ram[(addr & 0x07FF) as usize] = value;
            }
            PPU_REGISTERS_START..=PPU_REGISTERS_END => {
                self.ppu.write_register(addr, value, self.cart.as_mut());
            }
            OAM_DMA => self.oam_dma(value),
            JOYPAD_1 => {
                // Strobe is shared by both ports
                self.joypads[0].write(value);
                self.joypads[1].write(value);
            }
            IO_START..=IO_END => {}
            PRG_RAM_START..=PRG_RAM_END => self.cart.write_ram(addr, value),
            PRG_ROM_START..=PRG_ROM_END => self.cart.write_prg(addr, value),
            _ => {}
        }
    }

    fn take_oam_dma(&mut self) -> bool {
        std::mem::take(&mut self.oam_dma_pending)
    }
}

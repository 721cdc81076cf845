use crate::nes::cpu::CpuBusInterface;

/// Flat 64 KiB of RAM with no memory-mapped devices, for running bare CPU programs
pub struct SimpleBus {
    pub memory: Box<[u8; 0x10000]>,
}

impl Default for SimpleBus {
    fn default() -> Self {
        Self::new()
    }
}

impl SimpleBus {
    pub fn new() -> SimpleBus {
        SimpleBus {
            memory: Box::new([0; 0x10000]),
        }
    }

    /// Copies `program` into memory starting at `start`, wrapping at the top of the address space
    pub fn load(&mut self, start: u16, program: &[u8]) {
        for (i, byte) in program.iter().enumerate() {
            let addr = start.wrapping_add(i as u16);
            self.memory[addr as usize] = *byte;
        }
    }

    pub fn store_byte(&mut self, addr: u16, value: u8) {
        self.memory[addr as usize] = value;
    }

    pub fn store_word(&mut self, addr: u16, value: u16) {
        self.store_byte(addr, value as u8);
        self.store_byte(addr.wrapping_add(1), (value >> 8) as u8);
    }
}

impl CpuBusInterface for SimpleBus {
    fn cpu_bus_read(&mut self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    fn cpu_bus_write(&mut self, addr: u16, value: u8) {
        self.memory[addr as usize] = value;
    }
}

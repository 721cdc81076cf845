pub mod bus;
pub mod cartridge;
pub mod controller;
pub mod cpu;
pub mod ppu;
pub mod tracer;

#[cfg(feature = "testing-utils")]
pub mod test_utils;

use crate::trace;
use bus::consts::{CPU_RAM_SIZE, OAM_DMA_CYCLES};
use bus::nes_bus::NesBus;
use cartridge::rom::{Rom, RomError};
use cartridge::{CartridgeError, Mapper};
use cpu::{CPU, CpuBusInterface};
use ppu::consts::FRAME_SIZE;
use thiserror::Error;

/// PPU dots per CPU cycle
pub const PPU_DOTS_PER_CPU_CYCLE: u32 = 3;

#[derive(Debug, Error)]
pub enum NesError {
    #[error(transparent)]
    Rom(#[from] RomError),
    #[error(transparent)]
    Cartridge(#[from] CartridgeError),
}

/// The whole console: the CPU owns the bus, which owns everything else
pub struct NES {
    pub cpu: CPU<NesBus>,
    ppu_dots: u64,
}

impl NES {
    pub fn new(mapper: Box<dyn Mapper>) -> Self {
        Self {
            cpu: CPU::new(NesBus::new(mapper)),
            ppu_dots: 0,
        }
    }

    /// Parses an iNES image and builds a console around it, already reset
    pub fn from_rom_bytes(rom_bytes: &[u8]) -> Result<NES, NesError> {
        let rom = Rom::parse(rom_bytes)?;
        let mapper = rom.into_mapper()?;
        let mut nes = NES::new(mapper);
        nes.reset();
        Ok(nes)
    }

    /// Resets work RAM, the PPU and the CPU, which reloads PC from the reset vector
    pub fn reset(&mut self) {
        self.cpu.bus.reset_components();
        self.ppu_dots = 0;
        let cycles = self.cpu.reset();
        log::debug!(
            "NES reset: PC=${:04X} ({} cycles)",
            self.cpu.program_counter,
            cycles
        );
    }

    /// Runs one CPU step and catches the PPU up
    ///
    /// Returns the CPU cycles consumed, including any OAM DMA stall
    pub fn step(&mut self) -> u32 {
        let mut cycles = self.cpu.step();

        if self.cpu.bus.take_oam_dma() {
            // One extra alignment cycle when the DMA starts on an odd cycle
            let stall = OAM_DMA_CYCLES + (self.cpu.cycles & 1) as u32;
            self.cpu.cycles += stall as u64;
            cycles += stall;
            trace!("[OAM DMA] stall={} cyc={}", stall, self.cpu.cycles);
        }

        for _ in 0..cycles * PPU_DOTS_PER_CPU_CYCLE {
            self.cpu.bus.tick_ppu();
        }
        self.ppu_dots += (cycles * PPU_DOTS_PER_CPU_CYCLE) as u64;

        if self.cpu.bus.ppu.nmi_pending() {
            self.cpu.bus.ppu.clear_nmi();
            self.cpu.trigger_nmi();
        }
        self.cpu.set_irq(self.cpu.bus.mapper_irq());

        cycles
    }

    /// Steps until the PPU finishes a frame
    ///
    /// Returns the CPU cycles it took
    pub fn run_frame(&mut self) -> u64 {
        // Drop a frame that completed before this call
        self.cpu.bus.ppu.take_frame_ready();

        let mut cycles = 0u64;
        while !self.cpu.bus.ppu.take_frame_ready() {
            cycles += self.step() as u64;
        }
        cycles
    }

    /// Steps until at least `dots` PPU dots have elapsed
    pub fn run_dots(&mut self, dots: u64) -> u64 {
        let target = self.ppu_dots + dots;
        let mut frames = 0;
        while self.ppu_dots < target {
            self.step();
            if self.cpu.bus.ppu.take_frame_ready() {
                frames += 1;
            }
        }
        frames
    }

    /// PPU dots elapsed since the last reset
    pub fn ppu_dots(&self) -> u64 {
        self.ppu_dots
    }

    pub fn frame_buffer(&self) -> &[u32; FRAME_SIZE] {
        self.cpu.bus.ppu.frame_buffer()
    }

    pub fn set_controller(&mut self, pad: usize, state: u8) {
        self.cpu.bus.set_controller_state(pad, state);
    }

    pub fn cpu_ram(&self) -> &[u8; CPU_RAM_SIZE] {
        &self.cpu.bus.cpu_ram
    }

    /// Reads through the CPU bus, with the same side effects a CPU read would have
    pub fn peek(&mut self, addr: u16) -> u8 {
        self.cpu.bus.cpu_bus_read(addr)
    }
}

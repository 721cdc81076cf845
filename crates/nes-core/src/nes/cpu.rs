use crate::nes::tracer::traceable::Traceable;
use bitflags::bitflags;
use opcodes::Opcode;

mod instruction_handlers;
pub mod interrupts;
pub mod opcodes;
mod processor;

#[cfg(test)]
mod processor_tests;

pub const CPU_STACK_RESET: u8 = 0xFD;
pub const CPU_STACK_BASE: u16 = 0x0100;
pub const RESET_VECTOR: u16 = 0xFFFC;
pub const RESET_CYCLES: u32 = 7;

/// Cost charged for an opcode byte with no table entry
pub const UNKNOWN_OPCODE_CYCLES: u32 = 2;

/// Everything the processor needs from the outside world
pub trait CpuBusInterface {
    fn cpu_bus_read(&mut self, addr: u16) -> u8;
    fn cpu_bus_write(&mut self, addr: u16, value: u8);

    /// Returns `true` once after a write to the OAM DMA port
    fn take_oam_dma(&mut self) -> bool {
        false
    }
}

bitflags! {
    /* https://www.nesdev.org/wiki/Status_flags
        7  bit  0
        ---- ----
        NV1B DIZC
        |||| ||||
        |||| |||+- Carry
        |||| ||+-- Zero
        |||| |+--- Interrupt Disable
        |||| +---- Decimal
        |||+------ (No CPU effect; see: the B flag)
        ||+------- (No CPU effect; always pushed as 1)
        |+-------- Overflow
        +--------- Negative
     */
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct Flags: u8 {
        const CARRY             = 1<<0;
        const ZERO              = 1<<1;
        const INTERRUPT_DISABLE = 1<<2;
        const DECIMAL_MODE      = 1<<3;
        const BREAK             = 1<<4;
        const BREAK2            = 1<<5;
        const OVERFLOW          = 1<<6;
        const NEGATIVE          = 1<<7;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Indirect, // Only JMP supports this mode
    IndirectX,
    IndirectY,
    Relative, // The branch instructions exclusively use this mode
    Accumulator,
    Implied,
}

pub struct CPU<B: CpuBusInterface> {
    pub bus: B,

    pub register_a: u8,
    pub register_x: u8,
    pub register_y: u8,
    pub stack_pointer: u8,
    pub status: Flags,
    pub program_counter: u16,

    /// Total cycles since power-on
    pub cycles: u64,

    /// Set by a JAM opcode, cleared by reset
    pub jammed: bool,

    extra_cycles: u8,
    skip_pc_advance: bool,
    nmi_pending: bool,
    irq_line: bool,
    last_opcode: Option<&'static Opcode>,
}

impl<B: CpuBusInterface> Traceable for CPU<B> {
    fn trace_name(&self) -> &'static str {
        "CPU"
    }

    fn trace_state(&self) -> Option<String> {
        let name = self
            .last_opcode
            .map(|op| op.trace_name())
            .unwrap_or_else(|| "---".to_string());
        Some(format!(
            "PC={:04X} A={:02X} X={:02X} Y={:02X} P={:02X} SP={:02X} CYC={} [{}]",
            self.program_counter,
            self.register_a,
            self.register_x,
            self.register_y,
            self.status.bits(),
            self.stack_pointer,
            self.cycles,
            name
        ))
    }
}

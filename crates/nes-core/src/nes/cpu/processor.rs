use super::interrupts::{self, Interrupt};
use super::opcodes::{self, Opcode};
use super::{
    AddressingMode, CPU, CPU_STACK_BASE, CPU_STACK_RESET, CpuBusInterface, Flags, RESET_CYCLES,
    RESET_VECTOR, UNKNOWN_OPCODE_CYCLES,
};
use crate::{trace_cpu_event, trace_obj};

/// A jammed CPU burns cycles without touching the bus
const JAMMED_STEP_CYCLES: u32 = 2;

impl<B: CpuBusInterface> CPU<B> {
    pub fn new(bus: B) -> CPU<B> {
        CPU {
            bus,
            register_a: 0,
            register_x: 0,
            register_y: 0,
            stack_pointer: CPU_STACK_RESET,
            status: Flags::BREAK2,
            program_counter: 0,
            cycles: 0,
            jammed: false,
            extra_cycles: 0,
            skip_pc_advance: false,
            nmi_pending: false,
            irq_line: false,
            last_opcode: None,
        }
    }

    /// Puts the registers in their power-up state and jumps through the reset vector
    ///
    /// Returns the cycles charged for the reset sequence
    pub fn reset(&mut self) -> u32 {
        self.register_a = 0;
        self.register_x = 0;
        self.register_y = 0;
        self.stack_pointer = CPU_STACK_RESET;
        self.status = Flags::BREAK2;
        self.program_counter = self.read_u16(RESET_VECTOR);
        self.jammed = false;
        self.nmi_pending = false;
        self.irq_line = false;
        self.extra_cycles = 0;
        self.skip_pc_advance = false;
        self.last_opcode = None;

        self.cycles += RESET_CYCLES as u64;
        RESET_CYCLES
    }

    /// Latches an NMI to be serviced before the next instruction
    pub fn trigger_nmi(&mut self) {
        self.nmi_pending = true;
    }

    pub fn nmi_pending(&self) -> bool {
        self.nmi_pending
    }

    /// Drives the level-sensitive IRQ line
    pub fn set_irq(&mut self, active: bool) {
        self.irq_line = active;
    }

    pub fn irq_line(&self) -> bool {
        self.irq_line
    }

    /// Runs until a JAM opcode halts the processor
    pub fn run(&mut self) {
        while !self.jammed {
            self.step();
        }
    }

    /// Services a pending interrupt or executes one instruction
    ///
    /// Returns the number of CPU cycles consumed
    pub fn step(&mut self) -> u32 {
        let cycles = if self.jammed {
            JAMMED_STEP_CYCLES
        } else if self.nmi_pending {
            self.nmi_pending = false;
            self.service_interrupt(interrupts::NMI)
        } else if self.irq_line && !self.status.contains(Flags::INTERRUPT_DISABLE) {
            self.service_interrupt(interrupts::IRQ)
        } else {
            self.execute_next()
        };

        self.cycles += cycles as u64;
        cycles
    }

    fn execute_next(&mut self) -> u32 {
        let opcode_addr = self.program_counter;
        let code = self.read_byte(opcode_addr);
        self.advance_program_counter();

        let opcode: &'static Opcode = match opcodes::OPCODES_MAP.get(&code).copied() {
            Some(op) => op,
            None => {
                log::warn!("Unknown opcode ${:02X} at ${:04X}", code, opcode_addr);
                return UNKNOWN_OPCODE_CYCLES;
            }
        };

        self.last_opcode = Some(opcode);
        self.extra_cycles = 0;
        self.skip_pc_advance = false;

        self.execute(opcode);

        // Step over the operand bytes unless the opcode moved PC itself
        if !self.skip_pc_advance {
            self.program_counter = self
                .program_counter
                .wrapping_add((opcode.size - 1) as u16);
        }

        trace_obj!(self);
        opcode.cycles as u32 + self.extra_cycles as u32
    }

    pub(super) fn service_interrupt(&mut self, interrupt: Interrupt) -> u32 {
        self.stack_push_u16(self.program_counter);
        let flags = self.status.bits() & !(Flags::BREAK | Flags::BREAK2).bits();
        self.stack_push(flags | interrupt.b_flag_mask);
        self.status.insert(Flags::INTERRUPT_DISABLE);
        self.program_counter = self.read_u16(interrupt.vector_addr);

        trace_cpu_event!(
            "{:?} -> ${:04X} cyc={}",
            interrupt.interrupt_type,
            self.program_counter,
            self.cycles
        );
        interrupt.cpu_cycles as u32
    }

    pub(super) fn advance_program_counter(&mut self) {
        self.program_counter = self.program_counter.wrapping_add(1);
    }

    pub(super) fn set_program_counter(&mut self, address: u16) {
        self.program_counter = address;
        self.skip_pc_advance = true;
    }

    pub(super) fn add_extra_cycles(&mut self, cycles: u8) {
        self.extra_cycles += cycles;
    }

    pub fn read_byte(&mut self, address: u16) -> u8 {
        self.bus.cpu_bus_read(address)
    }

    pub fn write_byte(&mut self, address: u16, value: u8) {
        self.bus.cpu_bus_write(address, value);
    }

    pub fn read_u16(&mut self, address: u16) -> u16 {
        let lo = self.read_byte(address) as u16;
        let hi = self.read_byte(address.wrapping_add(1)) as u16;
        hi << 8 | lo
    }

    /// Pointer fetch that wraps within the zero page
    pub(super) fn read_zero_page_u16(&mut self, pointer: u8) -> u16 {
        let lo = self.read_byte(pointer as u16) as u16;
        let hi = self.read_byte(pointer.wrapping_add(1) as u16) as u16;
        hi << 8 | lo
    }

    pub(super) fn stack_push(&mut self, value: u8) {
        let address = CPU_STACK_BASE | self.stack_pointer as u16;
        self.write_byte(address, value);
        self.stack_pointer = self.stack_pointer.wrapping_sub(1);
    }

    pub(super) fn stack_push_u16(&mut self, value: u16) {
        self.stack_push((value >> 8) as u8);
        self.stack_push(value as u8);
    }

    pub(super) fn stack_pop(&mut self) -> u8 {
        self.stack_pointer = self.stack_pointer.wrapping_add(1);
        self.read_byte(CPU_STACK_BASE | self.stack_pointer as u16)
    }

    pub(super) fn stack_pop_u16(&mut self) -> u16 {
        let lo = self.stack_pop() as u16;
        let hi = self.stack_pop() as u16;
        hi << 8 | lo
    }

    /// Resolves the effective address of the current operand
    ///
    /// PC must point at the first operand byte. The flag reports whether an
    /// indexed mode (or a branch target) landed on a different page.
    pub(super) fn operand_address(&mut self, mode: AddressingMode) -> (u16, bool) {
        let pc = self.program_counter;
        match mode {
            AddressingMode::Immediate => (pc, false),
            AddressingMode::ZeroPage => (self.read_byte(pc) as u16, false),
            AddressingMode::ZeroPageX => {
                let base = self.read_byte(pc);
                (base.wrapping_add(self.register_x) as u16, false)
            }
            AddressingMode::ZeroPageY => {
                let base = self.read_byte(pc);
                (base.wrapping_add(self.register_y) as u16, false)
            }
            AddressingMode::Absolute => (self.read_u16(pc), false),
            AddressingMode::AbsoluteX => {
                let base = self.read_u16(pc);
                let addr = base.wrapping_add(self.register_x as u16);
                (addr, is_page_crossed(base, addr))
            }
            AddressingMode::AbsoluteY => {
                let base = self.read_u16(pc);
                let addr = base.wrapping_add(self.register_y as u16);
                (addr, is_page_crossed(base, addr))
            }
            AddressingMode::Indirect => {
                /* An original 6502 does not correctly fetch the target address if the indirect
                   vector falls on a page boundary ($xxFF). It fetches the LSB from $xxFF and
                   the MSB from $xx00.
                */
                let vector = self.read_u16(pc);
                let lo = self.read_byte(vector) as u16;
                let hi_addr = (vector & 0xFF00) | (vector.wrapping_add(1) & 0x00FF);
                let hi = self.read_byte(hi_addr) as u16;
                (hi << 8 | lo, false)
            }
            AddressingMode::IndirectX => {
                let base = self.read_byte(pc);
                let pointer = base.wrapping_add(self.register_x);
                (self.read_zero_page_u16(pointer), false)
            }
            AddressingMode::IndirectY => {
                let pointer = self.read_byte(pc);
                let base = self.read_zero_page_u16(pointer);
                let addr = base.wrapping_add(self.register_y as u16);
                (addr, is_page_crossed(base, addr))
            }
            AddressingMode::Relative => {
                let offset = self.read_byte(pc) as i8;
                // Relative to the address of the next instruction
                let next = pc.wrapping_add(1);
                let target = next.wrapping_add_signed(offset as i16);
                (target, is_page_crossed(next, target))
            }
            AddressingMode::Accumulator | AddressingMode::Implied => (pc, false),
        }
    }
}

pub(super) fn is_page_crossed(a: u16, b: u16) -> bool {
    (a & 0xFF00) != (b & 0xFF00)
}

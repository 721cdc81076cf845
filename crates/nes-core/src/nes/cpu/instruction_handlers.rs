use super::interrupts;
use super::opcodes::{Mnemonic, Opcode};
use super::processor::is_page_crossed;
use super::{AddressingMode, CPU, CpuBusInterface, Flags};
use crate::trace_cpu_event;

impl<B: CpuBusInterface> CPU<B> {
    pub(super) fn execute(&mut self, opcode: &'static Opcode) {
        let mode = opcode.mode;
        match opcode.mnemonic {
            Mnemonic::BRK => self.brk(),
            Mnemonic::NOP => self.nop(mode),

            // Loads
            Mnemonic::LDA => {
                let value = self.read_operand(mode);
                self.set_register_a(value);
            }
            Mnemonic::LDX => {
                let value = self.read_operand(mode);
                self.set_register_x(value);
            }
            Mnemonic::LDY => {
                let value = self.read_operand(mode);
                self.set_register_y(value);
            }

            // Stores
            Mnemonic::STA => self.store(mode, self.register_a),
            Mnemonic::STX => self.store(mode, self.register_x),
            Mnemonic::STY => self.store(mode, self.register_y),

            // Transfers
            Mnemonic::TAX => self.set_register_x(self.register_a),
            Mnemonic::TAY => self.set_register_y(self.register_a),
            Mnemonic::TXA => self.set_register_a(self.register_x),
            Mnemonic::TYA => self.set_register_a(self.register_y),
            Mnemonic::TSX => self.set_register_x(self.stack_pointer),
            Mnemonic::TXS => self.stack_pointer = self.register_x,

            // Flags
            Mnemonic::CLC => self.status.remove(Flags::CARRY),
            Mnemonic::CLD => self.status.remove(Flags::DECIMAL_MODE),
            Mnemonic::CLI => self.status.remove(Flags::INTERRUPT_DISABLE),
            Mnemonic::CLV => self.status.remove(Flags::OVERFLOW),
            Mnemonic::SEC => self.status.insert(Flags::CARRY),
            Mnemonic::SED => self.status.insert(Flags::DECIMAL_MODE),
            Mnemonic::SEI => self.status.insert(Flags::INTERRUPT_DISABLE),

            // Logical
            Mnemonic::AND => {
                let value = self.read_operand(mode);
                self.set_register_a(self.register_a & value);
            }
            Mnemonic::ORA => {
                let value = self.read_operand(mode);
                self.set_register_a(self.register_a | value);
            }
            Mnemonic::EOR => {
                let value = self.read_operand(mode);
                self.set_register_a(self.register_a ^ value);
            }
            Mnemonic::BIT => self.bit(mode),

            // Arithmetic
            Mnemonic::ADC => {
                let value = self.read_operand(mode);
                self.add_to_register_a(value);
            }
            Mnemonic::SBC | Mnemonic::USBC => {
                let value = self.read_operand(mode);
                self.sub_from_register_a(value);
            }
            Mnemonic::CMP => {
                let value = self.read_operand(mode);
                self.compare(self.register_a, value);
            }
            Mnemonic::CPX => {
                let value = self.read_operand(mode);
                self.compare(self.register_x, value);
            }
            Mnemonic::CPY => {
                let value = self.read_operand(mode);
                self.compare(self.register_y, value);
            }

            // Increments / decrements
            Mnemonic::INC => {
                self.read_modify_write(mode, Self::increment);
            }
            Mnemonic::DEC => {
                self.read_modify_write(mode, Self::decrement);
            }
            Mnemonic::INX => self.set_register_x(self.register_x.wrapping_add(1)),
            Mnemonic::INY => self.set_register_y(self.register_y.wrapping_add(1)),
            Mnemonic::DEX => self.set_register_x(self.register_x.wrapping_sub(1)),
            Mnemonic::DEY => self.set_register_y(self.register_y.wrapping_sub(1)),

            // Shifts
            Mnemonic::ASL => {
                self.read_modify_write(mode, Self::shift_left);
            }
            Mnemonic::LSR => {
                self.read_modify_write(mode, Self::shift_right);
            }
            Mnemonic::ROL => {
                self.read_modify_write(mode, Self::rotate_left);
            }
            Mnemonic::ROR => {
                self.read_modify_write(mode, Self::rotate_right);
            }

            // Jumps / subroutines
            Mnemonic::JMP => {
                let (address, _) = self.operand_address(mode);
                self.set_program_counter(address);
            }
            Mnemonic::JSR => self.jsr(mode),
            Mnemonic::RTS => {
                let address = self.stack_pop_u16().wrapping_add(1);
                self.set_program_counter(address);
            }
            Mnemonic::RTI => self.rti(),

            // Branches
            Mnemonic::BCC => self.branch(mode, !self.status.contains(Flags::CARRY)),
            Mnemonic::BCS => self.branch(mode, self.status.contains(Flags::CARRY)),
            Mnemonic::BNE => self.branch(mode, !self.status.contains(Flags::ZERO)),
            Mnemonic::BEQ => self.branch(mode, self.status.contains(Flags::ZERO)),
            Mnemonic::BPL => self.branch(mode, !self.status.contains(Flags::NEGATIVE)),
            Mnemonic::BMI => self.branch(mode, self.status.contains(Flags::NEGATIVE)),
            Mnemonic::BVC => self.branch(mode, !self.status.contains(Flags::OVERFLOW)),
            Mnemonic::BVS => self.branch(mode, self.status.contains(Flags::OVERFLOW)),

            // Stack
            Mnemonic::PHA => self.stack_push(self.register_a),
            Mnemonic::PHP => {
                // B and the unused bit are always pushed as 1
                let flags = self.status | Flags::BREAK | Flags::BREAK2;
                self.stack_push(flags.bits());
            }
            Mnemonic::PLA => {
                let value = self.stack_pop();
                self.set_register_a(value);
            }
            Mnemonic::PLP => {
                let value = self.stack_pop();
                self.restore_status(value);
            }

            // Unofficial opcodes
            Mnemonic::JAM => self.jam(),
            Mnemonic::SLO => {
                // ASL oper + ORA oper
                let value = self.read_modify_write(mode, Self::shift_left);
                self.set_register_a(self.register_a | value);
            }
            Mnemonic::RLA => {
                // ROL oper + AND oper
                let value = self.read_modify_write(mode, Self::rotate_left);
                self.set_register_a(self.register_a & value);
            }
            Mnemonic::SRE => {
                // LSR oper + EOR oper
                let value = self.read_modify_write(mode, Self::shift_right);
                self.set_register_a(self.register_a ^ value);
            }
            Mnemonic::RRA => {
                // ROR oper + ADC oper
                let value = self.read_modify_write(mode, Self::rotate_right);
                self.add_to_register_a(value);
            }
            Mnemonic::DCP => {
                // DEC oper + CMP oper
                let value = self.read_modify_write(mode, Self::decrement);
                self.compare(self.register_a, value);
            }
            Mnemonic::ISC => {
                // INC oper + SBC oper
                let value = self.read_modify_write(mode, Self::increment);
                self.sub_from_register_a(value);
            }
            Mnemonic::LAX => {
                let value = self.read_operand(mode);
                self.set_register_a(value);
                self.set_register_x(value);
            }
            Mnemonic::SAX => self.store(mode, self.register_a & self.register_x),
            Mnemonic::LAS => {
                let value = self.read_operand(mode) & self.stack_pointer;
                self.stack_pointer = value;
                self.set_register_x(value);
                self.set_register_a(value);
            }
            Mnemonic::ANC => {
                // A AND oper, bit 7 -> C
                let value = self.read_operand(mode);
                self.set_register_a(self.register_a & value);
                self.status
                    .set(Flags::CARRY, self.status.contains(Flags::NEGATIVE));
            }
            Mnemonic::ALR => {
                // AND oper + LSR A
                let value = self.read_operand(mode) & self.register_a;
                let result = self.shift_right(value);
                self.register_a = result;
            }
            Mnemonic::ARR => self.arr(mode),
            Mnemonic::SBX => {
                // (A AND X) - oper -> X, flags like CMP
                let value = self.read_operand(mode);
                let and = self.register_a & self.register_x;
                self.status.set(Flags::CARRY, and >= value);
                self.set_register_x(and.wrapping_sub(value));
            }
            Mnemonic::ANE => {
                let value = self.read_operand(mode);
                self.set_register_a((self.register_a | 0xEE) & self.register_x & value);
            }
            Mnemonic::LXA => {
                let value = (self.register_a | 0xEE) & self.read_operand(mode);
                self.set_register_a(value);
                self.set_register_x(value);
            }
            Mnemonic::SHA => self.unstable_store(mode, self.register_a & self.register_x),
            Mnemonic::SHX => self.unstable_store(mode, self.register_x),
            Mnemonic::SHY => self.unstable_store(mode, self.register_y),
            Mnemonic::TAS => {
                self.stack_pointer = self.register_a & self.register_x;
                self.unstable_store(mode, self.stack_pointer);
            }
        }
    }

    // Utility functions
    /////////////////////

    fn set_register_a(&mut self, value: u8) {
        self.register_a = value;
        self.update_zero_and_negative_flags(value);
    }

    fn set_register_x(&mut self, value: u8) {
        self.register_x = value;
        self.update_zero_and_negative_flags(value);
    }

    fn set_register_y(&mut self, value: u8) {
        self.register_y = value;
        self.update_zero_and_negative_flags(value);
    }

    fn update_zero_and_negative_flags(&mut self, result: u8) {
        self.status.set(Flags::ZERO, result == 0);
        self.status.set(Flags::NEGATIVE, result & 0b1000_0000 != 0);
    }

    /// Flags pulled from the stack never carry B, and the unused bit always reads 1
    fn restore_status(&mut self, value: u8) {
        self.status = Flags::from_bits_truncate(value);
        self.status.remove(Flags::BREAK);
        self.status.insert(Flags::BREAK2);
    }

    /// Reads the operand, charging a cycle when an indexed mode crosses a page
    fn read_operand(&mut self, mode: AddressingMode) -> u8 {
        let (address, page_crossed) = self.operand_address(mode);
        self.add_extra_cycles(page_crossed as u8);
        self.read_byte(address)
    }

    fn store(&mut self, mode: AddressingMode, value: u8) {
        let (address, _) = self.operand_address(mode);
        self.write_byte(address, value);
    }

    /// Applies `op` to the accumulator or to memory and returns the new value
    fn read_modify_write(&mut self, mode: AddressingMode, op: fn(&mut Self, u8) -> u8) -> u8 {
        if mode == AddressingMode::Accumulator {
            let value = self.register_a;
            let result = op(self, value);
            self.register_a = result;
            return result;
        }

        let (address, _) = self.operand_address(mode);
        let value = self.read_byte(address);
        let result = op(self, value);
        self.write_byte(address, result);
        result
    }

    fn add_to_register_a(&mut self, value: u8) {
        let carry_in = self.status.contains(Flags::CARRY) as u16;
        let sum = self.register_a as u16 + value as u16 + carry_in;
        let result = sum as u8;

        // Signed overflow: both inputs share a sign that the result does not
        let overflow = (result ^ self.register_a) & (result ^ value) & 0x80 != 0;

        self.status.set(Flags::CARRY, sum > 0xFF);
        self.status.set(Flags::OVERFLOW, overflow);
        self.set_register_a(result);
    }

    fn sub_from_register_a(&mut self, value: u8) {
        self.add_to_register_a(!value);
    }

    fn compare(&mut self, register: u8, value: u8) {
        self.status.set(Flags::CARRY, register >= value);
        self.update_zero_and_negative_flags(register.wrapping_sub(value));
    }

    fn increment(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.update_zero_and_negative_flags(result);
        result
    }

    fn decrement(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.update_zero_and_negative_flags(result);
        result
    }

    fn shift_left(&mut self, value: u8) -> u8 {
        let result = value << 1;
        self.status.set(Flags::CARRY, value & 0x80 != 0);
        self.update_zero_and_negative_flags(result);
        result
    }

    fn shift_right(&mut self, value: u8) -> u8 {
        let result = value >> 1;
        self.status.set(Flags::CARRY, value & 0x01 != 0);
        self.update_zero_and_negative_flags(result);
        result
    }

    fn rotate_left(&mut self, value: u8) -> u8 {
        let carry_in = self.status.contains(Flags::CARRY) as u8;
        let result = (value << 1) | carry_in;
        self.status.set(Flags::CARRY, value & 0x80 != 0);
        self.update_zero_and_negative_flags(result);
        result
    }

    fn rotate_right(&mut self, value: u8) -> u8 {
        let carry_in = self.status.contains(Flags::CARRY) as u8;
        let result = (value >> 1) | (carry_in << 7);
        self.status.set(Flags::CARRY, value & 0x01 != 0);
        self.update_zero_and_negative_flags(result);
        result
    }

    fn branch(&mut self, mode: AddressingMode, condition: bool) {
        if !condition {
            return;
        }
        let (target, page_crossed) = self.operand_address(mode);
        self.add_extra_cycles(1 + page_crossed as u8);
        self.set_program_counter(target);
    }

    // Opcodes
    /////////////

    fn brk(&mut self) {
        // BRK skips a padding byte, so the return address is opcode + 2
        self.advance_program_counter();
        self.service_interrupt(interrupts::BRK);
        self.set_program_counter(self.program_counter);
    }

    fn nop(&mut self, mode: AddressingMode) {
        // Multi-byte NOPs still perform their read
        if mode != AddressingMode::Implied {
            self.read_operand(mode);
        }
    }

    fn bit(&mut self, mode: AddressingMode) {
        let value = self.read_operand(mode);
        self.status.set(Flags::ZERO, self.register_a & value == 0);
        self.status.set(Flags::OVERFLOW, value & 0x40 != 0);
        self.status.set(Flags::NEGATIVE, value & 0x80 != 0);
    }

    fn jsr(&mut self, mode: AddressingMode) {
        let (target, _) = self.operand_address(mode);
        // Pushes the address of the last byte of the JSR
        self.stack_push_u16(self.program_counter.wrapping_add(1));
        self.set_program_counter(target);
    }

    fn rti(&mut self) {
        let flags = self.stack_pop();
        self.restore_status(flags);
        let address = self.stack_pop_u16();
        self.set_program_counter(address);
    }

    fn jam(&mut self) {
        self.jammed = true;
        // Park PC on the JAM opcode
        self.set_program_counter(self.program_counter.wrapping_sub(1));
        log::warn!("CPU jammed at ${:04X}", self.program_counter);
        trace_cpu_event!("JAM at ${:04X}", self.program_counter);
    }

    fn arr(&mut self, mode: AddressingMode) {
        // AND oper + ROR A, with C and V taken from bits 6 and 5 of the result
        let value = self.read_operand(mode) & self.register_a;
        let carry_in = self.status.contains(Flags::CARRY) as u8;
        let result = (value >> 1) | (carry_in << 7);
        self.set_register_a(result);

        let bit6 = (result >> 6) & 1;
        let bit5 = (result >> 5) & 1;
        self.status.set(Flags::CARRY, bit6 == 1);
        self.status.set(Flags::OVERFLOW, bit6 ^ bit5 == 1);
    }

    /// SHA/SHX/SHY/TAS store path
    ///
    /// The stored value is ANDed with the base address high byte plus one. When the
    /// index carries into the high byte, the stored value also replaces the high byte
    /// of the target address.
    fn unstable_store(&mut self, mode: AddressingMode, value: u8) {
        let pc = self.program_counter;
        let (base, index) = match mode {
            AddressingMode::AbsoluteX => (self.read_u16(pc), self.register_x),
            AddressingMode::AbsoluteY => (self.read_u16(pc), self.register_y),
            AddressingMode::IndirectY => {
                let pointer = self.read_byte(pc);
                (self.read_zero_page_u16(pointer), self.register_y)
            }
            _ => {
                self.store(mode, value);
                return;
            }
        };

        let address = base.wrapping_add(index as u16);
        let high_mask = ((base >> 8) as u8).wrapping_add(1);
        let result = value & high_mask;
        let target = if is_page_crossed(base, address) {
            ((result as u16) << 8) | (address & 0x00FF)
        } else {
            address
        };
        self.write_byte(target, result);
    }
}

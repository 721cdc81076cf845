#[cfg(test)]
mod test {
    use crate::nes::bus::simple_bus::SimpleBus;
    use crate::nes::cpu::opcodes::{Mnemonic, OPCODES, OPCODES_MAP};
    use crate::nes::cpu::{CPU, Flags};

    const PROGRAM_START: u16 = 0x0600;

    fn init_cpu(program: &[u8]) -> CPU<SimpleBus> {
        let mut bus = SimpleBus::new();
        bus.load(PROGRAM_START, program);
        bus.store_word(0xFFFC, PROGRAM_START);
        let mut cpu = CPU::new(bus);
        cpu.reset();
        cpu
    }

    /// Executes instructions until the JAM, returning the cycles spent on everything before it
    fn run_cycles(cpu: &mut CPU<SimpleBus>) -> u32 {
        let mut total = 0;
        loop {
            let cycles = cpu.step();
            if cpu.jammed {
                return total;
            }
            total += cycles;
        }
    }

    #[test]
    fn test_reset_state() {
        let mut bus = SimpleBus::new();
        bus.store_word(0xFFFC, 0xC123);
        let mut cpu = CPU::new(bus);
        cpu.register_a = 0x55;
        cpu.stack_pointer = 0x10;
        cpu.status = Flags::all();

        let cycles = cpu.reset();
        assert_eq!(cycles, 7);
        assert_eq!(cpu.cycles, 7);
        assert_eq!(cpu.register_a, 0);
        assert_eq!(cpu.register_x, 0);
        assert_eq!(cpu.register_y, 0);
        assert_eq!(cpu.stack_pointer, 0xFD);
        assert_eq!(cpu.status.bits(), 0x20);
        assert_eq!(cpu.program_counter, 0xC123);
    }

    #[test]
    fn test_every_opcode_is_defined() {
        assert_eq!(OPCODES.len(), 256);
        for code in 0..=0xFFu8 {
            assert!(OPCODES_MAP.contains_key(&code), "missing opcode {:02X}", code);
        }
        let official = OPCODES.iter().filter(|op| !op.unofficial).count();
        assert_eq!(official, 151);
    }

    #[test]
    fn test_0xa9_lda_immediate_load_data() {
        let program = &[
            0xA9, // LDA immediate
            0x32, //    with $32
            0x02, // JAM
        ];
        let mut cpu = init_cpu(program);
        let cycles = run_cycles(&mut cpu);
        assert_eq!(cpu.register_a, 0x32);
        assert_eq!(cycles, 2);
        assert!(!cpu.status.contains(Flags::ZERO));
        assert!(!cpu.status.contains(Flags::NEGATIVE));
    }

    #[test]
    fn test_0xa9_lda_zero_flag() {
        let program = &[0xA9, 0x00, 0x02];
        let mut cpu = init_cpu(program);
        cpu.run();
        assert!(cpu.status.contains(Flags::ZERO));
    }

    #[test]
    fn test_0xaa_tax_0xa8_tay() {
        let program = &[
            0xA9, // LDA immediate
            0x42, //    with $42
            0xAA, // TAX
            0xA8, // TAY
            0x02, // JAM
        ];
        let mut cpu = init_cpu(program);
        cpu.run();
        assert_eq!(cpu.register_x, 0x42);
        assert_eq!(cpu.register_y, 0x42);
    }

    #[test]
    fn test_0xb5_lda_zero_page_x_wraps() {
        let program = &[
            0xA2, // LDX immediate
            0x10, //    with $10
            0xB5, // LDA ZeroPageX
            0xF8, //    $F8 + $10 wraps to $08
            0x02, // JAM
        ];
        let mut cpu = init_cpu(program);
        cpu.bus.store_byte(0x08, 0x42);
        cpu.run();
        assert_eq!(cpu.register_a, 0x42);
    }

    #[test]
    fn test_0xad_lda_absolute_load_data() {
        let program = &[
            0xAD, // LDA absolute (4 cycles)
            0xEF, //
            0xBE, // little endian $BEEF
            0xAA, // TAX (2 cycles)
            0x02, // JAM
        ];
        let mut cpu = init_cpu(program);
        cpu.bus.store_byte(0xBEEF, 0x42);
        let cycles = run_cycles(&mut cpu);
        assert_eq!(cpu.register_a, 0x42);
        assert_eq!(cpu.register_x, 0x42);
        assert_eq!(cycles, 4 + 2);
    }

    #[test]
    fn test_absolute_x_page_cross_costs_a_cycle() {
        let program = &[
            0xA2, 0x01, // LDX #$01        (2)
            0xBD, 0xFF, 0x10, // LDA $10FF,X (4 + 1)
            0x9D, 0xFF, 0x10, // STA $10FF,X (5, no penalty)
            0x02,
        ];
        let mut cpu = init_cpu(program);
        cpu.bus.store_byte(0x1100, 0x99);
        let cycles = run_cycles(&mut cpu);
        assert_eq!(cpu.register_a, 0x99);
        assert_eq!(cycles, 2 + 5 + 5);
    }

    #[test]
    fn test_indirect_y_page_cross() {
        let program = &[
            0xA0, 0x10, // LDY #$10      (2)
            0xB1, 0x40, // LDA ($40),Y   (5 + 1)
            0x02,
        ];
        let mut cpu = init_cpu(program);
        cpu.bus.store_word(0x0040, 0x20F8);
        cpu.bus.store_byte(0x2108, 0x77);
        let cycles = run_cycles(&mut cpu);
        assert_eq!(cpu.register_a, 0x77);
        assert_eq!(cycles, 2 + 6);
    }

    #[test]
    fn test_indirect_x_pointer_wraps_in_zero_page() {
        let program = &[
            0xA2, 0x01, // LDX #$01
            0xA1, 0xFE, // LDA ($FE,X) -> pointer at $FF/$00
            0x02,
        ];
        let mut cpu = init_cpu(program);
        cpu.bus.store_byte(0x00FF, 0x34);
        cpu.bus.store_byte(0x0000, 0x12);
        cpu.bus.store_byte(0x1234, 0xAB);
        cpu.run();
        assert_eq!(cpu.register_a, 0xAB);
    }

    #[test]
    fn test_set_and_clear_flags() {
        let program = &[
            0x38, // SEC
            0x78, // SEI
            0xF8, // SED
            0x18, // CLC
            0x58, // CLI
            0xD8, // CLD
            0x02, // JAM
        ];
        let mut cpu = init_cpu(program);
        cpu.run();
        assert!(!cpu.status.contains(Flags::CARRY));
        assert!(!cpu.status.contains(Flags::INTERRUPT_DISABLE));
        assert!(!cpu.status.contains(Flags::DECIMAL_MODE));
    }

    #[test]
    fn test_adc_without_carry() {
        let program = &[
            0xA9, // LDA
            0x10, //   with 0x10
            0x69, // ADC
            0x20, //   with 0x20
            0x02, // JAM
        ];
        let mut cpu = init_cpu(program);
        cpu.run();
        assert_eq!(cpu.register_a, 0x30);
        assert!(!cpu.status.contains(Flags::CARRY));
        assert!(!cpu.status.contains(Flags::OVERFLOW));
    }

    #[test]
    fn test_adc_sets_overflow_and_carry() {
        let program = &[
            0xA9, 0x80, // LDA #$80
            0x69, 0x80, // ADC #$80 -> $00, C=1, V=1
            0x02,
        ];
        let mut cpu = init_cpu(program);
        cpu.run();
        assert_eq!(cpu.register_a, 0x00);
        assert!(cpu.status.contains(Flags::CARRY));
        assert!(cpu.status.contains(Flags::OVERFLOW));
        assert!(cpu.status.contains(Flags::ZERO));
    }

    #[test]
    fn test_adc_sbc_match_reference_for_all_inputs() {
        for carry in [false, true] {
            for a in 0..=0xFFu8 {
                let mut cpu = init_cpu(&[]);
                for value in 0..=0xFFu8 {
                    // ADC
                    cpu.register_a = a;
                    cpu.status.set(Flags::CARRY, carry);
                    cpu.bus.load(PROGRAM_START, &[0x69, value]);
                    cpu.program_counter = PROGRAM_START;
                    cpu.step();

                    let sum = a as u16 + value as u16 + carry as u16;
                    let expected = sum as u8;
                    let overflow = (a ^ expected) & (value ^ expected) & 0x80 != 0;
                    assert_eq!(cpu.register_a, expected);
                    assert_eq!(cpu.status.contains(Flags::CARRY), sum > 0xFF);
                    assert_eq!(cpu.status.contains(Flags::OVERFLOW), overflow);

                    // SBC
                    cpu.register_a = a;
                    cpu.status.set(Flags::CARRY, carry);
                    cpu.bus.load(PROGRAM_START, &[0xE9, value]);
                    cpu.program_counter = PROGRAM_START;
                    cpu.step();

                    let borrow = !carry as i16;
                    let diff = a as i16 - value as i16 - borrow;
                    let expected = diff as u8;
                    let signed = (a as i8) as i16 - (value as i8) as i16 - borrow;
                    assert_eq!(cpu.register_a, expected);
                    assert_eq!(cpu.status.contains(Flags::CARRY), diff >= 0);
                    assert_eq!(
                        cpu.status.contains(Flags::OVERFLOW),
                        !(-128..=127).contains(&signed)
                    );
                }
            }
        }
    }

    #[test]
    fn test_compare_sets_carry_when_greater_or_equal() {
        let program = &[
            0xA9, 0x40, // LDA #$40
            0xC9, 0x40, // CMP #$40
            0x02,
        ];
        let mut cpu = init_cpu(program);
        cpu.run();
        assert!(cpu.status.contains(Flags::CARRY));
        assert!(cpu.status.contains(Flags::ZERO));

        let program = &[
            0xA2, 0x10, // LDX #$10
            0xE0, 0x20, // CPX #$20
            0x02,
        ];
        let mut cpu = init_cpu(program);
        cpu.run();
        assert!(!cpu.status.contains(Flags::CARRY));
        assert!(cpu.status.contains(Flags::NEGATIVE));
    }

    #[test]
    fn test_counting_loop() {
        // Adds 3 to A ten times, then stores the result at $0200
        let program = &[
            0xA2, 0x0A, // LDX #10
            0xA9, 0x00, // LDA #0
            0x18, //       loop: CLC
            0x69, 0x03, //       ADC #3
            0xCA, //             DEX
            0xD0, 0xFA, //       BNE loop
            0x8D, 0x00, 0x02, // STA $0200
            0x02,
        ];
        let mut cpu = init_cpu(program);
        cpu.run();
        assert_eq!(cpu.bus.memory[0x0200], 0x1E);
        assert_eq!(cpu.register_x, 0);
    }

    #[test]
    fn test_branch_cycles() {
        // Not taken: 2
        let mut cpu = init_cpu(&[0xD0, 0x02, 0x02]);
        cpu.status.insert(Flags::ZERO);
        assert_eq!(cpu.step(), 2);

        // Taken, same page: 3
        let mut cpu = init_cpu(&[0xD0, 0x02, 0x02]);
        assert_eq!(cpu.step(), 3);
        assert_eq!(cpu.program_counter, PROGRAM_START + 4);

        // Taken across a page: 4
        let mut bus = SimpleBus::new();
        bus.load(0x06F0, &[0xF0, 0x20]);
        let mut cpu = CPU::new(bus);
        cpu.program_counter = 0x06F0;
        cpu.status.insert(Flags::ZERO);
        assert_eq!(cpu.step(), 4);
        assert_eq!(cpu.program_counter, 0x0712);
    }

    #[test]
    fn test_branch_backwards() {
        let mut bus = SimpleBus::new();
        bus.load(0x0610, &[0x90, 0xFC]); // BCC -4
        let mut cpu = CPU::new(bus);
        cpu.program_counter = 0x0610;
        assert_eq!(cpu.step(), 3);
        assert_eq!(cpu.program_counter, 0x060E);
    }

    #[test]
    fn test_jmp_indirect_page_wrap_bug() {
        let program = &[
            0x6C, 0xFF, 0x02, // JMP ($02FF)
        ];
        let mut cpu = init_cpu(program);
        cpu.bus.store_byte(0x02FF, 0x34);
        cpu.bus.store_byte(0x0200, 0x12); // high byte comes from $0200, not $0300
        cpu.bus.store_byte(0x0300, 0x56);
        assert_eq!(cpu.step(), 5);
        assert_eq!(cpu.program_counter, 0x1234);
    }

    #[test]
    fn test_jsr_rts() {
        let program = &[
            0x20, 0x09, 0x06, // JSR $0609
            0xA9, 0x11, //       LDA #$11
            0x02, //             JAM
            0x00, 0x00, 0x00, // padding
            0xA2, 0x22, //       $0609: LDX #$22
            0x60, //             RTS
        ];
        let mut cpu = init_cpu(program);
        assert_eq!(cpu.step(), 6);
        assert_eq!(cpu.stack_pointer, 0xFB);
        // Return address is the last byte of the JSR
        assert_eq!(cpu.bus.memory[0x01FD], 0x06);
        assert_eq!(cpu.bus.memory[0x01FC], 0x02);
        cpu.run();
        assert_eq!(cpu.register_a, 0x11);
        assert_eq!(cpu.register_x, 0x22);
        assert_eq!(cpu.stack_pointer, 0xFD);
    }

    #[test]
    fn test_php_plp() {
        let program = &[
            0x38, // SEC
            0x08, // PHP
            0x18, // CLC
            0x28, // PLP
            0x02,
        ];
        let mut cpu = init_cpu(program);
        cpu.run();
        // PHP pushes B and the unused bit set
        assert_eq!(cpu.bus.memory[0x01FD], 0x31);
        // PLP drops B, keeps the unused bit
        assert_eq!(cpu.status.bits(), 0x21);
    }

    #[test]
    fn test_pha_pla() {
        let program = &[
            0xA9, 0x80, // LDA #$80
            0x48, //       PHA
            0xA9, 0x00, // LDA #$00
            0x68, //       PLA
            0x02,
        ];
        let mut cpu = init_cpu(program);
        cpu.run();
        assert_eq!(cpu.register_a, 0x80);
        assert!(cpu.status.contains(Flags::NEGATIVE));
    }

    #[test]
    fn test_brk_and_rti() {
        let program = &[
            0x00, 0xFF, // BRK + padding byte
            0xA9, 0x05, // LDA #$05
            0x02,
        ];
        let mut cpu = init_cpu(program);
        cpu.bus.store_word(0xFFFE, 0x0700);
        cpu.bus.store_byte(0x0700, 0x40); // RTI

        assert_eq!(cpu.step(), 7);
        assert_eq!(cpu.program_counter, 0x0700);
        assert!(cpu.status.contains(Flags::INTERRUPT_DISABLE));
        // Pushed PC is BRK + 2, pushed status has B set
        assert_eq!(cpu.bus.memory[0x01FD], 0x06);
        assert_eq!(cpu.bus.memory[0x01FC], 0x02);
        assert_eq!(cpu.bus.memory[0x01FB] & 0x30, 0x30);

        assert_eq!(cpu.step(), 6);
        assert_eq!(cpu.program_counter, PROGRAM_START + 2);
        assert!(!cpu.status.contains(Flags::BREAK));
        assert!(cpu.status.contains(Flags::BREAK2));
        cpu.run();
        assert_eq!(cpu.register_a, 0x05);
    }

    #[test]
    fn test_nmi_is_serviced_before_next_instruction() {
        let mut cpu = init_cpu(&[0xEA, 0x02]);
        cpu.bus.store_word(0xFFFA, 0x0800);
        cpu.status.insert(Flags::INTERRUPT_DISABLE);
        cpu.trigger_nmi();

        assert_eq!(cpu.step(), 7);
        assert_eq!(cpu.program_counter, 0x0800);
        assert!(!cpu.nmi_pending());
        // B clear, unused set
        assert_eq!(cpu.bus.memory[0x01FB] & 0x30, 0x20);
        assert_eq!(cpu.bus.memory[0x01FC], 0x00);
        assert_eq!(cpu.bus.memory[0x01FD], 0x06);
    }

    #[test]
    fn test_irq_respects_interrupt_disable() {
        let mut cpu = init_cpu(&[0x78, 0x58, 0xEA, 0x02]); // SEI, CLI, NOP
        cpu.bus.store_word(0xFFFE, 0x0900);
        cpu.set_irq(true);

        // Held off until CLI clears I
        cpu.status.insert(Flags::INTERRUPT_DISABLE);
        assert_eq!(cpu.step(), 2); // SEI
        assert_eq!(cpu.step(), 2); // CLI
        assert_eq!(cpu.step(), 7); // IRQ taken
        assert_eq!(cpu.program_counter, 0x0900);
        assert!(cpu.status.contains(Flags::INTERRUPT_DISABLE));
    }

    #[test]
    fn test_nmi_wins_over_irq() {
        let mut cpu = init_cpu(&[0xEA, 0x02]);
        cpu.bus.store_word(0xFFFA, 0x0800);
        cpu.bus.store_word(0xFFFE, 0x0900);
        cpu.set_irq(true);
        cpu.trigger_nmi();

        cpu.step();
        assert_eq!(cpu.program_counter, 0x0800);
        // The IRQ is still held, but I is now set by the NMI entry
        assert!(cpu.irq_line());
        cpu.bus.store_byte(0x0800, 0x02);
        cpu.step();
        assert!(cpu.jammed);
    }

    #[test]
    fn test_jam_halts_until_reset() {
        let mut cpu = init_cpu(&[0x02, 0xA9, 0x01]);
        cpu.step();
        assert!(cpu.jammed);
        assert_eq!(cpu.program_counter, PROGRAM_START);
        cpu.trigger_nmi();
        for _ in 0..10 {
            assert_eq!(cpu.step(), 2);
        }
        assert_eq!(cpu.register_a, 0);

        cpu.reset();
        assert!(!cpu.jammed);
    }

    #[test]
    fn test_shift_accumulator_and_memory() {
        let program = &[
            0xA9, 0x81, // LDA #$81
            0x0A, //       ASL A -> $02, C=1
            0x66, 0x10, // ROR $10 -> C rotates into bit 7
            0x02,
        ];
        let mut cpu = init_cpu(program);
        cpu.bus.store_byte(0x10, 0x02);
        cpu.run();
        assert_eq!(cpu.register_a, 0x02);
        assert_eq!(cpu.bus.memory[0x10], 0x81);
        assert!(!cpu.status.contains(Flags::CARRY));
    }

    #[test]
    fn test_bit() {
        let program = &[0xA9, 0x01, 0x24, 0x10, 0x02];
        let mut cpu = init_cpu(program);
        cpu.bus.store_byte(0x10, 0xC0);
        cpu.run();
        assert!(cpu.status.contains(Flags::ZERO));
        assert!(cpu.status.contains(Flags::OVERFLOW));
        assert!(cpu.status.contains(Flags::NEGATIVE));
    }

    #[test]
    fn test_unofficial_lax_sax() {
        let program = &[
            0xA7, 0x10, // LAX $10
            0xA9, 0x0F, // LDA #$0F
            0x87, 0x11, // SAX $11
            0x02,
        ];
        let mut cpu = init_cpu(program);
        cpu.bus.store_byte(0x10, 0x3C);
        cpu.run();
        assert_eq!(cpu.register_x, 0x3C);
        assert_eq!(cpu.bus.memory[0x11], 0x0C);
    }

    #[test]
    fn test_unofficial_dcp_isc() {
        let program = &[
            0xA9, 0x05, // LDA #$05
            0xC7, 0x10, // DCP $10 -> mem=$05, CMP equal
            0x02,
        ];
        let mut cpu = init_cpu(program);
        cpu.bus.store_byte(0x10, 0x06);
        let cycles = run_cycles(&mut cpu);
        assert_eq!(cpu.bus.memory[0x10], 0x05);
        assert!(cpu.status.contains(Flags::ZERO));
        assert!(cpu.status.contains(Flags::CARRY));
        assert_eq!(cycles, 2 + 5);

        let program = &[
            0x38, //       SEC
            0xA9, 0x10, // LDA #$10
            0xE7, 0x10, // ISC $10 -> mem=$02, A=$0E
            0x02,
        ];
        let mut cpu = init_cpu(program);
        cpu.bus.store_byte(0x10, 0x01);
        cpu.run();
        assert_eq!(cpu.bus.memory[0x10], 0x02);
        assert_eq!(cpu.register_a, 0x0E);
    }

    #[test]
    fn test_unofficial_slo_rla_sre_rra() {
        let mut cpu = init_cpu(&[0xA9, 0x01, 0x07, 0x10, 0x02]); // SLO $10
        cpu.bus.store_byte(0x10, 0x81);
        cpu.run();
        assert_eq!(cpu.bus.memory[0x10], 0x02);
        assert_eq!(cpu.register_a, 0x03);
        assert!(cpu.status.contains(Flags::CARRY));

        let mut cpu = init_cpu(&[0xA9, 0xFF, 0x27, 0x10, 0x02]); // RLA $10
        cpu.bus.store_byte(0x10, 0x40);
        cpu.run();
        assert_eq!(cpu.register_a, 0x80);

        let mut cpu = init_cpu(&[0xA9, 0x0F, 0x47, 0x10, 0x02]); // SRE $10
        cpu.bus.store_byte(0x10, 0x03);
        cpu.run();
        assert_eq!(cpu.bus.memory[0x10], 0x01);
        assert_eq!(cpu.register_a, 0x0E);

        let mut cpu = init_cpu(&[0xA9, 0x10, 0x67, 0x10, 0x02]); // RRA $10
        cpu.bus.store_byte(0x10, 0x03);
        cpu.run();
        // ROR gives $01 with C=1, then ADC: $10 + $01 + 1
        assert_eq!(cpu.bus.memory[0x10], 0x01);
        assert_eq!(cpu.register_a, 0x12);
    }

    #[test]
    fn test_unofficial_immediate_group() {
        let mut cpu = init_cpu(&[0xA9, 0xF0, 0x0B, 0x80, 0x02]); // ANC #$80
        cpu.run();
        assert_eq!(cpu.register_a, 0x80);
        assert!(cpu.status.contains(Flags::CARRY));

        let mut cpu = init_cpu(&[0xA9, 0xFF, 0x4B, 0x03, 0x02]); // ALR #$03
        cpu.run();
        assert_eq!(cpu.register_a, 0x01);
        assert!(cpu.status.contains(Flags::CARRY));

        let mut cpu = init_cpu(&[0x38, 0xA9, 0xFF, 0x6B, 0xFF, 0x02]); // SEC; ARR #$FF
        cpu.run();
        assert_eq!(cpu.register_a, 0xFF);
        assert!(cpu.status.contains(Flags::CARRY));
        assert!(!cpu.status.contains(Flags::OVERFLOW));

        let mut cpu = init_cpu(&[0xA9, 0x0F, 0xA2, 0x3C, 0xCB, 0x02, 0x02]); // SBX #$02
        cpu.run();
        assert_eq!(cpu.register_x, 0x0A);
        assert!(cpu.status.contains(Flags::CARRY));

        let mut cpu = init_cpu(&[0x38, 0xA9, 0x10, 0xEB, 0x01, 0x02]); // USBC #$01
        cpu.run();
        assert_eq!(cpu.register_a, 0x0F);

        let mut cpu = init_cpu(&[0xA9, 0x00, 0xAB, 0x3C, 0x02]); // LXA #$3C
        cpu.run();
        assert_eq!(cpu.register_a, 0x2C);
        assert_eq!(cpu.register_x, 0x2C);
    }

    #[test]
    fn test_unofficial_las() {
        let mut cpu = init_cpu(&[0xA0, 0x00, 0xBB, 0x00, 0x03, 0x02]); // LAS $0300,Y
        cpu.bus.store_byte(0x0300, 0xF3);
        cpu.run();
        assert_eq!(cpu.register_a, 0xF1);
        assert_eq!(cpu.register_x, 0xF1);
        assert_eq!(cpu.stack_pointer, 0xF1);
    }

    #[test]
    fn test_unstable_store_masks_with_high_byte_plus_one() {
        // SHX $0300,Y without a page cross: X & ($03 + 1)
        let mut cpu = init_cpu(&[0xA2, 0xFF, 0xA0, 0x05, 0x9E, 0x00, 0x03, 0x02]);
        let cycles = run_cycles(&mut cpu);
        assert_eq!(cpu.bus.memory[0x0305], 0x04);
        assert_eq!(cycles, 2 + 2 + 5);
    }

    #[test]
    fn test_unstable_store_page_cross_corrupts_high_byte() {
        // SHY $02F0,X with X=$20 crosses into $0310. Value = Y & $03 = $01,
        // which also becomes the target's high byte.
        let mut cpu = init_cpu(&[0xA0, 0x0D, 0xA2, 0x20, 0x9C, 0xF0, 0x02, 0x02]);
        cpu.run();
        assert_eq!(cpu.bus.memory[0x0110], 0x01);
        assert_eq!(cpu.bus.memory[0x0310], 0x00);
    }

    #[test]
    fn test_tas_sets_stack_pointer() {
        let mut cpu = init_cpu(&[0xA9, 0xF3, 0xA2, 0x3F, 0xA0, 0x00, 0x9B, 0x00, 0x04, 0x02]);
        cpu.run();
        assert_eq!(cpu.stack_pointer, 0x33);
        assert_eq!(cpu.bus.memory[0x0400], 0x33 & 0x05);
    }

    #[test]
    fn test_unofficial_nops_consume_operands() {
        let program = &[
            0x1A, //             NOP implied (2)
            0x80, 0xFF, //       NOP #imm (2)
            0x04, 0x10, //       NOP zp (3)
            0x0C, 0x00, 0x02, // NOP abs (4)
            0xA2, 0x01, //       LDX #1 (2)
            0x1C, 0xFF, 0x02, // NOP abs,X crossing (4 + 1)
            0xA9, 0x07, //       LDA #7 (2)
            0x02,
        ];
        let mut cpu = init_cpu(program);
        let cycles = run_cycles(&mut cpu);
        assert_eq!(cpu.register_a, 7);
        assert_eq!(cycles, 2 + 2 + 3 + 4 + 2 + 5 + 2);
    }

    #[test]
    fn test_rmw_has_no_page_cross_penalty() {
        let program = &[
            0xA2, 0x01, //       LDX #1 (2)
            0xFE, 0xFF, 0x02, // INC $02FF,X (7)
            0x02,
        ];
        let mut cpu = init_cpu(program);
        let cycles = run_cycles(&mut cpu);
        assert_eq!(cpu.bus.memory[0x0300], 1);
        assert_eq!(cycles, 2 + 7);
    }

    #[test]
    fn test_trace_names_mark_unofficial() {
        assert_eq!(OPCODES_MAP[&0xA9].trace_name(), "LDA");
        assert_eq!(OPCODES_MAP[&0xA7].trace_name(), "*LAX");
        assert_eq!(OPCODES_MAP[&0xEB].mnemonic, Mnemonic::USBC);
    }
}

// See: https://www.nesdev.org/wiki/Controller_reading

use super::NesController;
use bitflags::bitflags;

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct JoypadButton: u8 {
        const BUTTON_A = 0b0000_0001;
        const BUTTON_B = 0b0000_0010;
        const SELECT   = 0b0000_0100;
        const START    = 0b0000_1000;
        const UP       = 0b0001_0000;
        const DOWN     = 0b0010_0000;
        const LEFT     = 0b0100_0000;
        const RIGHT    = 0b1000_0000;
    }
}

pub struct Joypad {
    buttons: JoypadButton,
    shift: u8,
    strobe: bool,
}

impl Default for Joypad {
    fn default() -> Self {
        Self::new()
    }
}

impl NesController for Joypad {
    fn read(&mut self) -> u8 {
        if self.strobe {
            self.shift = self.buttons.bits();
        }
        let bit = self.shift & 1;
        // After eight reads an official pad keeps returning 1
        self.shift = (self.shift >> 1) | 0x80;
        bit
    }

    fn write(&mut self, data: u8) {
        self.strobe = data & 1 == 1;
        if self.strobe {
            self.shift = self.buttons.bits();
        }
    }
}

impl Joypad {
    pub fn new() -> Self {
        Self {
            buttons: JoypadButton::empty(),
            shift: 0,
            strobe: false,
        }
    }

    pub fn set_button_status(&mut self, button: JoypadButton, state: bool) {
        self.buttons.set(button, state);
    }

    /// Replaces the whole button state, one bit per button
    pub fn set_state(&mut self, state: u8) {
        self.buttons = JoypadButton::from_bits_truncate(state);
    }

    pub fn buttons(&self) -> JoypadButton {
        self.buttons
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn latch(joypad: &mut Joypad) {
        joypad.write(1);
        joypad.write(0);
    }

    #[test]
    fn test_joypad_default_state() {
        let joypad = Joypad::new();
        assert_eq!(joypad.buttons().bits(), 0);
        assert!(!joypad.strobe);
    }

    #[test]
    fn test_button_press_and_release() {
        let mut joypad = Joypad::new();

        // Press A and Start
        joypad.set_button_status(JoypadButton::BUTTON_A, true);
        joypad.set_button_status(JoypadButton::START, true);

        assert!(joypad.buttons().contains(JoypadButton::BUTTON_A));
        assert!(joypad.buttons().contains(JoypadButton::START));
        assert!(!joypad.buttons().contains(JoypadButton::BUTTON_B));

        // Release A
        joypad.set_button_status(JoypadButton::BUTTON_A, false);
        assert!(!joypad.buttons().contains(JoypadButton::BUTTON_A));
    }

    #[test]
    fn test_serial_read_order() {
        let mut joypad = Joypad::new();
        joypad.set_state(0b1010_0101); // A, SELECT, DOWN, RIGHT
        latch(&mut joypad);

        let bits: Vec<u8> = (0..8).map(|_| joypad.read()).collect();
        assert_eq!(bits, vec![1, 0, 1, 0, 0, 1, 0, 1]);
    }

    #[test]
    fn test_reads_after_eighth_return_one() {
        let mut joypad = Joypad::new();
        latch(&mut joypad);
        for _ in 0..8 {
            assert_eq!(joypad.read(), 0);
        }
        assert_eq!(joypad.read(), 1);
        assert_eq!(joypad.read(), 1);
    }

    #[test]
    fn test_strobe_high_keeps_returning_a() {
        let mut joypad = Joypad::new();
        joypad.set_state(JoypadButton::BUTTON_A.bits());
        joypad.write(1);
        for _ in 0..4 {
            assert_eq!(joypad.read(), 1);
        }
    }

    #[test]
    fn test_state_change_after_latch_is_not_seen() {
        let mut joypad = Joypad::new();
        joypad.set_state(0);
        latch(&mut joypad);
        joypad.set_state(0xFF);
        assert_eq!(joypad.read(), 0);

        latch(&mut joypad);
        assert_eq!(joypad.read(), 1);
    }
}

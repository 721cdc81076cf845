use std::fmt;

/// Reading of the status byte a test ROM leaves behind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    /// Failing test number reported by the ROM
    Fail(u8),
    /// The ROM never wrote a recognisable status
    Unknown(u8),
}

impl Verdict {
    pub fn from_status(status: u8) -> Self {
        match status {
            1 => Verdict::Pass,
            0 => Verdict::Unknown(status),
            n => Verdict::Fail(n),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Verdict::Pass => 0,
            Verdict::Fail(_) => 1,
            Verdict::Unknown(_) => 2,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Pass => write!(f, "PASS"),
            Verdict::Fail(n) => write!(f, "FAIL #{n}"),
            Verdict::Unknown(status) => write!(f, "UNKNOWN (result=0x{status:02X})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_byte_mapping() {
        assert_eq!(Verdict::from_status(1), Verdict::Pass);
        assert_eq!(Verdict::from_status(0), Verdict::Unknown(0));
        assert_eq!(Verdict::from_status(2), Verdict::Fail(2));
        assert_eq!(Verdict::from_status(0xFF), Verdict::Fail(0xFF));
    }

    #[test]
    fn test_exit_codes_and_labels() {
        assert_eq!(Verdict::Pass.exit_code(), 0);
        assert_eq!(Verdict::Fail(3).exit_code(), 1);
        assert_eq!(Verdict::Unknown(0).exit_code(), 2);

        assert_eq!(Verdict::Pass.to_string(), "PASS");
        assert_eq!(Verdict::Fail(3).to_string(), "FAIL #3");
        assert_eq!(Verdict::Unknown(0).to_string(), "UNKNOWN (result=0x00)");
    }
}

use std::path::PathBuf;
use thiserror::Error;

pub const USAGE: &str = "\
Usage: rom-test-runner <rom> (--frames <n> [--buffer <n>] | --ticks <n>) [options]

  -f, --frames <n>         Frames to run
  -b, --buffer <n>         Extra frames on top of --frames (default: 0)
  -t, --ticks <n>          PPU dots to run instead of whole frames
  -r, --result-addr <a>    CPU address holding the test status (default: 0x00F8)
  -v, --verbose            Print run statistics

Numbers may be decimal or 0x-prefixed hex.";

/// Where test ROMs built for this runner leave their status byte
pub const DEFAULT_RESULT_ADDR: u16 = 0x00F8;

/// How long to let the console run before sampling the result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Budget {
    Frames(u64),
    Dots(u64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub rom_path: PathBuf,
    pub budget: Budget,
    pub result_addr: u16,
    pub verbose: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    #[error("missing ROM path")]
    MissingRom,
    #[error("missing value for {0}")]
    MissingValue(String),
    #[error("invalid number for {flag}: {value}")]
    InvalidNumber { flag: String, value: String },
    #[error("unexpected argument: {0}")]
    Unexpected(String),
    #[error("provide either --frames or --ticks")]
    MissingBudget,
    #[error("--frames and --ticks are mutually exclusive")]
    ConflictingBudget,
    #[error("--buffer only applies to --frames")]
    BufferWithoutFrames,
    #[error("result address out of range: 0x{0:X}")]
    ResultAddrOutOfRange(u64),
}

pub fn parse<I>(args: I) -> Result<Config, ArgsError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut rom_path = None;
    let mut frames = None;
    let mut ticks = None;
    let mut buffer = None;
    let mut result_addr = DEFAULT_RESULT_ADDR as u64;
    let mut verbose = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-f" | "--frames" => frames = Some(number(&arg, args.next())?),
            "-t" | "--ticks" => ticks = Some(number(&arg, args.next())?),
            "-b" | "--buffer" => buffer = Some(number(&arg, args.next())?),
            "-r" | "--result-addr" => result_addr = number(&arg, args.next())?,
            "-v" | "--verbose" => verbose = true,
            _ if arg.starts_with('-') => return Err(ArgsError::Unexpected(arg)),
            _ if rom_path.is_none() => rom_path = Some(PathBuf::from(arg)),
            _ => return Err(ArgsError::Unexpected(arg)),
        }
    }

    let budget = match (frames, ticks, buffer) {
        (Some(_), Some(_), _) => return Err(ArgsError::ConflictingBudget),
        (Some(frames), None, buffer) => Budget::Frames(frames + buffer.unwrap_or(0)),
        (None, Some(_), Some(_)) => return Err(ArgsError::BufferWithoutFrames),
        (None, Some(dots), None) => Budget::Dots(dots),
        (None, None, _) => return Err(ArgsError::MissingBudget),
    };

    Ok(Config {
        rom_path: rom_path.ok_or(ArgsError::MissingRom)?,
        budget,
        result_addr: u16::try_from(result_addr)
            .map_err(|_| ArgsError::ResultAddrOutOfRange(result_addr))?,
        verbose,
    })
}

fn number(flag: &str, value: Option<String>) -> Result<u64, ArgsError> {
    let value = value.ok_or_else(|| ArgsError::MissingValue(flag.to_string()))?;
    let parsed = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => value.parse(),
    };
    parsed.map_err(|_| ArgsError::InvalidNumber {
        flag: flag.to_string(),
        value,
    })
}

use crate::args::Budget;
use crate::verdict::Verdict;
use nes_core::NES;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub dots: u64,
    pub cpu_cycles: u64,
    pub status: u8,
}

impl RunSummary {
    pub fn verdict(&self) -> Verdict {
        Verdict::from_status(self.status)
    }
}

/// Runs `nes` for `budget`, then samples the status byte at `result_addr`
pub fn run(nes: &mut NES, budget: Budget, result_addr: u16) -> RunSummary {
    let frames = match budget {
        Budget::Frames(frames) => {
            for _ in 0..frames {
                nes.run_frame();
            }
            frames
        }
        Budget::Dots(dots) => nes.run_dots(dots),
    };
    log::debug!("ran {} frames, {} dots", frames, nes.ppu_dots());

    RunSummary {
        frames,
        dots: nes.ppu_dots(),
        cpu_cycles: nes.cpu.cycles,
        status: nes.peek(result_addr),
    }
}

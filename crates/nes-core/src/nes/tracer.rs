use once_cell::sync::Lazy;
use std::collections::VecDeque;
use std::sync::Mutex;

#[doc(hidden)]
pub mod macros;
pub mod traceable;
pub use traceable::Traceable;

const DEFAULT_CAPACITY: usize = 5_000_000;

pub static TRACER: Lazy<Mutex<Tracer>> = Lazy::new(|| Mutex::new(Tracer::new(DEFAULT_CAPACITY)));

/// Bounded history of trace lines; the oldest line is dropped once full
pub struct Tracer {
    history: VecDeque<String>,
    capacity: usize,
}

impl Tracer {
    pub fn new(capacity: usize) -> Self {
        Self {
            history: VecDeque::with_capacity(capacity.min(4096)),
            capacity,
        }
    }

    pub fn write(&mut self, msg: String) {
        if self.capacity == 0 {
            return;
        }
        if self.history.len() == self.capacity {
            self.history.pop_front();
        }
        self.history.push_back(msg);
    }

    pub fn print(&self) {
        for (i, line) in self.history.iter().enumerate() {
            println!("{:04}: {}", i, line);
        }
    }

    pub fn log(&mut self, thing: &dyn Traceable) {
        if let Some(trace) = thing.trace() {
            self.write(trace);
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.history.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe(u8);

    impl Traceable for Probe {
        fn trace_name(&self) -> &'static str {
            "PROBE"
        }

        fn trace_state(&self) -> Option<String> {
            (self.0 != 0).then(|| format!("v={}", self.0))
        }
    }

    #[test]
    fn test_ring_buffer_drops_oldest() {
        let mut tracer = Tracer::new(3);
        for i in 0..5 {
            tracer.write(format!("line {i}"));
        }
        let lines: Vec<&str> = tracer.lines().collect();
        assert_eq!(lines, vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn test_log_skips_empty_state() {
        let mut tracer = Tracer::new(8);
        tracer.log(&Probe(0));
        assert!(tracer.is_empty());
        tracer.log(&Probe(7));
        assert_eq!(tracer.lines().next(), Some("PROBE v=7"));
        tracer.clear();
        assert_eq!(tracer.len(), 0);
    }
}

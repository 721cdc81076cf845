pub trait Traceable {
    /// Short component label (e.g. "CPU", "PPU")
    fn trace_name(&self) -> &'static str;

    /// Component state worth recording, or `None` to skip this sample
    fn trace_state(&self) -> Option<String>;

    fn trace(&self) -> Option<String> {
        self.trace_state()
            .map(|state| format!("{} {}", self.trace_name(), state))
    }
}

// src/progress.rs
/// Progress reporting for scrapes. Frontends (GUI/CLI) implement this to
/// surface status to users.
pub trait Progress {
    /// Called at the start with the number of steps, if known.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One step finished.
    fn item_done(&mut self, _label: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// Prints steps to stderr.
pub struct StderrProgress {
    done: usize,
    total: usize,
}

impl StderrProgress {
    pub fn new() -> Self {
        Self { done: 0, total: 0 }
    }
}

impl Default for StderrProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, label: &str) {
        self.done += 1;
        if self.total > 0 {
            eprintln!("[{}/{}] {label}", self.done, self.total);
        } else {
            eprintln!("{label}");
        }
    }
}

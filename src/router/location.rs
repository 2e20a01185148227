use parking_lot::Mutex;

/// Host-supplied notion of "where are we" and "go there".
///
/// The router never reads or changes the location on its own; it only asks
/// through this trait when `Router::current` or `Router::navigate` is called.
pub trait Location {
    fn current_path(&self) -> String;
    fn navigate(&self, path: &str);
}

/// In-process location with a history stack, for hosts without a browser.
#[derive(Debug)]
pub struct MemoryLocation {
    history: Mutex<Vec<String>>,
}

impl MemoryLocation {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            history: Mutex::new(vec![initial.into()]),
        }
    }

    pub fn history(&self) -> Vec<String> {
        self.history.lock().clone()
    }

    /// Pops the most recent entry. The initial entry is never removed.
    pub fn back(&self) -> Option<String> {
        let mut history = self.history.lock();
        if history.len() > 1 {
            history.pop();
            history.last().cloned()
        } else {
            None
        }
    }
}

impl Default for MemoryLocation {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Location for MemoryLocation {
    fn current_path(&self) -> String {
        self.history.lock().last().cloned().unwrap_or_else(|| "/".to_string())
    }

    fn navigate(&self, path: &str) {
        self.history.lock().push(path.to_string());
    }
}

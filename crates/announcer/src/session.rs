//! Loop session state

/// Enabled flag and last-announced label for one session.
///
/// Owned by the loop; every mutation happens on the loop task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    enabled: bool,
    last_announced: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.enabled
    }

    /// Enter the running state. Returns false if already running.
    pub fn start(&mut self) -> bool {
        let changed = !self.enabled;
        self.enabled = true;
        changed
    }

    /// Enter the idle state and forget the last announcement.
    /// Returns false if already idle.
    pub fn stop(&mut self) -> bool {
        let changed = self.enabled;
        self.enabled = false;
        self.last_announced = None;
        changed
    }

    pub fn last_announced(&self) -> Option<&str> {
        self.last_announced.as_deref()
    }

    /// Nothing in view: the next object is announced whatever it is
    pub fn clear_announced(&mut self) {
        self.last_announced = None;
    }

    /// Whether `class` differs from what was last spoken
    pub fn should_announce(&self, class: &str) -> bool {
        self.last_announced.as_deref() != Some(class)
    }

    pub fn mark_announced(&mut self, class: &str) {
        self.last_announced = Some(class.to_string());
    }
}

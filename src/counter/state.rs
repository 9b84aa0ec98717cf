use crate::config;
use crate::counter::easing;

/// What the caller asks a counter to show. Never changes after mount.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterSpec {
    pub target: u64,
    /// Zero or negative resolves straight to `target` once visible.
    pub duration_ms: i64,
    pub suffix: String,
}

impl CounterSpec {
    pub fn new(target: u64) -> Self {
        Self {
            target,
            duration_ms: config::DEFAULT_COUNTER_DURATION_MS,
            suffix: String::new(),
        }
    }

    pub fn with_duration(mut self, duration_ms: i64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn render(&self, value: u64) -> String {
        format!("{}{}", value, self.suffix)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CounterEvent {
    /// The element entered the expanded viewport.
    Intersected,
    /// A display refresh at the given monotonic time, in milliseconds.
    Frame(f64),
    /// The hosting element is going away.
    Unmount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Animating,
    Settled,
    Released,
}

/// Run state of one counter.
///
/// Transitions are pure: `apply` returns the next state and leaves `self`
/// untouched, so the driver can compare before and after to decide whether to
/// redraw or schedule another frame.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterRunState {
    pub visible: bool,
    pub start_timestamp: Option<f64>,
    pub displayed_value: u64,
    pub running: bool,
    pub alive: bool,
}

impl Default for CounterRunState {
    fn default() -> Self {
        Self {
            visible: false,
            start_timestamp: None,
            displayed_value: 0,
            running: false,
            alive: true,
        }
    }
}

impl CounterRunState {
    pub fn phase(&self) -> Phase {
        if !self.alive {
            Phase::Released
        } else if self.running {
            Phase::Animating
        } else if self.visible {
            Phase::Settled
        } else {
            Phase::Idle
        }
    }

    pub fn apply(&self, spec: &CounterSpec, event: CounterEvent) -> CounterRunState {
        if !self.alive {
            return self.clone();
        }

        match event {
            CounterEvent::Intersected => {
                if self.visible {
                    return self.clone();
                }
                if spec.duration_ms <= 0 {
                    return CounterRunState {
                        visible: true,
                        start_timestamp: None,
                        displayed_value: spec.target,
                        running: false,
                        alive: true,
                    };
                }
                CounterRunState {
                    visible: true,
                    start_timestamp: None,
                    displayed_value: 0,
                    running: true,
                    alive: true,
                }
            }
            CounterEvent::Frame(now) => {
                if !self.running {
                    return self.clone();
                }
                let start = self.start_timestamp.unwrap_or(now);
                let progress = easing::progress(now - start, spec.duration_ms);
                if progress >= 1.0 {
                    CounterRunState {
                        start_timestamp: Some(start),
                        displayed_value: spec.target,
                        running: false,
                        ..self.clone()
                    }
                } else {
                    CounterRunState {
                        start_timestamp: Some(start),
                        displayed_value: easing::value_at(progress, spec.target),
                        ..self.clone()
                    }
                }
            }
            CounterEvent::Unmount => CounterRunState {
                running: false,
                alive: false,
                ..self.clone()
            },
        }
    }
}

// Where the animation phase gets its time from.
// The real program uses a monotonic clock; tests pin the time.

#[cfg(test)]
use std::cell::Cell;
use std::time::Instant;

pub trait Clock {
    /// Milliseconds since some fixed origin. Only `mod 1000` matters to the scene.
    fn elapsed_ms(&self) -> u64;
}

/// Wall-clock time since the program started.
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { start: Instant::now() }
    }
}

impl Clock for SystemClock {
    fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

/// A clock that only moves when told to.
#[cfg(test)]
pub struct FixedClock {
    ms: Cell<u64>,
}

#[cfg(test)]
impl FixedClock {
    pub fn new(ms: u64) -> Self {
        Self { ms: Cell::new(ms) }
    }

    pub fn set(&self, ms: u64) {
        self.ms.set(ms);
    }
}

#[cfg(test)]
impl Clock for FixedClock {
    fn elapsed_ms(&self) -> u64 {
        self.ms.get()
    }
}

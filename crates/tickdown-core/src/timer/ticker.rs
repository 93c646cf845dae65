use std::cell::Cell;
use std::rc::Rc;

/// Handle to whatever delivers one tick per second while the timer runs.
///
/// The engine owns starting and stopping the source around its transitions;
/// the source (or the driver holding it) is responsible for actually calling
/// [`TimerEngine::tick`](super::TimerEngine::tick) while active. A tick that
/// arrives late, after the source was stopped, is harmless: `tick()` checks
/// status before applying any effect.
pub trait TickSource {
    fn start(&mut self);
    fn stop(&mut self);
}

/// Flag-only tick source for drivers that run their own delivery loop.
///
/// Cloning shares the flag, so a driver (or a test) can keep a handle and
/// observe whether the engine currently expects ticks.
#[derive(Debug, Clone, Default)]
pub struct ManualTicker {
    active: Rc<Cell<bool>>,
}

impl ManualTicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }
}

impl TickSource for ManualTicker {
    fn start(&mut self) {
        self.active.set(true);
    }

    fn stop(&mut self) {
        self.active.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_active_flag() {
        let mut a = ManualTicker::new();
        let b = a.clone();
        assert!(!b.is_active());
        a.start();
        assert!(b.is_active());
        a.stop();
        assert!(!b.is_active());
    }
}

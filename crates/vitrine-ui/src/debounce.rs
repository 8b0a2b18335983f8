//! Trailing-edge debounce over browser timers.

use std::cell::Cell;

use wasm_bindgen::{JsCast, prelude::Closure};

/// Scheduling seam: browser timers in production, a manual queue in tests.
pub trait Scheduler {
    /// A scheduled action. Dropping the entry cancels the timer and
    /// releases the action.
    type Pending;

    /// Schedule `action` after `delay_ms`; `None` when scheduling failed.
    fn schedule(&self, delay_ms: i32, action: Box<dyn FnOnce()>) -> Option<Self::Pending>;
}

/// `setTimeout`-backed scheduler.
#[derive(Debug, Default)]
pub struct BrowserScheduler;

/// An armed browser timer. Owns the callback closure so a cancelled timer
/// frees it along with its captures; dropping clears the timeout, which is
/// a no-op once it has fired.
pub struct BrowserTimer {
    handle: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Drop for BrowserTimer {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            window.clear_timeout_with_handle(self.handle);
        }
    }
}

impl Scheduler for BrowserScheduler {
    type Pending = BrowserTimer;

    fn schedule(&self, delay_ms: i32, action: Box<dyn FnOnce()>) -> Option<BrowserTimer> {
        let window = web_sys::window()?;
        let fire = Closure::once(action);

        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            fire.as_ref().unchecked_ref(),
            delay_ms,
        ) {
            Ok(handle) => Some(BrowserTimer {
                handle,
                _closure: fire,
            }),
            Err(err) => {
                log::warn!("debounce timer failed: {err:?}");
                None
            }
        }
    }
}

/// Trailing-edge debouncer: every call cancels the previously scheduled
/// action and restarts the timer, so only the last call within the window
/// runs.
pub struct Debounce<S: Scheduler = BrowserScheduler> {
    scheduler: S,
    delay_ms: i32,
    pending: Cell<Option<S::Pending>>,
}

impl Debounce {
    /// Create a browser-timer debouncer with the given delay.
    pub fn new(delay_ms: i32) -> Self {
        Self::with_scheduler(BrowserScheduler, delay_ms)
    }
}

impl<S: Scheduler> Debounce<S> {
    /// Create a debouncer over a specific scheduler.
    pub fn with_scheduler(scheduler: S, delay_ms: i32) -> Self {
        Self {
            scheduler,
            delay_ms,
            pending: Cell::new(None),
        }
    }

    /// Schedule `action`, cancelling any previously scheduled call. The
    /// superseded entry is dropped, which frees its captured action.
    pub fn call(&self, action: impl FnOnce() + 'static) {
        self.pending.set(None);
        self.pending
            .set(self.scheduler.schedule(self.delay_ms, Box::new(action)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    /// Single-slot fake timer: `armed` holds the action the timer would
    /// run; `cancelled` counts entries dropped before firing.
    #[derive(Default)]
    struct TimerLog {
        cancelled: Cell<u32>,
        armed: RefCell<Option<Box<dyn FnOnce()>>>,
    }

    struct ManualScheduler(Rc<TimerLog>);
    struct ManualPending(Rc<TimerLog>);

    impl Drop for ManualPending {
        fn drop(&mut self) {
            if self.0.armed.borrow_mut().take().is_some() {
                self.0.cancelled.set(self.0.cancelled.get() + 1);
            }
        }
    }

    impl Scheduler for ManualScheduler {
        type Pending = ManualPending;

        fn schedule(&self, _delay_ms: i32, action: Box<dyn FnOnce()>) -> Option<ManualPending> {
            *self.0.armed.borrow_mut() = Some(action);
            Some(ManualPending(Rc::clone(&self.0)))
        }
    }

    fn fire(log: &TimerLog) {
        let action = log.armed.borrow_mut().take();
        if let Some(action) = action {
            action();
        }
    }

    #[test]
    fn test_only_last_call_fires() {
        let log = Rc::new(TimerLog::default());
        let debounce = Debounce::with_scheduler(ManualScheduler(Rc::clone(&log)), 250);
        let ran = Rc::new(RefCell::new(Vec::new()));

        for value in ["a", "b", "c"] {
            let ran = Rc::clone(&ran);
            debounce.call(move || ran.borrow_mut().push(value));
        }
        fire(&log);

        assert_eq!(*ran.borrow(), vec!["c"]);
        assert_eq!(log.cancelled.get(), 2);
    }

    #[test]
    fn test_superseded_action_released() {
        struct Capture(Rc<Cell<u32>>);
        impl Drop for Capture {
            fn drop(&mut self) {
                self.0.set(self.0.get() + 1);
            }
        }

        let log = Rc::new(TimerLog::default());
        let debounce = Debounce::with_scheduler(ManualScheduler(Rc::clone(&log)), 250);
        let dropped = Rc::new(Cell::new(0u32));

        let first = Capture(Rc::clone(&dropped));
        debounce.call(move || {
            let _keep = &first;
        });
        assert_eq!(dropped.get(), 0);

        // Superseding must free the first action's captures, not keep them
        // alive behind a cancelled timer.
        debounce.call(|| {});
        assert_eq!(dropped.get(), 1);
    }

    #[test]
    fn test_drop_cancels_outstanding_timer() {
        let log = Rc::new(TimerLog::default());
        let debounce = Debounce::with_scheduler(ManualScheduler(Rc::clone(&log)), 250);
        debounce.call(|| {});
        drop(debounce);

        assert_eq!(log.cancelled.get(), 1);
        assert!(log.armed.borrow().is_none());
    }
}

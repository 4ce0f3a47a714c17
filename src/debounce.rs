//! Trailing-edge debounce.
//!
//! Every call to [`Debounced::invoke`] schedules the wrapped function after the
//! wait window and drops the previously scheduled timer. Dropping a handle
//! must cancel its timer, which is how `gloo_timers::callback::Timeout`
//! behaves, so only the last call in a burst runs, with its own arguments.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Something that can run a callback after a delay.
pub trait TimerHost {
    /// Dropping the handle cancels the timer if it has not fired.
    type Handle;

    fn schedule(&self, wait_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Browser timers backed by `setTimeout`.
#[cfg(feature = "browser")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimers;

#[cfg(feature = "browser")]
impl TimerHost for BrowserTimers {
    type Handle = gloo_timers::callback::Timeout;

    fn schedule(&self, wait_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle {
        gloo_timers::callback::Timeout::new(wait_ms, callback)
    }
}

pub struct Debounced<A, H: TimerHost> {
    host: H,
    wait_ms: u32,
    func: Rc<dyn Fn(A)>,
    timer: RefCell<Option<H::Handle>>,
    pending: Rc<Cell<bool>>,
}

impl<A: 'static, H: TimerHost> Debounced<A, H> {
    pub fn new(host: H, wait_ms: u32, func: impl Fn(A) + 'static) -> Self {
        Self { host, wait_ms, func: Rc::new(func), timer: RefCell::new(None), pending: Rc::new(Cell::new(false)) }
    }

    pub fn wait_ms(&self) -> u32 {
        self.wait_ms
    }

    /// Restart the wait window; `args` replace those of any pending call.
    pub fn invoke(&self, args: A) {
        let func = Rc::clone(&self.func);
        let pending = Rc::clone(&self.pending);
        // A fired handle stays in the slot until the next call replaces it.
        let handle = self.host.schedule(
            self.wait_ms,
            Box::new(move || {
                pending.set(false);
                func(args);
            }),
        );
        self.pending.set(true);
        *self.timer.borrow_mut() = Some(handle);
    }

    /// Drop the pending call, if any.
    pub fn cancel(&self) {
        *self.timer.borrow_mut() = None;
        self.pending.set(false);
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }
}

//! Debounce and Throttle
//!
//! `Debouncer` keeps at most one pending call; a new call replaces it and
//! restarts the window. `ThrottleGate` lets one call through per interval
//! and drops the rest.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// Pure timing decision for throttling
#[derive(Debug, Clone, Copy)]
pub struct ThrottleGate {
    interval_ms: f64,
    last_run: Option<f64>,
}

impl ThrottleGate {
    pub fn new(interval_ms: u32) -> Self {
        Self { interval_ms: f64::from(interval_ms), last_run: None }
    }

    /// `true` if a call at `now_ms` may run; records the run
    pub fn try_pass(&mut self, now_ms: f64) -> bool {
        match self.last_run {
            Some(last) if now_ms - last < self.interval_ms => false,
            _ => {
                self.last_run = Some(now_ms);
                true
            }
        }
    }
}

/// Wrap `f` so it runs at most once per `interval_ms` of wall-clock time
pub fn throttle<F>(interval_ms: u32, f: F) -> impl Fn()
where
    F: Fn() + 'static,
{
    let gate = RefCell::new(ThrottleGate::new(interval_ms));
    move || {
        if gate.borrow_mut().try_pass(js_sys::Date::now()) {
            f();
        }
    }
}

/// Pure bookkeeping for a trailing-edge debounce: one pending call at most,
/// identified by a ticket. A newer trigger supersedes older tickets and
/// moves the deadline.
#[derive(Debug, Clone, Copy)]
pub struct DebounceGate {
    delay_ms: f64,
    ticket: u64,
    deadline: Option<f64>,
}

impl DebounceGate {
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms: f64::from(delay_ms), ticket: 0, deadline: None }
    }

    /// Arm the gate at `now_ms`; returns the ticket the deferred call must present
    pub fn trigger(&mut self, now_ms: f64) -> u64 {
        self.ticket = self.ticket.wrapping_add(1);
        self.deadline = Some(now_ms + self.delay_ms);
        self.ticket
    }

    /// When the pending call is due, if one is pending
    pub fn deadline(&self) -> Option<f64> {
        self.deadline
    }

    /// `true` once for the latest ticket; stale or cancelled tickets never run
    pub fn fire(&mut self, ticket: u64) -> bool {
        if self.deadline.is_some() && ticket == self.ticket {
            self.deadline = None;
            true
        } else {
            false
        }
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

/// Trailing-edge debouncer driven by `DebounceGate`
pub struct Debouncer {
    delay_ms: u32,
    gate: Rc<RefCell<DebounceGate>>,
    pending: RefCell<Option<Timeout>>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            gate: Rc::new(RefCell::new(DebounceGate::new(delay_ms))),
            pending: RefCell::new(None),
        }
    }

    /// Schedule `f`, superseding any call still waiting
    pub fn call<F>(&self, f: F)
    where
        F: FnOnce() + 'static,
    {
        let ticket = self.gate.borrow_mut().trigger(js_sys::Date::now());
        let gate = Rc::clone(&self.gate);
        let timeout = Timeout::new(self.delay_ms, move || {
            let due = gate.borrow_mut().fire(ticket);
            if due {
                f();
            }
        });
        // Dropping the previous Timeout clears it
        self.pending.replace(Some(timeout));
    }

    pub fn cancel(&self) {
        self.gate.borrow_mut().cancel();
        self.pending.replace(None);
    }
}

//! Autoplay timer: a self-rescheduling one-shot delay on a background thread.
//!
//! The thread never touches the cursor. It only emits [`Tick`] events over a
//! channel; the engine applies them against its live state on the host
//! thread. Cadence drifts by whatever time each tick takes to process, since
//! the next delay is armed only after the previous one fires.

use std::sync::mpsc;
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::debug;

/// Marker for one autonomous advance request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Tick;

/// Signal the timer thread checks between delays.
#[derive(Clone)]
struct StopSignal {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl StopSignal {
    fn new() -> (Self, StopTrigger) {
        let inner = Arc::new((Mutex::new(false), Condvar::new()));
        (
            Self { inner: inner.clone() },
            StopTrigger { inner },
        )
    }

    /// Wait for the stop trigger or for `duration`, whichever comes first.
    /// Returns `true` if stopped. Loops on the condvar to absorb spurious
    /// wakeups.
    fn wait_timeout(&self, duration: Duration) -> bool {
        let (lock, cvar) = &*self.inner;
        let deadline = std::time::Instant::now() + duration;
        let mut stopped = lock.lock().unwrap();
        while !*stopped {
            let now = std::time::Instant::now();
            if now >= deadline {
                return false;
            }
            let (guard, _timeout) = cvar.wait_timeout(stopped, deadline - now).unwrap();
            stopped = guard;
        }
        true
    }
}

/// Wakes the timer thread and tells it to exit. Fired at most once.
struct StopTrigger {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl StopTrigger {
    fn fire(self) {
        let (lock, cvar) = &*self.inner;
        *lock.lock().unwrap() = true;
        cvar.notify_all();
    }
}

/// Handle to the running timer. Dropping or stopping it cancels the chain and
/// joins the thread; the stop trigger is released exactly once.
pub(crate) struct Autoplay {
    ticks: mpsc::Receiver<Tick>,
    stop: Option<StopTrigger>,
    handle: Option<JoinHandle<()>>,
}

impl Autoplay {
    /// Arm the timer. The first tick arrives one `interval` after this call.
    pub(crate) fn start(interval: Duration) -> Self {
        let (sender, ticks) = mpsc::channel();
        let (signal, trigger) = StopSignal::new();
        let handle = thread::spawn(move || {
            loop {
                if signal.wait_timeout(interval) {
                    break;
                }
                // Receiver gone means the engine was torn down without a
                // stop; exit rather than queue ticks nobody will drain.
                if sender.send(Tick).is_err() {
                    break;
                }
            }
            debug!("autoplay timer exited");
        });
        Self {
            ticks,
            stop: Some(trigger),
            handle: Some(handle),
        }
    }

    /// Drain every tick that has fired since the last call.
    pub(crate) fn pending(&self) -> usize {
        self.ticks.try_iter().count()
    }

    pub(crate) fn is_stopped(&self) -> bool {
        self.stop.is_none()
    }

    /// Cancel the chain and wait for the thread to exit. Idempotent.
    pub(crate) fn stop(&mut self) {
        if let Some(trigger) = self.stop.take() {
            trigger.fire();
            if let Some(handle) = self.handle.take() {
                let _ = handle.join();
            }
        }
    }
}

impl Drop for Autoplay {
    fn drop(&mut self) {
        self.stop();
    }
}

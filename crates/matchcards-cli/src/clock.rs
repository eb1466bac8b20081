use std::sync::mpsc::Sender;
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::debug;

use crate::input::Event;

/// Background thread sending [`Event::Tick`] at a fixed interval.
///
/// Waits on a condvar rather than sleeping, so `stop` returns as soon as
/// the thread notices the flag instead of after a full interval.
pub struct Ticker {
    stopped: Arc<(Mutex<bool>, Condvar)>,
    handle: JoinHandle<()>,
}

impl Ticker {
    /// Start ticking until stopped or until the receiver is gone.
    pub fn spawn(events: Sender<Event>, interval: Duration) -> Self {
        let stopped = Arc::new((Mutex::new(false), Condvar::new()));
        let flag = Arc::clone(&stopped);

        let handle = thread::spawn(move || {
            debug!("Ticker started ({:?})", interval);
            while !wait_for_stop(&flag, interval) {
                if events.send(Event::Tick).is_err() {
                    break;
                }
            }
            debug!("Ticker stopped");
        });

        Self { stopped, handle }
    }

    /// Stop the thread and wait for it to exit.
    pub fn stop(self) {
        let (lock, condvar) = &*self.stopped;
        match lock.lock() {
            Ok(mut stopped) => *stopped = true,
            Err(poisoned) => *poisoned.into_inner() = true,
        }
        condvar.notify_all();
        let _ = self.handle.join();
    }
}

/// Block for one interval. Returns `true` once the ticker has been stopped.
fn wait_for_stop(flag: &(Mutex<bool>, Condvar), interval: Duration) -> bool {
    let (lock, condvar) = flag;
    let Ok(guard) = lock.lock() else {
        return true;
    };
    match condvar.wait_timeout_while(guard, interval, |stopped| !*stopped) {
        Ok((stopped, _)) => *stopped,
        Err(_) => true,
    }
}

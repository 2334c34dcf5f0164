use std::thread;
use std::time::{Duration, Instant};

/// Polls `condition` until it holds or `timeout` elapses. Returns whether it
/// held.
pub(crate) fn wait_for(timeout: Duration, mut condition: impl FnMut() -> bool) -> bool {
    let start = Instant::now();
    loop {
        if condition() {
            return true;
        }
        if start.elapsed() >= timeout {
            return false;
        }
        thread::sleep(Duration::from_millis(2));
    }
}

//! Desktop frame pacing.

use std::time::Duration;

/// Sleeps out the rest of a frame. Spins for precision while the window has
/// focus and yields to the OS scheduler otherwise.
pub fn sleep(duration: Duration, focused: bool) {
    if focused {
        spin_sleep::sleep(duration);
    } else {
        std::thread::sleep(duration);
    }
}

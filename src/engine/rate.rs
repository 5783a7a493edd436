// Tue Jan 13 2026 - Alex

use parking_lot::Mutex;
use std::thread;
use std::time::{Duration, Instant};

/// Shared start-slot clock. Every caller of [`RateLimiter::acquire`] gets a
/// slot exactly one interval after the previous one and sleeps until it.
pub struct RateLimiter {
    interval: Duration,
    next_slot: Mutex<Instant>,
}

impl RateLimiter {
    /// `None` for a rate of zero, which means unlimited.
    pub fn per_second(rate: u32) -> Option<Self> {
        if rate == 0 {
            return None;
        }

        Some(Self {
            interval: Duration::from_secs(1) / rate,
            next_slot: Mutex::new(Instant::now()),
        })
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    fn reserve(&self) -> Instant {
        let mut next = self.next_slot.lock();
        let slot = (*next).max(Instant::now());
        *next = slot + self.interval;
        slot
    }

    pub fn acquire(&self) -> Instant {
        let slot = self.reserve();
        let now = Instant::now();
        if slot > now {
            thread::sleep(slot - now);
        }
        slot
    }
}

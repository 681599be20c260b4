use crate::application::ports::time::Clock;
use chrono::{DateTime, Utc};

/// Wall-clock implementation; tests substitute a fixed clock.
#[derive(Default, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

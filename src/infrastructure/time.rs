use crate::application::ports::time::Clock;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Wall clock used to stamp queued deletion requests.
#[derive(Default, Clone, Copy)]
pub struct SystemClock;

impl SystemClock {
    pub fn shared() -> Arc<dyn Clock> {
        Arc::new(Self)
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

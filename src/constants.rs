use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

/// Process start, forced in `main` and reported as uptime by `/health`.
pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

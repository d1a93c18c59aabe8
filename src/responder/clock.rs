use std::fmt::Write;

use chrono::{Local, NaiveTime};

/// Source of the wall-clock time quoted by the time-query reply.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveTime;
}

/// Reads the host's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// Renders `time` with a strftime pattern. `None` when the pattern is invalid
/// or needs fields a bare time of day lacks (a date, a timezone).
pub fn render_time(time: NaiveTime, pattern: &str) -> Option<String> {
    let mut rendered = String::new();
    write!(rendered, "{}", time.format(pattern)).ok()?;
    Some(rendered)
}

/// Always reports the same time.
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveTime);

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> NaiveTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quarter_past_two() -> NaiveTime {
        NaiveTime::from_hms_opt(14, 15, 0).unwrap()
    }

    #[test]
    fn renders_time_of_day_fields() {
        assert_eq!(render_time(quarter_past_two(), "%I:%M %p").as_deref(), Some("02:15 PM"));
        assert_eq!(render_time(quarter_past_two(), "%H:%M").as_deref(), Some("14:15"));
    }

    #[test]
    fn patterns_needing_a_date_or_zone_do_not_render() {
        for pattern in ["%Y-%m-%d %H:%M", "%d", "%H:%M %Z", "%z", "%H:%"] {
            assert_eq!(render_time(quarter_past_two(), pattern), None, "{pattern}");
        }
    }
}

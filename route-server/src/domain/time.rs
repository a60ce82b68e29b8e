//! Time-of-day handling.
//!
//! Legs are scheduled as wall-clock times carrying a fixed UTC offset but no
//! calendar date. Every difference between two times wraps once at 24 hours,
//! so a leg departing 23:50 and arriving 00:10 lasts 20 minutes.

use chrono::{Duration, FixedOffset, NaiveTime, Offset, Timelike, Utc};
use std::fmt;

/// Seconds in one wall-clock cycle.
const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A wall-clock time with a fixed UTC offset and no date.
///
/// Two times are equal only if both the local time and the offset match;
/// arithmetic between times is always done on the UTC instant within the day.
///
/// # Examples
///
/// ```
/// use route_server::domain::TimeOfDay;
///
/// let dep = TimeOfDay::parse("23:50").unwrap();
/// let arr = TimeOfDay::parse("00:10").unwrap();
/// assert_eq!(dep.wrapped_until(arr), chrono::Duration::minutes(20));
///
/// let local = TimeOfDay::parse("14:30+02:00").unwrap();
/// assert_eq!(local.to_string(), "14:30+02:00");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeOfDay {
    time: NaiveTime,
    offset: FixedOffset,
}

impl TimeOfDay {
    /// Create a time from its local wall-clock value and offset.
    pub fn new(time: NaiveTime, offset: FixedOffset) -> Self {
        Self { time, offset }
    }

    /// Create a UTC time from hours and minutes.
    pub fn utc_hm(hour: u32, minute: u32) -> Result<Self, TimeError> {
        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or_else(|| TimeError::new("hour must be 0-23 and minute 0-59"))?;
        Ok(Self::new(time, Utc.fix()))
    }

    /// Parse `HH:MM`, `HH:MMZ`, or `HH:MM±hh:mm`.
    ///
    /// A bare `HH:MM` is taken to be UTC.
    ///
    /// # Examples
    ///
    /// ```
    /// use route_server::domain::TimeOfDay;
    ///
    /// assert!(TimeOfDay::parse("00:00").is_ok());
    /// assert!(TimeOfDay::parse("23:59Z").is_ok());
    /// assert!(TimeOfDay::parse("08:15-05:00").is_ok());
    ///
    /// assert!(TimeOfDay::parse("2400").is_err());
    /// assert!(TimeOfDay::parse("24:00").is_err());
    /// assert!(TimeOfDay::parse("10:00+2").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let s = s.trim();
        if s.len() < 5 || !s.is_char_boundary(5) {
            return Err(TimeError::new("expected HH:MM format"));
        }
        let (clock, zone) = s.split_at(5);

        let (hour, minute) = parse_hh_mm(clock)?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }
        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or_else(|| TimeError::new("invalid time"))?;

        let offset = match zone {
            "" | "Z" | "z" => Utc.fix(),
            _ => parse_offset(zone)?,
        };

        Ok(Self { time, offset })
    }

    /// Returns the local wall-clock time.
    pub fn time(&self) -> NaiveTime {
        self.time
    }

    /// Returns the UTC offset.
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Returns the local hour (0-23).
    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    /// Returns the local minute (0-59).
    pub fn minute(&self) -> u32 {
        self.time.minute()
    }

    /// Seconds since UTC midnight, in `[0, 86400)`.
    pub fn utc_seconds(&self) -> i64 {
        let local = i64::from(self.time.num_seconds_from_midnight());
        (local - i64::from(self.offset.local_minus_utc())).rem_euclid(SECONDS_PER_DAY)
    }

    /// Time elapsed from `self` until the next occurrence of `later`.
    ///
    /// The result is always in `[0, 24h)`: a negative difference is taken to
    /// mean `later` falls on the following day.
    pub fn wrapped_until(&self, later: TimeOfDay) -> Duration {
        Duration::seconds((later.utc_seconds() - self.utc_seconds()).rem_euclid(SECONDS_PER_DAY))
    }
}

impl fmt::Debug for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TimeOfDay({:02}:{:02} {})",
            self.hour(),
            self.minute(),
            self.offset
        )
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())?;
        if self.offset.local_minus_utc() != 0 {
            write!(f, "{}", self.offset)?;
        }
        Ok(())
    }
}

/// Parse `HH:MM` into hour and minute without range checks.
fn parse_hh_mm(s: &str) -> Result<(u32, u32), TimeError> {
    let bytes = s.as_bytes();
    if bytes.len() != 5 {
        return Err(TimeError::new("expected HH:MM format"));
    }
    if bytes[2] != b':' {
        return Err(TimeError::new("expected colon at position 2"));
    }
    let hour = parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
    let minute =
        parse_two_digits(&bytes[3..5]).ok_or_else(|| TimeError::new("invalid minute digits"))?;
    Ok((hour, minute))
}

/// Parse a `+hh:mm` or `-hh:mm` offset.
fn parse_offset(s: &str) -> Result<FixedOffset, TimeError> {
    let sign = match s.as_bytes().first() {
        Some(b'+') => 1,
        Some(b'-') => -1,
        _ => return Err(TimeError::new("offset must start with + or -")),
    };
    let (hours, minutes) = parse_hh_mm(&s[1..])?;
    if minutes > 59 {
        return Err(TimeError::new("offset minutes must be 0-59"));
    }
    let seconds = sign * (hours as i32 * 3600 + minutes as i32 * 60);
    FixedOffset::east_opt(seconds).ok_or_else(|| TimeError::new("offset out of range"))
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}

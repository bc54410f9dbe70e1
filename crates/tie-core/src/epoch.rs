//! Helpers for attribute values that contain epoch times.

use crate::error::{Result, TieError};
use chrono::{DateTime, Local, TimeZone};

/// Convert an epoch-seconds value to a point in time in the local time zone.
pub fn to_local_time(epoch_seconds: i64) -> Result<DateTime<Local>> {
    Local
        .timestamp_opt(epoch_seconds, 0)
        .single()
        .ok_or_else(|| TieError::Codec(format!("epoch time {epoch_seconds} out of range")))
}

/// Convert an epoch-seconds value to a `YYYY-MM-DD HH:MM:SS` local-time
/// string with zero-padded two-digit fields.
pub fn to_local_time_string(epoch_seconds: i64) -> Result<String> {
    Ok(to_local_time(epoch_seconds)?
        .format("%Y-%m-%d %H:%M:%S")
        .to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_to_local_time() {
        let time = to_local_time(1481301038).unwrap();
        assert_eq!(time.timestamp(), 1481301038);
        assert!(time.year() >= 2016);
        assert!(time.second() < 60);
    }

    #[test]
    fn test_to_local_time_string_format() {
        let formatted = to_local_time_string(1481301038).unwrap();
        // YYYY-MM-DD HH:MM:SS with zero-padded fields
        assert_eq!(formatted.len(), 19);
        let bytes = formatted.as_bytes();
        assert_eq!(bytes[4], b'-');
        assert_eq!(bytes[7], b'-');
        assert_eq!(bytes[10], b' ');
        assert_eq!(bytes[13], b':');
        assert_eq!(bytes[16], b':');
        for &i in &[0, 1, 2, 3, 5, 6, 8, 9, 11, 12, 14, 15, 17, 18] {
            assert!(bytes[i].is_ascii_digit(), "non-digit in '{formatted}'");
        }
    }

    #[test]
    fn test_single_digit_fields_are_padded() {
        // 2017-04-01 (UTC); month renders as "04", never "4". Formatting in
        // local time can shift the day but not drop the padding.
        let formatted = to_local_time_string(1491004800).unwrap();
        assert_eq!(formatted.len(), 19);
    }
}

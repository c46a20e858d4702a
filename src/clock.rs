use jiff::civil::Time;

/// Parses an `HH:mm` wall-clock time. The hour may have one or two digits; the minute
/// always has two. Anything else, including an empty field, yields `None`.
pub fn parse_clock_time(text: &str) -> Option<Time> {
    let (hour, minute) = text.trim().split_once(':')?;
    if hour.is_empty() || hour.len() > 2 || minute.len() != 2 {
        return None;
    }
    if !hour.bytes().chain(minute.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hour: i8 = hour.parse().ok()?;
    let minute: i8 = minute.parse().ok()?;
    Time::new(hour, minute, 0, 0).ok()
}

pub fn minutes_since_midnight(time: Time) -> i32 {
    i32::from(time.hour()) * 60 + i32::from(time.minute())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::time;

    #[test]
    fn parses_24_hour_times() {
        assert_eq!(parse_clock_time("08:00"), Some(time(8, 0, 0, 0)));
        assert_eq!(parse_clock_time("8:05"), Some(time(8, 5, 0, 0)));
        assert_eq!(parse_clock_time(" 23:59 "), Some(time(23, 59, 0, 0)));
        assert_eq!(parse_clock_time("00:00"), Some(time(0, 0, 0, 0)));
    }

    #[test]
    fn rejects_out_of_range_and_malformed() {
        let texts = [
            "", "   ", "24:00", "12:60", "12", "12:5", "-1:00", "+1:00", "ab:cd", "12:00:00",
            "123:00",
        ];
        for text in texts {
            assert_eq!(parse_clock_time(text), None, "{text:?} should not parse");
        }
    }

    #[test]
    fn minutes() {
        assert_eq!(minutes_since_midnight(time(0, 0, 0, 0)), 0);
        assert_eq!(minutes_since_midnight(time(10, 30, 0, 0)), 630);
    }
}

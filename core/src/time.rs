use chrono::{Datelike, Days, Local, Months, NaiveDate, Weekday};
use anyhow::{anyhow, Context, Result};

/// Parses a date relative to the local today.
pub fn parse_human_date(input: &str) -> Result<NaiveDate> {
    parse_human_date_from(input, Local::now().date_naive())
}

pub fn parse_human_date_from(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return Err(anyhow!("Empty date string"));
    }

    // 1. Reserved keywords
    match input.to_lowercase().as_str() {
        "today" | "tod" => return Ok(today),
        "tomorrow" | "tom" => return shift_days(today, 1),
        "yesterday" | "yes" => return shift_days(today, -1),
        "eow" => {
            // End of week (Sunday)
            let days_to_sunday = 6 - today.weekday().num_days_from_monday() as i64;
            return shift_days(today, days_to_sunday);
        }
        "eom" => {
            let first = today.with_day(1).ok_or_else(|| anyhow!("Invalid month for {}", today))?;
            return first
                .checked_add_months(Months::new(1))
                .and_then(|next| next.pred_opt())
                .ok_or_else(|| anyhow!("End of month out of range for {}", today));
        }
        "boq" => {
            let quarter_start = today.month0() / 3 * 3 + 1;
            return NaiveDate::from_ymd_opt(today.year(), quarter_start, 1)
                .ok_or_else(|| anyhow!("Beginning of quarter out of range for {}", today));
        }
        _ => {}
    }

    // 2. Relative format (+Nd, -Nw, +Nm)
    if let Some(sign) = input.chars().next().filter(|c| *c == '+' || *c == '-') {
        let body = &input[1..];
        if let Some((unit_at, _)) = body.char_indices().last().filter(|(i, _)| *i > 0) {
            let (num_str, unit) = body.split_at(unit_at);
            let count: i64 = num_str
                .parse()
                .with_context(|| format!("Invalid relative format: '{}'", input))?;
            let count = if sign == '-' { -count } else { count };

            return match unit {
                "d" => shift_days(today, count),
                "w" => shift_days(today, count.saturating_mul(7)),
                "m" => shift_months(today, count),
                _ => Err(anyhow!("Unknown unit in relative time: {}", unit)),
            };
        }
    }

    // 3. Weekday format (fri, 2:fri)
    if let Some((count, day_str)) = parse_weekday_token(input) {
        if let Ok(target_weekday) = parse_weekday_str(day_str) {
            let mut days_needed = target_weekday.num_days_from_monday() as i64
                - today.weekday().num_days_from_monday() as i64;
            if days_needed <= 0 {
                days_needed += 7;
            }
            // count = 1 is the next one, count = 2 the one after that
            days_needed = days_needed.saturating_add((count - 1).saturating_mul(7));

            return shift_days(today, days_needed);
        }
    }

    // 4. Fallback to the standard format
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| anyhow!("Could not parse date: {}", input))
}

fn shift_days(date: NaiveDate, days: i64) -> Result<NaiveDate> {
    let shifted = if days >= 0 {
        date.checked_add_days(Days::new(days as u64))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    shifted.ok_or_else(|| anyhow!("Date out of range: {} {:+} days", date, days))
}

// Clamps to the last day of the target month (Jan 31 + 1m -> Feb 28).
fn shift_months(date: NaiveDate, months: i64) -> Result<NaiveDate> {
    let amount = u32::try_from(months.unsigned_abs())
        .map_err(|_| anyhow!("Month offset too large: {}", months))?;
    let shifted = if months >= 0 {
        date.checked_add_months(Months::new(amount))
    } else {
        date.checked_sub_months(Months::new(amount))
    };
    shifted.ok_or_else(|| anyhow!("Date out of range: {} {:+} months", date, months))
}

fn parse_weekday_token(input: &str) -> Option<(i64, &str)> {
    if input.contains(':') {
        let parts: Vec<&str> = input.split(':').collect();
        if parts.len() == 2 {
            if let Ok(count) = parts[0].parse::<i64>() {
                if count >= 1 {
                    return Some((count, parts[1]));
                }
            }
        }
    } else {
        // Just "fri" means 1:fri
        return Some((1, input));
    }
    None
}

fn parse_weekday_str(s: &str) -> Result<Weekday> {
    match s.to_lowercase().as_str() {
        "mon" | "monday" => Ok(Weekday::Mon),
        "tue" | "tuesday" => Ok(Weekday::Tue),
        "wed" | "wednesday" => Ok(Weekday::Wed),
        "thu" | "thursday" => Ok(Weekday::Thu),
        "fri" | "friday" => Ok(Weekday::Fri),
        "sat" | "saturday" => Ok(Weekday::Sat),
        "sun" | "sunday" => Ok(Weekday::Sun),
        _ => Err(anyhow!("Invalid weekday")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // Wednesday
    fn anchor() -> NaiveDate {
        ymd(2023, 11, 29)
    }

    #[test]
    fn test_parse_weekday_token() {
        assert_eq!(parse_weekday_token("fri"), Some((1, "fri")));
        assert_eq!(parse_weekday_token("2:fri"), Some((2, "fri")));
        assert_eq!(parse_weekday_token("10:mon"), Some((10, "mon")));
        assert_eq!(parse_weekday_token("0:mon"), None);
        assert_eq!(parse_weekday_token("invalid"), Some((1, "invalid"))); // will fail later at weekday parse
    }

    #[test]
    fn test_keywords() {
        let today = anchor();
        assert_eq!(parse_human_date_from("today", today).unwrap(), today);
        assert_eq!(parse_human_date_from("TOM", today).unwrap(), ymd(2023, 11, 30));
        assert_eq!(parse_human_date_from("yesterday", today).unwrap(), ymd(2023, 11, 28));
        assert_eq!(parse_human_date_from("eow", today).unwrap(), ymd(2023, 12, 3));
        assert_eq!(parse_human_date_from("eom", today).unwrap(), ymd(2023, 11, 30));
        assert_eq!(parse_human_date_from("boq", today).unwrap(), ymd(2023, 10, 1));
        assert_eq!(parse_human_date_from("eom", ymd(2024, 2, 10)).unwrap(), ymd(2024, 2, 29));
        assert_eq!(parse_human_date_from("eow", ymd(2023, 12, 3)).unwrap(), ymd(2023, 12, 3));
    }

    #[test]
    fn test_relative() {
        let today = anchor();
        assert_eq!(parse_human_date_from("+3d", today).unwrap(), ymd(2023, 12, 2));
        assert_eq!(parse_human_date_from("-1w", today).unwrap(), ymd(2023, 11, 22));
        assert_eq!(parse_human_date_from("+2w", today).unwrap(), ymd(2023, 12, 13));
        assert_eq!(parse_human_date_from("+1m", ymd(2024, 1, 31)).unwrap(), ymd(2024, 2, 29));
        assert_eq!(parse_human_date_from("-12m", today).unwrap(), ymd(2022, 11, 29));
        assert!(parse_human_date_from("+3y", today).is_err());
        assert!(parse_human_date_from("+xd", today).is_err());
        assert!(parse_human_date_from("+3日", today).is_err());
    }

    #[test]
    fn test_weekdays() {
        let today = anchor();
        assert_eq!(parse_human_date_from("fri", today).unwrap(), ymd(2023, 12, 1));
        assert_eq!(parse_human_date_from("2:fri", today).unwrap(), ymd(2023, 12, 8));
        // Same weekday means next week
        assert_eq!(parse_human_date_from("wed", today).unwrap(), ymd(2023, 12, 6));
        assert_eq!(parse_human_date_from("Monday", today).unwrap(), ymd(2023, 12, 4));
    }

    #[test]
    fn test_standard_format_and_errors() {
        let today = anchor();
        assert_eq!(parse_human_date_from("2024-02-29", today).unwrap(), ymd(2024, 2, 29));
        assert!(parse_human_date_from("2023-02-29", today).is_err());
        assert!(parse_human_date_from("", today).is_err());
        assert!(parse_human_date_from("someday", today).is_err());
    }
}

//! Date criteria. Bounds are exclusive and compared against the input
//! interpreted as a date, before the final cast.

use chrono::{DateTime, SecondsFormat, Utc};
use optimal_core::invariant;

use crate::kind::to_date;
use crate::state::State;
use crate::validator::Validator;

fn iso(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn date_check<F>(message: String, accept: F) -> Option<Validator>
where
    F: Fn(DateTime<Utc>) -> bool + Send + Sync + 'static,
{
    Some(Validator::check(move |value, path, _| {
        let ok = to_date(value).map_or(true, &accept);
        invariant(ok, path, message.as_str())
    }))
}

/// Strictly earlier than `date`.
pub fn before(_state: &mut State, date: DateTime<Utc>) -> Option<Validator> {
    date_check(format!("Date must come before {}.", iso(&date)), move |d| d < date)
}

/// Strictly later than `date`.
pub fn after(_state: &mut State, date: DateTime<Utc>) -> Option<Validator> {
    date_check(format!("Date must come after {}.", iso(&date)), move |d| d > date)
}

/// Strictly between `start` and `end`.
///
/// # Panics
///
/// When `start` is after `end`.
#[track_caller]
pub fn between(_state: &mut State, start: DateTime<Utc>, end: DateTime<Utc>) -> Option<Validator> {
    assert!(start <= end, "between() requires start <= end");
    date_check(
        format!("Date must be between {} and {}.", iso(&start), iso(&end)),
        move |d| d > start && d < end,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::Kind;
    use crate::scope::Scope;
    use chrono::TimeZone;
    use optimal_core::{Path, Value};

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, d, 0, 0, 0).unwrap()
    }

    fn check(validator: Option<Validator>, value: Value) -> Result<(), String> {
        validator
            .unwrap()
            .run(&value, &Path::root(), Scope::strict(), &State::new(Kind::Date))
            .map(|_| ())
            .map_err(|e| e.reason().to_string())
    }

    #[test]
    fn before_and_after() {
        let mut state = State::new(Kind::Date);
        assert!(check(before(&mut state, day(10)), Value::Date(day(5))).is_ok());
        assert_eq!(
            check(before(&mut state, day(10)), Value::Date(day(12))),
            Err("Date must come before 2024-01-10T00:00:00.000Z.".to_string())
        );
        assert!(check(after(&mut state, day(10)), Value::from("2024-01-12T00:00:00Z")).is_ok());
    }

    #[test]
    fn between_accepts_timestamps() {
        let mut state = State::new(Kind::Date);
        let millis = day(5).timestamp_millis() as f64;
        assert!(check(between(&mut state, day(1), day(10)), Value::Number(millis)).is_ok());
        assert!(check(between(&mut state, day(1), day(3)), Value::Number(millis)).is_err());
    }
}

//! String, number, boolean and date schemas.

use chrono::{DateTime, Utc};
use optimal_core::Value;
use regex::Regex;

use super::schema_type;
use crate::criteria::{boolean as bool_criteria, date as date_criteria, number as num, string as text};
use crate::kind::Kind;

schema_type!(
    /// Strings. Defaults to `""`.
    StringSchema
);

/// A string schema.
pub fn string() -> StringSchema {
    StringSchema::from_kind(Kind::String)
}

impl StringSchema {
    /// Replace the default.
    pub fn default(self, value: impl Into<String>) -> Self {
        self.with_default(Value::String(value.into()))
    }

    /// Must contain `token`.
    pub fn contains(mut self, token: impl Into<String>) -> Self {
        let step = text::contains(self.core.state_mut(), token);
        self.push(step)
    }

    /// Must match `pattern`.
    pub fn matches(mut self, pattern: Regex) -> Self {
        let step = text::matches(self.core.state_mut(), pattern, None);
        self.push(step)
    }

    /// Must match `pattern`, failing with `message`.
    pub fn matches_with(mut self, pattern: Regex, message: impl Into<String>) -> Self {
        let step = text::matches(self.core.state_mut(), pattern, Some(message.into()));
        self.push(step)
    }

    /// Must be `camelCase`.
    pub fn camel_case(mut self) -> Self {
        let step = text::camel_case(self.core.state_mut());
        self.push(step)
    }

    /// Must be `kebab-case`.
    pub fn kebab_case(mut self) -> Self {
        let step = text::kebab_case(self.core.state_mut());
        self.push(step)
    }

    /// Must be `PascalCase`.
    pub fn pascal_case(mut self) -> Self {
        let step = text::pascal_case(self.core.state_mut());
        self.push(step)
    }

    /// Must be `snake_case`.
    pub fn snake_case(mut self) -> Self {
        let step = text::snake_case(self.core.state_mut());
        self.push(step)
    }

    /// Must not contain uppercase characters.
    pub fn lower_case(mut self) -> Self {
        let step = text::lower_case(self.core.state_mut());
        self.push(step)
    }

    /// Must not contain lowercase characters.
    pub fn upper_case(mut self) -> Self {
        let step = text::upper_case(self.core.state_mut());
        self.push(step)
    }

    /// Must not be empty.
    pub fn not_empty(mut self) -> Self {
        let step = text::not_empty(self.core.state_mut());
        self.push(step)
    }

    /// Must be one of `list`.
    ///
    /// # Panics
    ///
    /// When `list` is empty.
    #[track_caller]
    pub fn one_of<I, S>(mut self, list: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let step = text::one_of(self.core.state_mut(), list);
        self.push(step)
    }

    /// Must be exactly `size` characters long.
    pub fn size_of(mut self, size: usize) -> Self {
        let step = text::size_of(self.core.state_mut(), size);
        self.push(step)
    }
}

schema_type!(
    /// Finite numbers. Defaults to `0`.
    NumberSchema
);

/// A number schema.
pub fn number() -> NumberSchema {
    NumberSchema::from_kind(Kind::Number)
}

impl NumberSchema {
    /// Replace the default.
    pub fn default(self, value: impl Into<f64>) -> Self {
        self.with_default(Value::Number(value.into()))
    }

    /// Strictly between `min` and `max`.
    ///
    /// # Panics
    ///
    /// When `min > max`.
    #[track_caller]
    pub fn between(mut self, min: impl Into<f64>, max: impl Into<f64>) -> Self {
        let step = num::between(self.core.state_mut(), min.into(), max.into());
        self.push(step)
    }

    /// Between `min` and `max`, inclusive.
    ///
    /// # Panics
    ///
    /// When `min > max`.
    #[track_caller]
    pub fn between_inclusive(mut self, min: impl Into<f64>, max: impl Into<f64>) -> Self {
        let step = num::between_inclusive(self.core.state_mut(), min.into(), max.into());
        self.push(step)
    }

    /// Greater than `min`.
    pub fn gt(mut self, min: impl Into<f64>) -> Self {
        let step = num::gt(self.core.state_mut(), min.into());
        self.push(step)
    }

    /// Greater than or equal to `min`.
    pub fn gte(mut self, min: impl Into<f64>) -> Self {
        let step = num::gte(self.core.state_mut(), min.into());
        self.push(step)
    }

    /// Less than `max`.
    pub fn lt(mut self, max: impl Into<f64>) -> Self {
        let step = num::lt(self.core.state_mut(), max.into());
        self.push(step)
    }

    /// Less than or equal to `max`.
    pub fn lte(mut self, max: impl Into<f64>) -> Self {
        let step = num::lte(self.core.state_mut(), max.into());
        self.push(step)
    }

    /// Whole numbers only.
    pub fn int(mut self) -> Self {
        let step = num::int(self.core.state_mut());
        self.push(step)
    }

    /// Numbers with a fractional part only.
    pub fn float(mut self) -> Self {
        let step = num::float(self.core.state_mut());
        self.push(step)
    }

    /// Greater than zero.
    pub fn positive(mut self) -> Self {
        let step = num::positive(self.core.state_mut());
        self.push(step)
    }

    /// Less than zero.
    pub fn negative(mut self) -> Self {
        let step = num::negative(self.core.state_mut());
        self.push(step)
    }

    /// One of `list`.
    ///
    /// # Panics
    ///
    /// When `list` is empty.
    #[track_caller]
    pub fn one_of<I, N>(mut self, list: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<f64>,
    {
        let list = list.into_iter().map(Into::into).collect();
        let step = num::one_of(self.core.state_mut(), list);
        self.push(step)
    }
}

schema_type!(
    /// Booleans. Defaults to `false`.
    BooleanSchema
);

/// A boolean schema.
pub fn boolean() -> BooleanSchema {
    BooleanSchema::from_kind(Kind::Boolean)
}

impl BooleanSchema {
    /// Replace the default.
    pub fn default(self, value: bool) -> Self {
        self.with_default(Value::Bool(value))
    }

    /// Only `true` is valid.
    pub fn only_true(mut self) -> Self {
        let step = bool_criteria::only_true(self.core.state_mut());
        self.push(step)
    }

    /// Only `false` is valid.
    pub fn only_false(mut self) -> Self {
        let step = bool_criteria::only_false(self.core.state_mut());
        self.push(step)
    }
}

schema_type!(
    /// Dates, given as dates, RFC 3339 strings or millisecond timestamps,
    /// and cast to dates. Defaults to the current time.
    DateSchema
);

/// A date schema.
pub fn date() -> DateSchema {
    DateSchema::from_kind(Kind::Date)
}

impl DateSchema {
    /// Replace the default.
    pub fn default(self, value: DateTime<Utc>) -> Self {
        self.with_default(Value::Date(value))
    }

    /// Strictly before `date`.
    pub fn before(mut self, date: DateTime<Utc>) -> Self {
        let step = date_criteria::before(self.core.state_mut(), date);
        self.push(step)
    }

    /// Strictly after `date`.
    pub fn after(mut self, date: DateTime<Utc>) -> Self {
        let step = date_criteria::after(self.core.state_mut(), date);
        self.push(step)
    }

    /// Strictly between `start` and `end`.
    ///
    /// # Panics
    ///
    /// When `start` is after `end`.
    #[track_caller]
    pub fn between(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        let step = date_criteria::between(self.core.state_mut(), start, end);
        self.push(step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::Criteria;
    use crate::schema::Schema;
    use chrono::TimeZone;
    use optimal_core::Mode;

    #[test]
    fn number_default_and_range() {
        let schema = number().default(5).between(0, 10);
        assert_eq!(schema.validate_missing(), Ok(Some(Value::Number(5.0))));
        let err = schema.validate(&Value::from(15)).unwrap_err();
        assert_eq!(err.to_string(), "Number must be between 0 and 10.");
    }

    #[test]
    fn optional_strings_skip_content_checks_at_default() {
        let schema = string().contains("@");
        assert_eq!(schema.validate_missing(), Ok(Some(Value::from(""))));
        assert!(schema.required().validate(&Value::from("")).is_err());
    }

    #[test]
    fn only_accepts_the_default() {
        let schema = string().default("on").only();
        assert!(schema.validate(&Value::from("on")).is_ok());
        assert_eq!(
            schema.validate(&Value::from("off")).unwrap_err().reason(),
            "Value may only be \"on\"."
        );
    }

    #[test]
    fn lenient_mode_casts_scalars() {
        assert_eq!(
            number().validate_with(&Value::from("12.5"), Mode::Lenient),
            Ok(Value::Number(12.5))
        );
        assert_eq!(
            string().validate_with(&Value::from(3), Mode::Lenient),
            Ok(Value::from("3"))
        );
        assert_eq!(
            boolean().validate_with(&Value::from("true"), Mode::Lenient),
            Ok(Value::Bool(true))
        );
    }

    #[test]
    fn dates_cast_from_strings() {
        let expected = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let result = date().validate(&Value::from("2024-03-01T12:00:00Z"));
        assert_eq!(result, Ok(Value::Date(expected)));
        assert_eq!(
            date().validate(&Value::Bool(true)).unwrap_err().reason(),
            "Must be a string, number, or date."
        );
    }

    #[test]
    fn missing_date_defaults_to_now() {
        let before = Utc::now();
        let result = date().validate_missing().unwrap();
        let Some(Value::Date(resolved)) = &result else {
            panic!("expected a date, got {result:?}");
        };
        assert!(*resolved >= before);
    }

    #[test]
    fn boolean_only_true() {
        let schema = boolean().only_true();
        assert!(schema.validate(&Value::Bool(true)).is_ok());
        assert_eq!(
            schema.validate(&Value::Bool(false)).unwrap_err().reason(),
            "May only be true."
        );
    }
}

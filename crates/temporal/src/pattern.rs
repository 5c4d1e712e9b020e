//! Date pattern compilation
//!
//! Day keys are described with the letter-based pattern convention used by
//! the host engine's job scripts (`yyyy-MM-dd`, `dd/MM/yyyy HH:mm`). Patterns
//! are compiled once into a chrono format string and reused for every parse.
//!
//! ## Supported letters
//!
//! | Letters | Meaning            | chrono |
//! |---------|--------------------|--------|
//! | `yy`    | two-digit year     | `%y`   |
//! | `y...`  | year               | `%Y`   |
//! | `M`/`MM`| month number       | `%m`   |
//! | `MMM`   | short month name   | `%b`   |
//! | `MMMM`  | full month name    | `%B`   |
//! | `d`     | day of month       | `%d`   |
//! | `D`     | day of year        | `%j`   |
//! | `E`     | weekday name       | `%a`/`%A` |
//! | `H`     | hour (0-23)        | `%H`   |
//! | `h`     | hour (1-12)        | `%I`   |
//! | `m`     | minute             | `%M`   |
//! | `s`     | second             | `%S`   |
//! | `S`     | milliseconds       | `%3f`  |
//! | `a`     | am/pm marker       | `%p`   |
//!
//! Text between single quotes is literal; `''` is a literal quote. Any other
//! ASCII letter is rejected so typos surface at construction time.

use appver_core::{Error, Result};
use chrono::format::{self, Fixed, Item, Numeric, ParseResult, Parsed, StrftimeItems};

use crate::date::SnapshotDate;

/// A compiled date pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePattern {
    /// Pattern as supplied
    source: String,
    /// Equivalent chrono format string
    format: String,
    /// Whether the format carries time-of-day fields
    has_time: bool,
    /// Fields the format leaves out
    defaults: Defaults,
}

impl DatePattern {
    /// Compile a letter-based pattern such as `yyyy-MM-dd`
    pub fn compile(pattern: &str) -> Result<Self> {
        if pattern.is_empty() {
            return Err(Error::invalid_pattern(pattern, "pattern is empty"));
        }

        let chars: Vec<char> = pattern.chars().collect();
        let mut format = String::with_capacity(pattern.len() * 2);
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];

            if c == '\'' {
                i = push_quoted(pattern, &chars, i, &mut format)?;
                continue;
            }

            if c.is_ascii_alphabetic() {
                let mut run = 1;
                while chars.get(i + run) == Some(&c) {
                    run += 1;
                }
                let spec = match (c, run) {
                    ('y', 2) => "%y",
                    ('y', _) => "%Y",
                    ('M', 1 | 2) => "%m",
                    ('M', 3) => "%b",
                    ('M', _) => "%B",
                    ('d', _) => "%d",
                    ('D', _) => "%j",
                    ('E', 1..=3) => "%a",
                    ('E', _) => "%A",
                    ('H', _) => "%H",
                    ('h', _) => "%I",
                    ('m', _) => "%M",
                    ('s', _) => "%S",
                    ('S', _) => "%3f",
                    ('a', _) => "%p",
                    _ => {
                        return Err(Error::invalid_pattern(
                            pattern,
                            format!("unsupported pattern letter '{}'", c),
                        ))
                    }
                };
                format.push_str(spec);
                i += run;
                continue;
            }

            push_literal(&mut format, c);
            i += 1;
        }

        Self::build(pattern, format)
    }

    /// Use a native chrono/strftime format (`%Y-%m-%d`) directly
    pub fn from_strftime(format: &str) -> Result<Self> {
        if format.is_empty() {
            return Err(Error::invalid_pattern(format, "pattern is empty"));
        }
        Self::build(format, format.to_string())
    }

    fn build(source: &str, format: String) -> Result<Self> {
        let mut seen = Seen::default();
        for item in StrftimeItems::new(&format) {
            match item {
                Item::Error => {
                    return Err(Error::invalid_pattern(
                        source,
                        "not a valid chrono format specification",
                    ))
                }
                Item::Numeric(numeric, _) => seen.numeric(&numeric),
                Item::Fixed(fixed) => seen.fixed(&fixed),
                _ => {}
            }
        }

        Ok(Self {
            source: source.to_string(),
            format,
            has_time: seen.time,
            defaults: seen.defaults(),
        })
    }

    /// Pattern as supplied by the caller
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Compiled chrono format string.
    ///
    /// Two patterns with the same format parse identically, so this is the
    /// identity used for caching.
    pub fn format(&self) -> &str {
        &self.format
    }

    /// Whether parsed values carry a time of day
    pub fn has_time(&self) -> bool {
        self.has_time
    }

    /// Parse a value against this pattern, without caching.
    ///
    /// The whole value must match; trailing text is an error. Fields the
    /// pattern does not mention take the host formatter's defaults: year
    /// 1970, January, the 1st, midnight, and AM for a 12-hour clock without
    /// a marker.
    pub fn parse(&self, value: &str) -> Result<SnapshotDate> {
        let mut parsed = Parsed::new();
        format::parse(&mut parsed, value, StrftimeItems::new(&self.format))
            .and_then(|()| self.defaults.apply(&mut parsed))
            .and_then(|()| parsed.to_naive_datetime_with_offset(0))
            .map(SnapshotDate::from_datetime)
            .map_err(|e| Error::date_parse(&self.source, value, e))
    }
}

/// Fields observed while scanning a compiled format
#[derive(Debug, Default)]
struct Seen {
    year: bool,
    month: bool,
    day: bool,
    ordinal_or_week: bool,
    hour24: bool,
    hour12: bool,
    ampm: bool,
    minute: bool,
    time: bool,
    complete: bool,
}

impl Seen {
    fn numeric(&mut self, numeric: &Numeric) {
        match numeric {
            Numeric::Year
            | Numeric::YearDiv100
            | Numeric::YearMod100
            | Numeric::IsoYear
            | Numeric::IsoYearDiv100
            | Numeric::IsoYearMod100 => self.year = true,
            Numeric::Month => self.month = true,
            Numeric::Day => self.day = true,
            Numeric::Ordinal | Numeric::WeekFromSun | Numeric::WeekFromMon | Numeric::IsoWeek => {
                self.ordinal_or_week = true
            }
            Numeric::Hour => {
                self.hour24 = true;
                self.time = true;
            }
            Numeric::Hour12 => {
                self.hour12 = true;
                self.time = true;
            }
            Numeric::Minute => {
                self.minute = true;
                self.time = true;
            }
            Numeric::Second | Numeric::Nanosecond => self.time = true,
            Numeric::Timestamp => {
                self.complete = true;
                self.time = true;
            }
            _ => {}
        }
    }

    fn fixed(&mut self, fixed: &Fixed) {
        match fixed {
            Fixed::ShortMonthName | Fixed::LongMonthName => self.month = true,
            Fixed::LowerAmPm | Fixed::UpperAmPm => {
                self.ampm = true;
                self.time = true;
            }
            Fixed::RFC2822 | Fixed::RFC3339 => {
                self.complete = true;
                self.time = true;
            }
            Fixed::Nanosecond
            | Fixed::Nanosecond3
            | Fixed::Nanosecond6
            | Fixed::Nanosecond9
            | Fixed::Internal(_) => self.time = true,
            _ => {}
        }
    }

    fn defaults(&self) -> Defaults {
        if self.complete {
            return Defaults::default();
        }
        let no_hour = !self.hour24 && !self.hour12;
        let by_month = !self.ordinal_or_week;
        Defaults {
            year: !self.year,
            month: by_month && !self.month,
            day: by_month && !self.day,
            hour: no_hour && !self.ampm,
            hour12: no_hour && self.ampm,
            minute: !self.minute,
            ampm: self.hour12 && !self.ampm,
        }
    }
}

/// Fields filled in after parsing because the format never sets them
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Defaults {
    year: bool,
    month: bool,
    day: bool,
    hour: bool,
    hour12: bool,
    minute: bool,
    ampm: bool,
}

impl Defaults {
    fn apply(&self, parsed: &mut Parsed) -> ParseResult<()> {
        if self.year {
            parsed.set_year(1970)?;
        }
        if self.month {
            parsed.set_month(1)?;
        }
        if self.day {
            parsed.set_day(1)?;
        }
        if self.hour {
            parsed.set_hour(0)?;
        }
        if self.hour12 {
            parsed.set_hour12(12)?;
        }
        if self.minute {
            parsed.set_minute(0)?;
        }
        if self.ampm {
            parsed.set_ampm(false)?;
        }
        Ok(())
    }
}

fn push_literal(format: &mut String, c: char) {
    if c == '%' {
        format.push_str("%%");
    } else {
        format.push(c);
    }
}

/// Copy a quoted section starting at `start` (the opening quote) and return
/// the index just past it.
fn push_quoted(pattern: &str, chars: &[char], start: usize, format: &mut String) -> Result<usize> {
    if chars.get(start + 1) == Some(&'\'') {
        format.push('\'');
        return Ok(start + 2);
    }

    let mut j = start + 1;
    loop {
        match chars.get(j) {
            None => return Err(Error::invalid_pattern(pattern, "unterminated quote")),
            Some('\'') if chars.get(j + 1) == Some(&'\'') => {
                format.push('\'');
                j += 2;
            }
            Some('\'') => return Ok(j + 1),
            Some(&c) => {
                push_literal(format, c);
                j += 1;
            }
        }
    }
}

//! Conversion of claim timestamps into calendar text.

use std::convert::TryFrom;
use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, Locale, TimeZone, Utc};

use crate::error::{Error, Result};

/// Renders Unix epoch seconds as text.
pub trait DateFormatter {
    fn format_timestamp(&self, seconds: i64) -> Result<String>;
}

/// Time zone timestamps are shown in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Zone {
    Local,
    Utc,
}

/// strftime-based formatter with localized day and month names.
#[derive(Clone, Debug)]
pub struct LocalizedFormatter {
    locale: Locale,
    pattern: String,
    zone: Zone,
}

impl LocalizedFormatter {
    pub const DEFAULT_LOCALE: &'static str = "fr_FR";
    pub const DEFAULT_PATTERN: &'static str = "%A %d %B %Y à %Hh%M";

    pub fn new(locale: &str, pattern: &str, zone: Zone) -> Result<Self> {
        let locale = Locale::try_from(locale)
            .map_err(|_| Error::Config(format!("unknown locale `{}`", locale)))?;

        if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
            return Err(Error::Config(format!("invalid date format `{}`", pattern)));
        }

        Ok(LocalizedFormatter {
            locale,
            pattern: pattern.to_string(),
            zone,
        })
    }

    fn format_datetime<Tz: TimeZone>(&self, datetime: DateTime<Tz>) -> Result<String>
    where
        Tz::Offset: std::fmt::Display,
    {
        let mut text = String::new();
        write!(
            text,
            "{}",
            datetime.format_localized(&self.pattern, self.locale)
        )
        .map_err(|_| Error::Config(format!("cannot format date with `{}`", self.pattern)))?;
        Ok(text)
    }
}

impl Default for LocalizedFormatter {
    fn default() -> Self {
        LocalizedFormatter {
            locale: Locale::fr_FR,
            pattern: Self::DEFAULT_PATTERN.to_string(),
            zone: Zone::Local,
        }
    }
}

impl DateFormatter for LocalizedFormatter {
    fn format_timestamp(&self, seconds: i64) -> Result<String> {
        let utc = Utc
            .timestamp_opt(seconds, 0)
            .single()
            .ok_or_else(|| Error::Payload(format!("timestamp {} out of range", seconds)))?;

        match self.zone {
            Zone::Utc => self.format_datetime(utc),
            Zone::Local => self.format_datetime(utc.with_timezone(&Local)),
        }
    }
}

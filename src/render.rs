//! Turns decoded claims into labelled, human-readable lines.

use std::collections::BTreeMap;
use std::convert::TryFrom;
use std::fmt;

use serde_cbor::Value;
use tracing::debug;

use crate::datefmt::DateFormatter;
use crate::error::{Error, Result};
use crate::eudcc::{
    describe, RawAttributes, EXPIRY_CLAIM_KEY, HCERT_CLAIM_KEY, ISSUED_AT_CLAIM_KEY,
    ISSUER_CLAIM_KEY,
};
use crate::reference::{ReferenceData, VariantKind, VariantSchema};

const VERSION_KEY: &str = "ver";
const NAME_KEY: &str = "nam";
const LASTNAME_KEY: &str = "fn";
const FIRSTNAME_KEY: &str = "gn";
const BIRTHDATE_KEY: &str = "dob";

/// One `(label, text)` output pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedLine {
    pub label: String,
    pub text: String,
}

impl RenderedLine {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        RenderedLine {
            label: label.into(),
            text: text.into(),
        }
    }
}

impl fmt::Display for RenderedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.label.is_empty(), self.text.is_empty()) {
            (_, true) => f.write_str(&self.label),
            (_, false) => write!(f, "{} {}", self.label, self.text),
        }
    }
}

/// Joins rendered lines with newlines.
pub fn to_text(lines: &[RenderedLine]) -> String {
    lines
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders decoded claims using injected reference data and date formatter.
#[derive(Debug)]
pub struct Presenter<F> {
    reference: ReferenceData,
    formatter: F,
}

impl<F: DateFormatter> Presenter<F> {
    /// Fails when `reference` does not validate.
    pub fn new(reference: ReferenceData, formatter: F) -> Result<Self> {
        reference.validate()?;
        Ok(Presenter {
            reference,
            formatter,
        })
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    /// Renders every claim of interest, or fails as a whole.
    pub fn render(&self, attributes: &RawAttributes) -> Result<Vec<RenderedLine>> {
        let labels = &self.reference.labels;
        let mut lines = Vec::new();

        let issuer = text_value(attributes.claim(ISSUER_CLAIM_KEY), "iss")?;
        lines.push(RenderedLine::new(&labels.issuer, issuer));

        for (label, key, name) in &[
            (&labels.issued_at, ISSUED_AT_CLAIM_KEY, "iat"),
            (&labels.expires_at, EXPIRY_CLAIM_KEY, "exp"),
        ] {
            let seconds = timestamp_value(attributes.claim(*key), name)?;
            let date = self.formatter.format_timestamp(seconds)?;
            lines.push(RenderedLine::new(label.as_str(), date));
        }

        if let Some(kid) = attributes.key_id() {
            lines.push(RenderedLine::new(&labels.key_id, kid));
        }

        push_banner(&mut lines, &self.reference.opening_banner);

        let entries = match attributes.claim(HCERT_CLAIM_KEY) {
            Some(Value::Map(entries)) => entries,
            _ => return Err(Error::missing("hcert")),
        };
        for (ordinal, entry) in entries {
            let ordinal = scalar_text(ordinal).unwrap_or_else(|_| "?".to_string());
            match entry {
                Value::Map(entry) => self.render_entry(&ordinal, entry, &mut lines)?,
                _ => return Err(Error::missing(format!("hcert/{}", ordinal))),
            }
        }

        push_banner(&mut lines, &self.reference.closing_banner);

        Ok(lines)
    }

    fn render_entry(
        &self,
        ordinal: &str,
        entry: &BTreeMap<Value, Value>,
        lines: &mut Vec<RenderedLine>,
    ) -> Result<()> {
        let labels = &self.reference.labels;

        let version = text_value(entry_field(entry, VERSION_KEY), VERSION_KEY)?;
        let name = match entry_field(entry, NAME_KEY) {
            Some(Value::Map(name)) => name,
            _ => return Err(Error::missing(NAME_KEY)),
        };
        let last_name = text_value(entry_field(name, LASTNAME_KEY), LASTNAME_KEY)?;
        // Mononymous holders only carry a family name.
        let first_name = match entry_field(name, FIRSTNAME_KEY) {
            None | Some(Value::Null) => String::new(),
            value => text_value(value, FIRSTNAME_KEY)?,
        };
        let birth_date = text_value(entry_field(entry, BIRTHDATE_KEY), BIRTHDATE_KEY)?;

        lines.push(RenderedLine::new(&labels.version, version));
        lines.push(RenderedLine::new(&labels.last_name, last_name));
        lines.push(RenderedLine::new(&labels.first_name, first_name));
        lines.push(RenderedLine::new(&labels.birth_date, birth_date));

        let (kind, records) = VariantKind::PRIORITY
            .iter()
            .find_map(|kind| entry_field(entry, kind.key()).map(|records| (*kind, records)))
            .ok_or_else(|| Error::UnknownVariant {
                entry: ordinal.to_string(),
            })?;
        let schema = self.reference.schema(kind).ok_or_else(|| {
            Error::Config(format!("no schema for variant `{}`", kind.key()))
        })?;
        debug!(entry = ordinal, variant = kind.key(), "rendering certificate entry");

        lines.push(RenderedLine::new(&labels.certificate_type, &schema.name));

        let records = match records {
            Value::Array(records) => records,
            other => {
                return Err(Error::Payload(format!(
                    "`{}` records are {}, not an array",
                    kind.key(),
                    describe(other)
                )))
            }
        };
        for record in records {
            match record {
                Value::Map(record) => self.render_record(schema, record, lines)?,
                other => {
                    return Err(Error::Payload(format!(
                        "`{}` record is {}, not a map",
                        kind.key(),
                        describe(other)
                    )))
                }
            }
        }

        Ok(())
    }

    fn render_record(
        &self,
        schema: &VariantSchema,
        record: &BTreeMap<Value, Value>,
        lines: &mut Vec<RenderedLine>,
    ) -> Result<()> {
        let variant = schema.kind.key();

        for code in record.keys() {
            let known = match code {
                Value::Text(code) => schema.field(code).is_some(),
                _ => false,
            };
            if !known {
                return Err(Error::UnknownField {
                    variant: variant.to_string(),
                    code: scalar_text(code).unwrap_or_else(|_| describe(code).to_string()),
                });
            }
        }

        for field in &schema.fields {
            let raw = match entry_field(record, &field.code) {
                Some(raw) => scalar_text(raw).map_err(|found| {
                    Error::Payload(format!(
                        "field `{}` of `{}` record is {}",
                        field.code, variant, found
                    ))
                })?,
                None => continue,
            };

            let text = match self.reference.table_for(field) {
                None => raw,
                Some(table) => match table.get(&raw) {
                    Some(text) => text.to_string(),
                    None => {
                        return Err(Error::UnknownCode {
                            variant: variant.to_string(),
                            field: field.code.clone(),
                            code: raw,
                        })
                    }
                },
            };
            lines.push(RenderedLine::new(&field.label, text));
        }

        Ok(())
    }
}

fn push_banner(lines: &mut Vec<RenderedLine>, banner: &[(String, String)]) {
    lines.extend(
        banner
            .iter()
            .map(|(label, text)| RenderedLine::new(label, text)),
    );
}

fn entry_field<'a>(map: &'a BTreeMap<Value, Value>, key: &str) -> Option<&'a Value> {
    map.get(&Value::Text(key.to_string()))
}

fn text_value(value: Option<&Value>, field: &str) -> Result<String> {
    match value {
        Some(Value::Text(text)) => Ok(text.clone()),
        _ => Err(Error::missing(field)),
    }
}

fn timestamp_value(value: Option<&Value>, field: &str) -> Result<i64> {
    match value {
        Some(Value::Integer(seconds)) => i64::try_from(*seconds)
            .map_err(|_| Error::Payload(format!("`{}` timestamp out of range", field))),
        Some(Value::Float(seconds)) if seconds.is_finite() => Ok(seconds.trunc() as i64),
        _ => Err(Error::missing(field)),
    }
}

/// Text form of a scalar value; the error names what was found instead.
fn scalar_text(value: &Value) -> std::result::Result<String, &'static str> {
    match value {
        Value::Text(text) => Ok(text.clone()),
        Value::Integer(n) => Ok(n.to_string()),
        Value::Float(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(describe(other)),
    }
}

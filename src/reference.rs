//! Reference data consumed by the presenter.
//!
//! Lookup tables, per-variant field schemas and display labels live here as
//! plain data so they can be replaced (from a JSON file, or by tests)
//! without touching the decoding or rendering code.

use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::{BufReader, Read};
use std::iter::FromIterator;
use std::path::Path;

use serde_derive::{Deserialize, Serialize};

use crate::error::{Error, Result};

mod french;

/// Code to display text.
///
/// An empty table means values are displayed verbatim.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LookupTable(BTreeMap<String, String>);

impl LookupTable {
    pub fn get(&self, code: &str) -> Option<&str> {
        self.0.get(code).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn insert(&mut self, code: impl Into<String>, text: impl Into<String>) {
        self.0.insert(code.into(), text.into());
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for LookupTable {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        LookupTable(
            iter.into_iter()
                .map(|(code, text)| (code.to_string(), text.to_string()))
                .collect(),
        )
    }
}

/// The three mutually exclusive certificate variants.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum VariantKind {
    Recovery,
    Test,
    Vaccination,
}

impl VariantKind {
    /// Order in which an entry is probed for a variant key. When a malformed
    /// entry carries several variant keys, the first one found here wins.
    pub const PRIORITY: [VariantKind; 3] = [
        VariantKind::Recovery,
        VariantKind::Test,
        VariantKind::Vaccination,
    ];

    /// Key of the variant's record array inside a certificate entry.
    pub fn key(self) -> &'static str {
        match self {
            VariantKind::Recovery => "r",
            VariantKind::Test => "t",
            VariantKind::Vaccination => "v",
        }
    }
}

/// One field of a variant schema.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Two-letter field code, e.g. `tg`.
    pub code: String,
    pub label: String,
    /// Name of the lookup table in [`ReferenceData::tables`]; `None` shows
    /// the value verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
}

/// Display name and ordered fields of one certificate variant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VariantSchema {
    pub kind: VariantKind,
    pub name: String,
    pub fields: Vec<FieldSpec>,
}

impl VariantSchema {
    pub fn field(&self, code: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.code == code)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DocumentLabels {
    pub issuer: String,
    pub issued_at: String,
    pub expires_at: String,
    pub key_id: String,
    pub version: String,
    pub last_name: String,
    pub first_name: String,
    pub birth_date: String,
    pub certificate_type: String,
}

/// Decorative (label, text) lines around the certificate listing.
pub type Banner = Vec<(String, String)>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReferenceData {
    pub labels: DocumentLabels,
    #[serde(default)]
    pub opening_banner: Banner,
    #[serde(default)]
    pub closing_banner: Banner,
    pub tables: BTreeMap<String, LookupTable>,
    pub variants: Vec<VariantSchema>,
}

impl Default for ReferenceData {
    fn default() -> Self {
        french::reference_data()
    }
}

impl ReferenceData {
    /// Parses and validates reference data from JSON.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let data: ReferenceData = serde_json::from_reader(reader)
            .map_err(|e| Error::Config(format!("reference data: {}", e)))?;
        data.validate()?;
        Ok(data)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("reference data: {}", e)))
    }

    pub fn schema(&self, kind: VariantKind) -> Option<&VariantSchema> {
        self.variants.iter().find(|schema| schema.kind == kind)
    }

    /// Resolves a field's lookup table. `None` means verbatim display.
    pub fn table_for(&self, field: &FieldSpec) -> Option<&LookupTable> {
        field
            .table
            .as_ref()
            .and_then(|name| self.tables.get(name))
            .filter(|table| !table.is_empty())
    }

    /// Checks that every variant has exactly one schema, that field codes are
    /// unique within a schema and that every referenced table exists.
    pub fn validate(&self) -> Result<()> {
        for kind in VariantKind::PRIORITY.iter() {
            let count = self.variants.iter().filter(|s| s.kind == *kind).count();
            if count != 1 {
                return Err(Error::Config(format!(
                    "expected one schema for variant `{}`, found {}",
                    kind.key(),
                    count
                )));
            }
        }

        for schema in &self.variants {
            let mut seen = BTreeSet::new();
            for field in &schema.fields {
                if !seen.insert(field.code.as_str()) {
                    return Err(Error::Config(format!(
                        "duplicate field `{}` in `{}` schema",
                        field.code,
                        schema.kind.key()
                    )));
                }
                if let Some(name) = &field.table {
                    if !self.tables.contains_key(name) {
                        return Err(Error::Config(format!(
                            "field `{}` of `{}` schema uses undefined table `{}`",
                            field.code,
                            schema.kind.key(),
                            name
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}

//! Dialect registry.

mod bigquery;
mod clickhouse;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::TypeCatalog;
use crate::definitions;
use crate::error::IrError;
use crate::types::{AliasBody, ModuleReference};

/// Supported database dialects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Google BigQuery
    BigQuery,
    /// ClickHouse
    ClickHouse,
}

impl Dialect {
    /// Every dialect, in display order
    pub const ALL: [Dialect; 2] = [Dialect::BigQuery, Dialect::ClickHouse];

    /// Name accepted on the command line and in config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::BigQuery => "bigquery",
            Dialect::ClickHouse => "clickhouse",
        }
    }

    /// Build the type catalog for this dialect.
    pub fn catalog(&self) -> Result<TypeCatalog, IrError> {
        match self {
            Dialect::BigQuery => bigquery::catalog(),
            Dialect::ClickHouse => clickhouse::catalog(),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dialect::ALL
            .into_iter()
            .find(|dialect| dialect.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let known: Vec<_> = Dialect::ALL.iter().map(|d| d.as_str()).collect();
                format!("Unknown dialect '{s}'. Expected one of: {}", known.join(", "))
            })
    }
}

/// Definitions shared by the analytical dialects: decimals, JSON and geometry.
fn shared_definitions() -> Result<BTreeMap<String, AliasBody>, IrError> {
    Ok(BTreeMap::from([
        ("Decimal".to_string(), definitions::decimal()?.into()),
        ("Generated".to_string(), definitions::generated()?),
        ("Geometry".to_string(), definitions::geometry()?.into()),
        ("Json".to_string(), definitions::json_column()?.into()),
        ("JsonArray".to_string(), definitions::json_array().into()),
        ("JsonObject".to_string(), definitions::json_object().into()),
        ("JsonPrimitive".to_string(), definitions::json_primitive()?.into()),
        ("JsonValue".to_string(), definitions::json_value()?.into()),
        ("LineString".to_string(), definitions::line_string().into()),
        ("Point".to_string(), definitions::point().into()),
        ("Polygon".to_string(), definitions::polygon().into()),
    ]))
}

fn shared_imports() -> BTreeMap<String, ModuleReference> {
    BTreeMap::from([
        ("ColumnType".to_string(), ModuleReference::new("kysely")),
        ("z".to_string(), ModuleReference::new("zod")),
    ])
}

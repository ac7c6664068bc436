//! Primitive kind tags attached to identifiers.
//!
//! The tag is decided once, when an identifier is built, so renderers never
//! have to guess what a name means from its spelling.

use serde::{Deserialize, Serialize};

/// What a runtime validator should check for a given identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveKind {
    /// Arbitrary JSON-ish payload: `Object`, `Json`
    Unknown,
    /// `boolean`
    Boolean,
    /// Dates and timestamps, coerced from strings
    Date,
    /// The `null` value
    Null,
    /// Integers, floats and decimals, coerced from strings
    Number,
    /// Text
    String,
    /// Marks the value as optional rather than naming a type of its own
    Undefined,
    /// Anything else: another declaration, a shared definition or a type parameter
    Reference,
}

impl PrimitiveKind {
    /// Classify a catalog type name.
    ///
    /// Any name containing `Decimal` is numeric; the rest is an exact-match
    /// table. Unknown names are references and pass through untouched.
    pub fn classify(name: &str) -> Self {
        if name.contains("Decimal") {
            return PrimitiveKind::Number;
        }

        match name {
            "Object" | "Json" => PrimitiveKind::Unknown,
            "boolean" | "Boolean" => PrimitiveKind::Boolean,
            "Date" | "Date32" | "DateTime" | "DateTime64" | "Timestamp" => PrimitiveKind::Date,
            "null" | "Nullable" => PrimitiveKind::Null,
            "Int8" | "Int16" | "Int32" | "Int64" | "Int128" | "Int256" | "UInt8" | "UInt16"
            | "UInt32" | "UInt64" | "UInt128" | "UInt256" | "number" | "Numeric" => {
                PrimitiveKind::Number
            }
            "string" | "String" => PrimitiveKind::String,
            "undefined" => PrimitiveKind::Undefined,
            _ => PrimitiveKind::Reference,
        }
    }

    /// True when the name refers to a declaration rather than a primitive.
    pub fn is_reference(self) -> bool {
        matches!(self, PrimitiveKind::Reference)
    }
}

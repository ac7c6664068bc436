//! Per-dialect type catalogs.
//!
//! A catalog maps raw database type names onto IR expressions and carries the
//! named definitions those expressions may refer to. It is built once per
//! dialect and handed to the assembler explicitly.

use std::collections::BTreeMap;

use crate::types::{AliasBody, Expression, ModuleReference};

/// Scalar table, shared definitions and import sources for one dialect.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeCatalog {
    /// Schema whose tables are not prefixed with the schema name
    pub default_schema: String,
    /// Used for any database type missing from `scalars`
    pub default_scalar: Expression,
    /// Lowercased database type name to expression
    pub scalars: BTreeMap<String, Expression>,
    /// Shared definitions emitted when referenced
    pub definitions: BTreeMap<String, AliasBody>,
    /// Identifiers that must be imported instead of declared
    pub imports: BTreeMap<String, ModuleReference>,
}

/// A raw database type name split into its base name and wrappers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarName {
    /// Lowercased base name without type parameters: `datetime64`
    pub name: String,
    /// Wrapped in `Nullable(...)`
    pub is_nullable: bool,
    /// Wrapped in `Array(...)`
    pub is_array: bool,
}

/// Result of a scalar lookup
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedScalar {
    /// Mapped expression, or the default scalar
    pub expression: Expression,
    /// See [`ScalarName::is_nullable`]
    pub is_nullable: bool,
    /// See [`ScalarName::is_array`]
    pub is_array: bool,
}

impl ScalarName {
    /// Normalize a database type name.
    ///
    /// `Nullable(...)`, `Array(...)` and `LowCardinality(...)` wrappers are
    /// unwrapped into flags, remaining type parameters are dropped and the
    /// name is ASCII-lowercased: `Nullable(DateTime64(3))` becomes
    /// `datetime64` with `is_nullable` set.
    pub fn parse(raw: &str) -> Self {
        let mut rest = raw.trim();
        let mut is_nullable = false;
        let mut is_array = false;

        loop {
            if let Some(inner) = strip_wrapper(rest, "nullable") {
                is_nullable = true;
                rest = inner;
            } else if let Some(inner) = strip_wrapper(rest, "array") {
                is_array = true;
                rest = inner;
            } else if let Some(inner) = strip_wrapper(rest, "lowcardinality") {
                rest = inner;
            } else {
                break;
            }
        }

        let base = rest.split('(').next().unwrap_or(rest).trim();

        ScalarName {
            name: base.to_ascii_lowercase(),
            is_nullable,
            is_array,
        }
    }
}

fn strip_wrapper<'a>(value: &'a str, wrapper: &str) -> Option<&'a str> {
    let open = wrapper.len();
    let head = value.get(..open)?;
    if !head.eq_ignore_ascii_case(wrapper) {
        return None;
    }
    value
        .get(open..)?
        .strip_prefix('(')?
        .strip_suffix(')')
        .map(str::trim)
}

impl TypeCatalog {
    /// Look up a raw database type, falling back to the default scalar.
    pub fn resolve_scalar(&self, raw: &str) -> ResolvedScalar {
        let scalar = ScalarName::parse(raw);
        let expression = self
            .scalars
            .get(&scalar.name)
            .unwrap_or(&self.default_scalar)
            .clone();

        ResolvedScalar {
            expression,
            is_nullable: scalar.is_nullable,
            is_array: scalar.is_array,
        }
    }

    /// Shared definition called `name`, if the catalog has one.
    pub fn definition(&self, name: &str) -> Option<&AliasBody> {
        self.definitions.get(name)
    }

    /// Module `name` must be imported from, if it is not declared locally.
    pub fn module_for(&self, name: &str) -> Option<&ModuleReference> {
        self.imports.get(name)
    }
}

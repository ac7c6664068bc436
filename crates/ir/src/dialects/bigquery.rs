use std::collections::BTreeMap;

use crate::catalog::TypeCatalog;
use crate::error::IrError;
use crate::types::Expression;

use super::{shared_definitions, shared_imports};

// These types have been found through experimentation against BigQuery.
const SCALARS: &[(&str, &str)] = &[
    ("array", "JsonArray"),
    ("bignumeric", "number"),
    ("bool", "number"),
    ("bytes", "Buffer"),
    ("date", "Date"),
    ("datetime", "Date"),
    ("float64", "number"),
    ("geography", "Geometry"),
    ("int64", "number"),
    ("interval", "number"),
    ("json", "Json"),
    ("numeric", "number"),
    ("string", "string"),
    ("struct", "string"),
    ("time", "Date"),
    ("timestamp", "Date"),
];

pub(super) fn catalog() -> Result<TypeCatalog, IrError> {
    Ok(TypeCatalog {
        default_schema: "default".to_string(),
        default_scalar: Expression::identifier("string"),
        scalars: SCALARS
            .iter()
            .map(|(name, ty)| ((*name).to_string(), Expression::identifier(*ty)))
            .collect::<BTreeMap<_, _>>(),
        definitions: shared_definitions()?,
        imports: shared_imports(),
    })
}

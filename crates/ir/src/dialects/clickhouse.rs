use std::collections::BTreeMap;

use crate::catalog::TypeCatalog;
use crate::error::IrError;
use crate::types::Expression;

use super::{shared_definitions, shared_imports};

// These types have been found through experimentation against ClickHouse.
const SCALARS: &[(&str, &str)] = &[
    ("array", "JsonArray"),
    ("bignumeric", "number"),
    ("bool", "number"),
    ("bytes", "Buffer"),
    ("date", "Date"),
    ("date32", "Date"),
    ("datetime", "Date"),
    ("datetime64", "Date"),
    ("decimal", "Decimal"),
    ("float32", "number"),
    ("float64", "number"),
    ("geography", "Geometry"),
    ("int8", "number"),
    ("int16", "number"),
    ("int32", "number"),
    ("int64", "number"),
    ("int128", "number"),
    ("int256", "number"),
    ("interval", "number"),
    ("json", "Json"),
    ("numeric", "number"),
    ("string", "string"),
    ("struct", "string"),
    ("time", "Date"),
    ("timestamp", "Date"),
    ("uint8", "number"),
    ("uint16", "number"),
    ("uint32", "number"),
    ("uint64", "number"),
    ("uint128", "number"),
    ("uint256", "number"),
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

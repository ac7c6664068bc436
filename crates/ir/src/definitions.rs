//! Shared definitions reused by several dialect catalogs.

use crate::column::ColumnType;
use crate::error::IrError;
use crate::types::{AliasBody, Expression, Property, Template};

/// `JsonValue[]`
pub fn json_array() -> Expression {
    Expression::array(Expression::reference("JsonValue"))
}

/// `{ [K in string]?: JsonValue }`
pub fn json_object() -> Expression {
    Expression::mapped(Expression::reference("JsonValue"))
}

/// `boolean | number | string | null`
pub fn json_primitive() -> Result<Expression, IrError> {
    Expression::union(vec![
        Expression::identifier("boolean"),
        Expression::identifier("number"),
        Expression::identifier("string"),
        Expression::null(),
    ])
}

/// `JsonArray | JsonObject | JsonPrimitive`
pub fn json_value() -> Result<Expression, IrError> {
    Expression::union(vec![
        Expression::reference("JsonArray"),
        Expression::reference("JsonObject"),
        Expression::reference("JsonPrimitive"),
    ])
}

/// Decimals are read back as strings but accept numbers on write.
pub fn decimal() -> Result<Expression, IrError> {
    ColumnType::new(
        Expression::identifier("string"),
        Expression::union(vec![
            Expression::identifier("string"),
            Expression::identifier("number"),
        ])?,
    )
    .into_expression()
}

/// JSON columns are read as parsed values and written as serialized text.
pub fn json_column() -> Result<Expression, IrError> {
    ColumnType::new(
        Expression::reference("JsonValue"),
        Expression::identifier("string"),
    )
    .with_update(Expression::identifier("string"))
    .into_expression()
}

/// `{ x: number; y: number }`
pub fn point() -> Expression {
    Expression::object(vec![
        Property::new("x", Expression::identifier("number")),
        Property::new("y", Expression::identifier("number")),
    ])
}

/// `Point[]`
pub fn line_string() -> Expression {
    Expression::array(Expression::reference("Point"))
}

/// `LineString[]`
pub fn polygon() -> Expression {
    Expression::array(Expression::reference("LineString"))
}

/// `LineString | Point | Polygon | Geometry[]`
pub fn geometry() -> Result<Expression, IrError> {
    Expression::union(vec![
        Expression::reference("LineString"),
        Expression::reference("Point"),
        Expression::reference("Polygon"),
        Expression::array(Expression::reference("Geometry")),
    ])
}

/// Columns with a database-side default may be omitted on insert:
///
/// ```text
/// type Generated<T> = T extends ColumnType<infer S, infer I, infer U>
///   ? ColumnType<S, I | undefined, U>
///   : ColumnType<T, T | undefined, T>;
/// ```
pub fn generated() -> Result<AliasBody, IrError> {
    let test = Expression::generic(
        "ColumnType",
        vec![
            Expression::infer("S"),
            Expression::infer("I"),
            Expression::infer("U"),
        ],
    )?;
    let consequent = ColumnType::new(
        Expression::reference("S"),
        Expression::union(vec![
            Expression::reference("I"),
            Expression::identifier("undefined"),
        ])?,
    )
    .with_update(Expression::reference("U"))
    .into_expression()?;
    let alternate = ColumnType::new(
        Expression::reference("T"),
        Expression::union(vec![
            Expression::reference("T"),
            Expression::identifier("undefined"),
        ])?,
    )
    .with_update(Expression::reference("T"))
    .into_expression()?;

    let template = Template::new(
        vec!["T".to_string()],
        Expression::extends("T", test, consequent, alternate),
    )?;
    Ok(template.into())
}

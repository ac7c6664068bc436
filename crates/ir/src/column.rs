//! Column types whose representation differs between reads and writes.

use crate::error::IrError;
use crate::types::Expression;

/// `ColumnType<Select, Insert, Update>`
///
/// `select` is what a read projection yields; `insert` and `update` are
/// what a write payload accepts. `update` falls back to `insert`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnType {
    /// Type read back from the database
    pub select: Expression,
    /// Type accepted on insert
    pub insert: Expression,
    /// Type accepted on update, when it differs from `insert`
    pub update: Option<Expression>,
}

impl ColumnType {
    /// Column type whose update type equals the insert type.
    pub fn new(select: Expression, insert: Expression) -> Self {
        ColumnType {
            select,
            insert,
            update: None,
        }
    }

    /// Override the update type.
    pub fn with_update(mut self, update: Expression) -> Self {
        self.update = Some(update);
        self
    }

    /// Effective update type.
    pub fn update(&self) -> &Expression {
        self.update.as_ref().unwrap_or(&self.insert)
    }

    /// Lower into the generic application the renderers understand.
    pub fn into_expression(self) -> Result<Expression, IrError> {
        let update = self.update.unwrap_or_else(|| self.insert.clone());
        Expression::generic("ColumnType", vec![self.select, self.insert, update])
    }
}

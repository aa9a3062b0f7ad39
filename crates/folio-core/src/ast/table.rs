use super::inline::TableCellContent;
use crate::TypeName;

/// A table. When a header is present every row should have one cell per
/// column name; that is checked by the parser and the compiler, not here, so
/// that trees built in code can still be diagnosed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table<D> {
    pub data: D,
    pub type_name: Option<TypeName>,
    pub header: Option<TableHeader<D>>,
    pub body: TableBody<D>,
}

impl<D> Table<D> {
    /// Declared column count, if the table has a header.
    pub fn arity(&self) -> Option<usize> {
        self.header.as_ref().map(|h| h.names.len())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableHeader<D> {
    pub data: D,
    pub type_name: Option<TypeName>,
    pub names: Vec<TableColumnName<D>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableColumnName<D> {
    pub data: D,
    pub type_name: Option<TypeName>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableBody<D> {
    pub data: D,
    pub type_name: Option<TypeName>,
    pub rows: Vec<TableRow<D>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow<D> {
    pub data: D,
    pub type_name: Option<TypeName>,
    pub cells: Vec<TableCell<D>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCell<D> {
    pub data: D,
    pub type_name: Option<TypeName>,
    pub content: Vec<TableCellContent<D>>,
}

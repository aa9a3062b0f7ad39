use folio_core::ast::{Table, TableBody, TableCell, TableColumnName, TableHeader, TableRow};
use folio_core::{Compiled, Parsed};

use super::core::Compiler;
use crate::checked::{Checked, collect_all, zip};
use crate::diagnostics::{DiagnosticKind, Diagnostics};

impl Compiler {
    pub(super) fn table(&mut self, table: &Table<Parsed>) -> Checked<Table<Compiled>> {
        let arity = table.arity();
        let (data, checked) = self.within(&table.data, |this, _| {
            let header = table.header.as_ref().map(|h| this.table_header(h));
            this.table_body(&table.body, arity)
                .map(|body| (header, body))
        });
        let (header, body) = checked?;

        Ok(Table {
            data,
            type_name: table.type_name.clone(),
            header,
            body,
        })
    }

    fn table_header(&mut self, header: &TableHeader<Parsed>) -> TableHeader<Compiled> {
        let (data, names) = self.within(&header.data, |this, _| {
            header
                .names
                .iter()
                .map(|name| TableColumnName {
                    data: this.leaf(&name.data),
                    type_name: name.type_name.clone(),
                    name: name.name.clone(),
                })
                .collect()
        });

        TableHeader {
            data,
            type_name: header.type_name.clone(),
            names,
        }
    }

    fn table_body(
        &mut self,
        body: &TableBody<Parsed>,
        arity: Option<usize>,
    ) -> Checked<TableBody<Compiled>> {
        let (data, rows) = self.within(&body.data, |this, _| {
            collect_all(body.rows.iter().map(|row| this.table_row(row, arity)))
        });

        Ok(TableBody {
            data,
            type_name: body.type_name.clone(),
            rows: rows?,
        })
    }

    fn table_row(
        &mut self,
        row: &TableRow<Parsed>,
        arity: Option<usize>,
    ) -> Checked<TableRow<Compiled>> {
        let (data, checked) = self.within(&row.data, |this, _| {
            zip(
                check_row_arity(row, arity),
                collect_all(row.cells.iter().map(|cell| this.table_cell(cell))),
            )
        });
        let ((), cells) = checked?;

        Ok(TableRow {
            data,
            type_name: row.type_name.clone(),
            cells,
        })
    }

    fn table_cell(&mut self, cell: &TableCell<Parsed>) -> Checked<TableCell<Compiled>> {
        let (data, content) = self.within(&cell.data, |this, _| {
            collect_all(cell.content.iter().map(|c| this.table_cell_content(c)))
        });

        Ok(TableCell {
            data,
            type_name: cell.type_name.clone(),
            content: content?,
        })
    }
}

/// Rows of headerless tables may have any width.
fn check_row_arity(row: &TableRow<Parsed>, arity: Option<usize>) -> Checked<()> {
    let Some(expected) = arity else {
        return Ok(());
    };
    let received = row.cells.len();
    if received == expected {
        return Ok(());
    }

    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::TableRowArity, row.data.lexical.clone())
        .message(format!("expected {expected}, received {received}"))
        .emit();
    Err(diagnostics)
}

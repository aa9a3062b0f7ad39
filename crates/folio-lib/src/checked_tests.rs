use folio_core::Lexical;

use crate::checked::{Checked, collect_all, zip};
use crate::{DiagnosticKind, Diagnostics};

fn failure(line: u32) -> Diagnostics {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::TableRowArity, Lexical::new(line, 1))
        .emit();
    diagnostics
}

fn lines(diagnostics: &Diagnostics) -> Vec<u32> {
    diagnostics.iter().map(|d| d.lexical().line).collect()
}

#[test]
fn collect_all_success() {
    let items: Vec<Checked<u32>> = vec![Ok(1), Ok(2), Ok(3)];
    assert_eq!(collect_all(items), Ok(vec![1, 2, 3]));
}

#[test]
fn collect_all_empty() {
    let items: Vec<Checked<u32>> = vec![];
    assert_eq!(collect_all(items), Ok(vec![]));
}

#[test]
fn collect_all_keeps_every_failure_in_order() {
    let items: Vec<Checked<u32>> = vec![Ok(1), Err(failure(2)), Ok(3), Err(failure(4))];
    let diagnostics = collect_all(items).unwrap_err();
    assert_eq!(lines(&diagnostics), [2, 4]);
}

#[test]
fn zip_merges_both_sides() {
    let a: Checked<()> = Err(failure(1));
    let b: Checked<()> = Err(failure(2));
    assert_eq!(lines(&zip(a, b).unwrap_err()), [1, 2]);

    let a: Checked<u8> = Ok(1);
    let b: Checked<u8> = Err(failure(3));
    assert_eq!(lines(&zip(a, b).unwrap_err()), [3]);

    assert_eq!(zip::<u8, u8>(Ok(1), Ok(2)), Ok((1, 2)));
}

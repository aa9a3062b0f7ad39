//! Results that carry every diagnostic found, not just the first.
//!
//! A failed [`Checked`] always holds at least one diagnostic. Independent
//! computations are combined with [`collect_all`] and [`zip`], which keep
//! failures from every side in argument order.

use crate::Diagnostics;

pub type Checked<T> = Result<T, Diagnostics>;

/// All values if every item succeeded, otherwise every failure concatenated.
pub fn collect_all<T>(items: impl IntoIterator<Item = Checked<T>>) -> Checked<Vec<T>> {
    let mut values = Vec::new();
    let mut failure: Option<Diagnostics> = None;

    for item in items {
        match item {
            Ok(value) => {
                if failure.is_none() {
                    values.push(value);
                }
            }
            Err(diagnostics) => match &mut failure {
                Some(acc) => acc.extend(diagnostics),
                None => failure = Some(diagnostics),
            },
        }
    }

    match failure {
        Some(diagnostics) => Err(diagnostics),
        None => Ok(values),
    }
}

pub fn zip<A, B>(a: Checked<A>, b: Checked<B>) -> Checked<(A, B)> {
    match (a, b) {
        (Ok(a), Ok(b)) => Ok((a, b)),
        (Err(mut first), Err(second)) => {
            first.extend(second);
            Err(first)
        }
        (Err(diagnostics), Ok(_)) | (Ok(_), Err(diagnostics)) => Err(diagnostics),
    }
}

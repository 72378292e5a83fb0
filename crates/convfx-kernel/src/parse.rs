//! Matrix string parsing.
//!
//! Kernels are written row by row: elements are separated by commas and
//! rows by semicolons.
//!
//! ```text
//! 0,0,0;0,1,0;0,0,0
//! ```
//!
//! Whitespace around elements is ignored. A single trailing delimiter is
//! tolerated (`"1,2;3,4;"` has two rows), every other empty element is an
//! error.

use crate::{Kernel, KernelError, KernelResult};
use tracing::{debug, error};

/// Delimiter between matrix rows.
pub const ROW_DELIMITER: char = ';';

/// Delimiter between elements of one row.
pub const ELEMENT_DELIMITER: char = ',';

/// Parses a matrix string into a row-major [`Kernel`].
///
/// The first row fixes the kernel width. Any later row with a different
/// element count fails with [`KernelError::DimensionMismatch`] and no
/// kernel is produced.
///
/// # Example
///
/// ```rust
/// use convfx_kernel::parse_matrix;
///
/// let k = parse_matrix("1,2;3,4;5,6").unwrap();
/// assert_eq!((k.width, k.height), (2, 3));
/// assert_eq!(k.weights, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
/// ```
pub fn parse_matrix(text: &str) -> KernelResult<Kernel> {
    let mut weights = Vec::new();
    let mut width: Option<usize> = None;
    let mut height = 0;

    debug!("Parsing convolution matrix");

    for (row, line) in fields(text, ROW_DELIMITER).enumerate() {
        let elems: Vec<&str> = fields(line, ELEMENT_DELIMITER).collect();

        if let Some(expected) = width.filter(|&w| w != elems.len()) {
            error!(row, found = elems.len(), expected, "Matrix row width mismatch");
            return Err(KernelError::DimensionMismatch {
                row,
                found: elems.len(),
                expected,
            });
        }
        width = Some(elems.len());

        for (column, token) in elems.into_iter().enumerate() {
            let value = parse_element(token, row, column)?;
            debug!(row, column, value, "matrix element");
            weights.push(value);
        }

        height += 1;
    }

    let width = width.unwrap_or(0);
    if width == 0 || height == 0 {
        error!("Matrix string contains no elements");
        return Err(KernelError::Empty);
    }

    Ok(Kernel { weights, width, height })
}

/// Splits `s` on `delim`, dropping the empty piece after a trailing delimiter.
fn fields(s: &str, delim: char) -> impl Iterator<Item = &str> {
    let s = s.strip_suffix(delim).unwrap_or(s);
    let empty = s.is_empty();
    s.split(delim).filter(move |_| !empty)
}

fn parse_element(token: &str, row: usize, column: usize) -> KernelResult<f32> {
    match token.trim().parse::<f32>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => {
            error!(row, column, token, "Matrix element is not a finite number");
            Err(KernelError::InvalidElement {
                row,
                column,
                token: token.to_string(),
            })
        }
    }
}

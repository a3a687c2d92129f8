/* ************************************************************************ **
** This file is part of flatmat, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
**                                                                          **
** Be aware that not all of flatmat is provided under this permissive       **
** license, and that the project as a whole is licensed under the GPL 3.0.  **
** ************************************************************************ */

//! Text renditions of a flat buffer, written to any output handle.
//!
//! These are formatting-and-write operations only; they hold no state
//! beyond the `Write` handle scoped to the call.

use crate::FailResult;
use crate::layout::check_dim;

use ::std::io::prelude::*;
use ::itertools::Itertools;

/// Field formatting options for the display routines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub struct Format {
    /// Minimum field width, including sign and decimal point.
    pub width: usize,
    /// Digits after the decimal point.
    pub precision: usize,
}

impl Default for Format {
    fn default() -> Format
    { Format { width: 8, precision: 4 } }
}

/// Write `a` as an `m`-row by `n`-column table, one row per line.
///
/// Fields are fixed-point, separated by single spaces, using the default
/// width and precision. A shape with zero rows or columns writes nothing.
pub fn write_table(w: impl Write, dim: (usize, usize), a: &[f32]) -> FailResult<()>
{ write_table_with(w, Format::default(), dim, a) }

/// `write_table` with explicit field formatting.
pub fn write_table_with(mut w: impl Write, fmt: Format, (m, n): (usize, usize), a: &[f32]) -> FailResult<()>
{
    check_dim((m, n), a.len())?;
    if a.is_empty() {
        return Ok(());
    }

    for row in a.chunks(n) {
        writeln!(w, "{}", row.iter().format_with(" ", |x, f| {
            f(&format_args!("{:w$.p$}", x, w = fmt.width, p = fmt.precision))
        }))?;
    }
    Ok(())
}

/// Write all `m * n` elements of `a` one per line, in scientific notation.
///
/// Elements appear in physical buffer order; the dimensions contribute
/// only the element count.
pub fn write_linear(w: impl Write, dim: (usize, usize), a: &[f32]) -> FailResult<()>
{ write_linear_with(w, Format::default(), dim, a) }

/// `write_linear` with explicit field formatting.
pub fn write_linear_with(mut w: impl Write, fmt: Format, dim: (usize, usize), a: &[f32]) -> FailResult<()>
{
    check_dim(dim, a.len())?;
    for x in a {
        writeln!(w, "{:w$.p$e}", x, w = fmt.width, p = fmt.precision)?;
    }
    Ok(())
}

/// Print `a` as a 2-D table on standard output.
pub fn print_table(dim: (usize, usize), a: &[f32]) -> FailResult<()>
{
    let stdout = ::std::io::stdout();
    write_table(stdout.lock(), dim, a)
}

/// Print `a` as one long, linear object on standard output.
pub fn print_linear(dim: (usize, usize), a: &[f32]) -> FailResult<()>
{
    let stdout = ::std::io::stdout();
    write_linear(stdout.lock(), dim, a)
}

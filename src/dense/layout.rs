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

//! Row-major shape and offset arithmetic.
//!
//! Every routine in this crate speaks one layout: row `i` of an `m`-row,
//! `n`-column matrix occupies the `n` contiguous elements beginning at
//! offset `i * n`.

use crate::FailResult;

/// Attempted access outside the logical bounds of a matrix.
#[derive(Debug, Fail)]
#[fail(display = "index ({}, {}) is out of bounds for a {}x{} matrix", i, j, rows, cols)]
pub struct IndexOutOfBounds {
    pub rows: usize,
    pub cols: usize,
    pub i: usize,
    pub j: usize,
}

/// A flat offset with no corresponding matrix entry.
#[derive(Debug, Fail)]
#[fail(display = "offset {} is out of bounds for a {}x{} matrix", offset, rows, cols)]
pub struct OffsetOutOfBounds {
    pub rows: usize,
    pub cols: usize,
    pub offset: usize,
}

/// A buffer whose length disagrees with the stated dimensions.
#[derive(Debug, Fail)]
#[fail(display = "buffer of length {} cannot hold a {}x{} matrix", len, rows, cols)]
pub struct DimMismatch {
    pub rows: usize,
    pub cols: usize,
    pub len: usize,
}

/// Compute the flat offset of entry `(i, j)` in an `m`-row, `n`-column matrix.
///
/// Row `i` spans the `n` contiguous elements starting at `i * n`,
/// so the offset is `j + i * n`.
pub fn linear_index((m, n): (usize, usize), (i, j): (usize, usize)) -> FailResult<usize>
{
    if i >= m || j >= n {
        throw!(IndexOutOfBounds { rows: m, cols: n, i, j });
    }
    Ok(j + i * n)
}

/// Recover the `(i, j)` entry corresponding to a flat offset.
///
/// Inverse of [`linear_index`] for offsets in `0..m*n`.
pub fn matrix_index((m, n): (usize, usize), offset: usize) -> FailResult<(usize, usize)>
{
    if n == 0 || offset >= m * n {
        throw!(OffsetOutOfBounds { rows: m, cols: n, offset });
    }
    Ok((offset / n, offset % n))
}

/// Check that a flat buffer of length `len` holds exactly `m * n` elements.
pub fn check_dim((m, n): (usize, usize), len: usize) -> FailResult<()>
{
    if len != m * n {
        throw!(DimMismatch { rows: m, cols: n, len });
    }
    Ok(())
}

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

//! Helpers for dense matrices stored in caller-owned flat `f32` buffers.
//!
//! Nothing in this crate allocates on the caller's behalf; every routine
//! reads or fills a slice supplied by the caller, whose length must match
//! the stated dimensions.

#[macro_use] extern crate failure;
extern crate itertools;
#[cfg(feature = "serde-support")]
#[macro_use] extern crate serde_derive;

#[cfg(test)] #[macro_use] extern crate flatmat_assert_close;
#[cfg(test)] extern crate rand;

// FIXME copied from failure 1.0 prerelease; remove once actually released
macro_rules! throw {
    ($e:expr) => {
        return Err(::std::convert::Into::into($e));
    }
}

pub type FailResult<T> = Result<T, ::failure::Error>;

mod layout;
mod gen;
mod search;
mod display;

//---------------------------
// public reexports; API

pub use crate::layout::{linear_index, matrix_index, check_dim};
pub use crate::layout::{IndexOutOfBounds, OffsetOutOfBounds, DimMismatch};

pub use crate::gen::{eye, zeros, linspace};

pub use crate::search::max_index;

pub use crate::display::Format;
pub use crate::display::{write_table, write_table_with, print_table};
pub use crate::display::{write_linear, write_linear_with, print_linear};

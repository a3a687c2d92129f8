//! Vector/matrix helpers over caller-owned flat float buffers.
//!
//! The functional surface lives in `flatmat-dense` and is re-exported
//! here; this crate adds the CLI entry point and logging setup for the
//! `flatmat-demo` binary.

#[macro_use] extern crate log;
#[macro_use] extern crate failure;
extern crate ansi_term;
extern crate clap;
extern crate fern;
extern crate flatmat_dense;

pub type FailResult<T> = Result<T, ::failure::Error>;

pub mod cli;
pub mod logging;

//---------------------------
// public reexports; API

pub use ::flatmat_dense::{linear_index, matrix_index, check_dim};
pub use ::flatmat_dense::{IndexOutOfBounds, OffsetOutOfBounds, DimMismatch};
pub use ::flatmat_dense::{eye, zeros, linspace};
pub use ::flatmat_dense::max_index;
pub use ::flatmat_dense::Format;
pub use ::flatmat_dense::{write_table, write_table_with, print_table};
pub use ::flatmat_dense::{write_linear, write_linear_with, print_linear};

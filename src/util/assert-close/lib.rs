//! Approximate-equality assertions for float data.
//!
//! The core buffers in this project are `f32`; scalar comparisons widen to
//! `f64` so the same tolerances apply at either precision.

#[macro_use]
extern crate failure;
use std::fmt;

pub const DEFAULT_NONZERO_TOL: f64 = 1e-9;

/// Assert that two values (scalars, slices, or arrays of floats) are
/// approximately equal.
///
/// Tolerances may be supplied up front, in either order:
///
/// ```text
/// assert_close!(a, b);
/// assert_close!(rel=1e-6, a, b);
/// assert_close!(abs=1e-10, a, b);
/// assert_close!(rel=1e-6, abs=1e-10, a, b);
/// ```
#[macro_export]
macro_rules! assert_close {
    (rel=$rel:expr, abs=$abs:expr, $a:expr, $b:expr $(,)*) => {
        $crate::assert_close_impl($crate::Tolerances { rel: $rel, abs: $abs }, &$a, &$b)
    };
    (abs=$abs:expr, rel=$rel:expr, $a:expr, $b:expr $(,)*) => {
        $crate::assert_close_impl($crate::Tolerances { rel: $rel, abs: $abs }, &$a, &$b)
    };
    (rel=$rel:expr, $a:expr, $b:expr $(,)*) => {
        $crate::assert_close_impl($crate::Tolerances { rel: $rel, abs: 0.0 }, &$a, &$b)
    };
    (abs=$abs:expr, $a:expr, $b:expr $(,)*) => {
        $crate::assert_close_impl(
            $crate::Tolerances { abs: $abs, ..$crate::Tolerances::default() },
            &$a, &$b,
        )
    };
    ($a:expr, $b:expr $(,)*) => {
        $crate::assert_close_impl($crate::Tolerances::default(), &$a, &$b)
    };
}

/// `assert_close!`, but only in builds with debug assertions.
#[macro_export]
macro_rules! debug_assert_close {
    ($($t:tt)*) => {{
        #[cfg(debug_assertions)] {
            assert_close!{$($t)*}
        }
    }};
}

#[doc(hidden)]
pub fn assert_close_impl<A>(tol: Tolerances, a: &A, b: &A)
where A: CheckClose + fmt::Debug + ?Sized,
{
    if let Err(e) = a.check_close(b, tol) {
        panic!(
            "not nearly equal! (tolerances: rel={}, abs={})\n left: {:?}\nright: {:?}\n{}",
            tol.rel, tol.abs, a, b, e,
        );
    }
}

#[derive(Debug, Copy, Clone)]
pub struct Tolerances {
    pub abs: f64,
    pub rel: f64,
}

impl Default for Tolerances {
    fn default() -> Tolerances
    { Tolerances { abs: 0.0, rel: DEFAULT_NONZERO_TOL } }
}

#[derive(Debug, Fail)]
pub struct CheckCloseError {
    /// The offending pair, widened to `f64`.
    pub values: (f64, f64),
    pub tol: Tolerances,
}

impl fmt::Display for CheckCloseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (left, right) = self.values;
        write!(f, "failed at:
  left: {:?}
 right: {:?}
   tol: {:?}", left, right, self.tol)
    }
}

// Implementation from Python 3.5.
// https://hg.python.org/cpython/file/tip/Modules/mathmodule.c#l1993
fn is_close(a: f64, b: f64, Tolerances { abs, rel }: Tolerances) -> bool {
    assert!(rel >= 0.0);
    assert!(abs >= 0.0);

    // catch infinities of same sign
    if a == b { return true; }

    // catch infinities of opposite sign, avoiding infinite relative tolerance
    if a.is_infinite() || b.is_infinite() { return false; }

    // case for general values and NaN.
    (a - b).abs() < abs.max(rel * a.abs()).max(rel * b.abs())
}

pub trait CheckClose {
    /// Test that all values of self and other are close.
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError>;
}

macro_rules! gen_scalar_impls {
    ($($T:ty)*) => {
        $(
        impl CheckClose for $T {
            fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError>
            {
                let (a, b) = (f64::from(*self), f64::from(*other));
                match is_close(a, b, tol) {
                    true => Ok(()),
                    false => Err(CheckCloseError { values: (a, b), tol }),
                }
            }
        }
        )*
    };
}

gen_scalar_impls! { f32 f64 }

impl<'a, T: ?Sized + CheckClose> CheckClose for &'a T {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError>
    { CheckClose::check_close(*self, *other, tol) }
}

impl<T: CheckClose> CheckClose for [T] {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError>
    {
        assert_eq!(self.len(), other.len());
        self.iter().zip(other)
            .map(|(a, b)| a.check_close(b, tol))
            .collect()
    }
}

impl<T: CheckClose> CheckClose for Vec<T> {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError>
    { self[..].check_close(&other[..], tol) }
}

macro_rules! gen_array_impls {
    ($($n:tt)*) => {
        $(
        impl<T: CheckClose> CheckClose for [T; $n] {
            fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError>
            { self[..].check_close(&other[..], tol) }
        }
        )*
    };
}

gen_array_impls! {
    0 1 2 3 4 5 6 7 8
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    #[test]
    fn macro_output_can_compile() {
        assert_close!(1.0, 1.0);
        assert_close!(abs=1e-8, 1.0, 1.0);
        assert_close!(rel=1e-8, 1.0, 1.0);
        assert_close!(rel=1e-8, abs=1e-8, 1.0, 1.0);
        assert_close!(abs=1e-8, rel=1e-8, 1.0, 1.0);
        assert_close!(1.0, 1.0,);
        assert_close!(abs=1e-8, 1.0, 1.0,);
        debug_assert_close!(abs=1e-8, 1.0, 1.0);
    }

    #[test]
    fn f32_widens() {
        assert_close!(abs=1e-6, 0.1_f32, 0.1_f32);
        assert_close!(rel=1e-6, 1.0e20_f32, 1.0e20_f32);
    }

    #[test]
    fn slices_and_arrays() {
        let a = [0.0_f32, 0.5, 1.0];
        let b = [0.0_f32, 0.5, 1.0];
        assert_close!(abs=1e-12, a, b);
        assert_close!(abs=1e-12, &a[..], &b[..]);
        assert_close!(abs=1e-12, a.to_vec(), b.to_vec());
    }

    #[test]
    #[should_panic]
    fn not_close() {
        assert_close!(abs=0.0, rel=0.0, 1.0, 1.1);
    }

    #[test]
    #[should_panic]
    fn nan_is_never_close() {
        assert_close!(abs=1e10, ::std::f64::NAN, ::std::f64::NAN);
    }

    #[test]
    #[cfg_attr(debug_assertions, should_panic)]
    fn debug_not_close() {
        debug_assert_close!(abs=0.0, rel=0.0, 1.0, 1.1);
    }
}

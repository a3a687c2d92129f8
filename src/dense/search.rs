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

//! Element searches over flat vectors.

use crate::FailResult;

/// Find the index of the largest element of `u`.
///
/// Ties are resolved in favor of the earliest index (the scan uses a
/// strict `>`). NaN never compares greater than anything, so NaN elements
/// are passed over; if every element is NaN, index 0 is returned.
///
/// This is a plain linear scan. Fails on an empty slice, which has no
/// largest element.
pub fn max_index(u: &[f32]) -> FailResult<usize>
{
    ensure!(!u.is_empty(), "cannot take the max element of an empty vector");

    let mut imax = 0;
    let mut umax = ::std::f32::NEG_INFINITY;
    for (i, &x) in u.iter().enumerate() {
        if x > umax {
            umax = x;
            imax = i;
        }
    }
    Ok(imax)
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;

    const NAN: f32 = ::std::f32::NAN;

    #[test]
    fn first_of_tied_maxima() {
        assert_eq!(max_index(&[1.0, 5.0, 5.0, 2.0]).unwrap(), 1);
    }

    #[test]
    fn single_element() {
        assert_eq!(max_index(&[-3.0]).unwrap(), 0);
    }

    #[test]
    fn max_at_ends() {
        assert_eq!(max_index(&[9.0, 1.0, 2.0]).unwrap(), 0);
        assert_eq!(max_index(&[1.0, 2.0, 9.0]).unwrap(), 2);
    }

    #[test]
    fn result_dominates_all_elements() {
        for _ in 0..10 {
            let u: Vec<f32> = (0..20).map(|_| ::rand::random()).collect();
            let imax = max_index(&u).unwrap();
            assert!(u.iter().all(|&x| u[imax] >= x));
        }
    }

    #[test]
    fn negative_values() {
        // a max below zero must still beat the -inf the scan starts from
        assert_eq!(max_index(&[-5.0, -2.0, -7.0]).unwrap(), 1);
    }

    #[test]
    fn nan_is_never_selected() {
        assert_eq!(max_index(&[NAN, 1.0, 3.0, NAN]).unwrap(), 2);
    }

    #[test]
    fn all_nan_yields_first_index() {
        assert_eq!(max_index(&[NAN, NAN]).unwrap(), 0);
    }

    #[test]
    fn rejects_empty() {
        assert!(max_index(&[]).is_err());
    }
}

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

//! Routines that fill caller-owned buffers with standard contents.

use crate::FailResult;
use crate::layout::check_dim;

/// Fill `a` with the `m`-row, `n`-column identity.
///
/// Entry `(i, j)` becomes `1.0` when `i == j` and `0.0` otherwise.
/// Rectangular shapes are permitted; the ones run down the main diagonal
/// and the rest of the buffer is zeroed.
pub fn eye((m, n): (usize, usize), a: &mut [f32]) -> FailResult<()>
{
    check_dim((m, n), a.len())?;
    for i in 0..m {
        for j in 0..n {
            a[j + i * n] = if i == j { 1.0 } else { 0.0 };
        }
    }
    Ok(())
}

/// Fill all `m * n` elements of `a` with `0.0`.
pub fn zeros(dim: (usize, usize), a: &mut [f32]) -> FailResult<()>
{
    check_dim(dim, a.len())?;
    for x in a {
        *x = 0.0;
    }
    Ok(())
}

/// Fill `v` with evenly spaced values from `x0` to `x1` inclusive.
///
/// The step is `(x1 - x0) / (v.len() - 1)`; the final element is written
/// as exactly `x1` so the upper endpoint does not drift with accumulated
/// rounding. Fails unless `v` holds at least two elements, since a single
/// sample cannot honor both endpoints.
pub fn linspace(x0: f32, x1: f32, v: &mut [f32]) -> FailResult<()>
{
    ensure!(v.len() >= 2, "linspace requires at least 2 points (got {})", v.len());

    let dx = (x1 - x0) / (v.len() - 1) as f32;
    for (i, x) in v.iter_mut().enumerate() {
        *x = x0 + i as f32 * dx;
    }
    let last = v.len() - 1;
    v[last] = x1;
    Ok(())
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use crate::layout::linear_index;

    #[test]
    fn eye_square() {
        let mut a = vec![7.0; 4];
        eye((2, 2), &mut a).unwrap();
        assert_eq!(a, vec![1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn eye_rectangular() {
        // wide and tall shapes both put ones exactly on (i, i)
        for &dim in &[(2, 4), (4, 2), (3, 3)] {
            let (m, n) = dim;
            let mut a = vec![7.0; m * n];
            eye(dim, &mut a).unwrap();
            for i in 0..m {
                for j in 0..n {
                    let expected = if i == j { 1.0 } else { 0.0 };
                    assert_eq!(a[linear_index(dim, (i, j)).unwrap()], expected);
                }
            }
        }
    }

    #[test]
    fn zeros_overwrites() {
        let mut a = vec![3.5; 6];
        zeros((3, 2), &mut a).unwrap();
        assert_eq!(a, vec![0.0; 6]);
    }

    #[test]
    fn zero_sized_fills() {
        zeros((0, 5), &mut []).unwrap();
        eye((3, 0), &mut []).unwrap();
    }

    #[test]
    fn rejects_wrong_buffer_length() {
        assert!(eye((2, 2), &mut [0.0; 3]).is_err());
        assert!(zeros((2, 2), &mut [0.0; 5]).is_err());
    }

    #[test]
    fn linspace_unit_interval() {
        let mut v = [0.0; 5];
        linspace(0.0, 1.0, &mut v).unwrap();
        assert_eq!(v, [0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn linspace_endpoints_exact() {
        // 0.3 isn't representable, so the naive x0 + i*dx form of the last
        // element is a rounding hazard; endpoints must still be bit-exact.
        let mut v = vec![0.0; 7];
        linspace(0.1, 0.3, &mut v).unwrap();
        assert_eq!(v[0], 0.1);
        assert_eq!(v[6], 0.3);
    }

    #[test]
    fn linspace_monotonic() {
        for _ in 0..10 {
            // keep the endpoints well separated so rounding can't reorder
            // neighboring samples
            let x0 = ::rand::random::<f32>();
            let span = 0.5 + ::rand::random::<f32>();
            let x1 = if ::rand::random() { x0 + span } else { x0 - span };
            let mut v = vec![0.0; 12];
            linspace(x0, x1, &mut v).unwrap();
            for pair in v.windows(2) {
                if x1 >= x0 {
                    assert!(pair[0] <= pair[1]);
                } else {
                    assert!(pair[0] >= pair[1]);
                }
            }
        }
    }

    #[test]
    fn linspace_descending() {
        let mut v = [0.0; 3];
        linspace(1.0, -1.0, &mut v).unwrap();
        assert_close!(abs=1e-6, v[1] as f64, 0.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[2], -1.0);
    }

    #[test]
    fn linspace_too_short() {
        assert!(linspace(0.0, 1.0, &mut []).is_err());
        assert!(linspace(0.0, 1.0, &mut [0.0]).is_err());
    }
}

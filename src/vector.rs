//! Vector algebra primitives over fixed-length floating-point slices.
//!
//! These are the building blocks of the clustering engine: dot product,
//! Euclidean norm, elementwise summation across a group of vectors, and the
//! in-place scaling operations. They hold no state and touch nothing outside
//! their arguments, so they are safe to call concurrently on disjoint slices.

use num_traits::Float;

/// Computes the dot product of two equal-length vectors.
///
/// # Examples
///
/// ```
/// use spkmeans::vector::dot;
///
/// assert_eq!(dot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]), 32.0);
/// ```
#[must_use]
pub fn dot<T: Float>(a: &[T], b: &[T]) -> T {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .fold(T::zero(), |acc, (&x, &y)| acc + x * y)
}

/// Computes the Euclidean norm of a vector.
///
/// Returns zero for the zero vector; callers that go on to divide by the
/// norm must check for that case first.
#[must_use]
pub fn norm<T: Float>(a: &[T]) -> T {
    dot(a, a).sqrt()
}

/// Sums a group of equal-length vectors elementwise into a fresh vector of
/// length `len`. An empty group yields the zero vector.
#[must_use]
pub fn sum<'a, T, I>(vectors: I, len: usize) -> Vec<T>
where
    T: Float + 'a,
    I: IntoIterator<Item = &'a [T]>,
{
    let mut out = vec![T::zero(); len];
    for v in vectors {
        debug_assert_eq!(v.len(), len);
        for (acc, &x) in out.iter_mut().zip(v.iter()) {
            *acc = *acc + x;
        }
    }
    out
}

/// Multiplies every element of `a` by `s`, in place.
pub fn scale_in_place<T: Float>(a: &mut [T], s: T) {
    for x in a.iter_mut() {
        *x = *x * s;
    }
}

/// Divides every element of `a` by `s`, in place. `s` must be nonzero.
pub fn divide_in_place<T: Float>(a: &mut [T], s: T) {
    debug_assert!(s != T::zero());
    for x in a.iter_mut() {
        *x = *x / s;
    }
}

/// Scales `a` to unit Euclidean norm, in place. `a` must not be the zero
/// vector.
pub fn normalize_in_place<T: Float>(a: &mut [T]) {
    let n = norm(a);
    debug_assert!(n != T::zero());
    divide_in_place(a, n);
}

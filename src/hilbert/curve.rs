//! Mapping between a linear distance along a Hilbert curve and 2D coordinates.
//!
//! Both directions work on a square grid of side `n`, where `n` must be a power
//! of two. The functions are pure and keep no state between calls.

/// Rotate/flip a quadrant of side `s` for the Hilbert transformation.
///
/// The reflection is done with wrapping arithmetic: during [`xy2d`] the
/// coordinates can exceed the current quadrant, and only the low bits that are
/// inspected afterwards matter.
#[inline]
fn rot(s: u64, x: &mut u64, y: &mut u64, rx: u64, ry: u64) {
    if ry == 0 {
        if rx == 1 {
            *x = s.wrapping_sub(1).wrapping_sub(*x);
            *y = s.wrapping_sub(1).wrapping_sub(*y);
        }
        std::mem::swap(x, y);
    }
}

/// Whether `n` can be used as the side of a Hilbert grid.
#[inline]
pub fn is_valid_order(n: u64) -> bool {
    n.is_power_of_two()
}

/// Convert a distance along the Hilbert curve to (x, y) coordinates.
///
/// # Arguments
/// * `n` - Side of the grid (must be a power of 2)
/// * `d` - Distance along the curve, `0 <= d < n * n`
///
/// # Returns
/// A tuple of (x, y) coordinates, both in `[0, n)`
pub fn d2xy(n: u64, d: u64) -> (u64, u64) {
    debug_assert!(is_valid_order(n), "grid side {n} is not a power of two");
    debug_assert!(
        n > u64::from(u32::MAX) || d < n * n,
        "distance {d} is outside a {n}x{n} grid"
    );

    let mut x = 0u64;
    let mut y = 0u64;
    let mut s = 1u64;
    let mut t = d;

    while s < n {
        let rx = 1 & (t / 2);
        let ry = 1 & (t ^ rx);

        rot(s, &mut x, &mut y, rx, ry);

        x += s * rx;
        y += s * ry;
        t /= 4;
        s *= 2;
    }

    (x, y)
}

/// Convert (x, y) coordinates to a distance along the Hilbert curve.
///
/// Inverse of [`d2xy`]: `xy2d(n, d2xy(n, d)) == d` for every `d < n * n`.
pub fn xy2d(n: u64, mut x: u64, mut y: u64) -> u64 {
    debug_assert!(is_valid_order(n), "grid side {n} is not a power of two");

    let mut d = 0u64;
    let mut s = n / 2;

    while s > 0 {
        let rx = u64::from((x & s) > 0);
        let ry = u64::from((y & s) > 0);
        d += s * s * ((3 * rx) ^ ry);
        rot(s, &mut x, &mut y, rx, ry);
        s /= 2;
    }

    d
}

//! Shift-and-add multiplication.

/// Multiply by walking every bit of `b`, adding the shifted `a` for each set bit.
///
/// Wraps on overflow, like native unsigned multiplication.
pub fn multiply(a: u32, b: u32) -> u32 {
    let mut acc: u32 = 0;
    let mut multiplier = a;
    let mut bits = b;
    for _ in 0..u32::BITS {
        if bits & 1 == 1 {
            acc = acc.wrapping_add(multiplier);
        }
        bits >>= 1;
        multiplier <<= 1;
    }
    acc
}

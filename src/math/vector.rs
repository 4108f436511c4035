//! Elementwise helpers over `[f64]` vectors.

use crate::error::{NetworkError, Result};

fn check_len(context: &'static str, a: &[f64], b: &[f64]) -> Result<()> {
    if a.len() != b.len() {
        return Err(NetworkError::DimensionMismatch {
            context,
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(())
}

/// `a - b`
pub fn sub(a: &[f64], b: &[f64]) -> Result<Vec<f64>> {
    check_len("vector sub", a, b)?;
    Ok(a.iter().zip(b).map(|(x, y)| x - y).collect())
}

/// Element-wise (Hadamard) product.
pub fn hadamard(a: &[f64], b: &[f64]) -> Result<Vec<f64>> {
    check_len("hadamard product", a, b)?;
    Ok(a.iter().zip(b).map(|(x, y)| x * y).collect())
}

/// `a += factor * b`
pub fn add_scaled(a: &mut [f64], b: &[f64], factor: f64) -> Result<()> {
    check_len("vector add_scaled", a, b)?;
    for (x, &y) in a.iter_mut().zip(b) {
        *x += factor * y;
    }
    Ok(())
}

/// Index of the largest entry; ties go to the lowest index.
///
/// Returns `None` for an empty slice. NaN entries never win.
pub fn argmax(v: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &x) in v.iter().enumerate() {
        match best {
            Some((_, max)) if x <= max || x.is_nan() => {}
            None if x.is_nan() => {}
            _ => best = Some((i, x)),
        }
    }
    best.map(|(i, _)| i)
}

//! Logistic activation.
//!
//! No clamping is applied: for large |z| the result saturates to exactly
//! `0.0` or `1.0` in floating point, and `sigmoid_prime` underflows to `0.0`.

/// σ(z) = 1 / (1 + e^-z)
pub fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// σ'(z) = σ(z)(1 - σ(z))
pub fn sigmoid_prime(z: f64) -> f64 {
    let s = sigmoid(z);
    s * (1.0 - s)
}

pub fn sigmoid_vec(z: &[f64]) -> Vec<f64> {
    z.iter().map(|&x| sigmoid(x)).collect()
}

pub fn sigmoid_prime_vec(z: &[f64]) -> Vec<f64> {
    z.iter().map(|&x| sigmoid_prime(x)).collect()
}

pub mod bs;

/// Utility functions shared by the pricing models
pub mod utils {
    /// Standard normal cumulative distribution function.
    ///
    /// 0.5 * [1 + erf(x / sqrt(2))]
    pub fn norm_cdf(x: f64) -> f64 {
        0.5 * (1.0 + libm::erf(x / (2.0_f64).sqrt()))
    }
}

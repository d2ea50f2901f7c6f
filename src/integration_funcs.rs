use crate::errors::CosmoResult;

/// Fixed-step midpoint rule over `[lower, upper]`.
///
/// The integrand returns `K` values per evaluation so several integrals sharing the
/// same expensive term (e.g. the expansion rate) are accumulated in one pass. Sample `i`
/// sits at `lower + (upper - lower) * (i + 0.5) / steps` and each sum is scaled by
/// `(upper - lower) / steps`. The first integrand error stops the sum.
///
/// #Examples
/// ```
/// use cosmocalc::integration_funcs::midpoint_rule;
/// let [area] = midpoint_rule(0., 2., 100, |x| Ok([x])).unwrap();
/// assert!((area - 2.).abs() < 1e-12);
/// ```
pub fn midpoint_rule<const K: usize, F>(
    lower: f64,
    upper: f64,
    steps: usize,
    mut integrand: F,
) -> CosmoResult<[f64; K]>
where
    F: FnMut(f64) -> CosmoResult<[f64; K]>,
{
    let n = steps as f64;
    let width = upper - lower;
    let mut sums = [0.; K];

    for i in 0..steps {
        let x = lower + width * (i as f64 + 0.5) / n;
        let values = integrand(x)?;
        for (sum, value) in sums.iter_mut().zip(values) {
            *sum += value;
        }
    }

    Ok(sums.map(|sum| width * sum / n))
}

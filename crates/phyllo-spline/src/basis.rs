//! Cox-de Boor basis-function evaluation with a dense sample cache.

use phyllo_core::{PhylloError, Result};
use serde::{Deserialize, Serialize};

use crate::knot::{find_span, knot_vector, BoundaryMode};

/// All basis functions of one B-spline space, evaluated together.
///
/// Holds the knot vector, the most recently computed weight vector, and
/// an optional dense grid of weights sampled at uniformly spaced
/// parameters in [0, 1]. The grid is a pure function of the current
/// degree, function count, and knot vector; after changing any of those
/// the caller must regenerate it before reading samples again.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasisFunctionSet {
    degree: usize,
    knots: Vec<f64>,
    weights: Vec<f64>,
    samples: Vec<Vec<f64>>,
}

impl BasisFunctionSet {
    /// Create a set of `num_funcs` basis functions of the given degree.
    ///
    /// `degree` is coerced to at least 1 and `num_funcs` to at least
    /// `degree + 1`. The stored weight vector is initialized at `u = 0`;
    /// the sample grid starts empty and is built by
    /// [`generate_samples`](Self::generate_samples).
    pub fn new(num_funcs: usize, degree: usize, mode: BoundaryMode) -> Self {
        let degree = degree.max(1);
        let num_funcs = num_funcs.max(degree + 1);
        let mut set = Self {
            degree,
            knots: knot_vector(degree, num_funcs, mode),
            weights: vec![0.0; num_funcs],
            samples: Vec::new(),
        };
        set.compute_at(0.0);
        set
    }

    /// Number of basis functions in the set.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn knots(&self) -> &[f64] {
        &self.knots
    }

    /// Replace the knot vector.
    ///
    /// The replacement must match the current length; on mismatch the
    /// prior knots are retained and an error is returned. Accepted values
    /// are clamped into [0, 1]. The sample grid is stale afterwards.
    pub fn set_knots(&mut self, knots: Vec<f64>) -> Result<()> {
        if knots.len() != self.knots.len() {
            return Err(PhylloError::KnotLengthMismatch {
                expected: self.knots.len(),
                actual: knots.len(),
            });
        }
        self.knots = knots;
        for knot in &mut self.knots {
            *knot = knot.clamp(0.0, 1.0);
        }
        Ok(())
    }

    /// Regenerate the default knot vector for the given boundary mode.
    ///
    /// The sample grid is stale afterwards.
    pub fn reset_knots(&mut self, mode: BoundaryMode) {
        self.knots = knot_vector(self.degree, self.weights.len(), mode);
    }

    /// Evaluate every basis-function weight at `u`.
    ///
    /// The returned vector has one entry per function and sums to 1 for
    /// any `u` in the curve domain (partition of unity).
    pub fn evaluate_at(&self, u: f64) -> Vec<f64> {
        let mut weights = vec![0.0; self.weights.len()];
        self.evaluate_into(&mut weights, u);
        weights
    }

    /// Evaluate at `u` into the stored weight vector, readable through
    /// [`value_at`](Self::value_at).
    pub fn compute_at(&mut self, u: f64) {
        let mut weights = std::mem::take(&mut self.weights);
        self.evaluate_into(&mut weights, u);
        self.weights = weights;
    }

    /// Stored weight of function `index`, or -1.0 when out of range.
    pub fn value_at(&self, index: usize) -> f64 {
        if index >= self.weights.len() {
            return -1.0;
        }
        self.weights[index]
    }

    /// Default sample-grid resolution: 20 rows per function plus the
    /// endpoint row.
    pub fn default_sample_count(&self) -> usize {
        20 * self.weights.len() + 1
    }

    /// Rebuild the sample grid from `num_samples` uniformly spaced
    /// parameters across [0, 1].
    pub fn generate_samples(&mut self, num_samples: usize) {
        let shape_ok = self.samples.len() == num_samples
            && self
                .samples
                .first()
                .map_or(true, |row| row.len() == self.weights.len());
        if !shape_ok {
            self.samples = vec![vec![0.0; self.weights.len()]; num_samples];
        }
        if num_samples == 0 {
            return;
        }

        let denom = (num_samples - 1).max(1) as f64;
        let mut samples = std::mem::take(&mut self.samples);
        for (i, row) in samples.iter_mut().enumerate() {
            self.evaluate_into(row, i as f64 / denom);
        }
        self.samples = samples;
    }

    /// Rebuild the sample grid at the default resolution.
    pub fn generate_default_samples(&mut self) {
        self.generate_samples(self.default_sample_count());
    }

    /// Cached weight of function `func_index` at grid row `sample_index`,
    /// or -1.0 when either index is out of range.
    pub fn sample_at(&self, sample_index: usize, func_index: usize) -> f64 {
        if func_index >= self.weights.len() {
            return -1.0;
        }
        if sample_index >= self.samples.len() {
            return -1.0;
        }
        self.samples[sample_index][func_index]
    }

    // Cox-de Boor recursion, all functions in one pass.
    fn evaluate_into(&self, weights: &mut [f64], u: f64) {
        let mut u = u;
        let mut k = find_span(&self.knots, u);

        if k < self.degree {
            k = self.degree;
            u = self.knots[k];
        }
        if k >= self.knots.len() - 1 - self.degree {
            // Snap u before narrowing k: the weight index range is one
            // shorter than the control-point range of the curve case.
            u = self.knots[k];
            k = self.knots.len() - 1 - self.degree - 1;
        }

        weights.fill(0.0);
        weights[k] = 1.0;

        for d in 1..=self.degree {
            let left = self.knots[k + 1] - self.knots[k - d + 1];
            weights[k - d] = if left > 0.0 {
                (self.knots[k + 1] - u) / left * weights[k - d + 1]
            } else {
                0.0
            };

            for i in (k - d + 1)..k {
                let mut growing = 0.0;
                if self.knots[i + d] - self.knots[i] > 0.0 {
                    growing = (u - self.knots[i]) / (self.knots[i + d] - self.knots[i]);
                }
                let mut shrinking = 0.0;
                if self.knots[i + 1 + d] - self.knots[i + 1] > 0.0 {
                    shrinking =
                        (self.knots[i + 1 + d] - u) / (self.knots[i + 1 + d] - self.knots[i + 1]);
                }
                weights[i] = growing * weights[i] + shrinking * weights[i + 1];
            }

            let right = self.knots[k + d] - self.knots[k];
            weights[k] = if right > 0.0 {
                (u - self.knots[k]) / right * weights[k]
            } else {
                0.0
            };
        }
    }
}

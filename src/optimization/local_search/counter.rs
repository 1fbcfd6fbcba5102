//! Counting evaluator shared by the local searches.
use std::cell::Cell;

use crate::optimization::{
    errors::OptResult,
    loglik_optimizer::{COST_COUNT, FnEvalMap, LogLikelihood, Theta, validation::validate_value},
};

/// Evaluates `ℓ(θ)` for a fixed model and data set, rejecting non-finite
/// values and counting calls under [`COST_COUNT`].
pub(crate) struct CountingEval<'a, F: LogLikelihood> {
    f: &'a F,
    data: &'a F::Data,
    count: Cell<u64>,
}

impl<'a, F: LogLikelihood> CountingEval<'a, F> {
    pub(crate) fn new(f: &'a F, data: &'a F::Data) -> Self {
        Self { f, data, count: Cell::new(0) }
    }

    pub(crate) fn value(&self, theta: &Theta) -> OptResult<f64> {
        self.count.set(self.count.get() + 1);
        let value = self.f.value(theta, self.data)?;
        validate_value(value)?;
        Ok(value)
    }

    pub(crate) fn evals(&self) -> u64 {
        self.count.get()
    }

    pub(crate) fn fn_evals(&self) -> FnEvalMap {
        FnEvalMap::from([(COST_COUNT.to_string(), self.evals())])
    }
}

/// Keep `value` inside `[floor, ceiling]`.
pub(crate) fn clamp_to_range(value: f64, floor: f64, ceiling: f64) -> f64 {
    if value < floor {
        floor
    } else if value > ceiling {
        ceiling
    } else {
        value
    }
}

//! Validated configuration for the derivative-free searches.
//!
//! Every struct follows the same pattern as [`Tolerances`](crate::optimization::loglik_optimizer::Tolerances):
//! public fields, a `new` constructor that validates and returns
//! [`OptResult`], and a `Default` with the values the analysis uses.
use ndarray::Array1;

use crate::optimization::errors::{OptError, OptResult};

/// Options for [`window_search`](super::window_search).
///
/// - `initial`: starting window `(prev, curr, next)`.
/// - `tol`: both gaps `|prev - curr|` and `|curr - next|` must fall below
///   this value to stop.
/// - `floor`: smallest value a backward shift may produce.
/// - `ceiling`: largest value a forward shift may produce; `+inf` leaves
///   forward shifts unbounded.
/// - `max_iter`: iteration cap; reaching it reports non-convergence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowOptions {
    pub initial: [f64; 3],
    pub tol: f64,
    pub floor: f64,
    pub ceiling: f64,
    pub max_iter: usize,
}

impl WindowOptions {
    /// # Errors
    /// - [`OptError::InvalidWindow`] unless the window is finite and
    ///   `prev < curr < next`.
    /// - [`OptError::InvalidSearchTol`], [`OptError::InvalidFloor`] for
    ///   non-finite or non-positive values.
    /// - [`OptError::InvalidMaxIter`] if `max_iter == 0`.
    pub fn new(initial: [f64; 3], tol: f64, floor: f64, max_iter: usize) -> OptResult<Self> {
        let [prev, curr, next] = initial;
        if initial.iter().any(|v| !v.is_finite()) {
            return Err(OptError::InvalidWindow {
                prev,
                curr,
                next,
                reason: "Window points must be finite.",
            });
        }
        if !(prev < curr && curr < next) {
            return Err(OptError::InvalidWindow {
                prev,
                curr,
                next,
                reason: "Window points must be strictly increasing.",
            });
        }
        verify_search_tol(tol)?;
        verify_floor(floor)?;
        verify_max_iter(max_iter)?;
        Ok(Self { initial, tol, floor, ceiling: f64::INFINITY, max_iter })
    }

    /// Cap forward shifts at `ceiling`.
    ///
    /// # Errors
    /// [`OptError::InvalidCeiling`] if `ceiling` is NaN or lies below the
    /// floor or the initial `next`.
    pub fn with_ceiling(mut self, ceiling: f64) -> OptResult<Self> {
        verify_ceiling(None, ceiling, self.floor.max(self.initial[2]))?;
        self.ceiling = ceiling;
        Ok(self)
    }
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            initial: [1e-4, 0.8, 0.9999],
            tol: 1e-6,
            floor: 1e-5,
            ceiling: f64::INFINITY,
            max_iter: 1000,
        }
    }
}

/// Options for [`coordinate_sweep`](super::coordinate_sweep).
///
/// - `window`: options for each 1-D search.
/// - `max_sweeps`: cap on full passes over the coordinates.
/// - `tol_change`: stop once a pass changes `ℓ` by less than this.
/// - `ceilings`: per-coordinate ceilings replacing `window.ceiling`.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepOptions {
    pub window: WindowOptions,
    pub max_sweeps: usize,
    pub tol_change: f64,
    pub ceilings: Option<Array1<f64>>,
}

impl SweepOptions {
    /// # Errors
    /// - [`OptError::InvalidMaxIter`] if `max_sweeps == 0`.
    /// - [`OptError::InvalidSearchTol`] if `tol_change` is non-finite or
    ///   non-positive.
    pub fn new(window: WindowOptions, max_sweeps: usize, tol_change: f64) -> OptResult<Self> {
        verify_max_iter(max_sweeps)?;
        verify_search_tol(tol_change)?;
        Ok(Self { window, max_sweeps, tol_change, ceilings: None })
    }

    /// Give every coordinate its own ceiling.
    ///
    /// # Errors
    /// [`OptError::InvalidCeiling`] with the offending index, under the same
    /// rule as [`WindowOptions::with_ceiling`].
    pub fn with_ceilings(mut self, ceilings: Array1<f64>) -> OptResult<Self> {
        let min_allowed = self.window.floor.max(self.window.initial[2]);
        for (index, &ceiling) in ceilings.iter().enumerate() {
            verify_ceiling(Some(index), ceiling, min_allowed)?;
        }
        self.ceilings = Some(ceilings);
        Ok(self)
    }

    /// Window options for coordinate `coord`.
    ///
    /// # Errors
    /// [`OptError::CeilingDimMismatch`] if `ceilings` does not match `dim`.
    pub(crate) fn window_for(&self, coord: usize, dim: usize) -> OptResult<WindowOptions> {
        match &self.ceilings {
            None => Ok(self.window),
            Some(c) if c.len() != dim => {
                Err(OptError::CeilingDimMismatch { expected: dim, found: c.len() })
            }
            Some(c) => Ok(WindowOptions { ceiling: c[coord], ..self.window }),
        }
    }
}

impl Default for SweepOptions {
    fn default() -> Self {
        Self { window: WindowOptions::default(), max_sweeps: 20, tol_change: 1e-6, ceilings: None }
    }
}

/// Options for [`finite_diff_ascent`](super::finite_diff_ascent).
///
/// - `step`: forward-difference step `dx`.
/// - `rates`: per-coordinate learning rates; `None` means `1.0` everywhere.
///   A zero rate freezes its coordinate.
/// - `global_rate`: multiplier applied on top of `rates`.
/// - `tol`: stop once `Σ Δ_i²` falls below this value.
/// - `floor`: smallest value any coordinate may take after an update.
/// - `ceilings`: largest value per coordinate; `None` means unbounded.
/// - `max_iter`: iteration cap; reaching it reports non-convergence.
#[derive(Debug, Clone, PartialEq)]
pub struct AscentOptions {
    pub step: f64,
    pub rates: Option<Array1<f64>>,
    pub global_rate: f64,
    pub tol: f64,
    pub floor: f64,
    pub ceilings: Option<Array1<f64>>,
    pub max_iter: usize,
}

impl AscentOptions {
    /// # Errors
    /// - [`OptError::InvalidStep`] for a non-finite or non-positive `step`.
    /// - [`OptError::InvalidLearningRate`] for a negative or non-finite
    ///   rate (`index: Some(i)`) or a non-positive `global_rate`
    ///   (`index: None`).
    /// - [`OptError::InvalidSearchTol`], [`OptError::InvalidFloor`],
    ///   [`OptError::InvalidMaxIter`] as for [`WindowOptions::new`].
    pub fn new(
        step: f64, rates: Option<Array1<f64>>, global_rate: f64, tol: f64, floor: f64,
        max_iter: usize,
    ) -> OptResult<Self> {
        if !step.is_finite() || step <= 0.0 {
            return Err(OptError::InvalidStep {
                step,
                reason: "Finite-difference step must be finite and positive.",
            });
        }
        if let Some(rates) = &rates {
            for (index, &value) in rates.iter().enumerate() {
                if !value.is_finite() || value < 0.0 {
                    return Err(OptError::InvalidLearningRate {
                        index: Some(index),
                        value,
                        reason: "Learning rates must be finite and non-negative.",
                    });
                }
            }
        }
        if !global_rate.is_finite() || global_rate <= 0.0 {
            return Err(OptError::InvalidLearningRate {
                index: None,
                value: global_rate,
                reason: "Global learning rate must be finite and positive.",
            });
        }
        verify_search_tol(tol)?;
        verify_floor(floor)?;
        verify_max_iter(max_iter)?;
        Ok(Self { step, rates, global_rate, tol, floor, ceilings: None, max_iter })
    }

    /// Clamp every update of coordinate `i` to at most `ceilings[i]`.
    ///
    /// # Errors
    /// [`OptError::InvalidCeiling`] for a NaN ceiling or one below the floor.
    pub fn with_ceilings(mut self, ceilings: Array1<f64>) -> OptResult<Self> {
        for (index, &ceiling) in ceilings.iter().enumerate() {
            verify_ceiling(Some(index), ceiling, self.floor)?;
        }
        self.ceilings = Some(ceilings);
        Ok(self)
    }

    /// Learning rate for coordinate `i`.
    pub fn rate(&self, i: usize) -> f64 {
        self.rates.as_ref().map_or(1.0, |r| r[i])
    }

    /// Ceiling for coordinate `i`.
    pub fn ceiling(&self, i: usize) -> f64 {
        self.ceilings.as_ref().map_or(f64::INFINITY, |c| c[i])
    }
}

impl Default for AscentOptions {
    fn default() -> Self {
        Self {
            step: 1e-6,
            rates: None,
            global_rate: 1e-3,
            tol: 1e-12,
            floor: 1e-5,
            ceilings: None,
            max_iter: 1000,
        }
    }
}

fn verify_search_tol(tol: f64) -> OptResult<()> {
    if !tol.is_finite() || tol <= 0.0 {
        return Err(OptError::InvalidSearchTol {
            tol,
            reason: "Search tolerance must be finite and positive.",
        });
    }
    Ok(())
}

fn verify_floor(floor: f64) -> OptResult<()> {
    if !floor.is_finite() || floor <= 0.0 {
        return Err(OptError::InvalidFloor { floor, reason: "Floor must be finite and positive." });
    }
    Ok(())
}

fn verify_ceiling(index: Option<usize>, ceiling: f64, min_allowed: f64) -> OptResult<()> {
    if ceiling.is_nan() || ceiling < min_allowed {
        return Err(OptError::InvalidCeiling {
            index,
            ceiling,
            reason: "Ceiling must not lie below the floor or the initial window.",
        });
    }
    Ok(())
}

fn verify_max_iter(max_iter: usize) -> OptResult<()> {
    if max_iter == 0 {
        return Err(OptError::InvalidMaxIter {
            max_iter,
            reason: "Maximum iterations must be greater than zero.",
        });
    }
    Ok(())
}

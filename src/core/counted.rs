use std::cell::Cell;

/// Wraps an integrand and counts how many times it is evaluated.
///
/// The quadrature routines never require a counter; this is a
/// caller-side diagnostic for reporting evaluation totals. The counter
/// is not synchronized, so a wrapper shared across threads needs
/// external coordination.
pub struct CountedFn<F> {
    f: F,
    evals: Cell<u64>,
}

impl<F: Fn(f64) -> f64> CountedFn<F> {
    pub fn new(f: F) -> Self {
        Self {
            f,
            evals: Cell::new(0),
        }
    }

    /// Evaluates the wrapped function, bumping the counter.
    pub fn eval(&self, x: f64) -> f64 {
        self.evals.set(self.evals.get() + 1);
        (self.f)(x)
    }

    /// The number of evaluations since construction or the last [`reset`](Self::reset).
    pub fn evals(&self) -> u64 {
        self.evals.get()
    }

    pub fn reset(&self) {
        self.evals.set(0);
    }

    /// Borrows the wrapper as a plain integrand for passing to the
    /// quadrature routines.
    pub fn as_fn(&self) -> impl Fn(f64) -> f64 + '_ {
        move |x| self.eval(x)
    }
}

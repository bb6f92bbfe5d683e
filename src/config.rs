//! Explicit configuration, threaded through the public API in place of the
//! source's process-wide flags (`spec.md` §9).

/// Verbosity level controlling which `tracing` events the pipeline emits.
/// Does not affect the computed result, only the printed/logged trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    /// Only warnings and errors.
    #[default]
    Silent,
    /// Per-segment progress (`tracing::info!`).
    Segments,
    /// Per-step diagnostics inside the monodromy followers (`tracing::debug!`).
    Steps,
}

/// All the orthogonal knobs of `spec.md` §6, gathered in one place.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Use the adaptive heuristic follower (§4.G) instead of the certified
    /// Sturm-sequence follower (§4.H).
    pub monodromy_approx: bool,
    /// Maximum Newton iterations per `newton_root` call.
    pub newton_limit: u32,
    /// Step-size heuristic divisor used by the approximate follower.
    pub adaptivity_factor: f64,
    /// Invoke an external braid-word shrinker before the Hurwitz quotient.
    pub shrink_braid: bool,
    /// Safety margin used by `separate_roots`/`separate_roots_initial_guess`
    /// to certify pairwise-disjoint attraction disks.
    pub safety: f64,
    /// Controls which `tracing` events are emitted.
    pub verbosity: Verbosity,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            monodromy_approx: false,
            newton_limit: 800,
            adaptivity_factor: 10.0,
            shrink_braid: false,
            safety: 100.0,
            verbosity: Verbosity::Silent,
        }
    }
}

impl Config {
    /// Start from the defaults documented in `spec.md` §6.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the certified Sturm-sequence follower (the default).
    #[must_use]
    pub fn certified(mut self) -> Self {
        self.monodromy_approx = false;
        self
    }

    /// Opt into the uncertified adaptive heuristic follower.
    #[must_use]
    pub fn approximate(mut self) -> Self {
        self.monodromy_approx = true;
        self
    }

    #[must_use]
    /// Override the Newton iteration limit.
    pub fn with_newton_limit(mut self, limit: u32) -> Self {
        self.newton_limit = limit;
        self
    }

    #[must_use]
    /// Override the adaptivity factor.
    pub fn with_adaptivity_factor(mut self, factor: f64) -> Self {
        self.adaptivity_factor = factor;
        self
    }

    #[must_use]
    /// Override the separation safety margin.
    pub fn with_safety(mut self, safety: f64) -> Self {
        self.safety = safety;
        self
    }

    #[must_use]
    /// Override the verbosity level.
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }
}

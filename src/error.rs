//! Error types for the braid-monodromy pipeline.
//!
//! Each variant corresponds to a failure mode of one pipeline stage. All of
//! them except [`Error::NotSquarefree`] are fatal: they abort the current
//! segment and propagate to the top level with no silent fallback between
//! the certified and approximate monodromy followers.

use thiserror::Error;

/// Errors produced while computing the braid-monodromy presentation of a
/// plane curve complement.
#[derive(Debug, Error)]
pub enum Error {
    /// The input curve shares a non-trivial factor with its `x`-derivative.
    ///
    /// Recovered locally by the driver: it divides `P` by
    /// `gcd(P, ∂P/∂x)` and continues with a warning.
    #[error("curve is not squarefree: shares factor {factor} with its x-derivative")]
    NotSquarefree {
        /// Textual rendering of the common factor that was divided out.
        factor: String,
    },

    /// Input coefficients are neither rational nor Gaussian-rational.
    #[error("unsupported coefficient field: {0}")]
    CoefficientUnsupported(String),

    /// `newton_root` exceeded its iteration limit without converging.
    #[error("Newton iteration did not converge within {limit} iterations")]
    NewtonNonConvergent {
        /// Configured iteration limit.
        limit: u32,
    },

    /// `separate_roots`/`separate_roots_initial_guess` could not certify
    /// pairwise-disjoint attraction basins.
    #[error("could not certify root separation (polynomial may have multiple roots, or safety margin {safety} too small)")]
    RootsNotSeparated {
        /// Safety factor in effect when certification failed.
        safety: f64,
    },

    /// The closest-point bijection between a computed and a stored fibre
    /// failed, either because it is not a bijection or because some strand
    /// moved more than a tenth of the fibre's minimum pairwise distance.
    #[error("fibre fit is ambiguous: {reason}")]
    FitAmbiguous {
        /// Human-readable explanation (not-a-bijection vs. displacement-too-large).
        reason: String,
    },

    /// Sturm certification could not advance the protected parameter past
    /// the current checkpoint.
    #[error("Sturm certification stalled at t = {tm}")]
    NonSeparable {
        /// Parameter value at which certification stalled.
        tm: f64,
    },

    /// `lbraid_to_word` encountered non-simple critical parameters even
    /// after lexicographic desingularisation.
    #[error("singular monodromy: non-simple crossing parameters after desingularisation")]
    SingularMonodromy,

    /// The trivializing horizontal line itself meets a critical value of
    /// the projection, for every height tried.
    #[error("could not find a trivializing line height avoiding critical values")]
    InvalidConfig,

    /// I/O failure while reading or writing persisted pipeline state.
    #[error("persistence I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure (de)serializing persisted pipeline state.
    #[error("persistence serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

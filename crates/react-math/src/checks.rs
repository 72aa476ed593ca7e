//! Dimension checks evaluated when a generic type is instantiated, plus the precondition macro.
//!
//! Each check is an associated constant whose initializer asserts on the const parameters.
//! Referencing the constant from a function body forces the evaluation for the concrete sizes
//! used by the caller, so an invalid size is a build error rather than a runtime panic.

/// Asserts a precondition in debug builds or when the `checked` feature is enabled.
macro_rules! check {
    ($cond:expr, $($arg:tt)+) => {
        if cfg!(any(debug_assertions, feature = "checked")) {
            assert!($cond, $($arg)+);
        }
    };
}

pub(crate) struct VectorDim<const S: usize>;

impl<const S: usize> VectorDim<S> {
    pub(crate) const VALID: () = assert!(S >= 2, "vector dimension must be at least 2");
}

/// The vector has a component at position `N - 1`.
pub(crate) struct HasComponent<const S: usize, const N: usize>;

impl<const S: usize, const N: usize> HasComponent<S, N> {
    pub(crate) const VALID: () = assert!(S >= N, "vector has no component at this position");
}

pub(crate) struct MatrixDim<const R: usize, const C: usize>;

impl<const R: usize, const C: usize> MatrixDim<R, C> {
    pub(crate) const VALID: () = assert!(R >= 1 && C >= 1, "matrix needs at least one row and column");
}

/// `RR x CC` is exactly one row and one column smaller than `R x C`.
pub(crate) struct Reduced<const R: usize, const C: usize, const RR: usize, const CC: usize>;

impl<const R: usize, const C: usize, const RR: usize, const CC: usize> Reduced<R, C, RR, CC> {
    pub(crate) const VALID: () = assert!(
        R >= 2 && C >= 2 && RR + 1 == R && CC + 1 == C,
        "reduced matrix must drop exactly one row and one column"
    );
}

/// `MM x NN` fits inside `R x C`.
pub(crate) struct Block<const R: usize, const C: usize, const MM: usize, const NN: usize>;

impl<const R: usize, const C: usize, const MM: usize, const NN: usize> Block<R, C, MM, NN> {
    pub(crate) const VALID: () = assert!(
        MM >= 1 && NN >= 1 && MM <= R && NN <= C,
        "sub matrix must fit inside the source matrix"
    );
}

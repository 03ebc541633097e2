//! `Pipeline` - Deferred, composable success-or-failure computations.
//!
//! A `Pipeline<A, E>` wraps an asynchronous computation that, when executed,
//! produces exactly one `Result<A, E>`. Nothing is executed until [`run`]
//! is called, so composing pipelines builds a description of work, never a
//! side effect.
//!
//! # Design Philosophy
//!
//! `Pipeline` "describes" a chain of validation, lookup, and mutation steps
//! but doesn't "execute" it. Execution happens only via `run().await`, which
//! should be called at the program's "edge" (e.g., in HTTP handlers). Any
//! step failing short-circuits all downstream steps without manual
//! branching.
//!
//! # Examples
//!
//! ```rust
//! use cashbook::pipeline::Pipeline;
//!
//! #[tokio::main]
//! async fn main() {
//!     let pipeline: Pipeline<i32, String> = Pipeline::of(10)
//!         .map(|value| value * 2)
//!         .flat_map(|value| Pipeline::of(value + 1));
//!     assert_eq!(pipeline.run().await, Ok(21));
//!
//!     let failed: Pipeline<i32, String> = Pipeline::raise("boom".to_string());
//!     assert_eq!(failed.map(|value| value * 2).run().await, Err("boom".to_string()));
//! }
//! ```
//!
//! [`run`]: Pipeline::run

use std::future::Future;
use std::pin::Pin;

/// A deferred asynchronous computation yielding one success-or-failure
/// outcome.
///
/// # Type Parameters
///
/// - `A`: The success value type.
/// - `E`: The raised error type.
///
/// # Invariants
///
/// - Construction and composition perform no effects; only [`Pipeline::run`]
///   executes the chain.
/// - Once run, the outcome is a one-shot `Result<A, E>` - never both, and
///   never more than once (`run` consumes the pipeline).
/// - A failure at any step bypasses every downstream success-channel step.
pub struct Pipeline<A, E> {
    /// The wrapped computation, boxed so steps of different concrete future
    /// types compose into a single chain.
    run_pipeline: Box<dyn FnOnce() -> Pin<Box<dyn Future<Output = Result<A, E>> + Send>> + Send>,
}

// =============================================================================
// Constructors
// =============================================================================

impl<A: 'static, E: 'static> Pipeline<A, E> {
    /// Creates a new `Pipeline` from an async closure.
    ///
    /// The closure will not be invoked until [`Pipeline::run`] is called.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let pipeline = Pipeline::new(|| async {
    ///     Ok(load_something().await?)
    /// });
    /// ```
    pub fn new<F, Fut>(step: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<A, E>> + Send + 'static,
    {
        Self {
            run_pipeline: Box::new(move || Box::pin(step())),
        }
    }

    /// Executes the composed chain and resolves to its outcome.
    ///
    /// This is the only operation that performs effects, and it never
    /// panics on a failed step; failures surface as `Err`.
    pub async fn run(self) -> Result<A, E> {
        (self.run_pipeline)().await
    }
}

impl<A: Send + 'static, E: Send + 'static> Pipeline<A, E> {
    /// Wraps a pure value; running yields `Ok(value)`.
    pub fn of(value: A) -> Self {
        Self::new(move || async move { Ok(value) })
    }

    /// Wraps an error; running yields `Err(error)`.
    pub fn raise(error: E) -> Self {
        Self::new(move || async move { Err(error) })
    }

    /// Lifts an already-computed `Result` into the pipeline's
    /// success/failure channel.
    ///
    /// Useful for feeding the outcome of a pure parser into a chain of
    /// deferred steps.
    pub fn from_result(result: Result<A, E>) -> Self {
        Self::new(move || async move { result })
    }
}

// =============================================================================
// Functor Operations
// =============================================================================

impl<A: Send + 'static, E: Send + 'static> Pipeline<A, E> {
    /// Transforms the success value; failures bypass `function` unchanged.
    pub fn map<B, F>(self, function: F) -> Pipeline<B, E>
    where
        F: FnOnce(A) -> B + Send + 'static,
        B: Send + 'static,
    {
        Pipeline::new(move || async move { self.run().await.map(function) })
    }

    /// Transforms the success value with an asynchronous function.
    ///
    /// Like [`Pipeline::map`], but `function` returns a future that is
    /// awaited as part of the chain.
    pub fn map_async<B, F, Fut>(self, function: F) -> Pipeline<B, E>
    where
        F: FnOnce(A) -> Fut + Send + 'static,
        Fut: Future<Output = B> + Send + 'static,
        B: Send + 'static,
    {
        Pipeline::new(move || async move {
            match self.run().await {
                Ok(value) => Ok(function(value).await),
                Err(error) => Err(error),
            }
        })
    }

    /// Transforms the success value with a fallible function.
    ///
    /// A returned `Err` becomes the pipeline's failure outcome, exactly as
    /// if it had been [`raise`]d at this step.
    ///
    /// [`raise`]: Pipeline::raise
    pub fn try_map<B, F>(self, function: F) -> Pipeline<B, E>
    where
        F: FnOnce(A) -> Result<B, E> + Send + 'static,
        B: Send + 'static,
    {
        Pipeline::new(move || async move { self.run().await.and_then(function) })
    }

    /// Transforms the error channel; successes pass through unchanged.
    pub fn map_err<E2, F>(self, function: F) -> Pipeline<A, E2>
    where
        F: FnOnce(E) -> E2 + Send + 'static,
        E2: Send + 'static,
    {
        Pipeline::new(move || async move { self.run().await.map_err(function) })
    }
}

// =============================================================================
// Monad Operations
// =============================================================================

impl<A: Send + 'static, E: Send + 'static> Pipeline<A, E> {
    /// Chains a step that itself returns a pipeline, flattening the result.
    ///
    /// If `self` fails, `function` is never invoked and the failure
    /// propagates. No pipeline-of-pipeline nesting is ever observable.
    pub fn flat_map<B, F>(self, function: F) -> Pipeline<B, E>
    where
        F: FnOnce(A) -> Pipeline<B, E> + Send + 'static,
        B: Send + 'static,
    {
        Pipeline::new(move || async move {
            match self.run().await {
                Ok(value) => function(value).run().await,
                Err(error) => Err(error),
            }
        })
    }

    /// Alias for [`Pipeline::flat_map`], the conventional Rust name for
    /// monadic bind.
    pub fn and_then<B, F>(self, function: F) -> Pipeline<B, E>
    where
        F: FnOnce(A) -> Pipeline<B, E> + Send + 'static,
        B: Send + 'static,
    {
        self.flat_map(function)
    }

    /// Runs `function` for its side effect on the success value, passing
    /// the original value through. Failures bypass `function`.
    #[must_use]
    pub fn tap<F>(self, function: F) -> Self
    where
        F: FnOnce(&A) + Send + 'static,
    {
        self.map(move |value| {
            function(&value);
            value
        })
    }

    /// Combines two pipelines sequentially.
    ///
    /// `self` is evaluated first; if it fails, `other` is never evaluated
    /// and `self`'s error propagates. If `other` fails, its error
    /// propagates. Only when both succeed is `combine` applied.
    pub fn zip<B, C, F>(self, other: Pipeline<B, E>, combine: F) -> Pipeline<C, E>
    where
        F: FnOnce(A, B) -> C + Send + 'static,
        B: Send + 'static,
        C: Send + 'static,
    {
        Pipeline::new(move || async move {
            let left = self.run().await?;
            let right = other.run().await?;
            Ok(combine(left, right))
        })
    }
}

impl<A, E> std::fmt::Debug for Pipeline<A, E> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "Pipeline(<deferred>)")
    }
}

//! # evalpix core
//!
//! Core types for per-pixel evalscripts.
//!
//! This crate provides:
//! - `Band` and `Sample`: validated per-pixel band values
//! - `OutputDeclaration`: the static `setup()` metadata of a script
//! - `Evaluation`: output vectors keyed by output id
//! - The `Evalscript` trait every script implements

pub mod band;
pub mod declaration;
pub mod error;
pub mod evaluation;
pub mod sample;

pub use band::Band;
pub use declaration::{Mosaicking, OutputBand, OutputDeclaration, SampleType};
pub use error::{Error, Result};
pub use evaluation::{Evaluation, OutputVector};
pub use sample::Sample;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::band::Band;
    pub use crate::declaration::{Mosaicking, OutputBand, OutputDeclaration, SampleType};
    pub use crate::error::{Error, Result};
    pub use crate::evaluation::{Evaluation, OutputVector};
    pub use crate::sample::Sample;
    pub use crate::Evalscript;
}

/// Core trait for all evalscripts.
///
/// An evalscript is a pure function from one pixel's samples to its output
/// vectors. It holds no state across calls, so the engine may evaluate
/// pixels concurrently.
pub trait Evalscript: Send + Sync {
    /// A single `Sample` or a `[Sample]` sequence
    type Input: ?Sized;
    /// Parameters controlling script behavior
    type Params: Default;

    /// Returns the script name
    fn name(&self) -> &'static str;

    /// Returns a description of what the script computes
    fn description(&self) -> &'static str;

    /// Static input/output declaration; identical on every call
    fn describe(&self) -> OutputDeclaration;

    /// Evaluate one pixel
    fn evaluate(&self, input: &Self::Input, params: &Self::Params) -> Result<Evaluation>;

    /// Evaluate with default parameters
    fn evaluate_default(&self, input: &Self::Input) -> Result<Evaluation> {
        self.evaluate(input, &Self::Params::default())
    }

    /// Evaluate and verify the result against [`Evalscript::describe`]
    fn evaluate_checked(&self, input: &Self::Input, params: &Self::Params) -> Result<Evaluation> {
        let evaluation = self.evaluate(input, params)?;
        evaluation.conform(&self.describe())?;
        Ok(evaluation)
    }
}

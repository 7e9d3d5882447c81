use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use derive_getters::Getters;
use derive_more::Constructor;
use eyre::Result;

use crate::pairwise::AlignError;

/// Sequence that receives a gap.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Side {
    /// Gap in the target: the query advances while the target doesn't.
    Target,
    /// Gap in the query: the target advances while the query doesn't.
    Query,
}

/// Position class of a gap within the sequence that receives it.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Region {
    /// Gap before the first symbol.
    Left,
    Internal,
    /// Gap after the last symbol.
    Right,
}

impl Region {
    /// Classify a gap placed at the given boundary of a sequence with `len` symbols.
    pub fn classify(position: usize, len: usize) -> Self {
        if position == 0 {
            Region::Left
        } else if position == len {
            Region::Right
        } else {
            Region::Internal
        }
    }

    /// Same region as seen from the opposite end of the sequence.
    pub fn mirrored(&self) -> Self {
        match self {
            Region::Left => Region::Right,
            Region::Internal => Region::Internal,
            Region::Right => Region::Left,
        }
    }
}

/// Scalar gap cost: `open` for the first gapped symbol and `extend` for each following one.
#[derive(Copy, Clone, PartialEq, Debug, Default, Getters, Constructor)]
pub struct Affine {
    open: f64,
    extend: f64,
}

impl Affine {
    /// Total cost of a gap run with the given length.
    pub fn score(&self, length: usize) -> f64 {
        if length == 0 {
            0.0
        } else {
            self.open + (length - 1) as f64 * self.extend
        }
    }

    /// True if every gapped symbol costs the same, i.e. open == extend.
    pub fn is_linear(&self) -> bool {
        self.open == self.extend
    }
}

type Callback = dyn Fn(usize, usize) -> Result<f64> + Send + Sync;

/// User supplied gap cost `f(position, length) -> total score`.
///
/// `position` is the 0-based offset, in the forward orientation of the gapped sequence, at which
/// the gap is placed. Errors returned by the callback abort the alignment and are propagated
/// to the caller unchanged.
#[derive(Clone)]
pub struct GapFunction {
    name: String,
    callback: Arc<Callback>,
}

impl GapFunction {
    pub fn new(
        name: impl Into<String>,
        callback: impl Fn(usize, usize) -> Result<f64> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            callback: Arc::new(callback),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn call(&self, position: usize, length: usize) -> Result<f64> {
        let score = (self.callback)(position, length)?;
        if score.is_nan() {
            return Err(AlignError::input(format!(
                "gap function {} returned NaN for position {position} and length {length}",
                self.name
            )));
        }
        Ok(score)
    }
}

impl Debug for GapFunction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "GapFunction({})", self.name)
    }
}

/// Gap costs of one sequence: affine scores for each region, or a function overriding all of them.
#[derive(Clone, Debug, Default)]
pub struct Gaps {
    internal: Affine,
    left: Affine,
    right: Affine,
    function: Option<GapFunction>,
}

impl Gaps {
    pub fn affine(&self, region: Region) -> &Affine {
        match region {
            Region::Left => &self.left,
            Region::Internal => &self.internal,
            Region::Right => &self.right,
        }
    }

    pub fn function(&self) -> Option<&GapFunction> {
        self.function.as_ref()
    }

    /// Total cost of a gap with the given length. `position` is passed to the gap function as is.
    pub fn score(&self, region: Region, position: usize, length: usize) -> Result<f64> {
        match &self.function {
            Some(function) => function.call(position, length),
            None => Ok(self.affine(region).score(length)),
        }
    }

    /// True if the gap cost is a single constant per gapped symbol, regardless of the region.
    pub fn is_uniform(&self) -> bool {
        self.function.is_none()
            && self.internal.is_linear()
            && self.internal == self.left
            && self.internal == self.right
    }

    pub(crate) fn set_open(&mut self, region: Region, score: f64) {
        self.function = None;
        self.affine_mut(region).open = score;
    }

    pub(crate) fn set_extend(&mut self, region: Region, score: f64) {
        self.function = None;
        self.affine_mut(region).extend = score;
    }

    pub(crate) fn set_function(&mut self, function: GapFunction) {
        self.function = Some(function);
    }

    fn affine_mut(&mut self, region: Region) -> &mut Affine {
        match region {
            Region::Left => &mut self.left,
            Region::Internal => &mut self.internal,
            Region::Right => &mut self.right,
        }
    }
}

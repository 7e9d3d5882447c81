use std::borrow::Borrow;
use std::fmt::Display;

use derive_getters::{Dissolve, Getters};
use eyre::{eyre, Result};

use biobit_core_rs::num::PrimUInt;

use super::op::Op;

/// A run of identical operations in a pairwise alignment
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Getters, Dissolve)]
pub struct Step<Len: PrimUInt> {
    /// The length of the operation, e.g. the number of consequent matches or gaps.
    /// Guaranteed to be greater than zero.
    len: Len,
    /// The alignment operation
    op: Op,
}

impl<Len: PrimUInt> Step<Len> {
    pub fn new(op: Op, len: Len) -> Result<Self> {
        if len.is_zero() {
            return Err(eyre!("Step length must be greater than zero"));
        }
        Ok(Self { len, op })
    }

    /// Step for a length that is non-zero by construction, e.g. an edge of the traceback graph.
    pub(crate) fn new_unchecked(op: Op, len: Len) -> Self {
        debug_assert!(!len.is_zero());
        Self { len, op }
    }

    /// Merge adjacent steps with identical operations.
    /// If the sum of the lengths exceeds the maximum value of the step size, the step is divided accordingly.
    pub fn collapse(steps: &mut Vec<Step<Len>>) {
        if steps.len() <= 1 {
            return;
        }

        let (mut writep, mut readp) = (0, 1);
        while readp < steps.len() {
            if steps[writep].op == steps[readp].op {
                match steps[writep].len.checked_add(&steps[readp].len) {
                    Some(x) => steps[writep].len = x,
                    None => {
                        steps[readp].len =
                            steps[readp].len - (Len::max_value() - steps[writep].len);
                        steps[writep].len = Len::max_value();

                        writep += 1;
                        steps[writep] = steps[readp];
                    }
                }
            } else {
                writep += 1;
                steps[writep] = steps[readp];
            }
            readp += 1;
        }
        steps.truncate(writep + 1);
    }

    pub fn rle_string(steps: impl Iterator<Item: Borrow<Step<Len>>>) -> String
    where
        Len: Display,
    {
        let mut result = String::new();
        for step in steps {
            let step = step.borrow();
            result.push_str(&step.len().to_string());
            result.push(step.op().symbol());
        }
        result
    }
}

impl Step<usize> {
    /// Parse steps from their RLE representation, e.g. `2=1X3v`.
    pub fn parse_rle(rle: &str) -> Result<Vec<Self>> {
        let mut steps = Vec::new();
        let mut len = 0usize;
        let mut digits = false;
        for symbol in rle.chars() {
            if let Some(digit) = symbol.to_digit(10) {
                len = len
                    .checked_mul(10)
                    .and_then(|x| x.checked_add(digit as usize))
                    .ok_or_else(|| eyre!("Step length is too large in {rle:?}"))?;
                digits = true;
                continue;
            }

            let op = Op::try_from(symbol)
                .map_err(|_| eyre!("Unknown alignment operation {symbol:?} in {rle:?}"))?;
            if !digits {
                return Err(eyre!("Missing step length before {symbol:?} in {rle:?}"));
            }
            steps.push(Step::new(op, len)?);
            len = 0;
            digits = false;
        }
        if digits {
            return Err(eyre!("Dangling step length at the end of {rle:?}"));
        }
        Ok(steps)
    }
}

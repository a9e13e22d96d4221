//! Option greeks snapshot and its arithmetic
//!
//! Combining snapshots is used to aggregate risk across the legs of a
//! position. Absent inputs count as zero and every combined field comes out
//! present. The underlying price is never combined: it is carried over from
//! the left-hand operand. The combined `tick_attrib` is always 0.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

use crate::error::{CombineError, CombineResult};
use crate::value::Value;

/// Option greeks as computed by the API (or a model) for one contract
///
/// Each numeric field is `None` when it was not computed, which is distinct
/// from a computed zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OptionComputation {
    /// 0 = return-based, 1 = price-based
    pub tick_attrib: i32,
    pub implied_vol: Option<f64>,
    pub delta: Option<f64>,
    pub opt_price: Option<f64>,
    pub pv_dividend: Option<f64>,
    pub gamma: Option<f64>,
    pub vega: Option<f64>,
    pub theta: Option<f64>,
    pub und_price: Option<f64>,
}

impl OptionComputation {
    pub const TYPE_NAME: &'static str = "OptionComputation";

    pub fn new(tick_attrib: i32) -> Self {
        Self {
            tick_attrib,
            ..Default::default()
        }
    }

    pub fn with_implied_vol(mut self, implied_vol: f64) -> Self {
        self.implied_vol = Some(implied_vol);
        self
    }

    pub fn with_greeks(mut self, delta: f64, gamma: f64, vega: f64, theta: f64) -> Self {
        self.delta = Some(delta);
        self.gamma = Some(gamma);
        self.vega = Some(vega);
        self.theta = Some(theta);
        self
    }

    pub fn with_opt_price(mut self, opt_price: f64) -> Self {
        self.opt_price = Some(opt_price);
        self
    }

    pub fn with_pv_dividend(mut self, pv_dividend: f64) -> Self {
        self.pv_dividend = Some(pv_dividend);
        self
    }

    pub fn with_und_price(mut self, und_price: f64) -> Self {
        self.und_price = Some(und_price);
        self
    }

    /// Field-wise combination; `und_price` from `self`, `tick_attrib` reset
    fn combine(&self, other: &Self, op: impl Fn(f64, f64) -> f64) -> Self {
        let merge = |a: Option<f64>, b: Option<f64>| Some(op(a.unwrap_or(0.0), b.unwrap_or(0.0)));
        Self {
            tick_attrib: 0,
            implied_vol: merge(self.implied_vol, other.implied_vol),
            delta: merge(self.delta, other.delta),
            opt_price: merge(self.opt_price, other.opt_price),
            pv_dividend: merge(self.pv_dividend, other.pv_dividend),
            gamma: merge(self.gamma, other.gamma),
            vega: merge(self.vega, other.vega),
            theta: merge(self.theta, other.theta),
            und_price: self.und_price,
        }
    }

    /// Multiply every combinable field by `factor` (e.g. position size)
    pub fn scale(&self, factor: f64) -> Self {
        self.combine(&Self::default(), |a, _| a * factor)
    }

    /// Sum snapshots, keeping the first snapshot's underlying price
    ///
    /// Returns `None` for an empty iterator.
    pub fn sum<'a>(snapshots: impl IntoIterator<Item = &'a OptionComputation>) -> Option<Self> {
        let mut iter = snapshots.into_iter().peekable();
        let zero = Self {
            und_price: iter.peek()?.und_price,
            ..Default::default()
        };
        Some(iter.fold(zero, |acc, leg| acc + *leg))
    }

    /// Checked addition against a dynamically typed operand
    pub fn try_add(&self, other: &Value) -> CombineResult<Self> {
        match other {
            Value::Greeks(other) => Ok(*self + *other),
            _ => Err(Self::mismatch("add", other)),
        }
    }

    /// Checked subtraction against a dynamically typed operand
    pub fn try_sub(&self, other: &Value) -> CombineResult<Self> {
        match other {
            Value::Greeks(other) => Ok(*self - *other),
            _ => Err(Self::mismatch("subtract", other)),
        }
    }

    /// Checked scaling; only int and float factors are accepted
    pub fn try_scale(&self, factor: &Value) -> CombineResult<Self> {
        match factor.as_f64() {
            Some(k) => Ok(self.scale(k)),
            None => Err(Self::mismatch("multiply", factor)),
        }
    }

    fn mismatch(op: &'static str, rhs: &Value) -> CombineError {
        CombineError::TypeMismatch {
            op,
            lhs: Self::TYPE_NAME,
            rhs: rhs.type_name(),
        }
    }
}

impl Add for OptionComputation {
    type Output = OptionComputation;

    fn add(self, rhs: Self) -> Self::Output {
        self.combine(&rhs, |a, b| a + b)
    }
}

impl Add for &OptionComputation {
    type Output = OptionComputation;

    fn add(self, rhs: Self) -> Self::Output {
        self.combine(rhs, |a, b| a + b)
    }
}

impl Sub for OptionComputation {
    type Output = OptionComputation;

    fn sub(self, rhs: Self) -> Self::Output {
        self.combine(&rhs, |a, b| a - b)
    }
}

impl Sub for &OptionComputation {
    type Output = OptionComputation;

    fn sub(self, rhs: Self) -> Self::Output {
        self.combine(rhs, |a, b| a - b)
    }
}

impl Mul<f64> for OptionComputation {
    type Output = OptionComputation;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl Mul<f64> for &OptionComputation {
    type Output = OptionComputation;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

//! Stateless arithmetic helpers.
//!
//! # Invariants
//! - No partial result is returned on failure.
//! - Inputs are never mutated.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::ops::Add;

pub type CalcResult<T> = Result<T, CalcError>;

/// Arithmetic input errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    DivisionByZero,
    EmptyInput,
}

impl Display for CalcError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Cannot divide by zero"),
            Self::EmptyInput => write!(f, "Cannot calculate average of empty list"),
        }
    }
}

impl Error for CalcError {}

/// Numeric inputs accepted by `divide` and `average`.
///
/// 64-bit and pointer-sized integers convert with `as f64` and lose
/// precision above 2^53.
pub trait AsF64: Copy {
    fn as_f64(self) -> f64;
}

macro_rules! impl_as_f64 {
    ($($ty:ty),* $(,)?) => {
        $(
            impl AsF64 for $ty {
                fn as_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_as_f64!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// Namespace for the arithmetic operations.
pub struct Calculator;

impl Calculator {
    /// Adds two numbers of the same numeric type.
    pub fn add<T: Add<Output = T>>(a: T, b: T) -> T {
        a + b
    }

    /// Divides `a` by `b` as floating point.
    ///
    /// # Errors
    /// - `CalcError::DivisionByZero` when `b` is zero.
    pub fn divide(a: impl AsF64, b: impl AsF64) -> CalcResult<f64> {
        let divisor = b.as_f64();
        if divisor == 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        Ok(a.as_f64() / divisor)
    }

    /// Arithmetic mean of `numbers`.
    ///
    /// # Errors
    /// - `CalcError::EmptyInput` when `numbers` is empty.
    pub fn average<T: AsF64>(numbers: &[T]) -> CalcResult<f64> {
        if numbers.is_empty() {
            return Err(CalcError::EmptyInput);
        }
        let total: f64 = numbers.iter().map(|value| value.as_f64()).sum();
        Ok(total / numbers.len() as f64)
    }
}

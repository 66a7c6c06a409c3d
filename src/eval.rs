//! Operands of runtime-determined kind.
//!
//! [`Value`] wraps every algebraic type the crate defines, and [`Evaluator`]
//! applies binary and unary operations to pairs of them, reporting
//! [`Error::TypeMismatch`] when the kinds do not combine.

use std::fmt;
use std::str::FromStr;

use crate::engine::Engine;
use crate::error::{Error, Result};
use crate::math::{Matrix2, Matrix3, Matrix4, Quaternion, Vector2, Vector3};

/// A dynamically-typed operand
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    Scalar(f64),
    Vector2(Vector2<'a>),
    Vector3(Vector3<'a>),
    Matrix2(Matrix2<'a>),
    Matrix3(Matrix3<'a>),
    Matrix4(Matrix4<'a>),
    Quaternion(Quaternion<'a>),
}

impl Value<'_> {
    /// Name of the operand's kind, as used in error messages
    pub const fn kind(&self) -> &'static str {
        match self {
            Value::Scalar(_) => "scalar",
            Value::Vector2(_) => "Vector2",
            Value::Vector3(_) => "Vector3",
            Value::Matrix2(_) => "Matrix2",
            Value::Matrix3(_) => "Matrix3",
            Value::Matrix4(_) => "Matrix4",
            Value::Quaternion(_) => "Quaternion",
        }
    }

    #[inline]
    pub fn as_scalar(&self) -> Option<f64> {
        match *self {
            Value::Scalar(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Scalar(s) => write!(f, "{}", s),
            Value::Vector2(v) => write!(f, "{}", v),
            Value::Vector3(v) => write!(f, "{}", v),
            Value::Matrix2(m) => write!(f, "{}", m),
            Value::Matrix3(m) => write!(f, "{}", m),
            Value::Matrix4(m) => write!(f, "{}", m),
            Value::Quaternion(q) => write!(f, "{}", q),
        }
    }
}

impl From<f64> for Value<'_> {
    fn from(s: f64) -> Self {
        Value::Scalar(s)
    }
}

macro_rules! impl_from_value {
    ($($ty:ident),*) => {
        $(
            impl<'a> From<$ty<'a>> for Value<'a> {
                fn from(v: $ty<'a>) -> Self {
                    Value::$ty(v)
                }
            }
        )*
    };
}

impl_from_value!(Vector2, Vector3, Matrix2, Matrix3, Matrix4, Quaternion);

/// Binary operations the evaluator understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Dot,
    Cross,
}

impl BinaryOp {
    pub const fn as_str(self) -> &'static str {
        match self {
            BinaryOp::Add => "add",
            BinaryOp::Sub => "subtract",
            BinaryOp::Mul => "multiply",
            BinaryOp::Div => "divide",
            BinaryOp::Dot => "dot",
            BinaryOp::Cross => "cross",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BinaryOp {
    type Err = Error;

    /// Accepts either the symbol (`+ - * / . x`) or the name
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "+" | "add" => Ok(BinaryOp::Add),
            "-" | "subtract" | "sub" => Ok(BinaryOp::Sub),
            "*" | "multiply" | "mul" => Ok(BinaryOp::Mul),
            "/" | "divide" | "div" => Ok(BinaryOp::Div),
            "." | "dot" => Ok(BinaryOp::Dot),
            "x" | "cross" => Ok(BinaryOp::Cross),
            _ => Err(Error::InvalidOperator(s.to_string())),
        }
    }
}

/// Applies operations to [`Value`]s.
///
/// Scalar-scalar arithmetic goes through the evaluator's engine; every other
/// combination defers to the operand types, which carry their own engine.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    engine: &'a Engine,
}

impl<'a> Evaluator<'a> {
    /// Creates a new evaluator over `engine`
    pub fn new(engine: &'a Engine) -> Self {
        Self { engine }
    }

    #[inline]
    pub fn engine(&self) -> &'a Engine {
        self.engine
    }

    /// Dispatches on `op`
    pub fn binary(&self, op: BinaryOp, lhs: Value<'a>, rhs: Value<'a>) -> Result<Value<'a>> {
        match op {
            BinaryOp::Add => self.add(lhs, rhs),
            BinaryOp::Sub => self.sub(lhs, rhs),
            BinaryOp::Mul => self.mul(lhs, rhs),
            BinaryOp::Div => self.div(lhs, rhs),
            BinaryOp::Dot => self.dot(lhs, rhs),
            BinaryOp::Cross => self.cross(lhs, rhs),
        }
    }

    /// Same-kind addition
    pub fn add(&self, lhs: Value<'a>, rhs: Value<'a>) -> Result<Value<'a>> {
        match (lhs, rhs) {
            (Value::Scalar(a), Value::Scalar(b)) => Ok(Value::Scalar(self.engine.add(a, b))),
            (Value::Vector2(a), Value::Vector2(b)) => Ok(Value::Vector2(a + b)),
            (Value::Vector3(a), Value::Vector3(b)) => Ok(Value::Vector3(a + b)),
            (Value::Matrix2(a), Value::Matrix2(b)) => Ok(Value::Matrix2(a + b)),
            (Value::Matrix3(a), Value::Matrix3(b)) => Ok(Value::Matrix3(a + b)),
            (Value::Matrix4(a), Value::Matrix4(b)) => Ok(Value::Matrix4(a + b)),
            _ => Err(mismatch(BinaryOp::Add, &lhs, &rhs)),
        }
    }

    /// Same-kind subtraction of scalars and vectors
    pub fn sub(&self, lhs: Value<'a>, rhs: Value<'a>) -> Result<Value<'a>> {
        match (lhs, rhs) {
            (Value::Scalar(a), Value::Scalar(b)) => Ok(Value::Scalar(self.engine.subtract(a, b))),
            (Value::Vector2(a), Value::Vector2(b)) => Ok(Value::Vector2(a - b)),
            (Value::Vector3(a), Value::Vector3(b)) => Ok(Value::Vector3(a - b)),
            _ => Err(mismatch(BinaryOp::Sub, &lhs, &rhs)),
        }
    }

    /// Multiplication.
    ///
    /// Covers scalar * scalar (the rule), vector * scalar, matrix * matrix of
    /// equal size, matrix * vector (`Matrix4 * Vector3` as an affine point
    /// transform) and the Hamilton product. The scalar must be on the right
    /// when scaling.
    pub fn mul(&self, lhs: Value<'a>, rhs: Value<'a>) -> Result<Value<'a>> {
        match (lhs, rhs) {
            (Value::Scalar(a), Value::Scalar(b)) => Ok(Value::Scalar(self.engine.combine(a, b))),
            (Value::Vector2(v), Value::Scalar(s)) => Ok(Value::Vector2(v * s)),
            (Value::Vector3(v), Value::Scalar(s)) => Ok(Value::Vector3(v * s)),
            (Value::Matrix2(a), Value::Matrix2(b)) => Ok(Value::Matrix2(a * b)),
            (Value::Matrix3(a), Value::Matrix3(b)) => Ok(Value::Matrix3(a * b)),
            (Value::Matrix4(a), Value::Matrix4(b)) => Ok(Value::Matrix4(a * b)),
            (Value::Matrix2(m), Value::Vector2(v)) => Ok(Value::Vector2(m * v)),
            (Value::Matrix3(m), Value::Vector3(v)) => Ok(Value::Vector3(m * v)),
            (Value::Matrix4(m), Value::Vector3(v)) => Ok(Value::Vector3(m * v)),
            (Value::Quaternion(a), Value::Quaternion(b)) => Ok(Value::Quaternion(a * b)),
            _ => Err(mismatch(BinaryOp::Mul, &lhs, &rhs)),
        }
    }

    /// Scalar division; a zero divisor yields inf/NaN
    pub fn div(&self, lhs: Value<'a>, rhs: Value<'a>) -> Result<Value<'a>> {
        match (lhs, rhs) {
            (Value::Scalar(a), Value::Scalar(b)) => Ok(Value::Scalar(self.engine.divide(a, b))),
            _ => Err(mismatch(BinaryOp::Div, &lhs, &rhs)),
        }
    }

    /// Engine dot product of two vectors or two quaternions
    pub fn dot(&self, lhs: Value<'a>, rhs: Value<'a>) -> Result<Value<'a>> {
        match (lhs, rhs) {
            (Value::Vector2(a), Value::Vector2(b)) => Ok(Value::Scalar(a.dot(b))),
            (Value::Vector3(a), Value::Vector3(b)) => Ok(Value::Scalar(a.dot(b))),
            (Value::Quaternion(a), Value::Quaternion(b)) => Ok(Value::Scalar(a.dot(b))),
            _ => Err(mismatch(BinaryOp::Dot, &lhs, &rhs)),
        }
    }

    pub fn cross(&self, lhs: Value<'a>, rhs: Value<'a>) -> Result<Value<'a>> {
        match (lhs, rhs) {
            (Value::Vector3(a), Value::Vector3(b)) => Ok(Value::Vector3(a.cross(b))),
            _ => Err(mismatch(BinaryOp::Cross, &lhs, &rhs)),
        }
    }

    /// Negation: `combine(-1, s)` for scalars, component-wise for vectors
    pub fn neg(&self, value: Value<'a>) -> Result<Value<'a>> {
        match value {
            Value::Scalar(s) => Ok(Value::Scalar(self.engine.combine(-1.0, s))),
            Value::Vector2(v) => Ok(Value::Vector2(-v)),
            Value::Vector3(v) => Ok(Value::Vector3(-v)),
            other => Err(Error::UnsupportedOperation {
                op: "negate",
                operand: other.kind(),
            }),
        }
    }
}

fn mismatch(op: BinaryOp, lhs: &Value<'_>, rhs: &Value<'_>) -> Error {
    Error::TypeMismatch {
        op: op.as_str(),
        lhs: lhs.kind(),
        rhs: rhs.kind(),
    }
}

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::error::{Error, Result};

/// The swappable definition of scalar multiplication.
///
/// Every higher layer multiplies through [`Engine::combine`], which
/// dispatches on the active rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rule {
    /// `a + b - 1`
    APlusBMinus1,
    /// `a + b`
    APlusB,
    /// `a * b` (ordinary multiplication)
    ATimesB,
    /// `2` when both operands are `1`, otherwise `a * b`
    #[default]
    TerryOriginal,
}

impl Rule {
    /// Every rule, in declaration order
    pub const ALL: [Rule; 4] = [
        Rule::APlusBMinus1,
        Rule::APlusB,
        Rule::ATimesB,
        Rule::TerryOriginal,
    ];

    /// Returns the identifier used to select this rule
    pub const fn as_str(self) -> &'static str {
        match self {
            Rule::APlusBMinus1 => "a_plus_b_minus_1",
            Rule::APlusB => "a_plus_b",
            Rule::ATimesB => "a_times_b",
            Rule::TerryOriginal => "terry_original",
        }
    }

    /// Applies the rule to two operands
    #[inline]
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Rule::APlusBMinus1 => a + b - 1.0,
            Rule::APlusB => a + b,
            Rule::ATimesB => a * b,
            Rule::TerryOriginal => {
                if a == 1.0 && b == 1.0 {
                    2.0
                } else {
                    a * b
                }
            }
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Rule::ALL
            .into_iter()
            .find(|rule| rule.as_str() == s)
            .ok_or_else(|| Error::InvalidRule(s.to_string()))
    }
}

/// Returns the identifiers of every available rule
pub fn rule_names() -> Vec<&'static str> {
    Rule::ALL.iter().map(|rule| rule.as_str()).collect()
}

/// The scalar operation engine.
///
/// Vectors, matrices, quaternions, primitives and bodies all borrow one
/// engine and route their arithmetic through it. Only [`Engine::combine`]
/// depends on the rule; `add`, `subtract` and `divide` are always the
/// ordinary operations.
#[derive(Debug, Default)]
pub struct Engine {
    rule: Rule,
}

impl Engine {
    /// Creates an engine from a rule identifier
    pub fn new(rule: &str) -> Result<Self> {
        Ok(Self::with_rule(rule.parse()?))
    }

    /// Creates an engine with the given rule
    pub const fn with_rule(rule: Rule) -> Self {
        Self { rule }
    }

    /// Returns the active rule
    #[inline]
    pub fn rule(&self) -> Rule {
        self.rule
    }

    /// Replaces the active rule. The engine is left untouched on error.
    pub fn set_rule(&mut self, rule: &str) -> Result<()> {
        let rule: Rule = rule.parse()?;
        debug!("Switching rule {} -> {}", self.rule, rule);
        self.rule = rule;
        Ok(())
    }

    /// The overloaded multiplication
    #[inline]
    pub fn combine(&self, a: f64, b: f64) -> f64 {
        self.rule.apply(a, b)
    }

    #[inline]
    pub fn add(&self, a: f64, b: f64) -> f64 {
        a + b
    }

    #[inline]
    pub fn subtract(&self, a: f64, b: f64) -> f64 {
        a - b
    }

    /// Ordinary division; a zero divisor yields inf/NaN
    #[inline]
    pub fn divide(&self, a: f64, b: f64) -> f64 {
        a / b
    }

    /// Repeated `combine`, folded left from `a`: `((a * a) * a) ...`
    ///
    /// `power(a, 0)` is 1 under every rule.
    pub fn power(&self, a: f64, n: u32) -> f64 {
        if n == 0 {
            return 1.0;
        }
        (1..n).fold(a, |acc, _| self.combine(acc, a))
    }
}

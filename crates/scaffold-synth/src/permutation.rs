//! Permutation enumeration
//!
//! Every parameter is either absent (`null`) or present (its sentinel value).
//! For `n` parameters, case `i` of `0..2^n` assigns parameter `j` the value of
//! bit `j` of `i`: 0 is absent, 1 is present.

use crate::classify::{classify, SentinelValue};
use scaffold_decl::Parameter;

/// Per-parameter choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Assignment {
    /// `null`
    Absent,
    /// Sentinel value or test double
    Present,
}

/// Value bound to a parameter in a generated test
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BoundValue {
    /// `null`, declared with the nullable type
    Null,
    /// Classified sentinel, declared with the declared type
    Sentinel(SentinelValue),
}

/// A parameter and the value bound to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding<'p> {
    /// The parameter
    pub param: &'p Parameter,
    /// Bound value
    pub value: BoundValue,
}

impl<'p> Binding<'p> {
    /// Bind according to an assignment
    #[must_use]
    pub fn new(param: &'p Parameter, assignment: Assignment) -> Self {
        let value = match assignment {
            Assignment::Absent => BoundValue::Null,
            Assignment::Present => BoundValue::Sentinel(classify(&param.ty)),
        };
        Self { param, value }
    }

    /// Bind to the present value
    #[inline]
    #[must_use]
    pub fn present(param: &'p Parameter) -> Self {
        Self::new(param, Assignment::Present)
    }

    /// Assignment this binding was made from
    #[inline]
    #[must_use]
    pub fn assignment(&self) -> Assignment {
        match self.value {
            BoundValue::Null => Assignment::Absent,
            BoundValue::Sentinel(_) => Assignment::Present,
        }
    }

    /// Local variable declaration, e.g. `Integer n = null;` or `int n = 42;`
    #[must_use]
    pub fn declaration(&self) -> String {
        match &self.value {
            BoundValue::Null => format!("{} {} = null;", self.param.ty.nullable_name(), self.param.name),
            BoundValue::Sentinel(value) => format!(
                "{} {} = {};",
                self.param.ty.declared_name(),
                self.param.name,
                value.expression()
            ),
        }
    }
}

/// One combination of bindings, one per parameter in declaration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationCase<'p> {
    /// Bindings in parameter order
    pub bindings: Vec<Binding<'p>>,
}

impl PermutationCase<'_> {
    /// Assignments in parameter order
    #[must_use]
    pub fn assignments(&self) -> Vec<Assignment> {
        self.bindings.iter().map(Binding::assignment).collect()
    }
}

/// Assignment tuples for `arity` parameters, in ascending integer order
///
/// # Panics
/// Panics if `arity` is not below `usize::BITS`; callers bound it first.
pub fn assignment_vectors(arity: usize) -> impl Iterator<Item = Vec<Assignment>> {
    assert!(arity < usize::BITS as usize, "arity {arity} too large to enumerate");

    (0..1usize << arity).map(move |i| {
        (0..arity)
            .map(|j| {
                if (i >> j) & 1 == 0 {
                    Assignment::Absent
                } else {
                    Assignment::Present
                }
            })
            .collect()
    })
}

/// Enumerate all `2^n` cases for a parameter list
#[must_use]
pub fn enumerate(params: &[Parameter]) -> Vec<PermutationCase<'_>> {
    assignment_vectors(params.len())
        .map(|assignments| PermutationCase {
            bindings: params
                .iter()
                .zip(assignments)
                .map(|(param, assignment)| Binding::new(param, assignment))
                .collect(),
        })
        .collect()
}

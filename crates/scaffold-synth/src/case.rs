//! Generated test case model

use crate::branch::BranchKind;

/// What produced a test case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseOrigin {
    /// A parameter permutation
    Permutation,
    /// A branch path
    Branch(BranchKind),
}

impl CaseOrigin {
    /// Check if the case came from a branch
    #[inline]
    #[must_use]
    pub fn is_branch(self) -> bool {
        matches!(self, CaseOrigin::Branch(_))
    }
}

/// One test method of the skeleton
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    /// Method identifier, not necessarily unique
    pub name: String,
    /// Producer of the case
    pub origin: CaseOrigin,
    /// Comment rendered above the method, for branch cases
    pub annotation: Option<String>,
    /// GIVEN statements
    pub given: Vec<String>,
    /// WHEN statement
    pub invocation: String,
}

impl TestCase {
    /// Create case without annotation
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, origin: CaseOrigin, invocation: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            origin,
            annotation: None,
            given: Vec::new(),
            invocation: invocation.into(),
        }
    }

    /// With GIVEN statements
    #[inline]
    #[must_use]
    pub fn with_given(mut self, given: Vec<String>) -> Self {
        self.given = given;
        self
    }

    /// With annotation
    #[inline]
    #[must_use]
    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }
}

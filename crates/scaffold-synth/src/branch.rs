//! Branch extraction
//!
//! Selects the branch sites of one method and expands them into branch cases:
//! - conditionals: one case for the then path, one more if an else path exists
//! - ternaries: always two cases
//! - switches: one case per distinct label set across all of the method's switches
//!
//! Matching is by method name only, so overloads share their branches.

use indexmap::IndexMap;
use scaffold_decl::{Branch, BranchSite};

/// Kind of branch case, fixed per construct and path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BranchKind {
    /// Then path of an if
    IfCondition,
    /// Else path of an if
    ElseCondition,
    /// True arm of a ternary
    TernaryCondition,
    /// False arm of a ternary
    TernaryElseCondition,
    /// One switch label group
    SwitchCaseCondition,
}

impl BranchKind {
    /// Identifier token (`IfCondition`, ...)
    #[inline]
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            BranchKind::IfCondition => "IfCondition",
            BranchKind::ElseCondition => "ElseCondition",
            BranchKind::TernaryCondition => "TernaryCondition",
            BranchKind::TernaryElseCondition => "TernaryElseCondition",
            BranchKind::SwitchCaseCondition => "SwitchCaseCondition",
        }
    }
}

/// One branch path to cover
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchCase {
    /// Path kind
    pub kind: BranchKind,
    /// Explanatory text: the condition, or `case <labels>: <bodies>`
    pub annotation: String,
}

impl BranchCase {
    fn new(kind: BranchKind, annotation: impl Into<String>) -> Self {
        Self {
            kind,
            annotation: annotation.into(),
        }
    }
}

/// Branches whose nearest enclosing method is named `method`, in source order
#[must_use]
pub fn extract_branches<'d>(sites: &'d [BranchSite], method: &str) -> Vec<&'d Branch> {
    sites
        .iter()
        .filter(|site| site.enclosing.as_deref() == Some(method))
        .map(|site| &site.branch)
        .collect()
}

/// Expand branches into cases: conditionals, then ternaries, then switch groups
#[must_use]
pub fn branch_cases(branches: &[&Branch]) -> Vec<BranchCase> {
    let mut cases = Vec::new();

    for branch in branches {
        if let Branch::Conditional {
            condition,
            has_else,
        } = branch
        {
            cases.push(BranchCase::new(BranchKind::IfCondition, condition.as_str()));
            if *has_else {
                cases.push(BranchCase::new(BranchKind::ElseCondition, condition.as_str()));
            }
        }
    }

    for branch in branches {
        if let Branch::Ternary { condition } = branch {
            cases.push(BranchCase::new(BranchKind::TernaryCondition, condition.as_str()));
            cases.push(BranchCase::new(
                BranchKind::TernaryElseCondition,
                condition.as_str(),
            ));
        }
    }

    for (key, bodies) in switch_groups(branches) {
        cases.push(BranchCase::new(
            BranchKind::SwitchCaseCondition,
            format!("case {key}: {}", bodies.join(" ")),
        ));
    }

    cases
}

/// Group the entries of every switch by label-set key, first-seen order
#[must_use]
pub fn switch_groups<'b>(branches: &[&'b Branch]) -> IndexMap<String, Vec<&'b str>> {
    let mut groups: IndexMap<String, Vec<&'b str>> = IndexMap::new();
    for branch in branches {
        if let Branch::MultiWay { entries } = branch {
            for entry in entries {
                groups
                    .entry(entry.label_key())
                    .or_default()
                    .push(entry.body.as_str());
            }
        }
    }
    groups
}

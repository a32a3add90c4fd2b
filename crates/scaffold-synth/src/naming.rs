//! Test case naming
//!
//! Names are built from classified values, never by rewriting rendered
//! statements. Collisions are not resolved: two ifs in one method both
//! produce `testIfConditionIn<Method>`.

use crate::branch::BranchKind;
use crate::classify::SentinelValue;
use crate::permutation::{BoundValue, PermutationCase};

/// Upper-case the first character (`widen` → `Widen`)
#[must_use]
pub fn pascal_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Name token for a bound value: `Null`, `Mocked`, or the literal's symbols
#[must_use]
pub fn value_token(value: &BoundValue) -> String {
    match value {
        BoundValue::Null => "Null".to_string(),
        BoundValue::Sentinel(SentinelValue::Numeric(n)) => n.to_string().replace('-', ""),
        BoundValue::Sentinel(SentinelValue::Text(text)) => {
            text.chars().filter(|c| c.is_alphanumeric()).collect()
        }
        BoundValue::Sentinel(SentinelValue::TestDouble { .. }) => "Mocked".to_string(),
    }
}

/// `test<Method>Where<P1>Is<V1>And<P2>Is<V2>...`
///
/// A method without parameters keeps the bare `Where` suffix.
#[must_use]
pub fn permutation_case_name(method: &str, case: &PermutationCase<'_>) -> String {
    let mut name = format!("test{}", pascal_case(method));
    let clauses: Vec<String> = case
        .bindings
        .iter()
        .map(|b| format!("{}Is{}", pascal_case(&b.param.name), value_token(&b.value)))
        .collect();

    name.push_str("Where");
    name.push_str(&clauses.join("And"));
    name
}

/// `test<Kind>In<Method>`
#[must_use]
pub fn branch_case_name(method: &str, kind: BranchKind) -> String {
    format!("test{}In{}", kind.token(), pascal_case(method))
}

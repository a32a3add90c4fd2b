//! Setup synthesis
//!
//! Derives the test class fields and the `init()` construction statements
//! from the target's non-private constructors. The names of fields backed by
//! test doubles are returned in a [`MockRegistry`] alongside the setup.

use crate::classify::{classify, SentinelValue};
use indexmap::IndexSet;
use scaffold_decl::{Constructor, Parameter};

/// Field of the generated test class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    /// Constructor parameter the field stands for
    pub param: Parameter,
    /// Value the field is initialized with
    pub value: SentinelValue,
}

impl FieldDecl {
    /// Check if the field is a `@Mock`
    #[inline]
    #[must_use]
    pub fn is_mock(&self) -> bool {
        self.value.is_test_double()
    }
}

/// One `target = new T(..)` statement
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Construction {
    /// Argument names in declared order
    pub arguments: Vec<String>,
}

/// Ordered, duplicate-free set of test-double field names
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MockRegistry {
    names: IndexSet<String>,
}

impl MockRegistry {
    /// Create empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a test-double name
    #[inline]
    pub fn record(&mut self, name: impl Into<String>) {
        self.names.insert(name.into());
    }

    /// Recorded names, in first-seen order
    #[inline]
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Number of recorded names
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// `verifyNoMoreInteractions(..)` over all names, if any
    #[must_use]
    pub fn verification(&self) -> Option<String> {
        if self.names.is_empty() {
            return None;
        }
        let names: Vec<&str> = self.names().collect();
        Some(format!("verifyNoMoreInteractions({});", names.join(", ")))
    }
}

/// Fields, construction statements and mocks of a test class
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Setup {
    /// Field declarations, one per distinct (name, type)
    pub fields: Vec<FieldDecl>,
    /// One statement per non-private constructor, or a single no-arg one
    pub constructions: Vec<Construction>,
    /// Names of test-double fields
    pub mocks: MockRegistry,
}

/// Synthesize setup from constructors
///
/// Private constructors are ignored. Parameters shared by several
/// constructors (same name and type) yield a single field.
#[must_use]
pub fn synthesize_setup(constructors: &[Constructor]) -> Setup {
    let visible: Vec<&Constructor> = constructors
        .iter()
        .filter(|c| !c.visibility.is_private())
        .collect();

    let distinct: IndexSet<&Parameter> = visible
        .iter()
        .copied()
        .flat_map(|c| c.params.iter())
        .collect();

    let mut mocks = MockRegistry::new();
    let fields: Vec<FieldDecl> = distinct
        .into_iter()
        .map(|param| {
            let value = classify(&param.ty);
            if value.is_test_double() {
                mocks.record(param.name.clone());
            }
            FieldDecl {
                param: param.clone(),
                value,
            }
        })
        .collect();

    let mut constructions: Vec<Construction> = visible
        .iter()
        .map(|c| Construction {
            arguments: c.params.iter().map(|p| p.name.clone()).collect(),
        })
        .collect();
    if constructions.is_empty() {
        constructions.push(Construction::default());
    }

    Setup {
        fields,
        constructions,
        mocks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scaffold_decl::Visibility;

    fn ctor(params: &[(&str, &str)]) -> Constructor {
        Constructor::new(
            params
                .iter()
                .map(|(name, ty)| Parameter::new(*name, ty))
                .collect(),
        )
    }

    #[test]
    fn no_constructors_yield_default_construction() {
        let setup = synthesize_setup(&[]);
        assert!(setup.fields.is_empty());
        assert_eq!(setup.constructions, vec![Construction::default()]);
        assert!(setup.mocks.is_empty());
    }

    #[test]
    fn private_constructors_are_ignored() {
        let ctors = vec![ctor(&[("repo", "Repository")]).with_visibility(Visibility::Private)];
        let setup = synthesize_setup(&ctors);
        assert!(setup.fields.is_empty());
        assert_eq!(setup.constructions.len(), 1);
        assert!(setup.constructions[0].arguments.is_empty());
    }

    #[test]
    fn shared_parameters_are_declared_once() {
        let ctors = vec![
            ctor(&[("a", "String")]),
            ctor(&[("a", "String"), ("b", "String")]),
            ctor(&[("a", "String"), ("b", "String"), ("c", "String")]),
        ];
        let setup = synthesize_setup(&ctors);

        let names: Vec<_> = setup.fields.iter().map(|f| f.param.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(setup.constructions.len(), 3);
        assert_eq!(setup.constructions[2].arguments, vec!["a", "b", "c"]);
    }

    #[test]
    fn same_name_different_type_are_distinct() {
        let ctors = vec![ctor(&[("id", "int")]), ctor(&[("id", "String")])];
        assert_eq!(synthesize_setup(&ctors).fields.len(), 2);
    }

    #[test]
    fn test_doubles_are_registered() {
        let ctors = vec![ctor(&[("repo", "Repository"), ("limit", "int"), ("clock", "Clock")])];
        let setup = synthesize_setup(&ctors);

        assert!(setup.fields[0].is_mock());
        assert!(!setup.fields[1].is_mock());
        assert_eq!(setup.mocks.names().collect::<Vec<_>>(), vec!["repo", "clock"]);
        assert_eq!(
            setup.mocks.verification().as_deref(),
            Some("verifyNoMoreInteractions(repo, clock);")
        );
    }

    #[test]
    fn empty_registry_has_no_verification() {
        assert_eq!(MockRegistry::new().verification(), None);
    }
}

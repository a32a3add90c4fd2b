//! Skeleton emission
//!
//! [`Generator`] drives the pipeline: setup from constructors, then for every
//! visible method matching the filter its permutation cases followed, if
//! enabled, by its branch cases. The result is a [`SuitePlan`] which renders
//! to the final text.

use crate::branch::{branch_cases, extract_branches};
use crate::case::{CaseOrigin, TestCase};
use crate::config::GeneratorConfig;
use crate::error::{GenerateError, GenerateResult};
use crate::naming::{branch_case_name, permutation_case_name};
use crate::permutation::{enumerate, Binding};
use crate::setup::{synthesize_setup, Setup};
use regex::Regex;
use scaffold_decl::{Declaration, DeclarationSource, Method};

/// Hard arity bound; `2^n` must fit a `usize` index
const ARITY_LIMIT: usize = usize::BITS as usize - 1;

/// Structured skeleton, ready to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuitePlan {
    /// Package of the target and of the test class
    pub namespace: String,
    /// Simple name of the target
    pub target_name: String,
    /// Simple name of the test class
    pub test_class: String,
    /// Fields, constructions and mocks
    pub setup: Setup,
    /// Test cases in emission order
    pub cases: Vec<TestCase>,
}

impl SuitePlan {
    /// Render to Java source
    #[inline]
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Case identifiers in emission order
    #[must_use]
    pub fn case_names(&self) -> Vec<&str> {
        self.cases.iter().map(|c| c.name.as_str()).collect()
    }

    /// Number of branch cases
    #[must_use]
    pub fn branch_case_count(&self) -> usize {
        self.cases.iter().filter(|c| c.origin.is_branch()).count()
    }
}

/// Test skeleton generator
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
    filter: Regex,
}

impl Generator {
    /// Create generator, compiling the method filter
    ///
    /// # Errors
    /// Returns [`GenerateError::InvalidMethodFilter`] if the filter does not compile
    pub fn new(config: GeneratorConfig) -> GenerateResult<Self> {
        let filter = Regex::new(&format!("^(?:{})$", config.method_filter)).map_err(|source| {
            GenerateError::InvalidMethodFilter {
                pattern: config.method_filter.clone(),
                source,
            }
        })?;
        Ok(Self { config, filter })
    }

    /// Get configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Check if a method gets test cases
    #[inline]
    #[must_use]
    pub fn selects(&self, method: &Method) -> bool {
        !method.visibility.is_private() && self.filter.is_match(&method.name)
    }

    /// Build the skeleton plan for a declaration
    ///
    /// # Errors
    /// Returns [`GenerateError::TooManyParameters`] if a selected method has
    /// more parameters than `max_parameters`
    pub fn plan(&self, decl: &Declaration) -> GenerateResult<SuitePlan> {
        let target = &decl.target;
        let setup = synthesize_setup(&target.constructors);

        let max = self.config.max_parameters.min(ARITY_LIMIT);
        let mut cases = Vec::new();
        for method in target.methods.iter().filter(|m| self.selects(m)) {
            if method.params.len() > max {
                return Err(GenerateError::TooManyParameters {
                    type_name: target.qualified_name(),
                    method: method.name.clone(),
                    count: method.params.len(),
                    max,
                });
            }

            let before = cases.len();
            self.method_cases(decl, method, &mut cases);
            tracing::debug!("{}: {} cases", method.name, cases.len() - before);
        }

        tracing::info!(
            "Planned {} test cases for {}",
            cases.len(),
            target.qualified_name()
        );

        Ok(SuitePlan {
            namespace: target.namespace.clone(),
            target_name: target.name.clone(),
            test_class: format!("{}{}", target.name, self.config.test_class_suffix),
            setup,
            cases,
        })
    }

    fn method_cases(&self, decl: &Declaration, method: &Method, cases: &mut Vec<TestCase>) {
        let invocation = invocation(method);

        for case in enumerate(&method.params) {
            cases.push(
                TestCase::new(
                    permutation_case_name(&method.name, &case),
                    CaseOrigin::Permutation,
                    invocation.as_str(),
                )
                .with_given(case.bindings.iter().map(Binding::declaration).collect()),
            );
        }

        if !self.config.include_branch_cases {
            return;
        }

        let given: Vec<String> = method
            .params
            .iter()
            .map(|p| Binding::present(p).declaration())
            .collect();
        let branches = extract_branches(&decl.branches, &method.name);

        for branch in branch_cases(&branches) {
            cases.push(
                TestCase::new(
                    branch_case_name(&method.name, branch.kind),
                    CaseOrigin::Branch(branch.kind),
                    invocation.as_str(),
                )
                .with_given(given.clone())
                .with_annotation(branch.annotation),
            );
        }
    }

    /// Generate skeleton text for a declaration
    ///
    /// # Errors
    /// See [`Generator::plan`]
    pub fn generate(&self, decl: &Declaration) -> GenerateResult<String> {
        Ok(self.plan(decl)?.render())
    }

    /// Load `type_name` from a source and generate its skeleton
    ///
    /// # Errors
    /// Returns [`GenerateError::Source`] if loading fails, before any output
    /// is produced
    pub fn generate_from<S>(&self, source: &S, type_name: &str) -> GenerateResult<String>
    where
        S: DeclarationSource + ?Sized,
    {
        let decl = source
            .load(type_name)
            .map_err(|e| GenerateError::load_failed(type_name, e))?;
        self.generate(&decl)
    }
}

/// Generate a skeleton with a method filter and the branch-case switch
///
/// # Errors
/// See [`Generator::new`] and [`Generator::plan`]
pub fn emit(
    decl: &Declaration,
    method_filter: &str,
    include_branch_cases: bool,
) -> GenerateResult<String> {
    let config = GeneratorConfig::new()
        .with_method_filter(method_filter)
        .with_branch_cases(include_branch_cases);
    Generator::new(config)?.generate(decl)
}

fn invocation(method: &Method) -> String {
    let arguments: Vec<&str> = method.params.iter().map(|p| p.name.as_str()).collect();
    format!("var actual = target.{}({});", method.name, arguments.join(", "))
}

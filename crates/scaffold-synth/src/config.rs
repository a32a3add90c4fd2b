//! Generator configuration

use crate::error::{GenerateError, GenerateResult};
use serde::{Deserialize, Serialize};

/// Skeleton generator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Regular expression a method name must match in full
    pub method_filter: String,
    /// Whether to emit if/ternary/switch cases
    pub include_branch_cases: bool,
    /// Suffix appended to the target name to form the test class name
    pub test_class_suffix: String,
    /// Largest parameter count that is permuted (2^n cases)
    pub max_parameters: usize,
}

impl GeneratorConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With method filter
    #[inline]
    #[must_use]
    pub fn with_method_filter(mut self, pattern: impl Into<String>) -> Self {
        self.method_filter = pattern.into();
        self
    }

    /// With or without branch cases
    #[inline]
    #[must_use]
    pub fn with_branch_cases(mut self, include: bool) -> Self {
        self.include_branch_cases = include;
        self
    }

    /// With test class suffix
    #[inline]
    #[must_use]
    pub fn with_test_class_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.test_class_suffix = suffix.into();
        self
    }

    /// With permutation limit
    #[inline]
    #[must_use]
    pub fn with_max_parameters(mut self, max: usize) -> Self {
        self.max_parameters = max;
        self
    }

    /// Parse configuration from a TOML document; missing keys keep defaults
    ///
    /// # Errors
    /// Returns [`GenerateError::Config`] if the document is malformed
    pub fn from_toml_str(document: &str) -> GenerateResult<Self> {
        toml::from_str(document).map_err(|e| GenerateError::Config(e.to_string()))
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            method_filter: "^.+".to_string(),
            include_branch_cases: true,
            test_class_suffix: "Test".to_string(),
            max_parameters: 16,
        }
    }
}

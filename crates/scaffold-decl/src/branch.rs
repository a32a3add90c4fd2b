//! Control-flow constructs found in a compilation unit

/// One case group of a multi-way branch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchEntry {
    /// Label texts (`default` for the default label)
    pub labels: Vec<String>,
    /// Statement text of the group, whitespace collapsed
    pub body: String,
}

impl SwitchEntry {
    /// Create entry
    #[inline]
    #[must_use]
    pub fn new(labels: Vec<String>, body: impl Into<String>) -> Self {
        Self {
            labels,
            body: body.into(),
        }
    }

    /// Comma-joined label set, the grouping key
    #[inline]
    #[must_use]
    pub fn label_key(&self) -> String {
        self.labels.join(",")
    }
}

/// Branching construct
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Branch {
    /// `if (condition) ... [else ...]`
    Conditional {
        /// Condition text, without the enclosing parentheses
        condition: String,
        /// Whether an else path (other than `else if`) is present
        has_else: bool,
    },
    /// `condition ? a : b`
    Ternary {
        /// Condition text
        condition: String,
    },
    /// `switch (..) { case ..: }`
    MultiWay {
        /// Case groups in source order
        entries: Vec<SwitchEntry>,
    },
}

impl Branch {
    /// Short kind name for diagnostics
    #[inline]
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Branch::Conditional { .. } => "if",
            Branch::Ternary { .. } => "ternary",
            Branch::MultiWay { .. } => "switch",
        }
    }
}

/// A branch together with its lexical position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchSite {
    /// Name of the nearest enclosing method, `None` outside any method
    pub enclosing: Option<String>,
    /// 1-based source line
    pub line: usize,
    /// The construct
    pub branch: Branch,
}

impl BranchSite {
    /// Create site inside the named method
    #[inline]
    #[must_use]
    pub fn in_method(method: impl Into<String>, branch: Branch) -> Self {
        Self {
            enclosing: Some(method.into()),
            line: 0,
            branch,
        }
    }

    /// Create site outside any method
    #[inline]
    #[must_use]
    pub fn detached(branch: Branch) -> Self {
        Self {
            enclosing: None,
            line: 0,
            branch,
        }
    }
}

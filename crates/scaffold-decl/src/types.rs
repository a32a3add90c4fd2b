//! Declaration model
//!
//! Immutable snapshot of the type under analysis:
//! - [`TargetType`] with its constructors and methods
//! - [`Parameter`] and its [`TypeDescriptor`]
//! - [`Visibility`] of each member

use std::fmt;

/// Java primitive kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// `byte`
    Byte,
    /// `short`
    Short,
    /// `int`
    Int,
    /// `long`
    Long,
    /// `float`
    Float,
    /// `double`
    Double,
    /// `char`
    Char,
    /// `boolean`
    Boolean,
}

impl PrimitiveKind {
    /// All primitive kinds, in declaration order
    pub const ALL: [PrimitiveKind; 8] = [
        PrimitiveKind::Byte,
        PrimitiveKind::Short,
        PrimitiveKind::Int,
        PrimitiveKind::Long,
        PrimitiveKind::Float,
        PrimitiveKind::Double,
        PrimitiveKind::Char,
        PrimitiveKind::Boolean,
    ];

    /// Source keyword (`int`, `boolean`, ...)
    #[inline]
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            PrimitiveKind::Byte => "byte",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
            PrimitiveKind::Char => "char",
            PrimitiveKind::Boolean => "boolean",
        }
    }

    /// Simple name of the wrapper class (`Integer`, `Boolean`, ...)
    #[inline]
    #[must_use]
    pub fn boxed_name(self) -> &'static str {
        match self {
            PrimitiveKind::Byte => "Byte",
            PrimitiveKind::Short => "Short",
            PrimitiveKind::Int => "Integer",
            PrimitiveKind::Long => "Long",
            PrimitiveKind::Float => "Float",
            PrimitiveKind::Double => "Double",
            PrimitiveKind::Char => "Character",
            PrimitiveKind::Boolean => "Boolean",
        }
    }

    /// Look up a primitive by its keyword
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.keyword() == keyword)
    }

    /// Look up a primitive by its wrapper name, simple or `java.lang.` qualified
    #[must_use]
    pub fn from_boxed_name(name: &str) -> Option<Self> {
        let simple = name.strip_prefix("java.lang.").unwrap_or(name);
        Self::ALL.into_iter().find(|k| k.boxed_name() == simple)
    }
}

/// Declared type of a parameter
///
/// Keeps the type text as written so generated code reads like the source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeDescriptor {
    /// `int`, `boolean`, ...
    Primitive(PrimitiveKind),
    /// `Integer`, `java.lang.Long`, ...
    Boxed {
        /// Wrapped primitive
        kind: PrimitiveKind,
        /// Wrapper name as written
        name: String,
    },
    /// `String` or `java.lang.String`
    StringLike {
        /// Name as written
        name: String,
    },
    /// Anything else; rendered through a test double
    Reference {
        /// Full type text, generic arguments included
        name: String,
    },
}

impl TypeDescriptor {
    /// Classify a type from its source text
    ///
    /// # Examples
    /// - `int` → `Primitive(Int)`
    /// - `java.lang.Integer` → `Boxed`
    /// - `List<String>` → `Reference`
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let name = text.split_whitespace().collect::<Vec<_>>().join(" ");

        if let Some(kind) = PrimitiveKind::from_keyword(&name) {
            return TypeDescriptor::Primitive(kind);
        }
        if let Some(kind) = PrimitiveKind::from_boxed_name(&name) {
            return TypeDescriptor::Boxed { kind, name };
        }
        if name == "String" || name == "java.lang.String" {
            return TypeDescriptor::StringLike { name };
        }
        TypeDescriptor::Reference { name }
    }

    /// Type name as declared
    #[must_use]
    pub fn declared_name(&self) -> &str {
        match self {
            TypeDescriptor::Primitive(kind) => kind.keyword(),
            TypeDescriptor::Boxed { name, .. }
            | TypeDescriptor::StringLike { name }
            | TypeDescriptor::Reference { name } => name,
        }
    }

    /// Type name able to hold `null`: primitives are widened to their wrapper
    #[must_use]
    pub fn nullable_name(&self) -> &str {
        match self {
            TypeDescriptor::Primitive(kind) => kind.boxed_name(),
            other => other.declared_name(),
        }
    }

    /// Nullable name with generic arguments removed (`Map<K, V>` → `Map`)
    #[must_use]
    pub fn erased_name(&self) -> String {
        let name = self.nullable_name();
        let mut erased = String::with_capacity(name.len());
        let mut depth = 0usize;
        for c in name.chars() {
            match c {
                '<' => depth += 1,
                '>' => depth = depth.saturating_sub(1),
                _ if depth == 0 => erased.push(c),
                _ => {}
            }
        }
        erased
    }

    /// Check if this is a primitive or a primitive wrapper
    #[inline]
    #[must_use]
    pub fn is_primitive_or_boxed(&self) -> bool {
        matches!(
            self,
            TypeDescriptor::Primitive(_) | TypeDescriptor::Boxed { .. }
        )
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.declared_name())
    }
}

/// Member visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    /// `public`
    Public,
    /// `protected`
    Protected,
    /// No modifier
    #[default]
    Package,
    /// `private`
    Private,
}

impl Visibility {
    /// Modifier keyword, empty for package-private
    #[inline]
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Protected => "protected",
            Visibility::Package => "",
            Visibility::Private => "private",
        }
    }

    /// Check if the member is private
    #[inline]
    #[must_use]
    pub fn is_private(self) -> bool {
        self == Visibility::Private
    }
}

/// Constructor or method parameter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parameter {
    /// Parameter name
    pub name: String,
    /// Declared type
    pub ty: TypeDescriptor,
}

impl Parameter {
    /// Create parameter, classifying the type text
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, ty: &str) -> Self {
        Self {
            name: name.into(),
            ty: TypeDescriptor::parse(ty),
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ty, self.name)
    }
}

/// Constructor declaration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Constructor {
    /// Parameters in declaration order
    pub params: Vec<Parameter>,
    /// Visibility
    pub visibility: Visibility,
}

impl Constructor {
    /// Create constructor with default (package) visibility
    #[inline]
    #[must_use]
    pub fn new(params: Vec<Parameter>) -> Self {
        Self {
            params,
            visibility: Visibility::default(),
        }
    }

    /// With visibility
    #[inline]
    #[must_use]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }
}

/// Method declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    /// Method name
    pub name: String,
    /// Parameters in declaration order
    pub params: Vec<Parameter>,
    /// Visibility
    pub visibility: Visibility,
}

impl Method {
    /// Create method with no parameters and package visibility
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            visibility: Visibility::default(),
        }
    }

    /// Append a parameter
    #[inline]
    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, ty: &str) -> Self {
        self.params.push(Parameter::new(name, ty));
        self
    }

    /// With visibility
    #[inline]
    #[must_use]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }
}

/// The type under analysis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetType {
    /// Package, empty for the default package
    pub namespace: String,
    /// Simple name
    pub name: String,
    /// Constructors in source order
    pub constructors: Vec<Constructor>,
    /// Methods in source order
    pub methods: Vec<Method>,
}

impl TargetType {
    /// Create type without members
    #[inline]
    #[must_use]
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            constructors: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Append a constructor
    #[inline]
    #[must_use]
    pub fn with_constructor(mut self, constructor: Constructor) -> Self {
        self.constructors.push(constructor);
        self
    }

    /// Append a method
    #[inline]
    #[must_use]
    pub fn with_method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    /// Fully qualified name (`a.b.Widget`)
    #[must_use]
    pub fn qualified_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parse_primitives() {
        assert_eq!(
            TypeDescriptor::parse("int"),
            TypeDescriptor::Primitive(PrimitiveKind::Int)
        );
        assert_eq!(
            TypeDescriptor::parse("boolean"),
            TypeDescriptor::Primitive(PrimitiveKind::Boolean)
        );
    }

    #[test]
    fn parse_boxed_and_qualified_boxed() {
        assert!(matches!(
            TypeDescriptor::parse("Integer"),
            TypeDescriptor::Boxed { kind: PrimitiveKind::Int, .. }
        ));
        assert!(matches!(
            TypeDescriptor::parse("java.lang.Character"),
            TypeDescriptor::Boxed { kind: PrimitiveKind::Char, .. }
        ));
    }

    #[test]
    fn parse_string_and_reference() {
        assert!(matches!(
            TypeDescriptor::parse("String"),
            TypeDescriptor::StringLike { .. }
        ));
        assert!(matches!(
            TypeDescriptor::parse("StringBuilder"),
            TypeDescriptor::Reference { .. }
        ));
    }

    #[test]
    fn nullable_name_widens_primitives() {
        assert_eq!(TypeDescriptor::parse("int").nullable_name(), "Integer");
        assert_eq!(TypeDescriptor::parse("char").nullable_name(), "Character");
        assert_eq!(TypeDescriptor::parse("Point").nullable_name(), "Point");
    }

    #[test]
    fn erased_name_strips_generics() {
        assert_eq!(
            TypeDescriptor::parse("Map<String, List<Integer>>").erased_name(),
            "Map"
        );
        assert_eq!(TypeDescriptor::parse("Shape").erased_name(), "Shape");
    }

    #[test]
    fn qualified_name() {
        assert_eq!(TargetType::new("a.b", "Widget").qualified_name(), "a.b.Widget");
        assert_eq!(TargetType::new("", "Widget").qualified_name(), "Widget");
    }

    #[test]
    fn parameter_display() {
        assert_eq!(Parameter::new("n", "Integer").to_string(), "Integer n");
    }

    fn type_text() -> impl Strategy<Value = String> {
        prop_oneof![
            prop::sample::select(PrimitiveKind::ALL.to_vec()).prop_map(|k| k.keyword().to_string()),
            prop::sample::select(PrimitiveKind::ALL.to_vec()).prop_map(|k| k.boxed_name().to_string()),
            Just("String".to_string()),
            "[A-Z][a-zA-Z0-9]{0,8}(<[A-Z][a-z]{0,5}>)?(\\[\\])?",
        ]
    }

    proptest! {
        #[test]
        fn prop_parse_keeps_declared_text(text in type_text()) {
            let ty = TypeDescriptor::parse(&text);
            prop_assert_eq!(ty.declared_name(), text.as_str());
            prop_assert_eq!(TypeDescriptor::parse(ty.declared_name()), ty.clone());
            prop_assert!(!ty.erased_name().contains('<'));
        }
    }
}

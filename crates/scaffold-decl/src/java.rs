//! Java declaration source
//!
//! Parses a compilation unit with tree-sitter and extracts the target type's
//! members plus every branch construct of the unit. The enclosing method is
//! carried down the traversal, so no parent links are needed.

use crate::branch::{Branch, BranchSite, SwitchEntry};
use crate::error::SourceError;
use crate::source::{simple_name, Declaration, DeclarationSource};
use crate::types::{Constructor, Method, Parameter, TargetType, TypeDescriptor, Visibility};
use tree_sitter::{Node, Parser, Tree};

/// Node kinds that declare a named type
const TYPE_DECLARATIONS: &[&str] = &[
    "class_declaration",
    "interface_declaration",
    "enum_declaration",
    "record_declaration",
];

/// Method-like nodes that are not methods; branches below them belong to no method
const NON_METHOD_CALLABLES: &[&str] = &[
    "constructor_declaration",
    "compact_constructor_declaration",
    "static_initializer",
];

/// Java source text
#[derive(Debug, Clone)]
pub struct JavaSource {
    source: String,
    origin: String,
}

impl JavaSource {
    /// Create source from text
    #[inline]
    #[must_use]
    pub fn from_source(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            origin: "<memory>".to_string(),
        }
    }

    /// With origin label used in diagnostics (usually the file path)
    #[inline]
    #[must_use]
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    /// Get source text
    #[inline]
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    fn parse_tree(&self) -> Result<Tree, SourceError> {
        let language: tree_sitter::Language = tree_sitter_java::LANGUAGE.into();

        let mut parser = Parser::new();
        parser
            .set_language(&language)
            .map_err(|e| SourceError::ParserInit(e.to_string()))?;

        parser
            .parse(&self.source, None)
            .ok_or(SourceError::ParseFailed)
    }
}

impl DeclarationSource for JavaSource {
    fn load(&self, type_name: &str) -> Result<Declaration, SourceError> {
        let tree = self.parse_tree()?;
        let root = tree.root_node();
        let src = self.source.as_bytes();

        if root.has_error() {
            let (line, column) = first_error_position(root).unwrap_or((1, 1));
            return Err(SourceError::Syntax {
                origin: self.origin.clone(),
                line,
                column,
            });
        }

        let simple = simple_name(type_name);
        let type_node =
            find_type(root, simple, src).ok_or_else(|| SourceError::type_not_found(type_name))?;

        let mut target = TargetType::new(package_name(root, src), simple);
        collect_members(type_node, src, &mut target);

        let mut branches = Vec::new();
        collect_branches(root, src, None, &mut branches);

        tracing::debug!(
            "Parsed {}: {} constructors, {} methods, {} branch sites",
            target.qualified_name(),
            target.constructors.len(),
            target.methods.len(),
            branches.len()
        );

        Ok(Declaration { target, branches })
    }
}

/// Named, non-extra children (comments are skipped)
fn named_children(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|child| !child.is_extra())
        .collect()
}

#[inline]
fn text<'s>(node: Node<'_>, src: &'s [u8]) -> &'s str {
    node.utf8_text(src).unwrap_or("")
}

/// Node text on a single line
fn collapsed(node: Node<'_>, src: &[u8]) -> String {
    text(node, src).split_whitespace().collect::<Vec<_>>().join(" ")
}

#[inline]
fn line_of(node: Node<'_>) -> usize {
    node.start_position().row + 1
}

fn first_error_position(node: Node<'_>) -> Option<(usize, usize)> {
    if node.is_error() || node.is_missing() {
        let pos = node.start_position();
        return Some((pos.row + 1, pos.column + 1));
    }

    let mut cursor = node.walk();
    let children: Vec<_> = node.children(&mut cursor).collect();
    children
        .into_iter()
        .filter(|child| child.has_error())
        .find_map(first_error_position)
}

fn find_type<'t>(node: Node<'t>, name: &str, src: &[u8]) -> Option<Node<'t>> {
    if TYPE_DECLARATIONS.contains(&node.kind())
        && node
            .child_by_field_name("name")
            .is_some_and(|n| text(n, src) == name)
    {
        return Some(node);
    }

    named_children(node)
        .into_iter()
        .find_map(|child| find_type(child, name, src))
}

fn package_name(root: Node<'_>, src: &[u8]) -> String {
    named_children(root)
        .into_iter()
        .find(|n| n.kind() == "package_declaration")
        .and_then(|pkg| {
            named_children(pkg)
                .into_iter()
                .find(|n| matches!(n.kind(), "identifier" | "scoped_identifier"))
        })
        .map(|n| text(n, src).to_string())
        .unwrap_or_default()
}

fn collect_members(type_node: Node<'_>, src: &[u8], target: &mut TargetType) {
    let Some(body) = type_node.child_by_field_name("body") else {
        return;
    };

    // enum constants come first; members live in a nested declarations node
    let mut members = Vec::new();
    for child in named_children(body) {
        if child.kind() == "enum_body_declarations" {
            members.extend(named_children(child));
        } else {
            members.push(child);
        }
    }

    for member in members {
        match member.kind() {
            "constructor_declaration" => target.constructors.push(Constructor {
                params: parameters(member, src),
                visibility: visibility(member),
            }),
            "method_declaration" => {
                let Some(name) = member.child_by_field_name("name") else {
                    continue;
                };
                target.methods.push(Method {
                    name: text(name, src).to_string(),
                    params: parameters(member, src),
                    visibility: visibility(member),
                });
            }
            _ => {}
        }
    }
}

fn visibility(member: Node<'_>) -> Visibility {
    let Some(modifiers) = named_children(member)
        .into_iter()
        .find(|n| n.kind() == "modifiers")
    else {
        return Visibility::Package;
    };

    let mut cursor = modifiers.walk();
    let keywords: Vec<&str> = modifiers.children(&mut cursor).map(|n| n.kind()).collect();

    if keywords.contains(&"private") {
        Visibility::Private
    } else if keywords.contains(&"protected") {
        Visibility::Protected
    } else if keywords.contains(&"public") {
        Visibility::Public
    } else {
        Visibility::Package
    }
}

fn parameters(callable: Node<'_>, src: &[u8]) -> Vec<Parameter> {
    let Some(list) = callable.child_by_field_name("parameters") else {
        return Vec::new();
    };

    named_children(list)
        .into_iter()
        .filter_map(|p| parameter(p, src))
        .collect()
}

fn parameter(node: Node<'_>, src: &[u8]) -> Option<Parameter> {
    match node.kind() {
        "formal_parameter" => {
            let ty = node.child_by_field_name("type")?;
            let name = node.child_by_field_name("name")?;

            let mut type_text = collapsed(ty, src);
            if let Some(dims) = node.child_by_field_name("dimensions") {
                type_text.push_str(&collapsed(dims, src));
            }

            Some(Parameter {
                name: text(name, src).to_string(),
                ty: TypeDescriptor::parse(&type_text),
            })
        }
        "spread_parameter" => {
            let children = named_children(node);
            let ty = children
                .iter()
                .find(|n| !matches!(n.kind(), "modifiers" | "variable_declarator"))?;
            let name = node
                .child_by_field_name("name")
                .or_else(|| {
                    children
                        .iter()
                        .find(|n| n.kind() == "variable_declarator")
                        .and_then(|d| d.child_by_field_name("name"))
                })
                .or_else(|| children.iter().rev().find(|n| n.kind() == "identifier").copied())?;

            Some(Parameter {
                name: text(name, src).to_string(),
                ty: TypeDescriptor::Reference {
                    name: format!("{}[]", collapsed(*ty, src)),
                },
            })
        }
        // receiver parameters (`Widget this`) are not real arguments
        _ => None,
    }
}

fn collect_branches<'s>(
    node: Node<'_>,
    src: &'s [u8],
    enclosing: Option<&'s str>,
    out: &mut Vec<BranchSite>,
) {
    let mut scope = enclosing;

    let branch = match node.kind() {
        "method_declaration" => {
            scope = node.child_by_field_name("name").map(|n| text(n, src));
            None
        }
        kind if NON_METHOD_CALLABLES.contains(&kind) => {
            scope = None;
            None
        }
        "if_statement" => Some(conditional(node, src)),
        "ternary_expression" => Some(ternary(node, src)),
        "switch_expression" | "switch_statement" => Some(multi_way(node, src)),
        _ => None,
    };

    match branch {
        Some(Some(branch)) => out.push(BranchSite {
            enclosing: scope.map(str::to_string),
            line: line_of(node),
            branch,
        }),
        Some(None) => {
            tracing::warn!("Skipping unrecognized {} at line {}", node.kind(), line_of(node));
        }
        None => {}
    }

    for child in named_children(node) {
        collect_branches(child, src, scope, out);
    }
}

fn conditional(node: Node<'_>, src: &[u8]) -> Option<Branch> {
    let condition = node.child_by_field_name("condition")?;

    // only a braced else block adds a path; `else if` is its own conditional
    let has_else = node
        .child_by_field_name("alternative")
        .is_some_and(|alt| alt.kind() == "block");

    let inner = if condition.kind() == "parenthesized_expression" {
        named_children(condition)
            .into_iter()
            .next()
            .unwrap_or(condition)
    } else {
        condition
    };

    Some(Branch::Conditional {
        condition: collapsed(inner, src),
        has_else,
    })
}

fn ternary(node: Node<'_>, src: &[u8]) -> Option<Branch> {
    let condition = node.child_by_field_name("condition")?;
    Some(Branch::Ternary {
        condition: collapsed(condition, src),
    })
}

fn multi_way(node: Node<'_>, src: &[u8]) -> Option<Branch> {
    let body = node.child_by_field_name("body")?;
    let entries = named_children(body)
        .into_iter()
        .filter_map(|group| switch_entry(group, src))
        .collect();
    Some(Branch::MultiWay { entries })
}

fn switch_entry(group: Node<'_>, src: &[u8]) -> Option<SwitchEntry> {
    if !matches!(group.kind(), "switch_block_statement_group" | "switch_rule") {
        return None;
    }

    let mut labels = Vec::new();
    let mut statements = Vec::new();
    for child in named_children(group) {
        if child.kind() == "switch_label" {
            let values = named_children(child);
            if values.is_empty() {
                labels.push("default".to_string());
            } else {
                labels.extend(values.into_iter().map(|v| collapsed(v, src)));
            }
        } else {
            statements.push(collapsed(child, src));
        }
    }

    if labels.is_empty() {
        tracing::warn!("Skipping switch group without labels at line {}", line_of(group));
        return None;
    }

    Some(SwitchEntry::new(labels, statements.concat()))
}

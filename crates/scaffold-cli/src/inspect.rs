//! Declaration summary for `scaffold inspect`

use scaffold_decl::{Branch, Declaration, Parameter, Visibility};
use std::fmt;

fn parameter_list(params: &[Parameter]) -> String {
    let rendered: Vec<String> = params.iter().map(ToString::to_string).collect();
    rendered.join(", ")
}

fn modifier(visibility: Visibility) -> &'static str {
    match visibility {
        Visibility::Package => "package",
        other => other.keyword(),
    }
}

fn branch_detail(branch: &Branch) -> String {
    match branch {
        Branch::Conditional {
            condition,
            has_else,
        } => {
            if *has_else {
                format!("{condition} (with else)")
            } else {
                condition.clone()
            }
        }
        Branch::Ternary { condition } => condition.clone(),
        Branch::MultiWay { entries } => {
            let keys: Vec<String> = entries.iter().map(|e| e.label_key()).collect();
            format!("case {}", keys.join(" | "))
        }
    }
}

/// Constructors, methods and branch sites of a declaration, one per line
#[derive(Debug, Clone, Copy)]
pub struct Summary<'d>(pub &'d Declaration);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decl = self.0;
        let target = &decl.target;

        writeln!(f, "{}", target.qualified_name())?;

        writeln!(f, "constructors:")?;
        for ctor in &target.constructors {
            writeln!(
                f,
                "  {} {}({})",
                modifier(ctor.visibility),
                target.name,
                parameter_list(&ctor.params)
            )?;
        }

        writeln!(f, "methods:")?;
        for method in &target.methods {
            writeln!(
                f,
                "  {} {}({})",
                modifier(method.visibility),
                method.name,
                parameter_list(&method.params)
            )?;
        }

        writeln!(f, "branches:")?;
        for site in &decl.branches {
            writeln!(
                f,
                "  line {} {} in {}: {}",
                site.line,
                site.branch.kind_name(),
                site.enclosing.as_deref().unwrap_or("<none>"),
                branch_detail(&site.branch)
            )?;
        }
        Ok(())
    }
}

/// Render the [`Summary`] of a declaration
#[inline]
#[must_use]
pub fn describe(decl: &Declaration) -> String {
    Summary(decl).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use scaffold_test_utils::{load_java, DISPATCHER_SOURCE, WIDGET_SOURCE};

    #[test]
    fn widget_summary() {
        let decl = load_java(WIDGET_SOURCE, "ch.example.geometry.Widget");
        assert_eq!(
            describe(&decl),
            "ch.example.geometry.Widget\n\
             constructors:\n  public Widget(Canvas canvas)\n\
             methods:\n  public widen(Integer n, Shape q)\n\
             branches:\n  line 11 if in widen: n > 0 (with else)\n"
        );
    }

    #[test]
    fn switch_and_private_members_are_listed() {
        let text = describe(&load_java(DISPATCHER_SOURCE, "Dispatcher"));
        assert!(text.contains("  private Dispatcher(Router router)\n"));
        assert!(text.contains("  package Dispatcher(String a, String b, String c)\n"));
        assert!(text.contains("switch in route: case 1 | 2 | default\n"));
        assert!(text.contains("ternary in hidden: x > 0\n"));
    }

    #[test]
    fn summary_displays_like_describe() {
        let decl = load_java(WIDGET_SOURCE, "Widget");
        assert_eq!(format!("{}", Summary(&decl)), describe(&decl));
    }
}

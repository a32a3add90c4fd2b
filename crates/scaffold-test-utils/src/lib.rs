//! Testing utilities for the Scaffold workspace
//!
//! Shared Java sources and declaration builders.

#![allow(missing_docs)]

use scaffold_decl::{
    Branch, BranchSite, Constructor, Declaration, DeclarationSource, JavaSource, Method,
    Parameter, SwitchEntry, TargetType,
};

/// One reference-typed constructor parameter, one method with an if/else
pub const WIDGET_SOURCE: &str = r#"package ch.example.geometry;

public class Widget {
    private final Canvas canvas;

    public Widget(Canvas canvas) {
        this.canvas = canvas;
    }

    public Object widen(Integer n, Shape q) {
        if (n > 0) {
            return q;
        } else {
            return canvas;
        }
    }
}
"#;

/// Three constructors sharing parameters, a zero-argument method, overloads
/// and a three-group switch
pub const DISPATCHER_SOURCE: &str = r#"package ch.example.routing;

import java.util.List;

public class Dispatcher {
    public Dispatcher() {
    }

    public Dispatcher(String a) {
    }

    public Dispatcher(String a, String b) {
    }

    Dispatcher(String a, String b, String c) {
    }

    private Dispatcher(Router router) {
    }

    public void reset() {
    }

    public String route(int code) {
        switch (code) {
            case 1:
                return "one";
            case 2:
                return "two";
            default:
                return "many";
        }
    }

    public String label(String name) {
        return name == null ? "anonymous" : name;
    }

    public String label(String name, List<String> tags) {
        if (tags.isEmpty()) {
            return name;
        }
        return name + tags;
    }

    private int hidden(int x) {
        return x > 0 ? x : -x;
    }
}
"#;

pub fn load_java(source: &str, type_name: &str) -> Declaration {
    JavaSource::from_source(source).load(type_name).unwrap()
}

pub fn params(pairs: &[(&str, &str)]) -> Vec<Parameter> {
    pairs
        .iter()
        .map(|(name, ty)| Parameter::new(*name, ty))
        .collect()
}

pub fn method(name: &str, pairs: &[(&str, &str)]) -> Method {
    let mut method = Method::new(name);
    method.params = params(pairs);
    method
}

pub fn conditional(condition: &str, has_else: bool) -> Branch {
    Branch::Conditional {
        condition: condition.to_string(),
        has_else,
    }
}

pub fn ternary(condition: &str) -> Branch {
    Branch::Ternary {
        condition: condition.to_string(),
    }
}

/// Switch whose groups are `(labels, body)`; labels are comma-separated
pub fn switch(groups: &[(&str, &str)]) -> Branch {
    Branch::MultiWay {
        entries: groups
            .iter()
            .map(|(labels, body)| {
                SwitchEntry::new(labels.split(',').map(str::to_string).collect(), *body)
            })
            .collect(),
    }
}

/// In-memory twin of [`WIDGET_SOURCE`]
pub fn widget_declaration() -> Declaration {
    Declaration::new(
        TargetType::new("ch.example.geometry", "Widget")
            .with_constructor(Constructor::new(params(&[("canvas", "Canvas")])))
            .with_method(method("widen", &[("n", "Integer"), ("q", "Shape")])),
    )
    .with_branch(BranchSite::in_method("widen", conditional("n > 0", true)))
}

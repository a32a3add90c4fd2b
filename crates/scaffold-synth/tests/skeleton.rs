//! End-to-end skeleton generation from Java source and in-memory declarations

use pretty_assertions::assert_eq;
use scaffold_decl::{BranchSite, Declaration, JavaSource, SourceError, TargetType};
use scaffold_synth::{emit, CaseOrigin, GenerateError, Generator, GeneratorConfig};
use scaffold_test_utils::{
    conditional, load_java, method, switch, ternary, widget_declaration, DISPATCHER_SOURCE, WIDGET_SOURCE,
};

const WIDGET_SKELETON: &str = r#"package ch.example.geometry;

import org.junit.jupiter.api.BeforeEach;
import org.junit.jupiter.api.Test;
import org.mockito.junit.jupiter.MockitoExtension;
import org.junit.jupiter.api.extension.ExtendWith;
import org.mockito.Mock;

import static org.assertj.core.api.Assertions.*;
import static org.mockito.Mockito.*;

@ExtendWith(MockitoExtension.class)
class WidgetTest {

    @Mock
    Canvas canvas;

    Widget target;

    @BeforeEach
    void init() {
        target = new Widget(canvas);
    }

    @Test
    void testWidenWhereNIsNullAndQIsNull() {
        // GIVEN
        Integer n = null;
        Shape q = null;

        // WHEN
        var actual = target.widen(n, q);

        // THEN
        assertThat(actual).isNotNull();
        verifyNoMoreInteractions(canvas);
    }

    @Test
    void testWidenWhereNIs42AndQIsNull() {
        // GIVEN
        Integer n = 42;
        Shape q = null;

        // WHEN
        var actual = target.widen(n, q);

        // THEN
        assertThat(actual).isNotNull();
        verifyNoMoreInteractions(canvas);
    }

    @Test
    void testWidenWhereNIsNullAndQIsMocked() {
        // GIVEN
        Integer n = null;
        Shape q = mock(Shape.class);

        // WHEN
        var actual = target.widen(n, q);

        // THEN
        assertThat(actual).isNotNull();
        verifyNoMoreInteractions(canvas);
    }

    @Test
    void testWidenWhereNIs42AndQIsMocked() {
        // GIVEN
        Integer n = 42;
        Shape q = mock(Shape.class);

        // WHEN
        var actual = target.widen(n, q);

        // THEN
        assertThat(actual).isNotNull();
        verifyNoMoreInteractions(canvas);
    }

    @Test
    // n > 0
    void testIfConditionInWiden() {
        // GIVEN
        Integer n = 42;
        Shape q = mock(Shape.class);

        // WHEN
        var actual = target.widen(n, q);

        // THEN
        assertThat(actual).isNotNull();
        verifyNoMoreInteractions(canvas);
    }

    @Test
    // n > 0
    void testElseConditionInWiden() {
        // GIVEN
        Integer n = 42;
        Shape q = mock(Shape.class);

        // WHEN
        var actual = target.widen(n, q);

        // THEN
        assertThat(actual).isNotNull();
        verifyNoMoreInteractions(canvas);
    }

}
"#;

fn generator() -> Generator {
    Generator::new(GeneratorConfig::new()).unwrap()
}

#[test]
fn widget_skeleton_from_source_matches_golden() {
    let text = generator()
        .generate_from(&JavaSource::from_source(WIDGET_SOURCE), "ch.example.geometry.Widget")
        .unwrap();
    assert_eq!(text, WIDGET_SKELETON);
}

#[test]
fn widget_skeleton_from_memory_matches_source() {
    let from_memory = generator().generate(&widget_declaration()).unwrap();
    assert_eq!(from_memory, WIDGET_SKELETON);
}

#[test]
fn widget_case_order() {
    let plan = generator().plan(&widget_declaration()).unwrap();
    assert_eq!(
        plan.case_names(),
        vec![
            "testWidenWhereNIsNullAndQIsNull",
            "testWidenWhereNIs42AndQIsNull",
            "testWidenWhereNIsNullAndQIsMocked",
            "testWidenWhereNIs42AndQIsMocked",
            "testIfConditionInWiden",
            "testElseConditionInWiden",
        ]
    );
}

#[test]
fn output_is_deterministic() {
    let decl = load_java(DISPATCHER_SOURCE, "ch.example.routing.Dispatcher");
    let first = generator().generate(&decl).unwrap();
    let second = generator().generate(&decl).unwrap();
    assert_eq!(first, second);
}

#[test]
fn shared_constructor_parameters_declared_once() {
    let decl = load_java(DISPATCHER_SOURCE, "Dispatcher");
    let text = generator().generate(&decl).unwrap();

    assert_eq!(text.matches("    String a = \"42\";\n").count(), 1);
    assert_eq!(text.matches("    String b = \"42\";\n").count(), 1);
    assert_eq!(text.matches("    String c = \"42\";\n").count(), 1);
    assert!(text.contains(
        "        target = new Dispatcher();\n        target = new Dispatcher(a);\n        target = new Dispatcher(a, b);\n        target = new Dispatcher(a, b, c);\n    }\n"
    ));
    // private constructor contributes neither a field nor a construction
    assert!(!text.contains("Router"));
    assert!(!text.contains("verifyNoMoreInteractions"));
}

#[test]
fn zero_parameter_method_has_single_case() {
    let decl = load_java(DISPATCHER_SOURCE, "Dispatcher");
    let plan = generator().plan(&decl).unwrap();

    let reset: Vec<_> = plan
        .cases
        .iter()
        .filter(|c| c.invocation == "var actual = target.reset();")
        .collect();
    assert_eq!(reset.len(), 1);
    assert_eq!(reset[0].name, "testResetWhere");
    assert_eq!(reset[0].origin, CaseOrigin::Permutation);
}

#[test]
fn three_switch_groups_share_one_name() {
    let decl = load_java(DISPATCHER_SOURCE, "Dispatcher");
    let plan = generator().plan(&decl).unwrap();

    let switch_cases: Vec<_> = plan
        .cases
        .iter()
        .filter(|c| c.name == "testSwitchCaseConditionInRoute")
        .collect();
    assert_eq!(switch_cases.len(), 3);
    assert_eq!(
        switch_cases[0].annotation.as_deref(),
        Some("case 1: return \"one\";")
    );
    assert_eq!(
        switch_cases[2].annotation.as_deref(),
        Some("case default: return \"many\";")
    );
}

#[test]
fn overloads_share_branches_by_name() {
    let decl = load_java(DISPATCHER_SOURCE, "Dispatcher");
    let plan = generator().plan(&decl).unwrap();

    let label_branch_cases = plan
        .cases
        .iter()
        .filter(|c| c.origin.is_branch() && c.name.ends_with("InLabel"))
        .count();
    // if + ternary pair, emitted once per overload
    assert_eq!(label_branch_cases, 6);
    assert_eq!(plan.cases.len(), 18);
}

#[test]
fn private_methods_are_not_generated() {
    let decl = load_java(DISPATCHER_SOURCE, "Dispatcher");
    let text = generator().generate(&decl).unwrap();
    assert!(!text.contains("target.hidden("));
}

#[test]
fn generic_reference_is_mocked_by_erasure() {
    let decl = load_java(DISPATCHER_SOURCE, "Dispatcher");
    let text = generator().generate(&decl).unwrap();
    assert!(text.contains("        List<String> tags = mock(List.class);\n"));
    assert!(text.contains("void testLabelWhereNameIs42AndTagsIsMocked()"));
}

#[test]
fn method_filter_restricts_methods() {
    let decl = load_java(DISPATCHER_SOURCE, "Dispatcher");
    let text = emit(&decl, "route", false).unwrap();
    assert_eq!(text.matches("@Test").count(), 2);
    assert!(text.contains("void testRouteWhereCodeIsNull()"));
    assert!(text.contains("void testRouteWhereCodeIs42()"));
}

#[test]
fn multi_way_with_three_groups_from_memory() {
    let decl = Declaration::new(
        TargetType::new("app", "Router").with_method(method("pick", &[])),
    )
    .with_branch(BranchSite::in_method(
        "pick",
        switch(&[("A", "a();"), ("B", "b();"), ("C,D", "c();")]),
    ));

    let plan = generator().plan(&decl).unwrap();
    assert_eq!(
        plan.case_names(),
        vec![
            "testPickWhere",
            "testSwitchCaseConditionInPick",
            "testSwitchCaseConditionInPick",
            "testSwitchCaseConditionInPick",
        ]
    );
    assert_eq!(plan.cases[3].annotation.as_deref(), Some("case C,D: c();"));
}

#[test]
fn detached_branches_produce_no_cases() {
    let decl = Declaration::new(
        TargetType::new("app", "Gauge").with_method(method("read", &[("unit", "String")])),
    )
    .with_branch(BranchSite::detached(ternary("LIMIT > 0")))
    .with_branch(BranchSite::in_method("read", ternary("unit == null")))
    .with_branch(BranchSite::in_method("read", conditional("unit.isEmpty()", false)));

    let plan = generator().plan(&decl).unwrap();
    assert_eq!(
        plan.case_names(),
        vec![
            "testReadWhereUnitIsNull",
            "testReadWhereUnitIs42",
            "testIfConditionInRead",
            "testTernaryConditionInRead",
            "testTernaryElseConditionInRead",
        ]
    );
    assert_eq!(plan.cases[2].given, vec!["String unit = \"42\";"]);
}

#[test]
fn nested_ternary_yields_two_cases_per_ternary() {
    let decl = load_java(
        "class Scale { int pick(int x) { return x > 0 ? (x > 5 ? 1 : 2) : 3; } }",
        "Scale",
    );
    let plan = generator().plan(&decl).unwrap();

    let annotations: Vec<_> = plan
        .cases
        .iter()
        .filter(|c| c.origin.is_branch())
        .map(|c| (c.name.as_str(), c.annotation.as_deref()))
        .collect();
    assert_eq!(
        annotations,
        vec![
            ("testTernaryConditionInPick", Some("x > 0")),
            ("testTernaryElseConditionInPick", Some("x > 0")),
            ("testTernaryConditionInPick", Some("x > 5")),
            ("testTernaryElseConditionInPick", Some("x > 5")),
        ]
    );
}

#[test]
fn braceless_else_gets_no_else_case() {
    let decl = load_java("class Sign { int of(int x) { if (x > 0) return 1; else return 2; } }", "Sign");
    let plan = generator().plan(&decl).unwrap();
    assert_eq!(
        plan.case_names(),
        vec!["testOfWhereXIsNull", "testOfWhereXIs42", "testIfConditionInOf"]
    );
}

#[test]
fn missing_type_aborts_before_output() {
    let err = generator()
        .generate_from(&JavaSource::from_source(WIDGET_SOURCE), "ch.example.geometry.Gadget")
        .unwrap_err();
    assert!(matches!(
        err,
        GenerateError::Source {
            source: SourceError::TypeNotFound { .. },
            ..
        }
    ));
}

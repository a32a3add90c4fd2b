//! Java rendering of a [`SuitePlan`]

use crate::case::TestCase;
use crate::emitter::SuitePlan;
use std::fmt::{self, Display, Formatter};

const IMPORTS: &str = "\
import org.junit.jupiter.api.BeforeEach;
import org.junit.jupiter.api.Test;
import org.mockito.junit.jupiter.MockitoExtension;
import org.junit.jupiter.api.extension.ExtendWith;
import org.mockito.Mock;

import static org.assertj.core.api.Assertions.*;
import static org.mockito.Mockito.*;
";

impl Display for SuitePlan {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if !self.namespace.is_empty() {
            writeln!(f, "package {};", self.namespace)?;
            writeln!(f)?;
        }
        f.write_str(IMPORTS)?;
        writeln!(f)?;

        writeln!(f, "@ExtendWith(MockitoExtension.class)")?;
        writeln!(f, "class {} {{", self.test_class)?;
        writeln!(f)?;

        for field in &self.setup.fields {
            if field.is_mock() {
                writeln!(f, "    @Mock")?;
                writeln!(f, "    {};", field.param)?;
            } else {
                writeln!(f, "    {} = {};", field.param, field.value.expression())?;
            }
        }
        if !self.setup.fields.is_empty() {
            writeln!(f)?;
        }

        writeln!(f, "    {} target;", self.target_name)?;
        writeln!(f)?;
        writeln!(f, "    @BeforeEach")?;
        writeln!(f, "    void init() {{")?;
        for construction in &self.setup.constructions {
            writeln!(
                f,
                "        target = new {}({});",
                self.target_name,
                construction.arguments.join(", ")
            )?;
        }
        writeln!(f, "    }}")?;
        writeln!(f)?;

        let verification = self.setup.mocks.verification();
        for case in &self.cases {
            write_case(f, case, verification.as_deref())?;
        }

        writeln!(f, "}}")
    }
}

fn write_case(f: &mut Formatter<'_>, case: &TestCase, verification: Option<&str>) -> fmt::Result {
    writeln!(f, "    @Test")?;
    if let Some(annotation) = &case.annotation {
        writeln!(f, "    // {annotation}")?;
    }
    writeln!(f, "    void {}() {{", case.name)?;

    writeln!(f, "        // GIVEN")?;
    for statement in &case.given {
        writeln!(f, "        {statement}")?;
    }
    writeln!(f)?;

    writeln!(f, "        // WHEN")?;
    writeln!(f, "        {}", case.invocation)?;
    writeln!(f)?;

    writeln!(f, "        // THEN")?;
    writeln!(f, "        assertThat(actual).isNotNull();")?;
    if let Some(verification) = verification {
        writeln!(f, "        {verification}")?;
    }
    writeln!(f, "    }}")?;
    writeln!(f)
}

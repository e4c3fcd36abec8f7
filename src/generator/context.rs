//! Per-class generation state.

use crate::ir::TestClass;

/// State for generating exactly one test class.
///
/// A fresh context is created for every class, so the one-shot registration
/// flag can never leak from one class into the next.
#[derive(Debug, Clone)]
pub struct ClassGenerationContext {
    pub class: TestClass,
    scenario_setup_registered: bool,
}

impl ClassGenerationContext {
    pub fn new(namespace: impl Into<String>, class_name: impl Into<String>) -> Self {
        ClassGenerationContext {
            class: TestClass::new(namespace, class_name),
            scenario_setup_registered: false,
        }
    }

    pub fn scenario_setup_registered(&self) -> bool {
        self.scenario_setup_registered
    }

    /// Claims the one-shot scenario setup registration. Only the first call returns true.
    pub fn claim_scenario_setup(&mut self) -> bool {
        !std::mem::replace(&mut self.scenario_setup_registered, true)
    }

    pub fn into_class(self) -> TestClass {
        self.class
    }
}

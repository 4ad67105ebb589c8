//! Shared world state for task descriptor BDD scenarios.

use ce_task::task::domain::{
    Characteristics, TaskDescriptor, TaskDescriptorBuilder, TaskDescriptorError,
};
use rstest::fixture;

/// Scenario world for task descriptor behaviour tests.
#[derive(Default)]
pub struct DescriptorWorld {
    pub builder: TaskDescriptorBuilder,
    pub characteristics: Characteristics,
    pub last_build_result: Option<Result<TaskDescriptor, TaskDescriptorError>>,
    pub second_build_result: Option<Result<TaskDescriptor, TaskDescriptorError>>,
}

impl DescriptorWorld {
    /// Returns the descriptor from the last successful build.
    pub fn built(&self) -> Result<&TaskDescriptor, eyre::Report> {
        match self.last_build_result.as_ref() {
            Some(Ok(task)) => Ok(task),
            Some(Err(err)) => Err(eyre::eyre!("expected a built descriptor, got {err}")),
            None => Err(eyre::eyre!("the descriptor has not been built")),
        }
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> DescriptorWorld {
    DescriptorWorld::default()
}

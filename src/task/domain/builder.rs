//! Staging builder that validates and freezes task descriptors.

use super::descriptor::ValidatedFields;
use super::{Characteristics, ComponentRef, RequiredField, TaskDescriptor, TaskDescriptorError};
use serde::Deserialize;

/// Accumulates task descriptor fields and validates them on [`Self::build`].
///
/// The builder is not reset by `build`, so one configured builder can produce
/// several descriptors, with later setter calls overriding earlier values.
///
/// # Examples
///
/// ```
/// use ce_task::task::domain::{ComponentRef, TaskDescriptorBuilder};
///
/// let project = ComponentRef::new("AU-1", "my:project", "My Project");
/// let mut builder = TaskDescriptorBuilder::new();
/// builder
///     .set_organization_uuid("org1")
///     .set_uuid("AU-TASK-1")
///     .set_type("REPORT")
///     .set_component(project.clone())
///     .set_main_component(project);
///
/// let task = builder.build().expect("valid task");
/// assert_eq!(task.task_type(), "REPORT");
/// assert!(task.characteristics().is_empty());
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskDescriptorBuilder {
    organization_uuid: Option<String>,
    uuid: Option<String>,
    #[serde(rename = "type")]
    task_type: Option<String>,
    submitter_uuid: Option<String>,
    component: Option<ComponentRef>,
    main_component: Option<ComponentRef>,
    characteristics: Option<Characteristics>,
}

impl TaskDescriptorBuilder {
    /// Creates a builder with no field set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            organization_uuid: None,
            uuid: None,
            task_type: None,
            submitter_uuid: None,
            component: None,
            main_component: None,
            characteristics: None,
        }
    }

    /// Sets the owning organization identifier.
    pub fn set_organization_uuid(&mut self, organization_uuid: impl Into<String>) -> &mut Self {
        self.organization_uuid = Some(organization_uuid.into());
        self
    }

    /// Sets the task identifier.
    pub fn set_uuid(&mut self, uuid: impl Into<String>) -> &mut Self {
        self.uuid = Some(uuid.into());
        self
    }

    /// Sets the logical task kind.
    pub fn set_type(&mut self, task_type: impl Into<String>) -> &mut Self {
        self.task_type = Some(task_type.into());
        self
    }

    /// Sets the submitter identifier. An empty value builds as absent.
    pub fn set_submitter_uuid(&mut self, submitter_uuid: impl Into<String>) -> &mut Self {
        self.submitter_uuid = Some(submitter_uuid.into());
        self
    }

    /// Sets or clears the component.
    pub fn set_component(&mut self, component: impl Into<Option<ComponentRef>>) -> &mut Self {
        self.component = component.into();
        self
    }

    /// Sets or clears the main component.
    pub fn set_main_component(
        &mut self,
        main_component: impl Into<Option<ComponentRef>>,
    ) -> &mut Self {
        self.main_component = main_component.into();
        self
    }

    /// Replaces the characteristics. `None` stores an empty mapping.
    pub fn set_characteristics(
        &mut self,
        characteristics: impl Into<Option<Characteristics>>,
    ) -> &mut Self {
        self.characteristics = Some(characteristics.into().unwrap_or_default());
        self
    }

    /// Validates the staged fields and returns a new descriptor.
    ///
    /// Checks run in a fixed order so that the reported error is
    /// deterministic: organization uuid, uuid, type, then component pairing.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDescriptorError::EmptyField`] for the first required
    /// field that is unset or empty, or
    /// [`TaskDescriptorError::UnpairedComponent`] when only one of the
    /// component and main component is set.
    pub fn build(&self) -> Result<TaskDescriptor, TaskDescriptorError> {
        self.validate().inspect_err(|err| {
            tracing::debug!(
                uuid = self.uuid.as_deref().unwrap_or_default(),
                field = err.field().map_or("component", RequiredField::as_str),
                error = %err,
                "rejected task descriptor"
            );
        })
    }

    fn validate(&self) -> Result<TaskDescriptor, TaskDescriptorError> {
        let organization_uuid = required(
            self.organization_uuid.as_deref(),
            RequiredField::OrganizationUuid,
        )?;
        let uuid = required(self.uuid.as_deref(), RequiredField::Uuid)?;
        let task_type = required(self.task_type.as_deref(), RequiredField::Type)?;
        if self.component.is_some() != self.main_component.is_some() {
            return Err(TaskDescriptorError::UnpairedComponent);
        }

        let submitter_uuid = self
            .submitter_uuid
            .as_deref()
            .filter(|value| !value.is_empty())
            .map(str::to_owned);

        tracing::trace!(uuid, task_type, "built task descriptor");
        Ok(TaskDescriptor::from_validated(ValidatedFields {
            organization_uuid: organization_uuid.to_owned(),
            uuid: uuid.to_owned(),
            task_type: task_type.to_owned(),
            submitter_uuid,
            component: self.component.clone(),
            main_component: self.main_component.clone(),
            characteristics: self.characteristics.clone().unwrap_or_default(),
        }))
    }
}

fn required(value: Option<&str>, field: RequiredField) -> Result<&str, TaskDescriptorError> {
    value
        .filter(|candidate| !candidate.is_empty())
        .ok_or(TaskDescriptorError::EmptyField(field))
}

//! Immutable task descriptor identified by its uuid.

use super::{Characteristics, ComponentRef, TaskDescriptorBuilder, TaskDescriptorError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Description of a unit of work queued for the compute engine.
///
/// Descriptors are produced by [`TaskDescriptorBuilder::build`] and never
/// change afterwards. Two descriptors are equal, and hash identically, when
/// their uuids match, whatever their other fields hold.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "TaskDescriptorBuilder")]
pub struct TaskDescriptor {
    organization_uuid: String,
    uuid: String,
    #[serde(rename = "type")]
    task_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    submitter_uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    component: Option<ComponentRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    main_component: Option<ComponentRef>,
    characteristics: Characteristics,
}

/// Validated field values handed over by the builder.
pub(super) struct ValidatedFields {
    pub(super) organization_uuid: String,
    pub(super) uuid: String,
    pub(super) task_type: String,
    pub(super) submitter_uuid: Option<String>,
    pub(super) component: Option<ComponentRef>,
    pub(super) main_component: Option<ComponentRef>,
    pub(super) characteristics: Characteristics,
}

impl TaskDescriptor {
    /// Returns an empty builder.
    #[must_use]
    pub fn builder() -> TaskDescriptorBuilder {
        TaskDescriptorBuilder::new()
    }

    pub(super) fn from_validated(fields: ValidatedFields) -> Self {
        Self {
            organization_uuid: fields.organization_uuid,
            uuid: fields.uuid,
            task_type: fields.task_type,
            submitter_uuid: fields.submitter_uuid,
            component: fields.component,
            main_component: fields.main_component,
            characteristics: fields.characteristics,
        }
    }

    /// Returns the owning organization identifier.
    #[must_use]
    pub fn organization_uuid(&self) -> &str {
        &self.organization_uuid
    }

    /// Returns the task identifier.
    #[must_use]
    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    /// Returns the logical task kind, such as `REPORT`.
    #[must_use]
    pub fn task_type(&self) -> &str {
        &self.task_type
    }

    /// Returns the identifier of the user who submitted the task, if any.
    #[must_use]
    pub fn submitter_uuid(&self) -> Option<&str> {
        self.submitter_uuid.as_deref()
    }

    /// Returns the component the task applies to, if any.
    #[must_use]
    pub const fn component(&self) -> Option<&ComponentRef> {
        self.component.as_ref()
    }

    /// Returns the main component of [`Self::component`], if any.
    #[must_use]
    pub const fn main_component(&self) -> Option<&ComponentRef> {
        self.main_component.as_ref()
    }

    /// Returns the task characteristics, possibly empty.
    #[must_use]
    pub const fn characteristics(&self) -> &Characteristics {
        &self.characteristics
    }
}

impl PartialEq for TaskDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.uuid == other.uuid
    }
}

impl Eq for TaskDescriptor {}

impl Hash for TaskDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.uuid.hash(state);
    }
}

impl fmt::Display for TaskDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} task {}", self.task_type, self.uuid)
    }
}

impl TryFrom<TaskDescriptorBuilder> for TaskDescriptor {
    type Error = TaskDescriptorError;

    fn try_from(builder: TaskDescriptorBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

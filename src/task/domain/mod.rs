//! Domain model for compute-engine task descriptors.
//!
//! A descriptor is assembled through [`TaskDescriptorBuilder`], which
//! enforces field presence and component pairing before freezing the value.

mod builder;
mod characteristics;
mod component;
mod descriptor;
mod error;

pub use builder::TaskDescriptorBuilder;
pub use characteristics::Characteristics;
pub use component::ComponentRef;
pub use descriptor::TaskDescriptor;
pub use error::{RequiredField, TaskDescriptorError};

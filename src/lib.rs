//! ce-task: compute-engine task descriptors and external issue contracts.
//!
//! This crate provides the value objects exchanged between the compute-engine
//! task queue, the workers that process queued tasks, and the analysis
//! sensors that import issues from external rule engines.
//!
//! # Architecture
//!
//! Each module keeps its pure domain types under a `domain` submodule with
//! no infrastructure dependencies. Queues, workers and plugin hosts are
//! external collaborators that only construct and read these values.
//!
//! # Modules
//!
//! - [`task`]: Validated, immutable task descriptors and their builder
//! - [`issue`]: Issues imported from external rule engines

pub mod issue;
pub mod task;

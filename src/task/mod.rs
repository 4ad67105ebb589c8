//! Task descriptors exchanged between the compute-engine queue and workers.
//!
//! Descriptors identify a unit of work by uuid and carry the organization,
//! task kind, optional submitter, optional component pair and free-form
//! characteristics. Domain types live in [`domain`].

pub mod domain;

#[cfg(test)]
mod tests;

//! Issues imported from external rule engines by analysis sensors.
//!
//! An external issue names the rule that raised it, where it was raised,
//! how severe it is and, optionally, where to read about the rule and how
//! long a fix should take. Domain types live in [`domain`].

pub mod domain;

#[cfg(test)]
mod tests;

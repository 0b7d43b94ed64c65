//! Flag recommendation core
//!
//! Pure business logic with no I/O: value objects in [`domain`], static
//! rules in [`policies`] and the recommendation pipeline in [`services`].

pub mod domain;
pub mod policies;
pub mod services;

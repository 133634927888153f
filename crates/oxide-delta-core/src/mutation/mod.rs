//! Mutation records produced by the classifier.
//!
//! A [`MutationRecord`] is either the explicit [`MutationRecord::NoOp`] for
//! statements that are recognized but carry no mutation, or a [`Mutation`]
//! whose variant fixes the detail fields it carries.

mod details;
mod kind;
mod record;

pub use details::{DetailValue, Details};
pub use kind::{EntityType, MutationKind};
pub use record::{Mutation, MutationRecord};

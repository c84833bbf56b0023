//! Read-only reference entities used as filter keys

mod entity;
mod repository;

pub use entity::{ReferenceEntity, ReferenceKind};
pub use repository::{ReferenceRepository, resolve_or_not_found};

#[cfg(test)]
pub use repository::MockReferenceRepository;

//! Aggregate root trait for domain models.

/// Aggregate root marker + minimal interface.
///
/// All access to the objects clustered under an aggregate goes through the
/// root. The trait stays small so each bounded context decides how its state
/// evolves (guarded setters, pure functions, ...) without pulling in
/// infrastructure concerns.
pub trait AggregateRoot {
    /// Strongly-typed aggregate identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the aggregate identifier.
    fn id(&self) -> &Self::Id;
}

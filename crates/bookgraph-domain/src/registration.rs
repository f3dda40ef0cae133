//! Registration outcome for catalog entries

/// Result of registering a book or user
///
/// Registering an already-known entity is not an error: the catalog is left
/// unchanged and the caller is told via `Duplicate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Registration {
    /// A new entity was created
    Added,

    /// The entity already existed; nothing changed
    Duplicate,
}

impl Registration {
    /// Whether a new entity was created
    pub fn is_added(&self) -> bool {
        matches!(self, Registration::Added)
    }

    /// Whether the entity was already known
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Registration::Duplicate)
    }

    /// Get the outcome name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Registration::Added => "added",
            Registration::Duplicate => "duplicate",
        }
    }
}

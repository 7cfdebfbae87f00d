use thiserror::Error;

/// Lookups against the store that found nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("entity '{name}' does not exist")]
    MissingEntity { name: String },

    #[error("entity '{name}' has no {component} component")]
    MissingComponent {
        name: String,
        component: &'static str,
    },
}

impl StoreError {
    /// Name of the entity the failed lookup referred to.
    pub fn entity(&self) -> &str {
        match self {
            StoreError::MissingEntity { name } => name,
            StoreError::MissingComponent { name, .. } => name,
        }
    }
}

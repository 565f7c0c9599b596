use thiserror::Error;

/// Result type alias for property name resolution
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Reasons a method reference cannot be turned into a property name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("Introspection failed: {message}")]
    IntrospectionFailure { message: String },

    #[error("Method '{method}' is missing a get|is prefix")]
    NamingConventionViolation { method: String },

    #[error("Property name is missing after stripping the prefix of '{method}'")]
    EmptyPropertyName { method: String },
}

impl ResolveError {
    /// Create a new introspection failure
    pub fn introspection(message: impl Into<String>) -> Self {
        Self::IntrospectionFailure {
            message: message.into(),
        }
    }

    /// Create a new naming convention violation
    pub fn naming_convention(method: impl Into<String>) -> Self {
        Self::NamingConventionViolation {
            method: method.into(),
        }
    }

    /// Create a new empty property name error
    pub fn empty_property(method: impl Into<String>) -> Self {
        Self::EmptyPropertyName {
            method: method.into(),
        }
    }

    pub fn is_introspection_failure(&self) -> bool {
        matches!(self, Self::IntrospectionFailure { .. })
    }

    pub fn is_naming_convention_violation(&self) -> bool {
        matches!(self, Self::NamingConventionViolation { .. })
    }

    pub fn is_empty_property_name(&self) -> bool {
        matches!(self, Self::EmptyPropertyName { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ResolveError::naming_convention("fetchValue").to_string(),
            "Method 'fetchValue' is missing a get|is prefix"
        );
        assert_eq!(
            ResolveError::empty_property("get").to_string(),
            "Property name is missing after stripping the prefix of 'get'"
        );
        assert_eq!(
            ResolveError::introspection("no metadata").to_string(),
            "Introspection failed: no metadata"
        );
    }

    #[test]
    fn test_predicates() {
        assert!(ResolveError::introspection("x").is_introspection_failure());
        assert!(ResolveError::naming_convention("x").is_naming_convention_violation());
        assert!(ResolveError::empty_property("get").is_empty_property_name());
        assert!(!ResolveError::empty_property("get").is_introspection_failure());
    }
}

//! Getter-to-property name resolution
//!
//! A getter named `getFoo` or `isFoo` exposes the property `foo`. Only the
//! first character of the remainder is lowercased, so `getURL` resolves to
//! `uRL`. Callers downstream match on these exact names.

use crate::error::{ResolveError, ResolveResult};
use crate::field::FieldName;
use crate::method::{FieldFunction, MethodMeta};

const GETTER_PREFIX: &str = "get";
const BOOLEAN_GETTER_PREFIX: &str = "is";

/// Stateless resolver from accessor references to property names
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldNameResolver;

impl FieldNameResolver {
    pub const fn new() -> Self {
        Self
    }

    /// Resolve the property name, surfacing why resolution failed
    pub fn try_resolve<F>(&self, function: &F) -> ResolveResult<FieldName>
    where
        F: FieldFunction + ?Sized,
    {
        let meta = function.introspect()?;
        self.resolve_meta(meta)
    }

    /// Resolve the property name, logging and discarding any failure
    pub fn resolve<F>(&self, function: &F) -> Option<FieldName>
    where
        F: FieldFunction + ?Sized,
    {
        let meta = match function.introspect() {
            Ok(meta) => meta,
            Err(err) => {
                tracing::error!(error = %err, "Failed to resolve field name");
                return None;
            }
        };

        match self.resolve_meta(meta) {
            Ok(name) => Some(name),
            Err(err) => {
                tracing::error!(
                    method = meta.impl_method_name(),
                    declaring_type = meta.declaring_type(),
                    error = %err,
                    "Failed to resolve field name"
                );
                None
            }
        }
    }

    fn resolve_meta(&self, meta: MethodMeta) -> ResolveResult<FieldName> {
        let name = property_name(meta.impl_method_name())?;

        tracing::trace!(method = %meta, property = %name, "Resolved property name");
        Ok(name)
    }
}

/// Strip the `get`/`is` prefix from a method name and decapitalize the rest
pub fn property_name(method: &str) -> ResolveResult<FieldName> {
    let remainder = if let Some(rest) = method.strip_prefix(GETTER_PREFIX) {
        rest
    } else if let Some(rest) = method.strip_prefix(BOOLEAN_GETTER_PREFIX) {
        rest
    } else {
        return Err(ResolveError::naming_convention(method));
    };

    if remainder.trim().is_empty() {
        return Err(ResolveError::empty_property(method));
    }

    Ok(FieldName::new(decapitalize(remainder)))
}

/// Lowercase exactly the first character of `s`
pub fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Resolve with the default resolver, surfacing the error
pub fn try_field_name<F>(function: &F) -> ResolveResult<FieldName>
where
    F: FieldFunction + ?Sized,
{
    FieldNameResolver::new().try_resolve(function)
}

/// Resolve with the default resolver; failures are logged and yield `None`
pub fn field_name<F>(function: &F) -> Option<FieldName>
where
    F: FieldFunction + ?Sized,
{
    FieldNameResolver::new().resolve(function)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::method::MethodRef;
    use tracing_test::traced_test;

    #[test]
    fn test_get_prefix() {
        assert_eq!(property_name("getFoo").unwrap(), "foo");
        assert_eq!(property_name("getUserName").unwrap(), "userName");
    }

    #[test]
    fn test_is_prefix() {
        assert_eq!(property_name("isActive").unwrap(), "active");
    }

    #[test]
    fn test_only_first_character_is_lowercased() {
        assert_eq!(property_name("getURL").unwrap(), "uRL");
        assert_eq!(property_name("getX").unwrap(), "x");
        assert_eq!(property_name("getfoo").unwrap(), "foo");
    }

    #[test]
    fn test_prefix_match_is_lexical() {
        assert_eq!(property_name("getter").unwrap(), "ter");
        assert_eq!(property_name("isolate").unwrap(), "olate");
        assert_eq!(property_name("getIsActive").unwrap(), "isActive");
    }

    #[test]
    fn test_missing_prefix() {
        let err = property_name("fetchValue").unwrap_err();
        assert_eq!(err, ResolveError::naming_convention("fetchValue"));

        assert!(property_name("Get").unwrap_err().is_naming_convention_violation());
        assert!(property_name("").unwrap_err().is_naming_convention_violation());
    }

    #[test]
    fn test_empty_remainder() {
        assert_eq!(property_name("get").unwrap_err(), ResolveError::empty_property("get"));
        assert!(property_name("is").unwrap_err().is_empty_property_name());
        assert!(property_name("get \t").unwrap_err().is_empty_property_name());
    }

    #[test]
    fn test_decapitalize() {
        assert_eq!(decapitalize("Foo"), "foo");
        assert_eq!(decapitalize("FOO"), "fOO");
        assert_eq!(decapitalize("Ärger"), "ärger");
        assert_eq!(decapitalize(""), "");
    }

    #[test]
    fn test_try_resolve_surfaces_error_kind() {
        let resolver = FieldNameResolver::new();

        assert!(resolver
            .try_resolve(&MethodMeta::new("Order", "fetchTotal"))
            .unwrap_err()
            .is_naming_convention_violation());
        assert!(resolver
            .try_resolve(&MethodMeta::new("Order", "get"))
            .unwrap_err()
            .is_empty_property_name());
        assert!(resolver
            .try_resolve(&MethodMeta::new("Order", "get total"))
            .unwrap_err()
            .is_introspection_failure());
    }

    #[test]
    #[traced_test]
    fn test_resolve_logs_and_suppresses_failure() {
        let resolved = field_name(&MethodMeta::new("Order", "fetchTotal"));

        assert!(resolved.is_none());
        assert!(logs_contain("Failed to resolve field name"));
        assert!(logs_contain("method=\"fetchTotal\""));
        assert!(logs_contain("declaring_type=\"Order\""));
        assert!(logs_contain("missing a get|is prefix"));
    }

    #[test]
    #[traced_test]
    fn test_resolve_logs_introspection_failure_without_metadata() {
        let resolved = field_name(&MethodRef::<str>::new("Order", "get total"));

        assert!(resolved.is_none());
        assert!(logs_contain("Introspection failed"));
        assert!(!logs_contain("declaring_type"));
    }

    #[test]
    #[traced_test]
    fn test_resolve_success_does_not_log_errors() {
        let resolved = field_name(&MethodMeta::new("Order", "getTotal"));

        assert_eq!(resolved.unwrap(), "total");
        assert!(!logs_contain("Failed to resolve field name"));
    }
}

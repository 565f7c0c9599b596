use crate::field::FieldName;
use crate::method::MethodMeta;
use crate::resolver::FieldNameResolver;

/// Types exposing bean accessors, usually via `#[derive(Getters)]`
pub trait Getters {
    /// Every accessor declared on the type, in field order
    const ACCESSORS: &'static [MethodMeta];

    /// Property names of all accessors that resolve
    fn property_names() -> Vec<FieldName> {
        let resolver = FieldNameResolver::new();
        Self::ACCESSORS
            .iter()
            .filter_map(|accessor| resolver.resolve(accessor))
            .collect()
    }

    /// Find the accessor exposing `property`
    fn accessor(property: &str) -> Option<MethodMeta> {
        let resolver = FieldNameResolver::new();
        Self::ACCESSORS.iter().copied().find(|accessor| {
            resolver.try_resolve(accessor).is_ok_and(|name| name == property)
        })
    }
}

//! # propref
//!
//! Resolve bean property names from getter method references.
//!
//! Query and filter builders name their columns through accessors instead of
//! string literals:
//!
//! - [`method_ref!`]: build a compile-time checked reference to an accessor
//! - [`FieldNameResolver`]: turn `getFoo`/`isFoo` into `foo`
//! - `#[derive(Getters)]`: generate bean accessors and their metadata

pub mod error;
pub mod field;
pub mod getters;
pub mod method;
pub mod resolver;

pub use error::{ResolveError, ResolveResult};
pub use field::FieldName;
pub use getters::Getters;
pub use method::{FieldFunction, MethodMeta, MethodRef};
pub use resolver::{decapitalize, field_name, property_name, try_field_name, FieldNameResolver};

#[cfg(feature = "derive")]
pub use propref_derive::Getters;

pub mod prelude {
    pub use crate::method_ref;
    pub use crate::{field_name, try_field_name, FieldFunction, FieldName, FieldNameResolver, Getters, MethodRef};
}

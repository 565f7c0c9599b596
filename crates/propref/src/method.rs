//! Method references and their introspectable metadata.
//!
//! Rust has no runtime reflection over closures, so the metadata a resolver
//! needs is captured when the reference is built, either by [`method_ref!`]
//! or by `#[derive(Getters)]`.

use crate::error::{ResolveError, ResolveResult};
use std::fmt;
use std::marker::PhantomData;

/// Metadata for a single accessor method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MethodMeta {
    declaring_type: &'static str,
    impl_method_name: &'static str,
}

impl MethodMeta {
    pub const fn new(declaring_type: &'static str, impl_method_name: &'static str) -> Self {
        Self {
            declaring_type,
            impl_method_name,
        }
    }

    /// Name of the type the accessor is declared on
    pub fn declaring_type(&self) -> &'static str {
        self.declaring_type
    }

    /// Name of the method implementing the accessor
    pub fn impl_method_name(&self) -> &'static str {
        self.impl_method_name
    }
}

impl fmt::Display for MethodMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.declaring_type, self.impl_method_name)
    }
}

/// Anything a resolver can introspect for accessor metadata
pub trait FieldFunction {
    fn introspect(&self) -> ResolveResult<MethodMeta>;
}

impl FieldFunction for MethodMeta {
    fn introspect(&self) -> ResolveResult<MethodMeta> {
        if is_identifier(self.impl_method_name) {
            Ok(*self)
        } else {
            Err(ResolveError::introspection(format!(
                "'{}' on {} is not a method name",
                self.impl_method_name, self.declaring_type
            )))
        }
    }
}

impl<F: FieldFunction + ?Sized> FieldFunction for &F {
    fn introspect(&self) -> ResolveResult<MethodMeta> {
        (**self).introspect()
    }
}

/// Bare function pointers carry no method metadata and never introspect.
///
/// Only pointers whose return type does not borrow from the argument are
/// covered. `fn(&T) -> &U` (such as a derived `getX`) does not implement
/// `FieldFunction`, so passing one is a compile error rather than an
/// introspection failure.
impl<T: ?Sized, R> FieldFunction for fn(&T) -> R {
    fn introspect(&self) -> ResolveResult<MethodMeta> {
        Err(ResolveError::introspection(format!(
            "function pointer over {} carries no method metadata; use method_ref!",
            std::any::type_name::<T>()
        )))
    }
}

/// Typed reference to an accessor declared on `T`
pub struct MethodRef<T: ?Sized> {
    meta: MethodMeta,
    _owner: PhantomData<fn(&T)>,
}

impl<T: ?Sized> MethodRef<T> {
    /// Build a reference from explicit names.
    ///
    /// Prefer [`method_ref!`], which also checks that the method exists.
    pub const fn new(declaring_type: &'static str, impl_method_name: &'static str) -> Self {
        Self {
            meta: MethodMeta::new(declaring_type, impl_method_name),
            _owner: PhantomData,
        }
    }

    pub const fn from_meta(meta: MethodMeta) -> Self {
        Self {
            meta,
            _owner: PhantomData,
        }
    }

    pub fn meta(&self) -> MethodMeta {
        self.meta
    }
}

impl<T: ?Sized> Clone for MethodRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for MethodRef<T> {}

impl<T: ?Sized> PartialEq for MethodRef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.meta == other.meta
    }
}

impl<T: ?Sized> Eq for MethodRef<T> {}

impl<T: ?Sized> fmt::Debug for MethodRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MethodRef").field(&self.meta).finish()
    }
}

impl<T: ?Sized> fmt::Display for MethodRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.meta.fmt(f)
    }
}

impl<T: ?Sized> FieldFunction for MethodRef<T> {
    fn introspect(&self) -> ResolveResult<MethodMeta> {
        self.meta.introspect()
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_alphabetic() => {
            chars.all(|c| c == '_' || c.is_alphanumeric())
        }
        _ => false,
    }
}

/// Build a [`MethodRef`] to an accessor, checked at compile time.
///
/// ```
/// use propref::{method_ref, field_name};
///
/// struct Account { active: bool }
///
/// #[allow(non_snake_case)]
/// impl Account {
///     fn isActive(&self) -> bool { self.active }
/// }
///
/// let active = method_ref!(Account::isActive);
/// assert_eq!(field_name(&active).unwrap(), "active");
/// ```
///
/// Referencing a method that does not exist is rejected at compile time:
///
/// ```compile_fail
/// use propref::method_ref;
///
/// struct Account { active: bool }
///
/// #[allow(non_snake_case)]
/// impl Account {
///     fn isActive(&self) -> bool { self.active }
/// }
///
/// let active = method_ref!(Account::isActiv);
/// ```
#[macro_export]
macro_rules! method_ref {
    (<$ty:ty>::$method:ident) => {{
        let _ = <$ty>::$method;
        $crate::MethodRef::<$ty>::new(stringify!($ty), stringify!($method))
    }};
    ($ty:ident :: $method:ident) => {
        $crate::method_ref!(<$ty>::$method)
    };
}

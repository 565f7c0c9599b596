//! # propref-derive
//!
//! Derive macros for propref.
//!
//! - `#[derive(Getters)]`: generate `getX`/`isX` bean accessors and implement
//!   the `Getters` trait with their metadata

use proc_macro::TokenStream;

mod getters;

/// Generate bean accessors for every named field
#[proc_macro_derive(Getters, attributes(getter))]
pub fn derive_getters(input: TokenStream) -> TokenStream {
    getters::getters_impl(input)
}

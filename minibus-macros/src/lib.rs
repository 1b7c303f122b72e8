//! Procedural macros for the minibus event bus.
//!
//! - `#[derive(Event)]`: Implements `minibus::Event` for your type, preserving
//!   generics and bounds. `event_name()` returns the type's identifier, so the
//!   registered event name matches the struct or enum name exactly.
//!
//! Usage:
//! ```rust,ignore
//! use minibus::Event;
//! use serde::Serialize;
//!
//! #[derive(Serialize, Event)]
//! struct PaidContentPurchased {
//!     user_id: u64,
//!     content_id: u64,
//!     content_type: String,
//! }
//!
//! assert_eq!(PaidContentPurchased::event_name(), "PaidContentPurchased");
//! ```
use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

#[proc_macro_derive(Event)]
pub fn derive_event(input: TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let ident = input.ident.clone();
    let name = ident.to_string();
    let generics = input.generics.clone();

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics minibus::Event for #ident #ty_generics #where_clause {
            fn event_name() -> ::std::borrow::Cow<'static, str> {
                ::std::borrow::Cow::Borrowed(#name)
            }
        }
    };
    TokenStream::from(expanded)
}

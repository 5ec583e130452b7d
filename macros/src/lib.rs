//! Derive macros for the TodoMVC reducer architecture
//!
//! # Available Macros
//!
//! - `#[derive(Action)]` - Implements `todomvc_core::action::Action` for an action enum
//!
//! # Example
//!
//! ```ignore
//! use todomvc_core::action::Action as _;
//! use todomvc_macros::Action;
//!
//! #[derive(Action, Clone, Debug)]
//! enum TodoAction {
//!     #[command]
//!     AddTodo { label: String },
//!
//!     #[event]
//!     RouteChanged { fragment: String },
//! }
//!
//! assert!(TodoAction::AddTodo { label: "milk".into() }.is_command());
//! assert_eq!(TodoAction::RouteChanged { fragment: "#/".into() }.name(), "RouteChanged");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use proc_macro::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Fields, Ident, parse_macro_input};

/// Derive macro for Action enums
///
/// Implements `todomvc_core::action::Action`:
/// - `name()` - The variant name, for every variant
/// - `is_command()` - True for variants marked `#[command]`
/// - `is_event()` - True for variants marked `#[event]`
///
/// # Attributes
///
/// - `#[command]` - A user intent (form submit, click)
/// - `#[event]` - A notification from outside the store (route watcher)
///
/// # Panics
///
/// This macro will produce a compile error (not a runtime panic) if:
/// - Applied to a non-enum type
/// - A variant has both `#[command]` and `#[event]` attributes
#[proc_macro_derive(Action, attributes(command, event))]
pub fn derive_action(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let Data::Enum(data_enum) = &input.data else {
        return syn::Error::new_spanned(&input, "#[derive(Action)] can only be used on enums")
            .to_compile_error()
            .into();
    };

    let mut name_arms = Vec::new();
    let mut command_arms = Vec::new();
    let mut event_arms = Vec::new();

    for variant in &data_enum.variants {
        let is_command = has_attribute(&variant.attrs, "command");
        let is_event = has_attribute(&variant.attrs, "event");

        if is_command && is_event {
            return syn::Error::new_spanned(variant, "Variant cannot be both #[command] and #[event]")
                .to_compile_error()
                .into();
        }

        let pattern = variant_pattern(&variant.ident, &variant.fields);
        let variant_name = variant.ident.to_string();
        name_arms.push(quote! { #pattern => #variant_name, });

        if is_command {
            command_arms.push(quote! { #pattern => true, });
        }
        if is_event {
            event_arms.push(quote! { #pattern => true, });
        }
    }

    // An enum with no variants has no values; `match *self {}` is exhaustive.
    let name_body = if name_arms.is_empty() {
        quote! { match *self {} }
    } else {
        quote! { match self { #(#name_arms)* } }
    };

    let expanded = quote! {
        impl #impl_generics ::todomvc_core::action::Action for #name #ty_generics #where_clause {
            fn name(&self) -> &'static str {
                #name_body
            }

            #[allow(unreachable_patterns)]
            fn is_command(&self) -> bool {
                match self {
                    #(#command_arms)*
                    _ => false,
                }
            }

            #[allow(unreachable_patterns)]
            fn is_event(&self) -> bool {
                match self {
                    #(#event_arms)*
                    _ => false,
                }
            }
        }
    };

    TokenStream::from(expanded)
}

fn variant_pattern(variant: &Ident, fields: &Fields) -> proc_macro2::TokenStream {
    match fields {
        Fields::Named(_) => quote! { Self::#variant { .. } },
        Fields::Unnamed(_) => quote! { Self::#variant(..) },
        Fields::Unit => quote! { Self::#variant },
    }
}

/// Helper function to check if an attribute list contains a specific attribute
fn has_attribute(attrs: &[Attribute], name: &str) -> bool {
    attrs.iter().any(|attr| attr.path().is_ident(name))
}

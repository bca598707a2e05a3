//! A crate for schemagen's derive macros.
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![recursion_limit = "1024"]
extern crate proc_macro;
#[macro_use] extern crate quote;

mod reflect;

/// A custom derive describing a type to the schema generator.
///
/// This implements `schemagen::Reflect` for named structs and fieldless enums, listing the
/// serialized fields (or values) in declaration order. The serialized shape is read from the
/// `serde` attributes on the type, so the schema follows what `serde_json` would produce.
///
/// # Example
///
/// ```rust
/// use schemagen::{Reflect, Kind};
/// use serde::Serialize;
///
/// /// A link to an external resource
/// #[derive(Reflect, Serialize)]
/// #[reflect(package = "github.com/openshift/api/console/v1")]
/// #[serde(rename_all = "camelCase")]
/// struct Link {
///     text: String,
///     href: String,
///     #[serde(skip_serializing_if = "Vec::is_empty")]
///     mirrors: Vec<String>,
/// }
///
/// let info = Link::type_info();
/// assert_eq!(info.name(), "Link");
/// assert_eq!(info.description(), Some("A link to an external resource"));
/// let Kind::Struct(fields) = info.kind() else { unreachable!() };
/// assert_eq!(fields.len(), 3);
/// ```
///
/// ## Container attributes
///
/// ### `#[reflect(package = "example.com/pkg/v1")]`
/// The package path the type belongs to, either a string literal or a `&'static str`
/// constant in scope (`#[reflect(package = PACKAGE)]`). Package paths are matched against the
/// package descriptors of the generator to pick definition names and Java packages.
/// Defaults to the `module_path!()` of the deriving module.
///
/// ### `#[reflect(crates(schemagen_core = "::schemagen::core"))]`
/// Path to the core crate, for crates that depend on `schemagen-core` directly.
///
/// ## Field attributes
///
/// ### `#[reflect(required)]`
/// Force the field into the `required` list of its definition. Without it, a field is
/// required unless it is flattened, has a `skip_serializing_if`, or has a serde `default`.
/// `Option` fields are never required.
///
/// ## Honoured serde attributes
///
/// - container: `rename_all` (with serde's case rules, so `TCP` becomes `tCP` in camelCase), `default`
/// - field: `rename`, `skip`, `skip_serializing`, `flatten`, `skip_serializing_if`, `default`
/// - variant: `rename`, `skip`
///
/// Doc comments on the type and its fields become descriptions in the schema.
///
/// Generic types, tuple structs, unions and enums with data are rejected.
#[proc_macro_derive(Reflect, attributes(reflect, serde))]
pub fn derive_reflect(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    reflect::derive(proc_macro2::TokenStream::from(input)).into()
}

//! Metadata structs that `k8s-openapi` does not carry.
pub use k8s_openapi::apimachinery::pkg::apis::meta::v1::{ListMeta, ObjectMeta};
use k8s_openapi::apimachinery::pkg::runtime::RawExtension;
use serde::{Deserialize, Serialize};

use crate::{k8s::META_V1, reflect::reflect_struct};

/// Type information that is flattened into every kubernetes object
#[derive(Deserialize, Serialize, Clone, Default, Debug, Eq, PartialEq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct TypeMeta {
    /// The version of the API
    pub api_version: String,

    /// The name of the API
    pub kind: String,
}

/// A list of arbitrary objects, the base of every typed list
#[derive(Deserialize, Serialize, Clone, Default, Debug, PartialEq)]
pub struct List {
    /// The type fields
    #[serde(flatten)]
    pub types: TypeMeta,
    /// Standard list metadata
    #[serde(default)]
    pub metadata: ListMeta,
    /// The listed objects
    pub items: Vec<RawExtension>,
}

/// The body of a PATCH request; its shape depends on the patch type
#[derive(Deserialize, Serialize, Clone, Copy, Default, Debug, Eq, PartialEq, Hash)]
pub struct Patch {}

reflect_struct!(TypeMeta => "TypeMeta" in META_V1, {
    "apiVersion": String [omit_empty],
    "kind": String [omit_empty],
});

reflect_struct!(List => "List" in META_V1, {
    "": TypeMeta [inline],
    "metadata": ListMeta [omit_empty],
    "items": Vec<RawExtension> [required],
});

reflect_struct!(Patch => "Patch" in META_V1, {});

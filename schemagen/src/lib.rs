//! Schemagen is an umbrella-crate for generating fabric8 flavoured JSON schemas from Rust types.
//!
//! # Overview
//!
//! The generated schema is the input of the fabric8 Java model generator: every type reachable
//! from a root aggregate becomes a definition with Java type hints, and every resource kind is
//! pinned to its `apiVersion` and `kind`.
//!
//! The main pieces are:
//!
//! - [`Reflect`](crate::Reflect) describing the serialized shape of a type, usually derived
//! - [`SchemaGenerator`](crate::SchemaGenerator) walking the types reachable from a root
//! - [`JsonSchema`](crate::JsonSchema) and [`render`](crate::schema::render) for the output document
//! - [`core`](crate::core) with the reflection tables for `apimachinery` types
//!
//! # Generating a schema
//!
//! ```
//! use schemagen::{PackageDescriptor, Reflect, SchemaGenerator};
//! use schemagen::core::TypeMeta;
//! use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Reflect, Serialize, Deserialize)]
//! #[reflect(package = "example.com/apis/shop/v1")]
//! pub struct Order {
//!     #[serde(flatten)]
//!     types: TypeMeta,
//!     #[serde(default)]
//!     metadata: ObjectMeta,
//!     items: Vec<String>,
//! }
//!
//! #[derive(Reflect)]
//! #[serde(rename_all = "PascalCase")]
//! struct Schema {
//!     order: Order,
//! }
//!
//! let schema = SchemaGenerator::new([
//!     PackageDescriptor::new("k8s.io/apimachinery/pkg/apis/meta/v1", "", "io.fabric8.kubernetes.api.model", "kubernetes_apimachinery_"),
//!     PackageDescriptor::new("example.com/apis/shop/v1", "shop.example.com", "com.example.shop.v1", "shop_v1_"),
//! ])
//! .substitute::<chrono::DateTime<chrono::Utc>, String>()
//! .module("shop")
//! .generate::<Schema>()?;
//!
//! println!("{}", schemagen::schema::render(&schema)?);
//! # Ok::<(), schemagen::Error>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![forbid(unsafe_code)]

/// Re-exports from [`schemagen-derive`](schemagen_derive)
#[cfg(feature = "derive")]
#[cfg_attr(docsrs, doc(cfg(feature = "derive")))]
pub use schemagen_derive::Reflect;

pub use crate::core::{
    schema, Error, Field, JsonSchema, Kind, PackageDescriptor, Reflect, Result, SchemaGenerator, TypeInfo,
};
/// Re-exports from [`schemagen_core`](schemagen_core)
#[doc(inline)]
pub use schemagen_core as core;

//! Types and traits for generating fabric8 flavoured JSON schemas from Rust types
//!
//! This crate carries the reflection model, the schema document and the generation walk.
//! The same information here is always re-exported from `schemagen` under `schemagen::core`.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod reflect;
pub use reflect::{Field, Kind, Reflect, TypeFn, TypeInfo};

pub mod k8s;

pub mod metadata;
pub use metadata::{List, Patch, TypeMeta};

pub mod package;
pub use package::PackageDescriptor;

pub mod schema;
pub use schema::JsonSchema;

mod generate;
pub use generate::SchemaGenerator;

mod error;
pub use error::Error;

/// Convient alias for `Result<T, Error>`
pub type Result<T, E = Error> = std::result::Result<T, E>;

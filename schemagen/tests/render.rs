#![allow(missing_docs)]
use assert_json_diff::assert_json_eq;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{ListMeta, ObjectMeta};
use schemagen::{
    core::TypeMeta,
    schema::{fix_additional_properties, render},
    PackageDescriptor, Reflect, SchemaGenerator,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

const PACKAGE: &str = "example.com/apis/library/v1";

#[derive(Reflect, Serialize, Deserialize, Default)]
#[reflect(package = "example.com/apis/library/v1")]
#[serde(rename_all = "camelCase")]
pub struct Book {
    #[serde(flatten)]
    pub types: TypeMeta,
    #[serde(default)]
    pub metadata: ObjectMeta,
    pub spec: BookSpec,
}

#[derive(Reflect, Serialize, Deserialize, Default)]
#[reflect(package = "example.com/apis/library/v1")]
#[serde(rename_all = "camelCase")]
pub struct BookList {
    #[serde(flatten)]
    pub types: TypeMeta,
    #[serde(default)]
    pub metadata: ListMeta,
    pub items: Vec<Book>,
}

#[derive(Reflect, Serialize, Deserialize, Default)]
#[reflect(package = "example.com/apis/library/v1")]
#[serde(rename_all = "camelCase")]
pub struct BookSpec {
    pub title: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub translations: BTreeMap<String, BookSpec>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cover: Vec<u8>,
}

#[derive(Reflect)]
#[serde(rename_all = "PascalCase")]
#[allow(dead_code)]
struct Library {
    book: Book,
    book_list: BookList,
    object_meta: ObjectMeta,
}

#[derive(Reflect)]
#[serde(rename_all = "PascalCase")]
#[allow(dead_code)]
struct Shelf {
    object_meta: ObjectMeta,
    book_spec: BookSpec,
    book_list: BookList,
    book: Book,
}

fn generator() -> SchemaGenerator {
    SchemaGenerator::new([
        PackageDescriptor::new(
            "k8s.io/apimachinery/pkg/apis/meta/v1",
            "",
            "io.fabric8.kubernetes.api.model",
            "kubernetes_apimachinery_",
        ),
        PackageDescriptor::new(PACKAGE, "library.example.com", "com.example.library.v1", "library_v1_"),
    ])
    .substitute::<chrono::DateTime<chrono::Utc>, String>()
    .module("library")
}

fn rendered(validation: bool) -> String {
    let mut schema = generator().generate::<Library>().unwrap();
    if !validation {
        schema.clear_resources();
    }
    render(&schema).unwrap()
}

#[test]
fn rendered_schema_is_valid_json() {
    let output = rendered(false);
    let value: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["id"], "http://fabric8.io/fabric8/v2/library/Library#");
    assert_eq!(value["$schema"], "http://json-schema.org/schema#");
    assert_eq!(value["type"], "object");
    assert_eq!(value["additionalProperties"], true);
    assert!(value.get("resources").is_none());
    assert!(output.starts_with("{\n  \"id\": "));
}

#[test]
fn map_values_use_additional_properties() {
    let output = rendered(false);
    assert!(!output.contains("\"additionalProperty\":"));
    assert_eq!(fix_additional_properties(&output), output);

    let value: Value = serde_json::from_str(&output).unwrap();
    let translations = &value["definitions"]["library_v1_BookSpec"]["properties"]["translations"];
    assert_eq!(
        translations["additionalProperties"]["$ref"],
        "#/definitions/library_v1_BookSpec"
    );
    assert_eq!(
        translations["javaType"],
        "java.util.Map<String,com.example.library.v1.BookSpec>"
    );
    assert_eq!(
        value["definitions"]["library_v1_BookSpec"]["properties"]["cover"],
        serde_json::json!({ "type": "string" })
    );
}

#[test]
fn definitions_are_sorted_and_unique() {
    let value: Value = serde_json::from_str(&rendered(false)).unwrap();
    let names = value["definitions"]
        .as_object()
        .unwrap()
        .keys()
        .cloned()
        .collect::<Vec<_>>();
    let mut sorted = names.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(names, sorted);
    assert!(names.contains(&"library_v1_Book".to_string()));
    assert!(names.contains(&"kubernetes_apimachinery_ObjectMeta".to_string()));
}

#[test]
fn properties_keep_declaration_order() {
    let value: Value = serde_json::from_str(&rendered(false)).unwrap();
    let keys = value["properties"].as_object().unwrap().keys().collect::<Vec<_>>();
    assert_eq!(keys, ["Book", "BookList", "ObjectMeta"]);
}

#[test]
fn validation_keeps_resources() {
    let value: Value = serde_json::from_str(&rendered(true)).unwrap();
    let resources = value["resources"].as_object().unwrap();
    assert_eq!(resources.len(), value["definitions"].as_object().unwrap().len());
    assert_json_eq!(resources["book"], value["definitions"]["library_v1_Book"]);
}

#[test]
fn definitions_do_not_depend_on_field_order() {
    let library = generator().generate::<Library>().unwrap();
    let shelf = generator().generate::<Shelf>().unwrap();
    assert_eq!(
        library.definitions.keys().collect::<Vec<_>>(),
        shelf.definitions.keys().collect::<Vec<_>>()
    );
    assert_json_eq!(
        serde_json::to_value(&library.definitions).unwrap(),
        serde_json::to_value(&shelf.definitions).unwrap()
    );
}

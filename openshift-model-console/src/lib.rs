//! Schema generation for the OpenShift console API group.
//!
//! [`Schema`] aggregates every console kind together with the apimachinery types the model
//! shares with other groups. [`generate`] walks it and renders the schema consumed by the
//! fabric8 Java model generator.
#![deny(unsafe_code)]

pub mod v1;

use k8s_openapi::apimachinery::pkg::{
    apis::meta::v1::{APIGroup, APIGroupList, ObjectMeta, Status, Time},
    version::Info,
};
use schemagen::{
    core::{List, Patch, TypeMeta},
    schema, PackageDescriptor, Reflect, SchemaGenerator,
};

/// Name of the generated model module
pub const MODULE: &str = "console";

/// Root aggregate: every type reachable from here ends up in the schema
#[derive(Reflect)]
#[allow(dead_code)]
pub struct Schema {
    #[serde(rename = "Info")]
    info: Info,
    #[serde(rename = "APIGroup")]
    api_group: APIGroup,
    #[serde(rename = "APIGroupList")]
    api_group_list: APIGroupList,
    #[serde(rename = "BaseKubernetesList")]
    base_kubernetes_list: List,
    #[serde(rename = "ObjectMeta")]
    object_meta: ObjectMeta,
    #[serde(rename = "TypeMeta")]
    type_meta: TypeMeta,
    #[serde(rename = "Status")]
    status: Status,
    #[serde(rename = "Patch")]
    patch: Patch,
    #[serde(rename = "Time")]
    time: Time,
    #[serde(rename = "ConsoleCLIDownload")]
    console_cli_download: v1::ConsoleCLIDownload,
    #[serde(rename = "ConsoleCLIDownloadList")]
    console_cli_download_list: v1::ConsoleCLIDownloadList,
    #[serde(rename = "ConsoleExternalLogLink")]
    console_external_log_link: v1::ConsoleExternalLogLink,
    #[serde(rename = "ConsoleExternalLogLinkList")]
    console_external_log_link_list: v1::ConsoleExternalLogLinkList,
    #[serde(rename = "ConsoleLink")]
    console_link: v1::ConsoleLink,
    #[serde(rename = "ConsoleLinkList")]
    console_link_list: v1::ConsoleLinkList,
    #[serde(rename = "ConsoleNotification")]
    console_notification: v1::ConsoleNotification,
    #[serde(rename = "ConsoleNotificationList")]
    console_notification_list: v1::ConsoleNotificationList,
    #[serde(rename = "ConsoleYAMLSample")]
    console_yaml_sample: v1::ConsoleYAMLSample,
    #[serde(rename = "ConsoleYAMLSampleList")]
    console_yaml_sample_list: v1::ConsoleYAMLSampleList,
}

/// Source packages and where their types land in the Java model
pub fn packages() -> Vec<PackageDescriptor> {
    vec![
        PackageDescriptor::new("k8s.io/api/core/v1", "", "io.fabric8.kubernetes.api.model", "kubernetes_core_"),
        PackageDescriptor::new(
            "k8s.io/apimachinery/pkg/api/resource",
            "",
            "io.fabric8.kubernetes.api.model",
            "kubernetes_resource_",
        ),
        PackageDescriptor::new(
            "k8s.io/apimachinery/pkg/util/intstr",
            "",
            "io.fabric8.kubernetes.api.model",
            "kubernetes_apimachinery_pkg_util_intstr_",
        ),
        PackageDescriptor::new(
            schemagen::core::k8s::RUNTIME,
            "",
            "io.fabric8.openshift.api.model.runtime",
            "kubernetes_apimachinery_pkg_runtime_",
        ),
        PackageDescriptor::new(
            schemagen::core::k8s::VERSION,
            "",
            "io.fabric8.kubernetes.api.model.version",
            "kubernetes_apimachinery_pkg_version_",
        ),
        PackageDescriptor::new("k8s.io/kubernetes/pkg/util", "", "io.fabric8.kubernetes.api.model", "kubernetes_util_"),
        PackageDescriptor::new(
            "k8s.io/kubernetes/pkg/api/errors",
            "",
            "io.fabric8.kubernetes.api.model",
            "kubernetes_errors_",
        ),
        PackageDescriptor::new(
            "k8s.io/kubernetes/pkg/api/unversioned",
            "",
            "io.fabric8.kubernetes.api.model",
            "api_",
        ),
        PackageDescriptor::new(
            schemagen::core::k8s::META_V1,
            "",
            "io.fabric8.kubernetes.api.model",
            "kubernetes_apimachinery_",
        ),
        PackageDescriptor::new(
            v1::PACKAGE,
            "",
            "io.fabric8.openshift.api.model.console.v1",
            "os_console_v1_",
        ),
    ]
}

/// A generator configured for the console model
///
/// Timestamps and the anonymous empty struct are rendered as strings.
pub fn generator() -> SchemaGenerator {
    SchemaGenerator::new(packages())
        .substitute::<chrono::DateTime<chrono::Utc>, String>()
        .substitute::<(), String>()
        .module(MODULE)
}

/// Generate and render the console schema
///
/// The `resources` list is only kept when `validation` is set.
pub fn generate(validation: bool) -> schemagen::Result<String> {
    let mut schema = generator().generate::<Schema>()?;
    if !validation {
        schema.clear_resources();
    }
    schema::render(&schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_json_diff::assert_json_include;
    use serde_json::{json, Value};

    fn schema(validation: bool) -> Value {
        serde_json::from_str(&generate(validation).unwrap()).unwrap()
    }

    #[test]
    fn root_properties_follow_declaration_order() {
        let schema = schema(false);
        let names = schema["properties"].as_object().unwrap().keys().cloned().collect::<Vec<_>>();
        assert_eq!(names.first().map(String::as_str), Some("Info"));
        assert_eq!(names.last().map(String::as_str), Some("ConsoleYAMLSampleList"));
        assert_eq!(names.len(), 19);
        assert_eq!(schema["id"], "http://fabric8.io/fabric8/v2/console/Schema#");
    }

    #[test]
    fn console_link_is_a_resource() {
        let schema = schema(false);
        assert_json_include!(
            actual: &schema["definitions"]["os_console_v1_ConsoleLink"],
            expected: json!({
                "type": "object",
                "properties": {
                    "apiVersion": {
                        "type": "string",
                        "default": "v1",
                        "enum": ["v1"]
                    },
                    "kind": {
                        "type": "string",
                        "default": "ConsoleLink",
                        "enum": ["ConsoleLink"]
                    },
                    "metadata": {
                        "$ref": "#/definitions/kubernetes_apimachinery_ObjectMeta",
                        "javaType": "io.fabric8.kubernetes.api.model.ObjectMeta"
                    },
                    "spec": {
                        "$ref": "#/definitions/os_console_v1_ConsoleLinkSpec",
                        "javaType": "io.fabric8.openshift.api.model.console.v1.ConsoleLinkSpec"
                    }
                },
                "javaType": "io.fabric8.openshift.api.model.console.v1.ConsoleLink",
                "javaInterfaces": ["io.fabric8.kubernetes.api.model.HasMetadata"]
            })
        );
    }

    #[test]
    fn console_link_list_is_a_resource_list() {
        let schema = schema(false);
        assert_eq!(
            schema["definitions"]["os_console_v1_ConsoleLinkList"]["javaInterfaces"],
            json!([
                "io.fabric8.kubernetes.api.model.KubernetesResource",
                "io.fabric8.kubernetes.api.model.KubernetesResourceList<io.fabric8.openshift.api.model.console.v1.ConsoleLink>"
            ])
        );
    }

    #[test]
    fn shared_types_map_onto_fabric8_model() {
        let schema = schema(false);
        let definitions = &schema["definitions"];
        assert_eq!(
            definitions["kubernetes_apimachinery_List"]["javaType"],
            "io.fabric8.kubernetes.api.model.BaseKubernetesList"
        );
        assert_eq!(
            definitions["kubernetes_apimachinery_List"]["properties"]["items"]["items"]["javaType"],
            "io.fabric8.kubernetes.api.model.HasMetadata"
        );
        assert_eq!(
            definitions["kubernetes_apimachinery_pkg_version_Info"]["javaType"],
            "io.fabric8.kubernetes.api.model.version.Info"
        );
        assert_eq!(
            definitions["kubernetes_apimachinery_Time"]["properties"]["Time"],
            json!({ "type": "string" })
        );
        assert_eq!(
            definitions["kubernetes_apimachinery_ObjectMeta"]["properties"]["labels"]["additionalProperties"],
            json!({ "type": "string" })
        );
    }

    #[test]
    fn resources_only_with_validation() {
        assert!(schema(false).get("resources").is_none());
        let schema = schema(true);
        let resources = schema["resources"].as_object().unwrap();
        assert!(resources.contains_key("consolelink"));
        assert!(resources.contains_key("objectmeta"));
    }
}

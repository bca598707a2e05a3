//! Reflection tables for the apimachinery types generated by `k8s-openapi`
//!
//! The tables list the serialized fields of each type in the declaration order of the
//! upstream Go packages, under those packages' import paths.
use crate::reflect::reflect_struct;
use chrono::{DateTime, Utc};
use k8s_openapi::apimachinery::pkg::{
    apis::meta::v1 as metav1, runtime::RawExtension, version::Info,
};
use std::collections::BTreeMap;

/// Package path of `meta/v1`
pub const META_V1: &str = "k8s.io/apimachinery/pkg/apis/meta/v1";
/// Package path of the apimachinery runtime types
pub const RUNTIME: &str = "k8s.io/apimachinery/pkg/runtime";
/// Package path of the server version info
pub const VERSION: &str = "k8s.io/apimachinery/pkg/version";

type Labels = BTreeMap<String, String>;

reflect_struct!(metav1::ObjectMeta => "ObjectMeta" in META_V1, {
    "name": Option<String> [omit_empty],
    "generateName": Option<String> [omit_empty],
    "namespace": Option<String> [omit_empty],
    "selfLink": Option<String> [omit_empty],
    "uid": Option<String> [omit_empty],
    "resourceVersion": Option<String> [omit_empty],
    "generation": Option<i64> [omit_empty],
    "creationTimestamp": Option<metav1::Time> [omit_empty],
    "deletionTimestamp": Option<metav1::Time> [omit_empty],
    "deletionGracePeriodSeconds": Option<i64> [omit_empty],
    "labels": Option<Labels> [omit_empty],
    "annotations": Option<Labels> [omit_empty],
    "ownerReferences": Option<Vec<metav1::OwnerReference>> [omit_empty],
    "finalizers": Option<Vec<String>> [omit_empty],
    "managedFields": Option<Vec<metav1::ManagedFieldsEntry>> [omit_empty],
});

reflect_struct!(metav1::ListMeta => "ListMeta" in META_V1, {
    "selfLink": Option<String> [omit_empty],
    "resourceVersion": Option<String> [omit_empty],
    "continue": Option<String> [omit_empty],
    "remainingItemCount": Option<i64> [omit_empty],
});

reflect_struct!(metav1::Time => "Time" in META_V1, {
    "Time": DateTime<Utc> [required],
});

reflect_struct!(metav1::OwnerReference => "OwnerReference" in META_V1, {
    "apiVersion": String [required],
    "kind": String [required],
    "name": String [required],
    "uid": String [required],
    "controller": Option<bool> [omit_empty],
    "blockOwnerDeletion": Option<bool> [omit_empty],
});

reflect_struct!(metav1::ManagedFieldsEntry => "ManagedFieldsEntry" in META_V1, {
    "manager": Option<String> [omit_empty],
    "operation": Option<String> [omit_empty],
    "apiVersion": Option<String> [omit_empty],
    "time": Option<metav1::Time> [omit_empty],
    "fieldsType": Option<String> [omit_empty],
    "fieldsV1": Option<metav1::FieldsV1> [omit_empty],
    "subresource": Option<String> [omit_empty],
});

// The raw field set is not part of the serialized shape
reflect_struct!(metav1::FieldsV1 => "FieldsV1" in META_V1, {});

reflect_struct!(metav1::LabelSelector => "LabelSelector" in META_V1, {
    "matchLabels": Option<Labels> [omit_empty],
    "matchExpressions": Option<Vec<metav1::LabelSelectorRequirement>> [omit_empty],
});

reflect_struct!(metav1::LabelSelectorRequirement => "LabelSelectorRequirement" in META_V1, {
    "key": String [required],
    "operator": String [required],
    "values": Option<Vec<String>> [omit_empty],
});

reflect_struct!(metav1::Status => "Status" in META_V1, {
    "": crate::metadata::TypeMeta [inline],
    "metadata": Option<metav1::ListMeta> [omit_empty],
    "status": Option<String> [omit_empty],
    "message": Option<String> [omit_empty],
    "reason": Option<String> [omit_empty],
    "details": Option<metav1::StatusDetails> [omit_empty],
    "code": Option<i32> [omit_empty],
});

reflect_struct!(metav1::StatusDetails => "StatusDetails" in META_V1, {
    "name": Option<String> [omit_empty],
    "group": Option<String> [omit_empty],
    "kind": Option<String> [omit_empty],
    "uid": Option<String> [omit_empty],
    "causes": Option<Vec<metav1::StatusCause>> [omit_empty],
    "retryAfterSeconds": Option<i32> [omit_empty],
});

reflect_struct!(metav1::StatusCause => "StatusCause" in META_V1, {
    "reason": Option<String> [omit_empty],
    "message": Option<String> [omit_empty],
    "field": Option<String> [omit_empty],
});

reflect_struct!(metav1::APIGroup => "APIGroup" in META_V1, {
    "": crate::metadata::TypeMeta [inline],
    "name": String [required],
    "versions": Vec<metav1::GroupVersionForDiscovery> [required],
    "preferredVersion": Option<metav1::GroupVersionForDiscovery> [omit_empty],
    "serverAddressByClientCIDRs": Option<Vec<metav1::ServerAddressByClientCIDR>> [omit_empty],
});

reflect_struct!(metav1::APIGroupList => "APIGroupList" in META_V1, {
    "": crate::metadata::TypeMeta [inline],
    "groups": Vec<metav1::APIGroup> [required],
});

reflect_struct!(metav1::GroupVersionForDiscovery => "GroupVersionForDiscovery" in META_V1, {
    "groupVersion": String [required],
    "version": String [required],
});

reflect_struct!(metav1::ServerAddressByClientCIDR => "ServerAddressByClientCIDR" in META_V1, {
    "clientCIDR": String [required],
    "serverAddress": String [required],
});

// Embedded objects are opaque; the model maps them onto `HasMetadata`
reflect_struct!(RawExtension => "RawExtension" in RUNTIME, {});

reflect_struct!(Info => "Info" in VERSION, {
    "major": String [required],
    "minor": String [required],
    "gitVersion": String [required],
    "gitCommit": String [required],
    "gitTreeState": String [required],
    "buildDate": String [required],
    "goVersion": String [required],
    "compiler": String [required],
    "platform": String [required],
});

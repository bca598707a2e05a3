//! Types of the `console.openshift.io/v1` API group.
// Doc comments become schema descriptions; type meta and metadata fields carry none
#![allow(missing_docs)]
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{LabelSelector, ListMeta, ObjectMeta};
use schemagen::{core::TypeMeta, Reflect};
use serde::{Deserialize, Serialize};

/// Package path of the console types
pub const PACKAGE: &str = "github.com/openshift/api/console/v1";

/// ConsoleLink is an extension for customizing OpenShift web console links.
#[derive(Reflect, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[reflect(package = PACKAGE)]
pub struct ConsoleLink {
    #[serde(flatten)]
    pub types: TypeMeta,
    pub metadata: ObjectMeta,
    pub spec: ConsoleLinkSpec,
}

/// ConsoleLinkSpec is the desired console link configuration.
#[derive(Reflect, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[reflect(package = PACKAGE)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleLinkSpec {
    #[serde(flatten)]
    pub link: Link,
    /// location determines which location in the console the link will be appended to.
    pub location: ConsoleLinkLocation,
    /// applicationMenu holds information about section and icon used for the link in the
    /// application menu, and it is applicable only when location is set to ApplicationMenu.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_menu: Option<ApplicationMenuSpec>,
    /// namespaceDashboard holds information about namespaces in which the dashboard link should
    /// appear, and it is applicable only when location is set to NamespaceDashboard.
    /// If not specified, the link will appear in all namespaces.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace_dashboard: Option<NamespaceDashboardSpec>,
}

/// ApplicationMenuSpec is the specification of the desired section and icon used for the link
/// in the application menu.
#[derive(Reflect, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[reflect(package = PACKAGE)]
pub struct ApplicationMenuSpec {
    /// section is the section of the application menu in which the link should appear.
    pub section: String,
    /// imageUrl is the URL for the icon used in front of the link in the application menu.
    #[serde(rename = "imageURL", default, skip_serializing_if = "String::is_empty")]
    pub image_url: String,
}

/// NamespaceDashboardSpec is a specification of namespaces in which the dashboard link should
/// appear.
#[derive(Reflect, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[reflect(package = PACKAGE)]
#[serde(rename_all = "camelCase")]
pub struct NamespaceDashboardSpec {
    /// namespaces is an array of namespace names in which the dashboard link should appear.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub namespaces: Vec<String>,
    /// namespaceSelector is used to select the Namespaces that should contain dashboard link by label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace_selector: Option<LabelSelector>,
}

/// ConsoleLinkLocation is the location of the console link.
#[derive(Reflect, Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[reflect(package = PACKAGE)]
pub enum ConsoleLinkLocation {
    #[default]
    ApplicationMenu,
    HelpMenu,
    UserMenu,
    NamespaceDashboard,
}

/// ConsoleLinkList is a list of ConsoleLink objects.
#[derive(Reflect, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[reflect(package = PACKAGE)]
pub struct ConsoleLinkList {
    #[serde(flatten)]
    pub types: TypeMeta,
    #[serde(default)]
    pub metadata: ListMeta,
    pub items: Vec<ConsoleLink>,
}

/// ConsoleCLIDownload is an extension for configuring openshift web console command line interface
/// (CLI) downloads.
#[derive(Reflect, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[reflect(package = PACKAGE)]
pub struct ConsoleCLIDownload {
    #[serde(flatten)]
    pub types: TypeMeta,
    pub metadata: ObjectMeta,
    pub spec: ConsoleCLIDownloadSpec,
}

/// ConsoleCLIDownloadSpec is the desired cli download configuration.
#[derive(Reflect, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[reflect(package = PACKAGE)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleCLIDownloadSpec {
    /// displayName is the display name of the CLI download.
    pub display_name: String,
    /// description is the description of the CLI download (can include markdown).
    pub description: String,
    /// links is a list of objects that provide CLI download link details.
    pub links: Vec<CLIDownloadLink>,
}

/// CLIDownloadLink is a link to a CLI binary.
#[derive(Reflect, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[reflect(package = PACKAGE)]
pub struct CLIDownloadLink {
    /// text is the display text for the link
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
    /// href is the absolute secure URL for the link (must use https)
    pub href: String,
}

/// ConsoleCLIDownloadList is a list of ConsoleCLIDownload objects.
#[derive(Reflect, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[reflect(package = PACKAGE)]
pub struct ConsoleCLIDownloadList {
    #[serde(flatten)]
    pub types: TypeMeta,
    #[serde(default)]
    pub metadata: ListMeta,
    pub items: Vec<ConsoleCLIDownload>,
}

/// ConsoleExternalLogLink is an extension for customizing OpenShift web console log links.
#[derive(Reflect, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[reflect(package = PACKAGE)]
pub struct ConsoleExternalLogLink {
    #[serde(flatten)]
    pub types: TypeMeta,
    pub metadata: ObjectMeta,
    pub spec: ConsoleExternalLogLinkSpec,
}

/// ConsoleExternalLogLinkSpec is the desired log link configuration.
/// The log link will appear on the logs tab of the pod details page.
#[derive(Reflect, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[reflect(package = PACKAGE)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleExternalLogLinkSpec {
    /// text is the display text for the link
    pub text: String,
    /// hrefTemplate is an absolute secure URL (must use https) for the log link including
    /// variables to be replaced.
    pub href_template: String,
    /// namespaceFilter is a regular expression used to restrict a log link to a
    /// matching set of namespaces.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub namespace_filter: String,
}

/// ConsoleExternalLogLinkList is a list of ConsoleExternalLogLink objects.
#[derive(Reflect, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[reflect(package = PACKAGE)]
pub struct ConsoleExternalLogLinkList {
    #[serde(flatten)]
    pub types: TypeMeta,
    #[serde(default)]
    pub metadata: ListMeta,
    pub items: Vec<ConsoleExternalLogLink>,
}

/// ConsoleNotification is the extension for configuring openshift web console notifications.
#[derive(Reflect, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[reflect(package = PACKAGE)]
pub struct ConsoleNotification {
    #[serde(flatten)]
    pub types: TypeMeta,
    pub metadata: ObjectMeta,
    pub spec: ConsoleNotificationSpec,
}

/// ConsoleNotificationSpec is the desired console notification configuration.
#[derive(Reflect, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[reflect(package = PACKAGE)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleNotificationSpec {
    /// text is the visible text of the notification.
    pub text: String,
    /// location is the location of the notification in the console.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<ConsoleNotificationLocationSelector>,
    /// link is an object that holds notification link details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
    /// color is the color of the text for the notification as CSS data type color.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub color: String,
    /// backgroundColor is the color of the background for the notification as CSS data type color.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub background_color: String,
}

/// ConsoleNotificationLocationSelector is a set of possible notification targets
/// to which a notification may be appended.
#[derive(Reflect, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[reflect(package = PACKAGE)]
pub enum ConsoleNotificationLocationSelector {
    BannerTop,
    BannerBottom,
    BannerTopBottom,
}

/// ConsoleNotificationList is a list of ConsoleNotification objects.
#[derive(Reflect, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[reflect(package = PACKAGE)]
pub struct ConsoleNotificationList {
    #[serde(flatten)]
    pub types: TypeMeta,
    #[serde(default)]
    pub metadata: ListMeta,
    pub items: Vec<ConsoleNotification>,
}

/// ConsoleYAMLSample is an extension for customizing OpenShift web console YAML samples.
#[derive(Reflect, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[reflect(package = PACKAGE)]
pub struct ConsoleYAMLSample {
    #[serde(flatten)]
    pub types: TypeMeta,
    pub metadata: ObjectMeta,
    pub spec: ConsoleYAMLSampleSpec,
}

/// ConsoleYAMLSampleSpec is the desired YAML sample configuration.
/// Samples will appear with their descriptions in a samples sidebar
/// when creating a resources in the web console.
#[derive(Reflect, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[reflect(package = PACKAGE)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleYAMLSampleSpec {
    /// targetResource contains apiVersion and kind of the resource
    /// YAML sample is representating.
    pub target_resource: TypeMeta,
    /// title of the YAML sample.
    pub title: String,
    /// description of the YAML sample.
    pub description: String,
    /// yaml is the YAML sample to display.
    pub yaml: String,
    /// snippet indicates that the YAML sample is not the full YAML resource
    /// definition, but a fragment that can be inserted into the existing
    /// YAML document at the user's cursor.
    pub snippet: bool,
}

/// ConsoleYAMLSampleList is a list of ConsoleYAMLSample objects.
#[derive(Reflect, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[reflect(package = PACKAGE)]
pub struct ConsoleYAMLSampleList {
    #[serde(flatten)]
    pub types: TypeMeta,
    #[serde(default)]
    pub metadata: ListMeta,
    pub items: Vec<ConsoleYAMLSample>,
}

/// Link is an object that holds a display text and a link.
#[derive(Reflect, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[reflect(package = PACKAGE)]
pub struct Link {
    /// text is the display text for the link
    pub text: String,
    /// href is the absolute secure URL for the link (must use https)
    pub href: String,
}

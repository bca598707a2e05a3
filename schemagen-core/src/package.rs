//! Mapping of source packages onto generated model namespaces.
use serde::{Deserialize, Serialize};

/// Where the types of one source package end up in the generated model
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct PackageDescriptor {
    /// Package path of the reflected types, e.g. `k8s.io/api/core/v1`
    pub package: String,
    /// API group served by the package, empty for the core group
    pub api_group: String,
    /// Java package the model classes are generated into
    pub java_package: String,
    /// Prefix of definition names for types of this package
    pub prefix: String,
}

impl PackageDescriptor {
    /// Construct from explicit package, api group, java package and prefix
    pub fn new(package_: &str, api_group_: &str, java_package_: &str, prefix_: &str) -> Self {
        let package = package_.to_string();
        let api_group = api_group_.to_string();
        let java_package = java_package_.to_string();
        let prefix = prefix_.to_string();
        Self {
            package,
            api_group,
            java_package,
            prefix,
        }
    }

    /// API version served by the package, the last segment of its path
    pub fn version(&self) -> &str {
        self.package.rsplit('/').next().unwrap_or_default()
    }

    /// Generate the apiVersion string used by kinds of this package
    pub fn api_version(&self) -> String {
        if self.api_group.is_empty() {
            self.version().to_string()
        } else {
            format!("{}/{}", self.api_group, self.version())
        }
    }
}

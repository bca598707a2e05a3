use crate::{
    metadata::{ListMeta, ObjectMeta},
    package::PackageDescriptor,
    reflect::{Kind, Reflect, TypeFn, TypeInfo},
    schema::{
        ArrayDescriptor, Descriptor, InstanceType, JavaDescriptor, JsonSchema, MapDescriptor,
        ObjectDescriptor, PropertyDescriptor, SCHEMA_DIALECT, SCHEMA_ID_BASE,
    },
    Error, Result,
};
use std::{
    any::TypeId,
    collections::{btree_map::Entry, BTreeMap, HashMap},
};
use tracing::{debug, info, warn};

const HAS_METADATA: &str = "io.fabric8.kubernetes.api.model.HasMetadata";
const KUBERNETES_RESOURCE: &str = "io.fabric8.kubernetes.api.model.KubernetesResource";
const KUBERNETES_RESOURCE_LIST: &str = "io.fabric8.kubernetes.api.model.KubernetesResourceList";

/// Walks reflected types and builds a [`JsonSchema`]
///
/// ```
/// use schemagen_core::{PackageDescriptor, SchemaGenerator};
/// use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
///
/// struct Root;
/// impl schemagen_core::Reflect for Root {
///     fn type_info() -> schemagen_core::TypeInfo {
///         schemagen_core::TypeInfo::structure::<Self>("Root", "example.com/root", vec![
///             schemagen_core::Field::new::<ObjectMeta>("ObjectMeta"),
///         ])
///     }
/// }
///
/// let schema = SchemaGenerator::new([PackageDescriptor::new(
///     "k8s.io/apimachinery/pkg/apis/meta/v1",
///     "",
///     "io.fabric8.kubernetes.api.model",
///     "kubernetes_apimachinery_",
/// )])
/// .substitute::<chrono::DateTime<chrono::Utc>, String>()
/// .generate::<Root>()
/// .unwrap();
/// assert!(schema.definitions.contains_key("kubernetes_apimachinery_ObjectMeta"));
/// ```
pub struct SchemaGenerator {
    packages: HashMap<String, PackageDescriptor>,
    substitutions: HashMap<TypeId, TypeFn>,
    manual_types: HashMap<TypeId, String>,
    module: String,
    types: HashMap<TypeId, Visited>,
}

/// A struct reached during the walk
///
/// `object` stays empty while the struct's own fields are being walked, which is what
/// terminates cycles.
struct Visited {
    info: TypeInfo,
    object: Option<ObjectDescriptor>,
    shape: Shape,
}

/// Which model interfaces a definition implements
#[derive(Clone, Debug, PartialEq)]
enum Shape {
    Resource,
    List { item: String },
    Plain,
}

impl SchemaGenerator {
    /// Create a generator for types of the given packages
    pub fn new(packages: impl IntoIterator<Item = PackageDescriptor>) -> Self {
        Self {
            packages: packages
                .into_iter()
                .map(|p| (p.package.clone(), p))
                .collect(),
            substitutions: HashMap::new(),
            manual_types: HashMap::new(),
            module: String::new(),
            types: HashMap::new(),
        }
    }

    /// Treat every occurrence of `T` as `U`
    #[must_use]
    pub fn substitute<T: Reflect, U: Reflect>(mut self) -> Self {
        self.substitutions.insert(TypeId::of::<T>(), U::type_info);
        self
    }

    /// Map `T` onto an existing Java type instead of walking it
    #[must_use]
    pub fn manual_type<T: Reflect>(mut self, java_type: impl Into<String>) -> Self {
        self.manual_types.insert(TypeId::of::<T>(), java_type.into());
        self
    }

    /// Name of the generated model module, used in the schema id
    #[must_use]
    pub fn module(mut self, name: impl Into<String>) -> Self {
        self.module = name.into();
        self
    }

    /// Build the schema of everything reachable from `T`
    pub fn generate<T: Reflect>(mut self) -> Result<JsonSchema> {
        let root = self.substituted(T::type_info());
        if !root.is_struct() {
            return Err(Error::NotAStruct {
                name: root.display_name(),
                kind: root.kind().label(),
            });
        }
        let object = self.object_descriptor(&root)?;

        let mut entries = Vec::with_capacity(self.types.len());
        for visited in self.types.values() {
            entries.push((self.qualified_name(&visited.info), visited));
        }
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        let mut definitions = BTreeMap::new();
        let mut resources = BTreeMap::new();
        for (name, visited) in entries {
            if definitions.contains_key(&name) {
                return Err(Error::DuplicateDefinition { name });
            }
            let definition = self.definition(visited);
            let mut key = visited.info.name().to_lowercase();
            if resources.contains_key(&key) {
                warn!(%name, %key, "resource name already taken, keying by definition name");
                key = name.to_lowercase();
            }
            match resources.entry(key) {
                Entry::Vacant(entry) => {
                    entry.insert(definition.clone());
                }
                Entry::Occupied(entry) => {
                    return Err(Error::DuplicateResource {
                        key: entry.key().clone(),
                        name,
                    });
                }
            }
            definitions.insert(name, definition);
        }
        info!(
            definitions = definitions.len(),
            properties = object.properties.len(),
            "generated schema for {}",
            root.name()
        );

        let module = match self.module.as_str() {
            "" => String::new(),
            module => format!("{module}/"),
        };
        Ok(JsonSchema {
            id: format!("{SCHEMA_ID_BASE}{module}{}#", root.name()),
            schema: SCHEMA_DIALECT.to_string(),
            definitions,
            descriptor: Descriptor {
                instance_type: Some(InstanceType::Object),
                description: root.description().map(Into::into),
                ..Descriptor::default()
            },
            object,
            resources: Some(resources),
        })
    }

    fn substituted(&self, info: TypeInfo) -> TypeInfo {
        match self.substitutions.get(&info.type_id()) {
            Some(substitute) => substitute(),
            None => info,
        }
    }

    /// Properties of a struct, including those of its inlined fields
    fn object_descriptor(&mut self, owner: &TypeInfo) -> Result<ObjectDescriptor> {
        let mut object = ObjectDescriptor::open();
        self.collect_properties(owner, &mut object)?;
        Ok(object)
    }

    fn collect_properties(&mut self, owner: &TypeInfo, object: &mut ObjectDescriptor) -> Result<()> {
        let Kind::Struct(fields) = owner.kind() else {
            return Ok(());
        };
        for field in fields {
            let ty = field.type_info();
            if field.is_inline() {
                let embedded = self.substituted(ty.resolve());
                if !embedded.is_struct() {
                    return Err(Error::InlineNotStruct {
                        owner: owner.display_name(),
                        field: field.name().to_string(),
                        name: embedded.display_name(),
                    });
                }
                self.collect_properties(&embedded, object)?;
                continue;
            }

            let optional = matches!(ty.kind(), Kind::Optional(_));
            let property = self
                .property_descriptor(owner, ty, field.is_omit_empty())?
                .described(field.description());
            object.properties.insert(field.name().to_string(), property);
            if field.is_required() && !optional {
                object.require(field.name());
            }
        }
        Ok(())
    }

    fn property_descriptor(
        &mut self,
        owner: &TypeInfo,
        info: TypeInfo,
        omit_empty: bool,
    ) -> Result<PropertyDescriptor> {
        let info = self.substituted(info);
        if let Some(java_type) = self.manual_types.get(&info.type_id()) {
            return Ok(PropertyDescriptor::typed(InstanceType::Object).existing_java_type(java_type));
        }

        let property = match info.kind() {
            Kind::Bool => PropertyDescriptor::typed(InstanceType::Boolean),
            Kind::Int8 | Kind::Int16 | Kind::Int32 | Kind::Uint8 | Kind::Uint16 | Kind::Uint32 => {
                PropertyDescriptor::typed(InstanceType::Integer)
            }
            Kind::Int64 | Kind::Uint64 => {
                PropertyDescriptor::typed(InstanceType::Integer).existing_java_type("Long")
            }
            Kind::Float32 | Kind::Float64 => PropertyDescriptor::typed(InstanceType::Number),
            Kind::String => PropertyDescriptor::typed(InstanceType::String),
            Kind::Enum(values) => {
                let mut property = PropertyDescriptor::typed(InstanceType::String);
                property.descriptor.enum_values = Some(values.iter().map(|v| (*v).into()).collect());
                property
            }
            Kind::Any => PropertyDescriptor::typed(InstanceType::Object).existing_java_type("Object"),
            Kind::Optional(elem) => return self.property_descriptor(owner, elem(), omit_empty),
            Kind::Seq(elem) => {
                if matches!(self.substituted(elem()).kind(), Kind::Uint8) {
                    // bytes are serialized as base64 strings
                    PropertyDescriptor::typed(InstanceType::String)
                } else {
                    let items = self.property_descriptor(owner, elem(), false)?;
                    let mut property = PropertyDescriptor::typed(InstanceType::Array);
                    property.array = Some(ArrayDescriptor {
                        items: Box::new(items),
                    });
                    property.java.java_omit_empty = omit_empty;
                    property
                }
            }
            Kind::Map { key, value } => {
                let key = self.substituted(key()).resolve();
                if !matches!(key.kind(), Kind::String | Kind::Enum(_)) {
                    return Err(Error::UnsupportedMapKey {
                        owner: owner.display_name(),
                        key: key.display_name(),
                    });
                }
                let java_type = format!(
                    "java.util.Map<String,{}>",
                    self.java_type(&self.substituted(value()))
                );
                let value = self.property_descriptor(owner, value(), false)?;
                let mut property = PropertyDescriptor::typed(InstanceType::Object).java_type(java_type);
                property.map = Some(MapDescriptor {
                    value: Box::new(value),
                });
                property.java.java_omit_empty = omit_empty;
                property
            }
            Kind::Struct(_) => {
                self.register(&info)?;
                PropertyDescriptor::reference(&self.qualified_name(&info), self.java_type(&info))
            }
        };
        Ok(property)
    }

    /// Record a struct definition, walking its fields the first time it is seen
    fn register(&mut self, info: &TypeInfo) -> Result<()> {
        if self.types.contains_key(&info.type_id()) {
            return Ok(());
        }
        debug!(definition = %self.qualified_name(info), "registering definition");
        self.types.insert(info.type_id(), Visited {
            info: info.clone(),
            object: None,
            shape: Shape::Plain,
        });

        let mut object = self.object_descriptor(info)?;
        let shape = self.shape(info);
        if shape != Shape::Plain {
            if let Some(package) = self.packages.get(info.package()) {
                let api_version = package.api_version();
                pin_property(&mut object, "apiVersion", &api_version);
                pin_property(&mut object, "kind", info.name());
            }
        }
        if let Some(visited) = self.types.get_mut(&info.type_id()) {
            visited.object = Some(object);
            visited.shape = shape;
        }
        Ok(())
    }

    /// Classify a struct by its `metadata` and `items` fields
    fn shape(&self, info: &TypeInfo) -> Shape {
        let Kind::Struct(fields) = info.kind() else {
            return Shape::Plain;
        };
        let mut has_type_meta = (false, false);
        let mut metadata = None;
        let mut items = None;
        self.visit_fields(fields, &mut |name: &str, ty: TypeInfo| match name {
            "apiVersion" => has_type_meta.0 = true,
            "kind" => has_type_meta.1 = true,
            "metadata" => metadata = Some(ty.resolve().type_id()),
            "items" => items = Some(ty),
            _ => {}
        });
        if has_type_meta != (true, true) {
            return Shape::Plain;
        }

        if metadata == Some(TypeId::of::<ObjectMeta>()) {
            return Shape::Resource;
        }
        if let (Some(meta), Some(items)) = (metadata, items) {
            let items = self.substituted(items.resolve());
            if let (true, Kind::Seq(elem)) = (meta == TypeId::of::<ListMeta>(), items.kind()) {
                let item = self.java_type(&self.substituted(elem()));
                return Shape::List { item };
            }
        }
        Shape::Plain
    }

    /// Visit serialized fields, descending into inlined ones
    fn visit_fields(&self, fields: &[crate::Field], visit: &mut dyn FnMut(&str, TypeInfo)) {
        for field in fields {
            let ty = field.type_info();
            if field.is_inline() {
                let embedded = self.substituted(ty.resolve());
                if let Kind::Struct(inner) = embedded.kind() {
                    self.visit_fields(inner, visit);
                }
            } else {
                visit(field.name(), ty);
            }
        }
    }

    fn definition(&self, visited: &Visited) -> PropertyDescriptor {
        let info = &visited.info;
        let java_interfaces = match &visited.shape {
            Shape::Resource => vec![HAS_METADATA.to_string()],
            Shape::List { item } => vec![
                KUBERNETES_RESOURCE.to_string(),
                format!("{KUBERNETES_RESOURCE_LIST}<{item}>"),
            ],
            Shape::Plain => vec![KUBERNETES_RESOURCE.to_string()],
        };
        PropertyDescriptor {
            descriptor: Descriptor {
                instance_type: Some(InstanceType::Object),
                description: info.description().map(Into::into),
                ..Descriptor::default()
            },
            object: Some(visited.object.clone().unwrap_or_else(ObjectDescriptor::open)),
            java: JavaDescriptor {
                java_type: Some(self.java_type(info)),
                java_interfaces,
                ..JavaDescriptor::default()
            },
            ..PropertyDescriptor::default()
        }
    }

    /// Definition name of a struct
    fn qualified_name(&self, info: &TypeInfo) -> String {
        match self.packages.get(info.package()) {
            Some(package) => format!("{}{}", package.prefix, info.name()),
            None => {
                let prefix = info.package().replace("::", "_").replace(['/', '.', '-'], "_");
                format!("{prefix}_{}", info.name())
            }
        }
    }

    /// Java type generated for, or used by, a type
    fn java_type(&self, info: &TypeInfo) -> String {
        if let Some(java_type) = self.manual_types.get(&info.type_id()) {
            return java_type.clone();
        }
        match info.kind() {
            Kind::Bool => "Boolean".into(),
            Kind::Int8 | Kind::Int16 | Kind::Int32 | Kind::Uint8 | Kind::Uint16 | Kind::Uint32 => {
                "Integer".into()
            }
            Kind::Int64 | Kind::Uint64 => "Long".into(),
            Kind::Float32 | Kind::Float64 => "Double".into(),
            Kind::String | Kind::Enum(_) => "String".into(),
            Kind::Any => "Object".into(),
            Kind::Optional(elem) => self.java_type(&self.substituted(elem())),
            Kind::Seq(elem) => {
                let elem = self.substituted(elem());
                if matches!(elem.kind(), Kind::Uint8) {
                    "String".into()
                } else {
                    format!("java.util.ArrayList<{}>", self.java_type(&elem))
                }
            }
            Kind::Map { value, .. } => {
                format!("java.util.Map<String,{}>", self.java_type(&self.substituted(value())))
            }
            Kind::Struct(fields) => match self.packages.get(info.package()) {
                Some(package) => match info.name() {
                    "RawExtension" => HAS_METADATA.into(),
                    "List" => format!("{}.BaseKubernetesList", package.java_package),
                    name => format!("{}.{name}", package.java_package),
                },
                None if info.name() == "Time" => "String".into(),
                None if info.name().is_empty() && fields.is_empty() => "Object".into(),
                None => info.name().into(),
            },
        }
    }
}

/// Restrict a property to a single value, if the object has it
fn pin_property(object: &mut ObjectDescriptor, name: &str, value: &str) {
    if let Some(property) = object.properties.get_mut(name) {
        property.pin(value);
        object.require(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        k8s::META_V1,
        metadata::TypeMeta,
        reflect::{reflect_struct, Field},
    };
    use assert_json_diff::assert_json_eq;
    use chrono::{DateTime, Utc};
    use serde_json::json;

    const SHOP: &str = "example.com/shop/v1";

    fn packages() -> Vec<PackageDescriptor> {
        vec![
            PackageDescriptor::new(META_V1, "", "io.fabric8.kubernetes.api.model", "kubernetes_apimachinery_"),
            PackageDescriptor::new(SHOP, "shop.example.com", "com.example.shop.v1", "shop_v1_"),
        ]
    }

    struct Order;
    struct OrderList;
    struct OrderSpec;
    struct Item;
    struct Root;

    reflect_struct!(Order => "Order" in SHOP, {
        "": TypeMeta [inline],
        "metadata": Option<ObjectMeta> [omit_empty],
        "spec": OrderSpec [required],
    });

    reflect_struct!(OrderList => "OrderList" in SHOP, {
        "": TypeMeta [inline],
        "metadata": ListMeta [omit_empty],
        "items": Vec<Order> [required],
    });

    reflect_struct!(OrderSpec => "OrderSpec" in SHOP, {
        "items": Vec<Item> [omit_empty],
        "placed": DateTime<Utc> [required],
        "notes": Option<Vec<u8>> [omit_empty],
        "labels": Option<BTreeMap<String, String>> [omit_empty],
        "total": i64 [required],
    });

    reflect_struct!(Item => "Item" in SHOP, {
        "name": String [required],
        "children": Vec<Item> [omit_empty],
        "extra": serde_json::Value,
    });

    reflect_struct!(Root => "Schema" in "example.com/generate", {
        "Order": Order,
        "OrderList": OrderList,
    });

    fn bare() -> SchemaGenerator {
        SchemaGenerator::new(Vec::<PackageDescriptor>::new())
    }

    fn generate() -> JsonSchema {
        SchemaGenerator::new(packages())
            .substitute::<DateTime<Utc>, String>()
            .substitute::<(), String>()
            .module("shop")
            .generate::<Root>()
            .unwrap()
    }

    #[test]
    fn every_reachable_type_is_defined_once() {
        let schema = generate();
        let names = schema.definitions.keys().cloned().collect::<Vec<_>>();
        assert_eq!(names, [
            "kubernetes_apimachinery_FieldsV1",
            "kubernetes_apimachinery_ListMeta",
            "kubernetes_apimachinery_ManagedFieldsEntry",
            "kubernetes_apimachinery_ObjectMeta",
            "kubernetes_apimachinery_OwnerReference",
            "kubernetes_apimachinery_Time",
            "shop_v1_Item",
            "shop_v1_Order",
            "shop_v1_OrderList",
            "shop_v1_OrderSpec",
        ]);
    }

    #[test]
    fn root_properties_reference_definitions() {
        let schema = generate();
        assert_eq!(schema.id, "http://fabric8.io/fabric8/v2/shop/Schema#");
        assert_json_eq!(
            serde_json::to_value(&schema.object).unwrap(),
            json!({
                "properties": {
                    "Order": {
                        "$ref": "#/definitions/shop_v1_Order",
                        "javaType": "com.example.shop.v1.Order"
                    },
                    "OrderList": {
                        "$ref": "#/definitions/shop_v1_OrderList",
                        "javaType": "com.example.shop.v1.OrderList"
                    }
                },
                "additionalProperties": true
            })
        );
    }

    #[test]
    fn resources_pin_api_version_and_kind() {
        let schema = generate();
        assert_json_eq!(
            serde_json::to_value(&schema.definitions["shop_v1_Order"]).unwrap(),
            json!({
                "type": "object",
                "properties": {
                    "apiVersion": {
                        "type": "string",
                        "default": "shop.example.com/v1",
                        "enum": ["shop.example.com/v1"]
                    },
                    "kind": {
                        "type": "string",
                        "default": "Order",
                        "enum": ["Order"]
                    },
                    "metadata": {
                        "$ref": "#/definitions/kubernetes_apimachinery_ObjectMeta",
                        "javaType": "io.fabric8.kubernetes.api.model.ObjectMeta"
                    },
                    "spec": {
                        "$ref": "#/definitions/shop_v1_OrderSpec",
                        "javaType": "com.example.shop.v1.OrderSpec"
                    }
                },
                "required": ["spec", "apiVersion", "kind"],
                "additionalProperties": true,
                "javaType": "com.example.shop.v1.Order",
                "javaInterfaces": ["io.fabric8.kubernetes.api.model.HasMetadata"]
            })
        );
    }

    #[test]
    fn lists_implement_resource_list() {
        let schema = generate();
        let list = serde_json::to_value(&schema.definitions["shop_v1_OrderList"]).unwrap();
        assert_eq!(
            list["javaInterfaces"],
            json!([
                "io.fabric8.kubernetes.api.model.KubernetesResource",
                "io.fabric8.kubernetes.api.model.KubernetesResourceList<com.example.shop.v1.Order>"
            ])
        );
        assert_eq!(list["properties"]["items"]["type"], "array");
        assert_eq!(list["properties"]["kind"]["default"], "OrderList");
    }

    #[test]
    fn field_kinds_render_as_expected() {
        let schema = generate();
        assert_json_eq!(
            serde_json::to_value(&schema.definitions["shop_v1_OrderSpec"].object).unwrap(),
            json!({
                "properties": {
                    "items": {
                        "type": "array",
                        "items": {
                            "$ref": "#/definitions/shop_v1_Item",
                            "javaType": "com.example.shop.v1.Item"
                        },
                        "javaOmitEmpty": true
                    },
                    "placed": { "type": "string" },
                    "notes": { "type": "string" },
                    "labels": {
                        "type": "object",
                        "additionalProperty": { "type": "string" },
                        "javaType": "java.util.Map<String,String>",
                        "javaOmitEmpty": true
                    },
                    "total": { "type": "integer", "existingJavaType": "Long" }
                },
                "required": ["placed", "total"],
                "additionalProperties": true
            })
        );
    }

    #[test]
    fn cyclic_types_terminate() {
        let schema = generate();
        let item = serde_json::to_value(&schema.definitions["shop_v1_Item"]).unwrap();
        assert_eq!(item["properties"]["children"]["items"]["$ref"], "#/definitions/shop_v1_Item");
        assert_eq!(
            item["properties"]["extra"],
            json!({ "type": "object", "existingJavaType": "Object" })
        );
        assert_eq!(item["required"], json!(["name"]));
    }

    #[test]
    fn resources_are_keyed_by_lowercase_name() {
        let schema = generate();
        let resources = schema.resources.unwrap();
        assert!(resources.contains_key("order"));
        assert!(resources.contains_key("orderlist"));
        assert!(resources.contains_key("objectmeta"));
        assert_eq!(resources.len(), schema.definitions.len());
    }

    #[test]
    fn definitions_do_not_depend_on_field_order() {
        struct Reversed;
        reflect_struct!(Reversed => "Schema" in "example.com/generate", {
            "Item": Item,
            "OrderList": OrderList,
            "OrderSpec": OrderSpec,
            "Order": Order,
        });
        let reversed = SchemaGenerator::new(packages())
            .substitute::<DateTime<Utc>, String>()
            .substitute::<(), String>()
            .module("shop")
            .generate::<Reversed>()
            .unwrap();
        assert_json_eq!(
            serde_json::to_value(&reversed.definitions).unwrap(),
            serde_json::to_value(&generate().definitions).unwrap()
        );
    }

    #[test]
    fn clashing_resource_names_fall_back_to_definition_names() {
        mod a {
            pub struct Thing;
        }
        mod b {
            pub struct Thing;
        }
        reflect_struct!(a::Thing => "Thing" in "a", {});
        reflect_struct!(b::Thing => "Thing" in "b", {});
        struct Both;
        reflect_struct!(Both => "Both" in "example.com/generate", {
            "a": a::Thing,
            "b": b::Thing,
        });
        let schema = bare().generate::<Both>().unwrap();
        let keys = schema.resources.unwrap().into_keys().collect::<Vec<_>>();
        assert_eq!(keys, ["b_thing", "thing"]);
    }

    #[test]
    fn taken_fallback_resource_names_are_rejected() {
        mod a {
            pub struct Thing;
            pub struct Shadow;
        }
        mod b {
            pub struct Thing;
        }
        // a_Thing takes "thing", a_b_Thing takes "b_thing", leaving b_Thing without a key
        reflect_struct!(a::Thing => "Thing" in "a", {});
        reflect_struct!(a::Shadow => "b_Thing" in "a", {});
        reflect_struct!(b::Thing => "Thing" in "b", {});
        struct All;
        reflect_struct!(All => "All" in "example.com/generate", {
            "thing": a::Thing,
            "shadow": a::Shadow,
            "other": b::Thing,
        });
        let err = bare().generate::<All>().unwrap_err();
        assert!(
            matches!(err, Error::DuplicateResource { ref key, ref name } if key == "b_thing" && name == "b_Thing"),
            "{err}"
        );
    }

    #[test]
    fn unknown_packages_are_mangled() {
        struct Loose;
        reflect_struct!(Loose => "Loose" in "github.com/some-org/pkg.v2", {});
        struct Holder;
        reflect_struct!(Holder => "Holder" in "example.com/generate", {
            "loose": Loose,
        });
        let schema = bare().generate::<Holder>().unwrap();
        assert!(schema
            .definitions
            .contains_key("github_com_some_org_pkg_v2_Loose"));
        assert_eq!(schema.id, "http://fabric8.io/fabric8/v2/Holder#");
    }

    #[test]
    fn manual_types_are_not_walked() {
        let schema = SchemaGenerator::new(packages())
            .manual_type::<OrderSpec>("com.example.ExistingSpec")
            .generate::<Order>()
            .unwrap();
        assert!(!schema.definitions.contains_key("shop_v1_OrderSpec"));
        assert_eq!(
            serde_json::to_value(&schema.object.properties["spec"]).unwrap(),
            json!({ "type": "object", "existingJavaType": "com.example.ExistingSpec" })
        );
    }

    #[test]
    fn timestamps_without_substitution_stay_structs() {
        let schema = SchemaGenerator::new(packages()).generate::<OrderSpec>().unwrap();
        assert!(schema.definitions.contains_key("chrono_DateTime"));
    }

    #[test]
    fn root_must_be_a_struct() {
        let err = bare().generate::<Vec<String>>().unwrap_err();
        assert!(matches!(err, Error::NotAStruct { kind: "sequence", .. }));
    }

    #[test]
    fn map_keys_must_be_strings() {
        struct Counts;
        reflect_struct!(Counts => "Counts" in SHOP, {
            "byId": BTreeMap<i32, String>,
        });
        let err = bare().generate::<Counts>().unwrap_err();
        assert!(matches!(err, Error::UnsupportedMapKey { .. }), "{err}");
    }

    #[test]
    fn inlined_fields_must_be_structs() {
        struct Broken;
        reflect_struct!(Broken => "Broken" in SHOP, {
            "": String [inline],
        });
        let err = bare().generate::<Broken>().unwrap_err();
        assert!(matches!(err, Error::InlineNotStruct { .. }), "{err}");
    }

    #[test]
    fn clashing_definition_names_are_rejected() {
        mod a {
            pub struct Thing;
        }
        mod b {
            pub struct Thing;
        }
        reflect_struct!(a::Thing => "Thing" in SHOP, {});
        reflect_struct!(b::Thing => "Thing" in SHOP, {});
        struct Both;
        reflect_struct!(Both => "Both" in "example.com/generate", {
            "a": a::Thing,
            "b": b::Thing,
        });
        let err = SchemaGenerator::new(packages()).generate::<Both>().unwrap_err();
        assert!(matches!(err, Error::DuplicateDefinition { ref name } if name == "shop_v1_Thing"));
    }

    #[test]
    fn field_descriptions_are_attached() {
        struct Described;
        impl Reflect for Described {
            fn type_info() -> TypeInfo {
                TypeInfo::structure::<Self>("Described", SHOP, vec![
                    Field::new::<String>("text").describe("Text shown to users")
                ])
                .describe("A described type")
            }
        }
        let schema = bare().generate::<Described>().unwrap();
        assert_eq!(
            schema.object.properties["text"].descriptor.description.as_deref(),
            Some("Text shown to users")
        );
        assert_eq!(schema.descriptor.description.as_deref(), Some("A described type"));
    }
}

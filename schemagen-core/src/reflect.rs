//! Static type descriptions standing in for runtime reflection.
//!
//! Every type that takes part in schema generation implements [`Reflect`], either through
//! `#[derive(Reflect)]` or through the tables in [`crate::k8s`] and [`crate::metadata`].
//! Element and field types are stored as [`TypeFn`] so that cyclic type graphs stay finite.
use std::{
    any::TypeId,
    collections::{BTreeMap, HashMap},
};

/// A type that can describe its own shape to the schema generator
pub trait Reflect: 'static {
    /// Describe the shape of `Self`
    fn type_info() -> TypeInfo;
}

/// Lazily resolved type information
pub type TypeFn = fn() -> TypeInfo;

/// Description of a single type
#[derive(Clone, Debug)]
pub struct TypeInfo {
    type_id: TypeId,
    name: &'static str,
    package: &'static str,
    description: Option<&'static str>,
    kind: Kind,
}

impl TypeInfo {
    /// Describe `T` with an explicit name, package path and kind
    pub fn of<T: ?Sized + 'static>(name: &'static str, package: &'static str, kind: Kind) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            name,
            package,
            description: None,
            kind,
        }
    }

    /// Describe `T` as a struct with the given fields in declaration order
    pub fn structure<T: ?Sized + 'static>(
        name: &'static str,
        package: &'static str,
        fields: Vec<Field>,
    ) -> Self {
        Self::of::<T>(name, package, Kind::Struct(fields))
    }

    /// Describe `T` as a string enumeration
    pub fn enumeration<T: ?Sized + 'static>(
        name: &'static str,
        package: &'static str,
        values: Vec<&'static str>,
    ) -> Self {
        Self::of::<T>(name, package, Kind::Enum(values))
    }

    /// Attach a human readable description
    #[must_use]
    pub fn describe(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    /// Identity of the described type
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Unqualified type name, empty for anonymous and container types
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Package path the type is declared in
    pub fn package(&self) -> &'static str {
        self.package
    }

    /// Description taken from the type declaration
    pub fn description(&self) -> Option<&'static str> {
        self.description
    }

    /// Shape of the type
    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    /// Whether the type is a struct
    pub fn is_struct(&self) -> bool {
        matches!(self.kind, Kind::Struct(_))
    }

    /// Strip all [`Kind::Optional`] layers
    #[must_use]
    pub fn resolve(self) -> TypeInfo {
        let mut info = self;
        while let Kind::Optional(elem) = &info.kind {
            info = elem();
        }
        info
    }

    /// Name used in diagnostics
    pub fn display_name(&self) -> String {
        match (self.name, self.package) {
            ("", _) => self.kind.label().to_string(),
            (name, "") => name.to_string(),
            (name, package) => format!("{package}.{name}"),
        }
    }
}

/// The shape of a reflected type
#[derive(Clone, Debug)]
pub enum Kind {
    /// `true` or `false`
    Bool,
    /// 8 bit signed integer
    Int8,
    /// 16 bit signed integer
    Int16,
    /// 32 bit signed integer
    Int32,
    /// 64 bit signed integer
    Int64,
    /// 8 bit unsigned integer
    Uint8,
    /// 16 bit unsigned integer
    Uint16,
    /// 32 bit unsigned integer
    Uint32,
    /// 64 bit unsigned integer
    Uint64,
    /// Single precision float
    Float32,
    /// Double precision float
    Float64,
    /// UTF-8 string
    String,
    /// A value that may be absent, rendered like its element
    Optional(TypeFn),
    /// A homogeneous sequence
    Seq(TypeFn),
    /// A map from keys to values
    Map {
        /// Key type
        key: TypeFn,
        /// Value type
        value: TypeFn,
    },
    /// A struct with named fields in declaration order
    Struct(Vec<Field>),
    /// A fieldless enum serialized as one of the given strings
    Enum(Vec<&'static str>),
    /// Any JSON value
    Any,
}

impl Kind {
    /// Short label used in diagnostics
    pub fn label(&self) -> &'static str {
        match self {
            Kind::Bool => "bool",
            Kind::Int8 => "int8",
            Kind::Int16 => "int16",
            Kind::Int32 => "int32",
            Kind::Int64 => "int64",
            Kind::Uint8 => "uint8",
            Kind::Uint16 => "uint16",
            Kind::Uint32 => "uint32",
            Kind::Uint64 => "uint64",
            Kind::Float32 => "float32",
            Kind::Float64 => "float64",
            Kind::String => "string",
            Kind::Optional(_) => "optional",
            Kind::Seq(_) => "sequence",
            Kind::Map { .. } => "map",
            Kind::Struct(_) => "struct",
            Kind::Enum(_) => "enum",
            Kind::Any => "any",
        }
    }
}

/// A named struct field
#[derive(Clone, Debug)]
pub struct Field {
    name: &'static str,
    ty: TypeFn,
    description: Option<&'static str>,
    omit_empty: bool,
    inline: bool,
    required: bool,
}

impl Field {
    /// A field serialized under `name` holding a `T`
    pub fn new<T: Reflect>(name: &'static str) -> Self {
        Self {
            name,
            ty: T::type_info,
            description: None,
            omit_empty: false,
            inline: false,
            required: false,
        }
    }

    /// Attach a human readable description
    #[must_use]
    pub fn describe(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    /// Mark the field as left out of serialized output when empty
    #[must_use]
    pub fn omit_empty(mut self) -> Self {
        self.omit_empty = true;
        self
    }

    /// Mark the field as embedded: its properties are merged into the owner
    #[must_use]
    pub fn inline(mut self) -> Self {
        self.inline = true;
        self
    }

    /// Mark the field as required
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Serialized name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Type information of the field's type
    pub fn type_info(&self) -> TypeInfo {
        (self.ty)()
    }

    /// Description taken from the field declaration
    pub fn description(&self) -> Option<&'static str> {
        self.description
    }

    /// Whether the field is left out when empty
    pub fn is_omit_empty(&self) -> bool {
        self.omit_empty
    }

    /// Whether the field is embedded into its owner
    pub fn is_inline(&self) -> bool {
        self.inline
    }

    /// Whether the field is required
    pub fn is_required(&self) -> bool {
        self.required
    }
}

/// Implement [`Reflect`] for a struct by listing its serialized fields
///
/// ```ignore
/// reflect_struct!(ListMeta => "ListMeta" in META_V1, {
///     "continue": Option<String> [omit_empty],
/// });
/// ```
macro_rules! reflect_struct {
    ($ty:ty => $name:literal in $package:expr, { $($field:literal : $fty:ty $([$($flag:ident),+])?),* $(,)? }) => {
        impl $crate::reflect::Reflect for $ty {
            fn type_info() -> $crate::reflect::TypeInfo {
                $crate::reflect::TypeInfo::structure::<Self>($name, $package, vec![
                    $($crate::reflect::Field::new::<$fty>($field)$($(.$flag())+)?),*
                ])
            }
        }
    };
}
pub(crate) use reflect_struct;

macro_rules! reflect_primitive {
    ($($ty:ty => $name:literal, $kind:ident;)*) => {
        $(
            impl Reflect for $ty {
                fn type_info() -> TypeInfo {
                    TypeInfo::of::<Self>($name, "", Kind::$kind)
                }
            }
        )*
    };
}

reflect_primitive! {
    bool => "bool", Bool;
    i8 => "int8", Int8;
    i16 => "int16", Int16;
    i32 => "int32", Int32;
    i64 => "int64", Int64;
    isize => "int", Int64;
    u8 => "uint8", Uint8;
    u16 => "uint16", Uint16;
    u32 => "uint32", Uint32;
    u64 => "uint64", Uint64;
    usize => "uint", Uint64;
    f32 => "float32", Float32;
    f64 => "float64", Float64;
    String => "string", String;
}

impl<T: Reflect> Reflect for Option<T> {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Self>("", "", Kind::Optional(T::type_info))
    }
}

impl<T: Reflect> Reflect for Box<T> {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Self>("", "", Kind::Optional(T::type_info))
    }
}

impl<T: Reflect> Reflect for Vec<T> {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Self>("", "", Kind::Seq(T::type_info))
    }
}

impl<K: Reflect, V: Reflect> Reflect for BTreeMap<K, V> {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Self>("", "", Kind::Map {
            key: K::type_info,
            value: V::type_info,
        })
    }
}

impl<K: Reflect, V: Reflect> Reflect for HashMap<K, V> {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Self>("", "", Kind::Map {
            key: K::type_info,
            value: V::type_info,
        })
    }
}

impl<K: Reflect, V: Reflect> Reflect for indexmap::IndexMap<K, V> {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Self>("", "", Kind::Map {
            key: K::type_info,
            value: V::type_info,
        })
    }
}

impl Reflect for serde_json::Value {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Self>("", "", Kind::Any)
    }
}

// The anonymous empty struct
impl Reflect for () {
    fn type_info() -> TypeInfo {
        TypeInfo::structure::<Self>("", "", vec![])
    }
}

// Timestamps carry no serialized fields of their own; generators substitute them
impl Reflect for chrono::DateTime<chrono::Utc> {
    fn type_info() -> TypeInfo {
        TypeInfo::structure::<Self>("DateTime", "chrono", vec![])
    }
}

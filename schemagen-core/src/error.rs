use thiserror::Error;

/// Possible errors when generating or rendering a schema
#[derive(Error, Debug)]
pub enum Error {
    /// The root of a schema must be a struct
    #[error("only struct types can be converted, {name} is a {kind}")]
    NotAStruct {
        /// Name of the offending type
        name: String,
        /// Its kind
        kind: &'static str,
    },

    /// Map keys must serialize as strings
    #[error("map keys must be strings, found {key} keys in a field of {owner}")]
    UnsupportedMapKey {
        /// Type owning the map
        owner: String,
        /// The key type
        key: String,
    },

    /// Only structs can be embedded into their owner
    #[error("field {field} of {owner} is inlined but {name} is not a struct")]
    InlineNotStruct {
        /// Type owning the field
        owner: String,
        /// Serialized name of the field
        field: String,
        /// The field's type
        name: String,
    },

    /// Two distinct types map to the same definition name
    #[error("definition {name} is produced by more than one type")]
    DuplicateDefinition {
        /// The clashing definition name
        name: String,
    },

    /// Two definitions end up under the same resource key
    #[error("resource key {key} of {name} is already taken")]
    DuplicateResource {
        /// The clashing resource key
        key: String,
        /// Definition name of the type left without a key
        name: String,
    },

    /// The schema document could not be serialized
    #[error("failed to serialize schema: {0}")]
    SerializeSchema(#[source] serde_json::Error),

    /// The corrected schema document could not be parsed back
    #[error("failed to parse corrected schema: {0}")]
    ReparseSchema(#[source] serde_json::Error),
}

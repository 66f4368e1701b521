use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog is not valid JSON ({json_error}); TOML parse error: {toml_error}")]
    Parse {
        json_error: String,
        toml_error: String,
    },

    #[error("catalog schema_version {0} is not supported (expected 1)")]
    UnsupportedSchemaVersion(u32),

    #[error("{kind} entry at position {position} has an empty id")]
    EmptyId { kind: &'static str, position: usize },

    #[error("duplicate {kind} id in catalog: {id}")]
    DuplicateId { kind: &'static str, id: String },
}

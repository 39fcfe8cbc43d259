use std::path::PathBuf;
use thiserror::Error;

/// 生成过程中的错误，对命令行来说全部是致命错误
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(r#"expected qualified type as "path/to/module.MyType", got `{0}`"#)]
    UnqualifiedType(String),

    #[error("module `{module}` not found (tried {})", display_paths(.tried))]
    ModuleNotFound { module: String, tried: Vec<PathBuf> },

    #[error("{}:{line}:{column}: {message}", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    #[error("{name} not found in declared types of {}", .module.display())]
    NotFound { name: String, module: PathBuf },

    #[error("{name} is not a named type")]
    NotNamedType { name: String },

    #[error("type {name} is not a struct with named fields")]
    NotStruct { name: String },

    #[error("struct field type not handled: `{ty}` (field `{field}`)")]
    UnsupportedFieldType { field: String, ty: String },

    #[error("invalid #[record] attribute on field `{field}`: {message}")]
    Attribute { field: String, message: String },

    #[error("emitting change-set for {name}: {message}")]
    Emit { name: String, message: String },

    #[error("reading {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("writing {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T, E = GenerateError> = std::result::Result<T, E>;

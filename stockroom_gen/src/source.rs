//! 解析 `<module-path>.<TypeName>` 并加载模块中的声明

use crate::error::{GenerateError, Result};
use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;

/// 命令行给出的类型引用，例如 `src/domain.Product`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceType {
    pub module: String,
    pub name: String,
}

impl FromStr for SourceType {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self> {
        let (module, name) = s
            .rsplit_once('.')
            .ok_or_else(|| GenerateError::UnqualifiedType(s.to_string()))?;
        if module.is_empty() || name.is_empty() {
            return Err(GenerateError::UnqualifiedType(s.to_string()));
        }
        Ok(Self {
            module: module.to_string(),
            name: name.to_string(),
        })
    }
}

/// 解析后的源模块
pub struct LoadedModule {
    pub path: PathBuf,
    /// 模块在 crate 内的路径，以 `crate` 开头
    pub crate_path: Vec<String>,
    pub file: syn::File,
    /// 本地名 -> 完整路径，来自模块的 `use` 条目
    pub imports: BTreeMap<String, Vec<String>>,
}

/// 模块路径对应的候选文件：`a/b.rs` 原样使用，`a/b` 依次尝试 `a/b.rs`、`a/b/mod.rs`
pub fn candidate_files(module: &str) -> Vec<PathBuf> {
    let path = Path::new(module);
    if path.extension().is_some_and(|ext| ext == "rs") {
        return vec![path.to_path_buf()];
    }
    vec![PathBuf::from(format!("{}.rs", module)), path.join("mod.rs")]
}

pub fn load_module(module: &str) -> Result<LoadedModule> {
    let tried = candidate_files(module);
    let path = tried
        .iter()
        .find(|candidate| candidate.is_file())
        .cloned()
        .ok_or_else(|| GenerateError::ModuleNotFound {
            module: module.to_string(),
            tried: tried.clone(),
        })?;

    let content = std::fs::read_to_string(&path).map_err(|source| GenerateError::Read {
        path: path.clone(),
        source,
    })?;
    let file = syn::parse_file(&content).map_err(|err| {
        let start = err.span().start();
        GenerateError::Parse {
            path: path.clone(),
            line: start.line,
            column: start.column + 1,
            message: err.to_string(),
        }
    })?;
    tracing::debug!(path = %path.display(), items = file.items.len(), "loaded module");

    let crate_path = crate_path_for(&path);
    let mut imports = BTreeMap::new();
    for item in &file.items {
        if let syn::Item::Use(item_use) = item {
            collect_imports(&item_use.tree, &mut Vec::new(), &mut imports);
        }
    }

    Ok(LoadedModule {
        path,
        crate_path,
        file,
        imports,
    })
}

/// 源文件在 crate 内的模块路径：取最后一个 `src` 之后的部分，
/// `mod.rs`、`lib.rs`、`main.rs` 代表其父模块
pub fn crate_path_for(path: &Path) -> Vec<String> {
    let components: Vec<String> = path
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    let start = components
        .iter()
        .rposition(|part| part == "src")
        .map(|idx| idx + 1)
        .unwrap_or_else(|| components.len().saturating_sub(1));

    let mut segments = vec!["crate".to_string()];
    let relative = &components[start..];
    for (idx, part) in relative.iter().enumerate() {
        if idx + 1 < relative.len() {
            segments.push(part.clone());
            continue;
        }
        let stem = part.strip_suffix(".rs").unwrap_or(part);
        let names_parent = stem == "mod" || (idx == 0 && (stem == "lib" || stem == "main"));
        if !names_parent {
            segments.push(stem.to_string());
        }
    }
    segments
}

fn collect_imports(
    tree: &syn::UseTree,
    prefix: &mut Vec<String>,
    imports: &mut BTreeMap<String, Vec<String>>,
) {
    match tree {
        syn::UseTree::Path(path) => {
            prefix.push(path.ident.to_string());
            collect_imports(&path.tree, prefix, imports);
            prefix.pop();
        }
        syn::UseTree::Name(name) => {
            if name.ident == "self" {
                if let Some(last) = prefix.last() {
                    imports.insert(last.clone(), prefix.clone());
                }
            } else {
                let mut full = prefix.clone();
                full.push(name.ident.to_string());
                imports.insert(name.ident.to_string(), full);
            }
        }
        syn::UseTree::Rename(rename) => {
            let mut full = prefix.clone();
            if rename.ident != "self" {
                full.push(rename.ident.to_string());
            }
            imports.insert(rename.rename.to_string(), full);
        }
        syn::UseTree::Group(group) => {
            for tree in &group.items {
                collect_imports(tree, prefix, imports);
            }
        }
        syn::UseTree::Glob(_) => {}
    }
}

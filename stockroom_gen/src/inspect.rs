//! 查找源结构体并描述它的字段

use crate::error::{GenerateError, Result};
use crate::source::LoadedModule;
use darling::FromField;
use quote::ToTokens;
use std::collections::HashMap;

/// `stockroom::Value` 能直接承载的内置标量
const SCALARS: &[&str] = &["bool", "i16", "i32", "i64", "f32", "f64", "String"];

/// 其余内置原始类型，没有对应的 `Value`
const UNSUPPORTED_PRIMITIVES: &[&str] = &[
    "char", "str", "i8", "i128", "isize", "u8", "u16", "u32", "u64", "u128", "usize",
];

#[derive(Debug, FromField)]
#[darling(attributes(record))]
struct RecordField {
    #[darling(default)]
    column: Option<String>,
    // 与 derive 共用同一个标签，这里只需要能解析
    #[allow(dead_code)]
    #[darling(default)]
    primary_key: bool,
}

/// 字段类型的形态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldShape {
    /// 内置标量，例如 `i32`、`String`
    Scalar(String),
    /// 具名类型，已限定为在 crate 内任意模块都能解析的路径
    Named(Vec<String>),
}

impl FieldShape {
    pub fn to_path(&self) -> syn::Path {
        let segments = match self {
            FieldShape::Scalar(name) => vec![name.clone()],
            FieldShape::Named(segments) => segments.clone(),
        };
        syn::Path {
            leading_colon: None,
            segments: segments
                .iter()
                .map(|segment| {
                    syn::PathSegment::from(syn::Ident::new(segment, proc_macro2::Span::call_site()))
                })
                .collect(),
        }
    }
}

/// 源结构体的一个字段
#[derive(Debug, Clone)]
pub struct SourceField {
    pub name: String,
    pub shape: FieldShape,
    /// 来自 `#[record(column = "...")]` 的列名
    pub column: Option<String>,
}

/// 在模块的顶层条目中查找 `name`，要求它是具名字段的结构体
pub fn lookup_struct<'a>(module: &'a LoadedModule, name: &str) -> Result<&'a syn::ItemStruct> {
    for item in &module.file.items {
        let ident = match item {
            syn::Item::Struct(item_struct) if item_struct.ident == name => {
                return match item_struct.fields {
                    syn::Fields::Named(_) => Ok(item_struct),
                    _ => Err(GenerateError::NotStruct {
                        name: name.to_string(),
                    }),
                };
            }
            syn::Item::Enum(item) => Some((&item.ident, true)),
            syn::Item::Union(item) => Some((&item.ident, true)),
            syn::Item::Type(item) => Some((&item.ident, true)),
            syn::Item::Trait(item) => Some((&item.ident, true)),
            syn::Item::TraitAlias(item) => Some((&item.ident, true)),
            syn::Item::Fn(item) => Some((&item.sig.ident, false)),
            syn::Item::Const(item) => Some((&item.ident, false)),
            syn::Item::Static(item) => Some((&item.ident, false)),
            syn::Item::Mod(item) => Some((&item.ident, false)),
            syn::Item::Macro(item) => item.ident.as_ref().map(|ident| (ident, false)),
            _ => None,
        };
        match ident {
            Some((ident, true)) if ident == name => {
                return Err(GenerateError::NotStruct {
                    name: name.to_string(),
                });
            }
            Some((ident, false)) if ident == name => {
                return Err(GenerateError::NotNamedType {
                    name: name.to_string(),
                });
            }
            _ => {}
        }
    }
    Err(GenerateError::NotFound {
        name: name.to_string(),
        module: module.path.clone(),
    })
}

/// 按声明顺序描述 `item` 的每个字段
///
/// 同一列被多个字段标注时返回 `GenerateError::Attribute`，与 `#[derive(Record)]` 的检查一致。
pub fn source_fields(module: &LoadedModule, item: &syn::ItemStruct) -> Result<Vec<SourceField>> {
    let mut fields = Vec::with_capacity(item.fields.len());
    let mut columns: HashMap<String, String> = HashMap::new();
    for field in &item.fields {
        let Some(ident) = &field.ident else {
            continue;
        };
        let name = ident.to_string();
        let shape = field_shape(module, &field.ty).ok_or_else(|| GenerateError::UnsupportedFieldType {
            field: name.clone(),
            ty: field.ty.to_token_stream().to_string(),
        })?;
        let tag = RecordField::from_field(field).map_err(|err| GenerateError::Attribute {
            field: name.clone(),
            message: err.to_string(),
        })?;
        if let Some(column) = &tag.column {
            if columns.insert(column.clone(), name.clone()).is_some() {
                return Err(GenerateError::Attribute {
                    field: name,
                    message: format!("column `{}` is mapped by more than one field", column),
                });
            }
        }
        tracing::debug!(field = %name, shape = ?shape, column = ?tag.column, "inspected field");
        fields.push(SourceField {
            name,
            shape,
            column: tag.column,
        });
    }
    Ok(fields)
}

/// 判断字段类型的形态，只接受 `Value` 能承载的内置标量和不带泛型参数的具名类型，其余返回 `None`
pub fn field_shape(module: &LoadedModule, ty: &syn::Type) -> Option<FieldShape> {
    let syn::Type::Path(type_path) = ty else {
        return None;
    };
    if type_path.qself.is_some() {
        return None;
    }
    let mut segments = Vec::with_capacity(type_path.path.segments.len());
    for segment in &type_path.path.segments {
        if !segment.arguments.is_none() {
            return None;
        }
        segments.push(segment.ident.to_string());
    }

    if type_path.path.leading_colon.is_none() && segments.len() == 1 {
        let name = segments[0].as_str();
        if UNSUPPORTED_PRIMITIVES.contains(&name) {
            return None;
        }
        if SCALARS.contains(&name) {
            return Some(FieldShape::Scalar(segments.remove(0)));
        }
    }
    Some(FieldShape::Named(qualify(module, segments)))
}

fn qualify(module: &LoadedModule, segments: Vec<String>) -> Vec<String> {
    let first = segments[0].as_str();
    if let Some(imported) = module.imports.get(first) {
        let mut full = imported.clone();
        full.extend(segments[1..].iter().cloned());
        return resolve_relative(module, full);
    }
    if segments.len() == 1 && declares_type(module, first) {
        let mut full = module.crate_path.clone();
        full.extend(segments);
        return full;
    }
    resolve_relative(module, segments)
}

/// 把开头的 `self`/`super` 换成源模块的 crate 路径
fn resolve_relative(module: &LoadedModule, segments: Vec<String>) -> Vec<String> {
    if !matches!(segments.first().map(String::as_str), Some("self" | "super")) {
        return segments;
    }
    let mut base = module.crate_path.clone();
    let mut rest = segments.as_slice();
    if rest[0] == "self" {
        rest = &rest[1..];
    }
    while rest.first().map(String::as_str) == Some("super") {
        if base.len() > 1 {
            base.pop();
        }
        rest = &rest[1..];
    }
    base.extend(rest.iter().cloned());
    base
}

fn declares_type(module: &LoadedModule, name: &str) -> bool {
    module.file.items.iter().any(|item| match item {
        syn::Item::Struct(item) => item.ident == name,
        syn::Item::Enum(item) => item.ident == name,
        syn::Item::Union(item) => item.ident == name,
        syn::Item::Type(item) => item.ident == name,
        _ => false,
    })
}

//! 生成变更集源文件

use crate::error::{GenerateError, Result};
use crate::inspect::SourceField;
use quote::{format_ident, quote};
use std::path::{Path, PathBuf};

/// 每个生成文件的第一行
pub const GENERATED_NOTICE: &str = "// Code generated by stockroom-gen. DO NOT EDIT.";

/// 输出文件路径：调用文件旁边的 `<stem>_<小写类型名>_gen.<ext>`
pub fn target_path(invoking_file: &Path, type_name: &str) -> PathBuf {
    let stem = invoking_file
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = invoking_file
        .extension()
        .map(|ext| ext.to_string_lossy().into_owned())
        .unwrap_or_else(|| "rs".to_string());
    let file_name = format!("{}_{}_gen.{}", stem, type_name.to_lowercase(), ext);
    match invoking_file.parent() {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}

/// 渲染 `type_name` 的变更集类型及其 `ChangeSet` 实现
///
/// `source_path` 是源类型在 crate 内的路径（以 `crate` 开头），文件头写成 `<package>::<路径>`。
pub fn render(
    package: &str,
    source_path: &[String],
    type_name: &str,
    fields: &[SourceField],
) -> Result<String> {
    let change_set = format_ident!("{}ChangeSet", type_name);
    let struct_doc = format!(
        " Partial update of [`{}`]. `None` leaves the stored column unchanged.",
        source_path.join("::")
    );

    let declarations = fields.iter().map(|field| {
        let name = format_ident!("{}", field.name);
        let ty = field.shape.to_path();
        quote! { pub #name: Option<#ty> }
    });

    let inserts = fields
        .iter()
        .filter_map(|field| {
            let column = field.column.as_ref()?;
            let name = format_ident!("{}", field.name);
            Some(quote! {
                if let Some(value) = &self.#name {
                    map.insert(#column, value);
                }
            })
        })
        .collect::<Vec<_>>();

    let map_binding = if inserts.is_empty() {
        quote! { let map = ::stockroom::ColumnMap::new(); }
    } else {
        quote! { let mut map = ::stockroom::ColumnMap::new(); }
    };

    let tokens = quote! {
        #[doc = #struct_doc]
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct #change_set {
            #(#declarations,)*
        }

        impl ::stockroom::ChangeSet for #change_set {
            fn to_column_map(&self) -> ::stockroom::ColumnMap {
                #map_binding
                #(#inserts)*
                map
            }
        }
    };

    let file: syn::File = syn::parse2(tokens).map_err(|err| GenerateError::Emit {
        name: type_name.to_string(),
        message: err.to_string(),
    })?;

    let within_crate = match source_path.split_first() {
        Some((first, rest)) if first == "crate" => rest,
        _ => source_path,
    };
    Ok(format!(
        "{}\n// source: {}::{}\n\n{}",
        GENERATED_NOTICE,
        package,
        within_crate.join("::"),
        prettyplease::unparse(&file)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspect::FieldShape;

    fn field(name: &str, shape: FieldShape, column: Option<&str>) -> SourceField {
        SourceField {
            name: name.to_string(),
            shape,
            column: column.map(str::to_string),
        }
    }

    fn source_path() -> Vec<String> {
        vec!["crate".into(), "domain".into(), "Product".into()]
    }

    #[test]
    fn test_target_path() {
        assert_eq!(
            target_path(Path::new("src/repository/product.rs"), "Product"),
            PathBuf::from("src/repository/product_product_gen.rs")
        );
        assert_eq!(
            target_path(Path::new("repository_product.rs"), "OrderLine"),
            PathBuf::from("repository_product_orderline_gen.rs")
        );
    }

    #[test]
    fn test_render_declares_optional_fields() {
        let fields = vec![
            field(
                "id",
                FieldShape::Named(vec!["uuid".into(), "Uuid".into()]),
                Some("product_id"),
            ),
            field("name", FieldShape::Scalar("String".into()), Some("name")),
            field("note", FieldShape::Scalar("String".into()), None),
        ];
        let output = render("catalog", &source_path(), "Product", &fields).unwrap();

        assert!(output.starts_with(GENERATED_NOTICE));
        assert!(output.contains("// source: catalog::domain::Product\n"));
        assert!(output.contains("pub struct ProductChangeSet {"));
        assert!(output.contains("pub id: Option<uuid::Uuid>,"));
        assert!(output.contains("pub note: Option<String>,"));
        assert!(output.contains("impl ::stockroom::ChangeSet for ProductChangeSet"));
        assert!(output.contains("map.insert(\"product_id\", value);"));
        assert!(output.contains("map.insert(\"name\", value);"));
        assert!(!output.contains("\"note\""));
    }

    #[test]
    fn test_render_without_tags_has_no_inserts() {
        let fields = vec![field("name", FieldShape::Scalar("String".into()), None)];
        let output = render("catalog", &source_path(), "Product", &fields).unwrap();

        assert!(output.contains("let map = ::stockroom::ColumnMap::new();"));
        assert!(!output.contains("map.insert"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let fields = vec![field("on_sale", FieldShape::Scalar("bool".into()), Some("on_sale"))];
        let first = render("catalog", &source_path(), "Product", &fields).unwrap();
        let second = render("catalog", &source_path(), "Product", &fields).unwrap();
        assert_eq!(first, second);
    }
}

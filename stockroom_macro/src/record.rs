use darling::{FromDeriveInput, FromField};
use itertools::Itertools;
use proc_macro2::Span;
use quote::quote;
use syn::spanned::Spanned;
use syn::{parse2, DeriveInput};

#[derive(Debug, FromDeriveInput)]
#[darling(attributes(record))]
struct RecordOpts {
    ident: syn::Ident,
    generics: syn::Generics,
    table: String,
    data: darling::ast::Data<darling::util::Ignored, RecordFieldOpt>,
}

#[derive(Debug, FromField)]
#[darling(attributes(record))]
struct RecordFieldOpt {
    ident: Option<syn::Ident>,
    #[darling(default)]
    column: Option<String>,
    #[darling(default)]
    primary_key: bool,
}

pub(crate) fn handler(
    input: proc_macro2::TokenStream,
) -> Result<proc_macro2::TokenStream, (Span, String)> {
    let derive_input = parse2::<DeriveInput>(input)
        .map_err(|e| (e.span(), format!("failed to parse input: {}", e)))?;
    let opts = RecordOpts::from_derive_input(&derive_input)
        .map_err(|e| (e.span(), e.to_string()))?;

    let fields = match opts.data {
        darling::ast::Data::Struct(fields) if matches!(fields.style, darling::ast::Style::Struct) => {
            fields
        }
        _ => {
            return Err((
                derive_input.ident.span(),
                "Record can only be derived for structs with named fields".to_string(),
            ));
        }
    };

    // 只有声明了 column 的字段参与映射
    let mapped = fields
        .fields
        .into_iter()
        .filter_map(|field| {
            let column = field.column?;
            field.ident.map(|ident| (ident, column, field.primary_key))
        })
        .collect_vec();

    if let Some(duplicate) = mapped.iter().map(|(_, column, _)| column).duplicates().next() {
        return Err((
            derive_input.span(),
            format!("column `{}` is mapped by more than one field", duplicate),
        ));
    }

    let mut pk_columns = mapped
        .iter()
        .filter(|(_, _, is_pk)| *is_pk)
        .map(|(_, column, _)| column.clone())
        .collect_vec();
    let pk_column = match pk_columns.len() {
        0 => {
            return Err((
                derive_input.span(),
                "missing primary key, using #[record(column = \"...\", primary_key)] to identify"
                    .to_string(),
            ));
        }
        1 => pk_columns.remove(0),
        _ => {
            return Err((
                derive_input.span(),
                "multiple primary keys detected".to_string(),
            ));
        }
    };

    let ident = opts.ident;
    let table_name = opts.table;
    let (impl_generics, ty_generics, where_clause) = opts.generics.split_for_impl();
    let field_idents = mapped.iter().map(|(ident, _, _)| ident).collect_vec();
    let column_names = mapped.iter().map(|(_, column, _)| column).collect_vec();
    let column_count = mapped.len();

    let ret = quote! {
        impl #impl_generics ::stockroom::Record for #ident #ty_generics #where_clause {
            const TABLE_NAME: &'static str = #table_name;
            const PK_COLUMN: &'static str = #pk_column;
            const COLUMN_NAMES: &'static [&'static str] = &[#(#column_names),*];

            fn to_column_map(&self) -> ::stockroom::ColumnMap {
                let mut map = ::stockroom::ColumnMap::with_capacity(#column_count);
                #(map.insert(#column_names, &self.#field_idents);)*
                map
            }
        }
    };
    Ok(ret)
}

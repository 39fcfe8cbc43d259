use proc_macro::TokenStream;

mod record;

/// 派生 Record trait
///
/// 根据字段上的 `#[record(column = "...")]` 生成列映射，没有声明 `column` 的字段不参与映射。
///
/// # Example
/// ```ignore
/// #[derive(Record)]
/// #[record(table = "products")]
/// struct Product {
///     #[record(column = "product_id", primary_key)]
///     id: uuid::Uuid,
///     #[record(column = "name")]
///     name: String,
/// }
/// ```
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record_fn(input: TokenStream) -> TokenStream {
    let stream2 = proc_macro2::TokenStream::from(input);
    match record::handler(stream2) {
        Ok(stream) => proc_macro::TokenStream::from(stream),
        Err((span, msg)) => {
            let error = quote::quote_spanned! {span=>
                compile_error!(#msg);
            };
            proc_macro::TokenStream::from(error)
        }
    }
}

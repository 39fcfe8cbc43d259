use std::path::PathBuf;
use stockroom_gen::GenerateRequest;

// 设置 STOCKROOM_REGENERATE 时重新生成 src/repository/product_product_gen.rs，
// 否则直接使用已提交的文件
fn main() -> Result<(), stockroom_gen::GenerateError> {
    println!("cargo:rerun-if-env-changed=STOCKROOM_REGENERATE");
    println!("cargo:rerun-if-changed=src/domain.rs");

    if std::env::var_os("STOCKROOM_REGENERATE").is_none() {
        return Ok(());
    }

    let manifest_dir = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").unwrap_or_default());
    let request = GenerateRequest {
        source_type: format!("{}.Product", manifest_dir.join("src/domain").display()),
        package: std::env::var("CARGO_PKG_NAME").unwrap_or_else(|_| "catalog".to_string()),
        invoking_file: manifest_dir.join("src/repository/product.rs"),
    };
    let generated = stockroom_gen::generate(&request)?;

    // 内容未变时不写盘，避免触发无意义的重新编译
    let current = std::fs::read_to_string(&generated.path).unwrap_or_default();
    if current != generated.contents {
        stockroom_gen::write(&generated)?;
        println!("cargo:warning=regenerated {}", generated.path.display());
    }
    Ok(())
}

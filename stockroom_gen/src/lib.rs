//! stockroom-gen：从领域记录的声明生成变更集类型
//!
//! 给定 `<module-path>.<TypeName>`，解析模块源码，找到该结构体，为每个字段生成一个
//! `Option` 字段，并为带 `#[record(column = "...")]` 的字段生成 `ChangeSet::to_column_map`。
//! 输出文件写在请求生成的源文件旁边，重复运行结果逐字节相同。

pub mod emit;
pub mod error;
pub mod inspect;
pub mod source;

pub use error::{GenerateError, Result};

use source::SourceType;
use std::path::PathBuf;

/// 一次生成请求
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// `<module-path>.<TypeName>`，例如 `src/domain.Product`
    pub source_type: String,
    /// 请求生成的包名，写入文件头
    pub package: String,
    /// 请求生成的源文件，输出文件放在它旁边
    pub invoking_file: PathBuf,
}

/// 生成结果（尚未写盘）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub path: PathBuf,
    pub contents: String,
}

/// 解析、检查并渲染，不写盘
pub fn generate(request: &GenerateRequest) -> Result<Generated> {
    let source: SourceType = request.source_type.parse()?;
    let module = source::load_module(&source.module)?;
    let item = inspect::lookup_struct(&module, &source.name)?;
    let fields = inspect::source_fields(&module, item)?;

    let mut source_path = module.crate_path.clone();
    source_path.push(source.name.clone());
    let contents = emit::render(&request.package, &source_path, &source.name, &fields)?;

    Ok(Generated {
        path: emit::target_path(&request.invoking_file, &source.name),
        contents,
    })
}

/// 覆盖写入生成的文件
pub fn write(generated: &Generated) -> Result<()> {
    std::fs::write(&generated.path, &generated.contents).map_err(|source| {
        GenerateError::Write {
            path: generated.path.clone(),
            source,
        }
    })?;
    tracing::info!(path = %generated.path.display(), "wrote change-set");
    Ok(())
}

/// 生成并写盘，返回输出文件路径
pub fn run(request: &GenerateRequest) -> Result<PathBuf> {
    let generated = generate(request)?;
    write(&generated)?;
    Ok(generated.path)
}

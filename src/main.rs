//! # nameday 图标批量生成工具 — 应用入口
//!
//! 本文件仅负责日志初始化与流程启动。
//! 业务逻辑分布在各子模块中，详见 `lib.rs` 架构文档。

use nameday_icons::error::AppError;
use nameday_icons::generator::{GeneratorConfig, IconGenerator};

fn run() -> Result<(), AppError> {
    let generator = IconGenerator::new(GeneratorConfig::default());
    generator.generate()?;
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        log::error!("图标生成失败: {err}");
        std::process::exit(1);
    }
}

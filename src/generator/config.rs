//! # 配置模块
//!
//! ## 设计思路
//!
//! 将生成流程涉及的全部路径与重采样策略集中到 `GeneratorConfig`，
//! 保证运行时行为可观测、可测试。本工具不暴露任何用户侧配置入口
//! （无命令行参数、无配置文件），该结构体存在的意义是：
//! `Default` 固化生产约定，测试通过字段注入临时目录实现隔离。
//!
//! ## 实现思路
//!
//! - `Default` 提供与构建约定一致的路径与 Lanczos3 滤镜。
//! - 滤镜使用 `image::imageops::FilterType`，由流水线映射到
//!   `fast_image_resize` 的卷积核。

use std::path::PathBuf;

use image::imageops::FilterType;

use super::manifest::{DEFAULT_ANDROID_RES_ROOT, DEFAULT_IOS_ICONSET_DIR, DEFAULT_SOURCE_PATH};

/// 图标生成配置。
///
/// 字段覆盖了源图位置、两个平台的输出根目录与重采样滤镜。
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// 源图路径（必须可解码为带 alpha 通道的位图）。
    pub source_path: PathBuf,
    /// Android 资源根目录，`mipmap-{density}` 子目录在其下创建。
    pub android_res_root: PathBuf,
    /// iOS asset catalog 目录，所有 `AppIcon-{size}.png` 落在此处。
    pub ios_iconset_dir: PathBuf,
    /// 重采样滤镜策略。
    pub resize_filter: FilterType,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from(DEFAULT_SOURCE_PATH),
            android_res_root: PathBuf::from(DEFAULT_ANDROID_RES_ROOT),
            ios_iconset_dir: PathBuf::from(DEFAULT_IOS_ICONSET_DIR),
            resize_filter: FilterType::Lanczos3,
        }
    }
}

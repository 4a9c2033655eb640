//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 定义全局统一的 `AppError` 枚举，避免各模块中分散的
//! `.map_err(|e| e.to_string())`、`format!(...)`、`expect()` 等不一致模式。
//!
//! 二进制入口统一返回 `Result<(), AppError>`，失败时打印可读错误并以
//! 非零状态码退出。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 为 `IconError` 提供 `From` 转换，无需手动 map。

use crate::generator::IconError;

/// 应用级统一错误类型
///
/// `run()` 返回此类型，保证入口处收到一致的错误格式。
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 图标生成流水线错误（加载 / 解码 / 重采样 / 写盘）
    #[error("{0}")]
    Icon(#[from] IconError),

    /// 文件系统 I/O 错误
    #[error("文件系统错误: {0}")]
    Io(#[from] std::io::Error),
}

//! # nameday 图标批量生成工具 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                   main.rs (二进制入口)                    │
//! │       env_logger 初始化 → run() → 失败时非零退出          │
//! └───────┬──────────────────────────────────────────────────┘
//!         ↕ Result<(), AppError>
//! ┌───────┴──────────────────────────────────────────────────┐
//! │                       库 (Rust)                          │
//! │                                                          │
//! │  ┌─ error ────── AppError (统一错误类型)                 │
//! │  │                                                       │
//! │  └─ generator ── 图标生成流水线                          │
//! │      ├─ manifest   两个平台的静态尺寸清单 + 路径约定     │
//! │      ├─ config     GeneratorConfig (路径与滤镜注入)      │
//! │      ├─ pipeline   精确方形重采样 (fast_image_resize)    │
//! │      ├─ runner     批量编排：加载 → 遍历 → 写盘 → 进度   │
//! │      └─ error      IconError (流水线错误)                │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError`，二进制入口的返回类型 |
//! | [`generator`] | 加载单张源图，按 Android / iOS 尺寸清单批量重采样并写盘 |

pub mod error;
pub mod generator;

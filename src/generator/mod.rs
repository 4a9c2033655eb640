//! # 图标生成模块（generator）
//!
//! ## 设计思路
//!
//! 该模块将“尺寸清单定义 → 源图加载 → 精确重采样 → 写入产物 → 进度输出”
//! 按职责拆分为多个子模块，避免单文件膨胀与耦合。
//!
//! - `manifest`：两个平台的静态尺寸清单与路径约定（唯一的数据来源）
//! - `config`：生成器配置（路径与滤镜，供测试注入）
//! - `runner`：编排整条生成流程
//! - `pipeline`：负责精确方形重采样
//! - `error`：流水线错误模型
//!
//! ## 实现思路
//!
//! 对外仅暴露必要类型，内部细节保持 `mod` 私有。
//! 配置通过 `GeneratorConfig` 注入，提升测试隔离能力。
//!
//! ## 新同事快速上手
//!
//! 可以按下面顺序理解调用链：
//!
//! ```text
//! main.rs（入口）
//!    ↓
//! runner.rs（统一编排 + 阶段日志）
//!    ├─ manifest.rs（尺寸清单 + 输出路径推导）
//!    └─ pipeline.rs（方形重采样 + 回退策略）
//!    ↓
//! 返回 IconError 给入口
//! ```

mod config;
mod error;
mod manifest;
mod pipeline;
mod runner;

pub use config::GeneratorConfig;
pub use error::IconError;
pub use manifest::{ANDROID_DENSITIES, ANDROID_LAUNCHER_FILES, IOS_SIZES};
pub use runner::IconGenerator;

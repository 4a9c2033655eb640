//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `IconGenerator` 只负责流程编排与配置持有，处理链路固定为：
//! 1. 读取并解码源图（一次性，之后只读）
//! 2. 遍历 Android 密度清单：重采样 → 建目录 → 写两份启动图标
//! 3. 遍历 iOS 尺寸清单：重采样 → 写入 asset catalog
//!
//! 各条目相互独立，顺序执行；首个错误即中止，已写产物保留，不回滚。
//! 重复运行会无条件覆盖旧产物，源图不变时输出逐字节一致。
//!
//! ## 实现思路
//!
//! - 进度行走标准输出（下游脚本依赖），诊断走 `log`。
//! - 源图加载拆为“读字节 / 解码”两步，缺文件与坏文件得到不同错误分支。
//! - 记录 `load/android/ios/total` 阶段耗时，便于性能诊断。

use std::fs;
use std::path::Path;
use std::time::Instant;

use image::{DynamicImage, GenericImageView, ImageFormat, RgbaImage};

use super::manifest::{android_mipmap_dir, ios_icon_file};
use super::{ANDROID_DENSITIES, ANDROID_LAUNCHER_FILES, GeneratorConfig, IOS_SIZES, IconError};

/// 图标生成器。
///
/// 持有配置并编排各子模块实现完整流程。
pub struct IconGenerator {
    pub(super) config: GeneratorConfig,
}

impl IconGenerator {
    /// 根据配置创建生成器。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use nameday_icons::generator::{GeneratorConfig, IconGenerator};
    ///
    /// let generator = IconGenerator::new(GeneratorConfig::default());
    /// generator.generate()?;
    /// # Ok::<(), nameday_icons::generator::IconError>(())
    /// ```
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// 执行完整的批量生成流程。
    ///
    /// 源图加载失败时在创建任何输出目录之前中止。
    pub fn generate(&self) -> Result<(), IconError> {
        let total_started = Instant::now();

        let load_started = Instant::now();
        let source = self.load_source()?;
        let (src_width, src_height) = source.dimensions();
        log::info!(
            "✅ 源图加载成功 - 路径: {} 尺寸: {}x{} 耗时: {:?}",
            self.config.source_path.display(),
            src_width,
            src_height,
            load_started.elapsed()
        );

        let android_started = Instant::now();
        self.generate_android(&source)?;
        log::info!(
            "✅ Android 图标完成 - {} 个档位 耗时: {:?}",
            ANDROID_DENSITIES.len(),
            android_started.elapsed()
        );

        let ios_started = Instant::now();
        self.generate_ios(&source)?;
        log::info!(
            "✅ iOS 图标完成 - {} 个尺寸 耗时: {:?}",
            IOS_SIZES.len(),
            ios_started.elapsed()
        );

        println!("All icons created successfully!");
        log::info!("🎉 全部图标生成完成 总耗时: {:?}", total_started.elapsed());

        Ok(())
    }

    /// 读取并解码源图。
    ///
    /// 拆为两步：文件读取失败归为 `FileSystem`，字节解码失败归为
    /// `Decode` / `InvalidFormat`，便于调用侧与测试区分。
    fn load_source(&self) -> Result<DynamicImage, IconError> {
        let path = &self.config.source_path;
        let bytes = fs::read(path).map_err(|e| {
            IconError::FileSystem(format!("读取源图 '{}' 失败: {}", path.display(), e))
        })?;

        image::guess_format(&bytes)
            .map_err(|e| IconError::InvalidFormat(format!("不支持的图片格式：{}", e)))?;

        image::load_from_memory(&bytes)
            .map_err(|e| IconError::Decode(format!("源图解码失败：{}", e)))
    }

    /// Android：每个密度档位一个 mipmap 目录，写入方形 + 圆形两份图标。
    fn generate_android(&self, source: &DynamicImage) -> Result<(), IconError> {
        for (density, size) in ANDROID_DENSITIES {
            let resized = self.resample_square(source, *size)?;

            let dir = android_mipmap_dir(&self.config.android_res_root, density);
            fs::create_dir_all(&dir).map_err(|e| {
                IconError::FileSystem(format!("创建目录 '{}' 失败: {}", dir.display(), e))
            })?;

            for file_name in ANDROID_LAUNCHER_FILES {
                Self::save_png(&resized, &dir.join(file_name))?;
            }

            println!("Created {density}: {size}x{size}");
        }

        Ok(())
    }

    /// iOS：所有尺寸落在同一个 asset catalog 目录，文件名带尺寸标记。
    fn generate_ios(&self, source: &DynamicImage) -> Result<(), IconError> {
        let dir = &self.config.ios_iconset_dir;
        fs::create_dir_all(dir).map_err(|e| {
            IconError::FileSystem(format!("创建目录 '{}' 失败: {}", dir.display(), e))
        })?;

        for size in IOS_SIZES {
            let resized = self.resample_square(source, *size)?;
            Self::save_png(&resized, &dir.join(ios_icon_file(*size)))?;

            println!("Created iOS: {size}x{size}");
        }

        Ok(())
    }

    fn save_png(image: &RgbaImage, path: &Path) -> Result<(), IconError> {
        image
            .save_with_format(path, ImageFormat::Png)
            .map_err(|e| IconError::FileSystem(format!("保存 '{}' 失败: {}", path.display(), e)))
    }
}

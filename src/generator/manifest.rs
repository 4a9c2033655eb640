//! # 尺寸清单与路径约定模块
//!
//! ## 设计思路
//!
//! 两个平台的图标尺寸是构建约定的一部分，不是需要抽象的配置：
//! 下游打包工具按固定目录与文件名查找产物，任何偏差都会导致图标丢失。
//! 因此清单以 `const` 有序切片的形式内嵌，路径推导集中在本模块，
//! 其他模块不手工拼接路径。
//!
//! ## 实现思路
//!
//! - Android：每个密度档位一个 `mipmap-{density}` 子目录，
//!   目录内固定两份文件（方形 + 圆形启动图标，内容相同）。
//! - iOS：所有尺寸落在同一个 asset catalog 目录，
//!   以 `AppIcon-{size}.png` 文件名后缀区分。

use std::path::{Path, PathBuf};

/// 默认源图路径（本工具按约定从项目根目录运行）。
pub const DEFAULT_SOURCE_PATH: &str = "assets/Appimg.png";

/// Android 资源根目录。
pub const DEFAULT_ANDROID_RES_ROOT: &str = "android/app/src/main/res";

/// iOS asset catalog 中 AppIcon 的目录。
pub const DEFAULT_IOS_ICONSET_DIR: &str = "ios/nameday/Images.xcassets/AppIcon.appiconset";

/// Android 密度档位清单：`(密度标签, 方形像素边长)`，按密度升序。
pub const ANDROID_DENSITIES: &[(&str, u32)] = &[
    ("ldpi", 36),
    ("mdpi", 48),
    ("hdpi", 72),
    ("xhdpi", 96),
    ("xxhdpi", 144),
    ("xxxhdpi", 192),
];

/// 每个密度目录内固定写入的两份启动图标文件名。
pub const ANDROID_LAUNCHER_FILES: &[&str] = &["ic_launcher.png", "ic_launcher_round.png"];

/// iOS 图标尺寸清单（像素边长，亦作为文件名中的数字标记）。
pub const IOS_SIZES: &[u32] = &[20, 29, 38, 40, 58, 60, 76, 80, 87, 120, 152, 167, 180];

/// 推导某个密度档位的 mipmap 输出目录。
pub fn android_mipmap_dir(res_root: &Path, density: &str) -> PathBuf {
    res_root.join(format!("mipmap-{density}"))
}

/// 推导 iOS 图标的文件名（数字标记即像素边长）。
pub fn ios_icon_file(size: u32) -> String {
    format!("AppIcon-{size}.png")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_android_manifest_labels_unique_and_positive() {
        let mut labels = HashSet::new();
        for (density, size) in ANDROID_DENSITIES {
            assert!(labels.insert(*density), "duplicate density label: {density}");
            assert!(*size > 0);
        }
        assert_eq!(ANDROID_DENSITIES.len(), 6);
    }

    #[test]
    fn test_ios_manifest_unique_and_positive() {
        let mut sizes = HashSet::new();
        for size in IOS_SIZES {
            assert!(sizes.insert(*size), "duplicate iOS size: {size}");
            assert!(*size > 0);
        }
        assert_eq!(IOS_SIZES.len(), 13);
    }

    #[test]
    fn test_android_mipmap_dir_layout() {
        let dir = android_mipmap_dir(Path::new("android/app/src/main/res"), "xhdpi");
        assert_eq!(dir, Path::new("android/app/src/main/res/mipmap-xhdpi"));
    }

    #[test]
    fn test_ios_icon_file_token_is_decimal_size() {
        assert_eq!(ios_icon_file(20), "AppIcon-20.png");
        assert_eq!(ios_icon_file(180), "AppIcon-180.png");
    }
}

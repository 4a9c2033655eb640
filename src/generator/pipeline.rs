//! # 重采样流水线模块
//!
//! ## 设计思路
//!
//! 将“源图 → 目标边长方形 RGBA”的过程集中管理。图标产物要求精确命中
//! 清单尺寸（宽 = 高 = 目标边长），因此统一走 `resize_exact` 语义：
//! 非方形源图会被压成方形，而不是按比例留边。
//!
//! ## 实现思路
//!
//! 1. 转换 RGBA 后交给 `fast_image_resize` 做卷积重采样
//! 2. 失败时回退 `image::resize_exact`，保证产物仍然生成
//! 3. 校验输出缓冲长度一致性，防御上游库的尺寸异常

use fast_image_resize as fr;
use image::{DynamicImage, ImageBuffer, Rgba, RgbaImage};

use super::{IconError, IconGenerator};

impl IconGenerator {
    /// 将源图重采样为 `size × size` 的 RGBA 图像。
    ///
    /// 目标边长大于源图时执行上采样（质量退化可接受，不报错）。
    pub(crate) fn resample_square(
        &self,
        source: &DynamicImage,
        size: u32,
    ) -> Result<RgbaImage, IconError> {
        if size == 0 {
            return Err(IconError::InvalidFormat("目标边长必须为正整数".to_string()));
        }

        let filter = self.config.resize_filter;

        let resized = match Self::resize_with_fast_image_resize(source, size, size, filter) {
            Ok(resized) => resized,
            Err(err) => {
                log::warn!("⚠️ fast_image_resize 重采样失败，回退 image::resize_exact：{err}");
                source.resize_exact(size, size, filter).to_rgba8()
            }
        };

        let expected_len = (size as usize)
            .checked_mul(size as usize)
            .and_then(|pixels| pixels.checked_mul(4))
            .ok_or_else(|| IconError::ResourceLimit("目标尺寸导致内存溢出风险".to_string()))?;

        if resized.as_raw().len() != expected_len {
            return Err(IconError::Decode("重采样后像素数据长度异常".to_string()));
        }

        Ok(resized)
    }

    fn resize_with_fast_image_resize(
        image: &DynamicImage,
        target_width: u32,
        target_height: u32,
        filter: image::imageops::FilterType,
    ) -> Result<RgbaImage, IconError> {
        let src = image.to_rgba8();
        let (src_width, src_height) = src.dimensions();

        let src_image = fr::images::Image::from_vec_u8(
            src_width,
            src_height,
            src.into_raw(),
            fr::PixelType::U8x4,
        )
        .map_err(|e| IconError::Decode(format!("构建源图像缓冲失败：{}", e)))?;

        let mut dst_image = fr::images::Image::new(target_width, target_height, fr::PixelType::U8x4);

        let mut resizer = fr::Resizer::new();
        let options = fr::ResizeOptions::new().resize_alg(fr::ResizeAlg::Convolution(
            Self::to_fast_filter(filter),
        ));

        resizer
            .resize(&src_image, &mut dst_image, Some(&options))
            .map_err(|e| IconError::Decode(format!("fast_image_resize 执行失败：{}", e)))?;

        ImageBuffer::<Rgba<u8>, Vec<u8>>::from_raw(
            target_width,
            target_height,
            dst_image.into_vec(),
        )
        .ok_or_else(|| IconError::Decode("fast_image_resize 输出缓冲长度异常".to_string()))
    }

    fn to_fast_filter(filter: image::imageops::FilterType) -> fr::FilterType {
        match filter {
            image::imageops::FilterType::Nearest => fr::FilterType::Box,
            image::imageops::FilterType::Triangle => fr::FilterType::Bilinear,
            image::imageops::FilterType::CatmullRom => fr::FilterType::CatmullRom,
            image::imageops::FilterType::Gaussian => fr::FilterType::Mitchell,
            image::imageops::FilterType::Lanczos3 => fr::FilterType::Lanczos3,
        }
    }
}

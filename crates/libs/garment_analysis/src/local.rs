use crate::{
    AnalysisError, PixelSampleProvider, color_name, extract_dominant_color, matching_suggestion,
    predict_category, suggest_occasions, suggest_season,
};
use common_types::{BrightnessAnalysis, GarmentDescriptor};
use image::RgbaImage;
use tracing::debug;

/// Decode an encoded image (jpeg, png, webp, ...) into RGBA pixels.
pub fn decode_image(bytes: &[u8]) -> Result<RgbaImage, AnalysisError> {
    let img = image::load_from_memory(bytes)?.to_rgba8();
    if img.width() == 0 || img.height() == 0 {
        return Err(AnalysisError::EmptyImage);
    }
    Ok(img)
}

/// Wrap an already decoded RGBA buffer.
pub fn pixels_from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<RgbaImage, AnalysisError> {
    let len = data.len();
    if width == 0 || height == 0 {
        return Err(AnalysisError::EmptyImage);
    }
    RgbaImage::from_raw(width, height, data).ok_or(AnalysisError::BufferSize { width, height, len })
}

/// Heuristic classification that needs nothing but the pixels.
#[must_use]
pub fn analyze_local<P: PixelSampleProvider + ?Sized>(source: &P) -> GarmentDescriptor {
    let sample = source.center_sample();
    let rgb = extract_dominant_color(&sample);
    let color = color_name(rgb).to_string();
    let brightness = rgb.brightness();
    let (width, height) = source.dimensions();
    let prediction = predict_category(width, height);
    debug!(
        %color,
        brightness,
        category = %prediction.category,
        sampled = sample.len(),
        "Local garment analysis"
    );

    GarmentDescriptor {
        color_hex: rgb.to_hex(),
        category: prediction.category,
        confidence: prediction.confidence,
        suggested_season: suggest_season(&color, brightness),
        occasions: suggest_occasions(&color, brightness),
        matching: matching_suggestion(rgb),
        analysis: BrightnessAnalysis::from_brightness(brightness),
        color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common_types::{Category, Season};
    use image::{ImageFormat, Rgba};
    use std::io::Cursor;

    #[test]
    fn mid_gray_scenario() {
        let img = RgbaImage::from_pixel(64, 64, Rgba([128, 128, 128, 255]));
        let descriptor = analyze_local(&img);
        assert_eq!(descriptor.color, "gray");
        assert_eq!(descriptor.color_hex, "#808080");
        assert!((descriptor.analysis.brightness - 128.0).abs() < f64::EPSILON);
        assert!(!descriptor.analysis.is_light);
        assert!(!descriptor.analysis.is_dark);
        assert_eq!(descriptor.category, Category::Top);
        assert_eq!(descriptor.suggested_season, Season::All);
        assert!(!descriptor.occasions.is_empty());
    }

    #[test]
    fn decodes_png_bytes() -> Result<(), Box<dyn std::error::Error>> {
        let img = RgbaImage::from_pixel(40, 80, Rgba([40, 30, 160, 255]));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        let decoded = decode_image(&bytes)?;
        let descriptor = analyze_local(&decoded);
        assert_eq!(descriptor.color, "blue");
        assert_eq!(descriptor.category, Category::Top);
        assert!((descriptor.confidence - 0.75).abs() < f32::EPSILON);
        Ok(())
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        assert!(matches!(
            decode_image(b"definitely not an image"),
            Err(AnalysisError::ImageDecode(_))
        ));
    }

    #[test]
    fn raw_buffer_must_match_dimensions() {
        assert!(pixels_from_raw(2, 2, vec![0; 16]).is_ok());
        assert!(matches!(
            pixels_from_raw(2, 2, vec![0; 15]),
            Err(AnalysisError::BufferSize { len: 15, .. })
        ));
        assert!(matches!(
            pixels_from_raw(0, 2, vec![]),
            Err(AnalysisError::EmptyImage)
        ));
    }
}

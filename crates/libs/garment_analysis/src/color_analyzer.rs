use common_types::{ColorName, Rgb};
use image::RgbaImage;

/// Pixels darker than this are treated as shadow or background.
pub const SHADOW_CUTOFF: f64 = 30.0;
/// Pixels brighter than this are treated as highlight or background.
pub const HIGHLIGHT_CUTOFF: f64 = 225.0;

/// Rectangle of an image, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl SampleRegion {
    /// Centered square with a side of a quarter of the shorter dimension.
    /// Garment photos usually have a plain border, so the center is the most
    /// reliable place to read the fabric color.
    #[must_use]
    pub fn centered(width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        let side = (width.min(height) / 4).max(1);
        Some(Self {
            x: width / 2 - side / 2,
            y: height / 2 - side / 2,
            width: side,
            height: side,
        })
    }
}

/// Source of pixels for color extraction, independent of how the image was decoded.
pub trait PixelSampleProvider {
    /// `(width, height)` of the full image.
    fn dimensions(&self) -> (u32, u32);

    /// RGBA pixels inside `region`, row by row.
    fn pixels_in(&self, region: SampleRegion) -> Vec<[u8; 4]>;

    /// Pixels of the canonical center sample.
    fn center_sample(&self) -> Vec<[u8; 4]> {
        let (width, height) = self.dimensions();
        SampleRegion::centered(width, height).map_or_else(Vec::new, |region| self.pixels_in(region))
    }
}

impl PixelSampleProvider for RgbaImage {
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn pixels_in(&self, region: SampleRegion) -> Vec<[u8; 4]> {
        let x_end = region.x.saturating_add(region.width).min(self.width());
        let y_end = region.y.saturating_add(region.height).min(self.height());
        (region.y..y_end)
            .flat_map(|y| (region.x..x_end).map(move |x| self.get_pixel(x, y).0))
            .collect()
    }
}

/// Average color of the pixels that are neither too dark nor too bright.
///
/// When every pixel is filtered out the divisor is floored at one, which
/// yields black rather than a division by zero.
#[must_use]
pub fn extract_dominant_color(pixels: &[[u8; 4]]) -> Rgb {
    let mut sums = [0u64; 3];
    let mut count = 0u64;
    for [red, green, blue, _alpha] in pixels {
        let rgb = Rgb::new(*red, *green, *blue);
        let brightness = rgb.brightness();
        if brightness > SHADOW_CUTOFF && brightness < HIGHLIGHT_CUTOFF {
            sums[0] += u64::from(*red);
            sums[1] += u64::from(*green);
            sums[2] += u64::from(*blue);
            count += 1;
        }
    }
    let count = count.max(1) as f64;
    let mean = |sum: u64| (sum as f64 / count).round().clamp(0.0, 255.0) as u8;
    Rgb::new(mean(sums[0]), mean(sums[1]), mean(sums[2]))
}

/// Buckets a color into the named vocabulary. Rules are checked in order and
/// the first match wins, so every triple maps to exactly one name.
#[must_use]
pub fn color_name(rgb: Rgb) -> ColorName {
    let spread = rgb.max_channel() - rgb.min_channel();
    let brightness = rgb.brightness();
    let (r, g, b) = (
        f64::from(rgb.red),
        f64::from(rgb.green),
        f64::from(rgb.blue),
    );

    if spread < 30 {
        return match brightness {
            x if x < 50.0 => ColorName::Black,
            x if x < 100.0 => ColorName::DarkGray,
            x if x < 150.0 => ColorName::Gray,
            x if x < 200.0 => ColorName::LightGray,
            _ => ColorName::White,
        };
    }

    if r > g && r > b {
        return if g > b * 1.5 {
            ColorName::Orange
        } else if b > g {
            ColorName::Pink
        } else {
            ColorName::Red
        };
    }
    if g > r && g > b {
        return if r > b * 1.2 {
            ColorName::YellowGreen
        } else if b > r * 1.2 {
            ColorName::Cyan
        } else {
            ColorName::Green
        };
    }
    if b > r && b > g {
        return if r > g * 1.5 {
            ColorName::Purple
        } else if g > r {
            ColorName::Teal
        } else {
            ColorName::Blue
        };
    }

    // Two channels tie for the maximum.
    if r > 200.0 && g > 180.0 && b < 100.0 {
        return ColorName::Yellow;
    }
    if r > 150.0 && g < 100.0 && b > 150.0 {
        return ColorName::Magenta;
    }
    ColorName::MixedColor
}

#[must_use]
pub fn rgb_to_hex(rgb: Rgb) -> String {
    rgb.to_hex()
}

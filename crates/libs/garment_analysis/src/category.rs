use common_types::{Category, CategoryPrediction};

/// Guess the garment category from the photo's aspect ratio alone.
///
/// Confidence never exceeds 0.75; callers should ask the user before
/// applying anything at or below 0.6.
#[must_use]
pub fn predict_category(width: u32, height: u32) -> CategoryPrediction {
    let (category, confidence) = if height == 0 {
        (Category::Top, 0.6)
    } else {
        let aspect_ratio = f64::from(width) / f64::from(height);
        if aspect_ratio > 1.2 {
            (Category::Pants, 0.7)
        } else if aspect_ratio < 0.8 {
            if f64::from(height) > f64::from(width) * 1.5 {
                (Category::Top, 0.75)
            } else {
                (Category::Shoes, 0.65)
            }
        } else {
            (Category::Top, 0.6)
        }
    };
    CategoryPrediction {
        category,
        confidence,
    }
}

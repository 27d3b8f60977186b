use common_types::{ColorName, Season};

pub mod occasions {
    pub const FORMAL: &str = "formal";
    pub const BUSINESS_MEETING: &str = "business meeting";
    pub const CASUAL_OUTING: &str = "casual outing";
    pub const DAILY_COMMUTE: &str = "daily commute";
    pub const FITNESS: &str = "fitness/sport";
    pub const DATE: &str = "date/social";
}

fn is_one_of(color: Option<ColorName>, set: &[ColorName]) -> bool {
    color.is_some_and(|c| set.contains(&c))
}

/// Season a garment suits best. Bright colors lean towards spring and summer,
/// dark ones towards autumn and winter.
#[must_use]
pub fn suggest_season(color: &str, brightness: f64) -> Season {
    let color = ColorName::parse_lenient(color);
    if brightness > 180.0 {
        if is_one_of(
            color,
            &[
                ColorName::Yellow,
                ColorName::Pink,
                ColorName::LightBlue,
                ColorName::White,
            ],
        ) {
            return Season::Summer;
        }
        return Season::Spring;
    }
    if brightness < 100.0 {
        if is_one_of(
            color,
            &[ColorName::Navy, ColorName::Black, ColorName::DarkGray],
        ) {
            return Season::Winter;
        }
        return Season::Autumn;
    }
    if is_one_of(color, &[ColorName::Orange, ColorName::Brown, ColorName::Tan]) {
        return Season::Autumn;
    }
    Season::All
}

/// Occasions a garment fits, in a stable order. Never empty.
#[must_use]
pub fn suggest_occasions(color: &str, brightness: f64) -> Vec<String> {
    let color = ColorName::parse_lenient(color);
    let mut result = Vec::new();

    if is_one_of(
        color,
        &[
            ColorName::Black,
            ColorName::White,
            ColorName::Navy,
            ColorName::Gray,
        ],
    ) {
        result.extend([occasions::FORMAL, occasions::BUSINESS_MEETING]);
    }
    if brightness > 150.0
        || is_one_of(color, &[ColorName::Blue, ColorName::Green, ColorName::Yellow])
    {
        result.extend([occasions::CASUAL_OUTING, occasions::DAILY_COMMUTE]);
    }
    if is_one_of(
        color,
        &[
            ColorName::Black,
            ColorName::Gray,
            ColorName::Navy,
            ColorName::Red,
        ],
    ) {
        result.push(occasions::FITNESS);
    }
    if brightness > 120.0
        && is_one_of(
            color,
            &[
                ColorName::Pink,
                ColorName::Red,
                ColorName::White,
                ColorName::LightBlue,
            ],
        )
    {
        result.push(occasions::DATE);
    }

    if result.is_empty() {
        result.push(occasions::DAILY_COMMUTE);
    }
    result.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bright_colors_are_spring_or_summer() {
        assert_eq!(suggest_season("white", 240.0), Season::Summer);
        assert_eq!(suggest_season("粉色", 190.0), Season::Summer);
        assert_eq!(suggest_season("light-gray", 190.0), Season::Spring);
    }

    #[test]
    fn dark_colors_are_autumn_or_winter() {
        assert_eq!(suggest_season("black", 20.0), Season::Winter);
        assert_eq!(suggest_season("深蓝", 60.0), Season::Winter);
        assert_eq!(suggest_season("purple", 80.0), Season::Autumn);
    }

    #[test]
    fn mid_tones() {
        assert_eq!(suggest_season("orange", 140.0), Season::Autumn);
        assert_eq!(suggest_season("brown", 100.0), Season::Autumn);
        assert_eq!(suggest_season("gray", 128.0), Season::All);
        assert_eq!(suggest_season("gray", 180.0), Season::All);
    }

    #[test]
    fn formal_and_sport_colors() {
        assert_eq!(
            suggest_occasions("black", 20.0),
            vec!["formal", "business meeting", "fitness/sport"]
        );
    }

    #[test]
    fn bright_date_colors() {
        assert_eq!(
            suggest_occasions("white", 240.0),
            vec![
                "formal",
                "business meeting",
                "casual outing",
                "daily commute",
                "date/social"
            ]
        );
        assert_eq!(
            suggest_occasions("red", 121.0),
            vec!["fitness/sport", "date/social"]
        );
        assert_eq!(suggest_occasions("red", 90.0), vec!["fitness/sport"]);
    }

    #[test]
    fn defaults_to_daily_commute() {
        assert_eq!(suggest_occasions("purple", 90.0), vec!["daily commute"]);
        assert_eq!(suggest_occasions("藏青色", 140.0), vec!["daily commute"]);
    }

    #[test]
    fn mid_gray_occasions() {
        assert_eq!(
            suggest_occasions("gray", 128.0),
            vec!["formal", "business meeting", "fitness/sport"]
        );
    }
}

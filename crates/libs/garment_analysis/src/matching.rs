use common_types::{ColorConflictReport, ColorName, MatchingSuggestion, Rgb};

const SAFE_NEUTRALS: [ColorName; 4] = [
    ColorName::Black,
    ColorName::White,
    ColorName::Gray,
    ColorName::Beige,
];

pub const TIP_DARK: &str = "Dark garment: pair it with light or bright colors.";
pub const TIP_LIGHT: &str = "Light garment: pair it with dark or vivid colors.";
pub const TIP_VERSATILE: &str = "Mid-tone garment: versatile, pairs with most colors.";

fn names(colors: &[ColorName]) -> Vec<String> {
    colors.iter().map(ToString::to_string).collect()
}

/// Palette and styling tip for a garment's dominant color.
#[must_use]
pub fn matching_suggestion(rgb: Rgb) -> MatchingSuggestion {
    let Rgb { red, green, blue } = rgb;
    let (complementary, analogous): (&[ColorName], &[ColorName]) =
        if red > green && red > blue {
            (
                &[ColorName::Green, ColorName::Cyan, ColorName::Blue],
                &[ColorName::Orange, ColorName::Pink, ColorName::Purple],
            )
        } else if green > red && green > blue {
            (
                &[ColorName::Red, ColorName::Pink, ColorName::Magenta],
                &[ColorName::YellowGreen, ColorName::Cyan, ColorName::Blue],
            )
        } else if blue > red && blue > green {
            (
                &[ColorName::Orange, ColorName::Yellow, ColorName::Red],
                &[ColorName::Purple, ColorName::Cyan, ColorName::Teal],
            )
        } else {
            (&[], &[])
        };

    let brightness = rgb.brightness();
    let tip = if brightness < 100.0 {
        TIP_DARK
    } else if brightness > 200.0 {
        TIP_LIGHT
    } else {
        TIP_VERSATILE
    };

    MatchingSuggestion {
        tip: tip.to_string(),
        safe: names(&SAFE_NEUTRALS),
        complementary: names(complementary),
        analogous: names(analogous),
    }
}

/// Colors that clash with `color`. The table is directional: a pair is only
/// listed under the color that is looked up.
#[must_use]
pub const fn conflicting_colors(color: ColorName) -> &'static [ColorName] {
    match color {
        ColorName::Red => &[ColorName::Green, ColorName::Orange],
        ColorName::Green => &[ColorName::Red, ColorName::Pink],
        ColorName::Blue => &[ColorName::Orange],
        ColorName::Orange => &[ColorName::Blue, ColorName::Purple],
        ColorName::Purple => &[ColorName::Yellow, ColorName::Orange],
        ColorName::Yellow => &[ColorName::Purple],
        _ => &[],
    }
}

/// Checks whether `second` is in the conflict list of `first`. Only that
/// direction is consulted; check `(second, first)` as well for symmetry.
/// Names outside the vocabulary never conflict.
#[must_use]
pub fn check_color_conflict(first: &str, second: &str) -> ColorConflictReport {
    let (Some(a), Some(b)) = (
        ColorName::parse_lenient(first),
        ColorName::parse_lenient(second),
    ) else {
        return ColorConflictReport::none();
    };
    if conflicting_colors(a).contains(&b) {
        ColorConflictReport {
            has_conflict: true,
            warning: Some(format!(
                "{} and {} may clash; add a neutral piece to bridge them.",
                first.trim(),
                second.trim()
            )),
        }
    } else {
        ColorConflictReport::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_palette_is_always_neutral() {
        for rgb in [Rgb::new(0, 0, 0), Rgb::new(200, 30, 30), Rgb::new(30, 30, 200)] {
            assert_eq!(
                matching_suggestion(rgb).safe,
                vec!["black", "white", "gray", "beige"]
            );
        }
    }

    #[test]
    fn palettes_follow_dominant_channel() {
        let red = matching_suggestion(Rgb::new(200, 30, 30));
        assert_eq!(red.complementary, vec!["green", "cyan", "blue"]);
        assert_eq!(red.analogous, vec!["orange", "pink", "purple"]);

        let green = matching_suggestion(Rgb::new(30, 200, 30));
        assert_eq!(green.complementary, vec!["red", "pink", "magenta"]);

        let blue = matching_suggestion(Rgb::new(30, 30, 200));
        assert_eq!(blue.analogous, vec!["purple", "cyan", "teal"]);

        let gray = matching_suggestion(Rgb::new(128, 128, 128));
        assert!(gray.complementary.is_empty());
        assert!(gray.analogous.is_empty());
    }

    #[test]
    fn tip_by_brightness() {
        assert_eq!(matching_suggestion(Rgb::new(20, 20, 90)).tip, TIP_DARK);
        assert_eq!(matching_suggestion(Rgb::new(250, 240, 230)).tip, TIP_LIGHT);
        assert_eq!(matching_suggestion(Rgb::new(128, 128, 128)).tip, TIP_VERSATILE);
    }

    #[test]
    fn red_and_green_conflict() {
        let report = check_color_conflict("红色", "绿色");
        assert!(report.has_conflict);
        assert!(report.warning.is_some_and(|w| !w.is_empty()));
    }

    #[test]
    fn red_and_blue_do_not_conflict() {
        assert_eq!(check_color_conflict("红色", "蓝色"), ColorConflictReport::none());
        assert_eq!(check_color_conflict("red", "blue"), ColorConflictReport::none());
    }

    #[test]
    fn lookup_is_directional() {
        assert!(check_color_conflict("green", "pink").has_conflict);
        assert!(!check_color_conflict("pink", "green").has_conflict);
    }

    #[test]
    fn unknown_names_never_conflict() {
        assert!(!check_color_conflict("藏青色", "red").has_conflict);
        assert!(!check_color_conflict("", "").has_conflict);
    }
}

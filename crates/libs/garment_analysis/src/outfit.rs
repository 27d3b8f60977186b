use crate::check_color_conflict;
use common_types::{CatalogGarment, Category, OutfitCandidate, OutfitCheck, OutfitSelection, Season};
use tracing::debug;

/// Reports every clashing color pair in an outfit. Each pair is looked up in
/// both directions and reported at most once. Never blocks saving.
#[must_use]
pub fn check_outfit(candidate: &OutfitCandidate) -> OutfitCheck {
    let colors = candidate.colors();
    if colors.len() < 2 {
        return OutfitCheck {
            ok: true,
            warnings: vec![],
        };
    }

    let mut warnings = Vec::new();
    for (i, first) in colors.iter().enumerate() {
        for second in &colors[i + 1..] {
            let forward = check_color_conflict(first, second);
            let report = if forward.has_conflict {
                forward
            } else {
                check_color_conflict(second, first)
            };
            if let Some(warning) = report.warning {
                warnings.push(warning);
            }
        }
    }
    debug!(colors = colors.len(), conflicts = warnings.len(), "Checked outfit colors");

    OutfitCheck {
        ok: warnings.is_empty(),
        warnings,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratedOutfit {
    Selected(OutfitSelection),
    /// Nothing in the catalog suits the season; retry with `ignore_season`.
    NoSeasonalMatch,
    EmptyCatalog,
}

/// Picks one random garment per category, preferring those that suit `season`.
pub fn generate_random_outfit(
    catalog: &[CatalogGarment],
    season: Season,
    ignore_season: bool,
    rng: &mut fastrand::Rng,
) -> GeneratedOutfit {
    if catalog.is_empty() {
        return GeneratedOutfit::EmptyCatalog;
    }
    let wearable = |garment: &CatalogGarment| {
        ignore_season || season == Season::All || garment.season.suits(season)
    };

    let mut selection = OutfitSelection::default();
    for category in Category::ALL {
        let candidates: Vec<&CatalogGarment> = catalog
            .iter()
            .filter(|g| g.category == category && wearable(*g))
            .collect();
        if candidates.is_empty() {
            continue;
        }
        let pick = candidates[rng.usize(..candidates.len())];
        selection.set(category, Some(pick.id.clone()));
    }

    if selection.is_empty() {
        GeneratedOutfit::NoSeasonalMatch
    } else {
        GeneratedOutfit::Selected(selection)
    }
}

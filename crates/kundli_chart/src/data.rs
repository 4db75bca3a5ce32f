//! Text placed on the chart, keyed by house number.

use std::collections::BTreeMap;

use kundli_vedic_base::{AscendantMap, HOUSE_COUNT, PlanetPositions};

/// Per-house text. Any map may be empty; missing houses render blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartData {
    /// Bold label drawn above each anchor.
    pub house_labels: BTreeMap<u8, String>,
    /// Sign drawn below each anchor.
    pub ascendants: BTreeMap<u8, String>,
    /// Body abbreviations drawn on each anchor.
    pub occupants: BTreeMap<u8, Vec<String>>,
}

impl ChartData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Label every house with its number.
    pub fn with_house_numbers(mut self) -> Self {
        self.house_labels = (1..=HOUSE_COUNT).map(|h| (h, h.to_string())).collect();
        self
    }

    pub fn with_ascendants(mut self, map: &AscendantMap) -> Self {
        self.ascendants = map
            .iter()
            .map(|(h, r)| (h, r.western_name().to_string()))
            .collect();
        self
    }

    pub fn with_positions(mut self, positions: &PlanetPositions) -> Self {
        self.occupants = (1..=HOUSE_COUNT)
            .filter_map(|house| {
                let bodies = positions.bodies_in_house(house);
                (!bodies.is_empty()).then(|| {
                    let names: Vec<String> =
                        bodies.iter().map(|b| b.short_name().to_string()).collect();
                    (house, names)
                })
            })
            .collect();
        self
    }

    pub fn house_label(&self, house: u8) -> &str {
        self.house_labels.get(&house).map_or("", String::as_str)
    }

    pub fn ascendant(&self, house: u8) -> &str {
        self.ascendants.get(&house).map_or("", String::as_str)
    }

    /// Occupants joined with spaces, empty when none.
    pub fn occupant_line(&self, house: u8) -> String {
        self.occupants
            .get(&house)
            .map(|v| v.join(" "))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use kundli_core::Body;
    use kundli_vedic_base::{ALL_RASHIS, PlanetPosition, Rashi};

    use super::*;

    #[test]
    fn empty_by_default() {
        let d = ChartData::new();
        assert_eq!(d.house_label(1), "");
        assert_eq!(d.ascendant(1), "");
        assert_eq!(d.occupant_line(1), "");
    }

    #[test]
    fn house_numbers_cover_all_twelve() {
        let d = ChartData::new().with_house_numbers();
        assert_eq!(d.house_labels.len(), 12);
        assert_eq!(d.house_label(10), "10");
    }

    #[test]
    fn ascendants_use_western_names() {
        let d = ChartData::new().with_ascendants(&AscendantMap::new(ALL_RASHIS));
        assert_eq!(d.ascendant(1), "Aries");
        assert_eq!(d.ascendant(12), "Pisces");
    }

    #[test]
    fn occupants_grouped_by_house() {
        let mk = |body, house| PlanetPosition {
            body,
            house,
            sign: Rashi::Mesha,
            degree: 0.0,
        };
        let p = PlanetPositions::new(vec![
            mk(Body::Sun, 4),
            mk(Body::Mercury, 4),
            mk(Body::Ketu, 10),
        ]);
        let d = ChartData::new().with_positions(&p);
        assert_eq!(d.occupant_line(4), "Su Me");
        assert_eq!(d.occupant_line(10), "Ke");
        assert_eq!(d.occupant_line(1), "");
        assert_eq!(d.occupants.len(), 2);
    }
}

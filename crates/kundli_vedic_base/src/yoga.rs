//! Yoga rules triggered by single-body house placements.

use kundli_core::Body;

use crate::positions::PlanetPositions;

/// One rule: `body` sitting in `house` triggers `message`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YogaRule {
    pub name: &'static str,
    pub body: Body,
    pub house: u8,
    pub message: &'static str,
}

/// Rules in evaluation order.
pub static YOGA_RULES: [YogaRule; 3] = [
    YogaRule {
        name: "Raja Yoga",
        body: Body::Jupiter,
        house: 9,
        message: "Raja Yoga: Jupiter in the 9th house indicates good fortune and success.",
    },
    YogaRule {
        name: "Dhana Yoga",
        body: Body::Venus,
        house: 7,
        message: "Dhana Yoga: Venus in the 7th house signifies wealth and good relationships.",
    },
    YogaRule {
        name: "Karma Yoga",
        body: Body::Saturn,
        house: 10,
        message: "Karma Yoga: Saturn in the 10th house indicates discipline and career growth.",
    },
];

pub const NO_YOGA_MESSAGE: &str = "No significant yogas identified.";

/// Outcome of yoga evaluation. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YogaResult {
    triggered: Vec<&'static YogaRule>,
}

impl YogaResult {
    /// Rules that fired, in table order.
    pub fn triggered(&self) -> &[&'static YogaRule] {
        &self.triggered
    }

    /// Messages to show; the fallback line when nothing fired.
    pub fn messages(&self) -> Vec<&'static str> {
        if self.triggered.is_empty() {
            vec![NO_YOGA_MESSAGE]
        } else {
            self.triggered.iter().map(|r| r.message).collect()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.triggered.is_empty()
    }
}

/// Evaluate [`YOGA_RULES`] against the chart's placements.
pub fn evaluate_yogas(positions: &PlanetPositions) -> YogaResult {
    let triggered = YOGA_RULES
        .iter()
        .filter(|rule| positions.house_of(rule.body) == Some(rule.house))
        .collect();
    YogaResult { triggered }
}

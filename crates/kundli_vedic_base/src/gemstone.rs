//! Gemstone (ratna) recommendation per body.

use kundli_core::Body;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gemstone {
    pub body: Body,
    pub stone: &'static str,
    pub benefit: &'static str,
}

impl std::fmt::Display for Gemstone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.stone, self.benefit)
    }
}

/// One entry per body, in [`kundli_core::ALL_BODIES`] order.
pub static GEMSTONES: [Gemstone; 9] = [
    Gemstone {
        body: Body::Sun,
        stone: "Ruby",
        benefit: "for vitality and confidence.",
    },
    Gemstone {
        body: Body::Moon,
        stone: "Pearl",
        benefit: "for emotional balance.",
    },
    Gemstone {
        body: Body::Mars,
        stone: "Red Coral",
        benefit: "for courage and strength.",
    },
    Gemstone {
        body: Body::Mercury,
        stone: "Emerald",
        benefit: "for intelligence and communication.",
    },
    Gemstone {
        body: Body::Jupiter,
        stone: "Yellow Sapphire",
        benefit: "for prosperity and wisdom.",
    },
    Gemstone {
        body: Body::Venus,
        stone: "Diamond",
        benefit: "for love and beauty.",
    },
    Gemstone {
        body: Body::Saturn,
        stone: "Blue Sapphire",
        benefit: "for discipline and focus.",
    },
    Gemstone {
        body: Body::Rahu,
        stone: "Hessonite",
        benefit: "for overcoming obstacles.",
    },
    Gemstone {
        body: Body::Ketu,
        stone: "Cat's Eye",
        benefit: "for spiritual growth.",
    },
];

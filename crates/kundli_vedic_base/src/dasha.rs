//! Dasha (planetary period) sequence.
//!
//! A fixed three-period placeholder; no period lengths are computed.

use kundli_core::Body;

/// One labelled period and its ruling body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashaPeriod {
    pub label: &'static str,
    pub lord: Body,
}

/// Current, next and following periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashaSequence {
    pub current: DashaPeriod,
    pub next: DashaPeriod,
    pub following: DashaPeriod,
}

impl DashaSequence {
    /// Periods in order.
    pub fn periods(&self) -> [DashaPeriod; 3] {
        [self.current, self.next, self.following]
    }
}

pub const DASHA_SEQUENCE: DashaSequence = DashaSequence {
    current: DashaPeriod {
        label: "Current Dasha",
        lord: Body::Jupiter,
    },
    next: DashaPeriod {
        label: "Next Dasha",
        lord: Body::Saturn,
    },
    following: DashaPeriod {
        label: "Following Dasha",
        lord: Body::Mercury,
    },
};

pub fn dasha_sequence() -> DashaSequence {
    DASHA_SEQUENCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_lords() {
        let lords: Vec<Body> = dasha_sequence().periods().iter().map(|p| p.lord).collect();
        assert_eq!(lords, vec![Body::Jupiter, Body::Saturn, Body::Mercury]);
    }

    #[test]
    fn labels_in_order() {
        let labels: Vec<&str> = DASHA_SEQUENCE.periods().iter().map(|p| p.label).collect();
        assert_eq!(labels, vec!["Current Dasha", "Next Dasha", "Following Dasha"]);
    }
}

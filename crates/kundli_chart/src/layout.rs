//! Fixed diamond geometry in chart units ([-1, 1] on both axes, +y up).

/// Anchor point of one house.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseDiagramPoint {
    pub house: u8,
    pub x: f64,
    pub y: f64,
}

const fn pt(house: u8, x: f64, y: f64) -> HouseDiagramPoint {
    HouseDiagramPoint { house, x, y }
}

/// Anchors for houses 1..=12, in house order.
pub const DIAMOND_POINTS: [HouseDiagramPoint; 12] = [
    pt(1, 0.0, 0.6),
    pt(2, 0.3, 0.3),
    pt(3, 0.6, 0.0),
    pt(4, 0.3, -0.3),
    pt(5, 0.0, -0.6),
    pt(6, -0.3, -0.3),
    pt(7, -0.6, 0.0),
    pt(8, -0.3, 0.3),
    pt(9, 0.6, 0.6),
    pt(10, 0.6, -0.6),
    pt(11, -0.6, -0.6),
    pt(12, -0.6, 0.6),
];

/// Grid quadrilaterals as house numbers; the last vertex repeats the first.
pub const DIAMOND_POLYGONS: [[u8; 5]; 4] = [
    [1, 9, 3, 10, 1],
    [5, 10, 7, 11, 5],
    [1, 8, 7, 12, 1],
    [3, 9, 11, 6, 3],
];

/// Vertical distance of the house label (above) and sign (below) from the anchor.
pub const LABEL_OFFSET: f64 = 0.08;

/// Anchor of `house`; `None` outside [1, 12].
pub fn point_for(house: u8) -> Option<HouseDiagramPoint> {
    if (1..=12).contains(&house) {
        Some(DIAMOND_POINTS[(house - 1) as usize])
    } else {
        None
    }
}

/// `(x, y)` vertices of grid polygon `index` (0..4), closing vertex included.
pub fn polygon_vertices(index: usize) -> Option<[(f64, f64); 5]> {
    let houses = DIAMOND_POLYGONS.get(index)?;
    let mut out = [(0.0, 0.0); 5];
    for (slot, &house) in out.iter_mut().zip(houses) {
        let p = point_for(house)?;
        *slot = (p.x, p.y);
    }
    Some(out)
}

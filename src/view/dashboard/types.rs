/// The four strokes-gained components every chart works from, in axis order.
pub const SKILL_CATEGORIES: [&str; 4] = ["OTT", "APP", "ARG", "PUTT"];

/// One vertex of a radar polygon, in unit coordinates centered on the origin
/// (y grows downward, matching the SVG viewport).
#[derive(Debug, Clone, Copy)]
pub struct RadarPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone)]
pub struct RadarSeries {
    pub player_name: String,
    pub short_name: String,
    pub points: Vec<RadarPoint>,
}

/// Radar projection of the top 5 players. All four axes share one scale.
#[derive(Debug, Clone, Default)]
pub struct RadarChart {
    /// The shared scale: largest absolute component value across every
    /// plotted player and axis (1.0 when the data is all zero).
    pub scale: f64,
    pub series: Vec<RadarSeries>,
}

/// One scatter mark in data space: putting on x, ball-striking sum on y.
#[derive(Debug, Clone)]
pub struct ScatterPoint {
    pub player_name: String,
    pub short_name: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Default)]
pub struct ScatterChart {
    pub points: Vec<ScatterPoint>,
    /// Half-range of the x axis, at least 1.0 so the zero line stays useful.
    pub x_range: f64,
    /// Half-range of the y axis, same floor.
    pub y_range: f64,
}

/// Which side of the zero line a diverging bar sits on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Direction {
    Above,
    Below,
}

#[derive(Debug, Clone)]
pub struct RankingBar {
    pub short_name: String,
    pub sg_total: f64,
    /// Signed share of the scale, in [-1, 1].
    pub fraction: f64,
    pub direction: Direction,
}

/// Diverging-bar projection of the top 10 players' total strokes gained.
#[derive(Debug, Clone, Default)]
pub struct RankingBars {
    pub max_abs: f64,
    pub bars: Vec<RankingBar>,
}

#[derive(Debug, Clone)]
pub struct CategoryPoint {
    pub label: &'static str,
    pub average: f64,
    /// Evenly spaced category position in [0, 1].
    pub x: f64,
    /// Average as a signed share of the symmetric range, in [-1, 1].
    pub y: f64,
}

/// Single-line projection of the top-10 subset's component averages.
#[derive(Debug, Clone, Default)]
pub struct CategoryLine {
    /// Symmetric half-range: the largest absolute component average.
    pub range: f64,
    pub points: Vec<CategoryPoint>,
}

mod common;

use fairway_pulse::view::dashboard::{
    Direction, project_category_line, project_radar, project_ranking_bars, project_scatter,
};

#[test]
fn test_radar_takes_top_five_and_shares_one_scale() {
    let roster = vec![
        common::player("Sixth Man", -0.5, -0.1, -0.2, -0.1, -0.1),
        common::player("Big Driver", 2.0, 1.8, 0.1, 0.0, 0.1),
        common::player("Iron Master", 1.8, 0.2, 1.2, 0.2, 0.2),
        common::player("Scrambler", 1.5, 0.1, 0.2, 0.9, 0.3),
        common::player("Putter", 1.2, 0.0, 0.1, 0.1, 1.0),
        common::player("Steady", 1.0, 0.3, 0.3, 0.2, 0.2),
    ];

    let chart = project_radar(&roster);
    assert_eq!(chart.series.len(), 5);
    // the bottom player never makes the cut
    assert!(chart.series.iter().all(|s| s.player_name != "Sixth Man"));
    // shared scale is the single largest absolute axis value among the five
    assert!((chart.scale - 1.8).abs() < 1e-9);

    // Big Driver's OTT vertex points straight up at 1.8 / 1.8 = full radius
    let big_driver = chart
        .series
        .iter()
        .find(|s| s.player_name == "Big Driver")
        .expect("top player present");
    assert!((big_driver.points[0].x - 0.0).abs() < 1e-9);
    assert!((big_driver.points[0].y + 1.0).abs() < 1e-9);
}

#[test]
fn test_radar_negative_component_plots_toward_center_and_beyond() {
    let roster = vec![common::player("Cold Putter", 0.5, 1.0, 0.0, 0.0, -0.5)];

    let chart = project_radar(&roster);
    let series = &chart.series[0];
    // putt axis points left (axis 3); a negative radius flips it rightward
    assert!((chart.scale - 1.0).abs() < 1e-9);
    assert!((series.points[3].x - 0.5).abs() < 1e-9);
    assert!(series.points[3].y.abs() < 1e-9);
}

#[test]
fn test_radar_empty_roster_degrades_to_empty_chart() {
    let chart = project_radar(&[]);
    assert!(chart.series.is_empty());
}

#[test]
fn test_scatter_axes_and_point_composition() {
    let roster = vec![
        common::player("Bunched One", 0.4, 0.1, 0.1, 0.1, 0.1),
        common::player("Bunched Two", 0.3, 0.1, 0.0, 0.1, 0.1),
    ];

    let chart = project_scatter(&roster);
    assert_eq!(chart.points.len(), 2);
    // narrow data still gets the +/- 1 floor
    assert!((chart.x_range - 1.0).abs() < 1e-9);
    assert!((chart.y_range - 1.0).abs() < 1e-9);
    // y is the ball-striking sum
    assert!((chart.points[0].y - 0.3).abs() < 1e-9);
    assert!((chart.points[0].x - 0.1).abs() < 1e-9);

    let wide = vec![common::player("Outlier", 3.0, 1.5, 1.0, 0.5, -1.4)];
    let wide_chart = project_scatter(&wide);
    assert!((wide_chart.x_range - 1.4).abs() < 1e-9);
    assert!((wide_chart.y_range - 3.0).abs() < 1e-9);
}

#[test]
fn test_scatter_caps_at_fifteen_players() {
    let roster = common::descending_roster(20, 2.0, 0.1);
    let chart = project_scatter(&roster);
    assert_eq!(chart.points.len(), 15);
    assert_eq!(chart.points[0].player_name, "Player 0");
}

#[test]
fn test_scatter_hit_test_in_device_pixel_space() {
    let roster = vec![
        common::player("Center", 1.0, 0.0, 0.0, 0.0, 0.0),
        common::player("Right Edge", 0.5, 0.0, 0.0, 0.0, 1.0),
    ];
    let chart = project_scatter(&roster);

    let (width, height) = (400.0, 300.0);
    let (cx, cy) = chart.point_px(0, width, height).expect("point exists");
    assert!((cx - 200.0).abs() < 1e-9);
    assert!((cy - 150.0).abs() < 1e-9);

    // dead on the point
    assert_eq!(chart.hit_test(cx, cy, width, height, 1.0), Some(0));
    // inside the radius at 1x, still inside at 2x because both distances and
    // the radius scale together
    assert_eq!(chart.hit_test(cx + 10.0, cy, width, height, 1.0), Some(0));
    assert_eq!(chart.hit_test(cx + 10.0, cy, width, height, 2.0), Some(0));
    // outside the radius
    assert_eq!(chart.hit_test(cx + 40.0, cy, width, height, 1.0), None);

    // between two points the nearer one wins
    let (rx, ry) = chart.point_px(1, width, height).expect("point exists");
    let nearer_to_second = (cx + rx) / 2.0 + 6.0;
    if let Some(idx) = chart.hit_test(nearer_to_second, (cy + ry) / 2.0, width, height, 1.0) {
        assert_eq!(idx, 1);
    }
}

#[test]
fn test_ranking_bars_scale_and_sign() {
    let mut roster = common::descending_roster(12, 2.0, 0.25);
    roster.push(common::player("Slumping", -3.0, -1.0, -1.0, -0.5, -0.5));

    let chart = project_ranking_bars(&roster);
    assert_eq!(chart.bars.len(), 10);
    // top 10 by sg_total keeps the best players, so the -3.0 never shows
    assert!(chart.bars.iter().all(|b| b.short_name != "Slumping"));
    assert!((chart.max_abs - 2.0).abs() < 1e-9);
    assert!((chart.bars[0].fraction - 1.0).abs() < 1e-9);
    assert_eq!(chart.bars[0].direction, Direction::Above);

    let negative_field = vec![common::player("Under Water", -1.5, -0.5, -0.5, -0.3, -0.2)];
    let negative_chart = project_ranking_bars(&negative_field);
    assert_eq!(negative_chart.bars[0].direction, Direction::Below);
    assert!((negative_chart.bars[0].fraction + 1.0).abs() < 1e-9);
}

#[test]
fn test_category_line_averages_top_ten_subset() {
    // 12 players; only the strongest 10 should feed the averages
    let roster: Vec<_> = (0..12)
        .map(|idx| {
            let total = 2.0 - idx as f64 * 0.2;
            common::player(&format!("Player {idx}"), total, 0.8, 0.4, -0.2, 0.1)
        })
        .collect();

    let chart = project_category_line(&roster);
    assert_eq!(chart.points.len(), 4);
    // identical components across players, so averages equal the components
    assert!((chart.points[0].average - 0.8).abs() < 1e-9);
    assert!((chart.points[2].average + 0.2).abs() < 1e-9);
    // symmetric range from the largest absolute average
    assert!((chart.range - 0.8).abs() < 1e-9);
    assert!((chart.points[0].y - 1.0).abs() < 1e-9);

    // evenly spaced category positions
    let xs: Vec<f64> = chart.points.iter().map(|p| p.x).collect();
    assert!((xs[1] - xs[0] - (xs[2] - xs[1])).abs() < 1e-9);
    assert!((xs[0] - 0.0).abs() < 1e-9);
    assert!((xs[3] - 1.0).abs() < 1e-9);
}

#[test]
fn test_all_projections_degrade_on_empty_roster() {
    assert!(project_radar(&[]).series.is_empty());
    assert!(project_scatter(&[]).points.is_empty());
    assert!(project_ranking_bars(&[]).bars.is_empty());
    assert!(project_category_line(&[]).points.is_empty());
}

//! PNG rendering of launch trajectories

use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut};
use std::fs;
use std::path::Path;

use crate::constants::{BALL_RADIUS, GROUND_Y, INITIAL_BALL_POSITION, WINDOW_HEIGHT, WINDOW_WIDTH};

use super::runner::LaunchReport;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const GROUND: Rgb<u8> = Rgb([190, 190, 190]);
const BALL: Rgb<u8> = Rgb([0, 0, 0]);

/// Trail colors, cycled per launch
const TRAIL_COLORS: [Rgb<u8>; 6] = [
    Rgb([230, 0, 0]),
    Rgb([0, 110, 220]),
    Rgb([0, 160, 60]),
    Rgb([220, 130, 0]),
    Rgb([140, 0, 200]),
    Rgb([0, 170, 170]),
];

/// World coordinates (+y up, origin at center) to image pixels (+y down)
pub fn world_to_pixel(x: f32, y: f32) -> (f32, f32) {
    (x + WINDOW_WIDTH / 2.0, WINDOW_HEIGHT / 2.0 - y)
}

/// Draw every report's path on a window-sized canvas
pub fn draw_plot(reports: &[LaunchReport]) -> RgbImage {
    let mut img = RgbImage::from_pixel(WINDOW_WIDTH as u32, WINDOW_HEIGHT as u32, BACKGROUND);

    let (_, ground_py) = world_to_pixel(0.0, GROUND_Y - BALL_RADIUS);
    draw_line_segment_mut(&mut img, (0.0, ground_py), (WINDOW_WIDTH, ground_py), GROUND);

    for (i, report) in reports.iter().enumerate() {
        let color = TRAIL_COLORS[i % TRAIL_COLORS.len()];
        for pair in report.path.windows(2) {
            let a = world_to_pixel(pair[0].0, pair[0].1);
            let b = world_to_pixel(pair[1].0, pair[1].1);
            draw_line_segment_mut(&mut img, a, b, color);
        }
        for &(x, y) in &report.path {
            let (px, py) = world_to_pixel(x, y);
            draw_filled_circle_mut(&mut img, (px as i32, py as i32), 2, color);
        }
    }

    let (bx, by) = world_to_pixel(INITIAL_BALL_POSITION.x, INITIAL_BALL_POSITION.y);
    draw_filled_circle_mut(&mut img, (bx as i32, by as i32), BALL_RADIUS as i32, BALL);

    img
}

/// Render reports to a PNG file, creating parent directories as needed
pub fn render_plot(reports: &[LaunchReport], path: &str) -> Result<(), String> {
    if let Some(parent) = Path::new(path).parent() {
        fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create {}: {}", parent.display(), e))?;
    }
    draw_plot(reports)
        .save(path)
        .map_err(|e| format!("Failed to save {}: {}", path, e))
}

use macroquad::prelude::Color;

pub const INITIAL_WINDOW_WIDTH: i32 = 1920;
pub const INITIAL_WINDOW_HEIGHT: i32 = 1080;
pub const MSAA_SAMPLES: i32 = 4;
pub const UI_FONT_PATH: &str = "assets/fonts/Lato-Regular.ttf";

pub const LEFT_MARGIN: f32 = 120.0;
pub const RIGHT_MARGIN: f32 = 40.0;
pub const TOP_MARGIN: f32 = 220.0;
pub const BOTTOM_MARGIN: f32 = 110.0;

pub const TITLE_Y: f32 = 46.0;
pub const CONTROLS_Y: f32 = 82.0;
pub const NARRATION_Y: f32 = 118.0;
pub const NARRATION_LINE_PX: f32 = 24.0;
pub const TRAJECTORY_SAMPLES: usize = 240;
pub const X_GRID_LINES: usize = 10;
pub const Y_GRID_LINES: usize = 8;
pub const ARROW_HEAD_PX: f32 = 14.0;

// Scene lengths in seconds.
pub const SETUP_S: f32 = 4.0;
pub const DECOMPOSITION_S: f32 = 4.0;
pub const VERTICAL_ANALYSIS_S: f32 = 5.0;
pub const HORIZONTAL_ANALYSIS_S: f32 = 5.0;
pub const FINAL_RESULT_S: f32 = 6.0;

pub const BACKGROUND: Color = Color::new(0.98, 0.98, 0.99, 1.0);
pub const GRID_COLOR: Color = Color::new(0.89, 0.905, 0.925, 1.0);
pub const TEXT_COLOR: Color = Color::new(0.12, 0.12, 0.14, 1.0);
pub const VELOCITY_COLOR: Color = Color::new(0.9, 0.75, 0.08, 1.0);
pub const VX_COLOR: Color = Color::new(0.0, 0.5, 0.5, 1.0);
pub const VY_COLOR: Color = Color::new(0.94, 0.55, 0.08, 1.0);
pub const PATH_COLOR: Color = Color::new(0.21, 0.48, 0.96, 1.0);
pub const ATHLETE_COLOR: Color = Color::new(0.18, 0.62, 0.3, 1.0);

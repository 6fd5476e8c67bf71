use macroquad::prelude::*;
use tracing::{error, info, warn};

use javelin_kinematics::chart::{ChartError, ChartLayout};
use javelin_kinematics::report::{DerivationStep, KinematicsReport};
use javelin_kinematics::scenario::Scenario;

use crate::constants::{
    BACKGROUND, BOTTOM_MARGIN, CONTROLS_Y, GRID_COLOR, INITIAL_WINDOW_HEIGHT,
    INITIAL_WINDOW_WIDTH, LEFT_MARGIN, MSAA_SAMPLES, NARRATION_LINE_PX, NARRATION_Y,
    RIGHT_MARGIN, TEXT_COLOR, TITLE_Y, TOP_MARGIN, TRAJECTORY_SAMPLES, UI_FONT_PATH,
};
use crate::render::{Viewport, draw_axis_tick_labels, draw_grid, draw_ui_text};
use crate::scenes::{Scene, SceneClock};
use crate::stage::draw_stage;

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "Javelin Kinematics".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

#[derive(Default, Clone, Copy)]
struct FrameActions {
    next_scene: bool,
    prev_scene: bool,
    restart: bool,
    toggle_autoplay: bool,
    select_scenario: Option<usize>,
}

fn hotkey_actions() -> FrameActions {
    let select_scenario = [KeyCode::Key1, KeyCode::Key2, KeyCode::Key3]
        .iter()
        .position(|key| is_key_pressed(*key));
    FrameActions {
        next_scene: is_key_pressed(KeyCode::Right) || is_key_pressed(KeyCode::Space),
        prev_scene: is_key_pressed(KeyCode::Left),
        restart: is_key_pressed(KeyCode::R),
        toggle_autoplay: is_key_pressed(KeyCode::A),
        select_scenario,
    }
}

struct ViewerState {
    scenarios: Vec<Scenario>,
    scenario_idx: usize,
    report: KinematicsReport,
    layout: ChartLayout,
    derivation: Vec<DerivationStep>,
    scene: Scene,
    clock: SceneClock,
    autoplay: bool,
    status_line: String,
}

fn evaluate(scenario: &Scenario) -> Result<(KinematicsReport, ChartLayout), ChartError> {
    let report = KinematicsReport::compute(scenario)?;
    let layout = ChartLayout::build(&report, TRAJECTORY_SAMPLES)?;
    Ok((report, layout))
}

impl ViewerState {
    fn new(scenarios: Vec<Scenario>, scenario_idx: usize, autoplay: bool) -> Result<Self, ChartError> {
        let (report, layout) = evaluate(&scenarios[scenario_idx])?;
        let status_line = format!("Loaded {}", scenarios[scenario_idx].name);
        let derivation = report.derivation();
        Ok(Self {
            scenarios,
            scenario_idx,
            report,
            layout,
            derivation,
            scene: Scene::Setup,
            clock: SceneClock::for_scene(Scene::Setup),
            autoplay,
            status_line,
        })
    }

    fn go_to(&mut self, scene: Scene) {
        self.scene = scene;
        self.clock = SceneClock::for_scene(scene);
    }

    fn select(&mut self, idx: usize) {
        let Some(scenario) = self.scenarios.get(idx) else {
            return;
        };
        match evaluate(scenario) {
            Ok((report, layout)) => {
                self.scenario_idx = idx;
                self.derivation = report.derivation();
                self.report = report;
                self.layout = layout;
                self.status_line = format!("Loaded {}", scenario.name);
                self.go_to(Scene::Setup);
            }
            Err(err) => {
                warn!(scenario = %scenario.name, %err, "could not load scenario");
                self.status_line = format!("Could not load {}: {err}", scenario.name);
            }
        }
    }

    fn apply(&mut self, actions: FrameActions) {
        if let Some(idx) = actions.select_scenario {
            self.select(idx);
        }
        if actions.restart {
            self.go_to(Scene::Setup);
            self.status_line = "Restarted".to_string();
        }
        if actions.next_scene {
            self.go_to(self.scene.next());
        }
        if actions.prev_scene {
            self.go_to(self.scene.previous());
        }
        if actions.toggle_autoplay {
            self.autoplay = !self.autoplay;
            self.status_line = if self.autoplay {
                "Autoplay on".to_string()
            } else {
                "Autoplay off".to_string()
            };
        }
    }

    fn advance(&mut self, frame_dt: f32) {
        self.clock.tick(frame_dt);
        if self.autoplay && self.clock.is_done() && !self.scene.is_last() {
            self.go_to(self.scene.next());
        }
    }

    fn narration(&self) -> Option<&DerivationStep> {
        self.derivation.get(self.scene.index())
    }
}

fn draw_narration(step: &DerivationStep, scene: Scene, progress: f32, left: f32, font: Option<&Font>) {
    draw_ui_text(
        &format!("Scene {}/{}: {}", scene.index() + 1, Scene::ALL.len(), step.title),
        left,
        NARRATION_Y,
        24,
        TEXT_COLOR,
        font,
    );
    let shown = ((progress * step.lines.len() as f32).ceil() as usize).clamp(1, step.lines.len().max(1));
    for (i, line) in step.lines.iter().take(shown).enumerate() {
        draw_ui_text(
            line,
            left + 12.0,
            NARRATION_Y + NARRATION_LINE_PX * (i as f32 + 1.0),
            20,
            DARKGRAY,
            font,
        );
    }
}

fn draw_header(state: &ViewerState, left: f32, screen_h: f32, font: Option<&Font>) {
    draw_ui_text(
        &state.report.title,
        left,
        TITLE_Y,
        30,
        TEXT_COLOR,
        font,
    );
    draw_ui_text(
        "Controls: Right/Space next scene | Left previous | R restart | A autoplay | 1-3 scenario",
        left + 12.0,
        CONTROLS_Y,
        18,
        DARKGRAY,
        font,
    );
    draw_ui_text(
        &format!(
            "t = {:.2} s | R = {:.2} m | g = {:.2} m/s² | {}",
            state.report.flight_time_s,
            state.report.range_m,
            state.report.params.gravity_mps2,
            state.status_line
        ),
        left,
        screen_h - 20.0,
        20,
        BLUE,
        font,
    );
}

pub(crate) async fn run(scenario_name: &str, autoplay: bool) {
    let ui_font = match load_ttf_font(UI_FONT_PATH).await {
        Ok(font) => Some(font),
        Err(err) => {
            warn!("Could not load '{UI_FONT_PATH}': {err}. Falling back to default font.");
            None
        }
    };

    let scenarios = Scenario::builtin();
    let start_idx = match Scenario::find(scenario_name) {
        Ok(found) => scenarios
            .iter()
            .position(|s| s.name == found.name)
            .unwrap_or_default(),
        Err(err) => {
            error!("{err}");
            return;
        }
    };
    let mut state = match ViewerState::new(scenarios, start_idx, autoplay) {
        Ok(state) => state,
        Err(err) => {
            error!("{err}");
            return;
        }
    };
    info!(scenario = %state.scenarios[state.scenario_idx].name, "scene viewer started");

    loop {
        let frame_dt = get_frame_time();
        let screen_w = screen_width();
        let screen_h = screen_height();

        state.apply(hotkey_actions());
        state.advance(frame_dt);

        let view = Viewport::new(
            state.layout.window,
            LEFT_MARGIN,
            screen_w - RIGHT_MARGIN,
            TOP_MARGIN,
            screen_h - BOTTOM_MARGIN,
        );

        clear_background(BACKGROUND);
        draw_grid(&view, GRID_COLOR);
        draw_axis_tick_labels(&view, ui_font.as_ref());
        draw_stage(
            &view,
            &state.report,
            &state.layout,
            state.scene,
            state.clock.progress(),
            ui_font.as_ref(),
        );
        if let Some(step) = state.narration() {
            draw_narration(
                step,
                state.scene,
                state.clock.progress(),
                LEFT_MARGIN,
                ui_font.as_ref(),
            );
        }
        draw_header(&state, LEFT_MARGIN, screen_h, ui_font.as_ref());

        next_frame().await;
    }
}

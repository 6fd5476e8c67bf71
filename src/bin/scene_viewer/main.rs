use clap::Parser;
use macroquad::prelude::Conf;
use tracing_subscriber::EnvFilter;

mod app;
mod constants;
mod render;
mod scenes;
mod stage;

/// Plays the javelin-throw scenes on top of the projectile model
#[derive(Parser, Debug)]
#[command(name = "scene_viewer", version)]
struct ViewerArgs {
    /// Built-in scenario to start with
    #[arg(short, long, default_value = "javelin-setup")]
    scenario: String,

    /// Wait for a key press between scenes
    #[arg(long)]
    manual: bool,
}

fn window_conf() -> Conf {
    app::window_conf()
}

#[macroquad::main(window_conf)]
async fn main() {
    let args = ViewerArgs::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn,scene_viewer=info,javelin_kinematics=info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    app::run(&args.scenario, !args.manual).await;
}

mod app;

use std::path::PathBuf;

use jumprun_engine::device::GpuInit;
use jumprun_engine::logging::{init_logging, LoggingConfig};
use jumprun_engine::window::{Runtime, RuntimeConfig};
use jumprun_game::Tuning;
use winit::dpi::LogicalSize;

use app::{JumpRunApp, SHADER_DIR_ENV};

fn main() {
    init_logging(LoggingConfig::default());

    let tuning = Tuning::from_env();
    let shader_dir = std::env::var_os(SHADER_DIR_ENV).map(PathBuf::from);

    let config = RuntimeConfig {
        initial_size: LogicalSize::new(tuning.canvas_width as f64, tuning.canvas_height as f64),
        ..RuntimeConfig::default()
    };

    if let Err(e) = Runtime::run(config, GpuInit::default(), JumpRunApp::new(tuning, shader_dir)) {
        eprintln!("jumprun: {e:#}");
        std::process::exit(1);
    }
}

//! tilecam main entry point.
//!
//! A fixed-resolution tile world viewed through a follow camera, written in
//! Rust using:
//! - **raylib** for windowing, input and drawing
//! - **bevy_ecs** for the entity-component-system architecture
//!
//! # Main Loop
//!
//! 1. Load `config.ini`, open a resizable window, create the render target
//! 2. Insert resources, run the scene setup, register observers
//! 3. Every frame:
//!    - poll input and refresh the effective resolution
//!    - run the fixed-tick update (player movement, camera zoom + follow) as
//!      many times as the elapsed time calls for
//!    - draw the world into the render target and present it letterboxed
//!
//! # Controls
//!
//! WASD / arrows move, Q zooms in, E zooms out, F11 toggles the debug overlay.
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

use tilecam::events::switchdebug::switch_debug_observer;
use tilecam::game;
use tilecam::resources::debugmode::DebugMode;
use tilecam::resources::gameconfig::{DEFAULT_CONFIG_PATH, GameConfig};
use tilecam::resources::input::InputState;
use tilecam::resources::rendertarget::RenderTarget;
use tilecam::resources::screen::Screen;
use tilecam::resources::windowsize::WindowSize;
use tilecam::resources::worldtime::{FixedStep, WorldTime};
use tilecam::systems::camera::{camera_follow, camera_zoom};
use tilecam::systems::input::update_input_state;
use tilecam::systems::inputsimplecontroller::input_simple_controller;
use tilecam::systems::movement::movement;
use tilecam::systems::render::render_frame;
use tilecam::systems::screen::update_effective_resolution;
use tilecam::systems::time::update_world_time;

/// Longest catch-up burst after a stall, in ticks.
const MAX_TICKS_PER_FRAME: u32 = 5;

/// Tile world viewer with a pixel-perfect follow camera
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Configuration file to load.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write the default configuration and exit.
    /// Optionally provide a path (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    write_config: Option<Option<PathBuf>>,

    /// Start with the debug overlay visible.
    #[arg(long)]
    debug: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Early-exit: write the default config and quit (no window needed)
    if let Some(maybe_path) = cli.write_config {
        let path = maybe_path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
        if let Err(e) = GameConfig::with_path(&path).save_to_file() {
            log::error!("{}", e);
            std::process::exit(1);
        }
        println!("Default config written to {}", path.display());
        return;
    }

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let mut config = match cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        log::warn!("{}; using defaults", e);
    }

    // --------------- Raylib window ---------------
    let (window_width, window_height) = config.window_size();
    let mut builder = raylib::init();
    builder
        .size(window_width as i32, window_height as i32)
        .resizable()
        .title("tilecam");
    if config.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);
    // Disable ESC to exit
    rl.set_exit_key(None);

    let window = WindowSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    };
    let screen = Screen::new(
        config.base_width,
        config.base_height,
        config.scale_factor,
        window.w,
        window.h,
    )?;
    log::info!(
        "Target {}x{}, effective {:.0}x{:.0}",
        screen.target_width(),
        screen.target_height(),
        screen.effective_width(),
        screen.effective_height()
    );

    // --------------- Render target for fixed-resolution rendering ---------------
    let render_target = RenderTarget::new(&mut rl, &thread, &screen)?;
    let mut stepper = FixedStep::new(config.tick_rate, MAX_TICKS_PER_FRAME)?;

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(window);
    world.insert_resource(screen);
    world.insert_resource(InputState::default());
    world.insert_resource(config);
    if cli.debug {
        world.insert_resource(DebugMode);
    }
    world.insert_non_send_resource(render_target);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    let setup_system_id = world.register_system(game::setup);
    world
        .run_system(setup_system_id)
        .map_err(|e| format!("Scene setup failed: {}", e))?;

    world.spawn(Observer::new(switch_debug_observer));
    // Ensure the observer is registered before we run any systems that may trigger events.
    world.flush();

    // Once per rendered frame
    let mut frame = Schedule::default();
    frame.add_systems((update_input_state, update_effective_resolution));

    // Once per fixed tick
    let mut update = Schedule::default();
    update.add_systems(
        (
            input_simple_controller,
            movement,
            camera_zoom.pipe(camera_follow),
        )
            .chain(),
    );

    frame
        .initialize(&mut world)
        .map_err(|e| format!("Failed to initialize frame schedule: {}", e))?;
    update
        .initialize(&mut world)
        .map_err(|e| format!("Failed to initialize update schedule: {}", e))?;

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        frame.run(&mut world);

        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        for _ in 0..stepper.advance(dt) {
            update_world_time(&mut world, stepper.tick());
            update.run(&mut world);
        }

        render_frame(&mut world)?;

        world.clear_trackers();

        // Update window size each frame (may change due to resize)
        let (new_w, new_h) = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            (rl.get_screen_width(), rl.get_screen_height())
        };
        {
            let mut window_size = world.resource_mut::<WindowSize>();
            window_size.w = new_w;
            window_size.h = new_h;
        }
    }

    Ok(())
}

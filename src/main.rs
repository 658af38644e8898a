//! Versatile - character camera controller
//!
//! Headless driver: loads settings, spawns a character on a simulated rig, and
//! plays a scripted input session through every camera mode while logging
//! where the camera points.

mod settings;

use std::path::PathBuf;

use anyhow::{Context, Result};
use glam::Vec2;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use versatile_core::GameTime;
use versatile_game::{Character, InputHandler, SimulatedRig};
use winit::event::{ElementState, MouseScrollDelta};
use winit::keyboard::{KeyCode, PhysicalKey};

use settings::GameSettings;

/// One stretch of scripted input
struct Phase {
    name: &'static str,
    seconds: f32,
    /// Movement stick (x = forward, y = right)
    stick: Vec2,
    /// Key tapped on the first frame of the phase
    press: Option<KeyCode>,
    /// Captured mouse motion fed every frame
    mouse: (f64, f64),
    /// Wheel lines scrolled on the first frame of the phase
    scroll: f32,
}

const SCRIPT: &[Phase] = &[
    Phase {
        name: "walk forward",
        seconds: 1.0,
        stick: Vec2::new(1.0, 0.0),
        press: None,
        mouse: (0.0, 0.0),
        scroll: 0.0,
    },
    Phase {
        name: "mouse look",
        seconds: 0.5,
        stick: Vec2::ZERO,
        press: None,
        mouse: (4.0, -1.0),
        scroll: 0.0,
    },
    Phase {
        name: "first person",
        seconds: 1.0,
        stick: Vec2::new(1.0, 0.0),
        press: Some(KeyCode::KeyC),
        mouse: (0.0, 0.0),
        scroll: 0.0,
    },
    Phase {
        name: "smooth follow, strafe right",
        seconds: 3.0,
        stick: Vec2::new(0.0, 1.0),
        press: Some(KeyCode::KeyC),
        mouse: (0.0, 0.0),
        scroll: 0.0,
    },
    Phase {
        name: "smooth follow, forward left",
        seconds: 2.0,
        stick: Vec2::new(0.7, -0.7),
        press: None,
        mouse: (0.0, 0.0),
        scroll: 0.0,
    },
    Phase {
        name: "smooth follow, idle",
        seconds: 8.0,
        stick: Vec2::ZERO,
        press: None,
        mouse: (0.0, 0.0),
        scroll: 0.0,
    },
    Phase {
        name: "strafe then manual reset",
        seconds: 1.5,
        stick: Vec2::new(0.0, -1.0),
        press: None,
        mouse: (0.0, 0.0),
        scroll: 0.0,
    },
    Phase {
        name: "manual reset",
        seconds: 2.0,
        stick: Vec2::ZERO,
        press: Some(KeyCode::KeyR),
        mouse: (0.0, 0.0),
        scroll: 0.0,
    },
    Phase {
        name: "zoom out",
        seconds: 0.5,
        stick: Vec2::ZERO,
        press: None,
        mouse: (0.0, 0.0),
        scroll: -2.0,
    },
    Phase {
        name: "over shoulder",
        seconds: 1.0,
        stick: Vec2::new(1.0, 0.0),
        press: Some(KeyCode::KeyC),
        mouse: (0.0, 0.0),
        scroll: 0.0,
    },
];

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to set subscriber")
}

fn main() -> Result<()> {
    init_logging()?;

    let mut save = false;
    let mut path: Option<PathBuf> = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--save-settings" => save = true,
            other => path = Some(PathBuf::from(other)),
        }
    }

    let settings = match &path {
        Some(path) => GameSettings::load_from(path),
        None => GameSettings::load(),
    };
    if save {
        match &path {
            Some(path) => settings.save_to(path),
            None => settings.save(),
        }
        .context("Failed to save settings")?;
    }

    info!("Starting Versatile camera session...");

    let mut time = GameTime::new(settings.time.clone());
    let mut character = Character::with_config(
        settings.character.clone(),
        settings.camera.clone(),
        SimulatedRig::new(),
    );
    character.on_spawn(time.fixed_time);

    let frame = time.config.fixed_timestep.max(1e-3);
    let mut input = InputHandler::new();
    input.set_cursor_captured(true);

    for phase in SCRIPT {
        info!("Phase: {}", phase.name);
        input.state.move_stick = phase.stick;
        if let Some(key) = phase.press {
            input.handle_keyboard(PhysicalKey::Code(key), ElementState::Pressed);
        }
        if phase.scroll != 0.0 {
            input.handle_scroll(MouseScrollDelta::LineDelta(0.0, phase.scroll));
        }

        let frames = (phase.seconds / frame).ceil() as u32;
        for i in 0..frames {
            input.handle_mouse_motion(phase.mouse);
            time.update(frame);
            while time.step_fixed() {
                character.on_tick(&input.state, time.fixed_timestep(), time.fixed_time);
                input.end_frame();
            }
            if i == 0 {
                if let Some(key) = phase.press {
                    input.handle_keyboard(PhysicalKey::Code(key), ElementState::Released);
                }
            }

            if i % 30 == 0 {
                debug!(
                    "t={:.2} yaw={:.1} body={:.1} resetting={}",
                    time.total_time,
                    character.rotation().yaw,
                    character.rig().body_yaw,
                    character.camera().is_resetting()
                );
            }
        }

        let state = character.camera().state();
        info!(
            "  mode={} yaw={:.1} pitch={:.1} body={:.1} zoom={:.0} resetting={}",
            state.mode,
            character.rotation().yaw,
            character.rotation().pitch,
            character.rig().body_yaw,
            state.current_zoom_distance,
            state.is_resetting
        );
    }

    info!("Session finished after {} frames", time.frame_count);
    Ok(())
}

use anyhow::{Context, Result};
use clap::Parser;
use glam::Vec3;

use topdown::cli::{Cli, SceneChoice};
use topdown::core::{AnimatorParameters, FrameIterator, InputState, KinematicBody};
use topdown::scenes::{create_courtyard_scene, create_stacked_scene};
use topdown::traits::Button;
use topdown::{PlayerController, SceneObject, Settings, TopDownCamera};

// === Constants ===

const COURTYARD_ROWS: usize = 4;
const GROUND_HEIGHT: f32 = 0.0;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if cli.no_fade {
        settings.camera.fade_objects = false;
    }

    let mut scene = match cli.scene {
        SceneChoice::Courtyard => create_courtyard_scene(COURTYARD_ROWS),
        SceneChoice::Stacked => create_stacked_scene(),
    };
    let player_id = scene.spawn(SceneObject::new("player", Vec3::ZERO));

    let mut player = PlayerController::builder(settings.player.clone())
        .motor(KinematicBody::new(Vec3::ZERO, GROUND_HEIGHT))
        .animator(AnimatorParameters::new())
        .build()
        .context("Failed to start player controller")?;
    let mut camera = TopDownCamera::start(settings.camera.clone(), player_id, &scene)
        .context("Failed to start camera")?;

    let mut input = InputState::new();
    if cli.scene == SceneChoice::Courtyard {
        input.press(Button::KeyW);
    }
    if cli.run {
        input.press(settings.player.run_button);
    }

    let frames = if cli.realtime {
        FrameIterator::realtime()
    } else {
        FrameIterator::fixed(cli.dt)
    };

    let mut fade_events = 0usize;
    let mut running_frames = 0u64;
    let mut last_faded = Vec::new();

    for frame in frames.take(cli.frames as usize) {
        let movement = player.tick(&input, frame.delta);
        if movement.is_running {
            running_frames += 1;
        }
        scene.set_position(player_id, player.position());

        let view = camera.tick(frame.delta, &mut scene);
        if view.faded != last_faded {
            let names: Vec<&str> = view
                .faded
                .iter()
                .filter_map(|id| scene.get(*id).map(|object| object.name.as_str()))
                .collect();
            log::info!(
                "frame {:>4} t={:.2}s player z={:.2}: faded {:?}",
                frame.number,
                frame.time,
                player.position().z,
                names
            );
            fade_events += view.faded.len();
            last_faded = view.faded;
        }
    }

    log::info!(
        "Finished {} frames: player at {:?}, camera at {:?}, {} fade event(s), ran for {} frame(s)",
        cli.frames,
        player.position(),
        camera.position(),
        fade_events,
        running_frames
    );

    Ok(())
}

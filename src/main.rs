use rand::rngs::StdRng;
use rand::SeedableRng;

mod animation;
mod assets;
mod audio;
mod clock;
mod collision;
mod config;
mod entity;
mod error;
mod game;
mod input_system;
mod obstacle;
mod player;
mod render;
mod score;
mod text;

use assets::GameTextures;
use audio::AudioSystem;
use clock::{Clock, FrameLimiter};
use config::GameConfig;
use error::GameError;
use game::{GameSession, GameState};
use input_system::{GameAction, InputSystem};
use render::{render_active, render_intro};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), GameError> {
    let (config, source) = GameConfig::load()?;
    match source {
        Some(path) => log::info!("Loaded config from {}", path.display()),
        None => log::info!("No config file found, using defaults"),
    }

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _audio_subsystem = sdl_context.audio()?;
    let timer = sdl_context.timer()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let window = video_subsystem
        .window(&config.window.title, config.window.width, config.window.height)
        .position_centered()
        .build()
        .map_err(|e| GameError::Sdl(e.to_string()))?;
    log::info!("Window {}x{} at {} fps", config.window.width, config.window.height, config.window.fps);

    let mut canvas = window
        .into_canvas()
        .build()
        .map_err(|e| GameError::Sdl(e.to_string()))?;
    let texture_creator = canvas.texture_creator();

    let textures = GameTextures::load(&texture_creator, &config.assets)?;
    let audio = AudioSystem::open(&config.audio, &config.assets)?;
    audio.start_music()?;

    let mut event_pump = sdl_context.event_pump()?;
    let input = InputSystem::new();
    let mut session = GameSession::new(&config, textures.metrics(), StdRng::from_entropy());
    let mut limiter = FrameLimiter::new(config.window.fps);
    log::debug!("Frame budget {:?}", limiter.frame_duration());

    'running: loop {
        let now_ms = timer.now_ms();

        for action in input.poll_events(&mut event_pump) {
            match action {
                GameAction::Quit => break 'running,
                action => session.handle_action(action, now_ms),
            }
        }

        session.poll_spawn_timer(now_ms);

        match session.state() {
            GameState::Active => {
                render_active(&mut canvas, &textures, &session, config.physics.ground_y, now_ms)?;
                let report = session.tick(input.jump_held(&event_pump), now_ms);
                if report.jumped {
                    audio.play_jump();
                }
            }
            GameState::Intro => render_intro(&mut canvas, &textures, session.intro_message())?,
        }

        canvas.present();
        limiter.wait();
    }

    log::info!("Exiting");
    Ok(())
}

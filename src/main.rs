mod assets;
mod audio;
mod canvas;
mod cheese;
mod clock;
mod config;
mod cracker;
mod fonts;
mod game;
mod geometry;
mod input;
mod sprites;
mod tomato;

use crate::assets::Images;
use crate::audio::{AudioManager, SoundBank};
use crate::canvas::Canvas;
use crate::clock::FrameClock;
use crate::config::{Settings, SCREEN_HEIGHT, SCREEN_WIDTH, TICKS_PER_SECOND, WINDOW_TITLE};
use crate::game::Game;
use crate::input::{command_for, Command};
use pixels::{Pixels, SurfaceTexture};
use std::time::Instant;
use winit::{
    dpi::LogicalSize,
    event::*,
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::from_env();
    log::info!("Cracker Chase starting, assets from {}", settings.asset_dir.display());

    let event_loop = EventLoop::new();
    let window = match WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .with_inner_size(LogicalSize::new(SCREEN_WIDTH as f64, SCREEN_HEIGHT as f64))
        .with_resizable(false)
        .build(&event_loop)
    {
        Ok(window) => window,
        Err(err) => return init_failed("window", &err),
    };

    let window_size = window.inner_size();
    let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
    let mut pixels = match Pixels::new(SCREEN_WIDTH, SCREEN_HEIGHT, surface_texture) {
        Ok(pixels) => pixels,
        Err(err) => return init_failed("graphics", &err),
    };

    let mut audio = match AudioManager::open() {
        Ok(audio) => audio,
        Err(err) => return init_failed("audio", &err),
    };

    let images = Images::load(&settings.asset_dir)?;
    audio.set_sounds(SoundBank::load(&settings.asset_dir)?);
    let mut game = Game::new(images.sprite_sizes());

    let mut clock = FrameClock::new(TICKS_PER_SECOND, Instant::now());

    event_loop.run(move |event, _, control_flow| {
        match event {
            Event::WindowEvent { event, window_id } if window_id == window.id() => {
                match event {
                    WindowEvent::CloseRequested => {
                        log::info!("window closed, exiting");
                        *control_flow = ControlFlow::Exit;
                    }
                    WindowEvent::KeyboardInput {
                        input:
                            KeyboardInput {
                                state,
                                virtual_keycode: Some(keycode),
                                ..
                            },
                        ..
                    } => match command_for(keycode, state) {
                        Some(Command::Quit) => {
                            log::info!(
                                "quit requested in {:?} (score {}, top score {})",
                                game.mode(),
                                game.score(),
                                game.top_score()
                            );
                            *control_flow = ControlFlow::Exit;
                        }
                        Some(command) => game.handle(command),
                        None => {}
                    },
                    _ => {}
                }
            }
            Event::MainEventsCleared => {
                if *control_flow == ControlFlow::Exit {
                    return;
                }
                if clock.poll(Instant::now()) {
                    game.update();
                    for sound in game.drain_sounds() {
                        audio.play(sound);
                    }

                    let mut canvas = Canvas::new(
                        pixels.frame_mut(),
                        SCREEN_WIDTH as i32,
                        SCREEN_HEIGHT as i32,
                    );
                    game.render(&mut canvas, &images);

                    if let Err(err) = pixels.render() {
                        log::error!("failed to present frame: {err}");
                        *control_flow = ControlFlow::Exit;
                        return;
                    }
                }
                *control_flow = ControlFlow::WaitUntil(clock.deadline());
            }
            _ => {}
        }
    });
}

/// Subsystem start-up failure: report it and leave without entering the loop.
fn init_failed(subsystem: &str, err: &dyn std::fmt::Display) -> anyhow::Result<()> {
    log::error!("{subsystem} subsystem failed to initialize: {err}");
    eprintln!("Cracker Chase could not start: {subsystem} subsystem failed to initialize ({err})");
    Ok(())
}

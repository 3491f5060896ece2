use crate::assets::{ImageId, Images, SpriteSizes};
use crate::canvas::Canvas;
use crate::cheese::Cheese;
use crate::config::{tomato_delays, CRACKER_COUNT, SCREEN_HEIGHT, SCREEN_WIDTH, TEXT_SCALE};
use crate::cracker::Cracker;
use crate::fonts::{draw_text, text_width};
use crate::geometry::Size;
use crate::input::Command;
use crate::sprites::{Body, Event, Sound, Sprite, World};
use crate::tomato::Tomato;
use rand::rngs::StdRng;
use rand::SeedableRng;

const CLEAR_COLOR: [u8; 4] = [0, 0, 0, 255];
const TEXT_COLOR: [u8; 4] = [0, 0, 255, 255];
const SHADOW_COLOR: [u8; 4] = [0, 0, 0, 255];
const SHADOW_OFFSET: i32 = 2;

const MENU_LINES: [(&str, i32); 7] = [
    ("Welcome to Cracker Chase", 150),
    ("Steer the cheese to", 250),
    ("capture the crackers", 300),
    ("BEWARE THE KILLER TOMATOES", 350),
    ("Arrow keys to move", 450),
    ("Press G to play", 500),
    ("Press Escape to exit", 550),
];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Menu,
    Playing,
}

pub struct Game {
    mode: Mode,
    sprites: Vec<Sprite>,
    cheese: usize,
    world: World,
    top_score: u32,
    sounds: Vec<Sound>,
    rng: StdRng,
}

impl Game {
    pub fn new(sizes: SpriteSizes) -> Self {
        Self::with_rng(sizes, StdRng::from_entropy())
    }

    pub fn with_rng(sizes: SpriteSizes, mut rng: StdRng) -> Self {
        let screen = Size::new(SCREEN_WIDTH, SCREEN_HEIGHT);

        // Collection order is draw order: the cheese renders above the crackers.
        let mut sprites = vec![Sprite::Background(Body::new(ImageId::Background, sizes.background))];
        for _ in 0..CRACKER_COUNT {
            sprites.push(Sprite::Cracker(Cracker::new(sizes.cracker, screen, &mut rng)));
        }
        let cheese = sprites.len();
        sprites.push(Sprite::Cheese(Cheese::new(sizes.cheese, screen)));
        for delay in tomato_delays() {
            sprites.push(Sprite::Tomato(Tomato::new(sizes.tomato, delay)));
        }

        Self {
            mode: Mode::Menu,
            sprites,
            cheese,
            world: World::new(screen),
            top_score: 0,
            sounds: Vec::new(),
            rng,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn score(&self) -> u32 {
        self.world.score
    }

    pub fn top_score(&self) -> u32 {
        self.top_score
    }

    fn cheese_mut(&mut self) -> Option<&mut Cheese> {
        match self.sprites.get_mut(self.cheese) {
            Some(Sprite::Cheese(c)) => Some(c),
            _ => None,
        }
    }

    /// Applies one input command. Quit is left to the caller.
    pub fn handle(&mut self, command: Command) {
        match (self.mode, command) {
            (Mode::Menu, Command::Start) => self.start_session(),
            (Mode::Playing, Command::StartMove(dir)) => {
                if let Some(cheese) = self.cheese_mut() {
                    cheese.start_move(dir);
                }
            }
            (Mode::Playing, Command::StopMove(dir)) => {
                if let Some(cheese) = self.cheese_mut() {
                    cheese.stop_move(dir);
                }
            }
            _ => {}
        }
    }

    fn start_session(&mut self) {
        for sprite in &mut self.sprites {
            sprite.reset(self.world.screen, &mut self.rng);
        }
        self.world.score = 0;
        self.world.take_events();
        self.mode = Mode::Playing;
        log::info!("session started (top score {})", self.top_score);
    }

    fn end_session(&mut self) {
        self.mode = Mode::Menu;
        if self.world.score > self.top_score {
            self.top_score = self.world.score;
        }
        log::info!(
            "session over: score {}, top score {}",
            self.world.score,
            self.top_score
        );
    }

    /// Advances one frame. Does nothing outside a session.
    pub fn update(&mut self) {
        if self.mode != Mode::Playing {
            return;
        }

        if let Some(cheese) = self.sprites.get(self.cheese) {
            self.world.player = cheese.body().rect();
        }
        for sprite in &mut self.sprites {
            sprite.update(&mut self.world, &mut self.rng);
        }

        let mut caught = false;
        for event in self.world.take_events() {
            match event {
                Event::Play(sound) => self.sounds.push(sound),
                Event::PlayerCaught => caught = true,
            }
        }
        if caught {
            self.end_session();
        }
    }

    pub fn drain_sounds(&mut self) -> std::vec::Drain<'_, Sound> {
        self.sounds.drain(..)
    }

    pub fn render(&self, canvas: &mut Canvas, images: &Images) {
        canvas.fill(CLEAR_COLOR);
        match self.mode {
            Mode::Playing => {
                for sprite in &self.sprites {
                    sprite.draw(canvas, images);
                }
                display_message(canvas, &format!("Score: {}", self.world.score), 0);
            }
            Mode::Menu => {
                canvas.blit(images.get(ImageId::StartScreen), 0, 0);
                display_message(canvas, &format!("Top Score: {}", self.top_score), 0);
                for (line, y) in MENU_LINES {
                    display_message(canvas, line, y);
                }
            }
        }
    }
}

/// Horizontally centered text over a drop shadow.
fn display_message(canvas: &mut Canvas, message: &str, y: i32) {
    let x = canvas.width() / 2 - text_width(message, TEXT_SCALE) / 2;
    draw_text(canvas, x, y, message, TEXT_SCALE, SHADOW_COLOR);
    draw_text(
        canvas,
        x + SHADOW_OFFSET,
        y + SHADOW_OFFSET,
        message,
        TEXT_SCALE,
        TEXT_COLOR,
    );
}

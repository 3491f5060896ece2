use crate::assets::ImageId;
use crate::config::{CAPTURE_POINTS, MILESTONE_SCORE};
use crate::geometry::{Size, Vec2};
use crate::sprites::{Body, Event, Sound, World};
use rand::Rng;

/// Target sprite. Jumps to a random spot whenever the player touches it.
#[derive(Clone, Debug, PartialEq)]
pub struct Cracker {
    pub body: Body,
}

impl Cracker {
    pub fn new<R: Rng + ?Sized>(size: Size, screen: Size, rng: &mut R) -> Self {
        let mut cracker = Self {
            body: Body::new(ImageId::Cracker, size),
        };
        cracker.reset(screen, rng);
        cracker
    }

    pub fn reset<R: Rng + ?Sized>(&mut self, screen: Size, rng: &mut R) {
        let max_x = screen.width.saturating_sub(self.body.size.width);
        let max_y = screen.height.saturating_sub(self.body.size.height);
        self.body.pos = Vec2::new(
            rng.gen_range(0..=max_x) as f32,
            rng.gen_range(0..=max_y) as f32,
        );
    }

    pub fn update<R: Rng + ?Sized>(&mut self, world: &mut World, rng: &mut R) {
        if !self.body.rect().intersects(&world.player) {
            return;
        }
        world.emit(Event::Play(Sound::Capture));
        self.reset(world.screen, rng);
        world.score += CAPTURE_POINTS;
        log::debug!("cracker captured, score {}", world.score);
        if world.score == MILESTONE_SCORE {
            log::info!("score {} reached, fanfare", world.score);
            world.emit(Event::Play(Sound::Milestone));
        }
    }
}

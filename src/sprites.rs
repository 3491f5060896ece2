use crate::assets::{ImageId, Images};
use crate::canvas::Canvas;
use crate::cheese::Cheese;
use crate::cracker::Cracker;
use crate::geometry::{Rect, Size, Vec2};
use crate::tomato::Tomato;
use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Sound {
    Capture,
    Milestone,
    Death,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Play(Sound),
    PlayerCaught,
}

/// Shared state handed to every sprite during a tick.
pub struct World {
    pub screen: Size,
    /// Player rectangle as of the most recent cheese update.
    pub player: Rect,
    pub score: u32,
    events: Vec<Event>,
}

impl World {
    pub fn new(screen: Size) -> Self {
        Self {
            screen,
            player: Rect::default(),
            score: 0,
            events: Vec::new(),
        }
    }

    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    pub size: Size,
    pub image: ImageId,
}

impl Body {
    pub fn new(image: ImageId, size: Size) -> Self {
        Self {
            pos: Vec2::default(),
            size,
            image,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

pub enum Sprite {
    Background(Body),
    Cheese(Cheese),
    Cracker(Cracker),
    Tomato(Tomato),
}

impl Sprite {
    pub fn body(&self) -> &Body {
        match self {
            Sprite::Background(body) => body,
            Sprite::Cheese(c) => &c.body,
            Sprite::Cracker(c) => &c.body,
            Sprite::Tomato(t) => &t.body,
        }
    }

    pub fn update<R: Rng + ?Sized>(&mut self, world: &mut World, rng: &mut R) {
        match self {
            Sprite::Background(_) => {}
            Sprite::Cheese(c) => c.update(world),
            Sprite::Cracker(c) => c.update(world, rng),
            Sprite::Tomato(t) => t.update(world),
        }
    }

    /// Puts the sprite back in its start-of-session state.
    pub fn reset<R: Rng + ?Sized>(&mut self, screen: Size, rng: &mut R) {
        match self {
            Sprite::Background(_) => {}
            Sprite::Cheese(c) => c.reset(screen),
            Sprite::Cracker(c) => c.reset(screen, rng),
            Sprite::Tomato(t) => t.reset(),
        }
    }

    pub fn draw(&self, canvas: &mut Canvas, images: &Images) {
        // Fractional positions truncate toward zero.
        let body = self.body();
        canvas.blit(images.get(body.image), body.pos.x as i32, body.pos.y as i32);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn background_ignores_update_and_reset() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut world = World::new(Size::new(800, 600));
        let mut bg = Sprite::Background(Body::new(ImageId::Background, Size::new(800, 600)));

        bg.update(&mut world, &mut rng);
        bg.reset(world.screen, &mut rng);

        assert_eq!(bg.body().pos, Vec2::default());
        assert!(world.take_events().is_empty());
    }

    #[test]
    fn draw_blits_at_position() {
        let images = Images::solid(Size::new(2, 2), |_| [9, 8, 7, 255]);
        let mut frame = vec![0u8; 4 * 4 * 4];
        let mut canvas = Canvas::new(&mut frame, 4, 4);
        let mut body = Body::new(ImageId::Cracker, Size::new(2, 2));
        body.pos = Vec2::new(1.0, 2.0);

        Sprite::Background(body).draw(&mut canvas, &images);

        assert_eq!(canvas.pixel(1, 2), Some([9, 8, 7, 255]));
        assert_eq!(canvas.pixel(2, 3), Some([9, 8, 7, 255]));
        assert_eq!(canvas.pixel(0, 0), Some([0, 0, 0, 0]));
    }

    #[test]
    fn draw_truncates_fractional_position() {
        let images = Images::solid(Size::new(1, 1), |_| [9, 8, 7, 255]);
        let mut frame = vec![0u8; 4 * 4 * 4];
        let mut canvas = Canvas::new(&mut frame, 4, 4);
        let mut body = Body::new(ImageId::Cheese, Size::new(1, 1));
        body.pos = Vec2::new(1.6, 2.9);

        Sprite::Background(body).draw(&mut canvas, &images);

        assert_eq!(canvas.pixel(1, 2), Some([9, 8, 7, 255]));
        assert_eq!(canvas.pixel(2, 2), Some([0, 0, 0, 0]));
        assert_eq!(canvas.pixel(1, 3), Some([0, 0, 0, 0]));
    }

    #[test]
    fn events_drain_once() {
        let mut world = World::new(Size::new(10, 10));
        world.emit(Event::Play(Sound::Capture));
        world.emit(Event::PlayerCaught);
        assert_eq!(
            world.take_events(),
            vec![Event::Play(Sound::Capture), Event::PlayerCaught]
        );
        assert!(world.take_events().is_empty());
    }
}

use crate::assets::ImageId;
use crate::geometry::{Size, Vec2};
use crate::sprites::{Body, Event, Sound, World};

const PARKED: Vec2 = Vec2::new(-100.0, -100.0);
const ACCEL: Vec2 = Vec2::new(0.2, 0.2);
const FRICTION: f32 = 0.99;

/// Adversary sprite. Sits off-screen for `entry_delay` frames, then homes in
/// on the player with damped acceleration.
#[derive(Clone, Debug, PartialEq)]
pub struct Tomato {
    pub body: Body,
    pub entry_delay: u32,
    pub entry_count: u32,
    pub velocity: Vec2,
    pub accel: Vec2,
    pub friction: f32,
}

impl Tomato {
    pub fn new(size: Size, entry_delay: u32) -> Self {
        let mut tomato = Self {
            body: Body::new(ImageId::Tomato, size),
            entry_delay,
            entry_count: 0,
            velocity: Vec2::default(),
            accel: ACCEL,
            friction: FRICTION,
        };
        tomato.reset();
        tomato
    }

    pub fn reset(&mut self) {
        self.entry_count = 0;
        self.friction = FRICTION;
        self.accel = ACCEL;
        self.velocity = Vec2::default();
        self.body.pos = PARKED;
    }

    pub fn is_active(&self) -> bool {
        self.entry_count >= self.entry_delay
    }

    pub fn update(&mut self, world: &mut World) {
        self.entry_count = self.entry_count.saturating_add(1);
        if !self.is_active() {
            return;
        }

        let target = world.player;
        self.velocity.x = chase(self.velocity.x, self.accel.x, target.x > self.body.pos.x);
        self.velocity.x *= self.friction;
        self.body.pos.x += self.velocity.x;

        self.velocity.y = chase(self.velocity.y, self.accel.y, target.y > self.body.pos.y);
        self.velocity.y *= self.friction;
        self.body.pos.y += self.velocity.y;

        if self.body.rect().intersects(&world.player) {
            world.emit(Event::Play(Sound::Death));
            world.emit(Event::PlayerCaught);
        }
    }
}

fn chase(speed: f32, accel: f32, forward: bool) -> f32 {
    if forward {
        speed + accel
    } else {
        speed - accel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;

    const SCREEN: Size = Size::new(800, 600);

    fn world_with_player(x: f32, y: f32) -> World {
        let mut world = World::new(SCREEN);
        world.player = Rect {
            x,
            y,
            w: 40.0,
            h: 40.0,
        };
        world
    }

    #[test]
    fn dormant_until_entry_delay() {
        let mut t = Tomato::new(Size::new(30, 30), 300);
        let mut world = world_with_player(400.0, 300.0);

        for _ in 0..299 {
            t.update(&mut world);
            assert_eq!(t.body.pos, PARKED);
            assert_eq!(t.velocity, Vec2::default());
        }

        t.update(&mut world);
        assert_ne!(t.velocity, Vec2::default());
        assert_ne!(t.body.pos, PARKED);
        assert!(world.take_events().is_empty());
    }

    #[test]
    fn first_active_step_accelerates_toward_player() {
        let mut t = Tomato::new(Size::new(30, 30), 1);
        let mut world = world_with_player(400.0, 0.0);
        t.body.pos = Vec2::new(500.0, -50.0);

        t.update(&mut world);

        let step = 0.2 * 0.99;
        assert!((t.velocity.x + step).abs() < 1e-6);
        assert!((t.velocity.y - step).abs() < 1e-6);
        assert!((t.body.pos.x - (500.0 - step)).abs() < 1e-4);
        assert!((t.body.pos.y - (-50.0 + step)).abs() < 1e-4);
    }

    #[test]
    fn velocity_damped_by_friction() {
        let mut t = Tomato::new(Size::new(30, 30), 1);
        let mut world = world_with_player(0.0, 0.0);
        t.body.pos = Vec2::new(700.0, 500.0);
        for _ in 0..2000 {
            t.update(&mut world);
            world.take_events();
        }
        // Terminal speed is accel * f / (1 - f) = 19.8 at most.
        assert!(t.velocity.x.abs() < 20.0);
        assert!(t.velocity.y.abs() < 20.0);
    }

    #[test]
    fn contact_ends_session() {
        let mut t = Tomato::new(Size::new(30, 30), 1);
        let mut world = world_with_player(100.0, 100.0);
        t.body.pos = Vec2::new(110.0, 110.0);

        t.update(&mut world);

        assert_eq!(
            world.take_events(),
            vec![Event::Play(Sound::Death), Event::PlayerCaught]
        );
    }

    #[test]
    fn reaches_stationary_player() {
        let mut t = Tomato::new(Size::new(30, 30), 1);
        let mut world = world_with_player(400.0, 300.0);
        let caught = (0..5000).any(|_| {
            t.update(&mut world);
            world.take_events().contains(&Event::PlayerCaught)
        });
        assert!(caught);
    }

    #[test]
    fn reset_is_idempotent() {
        let mut t = Tomato::new(Size::new(30, 30), 600);
        let mut world = world_with_player(0.0, 0.0);
        for _ in 0..700 {
            t.update(&mut world);
        }
        let mut once = t.clone();
        once.reset();
        t.reset();
        t.reset();
        assert_eq!(once, t);
        assert_eq!(t.body.pos, PARKED);
        assert_eq!(t.entry_count, 0);
        assert_eq!(t.entry_delay, 600);
    }
}

use crate::assets::ImageId;
use crate::geometry::{Size, Vec2};
use crate::sprites::{Body, World};

const DEFAULT_SPEED: Vec2 = Vec2::new(5.0, 5.0);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Player sprite steered by start/stop commands.
#[derive(Clone, Debug, PartialEq)]
pub struct Cheese {
    pub body: Body,
    pub moving_up: bool,
    pub moving_down: bool,
    pub moving_left: bool,
    pub moving_right: bool,
    pub speed: Vec2,
}

impl Cheese {
    pub fn new(size: Size, screen: Size) -> Self {
        let mut cheese = Self {
            body: Body::new(ImageId::Cheese, size),
            moving_up: false,
            moving_down: false,
            moving_left: false,
            moving_right: false,
            speed: DEFAULT_SPEED,
        };
        cheese.reset(screen);
        cheese
    }

    pub fn reset(&mut self, screen: Size) {
        self.moving_up = false;
        self.moving_down = false;
        self.moving_left = false;
        self.moving_right = false;
        self.body.pos = Vec2::new(
            (screen.width as f32 - self.body.size.width as f32) / 2.0,
            (screen.height as f32 - self.body.size.height as f32) / 2.0,
        );
        self.speed = DEFAULT_SPEED;
    }

    pub fn start_move(&mut self, dir: Direction) {
        *self.flag_mut(dir) = true;
    }

    pub fn stop_move(&mut self, dir: Direction) {
        *self.flag_mut(dir) = false;
    }

    fn flag_mut(&mut self, dir: Direction) -> &mut bool {
        match dir {
            Direction::Up => &mut self.moving_up,
            Direction::Down => &mut self.moving_down,
            Direction::Left => &mut self.moving_left,
            Direction::Right => &mut self.moving_right,
        }
    }

    pub fn update(&mut self, world: &mut World) {
        let pos = &mut self.body.pos;
        if self.moving_up {
            pos.y -= self.speed.y;
        }
        if self.moving_down {
            pos.y += self.speed.y;
        }
        if self.moving_left {
            pos.x -= self.speed.x;
        }
        if self.moving_right {
            pos.x += self.speed.x;
        }

        let max_x = world.screen.width as f32 - self.body.size.width as f32;
        let max_y = world.screen.height as f32 - self.body.size.height as f32;
        if pos.x < 0.0 {
            pos.x = 0.0;
        }
        if pos.y < 0.0 {
            pos.y = 0.0;
        }
        if pos.x > max_x {
            pos.x = max_x;
        }
        if pos.y > max_y {
            pos.y = max_y;
        }

        world.player = self.body.rect();
    }
}

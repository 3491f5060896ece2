use crate::cheese::Direction;
use winit::event::{ElementState, VirtualKeyCode};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    Quit,
    StartMove(Direction),
    StopMove(Direction),
}

fn direction(key: VirtualKeyCode) -> Option<Direction> {
    match key {
        VirtualKeyCode::Up => Some(Direction::Up),
        VirtualKeyCode::Down => Some(Direction::Down),
        VirtualKeyCode::Left => Some(Direction::Left),
        VirtualKeyCode::Right => Some(Direction::Right),
        _ => None,
    }
}

pub fn command_for(key: VirtualKeyCode, state: ElementState) -> Option<Command> {
    match state {
        ElementState::Pressed => match key {
            VirtualKeyCode::Escape => Some(Command::Quit),
            VirtualKeyCode::G => Some(Command::Start),
            _ => direction(key).map(Command::StartMove),
        },
        ElementState::Released => direction(key).map(Command::StopMove),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_start_and_stop() {
        assert_eq!(
            command_for(VirtualKeyCode::Left, ElementState::Pressed),
            Some(Command::StartMove(Direction::Left))
        );
        assert_eq!(
            command_for(VirtualKeyCode::Left, ElementState::Released),
            Some(Command::StopMove(Direction::Left))
        );
        assert_eq!(
            command_for(VirtualKeyCode::Down, ElementState::Released),
            Some(Command::StopMove(Direction::Down))
        );
    }

    #[test]
    fn start_and_quit_fire_on_press_only() {
        assert_eq!(
            command_for(VirtualKeyCode::G, ElementState::Pressed),
            Some(Command::Start)
        );
        assert_eq!(
            command_for(VirtualKeyCode::Escape, ElementState::Pressed),
            Some(Command::Quit)
        );
        assert_eq!(command_for(VirtualKeyCode::G, ElementState::Released), None);
        assert_eq!(command_for(VirtualKeyCode::Escape, ElementState::Released), None);
    }

    #[test]
    fn other_keys_ignored() {
        assert_eq!(command_for(VirtualKeyCode::W, ElementState::Pressed), None);
        assert_eq!(command_for(VirtualKeyCode::Space, ElementState::Released), None);
    }
}

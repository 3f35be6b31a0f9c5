use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Set of gamepad buttons, either held down or newly
    /// pressed depending on where it came from.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Buttons: u16 {
        const UP = 1 << 0;
        const DOWN = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
        /// The plus button.
        const SUBMIT = 1 << 4;
        /// The home button.
        const RESET = 1 << 5;
    }
}

/// A symbol of the passcode alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Order in which simultaneously pressed directions are
    /// considered, first match wins.
    pub const PRIORITY: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn button(self) -> Buttons {
        match self {
            Direction::Up => Buttons::UP,
            Direction::Down => Buttons::DOWN,
            Direction::Left => Buttons::LEFT,
            Direction::Right => Buttons::RIGHT,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

impl Buttons {
    /// The first direction in `order` that is contained in this set.
    pub fn first_direction(self, order: &[Direction]) -> Option<Direction> {
        order.iter().copied().find(|d| self.contains(d.button()))
    }
}

impl From<Direction> for Buttons {
    fn from(direction: Direction) -> Self {
        direction.button()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn up_wins_over_everything() {
        let all = Buttons::UP | Buttons::DOWN | Buttons::LEFT | Buttons::RIGHT;

        assert_eq!(
            all.first_direction(&Direction::PRIORITY),
            Some(Direction::Up)
        );
    }

    #[test]
    fn left_wins_over_right() {
        let pressed = Buttons::LEFT | Buttons::RIGHT | Buttons::SUBMIT;

        assert_eq!(
            pressed.first_direction(&Direction::PRIORITY),
            Some(Direction::Left)
        );
    }

    #[test]
    fn controls_are_no_direction() {
        let pressed = Buttons::SUBMIT | Buttons::RESET;

        assert_eq!(pressed.first_direction(&Direction::PRIORITY), None);
    }

    #[test]
    fn custom_order_is_respected() {
        let pressed = Buttons::UP | Buttons::RIGHT;

        assert_eq!(
            pressed.first_direction(&[Direction::Right, Direction::Up]),
            Some(Direction::Right)
        );
    }
}

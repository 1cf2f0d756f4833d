use std::fmt;

/// Label naming a movement direction, e.g. "Up" or "Right".
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Direction<'a>(&'a str);

pub const UP: Direction<'static> = Direction("Up");
pub const DOWN: Direction<'static> = Direction("Down");
pub const LEFT: Direction<'static> = Direction("Left");
pub const RIGHT: Direction<'static> = Direction("Right");

impl<'a> Direction<'a> {
    pub const fn new(label: &'a str) -> Self {
        Direction(label)
    }
    pub fn label(&self) -> &'a str {
        self.0
    }
}

impl fmt::Display for Direction<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'a> From<&'a str> for Direction<'a> {
    fn from(label: &'a str) -> Self {
        Direction(label)
    }
}

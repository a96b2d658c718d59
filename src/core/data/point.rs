/// Pixel position, column `x` and row `y`, with rows increasing downwards.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

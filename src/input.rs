// input.rs - Pointer state
//
// Host events overwrite this record as they arrive (last write wins).
// The simulation reads it once per tick and never owns it.

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pointer {
    pub x: f32,
    pub y: f32,
    pub pressed: bool,
}

impl Pointer {
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    pub fn press(&mut self, x: f32, y: f32) {
        self.move_to(x, y);
        self.pressed = true;
    }

    pub fn release(&mut self) {
        self.pressed = false;
    }

    /// Distance from (x, y) to the pointer
    #[inline]
    pub fn distance(&self, x: f32, y: f32) -> f32 {
        let dx = self.x - x;
        let dy = self.y - y;
        (dx * dx + dy * dy).sqrt()
    }
}

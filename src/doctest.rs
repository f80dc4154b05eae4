// This file is included in the documentation examples to avoid some boilerplate.

/// A value type without any arithmetic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tool {
    Pen,
    Brush,
    Eraser,
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

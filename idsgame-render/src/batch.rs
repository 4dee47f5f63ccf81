#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8, pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Background,
    Foreground,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle {
        x: f32,
        y: f32,
        radius: f32,
        color: Color,
        layer: Layer,
    },
    Sprite {
        avatar: String,
        x: f32,
        y: f32,
        scale: f32,
        layer: Layer,
    },
    Label {
        text: String,
        x: f32,
        y: f32,
        color: Color,
        layer: Layer,
    },
}

/// Display list shared by everything drawn in one frame.
#[derive(Debug, Default)]
pub struct Batch {
    shapes: Vec<Shape>,
}

impl Batch {
    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn layer(&self, layer: Layer) -> impl Iterator<Item = &Shape> {
        self.shapes.iter().filter(move |shape| match shape {
            Shape::Circle { layer: l, .. }
            | Shape::Sprite { layer: l, .. }
            | Shape::Label { layer: l, .. } => *l == layer,
        })
    }
}

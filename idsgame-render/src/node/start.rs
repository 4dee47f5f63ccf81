use super::{DrawParams, EdgeId, LinkAnchor, LinkCoords, Node, center_x, resource::Resource};
use crate::{
    batch::{Batch, Layer, Shape},
    constants::ROW_HEIGHT_RATIO,
};

/// Entry point of the attacker. Only a small circle, it has nothing to attack or defend.
#[derive(Debug, Clone)]
pub struct StartNode {
    size: f32,
    col: usize,
    row: usize,
}

impl StartNode {
    pub fn new(size: f32) -> Self {
        Self {
            size,
            col: 0,
            row: 0,
        }
    }

    fn row_height(&self) -> f32 {
        self.size / ROW_HEIGHT_RATIO
    }
}

impl Node for StartNode {
    fn size(&self) -> f32 {
        self.size
    }

    fn manual_blink_defense(&mut self, _i: usize) {}

    fn manual_blink_attack(&mut self, _i: usize, _edges: Option<&[EdgeId]>) {}

    fn set_state(&mut self, _attack_values: &[i32], _defense_values: &[i32], _det_value: i32) {}

    fn defend(&mut self, _defense_type: usize) {}

    fn reset(&mut self) {}

    fn add_in_edge(&mut self, _edges: Vec<EdgeId>) {}

    fn add_out_edge(&mut self, _edges: Vec<EdgeId>) {}

    fn draw(&mut self, params: &DrawParams, batch: &mut Batch) {
        self.col = params.col;
        self.row = params.row;
        let row_height = self.row_height();
        batch.push(Shape::Circle {
            x: center_x(self.col, self.size),
            // rows snap to whole pixels here
            y: self.row as f32 * row_height.floor() + row_height / 2.,
            radius: self.size / 7.,
            color: params.color,
            layer: Layer::Background,
        });
    }

    fn get_link_coords(&self, _anchor: LinkAnchor) -> LinkCoords {
        LinkCoords {
            x: center_x(self.col, self.size),
            y: (self.row + 1) as f32 * self.row_height() - self.size / 1.75,
            col: self.col,
            row: self.row,
        }
    }

    fn get_coords(&self) -> (f32, f32) {
        (self.col as f32, self.row as f32)
    }

    fn get_node(&self) -> Option<&Resource> {
        None
    }

    fn tick(&mut self, _dt: f32) {}
}

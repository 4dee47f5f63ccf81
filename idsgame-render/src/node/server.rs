use super::{DrawParams, EdgeId, LinkAnchor, LinkCoords, Node, center_x, resource::Resource};
use crate::batch::Batch;
use derive_more::{Deref, DerefMut};

/// A compute resource. Edges attach either on top of the sprite or right below it.
#[derive(Debug, Clone, Deref, DerefMut)]
pub struct ServerNode(Resource);

impl ServerNode {
    pub fn new(size: f32) -> Self {
        Self(Resource::new(size))
    }
}

impl Node for ServerNode {
    fn size(&self) -> f32 {
        self.size
    }

    fn manual_blink_defense(&mut self, i: usize) {
        self.blink_defense(i);
    }

    // only data nodes light up the edges the attack came in on
    fn manual_blink_attack(&mut self, i: usize, _edges: Option<&[EdgeId]>) {
        self.blink_attack(i, None);
    }

    fn set_state(&mut self, attack_values: &[i32], defense_values: &[i32], det_value: i32) {
        self.0.set_state(attack_values, defense_values, det_value);
    }

    fn defend(&mut self, defense_type: usize) {
        self.0.defend(defense_type);
    }

    fn reset(&mut self) {
        self.0.reset();
    }

    fn add_in_edge(&mut self, edges: Vec<EdgeId>) {
        self.incoming_edges.push(edges);
    }

    fn add_out_edge(&mut self, edges: Vec<EdgeId>) {
        self.outgoing_edges.push(edges);
    }

    fn draw(&mut self, params: &DrawParams, batch: &mut Batch) {
        self.0.draw(params, batch);
    }

    fn get_link_coords(&self, anchor: LinkAnchor) -> LinkCoords {
        let offset = match anchor {
            LinkAnchor::Upper => self.size / 6.,
            LinkAnchor::Lower => self.size / 1.75,
        };
        LinkCoords {
            x: center_x(self.col, self.size),
            y: self.cell_bottom() - offset,
            col: self.col,
            row: self.row,
        }
    }

    fn get_coords(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    fn get_node(&self) -> Option<&Resource> {
        Some(&self.0)
    }

    fn tick(&mut self, dt: f32) {
        self.0.tick(dt);
    }
}

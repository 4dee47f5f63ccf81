pub mod data;
pub mod resource;
pub mod server;
pub mod start;

use crate::{
    batch::{Batch, Color},
    constants::{DEFAULT_MAX_VALUE, MANUAL_BLINK_INTERVAL, MANUAL_NUM_BLINKS, WHITE},
};
use data::DataNode;
use enum_dispatch::enum_dispatch;
use resource::Resource;
use server::ServerNode;
use start::StartNode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkAnchor {
    Upper,
    Lower,
}

/// Where an edge attaches to a node, in screen space, plus the grid cell of the node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkCoords {
    pub x: f32,
    pub y: f32,
    pub col: usize,
    pub row: usize,
}

#[derive(Debug, Clone)]
pub struct DrawParams {
    pub row: usize,
    pub col: usize,
    pub color: Color,
    pub avatar: String,
    pub scale: f32,
    pub max_value: i32,
    pub blink_interval: f32,
    pub num_blinks: usize,
}

impl DrawParams {
    pub fn at(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            ..Default::default()
        }
    }
}

impl Default for DrawParams {
    fn default() -> Self {
        Self {
            row: 0,
            col: 0,
            color: WHITE,
            avatar: String::new(),
            scale: 1.,
            max_value: DEFAULT_MAX_VALUE,
            blink_interval: MANUAL_BLINK_INTERVAL,
            num_blinks: MANUAL_NUM_BLINKS,
        }
    }
}

/// Screen x of the center of grid column `col`.
pub fn center_x(col: usize, size: f32) -> f32 {
    col as f32 * size + size / 2.
}

/// What every node of the network view has to support. Which kind of node a cell holds is
/// decided once, when the [`NodeKind`] is built.
#[enum_dispatch]
pub trait Node {
    fn size(&self) -> f32;

    fn manual_blink_defense(&mut self, i: usize);

    fn manual_blink_attack(&mut self, i: usize, edges: Option<&[EdgeId]>);

    fn set_state(&mut self, attack_values: &[i32], defense_values: &[i32], det_value: i32);

    fn defend(&mut self, defense_type: usize);

    fn reset(&mut self);

    fn add_in_edge(&mut self, edges: Vec<EdgeId>);

    fn add_out_edge(&mut self, edges: Vec<EdgeId>);

    fn draw(&mut self, params: &DrawParams, batch: &mut Batch);

    fn get_link_coords(&self, anchor: LinkAnchor) -> LinkCoords;

    fn get_coords(&self) -> (f32, f32);

    fn get_node(&self) -> Option<&Resource>;

    /// Advances running blinks by `dt` seconds.
    fn tick(&mut self, dt: f32);
}

#[enum_dispatch(Node)]
#[derive(Debug, Clone)]
pub enum NodeKind {
    Server(ServerNode),
    Data(DataNode),
    Start(StartNode),
}

impl NodeKind {
    pub fn server(size: f32) -> Self {
        Self::Server(ServerNode::new(size))
    }

    pub fn data(size: f32) -> Self {
        Self::Data(DataNode::new(size))
    }

    pub fn start(size: f32) -> Self {
        Self::Start(StartNode::new(size))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::batch::Shape;

    const SIZE: f32 = 60.;

    fn drawn(mut node: NodeKind, row: usize, col: usize) -> NodeKind {
        let mut batch = Batch::default();
        node.draw(&DrawParams::at(row, col), &mut batch);
        node
    }

    #[test]
    fn every_kind_answers_the_whole_contract() {
        let nodes = [NodeKind::server(SIZE), NodeKind::data(SIZE), NodeKind::start(SIZE)];
        for node in nodes {
            let mut node = drawn(node, 1, 2);
            node.set_state(&[1, 2], &[3, 4], 2);
            node.manual_blink_attack(0, Some(&[EdgeId(7)]));
            node.manual_blink_defense(1);
            node.defend(0);
            node.add_in_edge(vec![EdgeId(1)]);
            node.add_out_edge(vec![EdgeId(2), EdgeId(3)]);
            node.tick(0.05);
            let upper = node.get_link_coords(LinkAnchor::Upper);
            assert_eq!((upper.col, upper.row), (2, 1));
            assert_eq!(upper.x, center_x(2, SIZE));
            let _ = node.get_coords();
            node.reset();
            assert_eq!(node.size(), SIZE);
        }
    }

    #[test]
    fn link_coords_per_kind() {
        let row_height = SIZE / 1.5;
        let server = drawn(NodeKind::server(SIZE), 2, 3);
        assert_eq!(
            server.get_link_coords(LinkAnchor::Upper).y,
            3. * row_height - SIZE / 6.
        );
        assert_eq!(
            server.get_link_coords(LinkAnchor::Lower).y,
            3. * row_height - SIZE / 1.75
        );
        let data = drawn(NodeKind::data(SIZE), 2, 3);
        let data_y = 3. * row_height - SIZE / 15.;
        assert_eq!(data.get_link_coords(LinkAnchor::Upper).y, data_y);
        assert_eq!(data.get_link_coords(LinkAnchor::Lower).y, data_y);
        let start = drawn(NodeKind::start(SIZE), 0, 1);
        let start_y = row_height - SIZE / 1.75;
        assert_eq!(start.get_link_coords(LinkAnchor::Upper).y, start_y);
        assert_eq!(start.get_link_coords(LinkAnchor::Lower).y, start_y);
    }

    #[test]
    fn only_resources_expose_a_node() {
        assert!(drawn(NodeKind::server(SIZE), 0, 0).get_node().is_some());
        assert!(drawn(NodeKind::data(SIZE), 0, 0).get_node().is_some());
        assert!(drawn(NodeKind::start(SIZE), 0, 0).get_node().is_none());
    }

    #[test]
    fn start_node_draws_a_single_circle() {
        let mut node = NodeKind::start(SIZE);
        let mut batch = Batch::default();
        node.draw(&DrawParams::at(1, 1), &mut batch);
        assert_eq!(batch.shapes().len(), 1);
        let Shape::Circle { x, y, radius, .. } = batch.shapes()[0] else {
            panic!("expected a circle");
        };
        assert_eq!(x, SIZE + SIZE / 2.);
        assert_eq!(y, (SIZE / 1.5).floor() + (SIZE / 1.5) / 2.);
        assert_eq!(radius, SIZE / 7.);
    }
}

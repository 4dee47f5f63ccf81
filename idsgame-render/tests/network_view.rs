use idsgame_render::{
    batch::{Batch, Layer, Shape},
    node::{DrawParams, EdgeId, LinkAnchor, Node, NodeKind},
};

const SIZE: f32 = 48.;

// start -> two servers -> data, the usual idsgame v3 layout squeezed into three rows
fn network() -> Vec<(usize, usize, NodeKind)> {
    vec![
        (0, 1, NodeKind::start(SIZE)),
        (1, 0, NodeKind::server(SIZE)),
        (1, 2, NodeKind::server(SIZE)),
        (2, 1, NodeKind::data(SIZE)),
    ]
}

#[test]
fn drawing_a_network_fills_both_layers() {
    let mut batch = Batch::default();
    let mut nodes = network();
    for (row, col, node) in nodes.iter_mut() {
        node.set_state(&[0; 3], &[2; 3], 1);
        node.draw(&DrawParams::at(*row, *col), &mut batch);
    }
    // start: one circle, resources: sprite + three labels each
    assert_eq!(batch.shapes().len(), 1 + 3 * 4);
    assert_eq!(batch.layer(Layer::Foreground).count(), 3);
    let circles = batch
        .shapes()
        .iter()
        .filter(|shape| matches!(shape, Shape::Circle { .. }))
        .count();
    assert_eq!(circles, 1);
}

#[test]
fn edges_connect_link_anchors() {
    let mut batch = Batch::default();
    let mut nodes = network();
    for (row, col, node) in nodes.iter_mut() {
        node.draw(&DrawParams::at(*row, *col), &mut batch);
    }
    let (start, rest) = nodes.split_first_mut().unwrap();
    let start = &mut start.2;
    for (idx, (_, _, server)) in rest.iter_mut().take(2).enumerate() {
        let edge = EdgeId(idx);
        start.add_out_edge(vec![edge]);
        server.add_in_edge(vec![edge]);
        let from = start.get_link_coords(LinkAnchor::Lower);
        let to = server.get_link_coords(LinkAnchor::Upper);
        assert!(to.row > from.row);
        assert!(to.y > from.y);
    }
    let server = rest[0].2.get_node().unwrap();
    assert_eq!(server.incoming_edges, vec![vec![EdgeId(0)]]);
}

#[test]
fn attack_blink_runs_out() {
    let mut node = NodeKind::data(SIZE);
    node.draw(&DrawParams::at(2, 1), &mut Batch::default());
    node.set_state(&[1, 1], &[1, 1], 0);
    node.manual_blink_attack(1, Some(&[EdgeId(4)]));
    node.tick(0.1);
    let resource = node.get_node().unwrap();
    assert!(!resource.attack_visible(1));
    assert!(!resource.edges_visible(&[EdgeId(4)]));
    node.tick(5.);
    let resource = node.get_node().unwrap();
    assert!(resource.attack_visible(1));
    assert!(!resource.is_blinking());
}

#[test]
fn server_attack_blink_leaves_edges_alone() {
    let mut node = NodeKind::server(SIZE);
    node.draw(&DrawParams::at(1, 1), &mut Batch::default());
    node.set_state(&[1, 1], &[1, 1], 0);
    node.manual_blink_attack(0, Some(&[EdgeId(2), EdgeId(3)]));
    node.tick(0.1);
    let resource = node.get_node().unwrap();
    assert!(!resource.attack_visible(0));
    assert!(resource.edges_visible(&[EdgeId(2), EdgeId(3)]));
}

use super::{DrawParams, EdgeId, center_x};
use crate::{
    batch::{Batch, Layer, Shape},
    blink::{BlinkTarget, Blinks},
    constants::{
        BLACK, DEFAULT_MAX_VALUE, GREEN, MANUAL_BLINK_INTERVAL, MANUAL_NUM_BLINKS, RED,
        ROW_HEIGHT_RATIO,
    },
};

#[derive(Debug, Clone, PartialEq)]
struct Values {
    attack: Vec<i32>,
    defense: Vec<i32>,
    det: i32,
}

/// State of a node that holds something worth attacking: a server or a data store.
#[derive(Debug, Clone)]
pub struct Resource {
    pub size: f32,
    pub col: usize,
    pub row: usize,
    pub x: f32,
    pub y: f32,
    pub max_value: i32,
    pub incoming_edges: Vec<Vec<EdgeId>>,
    pub outgoing_edges: Vec<Vec<EdgeId>>,
    values: Values,
    initial_values: Option<Values>,
    blink_interval: f32,
    num_blinks: usize,
    blinks: Blinks,
}

impl Resource {
    pub fn new(size: f32) -> Self {
        Self {
            size,
            col: 0,
            row: 0,
            x: center_x(0, size),
            y: size / ROW_HEIGHT_RATIO / 2.,
            max_value: DEFAULT_MAX_VALUE,
            incoming_edges: vec![],
            outgoing_edges: vec![],
            values: Values {
                attack: vec![],
                defense: vec![],
                det: 0,
            },
            initial_values: None,
            blink_interval: MANUAL_BLINK_INTERVAL,
            num_blinks: MANUAL_NUM_BLINKS,
            blinks: Blinks::default(),
        }
    }

    pub fn attack_values(&self) -> &[i32] {
        &self.values.attack
    }

    pub fn defense_values(&self) -> &[i32] {
        &self.values.defense
    }

    pub fn det_value(&self) -> i32 {
        self.values.det
    }

    pub fn attack_visible(&self, i: usize) -> bool {
        self.blinks.is_visible(&BlinkTarget::Attack(i))
    }

    pub fn defense_visible(&self, i: usize) -> bool {
        self.blinks.is_visible(&BlinkTarget::Defense(i))
    }

    pub fn edges_visible(&self, edges: &[EdgeId]) -> bool {
        self.blinks.is_visible(&BlinkTarget::Edges(edges.to_vec()))
    }

    pub fn is_blinking(&self) -> bool {
        self.blinks.is_blinking()
    }

    // y of the bottom border of the cell, link anchors are measured up from there
    pub(crate) fn cell_bottom(&self) -> f32 {
        (self.row + 1) as f32 * (self.size / ROW_HEIGHT_RATIO)
    }

    pub(crate) fn blink_defense(&mut self, i: usize) {
        self.blinks
            .start(BlinkTarget::Defense(i), self.num_blinks, self.blink_interval);
    }

    pub(crate) fn blink_attack(&mut self, i: usize, edges: Option<&[EdgeId]>) {
        self.blinks
            .start(BlinkTarget::Attack(i), self.num_blinks, self.blink_interval);
        if let Some(edges) = edges.filter(|edges| !edges.is_empty()) {
            self.blinks.start(
                BlinkTarget::Edges(edges.to_vec()),
                self.num_blinks,
                self.blink_interval,
            );
        }
    }

    pub(crate) fn set_state(&mut self, attack_values: &[i32], defense_values: &[i32], det: i32) {
        self.values = Values {
            attack: attack_values.to_vec(),
            defense: defense_values.to_vec(),
            det,
        };
        if self.initial_values.is_none() {
            self.initial_values = Some(self.values.clone());
        }
    }

    /// Raises the defense of `defense_type` by one, up to `max_value`, and blinks it.
    pub(crate) fn defend(&mut self, defense_type: usize) {
        if let Some(value) = self.values.defense.get_mut(defense_type) {
            *value = (*value + 1).min(self.max_value);
            self.blink_defense(defense_type);
        }
    }

    pub(crate) fn reset(&mut self) {
        self.blinks.clear();
        if let Some(initial) = &self.initial_values {
            self.values = initial.clone();
        }
    }

    pub(crate) fn draw(&mut self, params: &DrawParams, batch: &mut Batch) {
        self.row = params.row;
        self.col = params.col;
        self.x = center_x(params.col, self.size);
        let row_height = self.size / ROW_HEIGHT_RATIO;
        self.y = params.row as f32 * row_height + row_height / 2.;
        self.max_value = params.max_value;
        self.blink_interval = params.blink_interval;
        self.num_blinks = params.num_blinks;

        batch.push(Shape::Sprite {
            avatar: params.avatar.clone(),
            x: self.x,
            y: self.y,
            scale: params.scale,
            layer: Layer::Foreground,
        });
        let label_x = self.x - self.size / 2.;
        let line_height = self.size / 8.;
        let labels = [
            (format_values(&self.values.attack), RED),
            (format_values(&self.values.defense), GREEN),
            (self.values.det.to_string(), BLACK),
        ];
        for (line, (text, color)) in labels.into_iter().enumerate() {
            batch.push(Shape::Label {
                text,
                x: label_x,
                y: self.y + self.size / 3. - line as f32 * line_height,
                color,
                layer: Layer::Background,
            });
        }
    }

    pub(crate) fn tick(&mut self, dt: f32) {
        self.blinks.tick(dt);
    }
}

fn format_values(values: &[i32]) -> String {
    values
        .iter()
        .map(i32::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defense_is_capped_and_blinks() {
        let mut resource = Resource::new(60.);
        resource.max_value = 3;
        resource.set_state(&[0, 0], &[2, 3], 1);
        resource.defend(0);
        resource.defend(0);
        resource.defend(1);
        assert_eq!(resource.defense_values(), &[3, 3]);
        assert!(resource.is_blinking());
        resource.tick(MANUAL_BLINK_INTERVAL);
        assert!(!resource.defense_visible(0));
        assert!(resource.attack_visible(0));
    }

    #[test]
    fn unknown_defense_type_is_ignored() {
        let mut resource = Resource::new(60.);
        resource.set_state(&[0], &[1], 0);
        resource.defend(4);
        assert_eq!(resource.defense_values(), &[1]);
        assert!(!resource.is_blinking());
    }

    #[test]
    fn reset_restores_first_state() {
        let mut resource = Resource::new(60.);
        resource.set_state(&[1, 1], &[2, 2], 1);
        resource.set_state(&[5, 5], &[6, 6], 0);
        resource.blink_attack(1, Some(&[EdgeId(3)]));
        resource.reset();
        assert_eq!(resource.attack_values(), &[1, 1]);
        assert_eq!(resource.defense_values(), &[2, 2]);
        assert_eq!(resource.det_value(), 1);
        assert!(!resource.is_blinking());
    }

    #[test]
    fn attack_blink_covers_edges() {
        let mut resource = Resource::new(60.);
        let edges = [EdgeId(1), EdgeId(2)];
        resource.blink_attack(0, Some(&edges));
        resource.tick(MANUAL_BLINK_INTERVAL);
        assert!(!resource.attack_visible(0));
        assert!(!resource.edges_visible(&edges));
        assert!(resource.edges_visible(&[EdgeId(9)]));
    }

    #[test]
    fn draw_places_sprite_and_labels() {
        let mut resource = Resource::new(60.);
        resource.set_state(&[1, 2, 3], &[4, 5, 6], 2);
        let mut batch = Batch::default();
        resource.draw(&DrawParams::at(2, 1), &mut batch);
        assert_eq!((resource.x, resource.y), (90., 2. * 40. + 20.));
        assert_eq!(batch.layer(Layer::Foreground).count(), 1);
        let texts: Vec<_> = batch
            .layer(Layer::Background)
            .filter_map(|shape| match shape {
                Shape::Label { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, ["1,2,3", "4,5,6", "2"]);
    }
}

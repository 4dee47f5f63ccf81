use crate::node::EdgeId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlinkTarget {
    Attack(usize),
    Defense(usize),
    Edges(Vec<EdgeId>),
}

/// A running blink: the target toggles its visibility every `interval` seconds until it has
/// toggled `remaining` more times. It always ends visible.
#[derive(Debug, Clone)]
pub struct Blink {
    pub target: BlinkTarget,
    remaining: usize,
    interval: f32,
    elapsed: f32,
    visible: bool,
}

impl Blink {
    pub fn new(target: BlinkTarget, num_blinks: usize, interval: f32) -> Self {
        Self {
            target,
            remaining: num_blinks,
            interval,
            elapsed: 0.,
            visible: true,
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn is_done(&self) -> bool {
        self.remaining == 0
    }

    pub fn tick(&mut self, dt: f32) {
        if self.interval <= 0. {
            self.remaining = 0;
            self.visible = true;
            return;
        }
        self.elapsed += dt;
        while self.remaining > 0 && self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            self.visible = !self.visible;
            self.remaining -= 1;
        }
        if self.remaining == 0 {
            self.visible = true;
        }
    }
}

/// Blinks of a single node. Starting a blink on a target that is already blinking restarts it.
#[derive(Debug, Clone, Default)]
pub struct Blinks(Vec<Blink>);

impl Blinks {
    pub fn start(&mut self, target: BlinkTarget, num_blinks: usize, interval: f32) {
        self.0.retain(|blink| blink.target != target);
        if num_blinks > 0 {
            self.0.push(Blink::new(target, num_blinks, interval));
        }
    }

    pub fn tick(&mut self, dt: f32) {
        for blink in self.0.iter_mut() {
            blink.tick(dt);
        }
        self.0.retain(|blink| !blink.is_done());
    }

    pub fn is_visible(&self, target: &BlinkTarget) -> bool {
        self.0
            .iter()
            .find(|blink| &blink.target == target)
            .is_none_or(Blink::visible)
    }

    pub fn is_blinking(&self) -> bool {
        !self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

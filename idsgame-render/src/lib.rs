// Node layer of the network view. Produces a display list, actually putting pixels on a screen is
// up to whoever consumes the batch.
pub mod batch;
pub mod blink;
pub mod constants;
pub mod node;

// Experiment drivers: every experiment owns its default configuration and output directory, the
// run itself is shared.
pub mod plotting;
pub mod training;
pub mod util;

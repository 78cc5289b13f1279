pub mod options;
pub mod slots;

pub use options::{compose_label, slot_option};
pub use slots::SlotStore;

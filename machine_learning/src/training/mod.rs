mod snapshot;
mod trainer;

pub use snapshot::EpochSnapshot;
pub use trainer::{EPOCHS, Epochs, Trainer};

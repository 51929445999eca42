//! Training infrastructure for BPE tokenizers.

pub mod trainer;

pub use trainer::{BpeTrainer, TrainingConfig};

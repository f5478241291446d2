use dn_core::Label;
use dn_features::SparseVector;

/// Fits a model from one sparse vector per image.
///
/// `vectors[i]` is labeled `labels[i]`; both slices have the same length.
pub trait Trainer {
    type Model: Model;
    type Error: std::error::Error + Send + Sync + 'static;

    fn train(&self, vectors: &[SparseVector], labels: &[Label]) -> Result<Self::Model, Self::Error>;
}

pub trait Model {
    fn predict(&self, vector: &SparseVector) -> Label;
}

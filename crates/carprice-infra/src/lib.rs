//! Infrastructure layer - loaders for the model artifact and reference dataset

pub mod model_artifact;
pub mod reference_dataset;

pub use model_artifact::{LinearModel, ModelArtifact};
pub use reference_dataset::{brand_from_name, ReferenceChoices, UnencodableLabel};

// clusterlink-core/src/ports/mod.rs

pub mod parameter_store;
pub mod template_source;

pub use parameter_store::{ParameterRecord, ParameterStore};
pub use template_source::TemplateSource;

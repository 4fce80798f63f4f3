//! Customer read model and related types.

mod read_model;
mod value_objects;

pub use read_model::{CustomerReadModel, CustomerReadModelBuilder};
pub use value_objects::CustomerId;

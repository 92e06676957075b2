pub mod descriptor;
pub mod schema;
pub(crate) mod validation;

pub use descriptor::provider_descriptor;
pub use schema::{ResponseSchema, SchemaHandle};

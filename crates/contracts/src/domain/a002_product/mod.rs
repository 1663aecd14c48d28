pub mod aggregate;

pub use aggregate::{Product, ProductCreate, ProductId, ProductPatch, ProductUpdate};

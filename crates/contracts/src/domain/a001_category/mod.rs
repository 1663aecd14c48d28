pub mod aggregate;

pub use aggregate::{Category, CategoryCreate, CategoryId, CategoryUpdate};

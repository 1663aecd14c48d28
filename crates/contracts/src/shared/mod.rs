pub mod pagination;

pub use pagination::{PagedResponse, PaginationMeta};

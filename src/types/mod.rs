mod page_label;
mod pagination;

pub use page_label::*;
pub use pagination::*;

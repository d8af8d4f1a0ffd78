//! Core module containing the error taxonomy, the persistence interface and
//! the shaping helpers shared by the resource managers

pub mod aggregate;
pub mod error;
pub mod extractors;
pub mod slug;
pub mod store;

pub use aggregate::group_ordered;
pub use error::{BizError, BizResult, ErrorResponse, StoreError, StoreResult};
pub use extractors::JsonBody;
pub use slug::Slugifier;
pub use store::BizStore;

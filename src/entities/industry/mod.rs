//! Industry entity module

pub mod descriptor;
pub mod handlers;
pub mod manager;
pub mod model;

pub use descriptor::IndustryDescriptor;
pub use manager::IndustryManager;
pub use model::{CompanyIndustry, Industry, IndustryCompanyRow, IndustryMembers, IndustryPayload};

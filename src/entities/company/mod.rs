//! Company entity module

pub mod descriptor;
pub mod handlers;
pub mod manager;
pub mod model;

pub use descriptor::CompanyDescriptor;
pub use manager::CompanyManager;
pub use model::{
    AddIndustryPayload, Company, CompanyDetail, CompanyIndustryRow, CompanyPayload,
    CompanySummary,
};

//! # BizTime
//!
//! A REST API over companies, the invoices they issue and the industries
//! they belong to.
//!
//! ## Features
//!
//! - **Three resources**: `/companies`, `/invoices` and `/industries`, each
//!   with its own manager, handlers and route descriptor
//! - **Nested views**: join rows are grouped into company and industry
//!   documents in first-seen order
//! - **Typed failures**: stores classify constraint violations into
//!   [`StoreError`](core::StoreError); managers turn them into
//!   [`BizError`](core::BizError) with a fixed HTTP status
//! - **Pluggable storage**: an in-memory store and, behind the `postgres`
//!   feature, a sqlx PostgreSQL store
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use biztime::prelude::*;
//!
//! let app = ServerBuilder::new()
//!     .with_store(InMemoryStore::new())
//!     .build()?;
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        BizError, BizResult, BizStore, ErrorResponse, JsonBody, Slugifier, StoreError,
        StoreResult, group_ordered,
    };

    // === Entities ===
    pub use crate::entities::company::{
        AddIndustryPayload, Company, CompanyDetail, CompanyManager, CompanyPayload,
        CompanySummary,
    };
    pub use crate::entities::industry::{
        CompanyIndustry, Industry, IndustryManager, IndustryMembers, IndustryPayload,
    };
    pub use crate::entities::invoice::{
        Invoice, InvoiceDetail, InvoiceManager, InvoiceSummary, NewInvoicePayload,
        UpdateInvoicePayload,
    };

    // === Storage ===
    pub use crate::storage::InMemoryStore;
    #[cfg(feature = "postgres")]
    pub use crate::storage::PostgresStore;

    // === Config ===
    pub use crate::config::{AppConfig, StorageKind};

    // === Server ===
    pub use crate::server::{EntityDescriptor, EntityRegistry, ServerBuilder};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};
}

//! Domain layer for the CRM backend.
//!
//! This crate provides the query-side customer shape:
//! - [`CustomerReadModel`], an immutable snapshot of a customer's current state
//! - [`CustomerId`], the typed customer identifier

pub mod customer;

pub use customer::{CustomerId, CustomerReadModel, CustomerReadModelBuilder};

//! Lifecycle logic for a regional replica of a global table.
//!
//! The orchestrator drives a replica through two independent, stateless
//! phases:
//!
//! ```text
//! LifecycleEvent ──► planner::on_event     (once)
//!                      │  describe (Update only), then at most one update
//!                      ▼
//!                    OnEventResponse { PhysicalResourceId? }
//!
//! LifecycleEvent ──► checker::is_complete  (polled)
//!                      │  one describe, no mutation
//!                      ▼
//!                    IsCompleteResponse { IsComplete }
//! ```
//!
//! Both phases are generic over [`TableService`], so the decisions can be
//! exercised against fabricated table snapshots. The decision tables
//! themselves are the pure functions [`planner::plan`] and
//! [`checker::evaluate`].

pub mod checker;
pub mod error;
pub mod planner;
pub mod service;
pub mod table;
pub mod types;

pub use checker::is_complete;
pub use error::{EventError, Result};
pub use planner::on_event;
pub use service::{ReplicaUpdate, TableService};
pub use table::{ReplicaDescription, ReplicaStatus, TableDescription, TableStatus};
pub use types::{
    IsCompleteResponse, LifecycleEvent, OnEventResponse, RequestType, ResourceProperties,
};

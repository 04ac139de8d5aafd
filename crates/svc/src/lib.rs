//! Wrap any long-running program so it can be managed uniformly as a
//! background service across operating systems.
//!
//! A wrapped program implements the [`Process`] contract: a blocking
//! [`run`](Process::run) entry point and a graceful
//! [`interrupt`](Process::interrupt). [`Service::run`] launches the process,
//! listens concurrently for the OS termination signals, and reconciles
//! whichever terminal event happens first into a single outcome for the
//! caller.
//!
//! ```rust,no_run
//! use anyhow::Result;
//! use async_trait::async_trait;
//! use svc::{Process, Service};
//!
//! struct Worker;
//!
//! #[async_trait]
//! impl Process for Worker {
//!     async fn run(&self) -> Result<()> {
//!         // block until the work completes or fails
//!         Ok(())
//!     }
//!
//!     async fn interrupt(&self) -> Result<()> {
//!         // ask the blocked run to return promptly
//!         Ok(())
//!     }
//! }
//!
//! # async fn example() -> Result<()> {
//! let service = Service::new(Worker)?;
//! service.run().await?;
//! # Ok(())
//! # }
//! ```
//!
//! Installing or removing the OS-native service definition is left to an
//! external collaborator; [`Service::name`], [`Service::description`] and
//! [`Service::executables`] expose the resolved configuration it needs.

mod factory;
mod service;

pub use factory::PlatformTerminationSignalsFactory;
pub use service::Service;

// Re-export core functionality
pub use svc_core::*;

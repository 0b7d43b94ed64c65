//! node-flag-audit - launch-flag recommendations for Node.js projects
//!
//! Reads a project's `package.json`, profiles the host (CPU count, memory,
//! platform) and recommends Node.js runtime flags for the `start` and
//! `debug` scripts. Optionally checks the declared dependencies against the
//! npm registry and the OSV advisory database.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`flag_audit`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use node_flag_audit::prelude::*;
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! let use_case: RunAuditUseCase<_, _, NpmRegistryClient, OsvClient, _> = RunAuditUseCase::new(
//!     SysinfoHostFacts::new(),
//!     FileSystemReader::new(),
//!     None,
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = AuditRequest::new(PathBuf::from("."), Environment::Production);
//! let response = use_case.execute(request).await?;
//!
//! let output = JsonFormatter::new().format(&response.result)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod flag_audit;
pub mod ports;
pub mod shared;
pub mod telemetry;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        ConsoleFormatter, JsonFormatter, MarkdownFormatter,
    };
    pub use crate::adapters::outbound::network::{NpmRegistryClient, OsvClient};
    pub use crate::adapters::outbound::system::SysinfoHostFacts;
    pub use crate::application::dto::{AuditRequest, AuditResponse, OutputFormat};
    pub use crate::application::use_cases::{CheckDependenciesUseCase, RunAuditUseCase};
    pub use crate::flag_audit::domain::{
        AuditResult, Category, Dependency, DependencyReport, Environment, FlagSet, FlagSpec,
        HostFacts, Importance, Priority, Recommendation, ResourceProfile, Scripts,
        SynthesizedFlags,
    };
    pub use crate::flag_audit::services::{FlagSynthesizer, ResourceProfiler, ScriptAnalyzer};
    pub use crate::ports::inbound::AuditPort;
    pub use crate::ports::outbound::{
        AuditFormatter, HostFactsProvider, ManifestReader, OutputPresenter, PackageManifest,
        PackageRegistry, ProgressReporter, VulnerabilityRepository,
    };
    pub use crate::shared::{AuditError, ExitCode, Result};
}

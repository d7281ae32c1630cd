//! # suite_core - Suite Placement Engine
//!
//! `suite_core` configures the residential floors of a modular building. Given
//! an envelope (width, height, floor height) and a desired suite mix, it
//! works out how many suites of each type fit and where each one goes.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions from configuration to layout
//! - **Deterministic**: Identical inputs give identical layouts, ids included
//! - **Never fails**: Degenerate inputs degrade to a renderable layout, with
//!   losses reported as [`PlacementIssue`]s
//! - **JSON-First**: Configuration and results implement Serialize
//!
//! ## Quick Start
//!
//! ```rust
//! use suite_core::layout::generate;
//! use suite_core::project::Project;
//! use suite_core::summary::summarize;
//!
//! let project = Project::new("Harbour Street");
//! let layout = generate(&project.parameters, &project.mix);
//! let summary = summarize(&layout);
//! assert_eq!(summary.elevator.module_total, layout.capacity().floor_count);
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Suite types, rows and building geometry constants
//! - [`project`] - Project container, envelope and suite mix
//! - [`capacity`] - Module counts derived from the envelope
//! - [`quota`] - Suite counts from mix percentages
//! - [`packer`] - Assigning suites to floors
//! - [`placer`] - Positioning suites within a floor
//! - [`layout`] - Pipeline, presentation order and layout publication
//! - [`summary`] - Per-type comparison table
//! - [`diagnostics`] - Placement issues
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod capacity;
pub mod catalog;
pub mod diagnostics;
pub mod errors;
pub mod layout;
pub mod packer;
pub mod placer;
pub mod project;
pub mod quota;
pub mod summary;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use catalog::{Row, SuiteType};
pub use diagnostics::PlacementIssue;
pub use errors::{LayoutError, LayoutResult};
pub use layout::{generate, BuildingLayout, LayoutPublisher};
pub use placer::{FloorPlan, InstanceId, ModuleSlot, SuiteInstance};
pub use project::{Project, ProjectParameters, SuiteMix};
pub use summary::{summarize, LayoutSummary};

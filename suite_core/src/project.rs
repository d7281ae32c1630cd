//! # Project Data Structures
//!
//! The `Project` struct is the root container for one building configuration:
//! the envelope (`ProjectParameters`) and the desired suite mix (`SuiteMix`).
//! Projects serialize to human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (version, id, name, timestamps)
//! ├── parameters: ProjectParameters (width, height, floor height, stairs)
//! └── mix: SuiteMix (percentage per suite type)
//! ```
//!
//! Validation here is for callers. The placement engine assumes sanitized
//! numbers and only clamps derived counts.
//!
//! ## Example
//!
//! ```rust
//! use suite_core::project::Project;
//!
//! let project = Project::new("Harbour Street");
//! let json = project.to_json().unwrap();
//! let loaded = Project::from_json(&json).unwrap();
//! assert_eq!(loaded.meta.name, "Harbour Street");
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::capacity;
use crate::catalog::{SuiteType, ALLOWED_FLOOR_HEIGHTS, MAX_FLOORS, MAX_SINGLE_SIDE_MODULES};
use crate::errors::{LayoutError, LayoutResult};
use crate::units::Meters;

/// Current schema version for project documents
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Tolerance used when matching a floor height against the allowed set
const FLOOR_HEIGHT_TOLERANCE: f64 = 1e-6;

/// Tolerance on the mix total when checking it sums to 100
const MIX_TOTAL_TOLERANCE: f64 = 0.01;

/// Building envelope inputs that drive the capacity model.
///
/// ## JSON Example
///
/// ```json
/// {
///   "width": 49.2,
///   "height": 10.0,
///   "floor_height": 3.175,
///   "include_stairs": true
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectParameters {
    /// Building length along the rows
    pub width: Meters,

    /// Total building height
    pub height: Meters,

    /// Floor-to-floor height, one of [`ALLOWED_FLOOR_HEIGHTS`]
    pub floor_height: Meters,

    /// Whether stair cores are counted in the summary
    pub include_stairs: bool,
}

impl Default for ProjectParameters {
    fn default() -> Self {
        ProjectParameters {
            width: Meters(49.2),
            height: Meters(10.0),
            floor_height: ALLOWED_FLOOR_HEIGHTS[1],
            include_stairs: true,
        }
    }
}

impl ProjectParameters {
    /// Validate input parameters.
    ///
    /// Rejects envelopes wider than [`MAX_SINGLE_SIDE_MODULES`] modules or
    /// taller than [`MAX_FLOORS`] floors.
    pub fn validate(&self) -> LayoutResult<()> {
        if !self.width.0.is_finite() || self.width.0 <= 0.0 {
            return Err(LayoutError::invalid_input(
                "width",
                self.width.0.to_string(),
                "Width must be a positive number",
            ));
        }
        if !self.height.0.is_finite() || self.height.0 <= 0.0 {
            return Err(LayoutError::invalid_input(
                "height",
                self.height.0.to_string(),
                "Height must be a positive number",
            ));
        }
        let allowed = ALLOWED_FLOOR_HEIGHTS
            .iter()
            .any(|h| (h.0 - self.floor_height.0).abs() < FLOOR_HEIGHT_TOLERANCE);
        if !allowed {
            let options: Vec<String> = ALLOWED_FLOOR_HEIGHTS
                .iter()
                .map(|h| h.0.to_string())
                .collect();
            return Err(LayoutError::invalid_input(
                "floor_height",
                self.floor_height.0.to_string(),
                format!("Floor height must be one of {}", options.join(", ")),
            ));
        }
        if capacity::single_side_count(self.width) > MAX_SINGLE_SIDE_MODULES {
            return Err(LayoutError::invalid_input(
                "width",
                self.width.0.to_string(),
                format!("Width exceeds {} modules per row", MAX_SINGLE_SIDE_MODULES),
            ));
        }
        if capacity::floor_count(self.height, self.floor_height) > MAX_FLOORS {
            return Err(LayoutError::invalid_input(
                "height",
                self.height.0.to_string(),
                format!("Height exceeds {} floors", MAX_FLOORS),
            ));
        }
        Ok(())
    }
}

/// Desired share of each suite type, in percent.
///
/// Expected to sum to 100; the engine does not enforce it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SuiteMix {
    #[serde(rename = "studio")]
    pub studio: f64,
    #[serde(rename = "one-bed")]
    pub one_bed: f64,
    #[serde(rename = "two-bed")]
    pub two_bed: f64,
    #[serde(rename = "three-bed")]
    pub three_bed: f64,
}

impl Default for SuiteMix {
    fn default() -> Self {
        SuiteMix {
            studio: 25.0,
            one_bed: 35.0,
            two_bed: 25.0,
            three_bed: 15.0,
        }
    }
}

impl SuiteMix {
    /// A mix with every percentage at zero
    pub fn empty() -> Self {
        SuiteMix {
            studio: 0.0,
            one_bed: 0.0,
            two_bed: 0.0,
            three_bed: 0.0,
        }
    }

    /// A mix requesting only `suite`
    pub fn only(suite: SuiteType) -> Self {
        SuiteMix::empty().with(suite, 100.0)
    }

    /// Set one percentage (builder pattern)
    pub fn with(mut self, suite: SuiteType, percentage: f64) -> Self {
        self.set(suite, percentage);
        self
    }

    /// Percentage requested for `suite`
    pub fn percentage(&self, suite: SuiteType) -> f64 {
        match suite {
            SuiteType::Studio => self.studio,
            SuiteType::OneBed => self.one_bed,
            SuiteType::TwoBed => self.two_bed,
            SuiteType::ThreeBed => self.three_bed,
        }
    }

    pub fn set(&mut self, suite: SuiteType, percentage: f64) {
        match suite {
            SuiteType::Studio => self.studio = percentage,
            SuiteType::OneBed => self.one_bed = percentage,
            SuiteType::TwoBed => self.two_bed = percentage,
            SuiteType::ThreeBed => self.three_bed = percentage,
        }
    }

    /// Sum of all percentages
    pub fn total(&self) -> f64 {
        SuiteType::ALL.iter().map(|t| self.percentage(*t)).sum()
    }

    /// Validate that every share is in [0, 100] and the shares sum to 100.
    pub fn validate(&self) -> LayoutResult<()> {
        for suite in SuiteType::ALL {
            let pct = self.percentage(suite);
            if !pct.is_finite() || !(0.0..=100.0).contains(&pct) {
                return Err(LayoutError::invalid_input(
                    suite.id(),
                    pct.to_string(),
                    "Percentage must be between 0 and 100",
                ));
            }
        }
        let total = self.total();
        if (total - 100.0).abs() > MIX_TOTAL_TOLERANCE {
            return Err(LayoutError::invalid_input(
                "mix",
                total.to_string(),
                "Percentages must sum to 100",
            ));
        }
        Ok(())
    }
}

/// Root project container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project metadata (version, identity, timestamps)
    pub meta: ProjectMetadata,

    /// Building envelope
    pub parameters: ProjectParameters,

    /// Requested suite mix
    pub mix: SuiteMix,
}

impl Project {
    /// Create a new project with default parameters and mix.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Project {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                id: Uuid::new_v4(),
                name: name.into(),
                created: now,
                modified: now,
            },
            parameters: ProjectParameters::default(),
            mix: SuiteMix::default(),
        }
    }

    /// Replace the envelope and mark the project modified
    pub fn set_parameters(&mut self, parameters: ProjectParameters) {
        self.parameters = parameters;
        self.touch();
    }

    /// Replace the mix and mark the project modified
    pub fn set_mix(&mut self, mix: SuiteMix) {
        self.mix = mix;
        self.touch();
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    /// Validate both the envelope and the mix
    pub fn validate(&self) -> LayoutResult<()> {
        self.parameters.validate()?;
        self.mix.validate()
    }

    pub fn to_json(&self) -> LayoutResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a project document, rejecting other schema versions.
    ///
    /// A document without one of its top-level sections is reported as
    /// [`LayoutError::MissingField`].
    pub fn from_json(json: &str) -> LayoutResult<Self> {
        let document: serde_json::Value = serde_json::from_str(json)?;
        if let Some(section) = ["meta", "parameters", "mix"]
            .into_iter()
            .find(|section| document.get(section).is_none())
        {
            return Err(LayoutError::missing_field(section));
        }
        let project: Project = serde_json::from_value(document)?;
        if project.meta.version != SCHEMA_VERSION {
            return Err(LayoutError::VersionMismatch {
                file_version: project.meta.version,
                expected_version: SCHEMA_VERSION.to_string(),
            });
        }
        Ok(project)
    }
}

impl Default for Project {
    fn default() -> Self {
        Project::new("")
    }
}

/// Project metadata stored in the document header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Project identity
    pub id: Uuid,

    pub name: String,

    /// When the project was created
    pub created: DateTime<Utc>,

    /// When the project was last modified
    pub modified: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_creation() {
        let project = Project::new("Harbour Street");
        assert_eq!(project.meta.name, "Harbour Street");
        assert_eq!(project.meta.version, SCHEMA_VERSION);
        assert!(project.validate().is_ok());
    }

    #[test]
    fn test_project_serialization() {
        let project = Project::new("Elm Court");
        let json = project.to_json().unwrap();

        assert!(json.contains("Elm Court"));
        assert!(json.contains("\"floor_height\": 3.175"));
        assert!(json.contains("\"three-bed\": 15.0"));

        let roundtrip = Project::from_json(&json).unwrap();
        assert_eq!(roundtrip.meta.id, project.meta.id);
        assert_eq!(roundtrip.parameters, project.parameters);
        assert_eq!(roundtrip.mix, project.mix);
    }

    #[test]
    fn test_version_mismatch() {
        let mut project = Project::new("Old");
        project.meta.version = "0.0.1".to_string();
        let json = serde_json::to_string(&project).unwrap();
        let err = Project::from_json(&json).unwrap_err();
        assert_eq!(err.error_code(), "VERSION_MISMATCH");
    }

    #[test]
    fn test_missing_section() {
        let project = Project::new("Partial");
        let mut document = serde_json::to_value(&project).unwrap();
        document.as_object_mut().unwrap().remove("mix");

        let err = Project::from_json(&document.to_string()).unwrap_err();
        assert_eq!(err, LayoutError::missing_field("mix"));
        assert_eq!(err.error_code(), "MISSING_FIELD");

        let err = Project::from_json("[]").unwrap_err();
        assert_eq!(err, LayoutError::missing_field("meta"));
    }

    #[test]
    fn test_set_mix_touches() {
        let mut project = Project::new("Touch");
        let before = project.meta.modified;
        project.set_mix(SuiteMix::only(SuiteType::Studio));
        assert!(project.meta.modified >= before);
        assert_eq!(project.mix.studio, 100.0);
    }

    #[test]
    fn test_parameter_validation() {
        let mut params = ProjectParameters::default();
        assert!(params.validate().is_ok());

        params.width = Meters(0.0);
        assert!(params.validate().is_err());

        params = ProjectParameters::default();
        params.height = Meters(f64::NAN);
        assert!(params.validate().is_err());

        params = ProjectParameters::default();
        params.floor_height = Meters(3.0);
        let err = params.validate().unwrap_err();
        assert!(matches!(
            err,
            LayoutError::InvalidInput { ref field, .. } if field == "floor_height"
        ));
    }

    #[test]
    fn test_oversized_envelope_rejected() {
        let params = ProjectParameters {
            width: Meters(1e300),
            ..ProjectParameters::default()
        };
        let err = params.validate().unwrap_err();
        assert!(matches!(err, LayoutError::InvalidInput { ref field, .. } if field == "width"));

        let params = ProjectParameters {
            height: Meters(1e9),
            ..ProjectParameters::default()
        };
        let err = params.validate().unwrap_err();
        assert!(matches!(err, LayoutError::InvalidInput { ref field, .. } if field == "height"));

        // 64 modules of 3.7846 m, 40 floors of 3.175 m
        let params = ProjectParameters {
            width: Meters(242.0),
            height: Meters(127.0),
            ..ProjectParameters::default()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_mix_validation() {
        assert!(SuiteMix::default().validate().is_ok());
        assert!(SuiteMix::only(SuiteType::TwoBed).validate().is_ok());
        assert!(SuiteMix::empty().validate().is_err());
        assert!(SuiteMix::empty().with(SuiteType::Studio, 120.0).validate().is_err());
        assert!(SuiteMix::empty().with(SuiteType::Studio, -5.0).validate().is_err());
    }

    #[test]
    fn test_mix_accessors() {
        let mix = SuiteMix::empty()
            .with(SuiteType::Studio, 40.0)
            .with(SuiteType::ThreeBed, 60.0);
        assert_eq!(mix.percentage(SuiteType::Studio), 40.0);
        assert_eq!(mix.percentage(SuiteType::OneBed), 0.0);
        assert_eq!(mix.total(), 100.0);
    }
}

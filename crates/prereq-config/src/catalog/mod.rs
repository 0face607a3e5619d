//! prereq.toml catalog parsing and serialization

use camino::Utf8Path;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use prereq_core::error::PrereqError;
use prereq_core::types::{Cost, CyclePolicy};
use prereq_core::utils::validate_item_name;
use prereq_resolver::CourseGraph;

use crate::ConfigResult;

/// Complete prereq.toml catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Resolver settings
    #[serde(default)]
    pub resolver: ResolverSection,

    /// Courses keyed by name, in file order
    #[serde(default)]
    pub courses: IndexMap<String, CourseSpec>,
}

/// Resolver settings section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolverSection {
    /// Cycle policy ("strict" or "merge")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<CyclePolicy>,
}

/// Course entry, either a prerequisite list or a detailed table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CourseSpec {
    /// Prerequisites only, zero cost: `B = ["A"]`
    Simple(Vec<String>),

    /// Detailed course table
    Detailed {
        /// Time to complete this course alone
        #[serde(default)]
        cost: f64,

        /// Courses that must be completed first
        #[serde(default)]
        prerequisites: Vec<String>,

        /// Human-readable title
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },
}

impl CourseSpec {
    /// Own cost of the course
    pub fn cost(&self) -> f64 {
        match self {
            CourseSpec::Simple(_) => 0.0,
            CourseSpec::Detailed { cost, .. } => *cost,
        }
    }

    /// Declared prerequisites
    pub fn prerequisites(&self) -> &[String] {
        match self {
            CourseSpec::Simple(prerequisites) => prerequisites,
            CourseSpec::Detailed { prerequisites, .. } => prerequisites,
        }
    }

    /// Title, if one was given
    pub fn title(&self) -> Option<&str> {
        match self {
            CourseSpec::Simple(_) => None,
            CourseSpec::Detailed { title, .. } => title.as_deref(),
        }
    }
}

impl Catalog {
    /// Cycle policy, defaulting to merge
    pub fn policy(&self) -> CyclePolicy {
        self.resolver.policy.unwrap_or_default()
    }

    /// Build a course graph from the catalog
    pub fn to_graph(&self) -> ConfigResult<CourseGraph> {
        let mut graph = CourseGraph::new();
        for (name, spec) in &self.courses {
            graph.add_item(name.as_str(), spec.cost(), spec.prerequisites().iter().cloned())?;
        }
        Ok(graph)
    }
}

/// Parse TOML string to a Catalog
pub fn parse_catalog_toml(content: &str) -> ConfigResult<Catalog> {
    // First try with toml_edit for better error reporting
    content
        .parse::<toml_edit::DocumentMut>()
        .map_err(|e| PrereqError::TomlParse {
            message: format!("TOML syntax error: {}", e),
        })?;

    // Then parse with serde for type safety
    let catalog: Catalog = toml::from_str(content).map_err(|e| PrereqError::TomlParse {
        message: format!("TOML parsing error: {}", e),
    })?;

    validate_catalog(&catalog)?;

    Ok(catalog)
}

/// Serialize a Catalog to TOML string
pub fn serialize_catalog_toml(catalog: &Catalog) -> ConfigResult<String> {
    toml::to_string_pretty(catalog).map_err(|e| PrereqError::TomlParse {
        message: format!("TOML serialization error: {}", e),
    })
}

/// Validate course names, prerequisite names and costs
pub fn validate_catalog(catalog: &Catalog) -> ConfigResult<()> {
    for (name, spec) in &catalog.courses {
        validate_item_name("courses", name)?;

        if Cost::new(spec.cost()).is_err() {
            return Err(PrereqError::ConfigValidation {
                field: format!("courses.{}.cost", name),
                reason: format!(
                    "cost {} must be finite and non-negative",
                    spec.cost()
                ),
            });
        }

        for prerequisite in spec.prerequisites() {
            validate_item_name(&format!("courses.{}.prerequisites", name), prerequisite)?;
        }
    }

    Ok(())
}

/// Load and parse prereq.toml from file path
pub async fn load_from_file(path: &Utf8Path) -> ConfigResult<Catalog> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| PrereqError::io(format!("Failed to read {}", path), e))?;

    parse_catalog_toml(&content).map_err(|e| match e {
        PrereqError::TomlParse { message } => PrereqError::TomlParse {
            message: format!("In file {}: {}", path, message),
        },
        PrereqError::ConfigValidation { field, reason } => PrereqError::ConfigValidation {
            field,
            reason: format!("In file {}: {}", path, reason),
        },
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"
[resolver]
policy = "strict"

[courses]
C = ["A", "B"]

[courses.A]
title = "Python Programming"
cost = 5

[courses.B]
cost = 8
prerequisites = ["A"]
"#;

    #[test]
    fn test_parse_minimal_catalog() {
        let catalog = parse_catalog_toml("").unwrap();
        assert!(catalog.courses.is_empty());
        assert_eq!(catalog.policy(), CyclePolicy::Merge);
    }

    #[test]
    fn test_parse_catalog() {
        let catalog = parse_catalog_toml(CATALOG).unwrap();
        assert_eq!(catalog.policy(), CyclePolicy::Strict);
        assert_eq!(catalog.courses.len(), 3);

        let a = &catalog.courses["A"];
        assert_eq!(a.cost(), 5.0);
        assert_eq!(a.title(), Some("Python Programming"));
        assert!(a.prerequisites().is_empty());

        assert_eq!(catalog.courses["B"].prerequisites(), ["A"]);
        assert!(matches!(catalog.courses["C"], CourseSpec::Simple(_)));
        assert_eq!(catalog.courses["C"].cost(), 0.0);
    }

    #[test]
    fn test_catalog_to_graph() {
        let graph = parse_catalog_toml(CATALOG).unwrap().to_graph().unwrap();
        assert_eq!(graph.len(), 3);
        assert_eq!(graph.item("B").unwrap().cost, 8.0);
        assert_eq!(graph.prerequisites("C").len(), 2);
    }

    #[test]
    fn test_syntax_error() {
        let err = parse_catalog_toml("[courses.A\ncost = 5").unwrap_err();
        assert!(matches!(err, PrereqError::TomlParse { .. }));
    }

    #[test]
    fn test_unknown_policy() {
        let err = parse_catalog_toml("[resolver]\npolicy = \"abort\"\n").unwrap_err();
        assert!(matches!(err, PrereqError::TomlParse { .. }));
    }

    #[test]
    fn test_negative_cost() {
        let err = parse_catalog_toml("[courses.A]\ncost = -2\n").unwrap_err();
        match err {
            PrereqError::ConfigValidation { field, .. } => assert_eq!(field, "courses.A.cost"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_blank_prerequisite_name() {
        let err = parse_catalog_toml("[courses]\nB = [\" A\"]\n").unwrap_err();
        assert!(err.to_string().contains("courses.B.prerequisites"));
    }

    #[test]
    fn test_round_trip_serialization() {
        let catalog = parse_catalog_toml(
            r#"
[resolver]
policy = "merge"

[courses.A]
cost = 5.0

[courses.B]
cost = 8.5
prerequisites = ["A"]
"#,
        )
        .unwrap();

        let serialized = serialize_catalog_toml(&catalog).unwrap();
        let reparsed = parse_catalog_toml(&serialized).unwrap();

        assert_eq!(catalog, reparsed);
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = camino::Utf8PathBuf::try_from(temp_dir.path().join("prereq.toml")).unwrap();
        tokio::fs::write(&path, CATALOG).await.unwrap();

        let catalog = load_from_file(&path).await.unwrap();
        assert_eq!(catalog.courses.len(), 3);
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = camino::Utf8PathBuf::try_from(temp_dir.path().join("missing.toml")).unwrap();

        let err = load_from_file(&path).await.unwrap_err();
        assert!(matches!(err, PrereqError::Io { .. }));
    }
}

//! courses.json fallback support

use camino::Utf8Path;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use prereq_core::error::PrereqError;

use crate::catalog::{validate_catalog, Catalog, CourseSpec, ResolverSection};
use crate::ConfigResult;

/// courses.json contents
///
/// Either a full catalog object with a `courses` key, or a bare map from
/// course name to its prerequisite list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CoursesJson {
    /// `{"resolver": {...}, "courses": {...}}`
    Catalog {
        courses: IndexMap<String, CourseSpec>,
        #[serde(default)]
        resolver: ResolverSection,
    },
    /// `{"C": ["A", "B"], "A": []}`
    Bare(IndexMap<String, Vec<String>>),
}

/// Parse courses.json from string
pub fn parse_courses_json(content: &str) -> ConfigResult<CoursesJson> {
    serde_json::from_str(content).map_err(|e| PrereqError::JsonParse {
        message: format!("invalid JSON: {}", e),
    })
}

/// Convert courses.json to a Catalog
pub fn import_to_catalog(courses: CoursesJson) -> ConfigResult<Catalog> {
    let catalog = match courses {
        CoursesJson::Catalog { courses, resolver } => Catalog { resolver, courses },
        CoursesJson::Bare(courses) => Catalog {
            resolver: ResolverSection::default(),
            courses: courses
                .into_iter()
                .map(|(name, prerequisites)| (name, CourseSpec::Simple(prerequisites)))
                .collect(),
        },
    };

    validate_catalog(&catalog)?;
    Ok(catalog)
}

/// Load courses.json from file path
pub async fn load_from_file(path: &Utf8Path) -> ConfigResult<Catalog> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| PrereqError::io(format!("Failed to read {}", path), e))?;

    let courses = parse_courses_json(&content).map_err(|e| match e {
        PrereqError::JsonParse { message } => PrereqError::JsonParse {
            message: format!("In file {}: {}", path, message),
        },
        other => other,
    })?;

    import_to_catalog(courses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use prereq_core::types::CyclePolicy;

    #[test]
    fn test_parse_bare_map() {
        let json = r#"{"C": ["A", "B"], "A": [], "B": ["A"]}"#;
        let parsed = parse_courses_json(json).unwrap();
        assert!(matches!(parsed, CoursesJson::Bare(_)));

        let catalog = import_to_catalog(parsed).unwrap();
        let names: Vec<_> = catalog.courses.keys().map(String::as_str).collect();
        assert_eq!(names, ["C", "A", "B"]);
        assert_eq!(catalog.courses["C"].prerequisites(), ["A", "B"]);
        assert_eq!(catalog.policy(), CyclePolicy::Merge);
    }

    #[test]
    fn test_parse_full_catalog() {
        let json = r#"{
            "resolver": {"policy": "strict"},
            "courses": {
                "A": {"cost": 5, "title": "Python Programming"},
                "C": {"cost": 10, "prerequisites": ["A"]},
                "E": ["C"]
            }
        }"#;

        let catalog = import_to_catalog(parse_courses_json(json).unwrap()).unwrap();
        assert_eq!(catalog.policy(), CyclePolicy::Strict);
        assert_eq!(catalog.courses["A"].cost(), 5.0);
        assert_eq!(catalog.courses["A"].title(), Some("Python Programming"));
        assert_eq!(catalog.courses["E"].prerequisites(), ["C"]);
    }

    #[test]
    fn test_bare_map_to_graph() {
        let json = r#"{"C": ["A", "B"], "A": [], "B": ["A"]}"#;
        let catalog = import_to_catalog(parse_courses_json(json).unwrap()).unwrap();
        let graph = catalog.to_graph().unwrap();

        let resolution = graph.resolve(CyclePolicy::Strict).unwrap();
        let order: Vec<_> = resolution.order().collect();
        assert_eq!(order, ["A", "B", "C"]);
    }

    #[test]
    fn test_invalid_json() {
        let err = parse_courses_json("{not json").unwrap_err();
        assert!(matches!(err, PrereqError::JsonParse { .. }));

        let err = parse_courses_json("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, PrereqError::JsonParse { .. }));
    }

    #[test]
    fn test_invalid_cost_in_json() {
        let json = r#"{"courses": {"A": {"cost": -1}}}"#;
        let err = import_to_catalog(parse_courses_json(json).unwrap()).unwrap_err();
        assert!(matches!(err, PrereqError::ConfigValidation { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = camino::Utf8PathBuf::try_from(temp_dir.path().join("courses.json")).unwrap();
        std::fs::write(&path, r#"{"B": ["A"]}"#).unwrap();

        let catalog = tokio_test::block_on(load_from_file(&path)).unwrap();
        assert_eq!(catalog.courses.len(), 1);
    }
}

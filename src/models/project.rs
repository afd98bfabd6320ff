//! Project entries rendered as cards and on the detail page.

use serde::{Deserialize, Serialize};

/// Colored tag chip attached to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    /// Hex color (`#rrggbb`) used for the chip text and, with reduced
    /// alpha, its background.
    pub color: String,
}

/// One portfolio project, as described by `data/projects.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    /// HTML fragment shown on the detail page.
    pub description: String,
    pub thumbnail: String,
    /// Gallery images for the detail slider, in display order.
    #[serde(rename = "detailImages", default)]
    pub detail_images: Vec<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    /// Optional external link. The source data capitalizes the key.
    #[serde(rename = "Link", alias = "link", default)]
    pub link: Option<String>,
}

/// Top-level shape of `data/projects.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectsDocument {
    pub projects: Vec<Project>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"{
        "projects": [
            {
                "id": 1,
                "title": "Weather Dashboard",
                "description": "<p>Live forecasts.</p>",
                "thumbnail": "assets/projects/weather/thumb.png",
                "detailImages": [
                    "assets/projects/weather/1.png",
                    "assets/projects/weather/2.png"
                ],
                "tags": [{ "name": "Frontend", "color": "#4a90e2" }],
                "Link": "https://example.com/weather"
            },
            {
                "id": 2,
                "title": "Internal Tool",
                "description": "<p>No public link.</p>",
                "thumbnail": "assets/projects/tool/thumb.png"
            }
        ]
    }"##;

    #[test]
    fn document_deserializes_with_capitalized_link_key() {
        let doc: ProjectsDocument = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(doc.projects.len(), 2);
        assert_eq!(
            doc.projects[0].link.as_deref(),
            Some("https://example.com/weather")
        );
        assert_eq!(doc.projects[0].detail_images.len(), 2);
        // Absent key degrades to None, not an error.
        assert_eq!(doc.projects[1].link, None);
    }

    #[test]
    fn optional_collections_default_to_empty() {
        let doc: ProjectsDocument = serde_json::from_str(SAMPLE).unwrap();
        assert!(doc.projects[1].detail_images.is_empty());
        assert!(doc.projects[1].tags.is_empty());
    }
}

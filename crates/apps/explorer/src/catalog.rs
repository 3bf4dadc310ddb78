//! Static project catalog browsed by the explorer.

use desktop_app_contract::{DocumentLink, GalleryImage, ViewerDocument};

/// Project grouping used by the explorer's filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Work,
    Personal,
}

impl Category {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::Personal => "Personal",
        }
    }
}

/// A screenshot file inside a project folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Screenshot {
    pub file_name: &'static str,
    pub url: &'static str,
    pub caption: &'static str,
}

/// One project folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub name: &'static str,
    pub category: Category,
    pub summary: &'static str,
    pub highlights: &'static [&'static str],
    pub tech: &'static [&'static str],
    pub screenshots: &'static [Screenshot],
    pub link: Option<(&'static str, &'static str)>,
}

pub const PROJECTS: &[Project] = &[
    Project {
        name: "Warehouse Dashboard",
        category: Category::Work,
        summary: "Real-time logistics dashboard tracking stock levels, pick rates, and \
                  conveyor faults across three fulfilment centres.",
        highlights: &[
            "Live updates over server-sent events, no polling",
            "Heat-map view cut mispick investigations from hours to minutes",
        ],
        tech: &["Rust", "Axum", "PostgreSQL", "Leptos"],
        screenshots: &[
            Screenshot {
                file_name: "overview.png",
                url: "/images/projects/warehouse-overview.png",
                caption: "Floor overview with live pick-rate heat map",
            },
            Screenshot {
                file_name: "faults.png",
                url: "/images/projects/warehouse-faults.png",
                caption: "Conveyor fault timeline",
            },
        ],
        link: Some(("Case study", "https://retrofolio.dev/projects/warehouse")),
    },
    Project {
        name: "Invoice Pipeline",
        category: Category::Work,
        summary: "Document ingestion service that classifies and extracts line items from \
                  scanned invoices, feeding the finance team's ERP.",
        highlights: &[
            "Processes ~40k documents a month",
            "Schema-validated extraction with a human review queue for low confidence",
        ],
        tech: &["Python", "PostgreSQL", "Redis"],
        screenshots: &[Screenshot {
            file_name: "queue.png",
            url: "/images/projects/invoice-queue.png",
            caption: "Review queue with extraction confidence",
        }],
        link: None,
    },
    Project {
        name: "Retro Desktop",
        category: Category::Personal,
        summary: "This site. A fake operating system with draggable windows, a boot \
                  sequence, and entirely too many sound effects.",
        highlights: &[
            "Window manager built on a pure reducer",
            "Ships as a single WebAssembly bundle",
        ],
        tech: &["Rust", "Leptos", "WebAssembly"],
        screenshots: &[Screenshot {
            file_name: "desktop.png",
            url: "/images/projects/retro-desktop.png",
            caption: "The desktop you are looking at",
        }],
        link: Some(("Source", "https://github.com/retrofolio/retro-desktop")),
    },
    Project {
        name: "Trail Logger",
        category: Category::Personal,
        summary: "Offline-first hiking log for recording routes, elevation, and photos \
                  without cell coverage.",
        highlights: &[
            "GPX import and export",
            "Syncs opportunistically when a connection appears",
        ],
        tech: &["TypeScript", "IndexedDB", "Leaflet"],
        screenshots: &[Screenshot {
            file_name: "route.png",
            url: "/images/projects/trail-route.png",
            caption: "Recorded route with elevation profile",
        }],
        link: None,
    },
];

pub fn project(name: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.name == name)
}

/// Projects visible under a filter; `None` shows everything.
pub fn filtered(filter: Option<Category>) -> Vec<&'static Project> {
    PROJECTS
        .iter()
        .filter(|p| filter.map(|c| p.category == c).unwrap_or(true))
        .collect()
}

impl Project {
    /// Viewer document for the project write-up.
    pub fn document(&self) -> ViewerDocument {
        ViewerDocument {
            title: self.name.to_string(),
            paragraphs: vec![self.summary.to_string()],
            highlights: self.highlights.iter().map(|h| h.to_string()).collect(),
            gallery: self
                .screenshots
                .iter()
                .map(|shot| GalleryImage {
                    url: shot.url.to_string(),
                    caption: shot.caption.to_string(),
                })
                .collect(),
            tech: self.tech.iter().map(|t| t.to_string()).collect(),
            link: self.link.map(|(label, url)| DocumentLink {
                label: label.to_string(),
                url: url.to_string(),
            }),
        }
    }
}

impl Screenshot {
    /// Viewer document for a single screenshot file.
    pub fn document(&self) -> ViewerDocument {
        ViewerDocument {
            title: self.file_name.to_string(),
            gallery: vec![GalleryImage {
                url: self.url.to_string(),
                caption: self.caption.to_string(),
            }],
            ..ViewerDocument::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn filter_splits_work_from_personal() {
        let work = filtered(Some(Category::Work));
        let personal = filtered(Some(Category::Personal));
        assert!(work.iter().all(|p| p.category == Category::Work));
        assert!(personal.iter().all(|p| p.category == Category::Personal));
        assert_eq!(work.len() + personal.len(), PROJECTS.len());
        assert_eq!(filtered(None).len(), PROJECTS.len());
    }

    #[test]
    fn project_document_carries_gallery_and_link() {
        let doc = project("Warehouse Dashboard")
            .map(Project::document)
            .unwrap();
        assert_eq!(doc.title, "Warehouse Dashboard");
        assert_eq!(doc.gallery.len(), 2);
        assert_eq!(doc.link.map(|l| l.label), Some("Case study".to_string()));
    }

    #[test]
    fn screenshot_document_is_a_single_image() {
        let project = project("Retro Desktop").unwrap();
        let doc = project.screenshots[0].document();
        assert_eq!(doc.title, "desktop.png");
        assert_eq!(doc.gallery.len(), 1);
        assert_eq!(doc.paragraphs, Vec::<String>::new());
    }
}

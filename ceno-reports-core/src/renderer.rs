//! Report → prose rendering

use crate::report::ErrorReport;
use crate::vocabulary::Catalog;

const CATEGORIES_HEADER: &str = "The categories prescribed to the error are:\n";

/// Renders stored reports as human-readable text
///
/// Each report becomes one paragraph:
///
/// ```text
/// Error concerns feeds, articles.
/// The categories prescribed to the error are:
///     - A resource was received however it contains malformed content.
/// Error message: timeout
///
/// ```
///
/// Resource types and error classes are listed in vocabulary declaration
/// order. Bullets are indented with a tab.
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'c> {
    catalog: &'c Catalog,
}

impl<'c> Renderer<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self { catalog }
    }

    /// Render every report, in order, into one text block
    pub fn render(&self, reports: &[ErrorReport]) -> String {
        let mut out = String::new();
        for report in reports {
            self.render_report(report, &mut out);
        }
        out
    }

    /// Append one report's paragraph to `out`
    pub fn render_report(&self, report: &ErrorReport, out: &mut String) {
        // Pluralized by appending "s", nothing smarter
        let resources: Vec<String> = self
            .catalog
            .resource_types()
            .members(report.resource_types)
            .map(|entry| format!("{}s", entry.name))
            .collect();
        out.push_str("Error concerns ");
        out.push_str(&resources.join(", "));
        out.push_str(".\n");

        out.push_str(CATEGORIES_HEADER);
        for class in self.catalog.error_classes().members(report.error_types) {
            out.push_str("\t- ");
            out.push_str(&class.description);
            out.push('\n');
        }

        out.push_str("Error message: ");
        out.push_str(&report.message);
        out.push_str("\n\n");
    }
}

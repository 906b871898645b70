use itertools::Itertools;

use crate::problem::Outcome;

/// How the outcome is printed.
#[derive(Debug, Clone, Default)]
pub struct Render {
    /// Print every mapping, not just the first.
    pub mappings: bool,
    /// Print JSON instead of text.
    pub json: bool,
    /// Joins the answer positions.
    pub separator: String,
}

impl Render {
    /// Renders the outcome as the requested text form.
    pub fn render(&self, mut outcome: Outcome) -> Result<String, serde_json::Error> {
        if !self.mappings {
            outcome.mappings.truncate(1);
        }
        if self.json {
            return serde_json::to_string_pretty(&outcome);
        }

        let mut out = String::new();
        let show_mappings = self.mappings || outcome.targets.is_none();
        if show_mappings {
            let mut blocks = outcome.mappings.iter().map(|mapping| {
                mapping
                    .iter()
                    .map(|(label, position)| format!("{label} \u{2192} {position}"))
                    .join("\n")
            });
            out.push_str(&blocks.join("\n\n"));
        }
        if outcome.targets.is_some() {
            if show_mappings && !out.is_empty() {
                out.push_str("\n\n");
            }
            out.push_str(&outcome.positions.iter().join(&self.separator));
        }
        Ok(out)
    }
}

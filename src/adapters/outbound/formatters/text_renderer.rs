use crate::application::read_models::{Cell, Field, Pagination, Screen, Section, TabHeader, LOADING_TEXT};
use crate::ports::outbound::ViewRenderer;
use crate::rebuild_tracking::policies::{LabelColor, StatusLabel};
use crate::rebuild_tracking::services::StatusChart;
use crate::shared::Result;
use owo_colors::OwoColorize;

/// Column separator of rendered tables
const COLUMN_GAP: &str = "  ";

/// TextRenderer adapter for human readable terminal output
///
/// Tables are aligned on the plain text width of their cells, so colouring a
/// label never shifts a column.
pub struct TextRenderer {
    color: bool,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self { color: true }
    }

    /// Renders without ANSI colour codes.
    pub fn plain() -> Self {
        Self { color: false }
    }

    fn paint(&self, label: &StatusLabel) -> String {
        let text = format!("[{}]", label.text);
        if !self.color {
            return text;
        }
        // Orange is shown as yellow, the closest of the 16 terminal colours.
        match label.color {
            LabelColor::Green => text.green().to_string(),
            LabelColor::Orange => text.yellow().to_string(),
            LabelColor::Red => text.red().to_string(),
            LabelColor::Blue => text.blue().to_string(),
        }
    }

    fn bold(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// Returns the painted cell and its visible width.
    fn cell(&self, cell: &Cell) -> (String, usize) {
        match cell {
            Cell::Text(text) => (text.clone(), text.chars().count()),
            Cell::Link { text, .. } => (text.clone(), text.chars().count()),
            Cell::Labels(labels) => {
                let painted = labels
                    .iter()
                    .map(|l| self.paint(l))
                    .collect::<Vec<_>>()
                    .join(" ");
                let width = labels
                    .iter()
                    .map(|l| l.text.chars().count() + 2)
                    .sum::<usize>()
                    + labels.len().saturating_sub(1);
                (painted, width)
            }
        }
    }

    fn render_heading(&self, out: &mut String, heading: &str) {
        out.push_str(&self.bold(heading));
        out.push('\n');
        out.push_str(&"-".repeat(heading.chars().count()));
        out.push('\n');
    }

    fn render_tabs(&self, out: &mut String, tabs: &[TabHeader]) {
        let rendered = tabs
            .iter()
            .map(|tab| match (tab.selected, tab.enabled) {
                (true, _) => format!("[{}]", tab.name),
                (false, true) => tab.name.clone(),
                (false, false) => format!("({})", tab.name),
            })
            .collect::<Vec<_>>()
            .join(" | ");
        out.push_str("Tabs: ");
        out.push_str(&rendered);
        out.push_str("\n\n");
    }

    fn render_table(
        &self,
        out: &mut String,
        heading: Option<&str>,
        columns: &[String],
        rows: &[Vec<Cell>],
    ) {
        if let Some(heading) = heading {
            self.render_heading(out, heading);
        }

        let painted: Vec<Vec<(String, usize)>> = rows
            .iter()
            .map(|row| row.iter().map(|c| self.cell(c)).collect())
            .collect();

        let mut widths: Vec<usize> = columns.iter().map(|c| c.chars().count()).collect();
        for row in &painted {
            for (i, (_, width)) in row.iter().enumerate() {
                match widths.get_mut(i) {
                    Some(w) => *w = (*w).max(*width),
                    None => widths.push(*width),
                }
            }
        }

        let header = columns
            .iter()
            .zip(&widths)
            .map(|(c, w)| pad(c, c.chars().count(), *w))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP);
        out.push_str(self.bold(header.trim_end()).as_str());
        out.push('\n');
        let rule = widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP);
        out.push_str(&rule);
        out.push('\n');

        for row in &painted {
            let line = row
                .iter()
                .zip(&widths)
                .map(|((text, width), w)| pad(text, *width, *w))
                .collect::<Vec<_>>()
                .join(COLUMN_GAP);
            out.push_str(line.trim_end());
            out.push('\n');
        }
    }

    fn render_fields(&self, out: &mut String, heading: Option<&str>, fields: &[Field]) {
        if let Some(heading) = heading {
            self.render_heading(out, heading);
        }
        let width = fields
            .iter()
            .map(|f| f.label.chars().count())
            .max()
            .unwrap_or(0);
        for field in fields {
            let value = match &field.value {
                Cell::Link { text, url } if text != url => format!("{} <{}>", text, url),
                other => self.cell(other).0,
            };
            let label = format!("{}:", field.label);
            out.push_str(&pad(&label, label.chars().count(), width + 1));
            out.push(' ');
            out.push_str(&value);
            out.push('\n');
        }
    }

    fn render_chart(&self, out: &mut String, chart: &StatusChart) {
        self.render_heading(out, &format!("{} ({} total)", chart.title, chart.total));
        for slice in &chart.slices {
            let label = StatusLabel::new(slice.legend(), slice.color);
            out.push_str(&format!("  {} {:.1}%\n", self.paint(&label), slice.percent));
        }
    }

    fn render_section(&self, out: &mut String, section: &Section) {
        match section {
            Section::Loading => {
                out.push_str(LOADING_TEXT);
                out.push('\n');
            }
            Section::Error { message } => self.render_heading(out, message),
            Section::Empty { heading, detail } => {
                self.render_heading(out, heading);
                out.push_str(detail);
                out.push('\n');
            }
            Section::Table {
                heading,
                columns,
                rows,
            } => self.render_table(out, heading.as_deref(), columns, rows),
            Section::Fields { heading, fields } => {
                self.render_fields(out, heading.as_deref(), fields)
            }
            Section::Chart { chart } => self.render_chart(out, chart),
            Section::Text { heading, lines } => {
                if let Some(heading) = heading {
                    self.render_heading(out, heading);
                }
                for line in lines {
                    out.push_str(line);
                    out.push('\n');
                }
            }
        }
    }

    fn render_pagination(&self, out: &mut String, pagination: &Pagination) {
        out.push_str(&format!(
            "Page {} of {} ({} items, {} per page)\n",
            pagination.page, pagination.page_count, pagination.total_count, pagination.per_page
        ));
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn pad(text: &str, width: usize, target: usize) -> String {
    format!("{}{}", text, " ".repeat(target.saturating_sub(width)))
}

impl ViewRenderer for TextRenderer {
    fn render(&self, screen: &Screen) -> Result<String> {
        let mut out = String::new();
        out.push_str(&self.bold(&screen.title));
        out.push('\n');
        out.push_str(&"=".repeat(screen.title.chars().count()));
        out.push('\n');

        if !screen.labels.is_empty() {
            let labels = screen
                .labels
                .iter()
                .map(|l| self.paint(l))
                .collect::<Vec<_>>()
                .join(" ");
            out.push_str(&labels);
            out.push('\n');
        }
        out.push('\n');

        if !screen.tabs.is_empty() {
            self.render_tabs(&mut out, &screen.tabs);
        }

        for (i, section) in screen.sections.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            self.render_section(&mut out, section);
        }

        if let Some(pagination) = &screen.pagination {
            out.push('\n');
            self.render_pagination(&mut out, pagination);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::{EMPTY_DETAIL, EMPTY_HEADING};

    fn render(screen: &Screen) -> String {
        TextRenderer::plain().render(screen).unwrap()
    }

    #[test]
    fn test_table_columns_are_aligned() {
        let screen = Screen::new("Build List").with_section(Section::table_or_empty(
            &["Status", "Repo"],
            vec![
                vec![
                    Cell::Labels(vec![StatusLabel::new("Build Failed", LabelColor::Red)]),
                    Cell::text("https://github.com/acme/lib.git"),
                ],
                vec![
                    Cell::Labels(vec![
                        StatusLabel::new("Build Successful", LabelColor::Green),
                        StatusLabel::new("In Build Queue", LabelColor::Blue),
                    ]),
                    Cell::text("https://github.com/acme/app.git"),
                ],
            ],
        ));
        let output = render(&screen);
        let lines: Vec<&str> = output.lines().collect();
        let first = lines.iter().find(|l| l.starts_with("[Build Failed]")).unwrap();
        let second = lines.iter().find(|l| l.starts_with("[Build Successful]")).unwrap();
        assert_eq!(first.find("https://"), second.find("https://"));
    }

    #[test]
    fn test_empty_loading_and_error_states() {
        let empty = render(&Screen::new("Artifact List").with_section(Section::empty()));
        assert!(empty.contains(EMPTY_HEADING));
        assert!(empty.contains(EMPTY_DETAIL));

        let loading = render(&Screen::new("Artifact List").with_section(Section::Loading));
        assert!(loading.contains(LOADING_TEXT));

        let error = render(&Screen::new("Artifact List").with_section(Section::Error {
            message: "Request failed with status code 500".to_string(),
        }));
        assert!(error.contains("Request failed with status code 500\n-----"));
    }

    #[test]
    fn test_tabs_and_pagination() {
        let screen = Screen::new("Build")
            .with_tabs(vec![
                TabHeader {
                    name: "Details".to_string(),
                    enabled: true,
                    selected: true,
                },
                TabHeader {
                    name: "Shading".to_string(),
                    enabled: false,
                    selected: false,
                },
            ])
            .with_pagination(Pagination::new(2, 20, 45));
        let output = render(&screen);
        assert!(output.contains("Tabs: [Details] | (Shading)"));
        assert!(output.contains("Page 2 of 3 (45 items, 20 per page)"));
    }

    #[test]
    fn test_plain_renderer_has_no_escape_codes() {
        let screen = Screen::new("Build")
            .with_labels(vec![StatusLabel::new("Build Successful", LabelColor::Green)]);
        assert!(!render(&screen).contains('\u{1b}'));
        let colored = TextRenderer::new().render(&screen).unwrap();
        assert!(colored.contains('\u{1b}'));
    }

    #[test]
    fn test_field_links_show_target() {
        let screen = Screen::new("Artifact").with_section(Section::fields(
            None,
            vec![Field::new(
                "Dependency Build",
                Cell::link_or_text("a1b2", Some("/builds/build/42".to_string())),
            )],
        ));
        assert!(render(&screen).contains("Dependency Build: a1b2 </builds/build/42>"));
    }
}

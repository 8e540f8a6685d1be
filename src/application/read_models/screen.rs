//! Screen read model
//!
//! A renderer-neutral description of what one view shows right now. Views
//! build a [`Screen`] from their state; renderers turn it into text or JSON.

use serde::Serialize;

use crate::rebuild_tracking::domain::Page;
use crate::rebuild_tracking::policies::StatusLabel;
use crate::rebuild_tracking::services::StatusChart;

pub const LOADING_TEXT: &str = "Loading...";
pub const EMPTY_HEADING: &str = "No results found";
pub const EMPTY_DETAIL: &str = "No results match the criteria.";

/// Everything one view displays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Screen {
    pub title: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<StatusLabel>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tabs: Vec<TabHeader>,
    pub sections: Vec<Section>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

impl Screen {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            labels: Vec::new(),
            tabs: Vec::new(),
            sections: Vec::new(),
            pagination: None,
        }
    }

    pub fn with_labels(mut self, labels: Vec<StatusLabel>) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_tabs(mut self, tabs: Vec<TabHeader>) -> Self {
        self.tabs = tabs;
        self
    }

    pub fn with_sections(mut self, sections: Vec<Section>) -> Self {
        self.sections.extend(sections);
        self
    }

    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }

    pub fn is_loading(&self) -> bool {
        self.sections.iter().any(|s| matches!(s, Section::Loading))
    }

    pub fn error_message(&self) -> Option<&str> {
        self.sections.iter().find_map(|s| match s {
            Section::Error { message } => Some(message.as_str()),
            _ => None,
        })
    }

    pub fn is_empty_state(&self) -> bool {
        self.sections.iter().any(|s| matches!(s, Section::Empty { .. }))
    }

    /// The first table on the screen, if any.
    pub fn table(&self) -> Option<(&[String], &[Vec<Cell>])> {
        self.sections.iter().find_map(|s| match s {
            Section::Table { columns, rows, .. } => Some((columns.as_slice(), rows.as_slice())),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabHeader {
    pub name: String,
    pub enabled: bool,
    pub selected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
    pub total_count: u64,
    pub page_count: u64,
}

impl Pagination {
    pub fn new(page: u32, per_page: u32, total_count: u64) -> Self {
        Self {
            page,
            per_page,
            total_count,
            page_count: Page::<()>::page_count(total_count, per_page),
        }
    }
}

/// A block of a screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Section {
    Loading,
    Error {
        message: String,
    },
    Empty {
        heading: String,
        detail: String,
    },
    Table {
        #[serde(skip_serializing_if = "Option::is_none")]
        heading: Option<String>,
        columns: Vec<String>,
        rows: Vec<Vec<Cell>>,
    },
    Fields {
        #[serde(skip_serializing_if = "Option::is_none")]
        heading: Option<String>,
        fields: Vec<Field>,
    },
    Chart {
        chart: StatusChart,
    },
    Text {
        #[serde(skip_serializing_if = "Option::is_none")]
        heading: Option<String>,
        lines: Vec<String>,
    },
}

impl Section {
    pub fn empty() -> Self {
        Section::Empty {
            heading: EMPTY_HEADING.to_string(),
            detail: EMPTY_DETAIL.to_string(),
        }
    }

    /// A table, or the empty-state placeholder when there are no rows.
    pub fn table_or_empty(columns: &[&str], rows: Vec<Vec<Cell>>) -> Self {
        if rows.is_empty() {
            return Section::empty();
        }
        Section::Table {
            heading: None,
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows,
        }
    }

    pub fn fields(heading: Option<&str>, fields: Vec<Field>) -> Self {
        Section::Fields {
            heading: heading.map(String::from),
            fields,
        }
    }

    pub fn text(heading: Option<&str>, lines: Vec<String>) -> Self {
        Section::Text {
            heading: heading.map(String::from),
            lines,
        }
    }
}

/// A labelled value in a details block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub label: String,
    pub value: Cell,
}

impl Field {
    pub fn new(label: &str, value: Cell) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }

    pub fn text(label: &str, value: impl Into<String>) -> Self {
        Self::new(label, Cell::Text(value.into()))
    }
}

/// Content of a table cell or a field value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Cell {
    Text(String),
    Labels(Vec<StatusLabel>),
    Link { text: String, url: String },
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    pub fn label(label: StatusLabel) -> Self {
        Cell::Labels(vec![label])
    }

    /// A link, or plain text when no URL is known.
    pub fn link_or_text(text: impl Into<String>, url: Option<String>) -> Self {
        match url {
            Some(url) => Cell::Link {
                text: text.into(),
                url,
            },
            None => Cell::Text(text.into()),
        }
    }

    /// Plain text form, used for sorting and assertions.
    pub fn plain(&self) -> String {
        match self {
            Cell::Text(text) => text.clone(),
            Cell::Labels(labels) => labels
                .iter()
                .map(|l| l.text.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            Cell::Link { text, .. } => text.clone(),
        }
    }
}

//! List appearance state and its surface configuration.
//!
//! [`ListAppearance`] is the closed set of visual styles the segmented control
//! offers. Each appearance maps exhaustively to a [`ListConfiguration`], which
//! is what the rendering surface receives on reconfiguration.
//!
//! # Example
//!
//! ```
//! use listlayout::app::modes::{BackgroundEffect, ListAppearance};
//!
//! let config = ListAppearance::Sidebar.configuration();
//! assert_eq!(config.background, BackgroundEffect::Alternate);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::domain::ListLayoutError;

/// Visual layout strategy for the sectioned list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ListAppearance {
    /// Edge-to-edge rows with no grouping chrome.
    #[default]
    Plain,
    /// Sections separated by spacing on an alternate background.
    Grouped,
    /// Grouped sections inset from the pane edges.
    InsetGrouped,
    /// Source-list styling with indented rows.
    Sidebar,
    /// Sidebar indentation without section spacing.
    SidebarPlain,
}

impl ListAppearance {
    /// Every appearance in segmented-control order.
    pub const ALL: [Self; 5] = [
        Self::Plain,
        Self::Grouped,
        Self::InsetGrouped,
        Self::Sidebar,
        Self::SidebarPlain,
    ];

    /// Appearance at a segmented-control index, if in range.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Segmented-control index of this appearance.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Plain => 0,
            Self::Grouped => 1,
            Self::InsetGrouped => 2,
            Self::Sidebar => 3,
            Self::SidebarPlain => 4,
        }
    }

    /// Next appearance, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous appearance, wrapping around.
    #[must_use]
    pub const fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Case name as written in configuration, e.g. `insetGrouped`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Grouped => "grouped",
            Self::InsetGrouped => "insetGrouped",
            Self::Sidebar => "sidebar",
            Self::SidebarPlain => "sidebarPlain",
        }
    }

    /// Segment label: the case name uppercased.
    #[must_use]
    pub fn label(self) -> String {
        self.name().to_uppercase()
    }

    /// Surface configuration for this appearance.
    #[must_use]
    pub const fn configuration(self) -> ListConfiguration {
        ListConfiguration {
            appearance: self,
            background: match self {
                Self::Plain => BackgroundEffect::Light,
                Self::Grouped | Self::InsetGrouped | Self::Sidebar | Self::SidebarPlain => {
                    BackgroundEffect::Alternate
                }
            },
            header_mode: SupplementaryMode::Supplementary,
            footer_mode: SupplementaryMode::Supplementary,
        }
    }

    /// Terminal layout metrics for this appearance.
    #[must_use]
    pub const fn metrics(self) -> LayoutMetrics {
        match self {
            Self::Plain => LayoutMetrics {
                inset: 0,
                cell_indent: 1,
                section_spacing: 0,
                uppercase_headers: false,
            },
            Self::Grouped => LayoutMetrics {
                inset: 0,
                cell_indent: 2,
                section_spacing: 1,
                uppercase_headers: true,
            },
            Self::InsetGrouped => LayoutMetrics {
                inset: 4,
                cell_indent: 2,
                section_spacing: 1,
                uppercase_headers: true,
            },
            Self::Sidebar => LayoutMetrics {
                inset: 2,
                cell_indent: 4,
                section_spacing: 1,
                uppercase_headers: false,
            },
            Self::SidebarPlain => LayoutMetrics {
                inset: 2,
                cell_indent: 4,
                section_spacing: 0,
                uppercase_headers: false,
            },
        }
    }
}

impl fmt::Display for ListAppearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ListAppearance {
    type Err = ListLayoutError;

    /// Parses a case name, ignoring ASCII case (`insetgrouped` works too).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|appearance| appearance.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ListLayoutError::Config(format!("unknown list appearance `{wanted}`")))
    }
}

/// Background policy: light for `plain`, alternate for everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackgroundEffect {
    /// Light background, used only by [`ListAppearance::Plain`].
    Light,
    /// Alternate background for every grouped or sidebar style.
    Alternate,
}

/// How headers or footers are provided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupplementaryMode {
    /// No view is shown.
    None,
    /// A supplementary view is requested from the cell provider per section.
    Supplementary,
}

/// Everything the rendering surface needs to switch its layout strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListConfiguration {
    /// Selected appearance.
    pub appearance: ListAppearance,
    /// Background effect derived from the appearance.
    pub background: BackgroundEffect,
    /// Header provisioning mode.
    pub header_mode: SupplementaryMode,
    /// Footer provisioning mode.
    pub footer_mode: SupplementaryMode,
}

impl Default for ListConfiguration {
    fn default() -> Self {
        ListAppearance::default().configuration()
    }
}

/// Column and row spacing used when laying out the list in a terminal pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutMetrics {
    /// Columns left blank on both sides of the list.
    pub inset: usize,
    /// Columns between the list edge and cell text.
    pub cell_indent: usize,
    /// Blank rows inserted between sections.
    pub section_spacing: usize,
    /// Whether header labels are shown uppercased.
    pub uppercase_headers: bool,
}

use std::fmt;

use serde::{Deserialize, Serialize};

/// Every kind name that may appear in a `type` discriminator or registry key.
///
/// Unknown names never reach this enum: [`ComponentKind::parse`] returns
/// `None` and the surrounding configuration node is silently dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    Cartesian,
    Polar,
    Category,
    Number,
    Line,
    Column,
    Bar,
    Area,
    Scatter,
    Pie,
    Legend,
    Caption,
    Padding,
}

impl ComponentKind {
    pub const ALL: [Self; 13] = [
        Self::Cartesian,
        Self::Polar,
        Self::Category,
        Self::Number,
        Self::Line,
        Self::Column,
        Self::Bar,
        Self::Area,
        Self::Scatter,
        Self::Pie,
        Self::Legend,
        Self::Caption,
        Self::Padding,
    ];

    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cartesian => "cartesian",
            Self::Polar => "polar",
            Self::Category => "category",
            Self::Number => "number",
            Self::Line => "line",
            Self::Column => "column",
            Self::Bar => "bar",
            Self::Area => "area",
            Self::Scatter => "scatter",
            Self::Pie => "pie",
            Self::Legend => "legend",
            Self::Caption => "caption",
            Self::Padding => "padding",
        }
    }

    #[must_use]
    pub const fn is_chart(self) -> bool {
        matches!(self, Self::Cartesian | Self::Polar)
    }

    #[must_use]
    pub const fn is_axis(self) -> bool {
        matches!(self, Self::Category | Self::Number)
    }

    #[must_use]
    pub const fn is_series(self) -> bool {
        matches!(
            self,
            Self::Line | Self::Column | Self::Bar | Self::Area | Self::Scatter | Self::Pie
        )
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

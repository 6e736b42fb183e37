//! Visual state of a preview element and the styles it renders to.

use crate::config::{floating_style, inline_style};

/// Inline style properties owned by the controller.
///
/// Rendering always writes every one of them, so no state leaves behind
/// values from a previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    Display,
    Position,
    Right,
    Bottom,
    MarginTop,
    MarginBottom,
    TextAlign,
}

impl StyleProperty {
    pub const ALL: [StyleProperty; 7] = [
        Self::Display,
        Self::Position,
        Self::Right,
        Self::Bottom,
        Self::MarginTop,
        Self::MarginBottom,
        Self::TextAlign,
    ];

    /// CSS property name.
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Display => "display",
            Self::Position => "position",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::MarginTop => "margin-top",
            Self::MarginBottom => "margin-bottom",
            Self::TextAlign => "text-align",
        }
    }
}

/// Visual state of a single preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewState {
    Hidden,
    /// Shown in the text flow below the trigger (click mode).
    ShownInline,
    /// Floating to the left of the trigger (hover mode).
    ShownFloating,
}

impl PreviewState {
    #[inline]
    pub fn is_shown(self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// State a click moves to from this one.
    pub fn toggled(self) -> Self {
        if self.is_shown() {
            Self::Hidden
        } else {
            Self::ShownInline
        }
    }

    /// Recover the state of an element from its current inline styles.
    ///
    /// Only `display: block` counts as shown, matching how the page's markup
    /// hides previews by default.
    pub fn from_inline_style(display: Option<&str>, position: Option<&str>) -> Self {
        match (display.map(str::trim), position.map(str::trim)) {
            (Some("block"), Some(p)) if p == floating_style::POSITION => Self::ShownFloating,
            (Some("block"), _) => Self::ShownInline,
            _ => Self::Hidden,
        }
    }

    /// Full declaration set for this state, one entry per [`StyleProperty`].
    /// `None` clears the inline value.
    pub fn render(self) -> [(StyleProperty, Option<&'static str>); 7] {
        use StyleProperty::*;

        match self {
            Self::Hidden => [
                (Display, Some("none")),
                (Position, None),
                (Right, None),
                (Bottom, None),
                (MarginTop, None),
                (MarginBottom, None),
                (TextAlign, None),
            ],
            Self::ShownInline => [
                (Display, Some("block")),
                (Position, Some(inline_style::POSITION)),
                (Right, None),
                (Bottom, None),
                (MarginTop, Some(inline_style::MARGIN)),
                (MarginBottom, Some(inline_style::MARGIN)),
                (TextAlign, Some(inline_style::TEXT_ALIGN)),
            ],
            Self::ShownFloating => [
                (Display, Some("block")),
                (Position, Some(floating_style::POSITION)),
                (Right, Some(floating_style::RIGHT)),
                (Bottom, Some(floating_style::BOTTOM)),
                (MarginTop, None),
                (MarginBottom, None),
                (TextAlign, None),
            ],
        }
    }
}

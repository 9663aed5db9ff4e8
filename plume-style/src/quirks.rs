//! Toolkit-specific special cases.
//!
//! Some widgets can only be recognized by their class or object name. All of
//! those checks live behind [ToolkitQuirks] so the resolver and the animation
//! manager never see them.

use crate::widget::{has_ancestor_of_class, WidgetContext};

/// Widget recognition the facade needs but the option data does not carry.
pub trait ToolkitQuirks {
    /// A small icon button embedded in a line edit, such as a clear button.
    /// These draw no background and no focus ring.
    fn is_line_edit_icon_button(&self, _widget: &dyn WidgetContext) -> bool {
        false
    }

    /// A button inside a tab bar, such as a close or scroll button.
    fn is_tab_bar_button(&self, _widget: &dyn WidgetContext) -> bool {
        false
    }

    /// A widget that paints its own focus indication.
    fn draws_own_focus(&self, _widget: &dyn WidgetContext) -> bool {
        false
    }
}

/// No special cases.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoQuirks;

impl ToolkitQuirks for NoQuirks {}

/// Recognizes widgets by class name.
#[derive(Debug, Clone)]
pub struct ClassNameQuirks {
    /// Class of buttons embedded in line edits.
    pub line_edit_icon_button: String,
    /// Class of tab bars.
    pub tab_bar: String,
    /// Classes painting their own focus indication.
    pub own_focus: Vec<String>,
}

impl Default for ClassNameQuirks {
    fn default() -> Self {
        Self {
            line_edit_icon_button: "LineEditIconButton".to_string(),
            tab_bar: "TabBar".to_string(),
            own_focus: vec!["ItemView".to_string(), "TextEdit".to_string()],
        }
    }
}

impl ToolkitQuirks for ClassNameQuirks {
    fn is_line_edit_icon_button(&self, widget: &dyn WidgetContext) -> bool {
        widget.class_name() == self.line_edit_icon_button
    }

    fn is_tab_bar_button(&self, widget: &dyn WidgetContext) -> bool {
        widget
            .parent()
            .is_some_and(|parent| has_ancestor_of_class(parent, &self.tab_bar))
    }

    fn draws_own_focus(&self, widget: &dyn WidgetContext) -> bool {
        self.own_focus.iter().any(|class| class == widget.class_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::{WidgetInfo, WidgetKey};

    #[test]
    fn no_quirks_recognizes_nothing() {
        let widget = WidgetInfo::new(WidgetKey::new(1), "LineEditIconButton");
        assert!(!NoQuirks.is_line_edit_icon_button(&widget));
    }

    #[test]
    fn class_names() {
        let quirks = ClassNameQuirks::default();
        let tabs = WidgetInfo::new(WidgetKey::new(1), "TabBar");
        let close = WidgetInfo::new(WidgetKey::new(2), "ToolButton").with_parent(tabs);
        let clear = WidgetInfo::new(WidgetKey::new(3), "LineEditIconButton");

        assert!(quirks.is_tab_bar_button(&close));
        assert!(!quirks.is_tab_bar_button(&clear));
        assert!(quirks.is_line_edit_icon_button(&clear));
        assert!(quirks.draws_own_focus(&WidgetInfo::new(WidgetKey::new(4), "ItemView")));
    }
}

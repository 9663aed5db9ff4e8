//! Widget identity and the per-widget overrides the style reads.

use plume_theme::config::AutoIconColor;

/// Opaque identity of a widget.
///
/// The style only ever compares keys; it never reaches the widget through
/// one, so holding a key does not keep the widget alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetKey(u64);

impl WidgetKey {
    /// Wrap a host-assigned widget id.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The host-assigned widget id.
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// What the style may ask about a widget while painting it.
///
/// The widget tree owns everything here; the style only reads it.
pub trait WidgetContext {
    /// Identity used for animation and cache lookups.
    fn key(&self) -> WidgetKey;

    /// The parent widget, if any.
    fn parent(&self) -> Option<&dyn WidgetContext>;

    /// The widget's own icon tinting choice. [None] inherits from the parent.
    fn auto_icon_color(&self) -> Option<AutoIconColor> {
        None
    }

    /// Name of the widget's class, as the toolkit reports it.
    fn class_name(&self) -> &str;

    /// Object name given by the application.
    fn object_name(&self) -> &str {
        ""
    }
}

/// Resolve a widget's icon tinting: its own choice, then the nearest
/// ancestor's, then `default`.
pub fn resolve_auto_icon_color(widget: Option<&dyn WidgetContext>, default: AutoIconColor) -> AutoIconColor {
    let mut current = widget;
    while let Some(node) = current {
        if let Some(policy) = node.auto_icon_color() {
            return policy;
        }
        current = node.parent();
    }
    default
}

/// Whether `widget` or one of its ancestors has the given class name.
pub fn has_ancestor_of_class(widget: &dyn WidgetContext, class_name: &str) -> bool {
    let mut current = Some(widget);
    while let Some(node) = current {
        if node.class_name() == class_name {
            return true;
        }
        current = node.parent();
    }
    false
}

/// A plain widget description, for hosts without a retained widget tree.
#[derive(Debug, Clone)]
pub struct WidgetInfo {
    /// Widget identity.
    pub key: WidgetKey,
    /// Class name.
    pub class_name: String,
    /// Object name.
    pub object_name: String,
    /// Own icon tinting choice.
    pub auto_icon_color: Option<AutoIconColor>,
    /// Parent widget.
    pub parent: Option<Box<WidgetInfo>>,
}

impl WidgetInfo {
    /// Describe a widget with no parent and no overrides.
    pub fn new(key: WidgetKey, class_name: impl Into<String>) -> Self {
        Self {
            key,
            class_name: class_name.into(),
            object_name: String::new(),
            auto_icon_color: None,
            parent: None,
        }
    }

    /// Set the parent.
    pub fn with_parent(mut self, parent: WidgetInfo) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }

    /// Set the object name.
    pub fn with_object_name(mut self, name: impl Into<String>) -> Self {
        self.object_name = name.into();
        self
    }

    /// Set the icon tinting choice.
    pub fn with_auto_icon_color(mut self, policy: AutoIconColor) -> Self {
        self.auto_icon_color = Some(policy);
        self
    }
}

impl WidgetContext for WidgetInfo {
    fn key(&self) -> WidgetKey {
        self.key
    }

    fn parent(&self) -> Option<&dyn WidgetContext> {
        self.parent.as_deref().map(|parent| parent as &dyn WidgetContext)
    }

    fn auto_icon_color(&self) -> Option<AutoIconColor> {
        self.auto_icon_color
    }

    fn class_name(&self) -> &str {
        &self.class_name
    }

    fn object_name(&self) -> &str {
        &self.object_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> WidgetInfo {
        let window = WidgetInfo::new(WidgetKey::new(1), "Window")
            .with_auto_icon_color(AutoIconColor::TextColor);
        let toolbar = WidgetInfo::new(WidgetKey::new(2), "ToolBar").with_parent(window);
        WidgetInfo::new(WidgetKey::new(3), "ToolButton").with_parent(toolbar)
    }

    #[test]
    fn own_choice_wins() {
        let button = tree().with_auto_icon_color(AutoIconColor::ForegroundColor);
        assert_eq!(
            resolve_auto_icon_color(Some(&button), AutoIconColor::None),
            AutoIconColor::ForegroundColor
        );
    }

    #[test]
    fn inherits_from_ancestor() {
        let button = tree();
        assert_eq!(
            resolve_auto_icon_color(Some(&button), AutoIconColor::None),
            AutoIconColor::TextColor
        );
    }

    #[test]
    fn falls_back_to_default() {
        let lone = WidgetInfo::new(WidgetKey::new(4), "Label");
        assert_eq!(
            resolve_auto_icon_color(Some(&lone), AutoIconColor::ForegroundColor),
            AutoIconColor::ForegroundColor
        );
        assert_eq!(
            resolve_auto_icon_color(None, AutoIconColor::ForegroundColor),
            AutoIconColor::ForegroundColor
        );
    }

    #[test]
    fn ancestor_class_lookup() {
        let button = tree();
        assert!(has_ancestor_of_class(&button, "ToolBar"));
        assert!(has_ancestor_of_class(&button, "ToolButton"));
        assert!(!has_ancestor_of_class(&button, "MenuBar"));
    }
}

//! Typed component tree produced by the compiler.
//!
//! A `ComponentNode` is what the chat surface renders. Every enumerated
//! attribute is a token enum from `ir::tokens`; everything else is a
//! passthrough value (numbers, free text, URLs, action payloads) whose shape
//! the normalizer has already checked. Nodes are built once and never mutated.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use super::tokens::*;

/// Action payload forwarded to the host when a control is used.
/// Always an object carrying a string `type`.
pub type ActionConfig = Map<String, Value>;

// =============================================================================
// COMPONENT NODE: tagged union over the target component set
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum ComponentNode {
    // Containers
    Card(Container<CardAttrs>),
    Box(Container<BoxAttrs>),
    Row(Container<StackAttrs>),
    Col(Container<StackAttrs>),

    // Leaves
    Text(TextAttrs),
    Title(TitleAttrs),
    Caption(CaptionAttrs),
    Image(ImageAttrs),
    Spacer(SpacerAttrs),

    // Interactive
    Button(ButtonAttrs),
    DatePicker(DatePickerAttrs),
    Select(SelectAttrs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentCategory {
    Container,
    Leaf,
    Interactive,
}

/// A container: its own attributes plus ordered children.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Container<A> {
    #[serde(flatten)]
    pub attrs: A,
    pub children: Vec<ComponentNode>,
}

impl<A> Container<A> {
    pub fn new(attrs: A, children: Vec<ComponentNode>) -> Self {
        Container { attrs, children }
    }
}

impl ComponentNode {
    pub fn type_name(&self) -> &'static str {
        match self {
            ComponentNode::Card(_) => "Card",
            ComponentNode::Box(_) => "Box",
            ComponentNode::Row(_) => "Row",
            ComponentNode::Col(_) => "Col",
            ComponentNode::Text(_) => "Text",
            ComponentNode::Title(_) => "Title",
            ComponentNode::Caption(_) => "Caption",
            ComponentNode::Image(_) => "Image",
            ComponentNode::Spacer(_) => "Spacer",
            ComponentNode::Button(_) => "Button",
            ComponentNode::DatePicker(_) => "DatePicker",
            ComponentNode::Select(_) => "Select",
        }
    }

    pub fn category(&self) -> ComponentCategory {
        match self {
            ComponentNode::Card(_)
            | ComponentNode::Box(_)
            | ComponentNode::Row(_)
            | ComponentNode::Col(_) => ComponentCategory::Container,
            ComponentNode::Text(_)
            | ComponentNode::Title(_)
            | ComponentNode::Caption(_)
            | ComponentNode::Image(_)
            | ComponentNode::Spacer(_) => ComponentCategory::Leaf,
            ComponentNode::Button(_)
            | ComponentNode::DatePicker(_)
            | ComponentNode::Select(_) => ComponentCategory::Interactive,
        }
    }

    pub fn is_container(&self) -> bool {
        self.category() == ComponentCategory::Container
    }

    /// The chat surface only accepts a Card at the root.
    pub fn is_root_container(&self) -> bool {
        matches!(self, ComponentNode::Card(_))
    }

    /// Children of a container; empty for leaves and controls.
    pub fn children(&self) -> &[ComponentNode] {
        match self {
            ComponentNode::Card(c) => &c.children,
            ComponentNode::Box(c) => &c.children,
            ComponentNode::Row(c) | ComponentNode::Col(c) => &c.children,
            _ => &[],
        }
    }

    /// Total node count of this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(ComponentNode::node_count).sum::<usize>()
    }

    // -------------------------------------------------------------------------
    // Constructors for programmatic trees
    // -------------------------------------------------------------------------

    pub fn card(attrs: CardAttrs, children: Vec<ComponentNode>) -> Self {
        ComponentNode::Card(Container::new(attrs, children))
    }

    pub fn boxed(attrs: BoxAttrs, children: Vec<ComponentNode>) -> Self {
        ComponentNode::Box(Container::new(attrs, children))
    }

    pub fn row(attrs: StackAttrs, children: Vec<ComponentNode>) -> Self {
        ComponentNode::Row(Container::new(attrs, children))
    }

    pub fn col(attrs: StackAttrs, children: Vec<ComponentNode>) -> Self {
        ComponentNode::Col(Container::new(attrs, children))
    }
}

// =============================================================================
// PASSTHROUGH VALUE SHAPES
// =============================================================================

/// A length: a raw number or a CSS-ish string (`"100%"`, `"md"`, `"1"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    Number(Number),
    Token(String),
}

impl From<u64> for Dimension {
    fn from(n: u64) -> Self {
        Dimension::Number(n.into())
    }
}

impl From<&str> for Dimension {
    fn from(s: &str) -> Self {
        Dimension::Token(s.to_string())
    }
}

/// Padding/margin: uniform number, a token, or a per-side map
/// (`{"top": 2, "bottom": 2}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Spacing {
    Uniform(Number),
    Token(String),
    Sides(Map<String, Value>),
}

impl From<u64> for Spacing {
    fn from(n: u64) -> Self {
        Spacing::Uniform(n.into())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

// =============================================================================
// CONTAINER ATTRIBUTES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardAttrs {
    /// Host-side identity of the root card; set by the root wrapper only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<Spacing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<CardTheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CardStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub as_form: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxAttrs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<Spacing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify: Option<Justify>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_width: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex: Option<Dimension>,
}

/// Shared by Row and Col.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackAttrs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify: Option<Justify>,
}

// =============================================================================
// LEAF ATTRIBUTES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextAttrs {
    #[serde(default)]
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<TextColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<FontFamily>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_lines: Option<Number>,
}

impl TextAttrs {
    pub fn new(value: impl Into<String>) -> Self {
        TextAttrs {
            value: value.into(),
            ..Default::default()
        }
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn color(mut self, color: TextColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn family(mut self, family: FontFamily) -> Self {
        self.family = Some(family);
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = Some(true);
        self
    }

    pub fn into_node(self) -> ComponentNode {
        ComponentNode::Text(self)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleAttrs {
    #[serde(default)]
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<TextColor>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionAttrs {
    #[serde(default)]
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<TextColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncate: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_lines: Option<Number>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAttrs {
    #[serde(default)]
    pub src: String,
    #[serde(default)]
    pub alt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fit: Option<ImageFit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<ImagePosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flush: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_width: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_size: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_height: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_size: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Spacing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex: Option<Dimension>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacerAttrs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_size: Option<Dimension>,
}

// =============================================================================
// INTERACTIVE ATTRIBUTES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonAttrs {
    #[serde(default)]
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<ButtonVariant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_click_action: Option<ActionConfig>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatePickerAttrs {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub placeholder: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_change_action: Option<ActionConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<ControlVariant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<PopoverSide>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<PopoverAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clearable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectAttrs {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub options: Vec<SelectOption>,
    #[serde(default)]
    pub placeholder: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_change_action: Option<ActionConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<ControlVariant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clearable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
}

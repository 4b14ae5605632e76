//! Per-type attribute tables.
//! SYNC NOTE: attribute names and shapes here must track the attribute
//! structs in `ir/types.rs`; a canonical name with no matching field is
//! silently lost when the node is built.

use serde_json::json;

use crate::ir::tokens::*;
use crate::parse::types::WidgetKind;

use super::AttrRule;

// =============================================================================
// ALIAS TABLES
// =============================================================================

const DIRECTION_ALIASES: &[(&str, &str)] = &[
    ("column", "col"),
    ("horizontal", "row"),
    ("vertical", "col"),
];

const TEXT_COLOR_ALIASES: &[(&str, &str)] = &[
    ("default", "primary"),
    ("normal", "primary"),
    ("text", "primary"),
    ("label", "primary"),
    ("disabled", "muted"),
    ("danger", "error"),
    ("info", "accent"),
];

const WEIGHT_ALIASES: &[(&str, &str)] = &[("regular", "normal"), ("strong", "bold")];

const BUTTON_VARIANT_ALIASES: &[(&str, &str)] = &[
    ("primary", "solid"),
    ("secondary", "outline"),
    ("tertiary", "ghost"),
    ("default", "solid"),
];

// =============================================================================
// TABLES
// =============================================================================

pub(super) fn rules_for(kind: WidgetKind) -> Vec<AttrRule> {
    match kind {
        WidgetKind::Card => card(),
        WidgetKind::Box => boxed(),
        WidgetKind::Row => stack(json!("center"), Some(json!("start"))),
        WidgetKind::Col => stack(json!("start"), None),
        WidgetKind::Text => text(),
        WidgetKind::Title => title(),
        WidgetKind::Caption => caption(),
        WidgetKind::Image => image(),
        WidgetKind::Spacer => vec![AttrRule::dimension("minSize")],
        WidgetKind::Button => button(),
        WidgetKind::DatePicker => date_picker(),
        WidgetKind::Select => select(),
        WidgetKind::Divider => vec![],
    }
}

fn card() -> Vec<AttrRule> {
    vec![
        AttrRule::enumerated("size", Size::TOKENS).with_default(json!("md")),
        AttrRule::text("background"),
        AttrRule::spacing("padding"),
        AttrRule::enumerated("theme", CardTheme::TOKENS),
        AttrRule::enumerated("status", CardStatus::TOKENS),
        AttrRule::boolean("collapsed"),
        AttrRule::boolean("asForm"),
    ]
}

fn boxed() -> Vec<AttrRule> {
    vec![
        AttrRule::spacing("padding").with_default(json!(0)),
        AttrRule::number("gap").with_default(json!(0)),
        AttrRule::enumerated("direction", Direction::TOKENS)
            .with_aliases(DIRECTION_ALIASES)
            .with_default(json!("col")),
        AttrRule::enumerated("align", Align::TOKENS).with_default(json!("start")),
        AttrRule::enumerated("justify", Justify::TOKENS).with_default(json!("start")),
        AttrRule::text("background"),
        AttrRule::dimension("radius"),
        AttrRule::dimension("height"),
        AttrRule::dimension("width"),
        AttrRule::dimension("minWidth"),
        AttrRule::dimension("flex"),
    ]
}

/// Row and Col differ only in their alignment defaults.
fn stack(align: serde_json::Value, justify: Option<serde_json::Value>) -> Vec<AttrRule> {
    let justify_rule = AttrRule::enumerated("justify", Justify::TOKENS);
    vec![
        AttrRule::number("gap").with_default(json!(2)),
        AttrRule::enumerated("align", Align::TOKENS).with_default(align),
        match justify {
            Some(default) => justify_rule.with_default(default),
            None => justify_rule,
        },
    ]
}

fn text() -> Vec<AttrRule> {
    vec![
        AttrRule::text("value").with_default(json!("")),
        AttrRule::enumerated("size", Size::TOKENS).with_default(json!("md")),
        AttrRule::enumerated("weight", FontWeight::TOKENS)
            .with_aliases(WEIGHT_ALIASES)
            .with_default(json!("normal")),
        AttrRule::enumerated("color", TextColor::TOKENS)
            .with_aliases(TEXT_COLOR_ALIASES)
            .with_default(json!("primary")),
        AttrRule::enumerated("family", FontFamily::TOKENS),
        AttrRule::boolean("italic"),
        AttrRule::dimension("width"),
        AttrRule::number("minLines"),
    ]
}

fn title() -> Vec<AttrRule> {
    vec![
        AttrRule::text("value").with_default(json!("")),
        AttrRule::enumerated("size", Size::TOKENS).with_default(json!("lg")),
        AttrRule::enumerated("weight", FontWeight::TOKENS)
            .with_aliases(WEIGHT_ALIASES)
            .with_default(json!("semibold")),
        AttrRule::enumerated("color", TextColor::TOKENS).with_default(json!("primary")),
    ]
}

fn caption() -> Vec<AttrRule> {
    vec![
        AttrRule::text("value").with_default(json!("")),
        AttrRule::enumerated("color", TextColor::TOKENS).with_default(json!("tertiary")),
        AttrRule::enumerated("size", Size::TOKENS).with_default(json!("sm")),
        AttrRule::enumerated("weight", FontWeight::TOKENS)
            .with_aliases(WEIGHT_ALIASES)
            .with_default(json!("normal")),
        AttrRule::enumerated("textAlign", TextAlign::TOKENS),
        AttrRule::boolean("truncate"),
        AttrRule::number("maxLines"),
    ]
}

fn image() -> Vec<AttrRule> {
    vec![
        AttrRule::text("src").with_default(json!("")),
        AttrRule::text("alt").with_default(json!("Image")),
        AttrRule::enumerated("fit", ImageFit::TOKENS),
        AttrRule::enumerated("position", ImagePosition::TOKENS),
        AttrRule::dimension("radius"),
        AttrRule::boolean("frame"),
        AttrRule::boolean("flush"),
        AttrRule::dimension("height"),
        AttrRule::dimension("width"),
        AttrRule::dimension("size"),
        AttrRule::dimension("minHeight"),
        AttrRule::dimension("minWidth"),
        AttrRule::dimension("minSize"),
        AttrRule::dimension("maxHeight"),
        AttrRule::dimension("maxWidth"),
        AttrRule::dimension("maxSize"),
        AttrRule::spacing("margin"),
        AttrRule::text("background"),
        AttrRule::dimension("aspectRatio"),
        AttrRule::dimension("flex"),
    ]
}

fn button() -> Vec<AttrRule> {
    vec![
        AttrRule::text("label").with_default(json!("Button")),
        AttrRule::enumerated("variant", ButtonVariant::TOKENS)
            .with_aliases(BUTTON_VARIANT_ALIASES)
            .with_default(json!("solid")),
        AttrRule::enumerated("size", Size::TOKENS).with_default(json!("md")),
        AttrRule::action("onClickAction").read_from(&["action"]),
    ]
}

fn date_picker() -> Vec<AttrRule> {
    vec![
        AttrRule::text("name").with_default(json!("date")),
        AttrRule::text("placeholder").with_default(json!("Select date")),
        AttrRule::action("onChangeAction"),
        AttrRule::text("defaultValue"),
        AttrRule::text("min"),
        AttrRule::text("max"),
        AttrRule::enumerated("variant", ControlVariant::TOKENS),
        AttrRule::enumerated("size", Size::TOKENS),
        AttrRule::enumerated("side", PopoverSide::TOKENS),
        AttrRule::enumerated("align", PopoverAlign::TOKENS),
        AttrRule::boolean("pill"),
        AttrRule::boolean("block"),
        AttrRule::boolean("clearable"),
        AttrRule::boolean("disabled"),
    ]
}

fn select() -> Vec<AttrRule> {
    vec![
        AttrRule::text("name").with_default(json!("select")),
        AttrRule::option_list("options").with_default(json!([])),
        AttrRule::text("placeholder").with_default(json!("Select option")),
        AttrRule::action("onChangeAction"),
        AttrRule::text("defaultValue"),
        AttrRule::enumerated("variant", ControlVariant::TOKENS),
        AttrRule::enumerated("size", Size::TOKENS),
        AttrRule::boolean("pill"),
        AttrRule::boolean("block"),
        AttrRule::boolean("clearable"),
        AttrRule::boolean("disabled"),
    ]
}

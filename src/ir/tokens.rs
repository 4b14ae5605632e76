//! Closed token sets for enumerated component attributes.
//!
//! Each enum exposes `TOKENS`, the exact wire spelling of every variant in
//! declaration order. The rule tables in `rules::table` read their allow-lists
//! from here, so the normalizer and the typed tree cannot drift apart.

use serde::{Deserialize, Serialize};

macro_rules! token_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $token:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $token)]
                $variant,
            )+
        }

        impl $name {
            pub const TOKENS: &'static [&'static str] = &[$($token),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $token,)+
                }
            }

            pub fn from_token(token: &str) -> Option<Self> {
                match token {
                    $($token => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

token_enum! {
    /// Shared size scale for cards, text, buttons and form controls.
    Size {
        Xs => "xs",
        Sm => "sm",
        Md => "md",
        Lg => "lg",
        Xl => "xl",
    }
}

token_enum! {
    FontWeight {
        Normal => "normal",
        Medium => "medium",
        Semibold => "semibold",
        Bold => "bold",
    }
}

token_enum! {
    /// Semantic text colours understood by the chat surface.
    TextColor {
        Primary => "primary",
        Secondary => "secondary",
        Tertiary => "tertiary",
        Success => "success",
        Warning => "warning",
        Error => "error",
        Accent => "accent",
        Muted => "muted",
        Inherit => "inherit",
    }
}

token_enum! {
    FontFamily {
        Default => "default",
        Mono => "mono",
    }
}

token_enum! {
    /// Cross-axis alignment for Box/Row/Col.
    Align {
        Start => "start",
        Center => "center",
        End => "end",
        Stretch => "stretch",
    }
}

token_enum! {
    /// Main-axis distribution for Box/Row/Col.
    Justify {
        Start => "start",
        Center => "center",
        End => "end",
        Between => "between",
        Around => "around",
        Evenly => "evenly",
    }
}

token_enum! {
    Direction {
        Row => "row",
        Col => "col",
    }
}

token_enum! {
    ButtonVariant {
        Solid => "solid",
        Soft => "soft",
        Outline => "outline",
        Ghost => "ghost",
    }
}

token_enum! {
    /// Visual variant of DatePicker and Select.
    ControlVariant {
        Default => "default",
        Outline => "outline",
        Ghost => "ghost",
    }
}

token_enum! {
    CardTheme {
        Light => "light",
        Dark => "dark",
    }
}

token_enum! {
    CardStatus {
        Success => "success",
        Warning => "warning",
        Error => "error",
    }
}

token_enum! {
    TextAlign {
        Left => "left",
        Center => "center",
        Right => "right",
        Justify => "justify",
    }
}

token_enum! {
    ImageFit {
        Cover => "cover",
        Contain => "contain",
        Fill => "fill",
        ScaleDown => "scale-down",
        None => "none",
    }
}

token_enum! {
    ImagePosition {
        Center => "center",
        Top => "top",
        Bottom => "bottom",
        Left => "left",
        Right => "right",
    }
}

token_enum! {
    /// Which side of the trigger a DatePicker popover opens on.
    PopoverSide {
        Top => "top",
        Bottom => "bottom",
        Left => "left",
        Right => "right",
    }
}

token_enum! {
    PopoverAlign {
        Start => "start",
        Center => "center",
        End => "end",
    }
}

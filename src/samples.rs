//! Built-in demo inputs: email composer, weather forecast and colour test
//! specs, plus a user profile blob.

use serde_json::{Value, json};

use crate::options::CompileOptions;
use crate::render::{self, CompiledWidget};

pub const SAMPLE_EMAIL_COPY_TEXT: &str = "Sample Email Widget\n\nThis demonstrates how ChatKit widget JSON specifications are rendered as actual UI components.";
pub const SAMPLE_WEATHER_COPY_TEXT: &str = "Weather Forecast Widget\n\nShows current temperature (47°-69°) in San Francisco with partly sunny conditions and 5-day forecast icons.";
pub const SAMPLE_COLOR_TEST_COPY_TEXT: &str = "Vivid Color Test Widget\n\nThis widget tests if colors are properly displayed in ChatKit. Each text should appear in a different color.";
pub const SAMPLE_JSON_COPY_TEXT: &str = "Sample JSON Widget\n\nThis is a demonstration of how JSON data can be rendered as an interactive widget.";

/// Email composer Card: sender, recipient and subject rows separated by
/// dividers, an editable body, and Send/Discard actions.
pub fn sample_email_spec() -> Value {
    json!({
        "type": "Card",
        "size": "lg",
        "confirm": {
            "action": {"type": "email.send"},
            "label": "Send email"
        },
        "cancel": {
            "action": {"type": "email.discard"},
            "label": "Discard"
        },
        "children": [
            {
                "type": "Row",
                "children": [
                    {"type": "Text", "value": "FROM", "width": 80, "weight": "semibold", "color": "tertiary", "size": "xs"},
                    {"type": "Text", "value": "zj@openai.com", "color": "tertiary"}
                ]
            },
            {"type": "Divider", "flush": true},
            {
                "type": "Row",
                "children": [
                    {"type": "Text", "value": "TO", "width": 80, "weight": "semibold", "color": "tertiary", "size": "xs"},
                    {
                        "type": "Text",
                        "value": "weedon@openai.com",
                        "editable": {"name": "email.to", "required": true, "placeholder": "name@example.com"}
                    }
                ]
            },
            {"type": "Divider", "flush": true},
            {
                "type": "Row",
                "children": [
                    {"type": "Text", "value": "SUBJECT", "width": 80, "weight": "semibold", "color": "tertiary", "size": "xs"},
                    {
                        "type": "Text",
                        "value": "ChatKit Roadmap",
                        "editable": {"name": "email.subject", "required": true, "placeholder": "Email subject"}
                    }
                ]
            },
            {"type": "Divider", "flush": true},
            {
                "type": "Text",
                "value": "Hey David, \n\nHope you're doing well! Just wanted to check in and see if there are any updates on the ChatKit roadmap. We're excited to see what's coming next and how we can make the most of the upcoming features.\n\nEspecially curious to see how you support widgets!\n\nBest, Zach",
                "minLines": 9,
                "editable": {"name": "email.body", "required": true, "placeholder": "Write your message…"}
            }
        ]
    })
}

/// Dark gradient forecast Card: current conditions over a five-day strip.
pub fn sample_weather_spec() -> Value {
    let day = |src: &str, alt: &str| {
        json!({
            "type": "Col",
            "align": "center",
            "gap": 0,
            "children": [
                {"type": "Image", "src": src, "alt": alt, "width": 40, "height": 40},
                {"type": "Text", "value": "54°"}
            ]
        })
    };
    json!({
        "type": "Card",
        "theme": "dark",
        "size": "sm",
        "padding": 8,
        "background": "linear-gradient(111deg, #1769C8 0%, #258AE3 56.92%, #31A3F8 100%)",
        "children": [
            {
                "type": "Col",
                "align": "center",
                "gap": 3,
                "children": [
                    {
                        "type": "Image",
                        "src": "https://cdn.openai.com/API/storybook/mixed-sun.png",
                        "alt": "Weather icon",
                        "width": 60,
                        "height": 60
                    },
                    {
                        "type": "Row",
                        "align": "center",
                        "gap": 2,
                        "children": [
                            {"type": "Title", "value": "47°", "size": "xl", "weight": "normal", "color": "muted"},
                            {"type": "Title", "value": "69°", "size": "xl", "color": "primary", "weight": "normal"}
                        ]
                    },
                    {"type": "Caption", "value": "San Francisco, CA", "color": "primary"},
                    {"type": "Text", "value": "Partly sunny skies accompanied by some clouds", "textAlign": "center"},
                    {
                        "type": "Row",
                        "gap": 6,
                        "children": [
                            day("https://cdn.openai.com/API/storybook/mostly-sunny.png", "Mostly sunny"),
                            day("https://cdn.openai.com/API/storybook/rain.png", "Rain"),
                            day("https://cdn.openai.com/API/storybook/mixed-sun.png", "Mixed sun"),
                            day("https://cdn.openai.com/API/storybook/windy.png", "Windy"),
                            day("https://cdn.openai.com/API/storybook/mostly-sunny.png", "Mostly sunny")
                        ]
                    }
                ]
            }
        ]
    })
}

/// One Text per semantic colour, then a row of the three neutral tones.
pub fn sample_color_test_spec() -> Value {
    json!({
        "type": "Card",
        "size": "lg",
        "children": [
            {"type": "Title", "value": "🎨 Color Test Widget", "color": "primary", "size": "lg"},
            {"type": "Text", "value": "🔴 This should be ERROR RED", "color": "error", "weight": "bold", "size": "lg"},
            {"type": "Text", "value": "🟢 This should be SUCCESS GREEN", "color": "success", "weight": "bold", "size": "lg"},
            {"type": "Text", "value": "🔵 This should be ACCENT BLUE", "color": "accent", "weight": "bold", "size": "lg"},
            {"type": "Text", "value": "⚫ This should be MUTED GRAY", "color": "muted", "weight": "medium", "size": "md"},
            {
                "type": "Row",
                "gap": 4,
                "children": [
                    {"type": "Text", "value": "PRIMARY", "color": "primary", "weight": "semibold"},
                    {"type": "Text", "value": "SECONDARY", "color": "secondary", "weight": "semibold"},
                    {"type": "Text", "value": "TERTIARY", "color": "tertiary", "weight": "semibold"}
                ]
            }
        ]
    })
}

pub fn sample_json_data() -> Value {
    json!({
        "user": {
            "id": 12345,
            "name": "John Doe",
            "email": "john.doe@example.com",
            "active": true,
            "profile": {
                "age": 30,
                "location": "San Francisco, CA",
                "interests": ["programming", "hiking", "photography"],
                "settings": {
                    "theme": "dark",
                    "notifications": true,
                    "privacy_level": "medium"
                }
            }
        },
        "metadata": {
            "created_at": "2024-01-15T10:30:00Z",
            "last_updated": "2024-11-01T12:00:00Z",
            "version": 2.1,
            "tags": ["premium", "verified"],
            "stats": {
                "login_count": 156,
                "posts_created": 23,
                "followers": 89
            }
        }
    })
}

pub fn sample_email_widget() -> CompiledWidget {
    let options = CompileOptions::spec("Email Composer").with_key("sample_email");
    CompiledWidget {
        copy_text: SAMPLE_EMAIL_COPY_TEXT.to_string(),
        ..render::compile(&sample_email_spec(), &options)
    }
}

pub fn sample_weather_widget() -> CompiledWidget {
    let options = CompileOptions::spec("Weather Forecast").with_key("weather_forecast");
    CompiledWidget {
        copy_text: SAMPLE_WEATHER_COPY_TEXT.to_string(),
        ..render::compile(&sample_weather_spec(), &options)
    }
}

pub fn sample_color_test_widget() -> CompiledWidget {
    let options = CompileOptions::spec("Vivid Color Test").with_key("vivid_colors");
    CompiledWidget {
        copy_text: SAMPLE_COLOR_TEST_COPY_TEXT.to_string(),
        ..render::compile(&sample_color_test_spec(), &options)
    }
}

pub fn sample_json_widget() -> CompiledWidget {
    let options = CompileOptions::data("User Profile Data", 4, true).with_key("sample_json");
    CompiledWidget {
        copy_text: SAMPLE_JSON_COPY_TEXT.to_string(),
        ..render::compile(&sample_json_data(), &options)
    }
}

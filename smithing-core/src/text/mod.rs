use std::fmt;

use color::Color;
use colored::Colorize;
use serde::{Deserialize, Deserializer, Serialize};
use style::Style;

pub mod color;
pub mod style;

/// Represents a Text component
///
/// Used for item display names and lore lines as well as for command feedback. In
/// configuration files a component is either a plain string or a table with `text` and
/// style fields.
#[derive(Clone, Debug, Serialize, PartialEq, Eq, Hash)]
pub struct TextComponent {
    /// The actual text
    pub text: String,
    /// Style of the text. Bold, Italic, underline, Color...
    #[serde(flatten)]
    pub style: Style,
    /// Extra text components
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<TextComponent>,
}

impl TextComponent {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Style::default(),
            extra: vec![],
        }
    }

    #[must_use]
    pub fn add_child(mut self, child: TextComponent) -> Self {
        self.extra.push(child);
        self
    }

    /// The text without any styling, children included.
    #[must_use]
    pub fn plain(&self) -> String {
        let mut text = self.text.clone();
        for child in &self.extra {
            text.push_str(&child.plain());
        }
        text
    }

    #[must_use]
    pub fn to_pretty_console(&self) -> String {
        let mut text = match self.style.color {
            Some(color) => color.console_color(&self.text).to_string(),
            None => self.text.clone(),
        };
        if self.style.bold == Some(true) {
            text = text.bold().to_string();
        }
        if self.style.italic == Some(true) {
            text = text.italic().to_string();
        }
        if self.style.underlined == Some(true) {
            text = text.underline().to_string();
        }
        if self.style.strikethrough == Some(true) {
            text = text.strikethrough().to_string();
        }
        for child in &self.extra {
            text += &child.to_pretty_console();
        }
        text
    }

    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.style.color = Some(color);
        self
    }

    #[must_use]
    pub fn color_named(mut self, color: color::NamedColor) -> Self {
        self.style.color = Some(Color::Named(color));
        self
    }

    /// Makes the text bold
    #[must_use]
    pub fn bold(mut self) -> Self {
        self.style.bold = Some(true);
        self
    }

    /// Makes the text italic
    #[must_use]
    pub fn italic(mut self) -> Self {
        self.style.italic = Some(true);
        self
    }
}

impl fmt::Display for TextComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.plain())
    }
}

impl<'de> Deserialize<'de> for TextComponent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Rich {
            text: String,
            #[serde(flatten)]
            style: Style,
            #[serde(default)]
            extra: Vec<TextComponent>,
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Plain(String),
            Rich(Rich),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Plain(text) => TextComponent::text(text),
            Repr::Rich(Rich { text, style, extra }) => TextComponent { text, style, extra },
        })
    }
}

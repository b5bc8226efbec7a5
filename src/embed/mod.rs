//! Embedded static resources.
//!
//! The page stylesheet and client script are compiled into the binary and
//! rendered with typed variable injection:
//!
//! ```ignore
//! use embed::page::{STYLE_CSS, ThemeVars};
//!
//! let css = STYLE_CSS.render(&theme_vars);
//! ```

mod template;

pub use template::{Template, TemplateVars};

pub mod page {
    use super::{Template, TemplateVars};

    /// Theme tokens injected into the stylesheet's `:root` block.
    ///
    /// Values come straight out of the document's `theme` section; they are
    /// raw CSS fragments (colors, a font family name) and are not escaped.
    pub struct ThemeVars {
        pub primary: String,
        pub secondary: String,
        pub accent: String,
        pub dark_bg: String,
        pub card_bg: String,
        pub text: String,
        pub heading: String,
        pub gradient_start: String,
        pub gradient_end: String,
        pub font_heading: String,
    }

    impl TemplateVars for ThemeVars {
        fn apply(&self, content: &str) -> String {
            content
                .replace("__PRIMARY__", &self.primary)
                .replace("__SECONDARY__", &self.secondary)
                .replace("__ACCENT__", &self.accent)
                .replace("__DARK_BG__", &self.dark_bg)
                .replace("__CARD_BG__", &self.card_bg)
                .replace("__TEXT__", &self.text)
                .replace("__HEADING__", &self.heading)
                .replace("__GRAD_START__", &self.gradient_start)
                .replace("__GRAD_END__", &self.gradient_end)
                .replace("__FONT__", &self.font_heading)
        }
    }

    /// Page stylesheet with theme token placeholders.
    pub const STYLE_CSS: Template<ThemeVars> = Template::new(include_str!("page/style.css"));

    /// Variables for the client script.
    pub struct ScriptVars {
        /// JSON array literal of strings cycled by the typing animation
        pub typing_titles: String,
    }

    impl TemplateVars for ScriptVars {
        fn apply(&self, content: &str) -> String {
            content.replace("__TYPING_TITLES__", &self.typing_titles)
        }
    }

    /// Client-side behavior (animations, counters, project filter).
    pub const APP_JS: Template<ScriptVars> = Template::new(include_str!("page/app.js"));
}

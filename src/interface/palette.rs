use dialoguer::console::Style;

/// Console styles for the different kinds of output.
///
/// `plain()` applies no styling at all, which keeps rendered text stable for
/// tests and for terminals that should not receive escape codes.
#[derive(Debug, Clone)]
pub struct Palette {
    header: Style,
    sub_heading: Style,
    recipe: Style,
    error: Style,
}

impl Palette {
    pub fn colored() -> Self {
        Self {
            header: Style::new().cyan(),
            sub_heading: Style::new().green(),
            recipe: Style::new().yellow(),
            error: Style::new().red(),
        }
    }

    pub fn plain() -> Self {
        Self {
            header: Style::new(),
            sub_heading: Style::new(),
            recipe: Style::new(),
            error: Style::new(),
        }
    }

    pub fn from_flag(no_color: bool) -> Self {
        if no_color {
            Self::plain()
        } else {
            Self::colored()
        }
    }

    pub fn header(&self, text: &str) -> String {
        self.header.apply_to(text).to_string()
    }

    pub fn sub_heading(&self, text: &str) -> String {
        self.sub_heading.apply_to(text).to_string()
    }

    pub fn recipe(&self, text: &str) -> String {
        self.recipe.apply_to(text).to_string()
    }

    pub fn error(&self, text: &str) -> String {
        self.error.apply_to(text).to_string()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::colored()
    }
}

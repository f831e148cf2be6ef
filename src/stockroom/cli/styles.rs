use console::Style;
use once_cell::sync::Lazy;
use stockroom::prompt::PromptStyles;

/// Named styles for everything the terminal client draws.
pub struct Theme {
    pub rule: Style,
    pub banner: Style,
    pub section: Style,
    pub header: Style,
    pub total: Style,
    pub stats: Style,
    pub menu: Style,
    pub label: Style,
    pub question: Style,
    pub error: Style,
}

pub static THEME: Lazy<Theme> = Lazy::new(|| Theme {
    rule: Style::new().cyan().bold(),
    banner: Style::new().yellow().bold(),
    section: Style::new().blue(),
    header: Style::new().green(),
    total: Style::new().yellow(),
    stats: Style::new().green(),
    menu: Style::new().cyan(),
    label: Style::new().blue(),
    question: Style::new().yellow(),
    error: Style::new().red(),
});

impl Theme {
    pub fn prompt_styles(&self) -> PromptStyles {
        PromptStyles {
            label: self.label.clone(),
            heading: self.menu.clone(),
            error: self.error.clone(),
            question: self.question.clone(),
        }
    }
}

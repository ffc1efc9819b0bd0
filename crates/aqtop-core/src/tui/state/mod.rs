//! Application state management.

mod app_state;
mod tab_states;

pub use app_state::*;
pub use tab_states::*;

/// Available tabs in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Dashboard,
    Pollution,
    Recommendations,
    Data,
    Ai,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[
            Tab::Dashboard,
            Tab::Pollution,
            Tab::Recommendations,
            Tab::Data,
            Tab::Ai,
        ]
    }

    /// Returns the short name shown in the tab bar.
    pub fn name(&self) -> &'static str {
        match self {
            Tab::Dashboard => "DSH",
            Tab::Pollution => "POL",
            Tab::Recommendations => "REC",
            Tab::Data => "DAT",
            Tab::Ai => "AI",
        }
    }

    /// Returns the page title shown in the header.
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Pollution => "Pollution Analysis",
            Tab::Recommendations => "Recommendations",
            Tab::Data => "Google Sheets Data",
            Tab::Ai => "AI & RAG System",
        }
    }

    /// Returns the next tab.
    pub fn next(&self) -> Tab {
        match self {
            Tab::Dashboard => Tab::Pollution,
            Tab::Pollution => Tab::Recommendations,
            Tab::Recommendations => Tab::Data,
            Tab::Data => Tab::Ai,
            Tab::Ai => Tab::Dashboard,
        }
    }

    /// Returns the previous tab.
    pub fn prev(&self) -> Tab {
        match self {
            Tab::Dashboard => Tab::Ai,
            Tab::Pollution => Tab::Dashboard,
            Tab::Recommendations => Tab::Pollution,
            Tab::Data => Tab::Recommendations,
            Tab::Ai => Tab::Data,
        }
    }
}

/// A form field that can be edited through the inline text buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    /// Pollution tab: analysis window in days.
    AnalysisDays,
    /// Recommendations tab: free-text question for smart recommendations.
    SmartQuery,
    /// Data tab: row limit.
    DataLimit,
    /// Data tab: JSON filter for the sheets query.
    DataFilter,
    /// AI tab: RAG question.
    RagQuery,
}

impl EditField {
    /// Label shown in the header while editing.
    pub fn label(&self) -> &'static str {
        match self {
            EditField::AnalysisDays => "Days",
            EditField::SmartQuery => "Question",
            EditField::DataLimit => "Limit",
            EditField::DataFilter => "Filter",
            EditField::RagQuery => "Query",
        }
    }
}

/// Input mode for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Editing one form field through the shared text buffer.
    Edit(EditField),
}

/// Active popup state. Only one popup can be open at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PopupState {
    /// No popup is open.
    #[default]
    None,
    /// Help popup with scroll offset.
    Help { scroll: usize },
    /// Quit confirmation dialog.
    QuitConfirm,
}

impl PopupState {
    /// Returns true if any popup is open (excluding None).
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// User profile sent with recommendation requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserType {
    #[default]
    General,
    Sensitive,
    Elderly,
    Children,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::General => "general",
            UserType::Sensitive => "sensitive",
            UserType::Elderly => "elderly",
            UserType::Children => "children",
        }
    }

    pub fn next(&self) -> UserType {
        match self {
            UserType::General => UserType::Sensitive,
            UserType::Sensitive => UserType::Elderly,
            UserType::Elderly => UserType::Children,
            UserType::Children => UserType::General,
        }
    }
}

/// Industry profile sent with industrial recommendation requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndustryType {
    #[default]
    Manufacturing,
    Chemical,
    PowerPlant,
    Mining,
}

impl IndustryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndustryType::Manufacturing => "manufacturing",
            IndustryType::Chemical => "chemical",
            IndustryType::PowerPlant => "power_plant",
            IndustryType::Mining => "mining",
        }
    }

    pub fn next(&self) -> IndustryType {
        match self {
            IndustryType::Manufacturing => IndustryType::Chemical,
            IndustryType::Chemical => IndustryType::PowerPlant,
            IndustryType::PowerPlant => IndustryType::Mining,
            IndustryType::Mining => IndustryType::Manufacturing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_cycle_is_closed() {
        for tab in Tab::all() {
            assert_eq!(tab.next().prev(), *tab);
            assert_eq!(tab.prev().next(), *tab);
        }
    }

    #[test]
    fn tab_titles_match_page_titles() {
        assert_eq!(Tab::Dashboard.title(), "Dashboard");
        assert_eq!(Tab::Pollution.title(), "Pollution Analysis");
        assert_eq!(Tab::Recommendations.title(), "Recommendations");
        assert_eq!(Tab::Data.title(), "Google Sheets Data");
        assert_eq!(Tab::Ai.title(), "AI & RAG System");
    }
}

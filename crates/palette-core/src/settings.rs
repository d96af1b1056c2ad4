//! Static setting pages listed by the palette, and the chat prompt each
//! one sends when chosen.

use std::str::FromStr;

use palette_types::PaletteError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingPage {
    App,
    Ai,
    Appearance,
    Workspace,
    Permissions,
    Labels,
    Input,
    Preferences,
    Shortcuts,
}

impl SettingPage {
    pub fn all() -> &'static [SettingPage] {
        &[
            SettingPage::App,
            SettingPage::Ai,
            SettingPage::Appearance,
            SettingPage::Workspace,
            SettingPage::Permissions,
            SettingPage::Labels,
            SettingPage::Input,
            SettingPage::Preferences,
            SettingPage::Shortcuts,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            SettingPage::App => "app",
            SettingPage::Ai => "ai",
            SettingPage::Appearance => "appearance",
            SettingPage::Workspace => "workspace",
            SettingPage::Permissions => "permissions",
            SettingPage::Labels => "labels",
            SettingPage::Input => "input",
            SettingPage::Preferences => "preferences",
            SettingPage::Shortcuts => "shortcuts",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SettingPage::App => "App",
            SettingPage::Ai => "AI",
            SettingPage::Appearance => "Appearance",
            SettingPage::Workspace => "Workspace",
            SettingPage::Permissions => "Permissions",
            SettingPage::Labels => "Labels",
            SettingPage::Input => "Input",
            SettingPage::Preferences => "Preferences",
            SettingPage::Shortcuts => "Keyboard Shortcuts",
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self {
            SettingPage::App => "Show me my app settings",
            SettingPage::Ai => "Show me my AI settings",
            SettingPage::Appearance => "Show me my appearance settings",
            SettingPage::Workspace => "Show me my workspace settings",
            SettingPage::Permissions => "Show me my permission settings",
            SettingPage::Labels => "Show me my label settings",
            SettingPage::Input => "Show me my input settings",
            SettingPage::Preferences => "Show me my preferences",
            SettingPage::Shortcuts => "Show me my keyboard shortcuts",
        }
    }
}

impl FromStr for SettingPage {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SettingPage::all()
            .iter()
            .copied()
            .find(|page| page.id() == s)
            .ok_or_else(|| PaletteError::UnknownSettingPage(s.to_string()))
    }
}

/// Prompt for a setting page id. Unknown ids get a generic phrase.
pub fn get_setting_prompt(id: &str) -> String {
    match id.parse::<SettingPage>() {
        Ok(page) => page.prompt().to_string(),
        Err(_) => format!("Show me my {} settings", id),
    }
}

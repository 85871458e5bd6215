use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Class toggled on `<html>` while dark mode is active
pub const DARK_CLASS: &str = "nova-dark";

/// Theme mode as configured per database
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    Auto,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::Auto => "auto",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Light Mode",
            ThemeMode::Dark => "Dark Mode",
            ThemeMode::Auto => "System Preference",
        }
    }

    /// Whether the page should render dark given the OS preference
    pub fn is_dark(&self, prefers_dark: bool) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::Auto => prefers_dark,
        }
    }
}

impl FromStr for ThemeMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "auto" => Ok(ThemeMode::Auto),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccentColor {
    #[default]
    Indigo,
    Blue,
    Emerald,
    Rose,
    Amber,
    Violet,
}

impl AccentColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccentColor::Indigo => "indigo",
            AccentColor::Blue => "blue",
            AccentColor::Emerald => "emerald",
            AccentColor::Rose => "rose",
            AccentColor::Amber => "amber",
            AccentColor::Violet => "violet",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AccentColor::Indigo => "Indigo",
            AccentColor::Blue => "Ocean Blue",
            AccentColor::Emerald => "Emerald",
            AccentColor::Rose => "Rose",
            AccentColor::Amber => "Amber",
            AccentColor::Violet => "Violet",
        }
    }
}

impl FromStr for AccentColor {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blue" => Ok(AccentColor::Blue),
            "emerald" => Ok(AccentColor::Emerald),
            "rose" => Ok(AccentColor::Rose),
            "amber" => Ok(AccentColor::Amber),
            "violet" => Ok(AccentColor::Violet),
            _ => Ok(AccentColor::Indigo),
        }
    }
}

/// Class additions/removals for a DOM element.
///
/// Components never touch the document themselves; they hand one of these
/// to the DOM adapter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassPatch {
    pub add: Vec<&'static str>,
    pub remove: Vec<&'static str>,
}

impl ClassPatch {
    pub fn toggle(class: &'static str, on: bool) -> Self {
        let mut patch = ClassPatch::default();
        patch.set(class, on);
        patch
    }

    pub fn set(&mut self, class: &'static str, on: bool) {
        self.add.retain(|c| *c != class);
        self.remove.retain(|c| *c != class);
        if on {
            self.add.push(class);
        } else {
            self.remove.push(class);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.add.is_empty() && self.remove.is_empty()
    }
}

/// Theme preferences injected as `data-nova-*` attributes on `<html>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeSettings {
    pub mode: ThemeMode,
    pub accent: AccentColor,
    pub animations: bool,
    pub sidebar_collapsed: bool,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            mode: ThemeMode::Light,
            accent: AccentColor::Indigo,
            animations: true,
            sidebar_collapsed: false,
        }
    }
}

impl ThemeSettings {
    pub const MODE_ATTR: &'static str = "data-nova-mode";
    pub const ACCENT_ATTR: &'static str = "data-nova-accent";
    pub const ANIMATIONS_ATTR: &'static str = "data-nova-animations";
    pub const SIDEBAR_COLLAPSED_ATTR: &'static str = "data-nova-sidebar-collapsed";

    /// Build settings from an attribute lookup. Missing or unknown values
    /// keep their defaults; booleans use the server's `"True"`/`"False"`.
    pub fn from_attributes(attr: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = ThemeSettings::default();
        let mode = attr(Self::MODE_ATTR)
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.mode);
        let accent = attr(Self::ACCENT_ATTR)
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.accent);
        let animations = attr(Self::ANIMATIONS_ATTR)
            .map(|v| v != "False")
            .unwrap_or(defaults.animations);
        let sidebar_collapsed = attr(Self::SIDEBAR_COLLAPSED_ATTR)
            .map(|v| v == "True")
            .unwrap_or(defaults.sidebar_collapsed);

        Self {
            mode,
            accent,
            animations,
            sidebar_collapsed,
        }
    }

    pub fn is_dark(&self, prefers_dark: bool) -> bool {
        self.mode.is_dark(prefers_dark)
    }
}

/// Light/dark switch shown in the systray
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DarkModeToggle {
    mode: ThemeMode,
    is_dark: bool,
}

impl DarkModeToggle {
    pub fn new(mode: ThemeMode, prefers_dark: bool) -> Self {
        Self {
            mode,
            is_dark: mode.is_dark(prefers_dark),
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    pub fn patch(&self) -> ClassPatch {
        ClassPatch::toggle(DARK_CLASS, self.is_dark)
    }

    /// Flip to the explicit opposite mode; leaves `Auto` behind.
    pub fn toggle(&mut self) -> ClassPatch {
        self.is_dark = !self.is_dark;
        self.mode = if self.is_dark { ThemeMode::Dark } else { ThemeMode::Light };
        tracing::debug!(
            operation = crate::shared::logging::LogOperation::Theme.as_str(),
            mode = self.mode.as_str(),
            "Dark mode toggled"
        );
        self.patch()
    }

    /// OS preference changed; only followed in `Auto` mode.
    pub fn system_changed(&mut self, prefers_dark: bool) -> Option<ClassPatch> {
        if self.mode != ThemeMode::Auto {
            return None;
        }
        self.is_dark = prefers_dark;
        Some(self.patch())
    }
}

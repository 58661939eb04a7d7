/// Core type definitions used across the TUI
use crate::panel::PanelKind;

/// Tab enum for main navigation, one tab per panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    News,
    Drivers,
    Constructors,
}

impl Tab {
    pub fn all() -> [Self; 3] {
        [Self::News, Self::Drivers, Self::Constructors]
    }

    pub fn index(&self) -> usize {
        match self {
            Self::News => 0,
            Self::Drivers => 1,
            Self::Constructors => 2,
        }
    }

    pub fn panel(&self) -> PanelKind {
        match self {
            Self::News => PanelKind::News,
            Self::Drivers => PanelKind::Drivers,
            Self::Constructors => PanelKind::Constructors,
        }
    }

    pub fn label(&self) -> &'static str {
        self.panel().label()
    }

    /// Keyboard shortcut shown in the help line
    pub fn shortcut(&self) -> char {
        match self {
            Self::News => '1',
            Self::Drivers => '2',
            Self::Constructors => '3',
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::News => Self::Drivers,
            Self::Drivers => Self::Constructors,
            Self::Constructors => Self::News,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::News => Self::Constructors,
            Self::Drivers => Self::News,
            Self::Constructors => Self::Drivers,
        }
    }
}

impl From<PanelKind> for Tab {
    fn from(panel: PanelKind) -> Self {
        match panel {
            PanelKind::News => Self::News,
            PanelKind::Drivers => Self::Drivers,
            PanelKind::Constructors => Self::Constructors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_cycle_wraps() {
        assert_eq!(Tab::Constructors.next(), Tab::News);
        assert_eq!(Tab::News.prev(), Tab::Constructors);
        for tab in Tab::all() {
            assert_eq!(tab.next().prev(), tab);
        }
    }

    #[test]
    fn test_tab_maps_to_panel() {
        assert_eq!(Tab::Drivers.panel(), PanelKind::Drivers);
        assert_eq!(Tab::Constructors.label(), "Constructors");
        assert_eq!(Tab::all()[Tab::News.index()], Tab::News);
        for tab in Tab::all() {
            assert_eq!(Tab::from(tab.panel()), tab);
        }
    }
}

//! Pure card templates and the view model a panel renders to.
//!
//! A `PanelContent` is what one panel container displays: nothing, a loading
//! block, a grid of cards, or a single alert. Both the terminal widgets and
//! the HTML renderer consume it, so the templates here are the single place
//! that decides what a card says.

use crate::config::DisplayConfig;
use crate::formatting::{format_points, format_published};
use crate::panel::PanelKind;
use crate::types::{ConstructorStanding, DriverStanding, NewsItem};

/// Seconds of entrance-animation delay added per card
pub const ANIMATION_STEP_SECS: f64 = 0.1;

/// Visual family of a card, decides badge colour and icons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStyle {
    News,
    Driver,
    Constructor,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardField {
    pub label: &'static str,
    pub value: String,
}

impl CardField {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self { label, value: value.into() }
    }
}

/// Date line under a news card, with the optional source suffix
#[derive(Debug, Clone, PartialEq)]
pub struct CardFooter {
    pub date: String,
    pub source: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    /// Position in the list, drives the animation delay
    pub index: usize,
    pub style: CardStyle,
    /// Championship rank shown in the corner badge
    pub badge: Option<String>,
    pub title: String,
    /// Free text body (news summary, may contain markup)
    pub text: Option<String>,
    pub fields: Vec<CardField>,
    pub footer: Option<CardFooter>,
    pub link: Option<String>,
}

impl Card {
    /// CSS-style delay, e.g. `0s`, `0.1s`, `0.30000000000000004s`
    pub fn animation_delay(&self) -> String {
        format!("{}s", self.index as f64 * ANIMATION_STEP_SECS)
    }

    pub fn field(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.value.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Info,
    Danger,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

/// Everything one panel container can show
#[derive(Debug, Clone, PartialEq)]
pub enum PanelContent {
    /// Nothing rendered yet
    Blank,
    Loading(String),
    Cards(Vec<Card>),
    Alert(Alert),
}

impl PanelContent {
    pub fn cards(&self) -> &[Card] {
        match self {
            Self::Cards(cards) => cards,
            _ => &[],
        }
    }

    pub fn alert(&self) -> Option<&Alert> {
        match self {
            Self::Alert(alert) => Some(alert),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading(_))
    }
}

/// Maps one entity to its card
pub trait CardTemplate {
    const KIND: PanelKind;

    fn card(&self, index: usize, display: &DisplayConfig) -> Card;
}

impl CardTemplate for NewsItem {
    const KIND: PanelKind = PanelKind::News;

    fn card(&self, index: usize, display: &DisplayConfig) -> Card {
        Card {
            index,
            style: CardStyle::News,
            badge: None,
            title: self.title.clone(),
            text: Some(self.summary.clone()),
            fields: Vec::new(),
            footer: Some(CardFooter {
                date: format_published(&self.published, &display.date_format),
                source: self.source.clone(),
            }),
            link: Some(self.link.clone()),
        }
    }
}

impl CardTemplate for DriverStanding {
    const KIND: PanelKind = PanelKind::Drivers;

    fn card(&self, index: usize, _display: &DisplayConfig) -> Card {
        Card {
            index,
            style: CardStyle::Driver,
            badge: Some(self.position.to_string()),
            title: self.name.clone(),
            text: None,
            fields: vec![
                CardField::new("Team", &self.constructor),
                CardField::new("Nationality", &self.nationality),
                CardField::new("Points", format_points(self.points)),
                CardField::new("Wins", self.wins.to_string()),
            ],
            footer: None,
            link: None,
        }
    }
}

impl CardTemplate for ConstructorStanding {
    const KIND: PanelKind = PanelKind::Constructors;

    fn card(&self, index: usize, _display: &DisplayConfig) -> Card {
        Card {
            index,
            style: CardStyle::Constructor,
            badge: Some(self.position.to_string()),
            title: self.name.clone(),
            text: None,
            fields: vec![
                CardField::new("Nationality", &self.nationality),
                CardField::new("Points", format_points(self.points)),
                CardField::new("Wins", self.wins.to_string()),
            ],
            footer: None,
            link: None,
        }
    }
}

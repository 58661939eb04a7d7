use anyhow::Result;

use crate::cards::{Card, CardStyle, PanelContent};
use crate::commands::load;
use crate::config::{Config, DisplayConfig};
use crate::data_provider::F1DataProvider;
use crate::formatting::{format_header, strip_html};
use crate::panel::PanelKind;

// Layout Constants
/// Width of position column
const POS_COL_WIDTH: usize = 3;

/// Width of driver/constructor name column
const NAME_COL_WIDTH: usize = 22;

/// Width of team column
const TEAM_COL_WIDTH: usize = 16;

/// Width of nationality column
const NATIONALITY_COL_WIDTH: usize = 13;

/// Width of points column
const POINTS_COL_WIDTH: usize = 6;

/// Width of wins column
const WINS_COL_WIDTH: usize = 4;

fn heading(kind: PanelKind) -> &'static str {
    match kind {
        PanelKind::News => "F1 News",
        PanelKind::Drivers => "Driver Standings",
        PanelKind::Constructors => "Constructor Standings",
    }
}

/// Plain-text rendering of a panel for the one-shot commands
pub fn format_panel(kind: PanelKind, content: &PanelContent, display: &DisplayConfig) -> String {
    let mut output = format_header(heading(kind), true, display);

    match content {
        PanelContent::Blank => {}
        PanelContent::Loading(message) => {
            output.push_str(message);
            output.push('\n');
        }
        PanelContent::Alert(alert) => {
            output.push_str(&alert.message);
            output.push('\n');
        }
        PanelContent::Cards(cards) => match kind {
            PanelKind::News => output.push_str(&format_news(cards, display)),
            PanelKind::Drivers | PanelKind::Constructors => {
                output.push_str(&format_standings_table(cards, display))
            }
        },
    }

    output
}

fn format_news(cards: &[Card], display: &DisplayConfig) -> String {
    let mut output = String::new();
    for card in cards {
        output.push('\n');
        output.push_str(&card.title);
        output.push('\n');
        if let Some(text) = card.text.as_deref().map(strip_html).filter(|t| !t.is_empty()) {
            output.push_str(&format!("  {}\n", text));
        }
        if let Some(footer) = &card.footer {
            match &footer.source {
                Some(source) => output.push_str(&format!(
                    "  {} {} {}\n",
                    footer.date, display.box_chars.bullet, source
                )),
                None => output.push_str(&format!("  {}\n", footer.date)),
            }
        }
        if let Some(link) = card.link.as_deref().filter(|l| !l.is_empty()) {
            output.push_str(&format!("  {}\n", link));
        }
    }
    output
}

/// Standings as a table, one row per card
pub fn format_standings_table(cards: &[Card], display: &DisplayConfig) -> String {
    let with_team = cards.iter().any(|c| c.style == CardStyle::Driver);
    let mut output = String::new();

    let mut header = format!("{:>pos$}  {:<name$} ", "Pos", "Name", pos = POS_COL_WIDTH, name = NAME_COL_WIDTH);
    if with_team {
        header.push_str(&format!("{:<team$} ", "Team", team = TEAM_COL_WIDTH));
    }
    header.push_str(&format!(
        "{:<nat$} {:>pts$} {:>wins$}",
        "Nationality",
        "PTS",
        "W",
        nat = NATIONALITY_COL_WIDTH,
        pts = POINTS_COL_WIDTH,
        wins = WINS_COL_WIDTH
    ));
    output.push_str(&header);
    output.push('\n');
    output.push_str(&display.box_chars.horizontal.repeat(header.chars().count()));
    output.push('\n');

    for card in cards {
        let mut row = format!(
            "{:>pos$}  {:<name$} ",
            card.badge.as_deref().unwrap_or(""),
            card.title,
            pos = POS_COL_WIDTH,
            name = NAME_COL_WIDTH
        );
        if with_team {
            row.push_str(&format!(
                "{:<team$} ",
                card.field("Team").unwrap_or(""),
                team = TEAM_COL_WIDTH
            ));
        }
        row.push_str(&format!(
            "{:<nat$} {:>pts$} {:>wins$}",
            card.field("Nationality").unwrap_or(""),
            card.field("Points").unwrap_or(""),
            card.field("Wins").unwrap_or(""),
            nat = NATIONALITY_COL_WIDTH,
            pts = POINTS_COL_WIDTH,
            wins = WINS_COL_WIDTH
        ));
        output.push_str(row.trim_end());
        output.push('\n');
    }

    output
}

pub async fn run(client: &dyn F1DataProvider, kind: PanelKind, config: &Config) -> Result<()> {
    let display = config.display();
    let loaded = load(client, kind, &display).await;
    print!("{}", format_panel(kind, &loaded.content, &display));
    loaded.check()
}

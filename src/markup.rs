//! HTML rendering of panel content, for embedding in the dashboard page.
//!
//! Produces the Bootstrap card markup the dashboard's stylesheet expects. Every
//! interpolated field is HTML-escaped; feed text is not trusted.

use crate::cards::{AlertKind, Card, CardStyle, PanelContent};
use crate::panel::PanelKind;

/// Escape text for use in element content and double-quoted attributes
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the full container element a panel owns
pub fn render_container(kind: PanelKind, content: &PanelContent) -> String {
    format!(
        "<div id=\"{}\" class=\"row\">\n{}</div>\n",
        kind.container_id(),
        render_content(content)
    )
}

/// Render only the inner content of a panel container
pub fn render_content(content: &PanelContent) -> String {
    match content {
        PanelContent::Blank => String::new(),
        PanelContent::Loading(message) => format!(
            concat!(
                "<div class=\"col-12 loading\">\n",
                "  <div class=\"spinner\"></div>\n",
                "  <p class=\"mt-3\">{}</p>\n",
                "</div>\n"
            ),
            escape_html(message)
        ),
        PanelContent::Alert(alert) => {
            let (class, icon) = match alert.kind {
                AlertKind::Info => ("alert-info", "fa-info-circle"),
                AlertKind::Danger => ("alert-danger", "fa-exclamation-triangle"),
            };
            format!(
                concat!(
                    "<div class=\"col-12\">\n",
                    "  <div class=\"alert {}\" role=\"alert\">\n",
                    "    <i class=\"fas {}\"></i> {}\n",
                    "  </div>\n",
                    "</div>\n"
                ),
                class,
                icon,
                escape_html(&alert.message)
            )
        }
        PanelContent::Cards(cards) => cards.iter().map(render_card).collect(),
    }
}

fn render_card(card: &Card) -> String {
    let body = match card.style {
        CardStyle::News => render_news_body(card),
        CardStyle::Driver | CardStyle::Constructor => render_standing_body(card),
    };
    format!(
        concat!(
            "<div class=\"col-md-6 col-lg-4 mb-4 fade-in\" style=\"animation-delay: {}\">\n",
            "  <div class=\"card h-100\">\n",
            "{}",
            "  </div>\n",
            "</div>\n"
        ),
        card.animation_delay(),
        body
    )
}

fn render_news_body(card: &Card) -> String {
    let mut html = String::new();
    html.push_str("    <div class=\"card-body d-flex flex-column\">\n");
    html.push_str(&format!(
        "      <h5 class=\"card-title\"><i class=\"fas fa-newspaper\"></i> {}</h5>\n",
        escape_html(&card.title)
    ));
    if let Some(text) = &card.text {
        html.push_str(&format!(
            "      <p class=\"card-text flex-grow-1\">{}</p>\n",
            escape_html(text)
        ));
    }
    html.push_str("      <div class=\"mt-auto\">\n");
    if let Some(footer) = &card.footer {
        let source = footer
            .source
            .as_ref()
            .map(|s| format!(" &bull; <i class=\"fas fa-globe\"></i> {}", escape_html(s)))
            .unwrap_or_default();
        html.push_str(&format!(
            "        <small class=\"text-muted\"><i class=\"fas fa-calendar\"></i> {}{}</small>\n",
            escape_html(&footer.date),
            source
        ));
    }
    if let Some(link) = &card.link {
        html.push_str("        <br>\n");
        html.push_str(&format!(
            concat!(
                "        <a href=\"{}\" target=\"_blank\" class=\"btn btn-sm btn-outline-primary mt-2\">",
                "<i class=\"fas fa-external-link-alt\"></i> Read More</a>\n"
            ),
            escape_html(link)
        ));
    }
    html.push_str("      </div>\n");
    html.push_str("    </div>\n");
    html
}

fn render_standing_body(card: &Card) -> String {
    let badge_bg = match card.style {
        CardStyle::Constructor => "bg-success",
        _ => "bg-primary",
    };
    let mut html = String::new();
    html.push_str("    <div class=\"card-body d-flex flex-column text-center\">\n");
    if let Some(badge) = &card.badge {
        html.push_str(&format!(
            concat!(
                "      <div class=\"position-absolute top-0 start-0 {} text-white rounded-circle ",
                "d-flex align-items-center justify-content-center\" ",
                "style=\"width: 40px; height: 40px; font-weight: bold;\">{}</div>\n"
            ),
            badge_bg,
            escape_html(badge)
        ));
    }
    html.push_str(&format!(
        "      <h5 class=\"card-title mt-3\">{}</h5>\n",
        escape_html(&card.title)
    ));
    let fields: Vec<String> = card
        .fields
        .iter()
        .map(|f| format!("<strong>{}:</strong> {}", f.label, escape_html(&f.value)))
        .collect();
    html.push_str(&format!(
        "      <p class=\"card-text\">{}</p>\n",
        fields.join("<br>")
    ));
    html.push_str("    </div>\n");
    html
}

//! Pure rendering of the display state into HTML. Nothing here mutates
//! state; the handlers own the page assembly.

use crate::normalize::{DisplayItem, SiteSummary};
use crate::state::{DisplayState, Snapshot};

pub const EMPTY_PROMPT: &str = "Please enter a valid site URL to analyze.";

const STYLES: &str = "\
.wrapper { padding: 16px; font-family: sans-serif; }
.input-container { margin-bottom: 16px; }
.overview { margin: 16px 0; }
.card-container { display: flex; flex-wrap: wrap; gap: 16px; }
.card { flex: 1 1 calc(25% - 16px); max-width: calc(25% - 16px); background: white; padding: 16px; box-shadow: 0 4px 8px rgba(0, 0, 0, 0.1); }
.card img { max-width: 100%; }
";

/// Render the current display state as an HTML fragment: an instructional
/// prompt when empty, the overview block plus card grid when populated.
pub fn render(state: &DisplayState) -> String {
    match state {
        DisplayState::Empty => format!("<p class=\"prompt\">{}</p>\n", EMPTY_PROMPT),
        DisplayState::Populated { summary, items } => {
            let mut out = String::with_capacity(512 + items.len() * 384);
            render_overview(&mut out, summary);
            out.push_str("<div class=\"card-container\">\n");
            for item in items {
                render_card(&mut out, item);
            }
            out.push_str("</div>\n");
            out
        }
    }
}

/// Full page: URL input form followed by the rendered state.
pub fn page(snapshot: &Snapshot) -> String {
    let mut out = String::with_capacity(1024);
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\" />\n");
    out.push_str("<title>Site Analyzer</title>\n<style>\n");
    out.push_str(STYLES);
    out.push_str("</style>\n</head>\n<body>\n<div class=\"wrapper\">\n");
    out.push_str("<form class=\"input-container\" method=\"post\" action=\"/analyze\">\n");
    out.push_str(&format!(
        "<input type=\"text\" name=\"url\" value=\"{}\" placeholder=\"Enter site URL\" />\n",
        escape(&snapshot.url)
    ));
    out.push_str("<button type=\"submit\">Analyze</button>\n</form>\n");
    out.push_str(&render(&snapshot.display));
    out.push_str("</div>\n</body>\n</html>\n");
    out
}

fn render_overview(out: &mut String, summary: &SiteSummary) {
    out.push_str("<div class=\"overview\">\n");
    out.push_str(&format!("<h2>{}</h2>\n", escape(&summary.name)));
    out.push_str(&format!("<p>{}</p>\n", escape(&summary.description)));
    out.push_str(&format!("<p>Theme: {}</p>\n", escape(&summary.theme)));
    out.push_str(&format!("<p>Created: {}</p>\n", escape(&summary.created)));
    out.push_str(&format!("<p>Last Updated: {}</p>\n", escape(&summary.last_updated)));
    if !summary.logo.is_empty() {
        out.push_str(&format!(
            "<img src=\"{}\" alt=\"{} logo\" />\n",
            escape(&summary.logo),
            escape(&summary.name)
        ));
    }
    out.push_str("</div>\n");
}

fn render_card(out: &mut String, item: &DisplayItem) {
    out.push_str("<div class=\"card\">\n");
    out.push_str(&format!(
        "<img src=\"{}\" alt=\"{}\" />\n",
        escape(&item.image),
        escape(&item.title)
    ));
    out.push_str(&format!("<h3>{}</h3>\n", escape(&item.title)));
    out.push_str(&format!("<p>{}</p>\n", escape(&item.description)));
    out.push_str(&format!("<p>Last Updated: {}</p>\n", escape(&item.last_updated)));
    out.push_str(&format!(
        "<a href=\"{}\" target=\"_blank\">View Content</a>\n",
        escape(&item.link)
    ));
    out.push_str(&format!(
        "<a href=\"{}\" target=\"_blank\">View Source</a>\n",
        escape(&item.source)
    ));
    out.push_str("</div>\n");
}

// The remote document is untrusted; everything interpolated into markup
// passes through here.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

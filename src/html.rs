//! HTML page rendering
//!
//! One self-contained page: background + table CSS, a sidebar district
//! selector and the profile blocks in view order.

use crate::images::ImageRef;
use crate::view::{Block, DisplayTable, ProfileView, PAGE_TITLE};

pub const SIDEBAR_HEADING: &str = "जिला चुनें";
pub const SELECT_LABEL: &str = "Choose District";

/// Render the profile page. `image_base` is the URL prefix image files are served under.
pub fn render_page(
    names: &[String],
    view: &ProfileView,
    background: Option<&ImageRef>,
    image_base: &str,
) -> String {
    let body: String = view
        .blocks
        .iter()
        .map(|block| render_block(block, image_base))
        .collect();

    render_shell(names, &view.district, background, image_base, &body)
}

/// Page shown when a selection has no matching district row.
pub fn render_not_found(
    names: &[String],
    selection: &str,
    background: Option<&ImageRef>,
    image_base: &str,
) -> String {
    let body = format!(
        "<h1 style='text-align:center'>{title}</h1>\n<p class=\"error\">District not found: {name}</p>\n",
        title = html_escape(PAGE_TITLE),
        name = html_escape(selection),
    );
    render_shell(names, selection, background, image_base, &body)
}

fn render_shell(
    names: &[String],
    selected: &str,
    background: Option<&ImageRef>,
    image_base: &str,
    body: &str,
) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="hi">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
    <aside class="sidebar">
        {sidebar}
    </aside>
    <main class="content">
{body}    </main>
</body>
</html>"#,
        title = html_escape(PAGE_TITLE),
        css = inline_css(background, image_base),
        sidebar = render_sidebar(names, selected),
        body = body,
    )
}

fn inline_css(background: Option<&ImageRef>, image_base: &str) -> String {
    let background_rule = background
        .map(|image| {
            format!(
                r#"body {{
            background-image: url("{}");
            background-size: cover;
            background-position: center;
            background-repeat: no-repeat;
        }}"#,
                image_url(image_base, image)
            )
        })
        .unwrap_or_default();

    format!(
        r#"
        {background_rule}
        body {{ display: flex; margin: 0; font-family: sans-serif; }}
        .sidebar {{ width: 16rem; padding: 1rem; background: rgba(240, 242, 246, 0.9); min-height: 100vh; }}
        .sidebar select {{ width: 100%; }}
        .content {{ flex: 1; padding: 1rem 3rem; }}
        .content img {{ width: 100%; }}
        .error {{ text-align: center; color: #b00020; }}
        table {{
            width:100%;
            border-collapse: collapse;
        }}
        th, td {{
            text-align:center !important;
            vertical-align:top;
            white-space:normal;
        }}
        "#
    )
}

fn render_sidebar(names: &[String], selected: &str) -> String {
    let options: String = names
        .iter()
        .map(|name| {
            let marker = if name == selected { " selected" } else { "" };
            format!(
                "<option value=\"{value}\"{marker}>{value}</option>",
                value = html_escape(name),
                marker = marker
            )
        })
        .collect();

    format!(
        r#"<h3 style='text-align:center'>{heading}</h3>
        <form method="get" action="">
            <label for="district">{label}</label>
            <select id="district" name="district" onchange="this.form.submit()">{options}</select>
            <noscript><button type="submit">OK</button></noscript>
        </form>"#,
        heading = html_escape(SIDEBAR_HEADING),
        label = SELECT_LABEL,
        options = options,
    )
}

fn render_block(block: &Block, image_base: &str) -> String {
    match block {
        Block::Title { text } => {
            format!("<h1 style='text-align:center'>{}</h1>\n", html_escape(text))
        }
        Block::Image { image } => format!(
            "<img src=\"{}\" alt=\"\">\n",
            html_escape(&image_url(image_base, image))
        ),
        Block::District { name, division } => format!(
            "<h2 style='text-align:center'>{}</h2>\n<h4 style='text-align:center'>{}</h4>\n",
            html_escape(name),
            html_escape(division)
        ),
        Block::Text { heading, body } => format!(
            "<h3 style='text-align:center'>{}</h3>\n<p style='text-align:center'>{}</p>\n",
            html_escape(heading),
            html_escape(body)
        ),
        Block::Table { heading, table } => format!(
            "<h3 style='text-align:center'>{}</h3>\n{}",
            html_escape(heading),
            render_table(table)
        ),
        Block::Notice { heading, message } => format!(
            "<h3 style='text-align:center'>{}</h3>\n<p style='text-align:center'>{}</p>\n",
            html_escape(heading),
            html_escape(message)
        ),
    }
}

/// DataFrame-style table: header row of column names, no index column.
fn render_table(table: &DisplayTable) -> String {
    let mut html = String::from("<table border=\"1\" class=\"dataframe\">\n  <thead>\n    <tr>");
    for header in &table.headers {
        html.push_str(&format!("<th>{}</th>", html_escape(header)));
    }
    html.push_str("</tr>\n  </thead>\n  <tbody>\n");

    for row in &table.rows {
        html.push_str("    <tr>");
        for value in row {
            html.push_str(&format!("<td>{}</td>", html_escape(value)));
        }
        html.push_str("</tr>\n");
    }

    html.push_str("  </tbody>\n</table>\n");
    html
}

fn image_url(image_base: &str, image: &ImageRef) -> String {
    format!("{}/{}", image_base.trim_end_matches('/'), image.file)
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

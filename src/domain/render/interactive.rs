use super::{esc, RenderContext};
use super::tree::{Entry, ResumeDocument, Section, SectionBody};

/// Renders the live, on-screen document: full page chrome, stylesheet link
/// and theme class. Layout only — visibility and date strings come from the
/// tree.
pub fn render_interactive(doc: &ResumeDocument, ctx: &RenderContext) -> String {
    let mut html = String::with_capacity(8 * 1024);

    html.push_str("<!DOCTYPE html>\n");
    html.push_str(&format!(
        "<html lang=\"en\" class=\"{}\">\n",
        ctx.theme.css_class()
    ));
    html.push_str("<head>\n<meta charset=\"UTF-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{} - Live Resume</title>\n", esc(&doc.header.full_name)));
    html.push_str("<link rel=\"stylesheet\" href=\"/static/resume.css\">\n");
    html.push_str("</head>\n<body>\n");

    html.push_str("<div class=\"top-bar\">\n");
    html.push_str("<a class=\"brand\" href=\"/\">Live Resume</a>\n");
    if let Some(href) = &ctx.export_href {
        html.push_str(&format!(
            "<a class=\"download\" href=\"{}\">Download</a>\n",
            esc(href)
        ));
    }
    html.push_str("</div>\n");

    html.push_str("<div class=\"resume-content\">\n");
    push_header(&mut html, doc);
    for section in &doc.sections {
        push_section(&mut html, section);
    }
    html.push_str("</div>\n");

    html.push_str("<footer>\n<p>This resume was created with <strong>Live Resume</strong></p>\n</footer>\n");
    html.push_str("</body>\n</html>\n");
    html
}

fn push_header(html: &mut String, doc: &ResumeDocument) {
    html.push_str("<header>\n");
    html.push_str(&format!("<h1>{}</h1>\n", esc(&doc.header.full_name)));
    if let Some(summary) = &doc.header.summary {
        html.push_str(&format!("<p class=\"summary\">{}</p>\n", esc(summary)));
    }
    html.push_str("<div class=\"contact-info\">\n");
    for contact in &doc.header.contacts {
        match &contact.href {
            Some(href) => html.push_str(&format!(
                "<a href=\"{}\">{}</a>\n",
                esc(href),
                esc(&contact.label)
            )),
            None => html.push_str(&format!("<span>{}</span>\n", esc(&contact.label))),
        }
    }
    html.push_str("</div>\n</header>\n");
}

fn push_section(html: &mut String, section: &Section) {
    html.push_str("<section>\n");
    html.push_str(&format!("<h2>{}</h2>\n", esc(section.title)));
    match &section.body {
        SectionBody::Entries(entries) => {
            for entry in entries {
                push_entry(html, entry);
            }
        }
        SectionBody::Tags(tags) => {
            html.push_str("<ul class=\"tags\">\n");
            for tag in tags {
                html.push_str(&format!("<li>{}</li>\n", esc(tag)));
            }
            html.push_str("</ul>\n");
        }
    }
    html.push_str("</section>\n");
}

fn push_entry(html: &mut String, entry: &Entry) {
    html.push_str("<article class=\"item\">\n<div class=\"item-header\">\n<div>\n");
    html.push_str(&format!("<h3>{}</h3>\n", esc(&entry.heading)));
    if let Some(subheading) = &entry.subheading {
        html.push_str(&format!("<p class=\"item-subheading\">{}</p>\n", esc(subheading)));
    }
    html.push_str("</div>\n");
    if !entry.date_range.is_empty() {
        html.push_str(&format!(
            "<div class=\"item-date\">{}</div>\n",
            esc(&entry.date_range)
        ));
    }
    html.push_str("</div>\n");
    if let Some(meta) = &entry.meta {
        html.push_str(&format!("<p class=\"item-meta\">{}</p>\n", esc(meta)));
    }
    if let Some(description) = &entry.description {
        html.push_str(&format!(
            "<p class=\"item-description\">{}</p>\n",
            esc(description)
        ));
    }
    if let Some(link) = &entry.link {
        html.push_str(&format!(
            "<a class=\"item-link\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>\n",
            esc(&link.href),
            link.label
        ));
    }
    html.push_str("</article>\n");
}

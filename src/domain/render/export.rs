use super::esc;
use super::tree::{Entry, ResumeDocument, Section, SectionBody};

/// Stylesheet embedded into the export document so it stays self-contained;
/// downstream tooling turns it into a fixed-layout artifact.
const EXPORT_STYLE: &str = r#"* { margin: 0; padding: 0; box-sizing: border-box; }
body {
  font-family: 'Arial', sans-serif;
  line-height: 1.6;
  color: #333;
  padding: 40px;
  max-width: 800px;
  margin: 0 auto;
}
header { border-bottom: 3px solid #0284c7; padding-bottom: 20px; margin-bottom: 30px; }
h1 { font-size: 32px; font-weight: bold; margin-bottom: 10px; color: #111; }
h2 {
  font-size: 20px; font-weight: bold;
  margin-top: 30px; margin-bottom: 15px; padding-bottom: 5px;
  border-bottom: 1px solid #ddd; color: #111;
}
h3 { font-size: 18px; font-weight: bold; margin-bottom: 5px; color: #111; }
.contact-info { margin-top: 15px; font-size: 12px; color: #666; }
.contact-info a, .contact-info span { color: #666; text-decoration: none; margin-right: 15px; }
.summary { margin-top: 15px; color: #555; line-height: 1.8; }
.section { margin-bottom: 25px; }
.item { margin-bottom: 20px; }
.item-header { display: flex; justify-content: space-between; margin-bottom: 5px; }
.item-subheading { font-weight: bold; color: #0284c7; }
.item-date { color: #666; font-size: 14px; }
.item-meta { color: #666; font-size: 12px; margin-bottom: 8px; }
.item-description { color: #555; line-height: 1.6; white-space: pre-line; }
.tags { display: flex; flex-wrap: wrap; gap: 8px; list-style: none; }
.tags li {
  background-color: #e0f2fe; color: #0369a1;
  padding: 5px 12px; border-radius: 4px;
  font-size: 12px; font-weight: 500;
}"#;

/// Renders the exportable document: the same tree as the interactive page,
/// flattened into standalone HTML with no external assets.
pub fn render_export(doc: &ResumeDocument) -> String {
    let mut html = String::with_capacity(8 * 1024);

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", esc(&doc.header.full_name)));
    html.push_str("<style>\n");
    html.push_str(EXPORT_STYLE);
    html.push_str("\n</style>\n</head>\n<body>\n");

    push_header(&mut html, doc);
    for section in &doc.sections {
        push_section(&mut html, section);
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn push_header(html: &mut String, doc: &ResumeDocument) {
    html.push_str("<header>\n");
    html.push_str(&format!("<h1>{}</h1>\n", esc(&doc.header.full_name)));
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
    html.push_str("</div>\n");
    if let Some(summary) = &doc.header.summary {
        html.push_str(&format!("<div class=\"summary\">{}</div>\n", esc(summary)));
    }
    html.push_str("</header>\n");
}

fn push_section(html: &mut String, section: &Section) {
    html.push_str("<div class=\"section\">\n");
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
    html.push_str("</div>\n");
}

fn push_entry(html: &mut String, entry: &Entry) {
    html.push_str("<div class=\"item\">\n<div class=\"item-header\">\n<div>\n");
    html.push_str(&format!("<h3>{}</h3>\n", esc(&entry.heading)));
    if let Some(subheading) = &entry.subheading {
        html.push_str(&format!("<div class=\"item-subheading\">{}</div>\n", esc(subheading)));
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
        html.push_str(&format!("<div class=\"item-meta\">{}</div>\n", esc(meta)));
    }
    if let Some(description) = &entry.description {
        html.push_str(&format!(
            "<div class=\"item-description\">{}</div>\n",
            esc(description)
        ));
    }
    if let Some(link) = &entry.link {
        html.push_str(&format!(
            "<a href=\"{}\">{}</a>\n",
            esc(&link.href),
            link.label
        ));
    }
    html.push_str("</div>\n");
}

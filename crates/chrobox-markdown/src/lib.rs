//! Markdown renderer for blog post bodies.
//!
//! The detail page hands a raw markdown string to [`render_html`] and drops
//! the result into the DOM. Post bodies are authored prose with headings,
//! lists, tables, and emphasis; there is no frontmatter and no code to
//! highlight. Rendering never fails: an empty body renders to an empty
//! string.

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

/// Render a markdown document to an HTML fragment.
pub fn render_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options);
    let mut html = String::new();

    for event in parser {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                let lang_class = match kind {
                    CodeBlockKind::Fenced(lang) if !lang.is_empty() => {
                        format!(" class=\"language-{}\"", html_escape(&lang))
                    }
                    _ => String::new(),
                };
                html.push_str(&format!("<pre><code{lang_class}>"));
            }
            Event::End(TagEnd::CodeBlock) => {
                html.push_str("</code></pre>\n");
            }
            Event::Text(text) => {
                html.push_str(&html_escape(&text));
            }
            Event::Code(code) => {
                html.push_str(&format!("<code>{}</code>", html_escape(&code)));
            }
            Event::SoftBreak => html.push('\n'),
            Event::HardBreak => html.push_str("<br />\n"),
            Event::Rule => html.push_str("<hr />\n"),
            Event::Start(tag) => html.push_str(&tag_to_html_start(&tag)),
            Event::End(tag) => html.push_str(&tag_to_html_end(&tag)),
            // bodies are authored prose rendered via inner_html, so raw
            // HTML is inert rather than live markup
            Event::Html(raw) | Event::InlineHtml(raw) => html.push_str(&html_escape(&raw)),
            Event::FootnoteReference(_) | Event::TaskListMarker(_) => {}
            Event::InlineMath(math) => {
                html.push_str(&format!("<span class=\"math\">{}</span>", html_escape(&math)));
            }
            Event::DisplayMath(math) => {
                html.push_str(&format!("<div class=\"math\">{}</div>", html_escape(&math)));
            }
        }
    }

    html
}

/// Convert a pulldown-cmark tag to an HTML opening tag.
fn tag_to_html_start(tag: &Tag) -> String {
    match tag {
        Tag::Paragraph => "<p>".to_string(),
        Tag::Heading { level, .. } => format!("<h{}>", *level as u8),
        Tag::BlockQuote(_) => "<blockquote>".to_string(),
        Tag::CodeBlock(_) => String::new(),
        Tag::List(Some(start)) => format!("<ol start=\"{start}\">"),
        Tag::List(None) => "<ul>".to_string(),
        Tag::Item => "<li>".to_string(),
        Tag::Table(_) => "<table>".to_string(),
        Tag::TableHead => "<thead><tr>".to_string(),
        Tag::TableRow => "<tr>".to_string(),
        Tag::TableCell => "<td>".to_string(),
        Tag::Emphasis => "<em>".to_string(),
        Tag::Strong => "<strong>".to_string(),
        Tag::Strikethrough => "<del>".to_string(),
        Tag::Link { dest_url, title, .. } => {
            let title_attr = if title.is_empty() {
                String::new()
            } else {
                format!(" title=\"{}\"", html_escape(title))
            };
            format!("<a href=\"{}\"{title_attr}>", html_escape(dest_url))
        }
        Tag::Image { dest_url, title, .. } => {
            let title_attr = if title.is_empty() {
                String::new()
            } else {
                format!(" title=\"{}\"", html_escape(title))
            };
            format!("<img src=\"{}\"{title_attr}", html_escape(dest_url))
        }
        Tag::FootnoteDefinition(_)
        | Tag::HtmlBlock
        | Tag::MetadataBlock(_)
        | Tag::DefinitionList
        | Tag::DefinitionListTitle
        | Tag::DefinitionListDefinition => String::new(),
        Tag::Superscript => "<sup>".to_string(),
        Tag::Subscript => "<sub>".to_string(),
    }
}

/// Convert a pulldown-cmark tag end to an HTML closing tag.
fn tag_to_html_end(tag: &TagEnd) -> String {
    match tag {
        TagEnd::Paragraph => "</p>\n".to_string(),
        TagEnd::Heading(level) => format!("</h{}>\n", *level as u8),
        TagEnd::BlockQuote(_) => "</blockquote>\n".to_string(),
        TagEnd::CodeBlock => String::new(),
        TagEnd::List(ordered) => {
            if *ordered {
                "</ol>\n".to_string()
            } else {
                "</ul>\n".to_string()
            }
        }
        TagEnd::Item => "</li>\n".to_string(),
        TagEnd::Table => "</table>\n".to_string(),
        TagEnd::TableHead => "</tr></thead>\n".to_string(),
        TagEnd::TableRow => "</tr>\n".to_string(),
        TagEnd::TableCell => "</td>".to_string(),
        TagEnd::Emphasis => "</em>".to_string(),
        TagEnd::Strong => "</strong>".to_string(),
        TagEnd::Strikethrough => "</del>".to_string(),
        TagEnd::Link => "</a>".to_string(),
        TagEnd::Image => " />".to_string(),
        TagEnd::FootnoteDefinition
        | TagEnd::HtmlBlock
        | TagEnd::MetadataBlock(_)
        | TagEnd::DefinitionList
        | TagEnd::DefinitionListTitle
        | TagEnd::DefinitionListDefinition => String::new(),
        TagEnd::Superscript => "</sup>".to_string(),
        TagEnd::Subscript => "</sub>".to_string(),
    }
}

/// Escape HTML special characters.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_and_paragraphs() {
        let html = render_html("# Title\n\nSome body text.");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<p>Some body text.</p>"));
    }

    #[test]
    fn test_emphasis() {
        let html = render_html("This is **bold** and *italic*.");
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<em>italic</em>"));
    }

    #[test]
    fn test_lists() {
        let html = render_html("1. first\n2. second\n\n- bullet\n");
        assert!(html.contains("<ol start=\"1\">"));
        assert!(html.contains("<ul>"));
        assert!(html.contains("<li>first</li>"));
        assert!(html.contains("<li>bullet</li>"));
    }

    #[test]
    fn test_tables() {
        let html = render_html("| Aspect | Pomodoro |\n|--------|----------|\n| Duration | 25 min |");
        assert!(html.contains("<table>"));
        assert!(html.contains("<thead>"));
        assert!(html.contains("<td>Duration</td>"));
    }

    #[test]
    fn test_text_is_escaped() {
        let html = render_html("Use <marquee> & \"quotes\"");
        assert!(html.contains("&lt;marquee&gt;"));
        assert!(html.contains("&amp;"));
        assert!(html.contains("&quot;quotes&quot;"));
    }

    #[test]
    fn test_raw_html_is_inert() {
        let inline = render_html("Hello <b>world</b>");
        assert!(inline.contains("&lt;b&gt;world&lt;/b&gt;"));
        assert!(!inline.contains("<b>"));

        let block = render_html("<div class=\"x\">\nblock\n</div>\n");
        assert!(block.contains("&lt;div class=&quot;x&quot;&gt;"));
        assert!(!block.contains("<div"));
    }

    #[test]
    fn test_links() {
        let html = render_html("[Chrobox](https://chrobox.app)");
        assert!(html.contains("<a href=\"https://chrobox.app\">Chrobox</a>"));
    }

    #[test]
    fn test_empty_body_renders_empty() {
        assert_eq!(render_html(""), "");
    }

    #[test]
    fn test_blockquote() {
        let html = render_html("> Work expands to fill the time available.");
        assert!(html.contains("<blockquote>"));
        assert!(html.contains("Work expands"));
    }
}

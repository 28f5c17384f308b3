use std::collections::HashSet;

use pulldown_cmark::{html, Event, Options, Parser, Tag, TagEnd};

/// Render a post body to HTML.
///
/// Tables, fenced code, footnotes and strikethrough are enabled, and every
/// heading gets an anchor id. Raw HTML passes through untouched.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_HEADING_ATTRIBUTES);

    let mut events: Vec<Event<'_>> = Parser::new_ext(markdown, options).collect();
    assign_heading_ids(&mut events);

    let mut html_output = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut html_output, events.into_iter());
    html_output
}

/// Give each heading without an explicit `{#id}` an id built from its text.
fn assign_heading_ids(events: &mut [Event<'_>]) {
    let mut used: HashSet<String> = events
        .iter()
        .filter_map(|e| match e {
            Event::Start(Tag::Heading { id: Some(id), .. }) => Some(id.to_string()),
            _ => None,
        })
        .collect();

    let mut i = 0;
    while i < events.len() {
        if matches!(events[i], Event::Start(Tag::Heading { id: None, .. })) {
            let mut text = String::new();
            let mut end = i + 1;
            while end < events.len() {
                match &events[end] {
                    Event::End(TagEnd::Heading(_)) => break,
                    Event::Text(t) | Event::Code(t) => text.push_str(t),
                    _ => {}
                }
                end += 1;
            }

            let anchor = unique_anchor(&text, &mut used);
            if let Event::Start(Tag::Heading { id, .. }) = &mut events[i] {
                *id = Some(anchor.into());
            }
            i = end;
        }
        i += 1;
    }
}

/// Slug for a heading id. Underscores are kept; each run of other
/// separators becomes a single `-`.
fn heading_slug(text: &str) -> String {
    text.split('_')
        .map(slug::slugify)
        .collect::<Vec<_>>()
        .join("_")
}

fn unique_anchor(text: &str, used: &mut HashSet<String>) -> String {
    let mut base = heading_slug(text);
    if base.is_empty() {
        base = "section".to_string();
    }
    let mut candidate = base.clone();
    let mut n = 1;
    while used.contains(&candidate) {
        candidate = format!("{base}_{n}");
        n += 1;
    }
    used.insert(candidate.clone());
    candidate
}

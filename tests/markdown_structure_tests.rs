//! Checks that converted bodies parse into the intended Markdown structure

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag};
use tiddly2md::domain::transform;

fn events(markdown: &str) -> Vec<Event<'_>> {
    Parser::new_ext(markdown, Options::ENABLE_FOOTNOTES).collect()
}

#[test]
fn test_headers_become_headings() {
    let levels: Vec<HeadingLevel> = events(&transform(Some("!Title\n!!Sub")))
        .into_iter()
        .filter_map(|event| match event {
            Event::Start(Tag::Heading { level, .. }) => Some(level),
            _ => None,
        })
        .collect();

    assert_eq!(levels, vec![HeadingLevel::H1, HeadingLevel::H2]);
}

#[test]
fn test_ordered_list_numbered_by_renderer() {
    let markdown = transform(Some("#one\n#two"));
    let events = events(&markdown);

    let lists: Vec<Option<u64>> = events
        .iter()
        .filter_map(|event| match event {
            Event::Start(Tag::List(start)) => Some(*start),
            _ => None,
        })
        .collect();
    let items = events
        .iter()
        .filter(|event| matches!(event, Event::Start(Tag::Item)))
        .count();

    assert_eq!(lists, vec![Some(0)]);
    assert_eq!(items, 2);
}

#[test]
fn test_nested_unordered_list() {
    let lists: Vec<Option<u64>> = events(&transform(Some("*a\n**b")))
        .into_iter()
        .filter_map(|event| match event {
            Event::Start(Tag::List(start)) => Some(start),
            _ => None,
        })
        .collect();

    assert_eq!(lists, vec![None, None]);
}

#[test]
fn test_piped_link() {
    let markdown = transform(Some("[[Docs|https://example.org]]"));
    let events = events(&markdown);

    assert!(events.iter().any(|event| matches!(
        event,
        Event::Start(Tag::Link { dest_url, .. }) if &**dest_url == "https://example.org"
    )));
}

#[test]
fn test_footnote_reference_and_definition() {
    let markdown = transform(Some("!Notes ```see datasheet```"));
    let events = events(&markdown);

    assert!(events
        .iter()
        .any(|event| matches!(event, Event::FootnoteReference(name) if &**name == "1")));
    assert!(events.iter().any(|event| matches!(
        event,
        Event::Start(Tag::FootnoteDefinition(name)) if &**name == "1"
    )));
}

use svgtree::{find_by_content, parse_str};

type TestResult = Result<(), Box<dyn std::error::Error>>;

const DRAWING: &str = r#"<svg id="root">
  <defs>
    <linearGradient id="grad"><stop offset="0"/><stop offset="1"/></linearGradient>
  </defs>
  <g id="layer1">
    <rect id="r1" width="10"/>
    <circle id="c1" r="4"/>
    <text id="label">Hello World</text>
  </g>
  <g id="layer2">
    <circle id="c2" r="2"/>
    <text>hello AGAIN</text>
    <text>goodbye</text>
  </g>
</svg>"#;

#[test]
fn test_find_by_id() -> TestResult {
    let root = parse_str(r#"<svg id="root"><rect id="r1"/><circle id="c1"/></svg>"#)?;

    let rect = root.find_by_id("r1");
    assert_eq!(rect.map(|e| e.name.as_str()), Some("rect"));
    assert!(root.find_by_id("root").is_none());
    assert!(root.find_by_id("nope").is_none());
    Ok(())
}

#[test]
fn test_find_by_id_searches_nested_subtrees() -> TestResult {
    let root = parse_str(DRAWING)?;

    assert_eq!(
        root.find_by_id("grad").map(|e| e.name.as_str()),
        Some("linearGradient")
    );
    assert_eq!(
        root.find_by_id("c2").and_then(|e| e.attribute("r")),
        Some("2")
    );
    Ok(())
}

#[test]
fn test_find_all() -> TestResult {
    let root = parse_str(r#"<svg id="root"><rect id="r1"/><circle id="c1"/></svg>"#)?;
    let circles = root.find_all("circle");
    assert_eq!(circles.len(), 1);
    assert_eq!(circles.first().and_then(|c| c.id()), Some("c1"));

    let drawing = parse_str(DRAWING)?;
    let ids: Vec<&str> = drawing
        .find_all("circle")
        .into_iter()
        .filter_map(|c| c.id())
        .collect();
    assert_eq!(ids, ["c1", "c2"]);
    assert_eq!(drawing.find_all("stop").len(), 2);
    assert!(drawing.find_all("svg").is_empty());
    Ok(())
}

#[test]
fn test_find_by_content() -> TestResult {
    let root = parse_str("<g><text>Hello World</text></g>")?;
    let found = root.find_by_content("hello");
    assert_eq!(found.len(), 1);
    assert_eq!(found.first().map(|e| e.name.as_str()), Some("text"));

    let drawing = parse_str(DRAWING)?;
    let contents: Vec<&str> = drawing
        .find_by_content("HELLO")
        .into_iter()
        .map(|e| e.content.as_str())
        .collect();
    assert_eq!(contents, ["Hello World", "hello AGAIN"]);
    assert!(drawing.find_by_content("missing").is_empty());
    Ok(())
}

#[test]
fn test_find_by_content_on_missing_subtree() -> TestResult {
    let drawing = parse_str(DRAWING)?;
    assert!(find_by_content(drawing.find_by_id("nope"), "hello").is_empty());
    assert_eq!(find_by_content(drawing.find_by_id("layer2"), "bye").len(), 1);
    Ok(())
}

#[test]
fn test_descendants_and_parent_of() -> TestResult {
    let drawing = parse_str(DRAWING)?;
    assert_eq!(drawing.descendants().count(), 12);

    let label = drawing.find_by_id("label");
    let parent = label.and_then(|l| drawing.parent_of(l));
    assert_eq!(parent.and_then(|p| p.id()), Some("layer1"));
    Ok(())
}

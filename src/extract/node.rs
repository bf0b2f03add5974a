//! Minimal tree capability the extractors are written against.
//!
//! Extraction never touches a parser's node type directly. Anything that can
//! report a tag name, an `id`, a text payload, and its element children can be
//! scraped; `scraper::ElementRef` is the implementation used in practice.

use scraper::{ElementRef, Node};

/// Read-only handle to an element in a parsed document.
pub trait TreeNode: Copy {
    /// Lowercase element name (`tr`, `td`, `div`, ...).
    fn tag_name(&self) -> &str;

    /// Value of the `id` attribute, if present.
    fn identifier(&self) -> Option<&str>;

    /// The node's string payload.
    ///
    /// Only a node whose content is exactly one text run has a payload. The run
    /// may be wrapped in a chain of single-child elements, so `<td><b>Name</b></td>`
    /// yields `"Name"`. Mixed or empty content yields `None`.
    fn text_payload(&self) -> Option<String>;

    /// Element children in document order. Text and comment nodes are skipped.
    fn element_children(&self) -> Vec<Self>;

    fn is_tag(&self, name: &str) -> bool {
        self.tag_name().eq_ignore_ascii_case(name)
    }

    /// Direct element children accepted by `predicate`.
    fn children_matching<P>(&self, predicate: P) -> Vec<Self>
    where
        P: Fn(&Self) -> bool,
    {
        self.element_children()
            .into_iter()
            .filter(|child| predicate(child))
            .collect()
    }

    /// All element descendants accepted by `predicate`, in document order.
    /// The node itself is not considered.
    fn descendants_matching<P>(&self, predicate: P) -> Vec<Self>
    where
        P: Fn(&Self) -> bool,
    {
        let mut found = Vec::new();

        // Explicit stack so arbitrarily deep documents cannot overflow.
        let mut stack = self.element_children();
        stack.reverse();
        while let Some(node) = stack.pop() {
            if predicate(&node) {
                found.push(node);
            }
            let mut children = node.element_children();
            children.reverse();
            stack.extend(children);
        }

        found
    }

    /// First descendant with the given tag, in document order.
    fn first_descendant(&self, tag: &str) -> Option<Self> {
        let mut stack = self.element_children();
        stack.reverse();
        while let Some(node) = stack.pop() {
            if node.is_tag(tag) {
                return Some(node);
            }
            let mut children = node.element_children();
            children.reverse();
            stack.extend(children);
        }
        None
    }
}

impl<'a> TreeNode for ElementRef<'a> {
    fn tag_name(&self) -> &str {
        self.value().name()
    }

    fn identifier(&self) -> Option<&str> {
        self.value().id()
    }

    fn text_payload(&self) -> Option<String> {
        string_payload(*self).map(str::to_owned)
    }

    fn element_children(&self) -> Vec<Self> {
        self.children().filter_map(ElementRef::wrap).collect()
    }
}

fn string_payload(element: ElementRef<'_>) -> Option<&str> {
    let mut children = element.children();
    let only = children.next()?;
    if children.next().is_some() {
        return None;
    }

    match only.value() {
        Node::Text(text) => Some(&**text),
        _ => ElementRef::wrap(only).and_then(string_payload),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn cells(html: &str) -> Vec<Option<String>> {
        let document = Html::parse_document(html);
        document
            .root_element()
            .descendants_matching(|n| n.is_tag("td"))
            .iter()
            .map(|td| td.text_payload())
            .collect()
    }

    #[test]
    fn text_payload_single_run() {
        let payloads = cells("<table><tr><td> Name: </td></tr></table>");
        assert_eq!(payloads, vec![Some(" Name: ".to_string())]);
    }

    #[test]
    fn text_payload_through_wrapper_elements() {
        let payloads = cells("<table><tr><td><span><b>Address</b></span></td></tr></table>");
        assert_eq!(payloads, vec![Some("Address".to_string())]);
    }

    #[test]
    fn text_payload_none_for_mixed_or_empty() {
        let payloads = cells("<table><tr><td>one<br>two</td><td></td></tr></table>");
        assert_eq!(payloads, vec![None, None]);
    }

    #[test]
    fn descendants_in_document_order() {
        let document = Html::parse_document(
            r#"<div id="a"><div id="b"><div id="c"></div></div><div id="d"></div></div>"#,
        );
        let ids: Vec<_> = document
            .root_element()
            .descendants_matching(|n| n.is_tag("div"))
            .iter()
            .filter_map(|n| n.identifier().map(str::to_string))
            .collect();
        assert_eq!(ids, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn children_matching_is_not_recursive() {
        let document = Html::parse_document(
            "<table><tbody><tr><td><table><tr><td>x</td></tr></table></td></tr></tbody></table>",
        );
        let outer_row = document
            .root_element()
            .first_descendant("tr")
            .expect("row");
        assert_eq!(outer_row.children_matching(|n| n.is_tag("td")).len(), 1);
        assert_eq!(outer_row.descendants_matching(|n| n.is_tag("td")).len(), 2);
    }
}

//! Live filtering of headings and cards with highlighted matches.

use std::cell::RefCell;
use std::rc::Rc;

use docsite_core::{ItemView, SearchIndex, SearchOutcome, Segment};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement, Node};

use crate::dom::{self, AppResult};
use crate::site::SiteHandle;

struct SearchBinding {
    index: SearchIndex,
    targets: Vec<HtmlElement>,
    /// Deep copies of each target taken before the first query.
    snapshots: Vec<Node>,
    highlight_class: String,
}

/// Filter targets as the user types into the search field.
pub fn install(site: &SiteHandle) -> AppResult<()> {
    let document = dom::document()?;
    let config = &site.config.search;
    let Some(input) = dom::query(&document, &config.input)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    else {
        tracing::debug!("No search field");
        return Ok(());
    };

    let targets = dom::query_all_html(&document, &config.targets);
    let originals = targets
        .iter()
        .map(|t| t.text_content().unwrap_or_default())
        .collect();
    let snapshots = targets
        .iter()
        .map(|t| t.clone_node_with_deep(true))
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!("Search over {} items", targets.len());

    let binding = Rc::new(RefCell::new(SearchBinding {
        index: SearchIndex::new(originals, config.min_query_chars),
        targets,
        snapshots,
        highlight_class: config.highlight_class.clone(),
    }));

    let field = input.clone();
    dom::listen(&input, "input", move |_| {
        let mut binding = binding.borrow_mut();
        let views = match binding.index.apply(&field.value()) {
            SearchOutcome::Unchanged => return,
            SearchOutcome::Reset(views) | SearchOutcome::Filtered(views) => views,
        };
        let items = binding.targets.iter().zip(&binding.snapshots).zip(&views);
        for ((target, snapshot), view) in items {
            if let Err(e) = render(&document, target, snapshot, view, &binding.highlight_class) {
                tracing::warn!("Search render failed: {e}");
            }
        }
    })?;
    Ok(())
}

fn render(
    document: &Document,
    target: &HtmlElement,
    snapshot: &Node,
    view: &ItemView,
    highlight_class: &str,
) -> AppResult<()> {
    if view.visible {
        dom::clear_style(target, "display");
    } else {
        dom::set_style(target, "display", "none");
    }

    if !view.has_marks() {
        return restore(target, snapshot);
    }

    target.set_text_content(None);
    for segment in &view.segments {
        match segment {
            Segment::Text(text) => {
                target.append_child(&document.create_text_node(text))?;
            }
            Segment::Mark(text) => {
                let mark = document.create_element("mark")?;
                mark.set_class_name(highlight_class);
                mark.set_text_content(Some(text));
                target.append_child(&mark)?;
            }
        }
    }
    Ok(())
}

/// Put back the markup the target had before it was first highlighted.
fn restore(target: &HtmlElement, snapshot: &Node) -> AppResult<()> {
    target.set_text_content(None);
    let children = snapshot.child_nodes();
    for i in 0..children.length() {
        if let Some(child) = children.item(i) {
            target.append_child(&child.clone_node_with_deep(true)?)?;
        }
    }
    Ok(())
}

//! Step-by-step execution of a parsed navigational path against live pages.
//!
//! Steps run strictly in path order. Each step's offset and predicate
//! semantics depend on the result of the previous step, so there is no
//! overlap between steps: the walk is one synchronous path of control.

use crate::browser::Page;
use crate::error::EngineError;
use trawl_axis::AxisToken;
use trawl_value::{PageNode, PathValue};

/// Walks a sequence of axis tokens from `page`, performing each step's
/// action, and returns the page reached at the end of navigation.
pub fn walk<P: Page>(page: P, steps: &[AxisToken]) -> Result<P, EngineError> {
    let mut current = page;
    // The initial context is the document itself: position 1 of 1.
    let mut context_position = 1;
    let mut context_size = 1;
    for step in steps {
        let (next, position, size) = apply_step(&current, step, context_position, context_size)?;
        current = next;
        context_position = position;
        context_size = size;
    }
    Ok(current)
}

fn apply_step<P: Page>(
    page: &P,
    step: &AxisToken,
    context_position: usize,
    context_size: usize,
) -> Result<(P, usize, usize), EngineError> {
    let context = page.document();
    let items = page.evaluate(&selector(step), &context)?;
    let value = PathValue::from_items_with_context(items, context_position, context_size);
    let candidates = value.as_node_set()?;

    let matched: Vec<_> = candidates
        .iter()
        .filter(|r| predicates_hold(step, r.node()))
        .collect();
    // Offsets are 1-based; the parser guarantees offset >= 1.
    let target = step
        .offset
        .checked_sub(1)
        .and_then(|i| matched.get(i))
        .ok_or_else(|| {
            EngineError::BadData(format!(
                "no node at offset {} for step {}",
                step.offset, step
            ))
        })?;

    log::debug!(
        "step {} matched {} node(s), acting on offset {}",
        step,
        matched.len(),
        step.offset
    );
    let next = page.perform(step.kind, target.node())?;
    Ok((next, step.offset, matched.len()))
}

/// The residual selector for the step's node test, delegated to the page's
/// query surface. Predicates are checked engine-side against the handles.
fn selector(step: &AxisToken) -> String {
    format!("//{}", step.node_test)
}

fn predicates_hold<N: PageNode>(step: &AxisToken, node: &N) -> bool {
    step.predicates
        .iter()
        .all(|(name, value)| node.attribute(name).as_deref() == Some(value))
}

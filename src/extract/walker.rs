use crate::extract::item::ShortItem;
use crate::extract::shapes::{classic_item, modern_item, CLASSIC_KEY, MODERN_KEY};
use serde_json::Value;

/// Collects every recognizable entry in `tree`
///
/// The walk is depth-first and pre-order: a node's own record comes before
/// anything found beneath it, object members are visited in document order
/// and array elements by index. Children of a matched node are still
/// visited, so nested entries are reported too.
pub fn collect_shorts(tree: &Value, origin: &str) -> Vec<ShortItem> {
    let mut results = Vec::new();
    // Explicit stack keeps arbitrarily deep trees off the call stack
    let mut pending = vec![tree];

    while let Some(value) = pending.pop() {
        match value {
            Value::Object(map) => {
                if let Some(item) = map.get(MODERN_KEY).and_then(|node| modern_item(node, origin)) {
                    results.push(item);
                }
                if let Some(item) = map.get(CLASSIC_KEY).and_then(|node| classic_item(node, origin)) {
                    results.push(item);
                }

                pending.extend(map.values().rev());
            }
            Value::Array(items) => pending.extend(items.iter().rev()),
            _ => {}
        }
    }

    results
}

/// Drops a tree without recursing
///
/// `Value`'s own destructor recurses once per nesting level, which can
/// exhaust the stack for trees parsed without a depth limit.
pub fn release_tree(tree: Value) {
    let mut pending = vec![tree];

    while let Some(value) = pending.pop() {
        match value {
            Value::Object(map) => pending.extend(map.into_iter().map(|(_, child)| child)),
            Value::Array(items) => pending.extend(items),
            _ => {}
        }
    }
}

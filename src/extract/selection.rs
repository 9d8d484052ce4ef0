//! Selection resolution
//!
//! Normalizes the raw selection tokens coming from the viewer UI into a set
//! of node positions within the source graph.

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::error::{ExtractError, ExtractResult};
use crate::proto::GraphProto;

/// Prefix the viewer UI attaches to node identifiers
pub const UI_NODE_PREFIX: &str = "node-name-";

/// Resolve raw selection tokens into node positions
///
/// Null and empty tokens are discarded, the UI prefix is stripped, and the
/// surviving candidates are matched against node names. The result preserves
/// the source document's node order, not the token order; duplicate tokens
/// collapse naturally.
///
/// Fails with [`ExtractError::SelectionEmpty`] when no token resolves to an
/// existing node.
pub fn resolve_selection(graph: &GraphProto, tokens: &[Option<String>]) -> ExtractResult<Vec<usize>> {
    let mut candidates: FxHashSet<&str> = FxHashSet::default();
    for token in tokens.iter().flatten() {
        if token.is_empty() {
            continue;
        }
        candidates.insert(token.strip_prefix(UI_NODE_PREFIX).unwrap_or(token));
    }

    let selected: Vec<usize> = graph
        .node
        .iter()
        .enumerate()
        .filter(|(_, node)| candidates.contains(node.name.as_str()))
        .map(|(pos, _)| pos)
        .collect();

    if selected.is_empty() {
        return Err(ExtractError::SelectionEmpty);
    }

    debug!(
        tokens = tokens.len(),
        resolved = selected.len(),
        "resolved node selection"
    );

    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::extensions::make_node;

    fn make_test_graph() -> GraphProto {
        GraphProto {
            node: vec![
                make_node("Conv", &["X", "W"], &["conv_out"], "conv_0"),
                make_node("Relu", &["conv_out"], &["relu_out"], "relu_0"),
                make_node("Add", &["relu_out", "B"], &["Y"], "add_0"),
            ],
            ..Default::default()
        }
    }

    fn tokens(names: &[&str]) -> Vec<Option<String>> {
        names.iter().map(|s| Some(s.to_string())).collect()
    }

    #[test]
    fn test_resolve_plain_names() {
        let graph = make_test_graph();
        let selected = resolve_selection(&graph, &tokens(&["relu_0", "conv_0"])).unwrap();

        // document order, not token order
        assert_eq!(selected, vec![0, 1]);
    }

    #[test]
    fn test_resolve_strips_ui_prefix() {
        let graph = make_test_graph();
        let selected =
            resolve_selection(&graph, &tokens(&["node-name-add_0", "node-name-relu_0"])).unwrap();

        assert_eq!(selected, vec![1, 2]);
    }

    #[test]
    fn test_resolve_discards_null_and_empty_tokens() {
        let graph = make_test_graph();
        let tokens = vec![None, Some(String::new()), Some("conv_0".to_string())];
        let selected = resolve_selection(&graph, &tokens).unwrap();

        assert_eq!(selected, vec![0]);
    }

    #[test]
    fn test_resolve_tolerates_duplicates_and_unknowns() {
        let graph = make_test_graph();
        let selected =
            resolve_selection(&graph, &tokens(&["conv_0", "conv_0", "ghost_9"])).unwrap();

        assert_eq!(selected, vec![0]);
    }

    #[test]
    fn test_empty_selection_is_rejected() {
        let graph = make_test_graph();

        let err = resolve_selection(&graph, &[]).unwrap_err();
        assert!(matches!(err, ExtractError::SelectionEmpty));

        let err = resolve_selection(&graph, &tokens(&["nope"])).unwrap_err();
        assert!(matches!(err, ExtractError::SelectionEmpty));
    }
}

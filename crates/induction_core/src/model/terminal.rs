use std::collections::BTreeMap;

/// Canonical terminal-id-to-index map: every terminal referenced anywhere (trip
/// endpoints, shunting rows) gets a contiguous index, assigned in lexicographic
/// order of id so the mapping is deterministic across runs.
#[derive(Debug, Clone, Default)]
pub struct TerminalIndex {
    id_to_idx: BTreeMap<String, usize>,
    idx_to_id: Vec<String>,
}

impl TerminalIndex {
    pub fn build<I: IntoIterator<Item = String>>(ids: I) -> Self {
        let mut unique: BTreeMap<String, usize> = BTreeMap::new();
        for id in ids {
            unique.entry(id).or_insert(0);
        }
        let idx_to_id: Vec<String> = unique.keys().cloned().collect();
        let id_to_idx = idx_to_id
            .iter()
            .enumerate()
            .map(|(i, id)| (id.clone(), i))
            .collect();
        Self {
            id_to_idx,
            idx_to_id,
        }
    }

    pub fn len(&self) -> usize {
        self.idx_to_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.idx_to_id.is_empty()
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.id_to_idx.get(id).copied()
    }

    pub fn id_at(&self, idx: usize) -> Option<&str> {
        self.idx_to_id.get(idx).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assigns_contiguous_lexicographic_indices() {
        let idx = TerminalIndex::build(
            ["YARD".to_string(), "DEPOT".to_string(), "YARD".to_string()],
        );
        assert_eq!(idx.len(), 2);
        assert_eq!(idx.index_of("DEPOT"), Some(0));
        assert_eq!(idx.index_of("YARD"), Some(1));
        assert_eq!(idx.id_at(0), Some("DEPOT"));
        assert_eq!(idx.id_at(1), Some("YARD"));
    }

    #[test]
    fn unknown_terminal_is_none() {
        let idx = TerminalIndex::build(["A".to_string()]);
        assert_eq!(idx.index_of("Z"), None);
    }

    #[test]
    fn build_is_deterministic_regardless_of_input_order() {
        let a = TerminalIndex::build(["C".to_string(), "A".to_string(), "B".to_string()]);
        let b = TerminalIndex::build(["B".to_string(), "C".to_string(), "A".to_string()]);
        for id in ["A", "B", "C"] {
            assert_eq!(a.index_of(id), b.index_of(id));
        }
    }
}

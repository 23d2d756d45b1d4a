//! Group expansion state keyed by derived group id.
//!
//! Group rows are rebuilt on every run, so the UI keeps expansion in a map keyed by
//! [`crate::types::GroupInfo::id`]. Ids depend only on the grouping path, which lets the map
//! survive data refreshes.

use std::collections::HashMap;

use crate::types::Row;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupExpansion {
    states: HashMap<String, bool>,
}

impl GroupExpansion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy stored state onto matching groups; register unseen groups as `default_expanded`.
    pub fn apply(&mut self, rows: &mut [Row], default_expanded: bool) {
        for row in rows {
            let Some(group) = row.group.as_mut() else {
                continue;
            };
            group.expanded = *self.states.entry(group.id.clone()).or_insert(default_expanded);
            self.apply(&mut group.children, default_expanded);
        }
    }

    /// Flip a group's state. Returns the new state, or `None` for unknown ids.
    pub fn toggle(&mut self, id: &str) -> Option<bool> {
        let state = self.states.get_mut(id)?;
        *state = !*state;
        Some(*state)
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.states.get(id).copied().unwrap_or(false)
    }

    pub fn clear(&mut self) {
        self.states.clear();
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

/// Rows a renderer would draw: every row plus the descendants of expanded groups.
pub fn rendered_row_count(rows: &[Row]) -> usize {
    rows.iter()
        .map(|row| match &row.group {
            Some(g) if g.expanded => 1 + rendered_row_count(&g.children),
            _ => 1,
        })
        .sum()
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Name and visibility filtering of node lists.

use alloc::{
    format,
    string::{String, ToString},
    vec::Vec,
};

use crate::table::{NodeId, NodeTable};

/// Filter applied to candidate lists, such as the roots shown in a sidebar.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NameFilter {
    /// Case-insensitive substring that names must contain. Empty matches all.
    pub query: String,
    /// Only keep nodes flagged visible.
    pub visible_only: bool,
}

impl NameFilter {
    /// Create an empty filter (matches everything).
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by the given name substring.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Restrict to visible nodes.
    pub fn visible(mut self) -> Self {
        self.visible_only = true;
        self
    }

    /// Flip the visible-only restriction.
    pub fn toggle_visible_only(&mut self) {
        self.visible_only = !self.visible_only;
    }

    /// Whether this filter can reject anything.
    pub fn is_active(&self) -> bool {
        self.visible_only || !self.query.is_empty()
    }

    /// Whether a node with this name and visibility passes the filter.
    pub fn matches(&self, name: &str, visible: bool) -> bool {
        if self.visible_only && !visible {
            return false;
        }
        self.query.is_empty() || name.to_lowercase().contains(&self.query.to_lowercase())
    }
}

/// One row of a [`ListSummary`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListEntry {
    /// The matching node.
    pub node: NodeId,
    /// Its name at the time of summarizing.
    pub name: String,
    /// Whether it was visible.
    pub visible: bool,
}

/// Result of filtering a candidate list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListSummary {
    /// Number of live candidates considered.
    pub total: usize,
    /// Number of candidates that passed the filter.
    pub matched: usize,
    /// Whether any matching candidate is visible.
    pub any_visible: bool,
    /// Matching candidates in input order.
    pub entries: Vec<ListEntry>,
}

impl ListSummary {
    /// Label for the list header: `"matched/total"` while a filter is active,
    /// otherwise just `"total"`.
    pub fn count_label(&self, filter_active: bool) -> String {
        if filter_active {
            format!("{}/{}", self.matched, self.total)
        } else {
            self.total.to_string()
        }
    }

    /// Whether nothing matched, in which case the list is usually not shown.
    pub fn is_empty(&self) -> bool {
        self.matched == 0
    }
}

/// Filter `candidates` from `table`. Stale ids are skipped and not counted.
pub fn summarize(
    table: &NodeTable,
    candidates: impl IntoIterator<Item = NodeId>,
    filter: &NameFilter,
) -> ListSummary {
    let mut summary = ListSummary::default();
    for node in candidates {
        let Some(name) = table.name(node) else {
            continue;
        };
        summary.total += 1;
        let visible = table.is_visible(node);
        if !filter.matches(name, visible) {
            continue;
        }
        summary.matched += 1;
        summary.any_visible |= visible;
        summary.entries.push(ListEntry {
            node,
            name: name.into(),
            visible,
        });
    }
    summary
}

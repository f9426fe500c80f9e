//! The schema graph.
//!
//! Destructive cleanup must delete children before parents to satisfy
//! foreign-key constraints, so every table declares its dependencies here
//! next to the DDL in [`setup`](crate::setup). [`sorted_tables`] yields a
//! deterministic parents-first topological order; cleanup walks it in
//! reverse.

/// One table and the tables its foreign keys point at.
#[derive(Debug, PartialEq, Eq)]
pub struct TableDef {
    /// Table name as it appears in the DDL.
    pub name: &'static str,
    /// Names of tables this one references.
    pub depends_on: &'static [&'static str],
}

/// All tables owned by this crate, in declaration order.
pub const TABLES: &[TableDef] = &[
    TableDef {
        name: "users",
        depends_on: &[],
    },
    TableDef {
        name: "session_entries",
        depends_on: &["users"],
    },
];

/// The schema tables in dependency order: parents before children.
///
/// Declaration order breaks ties, so the result is stable across runs.
#[must_use]
pub fn sorted_tables() -> Vec<&'static TableDef> {
    topo_sort(TABLES)
}

/// Topologically sort tables so that every table appears after the tables
/// it depends on.
///
/// If the graph contains a cycle the unresolved remainder is appended in
/// declaration order; cleanup's per-table error suppression covers that
/// degenerate case.
fn topo_sort(tables: &[TableDef]) -> Vec<&TableDef> {
    let mut sorted: Vec<&TableDef> = Vec::with_capacity(tables.len());
    let mut remaining: Vec<&TableDef> = tables.iter().collect();

    while !remaining.is_empty() {
        let emitted: Vec<&str> = sorted.iter().map(|t| t.name).collect();
        // Dependencies on tables outside this schema don't block ordering.
        let (ready, blocked): (Vec<&TableDef>, Vec<&TableDef>) =
            remaining.into_iter().partition(|t| {
                t.depends_on
                    .iter()
                    .all(|dep| emitted.contains(dep) || !tables.iter().any(|o| o.name == *dep))
            });

        if ready.is_empty() {
            // Cycle: emit what's left in declaration order.
            sorted.extend(blocked);
            break;
        }

        sorted.extend(ready);
        remaining = blocked;
    }

    sorted
}

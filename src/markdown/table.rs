//! Incremental table construction.

use super::Node;

/// Collects a header and rows, then builds a [`Node::Table`].
///
/// Every row must have as many cells as the header; the builder asserts
/// this in debug builds, the renderer does not re-check.
#[derive(Debug, Clone, Default)]
pub struct TableBuilder {
    header: Vec<Node>,
    rows: Vec<Vec<Node>>,
}

impl TableBuilder {
    /// Create a builder with the given header cells.
    pub fn new(header: Vec<Node>) -> Self {
        Self {
            header,
            rows: Vec::new(),
        }
    }

    /// Append a body row.
    pub fn add_row(&mut self, row: Vec<Node>) {
        debug_assert_eq!(row.len(), self.header.len(), "table row width mismatch");
        self.rows.push(row);
    }

    /// Number of body rows added so far.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Consume the builder and produce the table node.
    pub fn build(self) -> Node {
        Node::Table {
            header: self.header,
            rows: self.rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_round_trip() {
        let mut builder = TableBuilder::new(vec![Node::text("Name"), Node::text("Free")]);
        assert_eq!(builder.row_count(), 0);

        builder.add_row(vec![Node::text("Kodi"), Node::text("✅")]);
        builder.add_row(vec![Node::text("Infuse"), Node::text("❌")]);
        assert_eq!(builder.row_count(), 2);

        let rendered = builder.build().render();
        assert!(rendered.starts_with("| Name | Free |\n| ---- | ---- |\n"));
        assert!(rendered.contains("| Kodi | ✅ |\n"));
        assert!(rendered.ends_with("| Infuse | ❌ |\n"));
    }
}

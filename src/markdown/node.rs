//! Renderable Markdown nodes.

use std::fmt;

/// Inline formatting applied to a [`Node::Text`] node.
///
/// Markers nest in a fixed order with bold outermost:
/// `**` then `*` then `~~`, closed in reverse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextStyle {
    /// Wrap in `**`.
    pub bold: bool,
    /// Wrap in `*`.
    pub italic: bool,
    /// Wrap in `~~`.
    pub strikethrough: bool,
}

impl TextStyle {
    /// Bold-only style.
    pub const BOLD: Self = Self {
        bold: true,
        italic: false,
        strikethrough: false,
    };

    /// Italic-only style.
    pub const ITALIC: Self = Self {
        bold: false,
        italic: true,
        strikethrough: false,
    };

    /// Strikethrough-only style.
    pub const STRIKETHROUGH: Self = Self {
        bold: false,
        italic: false,
        strikethrough: true,
    };
}

/// How a [`Node::Code`] node is fenced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CodeStyle {
    /// Plain single-backtick inline code.
    #[default]
    Inline,
    /// Single-backtick inline code with a leading and trailing space,
    /// used for glyph badges.
    Padded,
    /// Triple-backtick fenced block.
    Block,
}

/// A renderable piece of a Markdown document.
///
/// The single capability of every variant is [`Node::render`]: produce the
/// Markdown text for the node and, recursively, its children.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Inline text with optional formatting.
    Text {
        /// The raw text.
        content: String,
        /// Inline formatting markers.
        style: TextStyle,
    },
    /// Inline or fenced code.
    Code {
        /// The code text.
        content: String,
        /// Fencing variant.
        style: CodeStyle,
    },
    /// `[text](url)`.
    Link {
        /// Link text (usually text or an image).
        text: Box<Node>,
        /// Link target.
        url: String,
    },
    /// `![alt](url)`.
    Image {
        /// Alternative text.
        alt: Box<Node>,
        /// Image source.
        url: String,
    },
    /// `#`-prefixed heading, level 1-6.
    Heading {
        /// Heading level (number of `#` characters).
        level: u8,
        /// Heading text.
        text: Box<Node>,
    },
    /// Bullet or enumerated list, one item per line.
    List {
        /// Use `1.`-style numbering instead of `*` bullets.
        ordered: bool,
        /// List items in order.
        items: Vec<Node>,
    },
    /// Pipe table with a header row and a dash divider.
    Table {
        /// Header cells. Defines the column count.
        header: Vec<Node>,
        /// Body rows. Each row must match the header width.
        rows: Vec<Vec<Node>>,
    },
    /// Children joined by a single space.
    Horizontal(Vec<Node>),
    /// Children joined by a blank line, the paragraph separator.
    Vertical(Vec<Node>),
    /// Literal `---`.
    Divider,
}

impl Node {
    /// Plain unstyled text.
    pub fn text(content: impl Into<String>) -> Self {
        Self::styled(content, TextStyle::default())
    }

    /// Text with explicit formatting.
    pub fn styled(content: impl Into<String>, style: TextStyle) -> Self {
        Node::Text {
            content: content.into(),
            style,
        }
    }

    /// Bold text.
    pub fn bold(content: impl Into<String>) -> Self {
        Self::styled(content, TextStyle::BOLD)
    }

    /// Plain inline code.
    pub fn code(content: impl Into<String>) -> Self {
        Node::Code {
            content: content.into(),
            style: CodeStyle::Inline,
        }
    }

    /// Inline code padded with a space on each side.
    pub fn code_padded(content: impl Into<String>) -> Self {
        Node::Code {
            content: content.into(),
            style: CodeStyle::Padded,
        }
    }

    /// Fenced code block.
    pub fn code_block(content: impl Into<String>) -> Self {
        Node::Code {
            content: content.into(),
            style: CodeStyle::Block,
        }
    }

    /// A link wrapping the given node.
    pub fn link(text: Node, url: impl Into<String>) -> Self {
        Node::Link {
            text: Box::new(text),
            url: url.into(),
        }
    }

    /// An image with the given alt node.
    pub fn image(alt: Node, url: impl Into<String>) -> Self {
        Node::Image {
            alt: Box::new(alt),
            url: url.into(),
        }
    }

    /// A heading. The level is clamped to 1-6.
    pub fn heading(level: u8, text: Node) -> Self {
        Node::Heading {
            level: level.clamp(1, 6),
            text: Box::new(text),
        }
    }

    /// A bullet (`ordered = false`) or enumerated (`ordered = true`) list.
    pub fn list(ordered: bool, items: Vec<Node>) -> Self {
        Node::List { ordered, items }
    }

    /// Children joined by single spaces.
    pub fn horizontal(items: Vec<Node>) -> Self {
        Node::Horizontal(items)
    }

    /// Children joined by blank lines.
    pub fn vertical(items: Vec<Node>) -> Self {
        Node::Vertical(items)
    }

    /// A `---` divider.
    pub fn divider() -> Self {
        Node::Divider
    }

    /// Append a child to a container node (`Horizontal`, `Vertical`,
    /// `List`). Has no effect on other variants.
    pub fn push(&mut self, child: Node) {
        match self {
            Node::Horizontal(items) | Node::Vertical(items) | Node::List { items, .. } => {
                items.push(child);
            }
            _ => debug_assert!(false, "push on a non-container node"),
        }
    }

    /// Render the node and its children to Markdown text.
    pub fn render(&self) -> String {
        match self {
            Node::Text { content, style } => render_text(content, *style),
            Node::Code { content, style } => match style {
                CodeStyle::Inline => format!("`{content}`"),
                CodeStyle::Padded => format!("` {content} `"),
                CodeStyle::Block => format!("```\n{content}\n```"),
            },
            Node::Link { text, url } => format!("[{}]({url})", text.render()),
            Node::Image { alt, url } => format!("![{}]({url})", alt.render()),
            Node::Heading { level, text } => {
                format!("{} {}", "#".repeat(usize::from(*level)), text.render())
            }
            Node::List { ordered, items } => render_list(*ordered, items),
            Node::Table { header, rows } => render_table(header, rows),
            Node::Horizontal(items) => join_rendered(items, " "),
            Node::Vertical(items) => join_rendered(items, "\n\n"),
            Node::Divider => "---".to_string(),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn render_text(content: &str, style: TextStyle) -> String {
    let mut markers = Vec::new();
    if style.bold {
        markers.push("**");
    }
    if style.italic {
        markers.push("*");
    }
    if style.strikethrough {
        markers.push("~~");
    }

    let mut out = String::with_capacity(content.len() + 8);
    for marker in &markers {
        out.push_str(marker);
    }
    out.push_str(content);
    for marker in markers.iter().rev() {
        out.push_str(marker);
    }
    out
}

fn render_list(ordered: bool, items: &[Node]) -> String {
    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        if ordered {
            out.push_str(&format!("{}. ", i + 1));
        } else {
            out.push_str("* ");
        }
        out.push_str(&item.render());
        out.push('\n');
    }
    out
}

fn render_table(header: &[Node], rows: &[Vec<Node>]) -> String {
    let mut out = String::new();
    let mut divider = String::new();

    out.push_str("| ");
    divider.push_str("| ");
    for (i, cell) in header.iter().enumerate() {
        if i > 0 {
            out.push_str(" | ");
            divider.push_str(" | ");
        }
        let rendered = cell.render();
        divider.push_str(&"-".repeat(rendered.chars().count().max(3)));
        out.push_str(&rendered);
    }
    out.push_str(" |\n");
    divider.push_str(" |\n");
    out.push_str(&divider);

    for row in rows {
        debug_assert_eq!(row.len(), header.len(), "table row width mismatch");
        out.push_str("| ");
        for (i, cell) in row.iter().enumerate() {
            if i > 0 {
                out.push_str(" | ");
            }
            out.push_str(&cell.render());
        }
        out.push_str(" |\n");
    }

    out
}

fn join_rendered(items: &[Node], separator: &str) -> String {
    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(&item.render());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_plain() {
        assert_eq!(Node::text("hello").render(), "hello");
    }

    #[test]
    fn test_text_styles_nest_bold_outermost() {
        assert_eq!(Node::bold("x").render(), "**x**");
        assert_eq!(Node::styled("x", TextStyle::ITALIC).render(), "*x*");
        assert_eq!(Node::styled("x", TextStyle::STRIKETHROUGH).render(), "~~x~~");

        let all = TextStyle {
            bold: true,
            italic: true,
            strikethrough: true,
        };
        assert_eq!(Node::styled("x", all).render(), "***~~x~~***");

        let bold_strike = TextStyle {
            bold: true,
            strikethrough: true,
            ..Default::default()
        };
        assert_eq!(Node::styled("x", bold_strike).render(), "**~~x~~**");
    }

    #[test]
    fn test_code_variants() {
        assert_eq!(Node::code("ls").render(), "`ls`");
        assert_eq!(Node::code_padded("🔹").render(), "` 🔹 `");
        assert_eq!(Node::code_block("fn main() {}").render(), "```\nfn main() {}\n```");
    }

    #[test]
    fn test_link_and_image() {
        let link = Node::link(Node::text("Jellyfin"), "https://jellyfin.org");
        assert_eq!(link.render(), "[Jellyfin](https://jellyfin.org)");

        let badge = Node::link(
            Node::image(Node::text("github"), "https://img.shields.io/x"),
            "https://github.com/jellyfin/jellyfin/releases",
        );
        assert_eq!(
            badge.render(),
            "[![github](https://img.shields.io/x)](https://github.com/jellyfin/jellyfin/releases)"
        );
    }

    #[test]
    fn test_heading() {
        assert_eq!(Node::heading(1, Node::text("By Environment")).render(), "# By Environment");
        assert_eq!(Node::heading(3, Node::text("iOS")).render(), "### iOS");
        // Out-of-range levels clamp.
        assert_eq!(Node::heading(0, Node::text("a")).render(), "# a");
        assert_eq!(Node::heading(9, Node::text("a")).render(), "###### a");
    }

    #[test]
    fn test_list_unordered() {
        let list = Node::list(false, vec![Node::text("a"), Node::text("b")]);
        assert_eq!(list.render(), "* a\n* b\n");
    }

    #[test]
    fn test_list_ordered_is_one_indexed() {
        let list = Node::list(true, vec![Node::text("a"), Node::text("b"), Node::text("c")]);
        assert_eq!(list.render(), "1. a\n2. b\n3. c\n");
    }

    #[test]
    fn test_table_divider_width_tracks_header() {
        let table = Node::Table {
            header: vec![Node::text("Name"), Node::text("OS")],
            rows: vec![vec![Node::text("Swiftfin"), Node::text("iOS")]],
        };
        // "Name" is 4 chars, "OS" is below the 3-dash minimum.
        assert_eq!(
            table.render(),
            "| Name | OS |\n| ---- | --- |\n| Swiftfin | iOS |\n"
        );
    }

    #[test]
    fn test_containers_and_divider() {
        let h = Node::horizontal(vec![Node::text("a"), Node::text("b")]);
        assert_eq!(h.render(), "a b");

        let v = Node::vertical(vec![Node::text("a"), Node::text("b")]);
        assert_eq!(v.render(), "a\n\nb");

        assert_eq!(Node::divider().render(), "---");
    }

    #[test]
    fn test_container_push() {
        let mut v = Node::vertical(vec![]);
        v.push(Node::text("first"));
        v.push(Node::divider());
        assert_eq!(v.render(), "first\n\n---");
    }
}

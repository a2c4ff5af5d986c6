//! Text renderings of a [`TreeSet`]'s shape, for debugging.
//!
//! Nothing here is needed to use the set. Every layout is built from the same
//! traversals that back the ordered exports and is returned as text (or written
//! to an [`io::Write`]) rather than printed.
//!
//! # Examples
//!
//! ```
//! use treeset::{Layout, RenderOptions, TreeSet};
//!
//! let set: TreeSet<_> = vec![2, 1, 3].into_iter().collect();
//!
//! let text = set.render(Layout::PreOrder, &RenderOptions::default()).unwrap();
//! assert_eq!(text, "2\n    L: 1\n    R: 3\n");
//!
//! let text = set.render(Layout::Shaped, &RenderOptions::default()).unwrap();
//! assert_eq!(text, " 2\n1 3\n");
//! ```

use std::collections::VecDeque;
use std::fmt::{self, Write as _};
use std::io;

use tracing::debug;

use crate::tree_set::{Node, Order, Side, TreeSet};

/// The deepest tree [`Layout::Shaped`] will draw. Each row is twice as wide as the
/// one above it.
pub const MAX_SHAPED_HEIGHT: usize = 16;

/// The widest per-level indent the indented layouts accept.
pub const MAX_INDENT: usize = 64;

/// Errors triggered while rendering a tree.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RenderError {
    /// The writer rejected the rendered text.
    #[error("failed to write rendered tree")]
    Io(#[from] io::Error),
    /// An element failed to format itself.
    #[error("failed to format an element")]
    Fmt(#[from] fmt::Error),
    /// The configured height can't hold every level of the tree.
    #[error("shaped layout height {height} is less than the tree height {actual}")]
    HeightTooSmall {
        /// The configured height.
        height: usize,
        /// The height of the tree being rendered.
        actual: usize,
    },
    /// The shaped layout would be too wide to draw.
    #[error("shaped layout height {height} exceeds the limit of {limit}")]
    TooTall {
        /// The height that was requested.
        height: usize,
        /// [`MAX_SHAPED_HEIGHT`].
        limit: usize,
    },
    /// The configured indent is wider than [`MAX_INDENT`].
    #[error("indent {indent} exceeds the limit of {limit}")]
    IndentTooWide {
        /// The configured indent.
        indent: usize,
        /// [`MAX_INDENT`].
        limit: usize,
    },
}

/// How to lay a tree out as text.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Layout {
    /// One line per node, parents before children, indented by depth and
    /// prefixed with `L: ` or `R: `.
    PreOrder,
    /// Like [`Layout::PreOrder`] but in ascending order.
    InOrder,
    /// Like [`Layout::PreOrder`] but with children before parents.
    PostOrder,
    /// A sideways tree in ascending order drawn with `|-- ` and `\-- ` connectors.
    Branches,
    /// Breadth-first rows spaced so each parent sits centered above its children.
    Shaped,
}

/// Knobs for rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Spaces per level for the indented layouts.
    pub indent: usize,
    /// Number of rows for [`Layout::Shaped`]. `None` uses the tree's own height.
    pub height: Option<usize>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent: 4,
            height: None,
        }
    }
}

impl<T> TreeSet<T>
where
    T: fmt::Display,
{
    /// Renders the tree with the given layout. An empty tree renders as an empty string.
    pub fn render(&self, layout: Layout, options: &RenderOptions) -> Result<String, RenderError> {
        debug!(?layout, size = self.len(), "rendering tree");

        let mut out = String::new();
        match layout {
            Layout::PreOrder => render_indented(self, Order::PreOrder, options, &mut out)?,
            Layout::InOrder => render_indented(self, Order::InOrder, options, &mut out)?,
            Layout::PostOrder => render_indented(self, Order::PostOrder, options, &mut out)?,
            Layout::Branches => render_branches(self, &mut out)?,
            Layout::Shaped => render_shaped(self, options, &mut out)?,
        }

        Ok(out)
    }

    /// Renders the tree and writes the text to `writer`.
    pub fn write_rendered<W>(
        &self,
        mut writer: W,
        layout: Layout,
        options: &RenderOptions,
    ) -> Result<(), RenderError>
    where
        W: io::Write,
    {
        let text = self.render(layout, options)?;
        writer.write_all(text.as_bytes())?;
        Ok(())
    }
}

fn render_indented<T>(
    set: &TreeSet<T>,
    order: Order,
    options: &RenderOptions,
    out: &mut String,
) -> Result<(), RenderError>
where
    T: fmt::Display,
{
    if options.indent > MAX_INDENT {
        return Err(RenderError::IndentTooWide {
            indent: options.indent,
            limit: MAX_INDENT,
        });
    }

    for visit in set.walk(order) {
        let prefix = match visit.side {
            Side::Root => "",
            Side::Left => "L: ",
            Side::Right => "R: ",
        };
        // Padded by hand since a formatting width can't exceed `u16::MAX`.
        out.push_str(&" ".repeat(visit.depth * options.indent));
        writeln!(out, "{}{}", prefix, visit.element())?;
    }

    Ok(())
}

fn render_branches<T>(set: &TreeSet<T>, out: &mut String) -> Result<(), RenderError>
where
    T: fmt::Display,
{
    enum Step<'a, T> {
        Expand {
            node: &'a Node<T>,
            prefix: String,
            is_left: bool,
        },
        Emit {
            node: &'a Node<T>,
            lead: String,
        },
    }

    let mut steps = Vec::new();
    if let Some(root) = set.root() {
        steps.push(Step::Expand {
            node: root,
            prefix: String::new(),
            is_left: false,
        });
    }

    while let Some(step) = steps.pop() {
        let (node, prefix, is_left) = match step {
            Step::Emit { node, lead } => {
                writeln!(out, "{}{}", lead, node.element)?;
                continue;
            }
            Step::Expand {
                node,
                prefix,
                is_left,
            } => (node, prefix, is_left),
        };

        let child_prefix = format!("{}{}", prefix, if is_left { "|   " } else { "    " });
        let connector = if is_left { "|-- " } else { "\\-- " };

        if let Some(right) = node.right.as_deref() {
            steps.push(Step::Expand {
                node: right,
                prefix: child_prefix.clone(),
                is_left: false,
            });
        }
        steps.push(Step::Emit {
            node,
            lead: format!("{}{}", prefix, connector),
        });
        if let Some(left) = node.left.as_deref() {
            steps.push(Step::Expand {
                node: left,
                prefix: child_prefix,
                is_left: true,
            });
        }
    }

    Ok(())
}

fn render_shaped<T>(
    set: &TreeSet<T>,
    options: &RenderOptions,
    out: &mut String,
) -> Result<(), RenderError>
where
    T: fmt::Display,
{
    let actual = set.height();
    let height = options.height.unwrap_or(actual);
    if height < actual {
        return Err(RenderError::HeightTooSmall { height, actual });
    }
    if height > MAX_SHAPED_HEIGHT {
        return Err(RenderError::TooTall {
            height,
            limit: MAX_SHAPED_HEIGHT,
        });
    }
    if actual == 0 {
        return Ok(());
    }

    // Format every slot of every row up front so all cells can share the widest width.
    let mut rows: Vec<Vec<Option<String>>> = Vec::with_capacity(height);
    let mut level: VecDeque<Option<&Node<T>>> = VecDeque::new();
    level.push_back(set.root());
    for _ in 0..height {
        let mut row = Vec::with_capacity(level.len());
        let mut next = VecDeque::with_capacity(level.len() * 2);
        for slot in level.drain(..) {
            match slot {
                Some(node) => {
                    let mut cell = String::new();
                    write!(cell, "{}", node.element)?;
                    row.push(Some(cell));
                    next.push_back(node.left.as_deref());
                    next.push_back(node.right.as_deref());
                }
                None => {
                    row.push(None);
                    next.push_back(None);
                    next.push_back(None);
                }
            }
        }
        rows.push(row);
        level = next;
    }

    let width = rows
        .iter()
        .flatten()
        .flatten()
        .map(|cell| cell.chars().count())
        .max()
        .unwrap_or(1);

    for (depth, row) in (1..).zip(&rows) {
        let indent = ((1usize << (height - depth)) - 1) * width;
        let spacing = ((1usize << (height - depth + 1)) - 1) * width;

        let mut line = " ".repeat(indent);
        for (i, cell) in row.iter().enumerate() {
            if i != 0 {
                line.push_str(&" ".repeat(spacing));
            }
            match cell {
                Some(text) => write!(line, "{:>width$}", text, width = width)?,
                None => line.push_str(&" ".repeat(width)),
            }
        }
        writeln!(out, "{}", line.trim_end())?;
    }

    Ok(())
}

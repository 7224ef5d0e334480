//! Tree-parser capability and the default CoNLL implementation
//!
//! The sentence stream only knows about [`TreeParser`]. It hands each
//! cleaned block to the parser as a sub-stream and wraps whatever tree comes
//! back, so any encoding can be plugged in.

use crate::error::{ParseError, ParseResult};
use crate::tree::{DependencyNode, DependencyTree};
use std::io::BufRead;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pluggable builder of dependency trees from block text
pub trait TreeParser {
    /// Read one tree from `reader`
    ///
    /// # Arguments
    /// * `reader` - Sub-stream positioned at the start of the tree encoding
    ///
    /// # Returns
    /// The parsed tree, or a [`ParseError`] if the text is not a valid
    /// encoding
    fn read_next_tree(&self, reader: &mut dyn BufRead) -> ParseResult<DependencyTree>;
}

impl<P: TreeParser + ?Sized> TreeParser for &P {
    fn read_next_tree(&self, reader: &mut dyn BufRead) -> ParseResult<DependencyTree> {
        (**self).read_next_tree(reader)
    }
}

impl<P: TreeParser + ?Sized> TreeParser for Box<P> {
    fn read_next_tree(&self, reader: &mut dyn BufRead) -> ParseResult<DependencyTree> {
        (**self).read_next_tree(reader)
    }
}

impl<P: TreeParser + ?Sized> TreeParser for Arc<P> {
    fn read_next_tree(&self, reader: &mut dyn BufRead) -> ParseResult<DependencyTree> {
        (**self).read_next_tree(reader)
    }
}

/// Adapter turning a closure into a [`TreeParser`]
#[derive(Debug, Clone, Copy)]
pub struct FnParser<F>(F);

impl<F> TreeParser for FnParser<F>
where
    F: Fn(&mut dyn BufRead) -> ParseResult<DependencyTree>,
{
    fn read_next_tree(&self, reader: &mut dyn BufRead) -> ParseResult<DependencyTree> {
        (self.0)(reader)
    }
}

/// Wrap a closure as a [`TreeParser`]
pub fn parser_fn<F>(f: F) -> FnParser<F>
where
    F: Fn(&mut dyn BufRead) -> ParseResult<DependencyTree>,
{
    FnParser(f)
}

/// Column layout of a token line
///
/// Indices are 0-based positions among the whitespace-separated fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConllFormat {
    /// Token id column; `None` numbers tokens by position
    pub id: Option<usize>,
    /// Surface form column
    pub word: usize,
    /// Lemma column, if present
    pub lemma: Option<usize>,
    /// Part-of-speech column
    pub pos: usize,
    /// Head column (`0` marks a root)
    pub head: usize,
    /// Dependency relation column
    pub relation: usize,
}

impl ConllFormat {
    /// ukWaC / WaCky layout: `word lemma pos id head relation`
    pub const fn wacky() -> Self {
        Self {
            id: Some(3),
            word: 0,
            lemma: Some(1),
            pos: 2,
            head: 4,
            relation: 5,
        }
    }

    /// CoNLL-X layout: `id form lemma cpostag postag feats head deprel ...`
    pub const fn conll_x() -> Self {
        Self {
            id: Some(0),
            word: 1,
            lemma: Some(2),
            pos: 4,
            head: 6,
            relation: 7,
        }
    }

    /// Look up a preset by name (`wacky`, `conll-x`)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "wacky" | "ukwac" => Some(Self::wacky()),
            "conll-x" | "conllx" | "conll" => Some(Self::conll_x()),
            _ => None,
        }
    }
}

impl Default for ConllFormat {
    fn default() -> Self {
        Self::wacky()
    }
}

/// Tree parser for tab- or space-separated CoNLL token lines
///
/// Reads every token line up to the end of the sub-stream, so one block
/// always yields one tree. Blank and whitespace-only lines are skipped.
/// Heads are 1-based sentence positions; `0` marks a root.
/// Empty input yields an empty tree.
#[derive(Debug, Clone, Default)]
pub struct ConllParser {
    format: ConllFormat,
}

impl ConllParser {
    /// Create a parser for the given column layout
    pub fn new(format: ConllFormat) -> Self {
        Self { format }
    }

    /// Parser for the ukWaC layout
    pub fn wacky() -> Self {
        Self::new(ConllFormat::wacky())
    }

    /// Parser for the CoNLL-X layout
    pub fn conll_x() -> Self {
        Self::new(ConllFormat::conll_x())
    }

    /// The column layout in use
    pub fn format(&self) -> &ConllFormat {
        &self.format
    }

    fn build_node(
        &self,
        position: usize,
        line: usize,
        columns: &[&str],
        len: usize,
    ) -> ParseResult<DependencyNode> {
        let format = &self.format;

        let id = match format.id {
            Some(column) => parse_number(required(columns, column, line, "id")?, line, "id")?,
            None => position + 1,
        };

        let head = parse_number(required(columns, format.head, line, "head")?, line, "head")?;
        let head = match head {
            0 => None,
            h if h > len => {
                return Err(ParseError::HeadOutOfRange { line, head: h, len });
            }
            h => Some(h - 1),
        };

        let lemma = format
            .lemma
            .and_then(|column| columns.get(column))
            .filter(|lemma| **lemma != "_")
            .map(|lemma| lemma.to_string());

        Ok(DependencyNode {
            id,
            word: required(columns, format.word, line, "word")?.to_string(),
            lemma,
            pos: required(columns, format.pos, line, "pos")?.to_string(),
            head,
            relation: required(columns, format.relation, line, "relation")?.to_string(),
        })
    }
}

impl TreeParser for ConllParser {
    fn read_next_tree(&self, reader: &mut dyn BufRead) -> ParseResult<DependencyTree> {
        let mut rows: Vec<(usize, String)> = Vec::new();
        let mut line_number = 0;
        let mut buffer = String::new();

        loop {
            buffer.clear();
            if reader.read_line(&mut buffer)? == 0 {
                break;
            }
            line_number += 1;

            let line = buffer.trim();
            if line.is_empty() {
                continue;
            }
            rows.push((line_number, line.to_string()));
        }

        let len = rows.len();
        let nodes = rows
            .iter()
            .enumerate()
            .map(|(position, (line, text))| {
                let columns: Vec<&str> = text.split_whitespace().collect();
                self.build_node(position, *line, &columns, len)
            })
            .collect::<ParseResult<Vec<_>>>()?;

        Ok(DependencyTree::new(nodes))
    }
}

fn required<'a>(
    columns: &[&'a str],
    column: usize,
    line: usize,
    field: &'static str,
) -> ParseResult<&'a str> {
    columns
        .get(column)
        .copied()
        .ok_or(ParseError::MissingColumn {
            line,
            column,
            field,
        })
}

fn parse_number(value: &str, line: usize, field: &'static str) -> ParseResult<usize> {
    value.parse().map_err(|_| ParseError::InvalidNumber {
        line,
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};

    fn parse(parser: &ConllParser, text: &str) -> ParseResult<DependencyTree> {
        parser.read_next_tree(&mut Cursor::new(text))
    }

    #[test]
    fn test_wacky_layout() {
        let text = "Dogs\tdog\tNNS\t1\t2\tSBJ\nbark\tbark\tVVP\t2\t0\tROOT\n";
        let tree = parse(&ConllParser::wacky(), text).unwrap();

        assert_eq!(tree.len(), 2);
        let dogs = tree.node(0).unwrap();
        assert_eq!(dogs.word, "Dogs");
        assert_eq!(dogs.lemma.as_deref(), Some("dog"));
        assert_eq!(dogs.pos, "NNS");
        assert_eq!(dogs.head, Some(1));
        assert_eq!(dogs.relation, "SBJ");
        assert_eq!(tree.roots().next().unwrap().word, "bark");
    }

    #[test]
    fn test_conll_x_layout() {
        let text = "1\tThe\tthe\tDT\tDT\t_\t2\tNMOD\t_\t_\n\
                    2\tcat\tcat\tNN\tNN\t_\t3\tSBJ\t_\t_\n\
                    3\tsleeps\tsleep\tVB\tVBZ\t_\t0\tROOT\t_\t_\n";
        let tree = parse(&ConllParser::conll_x(), text).unwrap();

        assert_eq!(tree.words().collect::<Vec<_>>(), ["The", "cat", "sleeps"]);
        assert_eq!(tree.node(2).unwrap().pos, "VBZ");
        assert_eq!(tree.children(2).count(), 1);
        assert_eq!(tree.head_of(0).unwrap().word, "cat");
    }

    #[test]
    fn test_blank_lines_inside_tree_are_skipped() {
        let text = "\n\na\ta\tX\t1\t0\tROOT\n\nb\tb\tX\t2\t1\tOBJ\n";
        let tree = parse(&ConllParser::wacky(), text).unwrap();
        assert_eq!(tree.words().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(tree.node(1).unwrap().head, Some(0));
    }

    #[test]
    fn test_whitespace_only_line_keeps_later_tokens() {
        let text = "a\ta\tX\t1\t0\tROOT\n \t\nb\tb\tX\t2\t1\tOBJ\n";
        let tree = parse(&ConllParser::wacky(), text).unwrap();
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.node(1).unwrap().word, "b");
    }

    #[test]
    fn test_empty_input_yields_empty_tree() {
        let tree = parse(&ConllParser::default(), "").unwrap();
        assert!(tree.is_empty());
    }

    #[test]
    fn test_underscore_lemma_is_absent() {
        let tree = parse(&ConllParser::wacky(), "x\t_\tX\t1\t0\tROOT\n").unwrap();
        assert!(tree.node(0).unwrap().lemma.is_none());
    }

    #[test]
    fn test_missing_column() {
        let err = parse(&ConllParser::wacky(), "a\ta\tX\t1\n").unwrap_err();
        match err {
            ParseError::MissingColumn { line, column, field } => {
                assert_eq!(line, 1);
                assert_eq!(column, 4);
                assert_eq!(field, "head");
            }
            other => panic!("Expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_head() {
        let text = "a\ta\tX\t1\t0\tROOT\nb\tb\tX\t2\tone\tOBJ\n";
        let err = parse(&ConllParser::wacky(), text).unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidNumber { line: 2, field: "head", .. }
        ));
    }

    #[test]
    fn test_head_out_of_range() {
        let err = parse(&ConllParser::wacky(), "a\ta\tX\t1\t5\tOBJ\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::HeadOutOfRange { line: 1, head: 5, len: 1 }
        ));
    }

    #[test]
    fn test_format_presets_by_name() {
        assert_eq!(ConllFormat::from_name("WaCky"), Some(ConllFormat::wacky()));
        assert_eq!(ConllFormat::from_name("conll-x"), Some(ConllFormat::conll_x()));
        assert_eq!(ConllFormat::from_name("tiger"), None);
        assert_eq!(ConllFormat::default(), ConllFormat::wacky());
    }

    #[test]
    fn test_closure_parser() {
        let parser = parser_fn(|reader: &mut dyn BufRead| {
            let mut text = String::new();
            reader.read_to_string(&mut text)?;
            Ok(DependencyTree::new(Vec::new()))
        });
        assert!(parser
            .read_next_tree(&mut Cursor::new("ignored"))
            .unwrap()
            .is_empty());
    }
}

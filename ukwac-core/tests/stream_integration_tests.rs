//! Integration tests for the sentence stream over real files

use std::cell::{Cell, RefCell};
use std::fs;
use std::io::{self, BufRead, Read};
use std::rc::Rc;
use tempfile::TempDir;
use ukwac_core::error::ParseResult;
use ukwac_core::{
    ConllParser, DependencyTree, ParseError, SentenceStream, SentenceStreamBuilder, StreamError,
    TreeParser,
};

/// Parser stub that records every block text it is handed
#[derive(Clone, Default)]
struct RecordingParser {
    seen: Rc<RefCell<Vec<String>>>,
}

impl RecordingParser {
    fn seen(&self) -> Vec<String> {
        self.seen.borrow().clone()
    }
}

impl TreeParser for RecordingParser {
    fn read_next_tree(&self, reader: &mut dyn BufRead) -> ParseResult<DependencyTree> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        self.seen.borrow_mut().push(text);
        Ok(DependencyTree::default())
    }
}

/// Parser stub that always fails
struct FailingParser;

impl TreeParser for FailingParser {
    fn read_next_tree(&self, _reader: &mut dyn BufRead) -> ParseResult<DependencyTree> {
        Err(ParseError::InvalidNumber {
            line: 1,
            field: "head",
            value: "?".to_string(),
        })
    }
}

/// Reader that records when it is dropped
struct TrackedReader {
    inner: &'static [u8],
    dropped: Rc<Cell<bool>>,
}

impl Read for TrackedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl BufRead for TrackedReader {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.inner.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.inner.consume(amt)
    }
}

impl Drop for TrackedReader {
    fn drop(&mut self) {
        self.dropped.set(true);
    }
}

fn write_corpus(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

const ROUND_TRIP: &str = "<text id=1>
<s>
a-line
b-line
</s>
</text>
<text id=2>
<s>
c-line
</s>
</text>
";

#[test]
fn test_round_trip_scenario() {
    let dir = TempDir::new().unwrap();
    let path = write_corpus(&dir, "corpus.conll", ROUND_TRIP);
    let parser = RecordingParser::default();

    let mut stream = SentenceStream::open(&path, parser.clone()).unwrap();
    assert!(stream.has_more());
    stream.pull().unwrap();
    assert!(stream.has_more());
    stream.pull().unwrap();
    assert!(!stream.has_more());

    assert_eq!(parser.seen(), ["a-line\nb-line\n", "c-line\n"]);
}

#[test]
fn test_empty_file_has_no_documents() {
    let dir = TempDir::new().unwrap();
    let path = write_corpus(&dir, "empty.conll", "");
    let parser = RecordingParser::default();

    let mut stream = SentenceStream::open(&path, parser.clone()).unwrap();
    assert!(!stream.has_more());
    assert_eq!(stream.line_number(), 0);
    assert!(parser.seen().is_empty());
    assert!(matches!(stream.pull(), Err(StreamError::Exhausted)));
}

#[test]
fn test_n_blocks_give_n_pulls() {
    let blocks = 25;
    let corpus: String = (0..blocks)
        .map(|i| format!("<text id={i}>\n<s>\nline-{i}\n</s>\n</text>\n"))
        .collect();
    let parser = RecordingParser::default();
    let mut stream = SentenceStream::from_reader(corpus.as_bytes(), parser.clone()).unwrap();

    let mut pulls = 0;
    while stream.has_more() {
        let document = stream.pull().unwrap();
        assert_eq!(document.block(), pulls);
        pulls += 1;
    }
    assert_eq!(pulls, blocks);
    assert!(!stream.has_more());

    let err = stream.pull().unwrap_err();
    assert!(matches!(err, StreamError::Exhausted));
    assert!(err.is_precondition());
    assert_eq!(parser.seen().len(), blocks);
}

#[test]
fn test_delimiters_and_blank_lines_never_reach_parser() {
    let corpus = "<text id=1>\n\n<s>\n\nx\n\n\n</s>\n<s>\ny\n</s>\n\n</text>\n";
    let parser = RecordingParser::default();
    let stream = SentenceStream::from_reader(corpus.as_bytes(), parser.clone()).unwrap();
    assert_eq!(stream.count(), 1);

    let seen = parser.seen();
    assert_eq!(seen, ["x\ny\n"]);
    for text in &seen {
        assert!(!text.contains("<s>"));
        assert!(!text.contains("</s>"));
        assert!(!text.lines().any(str::is_empty));
    }
}

#[test]
fn test_missing_close_tag_is_parsed() {
    let corpus = "<text id=1>\n<s>\nx\n</s>\n</text>\n<text id=2>\n<s>\ny\nz";
    let parser = RecordingParser::default();
    let mut stream = SentenceStream::from_reader(corpus.as_bytes(), parser.clone()).unwrap();

    stream.pull().unwrap();
    stream.pull().unwrap();
    assert!(!stream.has_more());
    assert_eq!(parser.seen(), ["x\n", "y\nz\n"]);
}

#[test]
fn test_missing_close_tag_rejected_when_strict() {
    let corpus = "<text id=1>\n<s>\nx\n</s>\n</text>\n<text id=2>\n<s>\ny\n";
    let mut stream = SentenceStreamBuilder::new()
        .strict()
        .build(corpus.as_bytes(), RecordingParser::default())
        .unwrap();

    match stream.pull() {
        Err(StreamError::TruncatedBlock { block, line }) => {
            assert_eq!(block, 1);
            assert_eq!(line, 6);
        }
        other => panic!("Expected TruncatedBlock, got {other:?}"),
    }
    assert!(!stream.has_more());
}

#[test]
fn test_has_more_is_idempotent() {
    let stream =
        SentenceStream::from_reader(ROUND_TRIP.as_bytes(), RecordingParser::default()).unwrap();
    let before = stream.peek().cloned();
    let lines = stream.line_number();

    for _ in 0..10 {
        assert!(stream.has_more());
    }
    assert_eq!(stream.peek().cloned(), before);
    assert_eq!(stream.line_number(), lines);
}

#[test]
fn test_empty_block_still_forwarded() {
    let parser = RecordingParser::default();
    let stream =
        SentenceStream::from_reader("<text>\n<s>\n</s>\n</text>\n".as_bytes(), parser.clone())
            .unwrap();
    assert!(stream.has_more());
    assert_eq!(parser.seen(), [""]);
}

#[test]
fn test_parser_failure_is_fatal() {
    let result = SentenceStream::from_reader(ROUND_TRIP.as_bytes(), FailingParser);
    match result {
        Err(StreamError::Parse { block, line, source }) => {
            assert_eq!(block, 0);
            assert_eq!(line, 1);
            assert!(matches!(source, ParseError::InvalidNumber { .. }));
        }
        Err(other) => panic!("Expected Parse error, got {other:?}"),
        Ok(_) => panic!("Expected Parse error"),
    }
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let result = SentenceStream::open(dir.path().join("missing.conll"), ConllParser::wacky());
    assert!(matches!(result, Err(StreamError::Io(_))));
}

#[test]
fn test_wacky_corpus_end_to_end() {
    let corpus = "<text id=\"ukwac:http://example.org/1\">
<s>
The\tthe\tDT\t1\t2\tNMOD
cat\tcat\tNN\t2\t3\tSBJ
sat\tsit\tVVD\t3\t0\tROOT
</s>
</text>
<text id=\"ukwac:http://example.org/2\">
<s>
Yes\tyes\tUH\t1\t0\tROOT
</s>
</text>
";
    let dir = TempDir::new().unwrap();
    let path = write_corpus(&dir, "wacky.conll", corpus);

    let documents: Vec<_> = SentenceStream::open(&path, ConllParser::wacky())
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(documents.len(), 2);
    assert_eq!(documents[0].text(), "The cat sat");
    let tree = documents[0].tree();
    assert_eq!(tree.roots().next().unwrap().lemma.as_deref(), Some("sit"));
    assert_eq!(tree.head_of(1).unwrap().word, "sat");
    assert_eq!(documents[1].text(), "Yes");
}

#[test]
fn test_close_releases_reader() {
    let dropped = Rc::new(Cell::new(false));
    let reader = TrackedReader {
        inner: ROUND_TRIP.as_bytes(),
        dropped: Rc::clone(&dropped),
    };

    let stream = SentenceStream::from_reader(reader, RecordingParser::default()).unwrap();
    assert!(!dropped.get());
    stream.close();
    assert!(dropped.get());
}

#[test]
fn test_into_inner_hands_back_reader() {
    let dropped = Rc::new(Cell::new(false));
    let reader = TrackedReader {
        inner: ROUND_TRIP.as_bytes(),
        dropped: Rc::clone(&dropped),
    };

    let stream = SentenceStream::from_reader(reader, RecordingParser::default()).unwrap();
    let mut reader = stream.into_inner();
    assert!(!dropped.get());

    // Only the first block has been consumed.
    let mut rest = String::new();
    reader.read_line(&mut rest).unwrap();
    assert_eq!(rest, "<text id=2>\n");
    drop(reader);
    assert!(dropped.get());
}

#[test]
fn test_whitespace_only_line_keeps_whole_sentence() {
    let corpus = "<text>\n<s>\na\ta\tX\t1\t0\tROOT\n \t\nb\tb\tX\t2\t1\tOBJ\n</s>\n</text>\n";
    let mut stream = SentenceStream::from_reader(corpus.as_bytes(), ConllParser::wacky()).unwrap();

    let document = stream.pull().unwrap();
    assert_eq!(document.tree().len(), 2);
    assert_eq!(document.text(), "a b");
    assert!(!stream.has_more());
}

#[test]
fn test_kept_blank_lines_keep_whole_sentence() {
    let corpus = "<text>\n<s>\na\ta\tX\t1\t0\tROOT\n\nb\tb\tX\t2\t1\tOBJ\n</s>\n</text>\n";
    let mut stream = SentenceStreamBuilder::new()
        .skip_blank_lines(false)
        .build(corpus.as_bytes(), ConllParser::wacky())
        .unwrap();

    assert_eq!(stream.pull().unwrap().text(), "a b");
    assert!(!stream.has_more());
}

#[test]
fn test_invalid_utf8_block_does_not_stop_stream() {
    let corpus: &[u8] =
        b"<text>\ncaf\xe9\tcafe\tNN\t1\t0\tROOT\n</text>\n<text>\nok\tok\tUH\t1\t0\tROOT\n</text>\n";
    let documents: Vec<_> = SentenceStream::from_reader(corpus, ConllParser::wacky())
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(documents.len(), 2);
    assert_eq!(documents[0].text(), "caf\u{FFFD}");
    assert_eq!(documents[1].text(), "ok");
}

#[cfg(feature = "serde")]
#[test]
fn test_document_serializes_to_json() {
    let corpus = "<text>\n<s>\nHi\thi\tUH\t1\t0\tROOT\n</s>\n</text>\n";
    let mut stream = SentenceStream::from_reader(corpus.as_bytes(), ConllParser::wacky()).unwrap();
    let document = stream.pull().unwrap();

    let json = serde_json::to_value(&document).unwrap();
    assert_eq!(json["block"], 0);
    assert_eq!(json["tree"]["nodes"][0]["word"], "Hi");
    assert_eq!(json["tree"]["nodes"][0]["head"], serde_json::Value::Null);
}

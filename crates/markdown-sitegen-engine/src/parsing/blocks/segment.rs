use super::types::Block;

/// Splits a document into [`Block`]s on blank lines.
///
/// Consecutive blank lines collapse into one boundary, each chunk is trimmed,
/// and chunks that are empty after trimming are dropped. Order is preserved.
pub fn segment(document: &str) -> Vec<Block<'_>> {
    let mut segmenter = BlockSegmenter::new(document);
    for line in document.split_inclusive('\n') {
        segmenter.push(line);
    }
    segmenter.finish()
}

/// Line-at-a-time segmentation state.
///
/// Tracks the byte range of the open chunk so blocks borrow straight from the
/// document.
pub struct BlockSegmenter<'a> {
    document: &'a str,
    offset: usize,
    open: Option<(usize, usize)>,
    out: Vec<Block<'a>>,
}

impl<'a> BlockSegmenter<'a> {
    pub fn new(document: &'a str) -> Self {
        Self {
            document,
            offset: 0,
            open: None,
            out: vec![],
        }
    }

    /// Feeds the next line, including its terminator. Lines must be pushed in
    /// document order and cover it contiguously.
    pub fn push(&mut self, line: &str) {
        let start = self.offset;
        self.offset += line.len();

        if line.trim().is_empty() {
            self.flush();
            return;
        }

        match &mut self.open {
            Some((_, end)) => *end = self.offset,
            None => self.open = Some((start, self.offset)),
        }
    }

    pub fn finish(mut self) -> Vec<Block<'a>> {
        // EOF flush
        self.flush();
        self.out
    }

    fn flush(&mut self) {
        if let Some((start, end)) = self.open.take() {
            let text = self.document[start..end].trim();
            if !text.is_empty() {
                self.out.push(Block::new(text));
            }
        }
    }
}

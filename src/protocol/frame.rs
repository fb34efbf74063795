/// Splits raw transport chunks into complete event lines.
///
/// Chunks arrive with no alignment to line boundaries, so the trailing
/// incomplete fragment is carried between calls. Byte-oriented: a multi-byte
/// UTF-8 sequence split across chunks is reassembled intact, because UTF-8
/// continuation bytes can never equal `\n`.
#[derive(Debug, Default)]
pub struct FrameDecoder {
    pending: Vec<u8>,
}

impl FrameDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one chunk, yielding every line completed by it.
    ///
    /// A terminator landing exactly on a chunk boundary produces no spurious
    /// empty line; a chunk containing several terminators yields several
    /// lines. Lines that fail UTF-8 validation are forwarded lossily — the
    /// delta extractor is responsible for discarding what it can't parse.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        self.pending.extend_from_slice(chunk);

        let mut lines = Vec::new();
        let mut start = 0;
        while let Some(pos) = self.pending[start..].iter().position(|&b| b == b'\n') {
            let end = start + pos;
            let mut line = &self.pending[start..end];
            if line.last() == Some(&b'\r') {
                line = &line[..line.len() - 1];
            }
            lines.push(String::from_utf8_lossy(line).into_owned());
            start = end + 1;
        }
        self.pending.drain(..start);
        lines
    }

    /// Number of buffered bytes awaiting a terminator.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Discard any partial line. Must be called at session start so a prior
    /// session's trailing fragment can't leak into the next stream.
    pub fn reset(&mut self) {
        self.pending.clear();
    }
}

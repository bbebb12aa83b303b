//! Minimal scanner over TypeScript source text.
//!
//! Yields only bytes that are code: string literals, template literal text
//! and comments are skipped, while `${ ... }` interpolations are scanned as
//! code. This is enough to match brackets and find
//! identifiers inside a decorator without a full parser.

/// Iterator over `(byte offset, byte)` pairs of code in `src[start..end]`.
pub(crate) struct CodeBytes<'a> {
    bytes: &'a [u8],
    pos: usize,
    end: usize,
    /// Brace depth inside each open template interpolation, innermost last.
    interpolations: Vec<usize>,
}

impl<'a> CodeBytes<'a> {
    pub(crate) fn new(src: &'a str, start: usize, end: usize) -> Self {
        Self {
            bytes: src.as_bytes(),
            pos: start,
            end: end.min(src.len()),
            interpolations: Vec::new(),
        }
    }

    fn skip_quoted(&mut self, quote: u8) {
        self.pos += 1;
        while self.pos < self.end {
            match self.bytes[self.pos] {
                b'\\' => self.pos += 2,
                b if b == quote => {
                    self.pos += 1;
                    return;
                }
                _ => self.pos += 1,
            }
        }
    }

    /// Skips template text up to the closing backtick or the next `${`.
    fn skip_template(&mut self) {
        while self.pos < self.end {
            match self.bytes[self.pos] {
                b'\\' => self.pos += 2,
                b'`' => {
                    self.pos += 1;
                    return;
                }
                b'$' if self.bytes.get(self.pos + 1) == Some(&b'{') => {
                    self.pos += 2;
                    self.interpolations.push(0);
                    return;
                }
                _ => self.pos += 1,
            }
        }
    }

    fn skip_line_comment(&mut self) {
        while self.pos < self.end && self.bytes[self.pos] != b'\n' {
            self.pos += 1;
        }
    }

    fn skip_block_comment(&mut self) {
        self.pos += 2;
        while self.pos < self.end {
            if self.bytes[self.pos] == b'*' && self.bytes.get(self.pos + 1) == Some(&b'/') {
                self.pos += 2;
                return;
            }
            self.pos += 1;
        }
    }
}

impl Iterator for CodeBytes<'_> {
    type Item = (usize, u8);

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.end {
            let byte = self.bytes[self.pos];
            if let Some(depth) = self.interpolations.last_mut() {
                match byte {
                    b'{' => *depth += 1,
                    b'}' if *depth == 0 => {
                        self.interpolations.pop();
                        self.pos += 1;
                        self.skip_template();
                        continue;
                    }
                    b'}' => *depth -= 1,
                    _ => {}
                }
            }
            match (byte, self.bytes.get(self.pos + 1)) {
                (b'"' | b'\'', _) => self.skip_quoted(byte),
                (b'`', _) => {
                    self.pos += 1;
                    self.skip_template();
                }
                (b'/', Some(b'/')) => self.skip_line_comment(),
                (b'/', Some(b'*')) => self.skip_block_comment(),
                _ => {
                    let pos = self.pos;
                    self.pos += 1;
                    return Some((pos, byte));
                }
            }
        }
        None
    }
}

/// Offset of the bracket closing the one at `open`, or `None` when the
/// region is unbalanced.
pub(crate) fn matching_bracket(src: &str, open: usize) -> Option<usize> {
    let mut expected: Vec<u8> = Vec::new();

    for (pos, byte) in CodeBytes::new(src, open, src.len()) {
        match byte {
            b'(' => expected.push(b')'),
            b'[' => expected.push(b']'),
            b'{' => expected.push(b'}'),
            b')' | b']' | b'}' => {
                if expected.pop() != Some(byte) {
                    return None;
                }
                if expected.is_empty() {
                    return Some(pos);
                }
            }
            _ => {}
        }
    }

    None
}

/// Offsets of every code occurrence of `word` that is not part of a longer
/// identifier.
pub(crate) fn find_word(src: &str, start: usize, end: usize, word: &str) -> Vec<usize> {
    let bytes = src.as_bytes();
    let first = word.as_bytes()[0];

    CodeBytes::new(src, start, end)
        .filter(|&(pos, byte)| {
            byte == first
                && src[pos..].starts_with(word)
                && !(pos > 0 && is_ident(bytes[pos - 1]) && !word.starts_with('@'))
                && !bytes.get(pos + word.len()).copied().is_some_and(is_ident)
        })
        .map(|(pos, _)| pos)
        .collect()
}

/// Offset of the first `word` at bracket depth zero of `src[start..end]`.
pub(crate) fn find_word_at_depth_zero(
    src: &str,
    start: usize,
    end: usize,
    word: &str,
) -> Option<usize> {
    let mut depth = 0usize;
    for (pos, byte) in CodeBytes::new(src, start, end) {
        match byte {
            b'(' | b'[' | b'{' => depth += 1,
            b')' | b']' | b'}' => depth = depth.saturating_sub(1),
            _ if depth == 0 && find_word(src, pos, pos + word.len(), word).first() == Some(&pos) => {
                return Some(pos);
            }
            _ => {}
        }
    }
    None
}

/// Offset of the first non-whitespace byte at or after `pos`.
pub(crate) fn skip_whitespace(src: &str, pos: usize) -> usize {
    src[pos..]
        .find(|c: char| !c.is_whitespace())
        .map_or(src.len(), |offset| pos + offset)
}

fn is_ident(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'$'
}

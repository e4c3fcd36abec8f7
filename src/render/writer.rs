//! Indentation-aware line writer.

const INDENT: &str = "    ";

#[derive(Debug, Default)]
pub struct CodeWriter {
    buffer: String,
    depth: usize,
}

impl CodeWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        if !text.is_empty() {
            for _ in 0..self.depth {
                self.buffer.push_str(INDENT);
            }
            self.buffer.push_str(text);
        }
        self.buffer.push('\n');
    }

    /// Writes each line of a multi-line snippet at the current depth.
    pub fn lines(&mut self, snippet: &str) {
        for text in snippet.lines() {
            self.line(text);
        }
    }

    pub fn blank(&mut self) {
        self.buffer.push('\n');
    }

    pub fn open(&mut self) {
        self.line("{");
        self.depth += 1;
    }

    pub fn close(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.line("}");
    }

    pub fn finish(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocks_indent_their_contents() {
        let mut writer = CodeWriter::new();
        writer.line("class A");
        writer.open();
        writer.lines("int x;\nint y;");
        writer.blank();
        writer.close();
        assert_eq!(writer.finish(), "class A\n{\n    int x;\n    int y;\n\n}\n");
    }
}

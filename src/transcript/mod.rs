// Captured lesson output

/// Collects everything the lessons print, tagged with the lesson that printed it
#[derive(Debug, Clone)]
pub struct Transcript {
    pub lines: Vec<TranscriptLine>,
}

impl Transcript {
    pub fn new() -> Self {
        Transcript { lines: Vec::new() }
    }

    /// Print without newline
    pub fn print(&mut self, text: impl Into<String>, lesson: &'static str) {
        let text = text.into();
        if let Some(last) = self.lines.last_mut() {
            if last.lesson == lesson && !last.text.ends_with('\n') {
                last.text.push_str(&text);
                return;
            }
        }
        self.lines.push(TranscriptLine { text, lesson });
    }

    /// Print followed by a newline
    pub fn println(&mut self, text: impl Into<String>, lesson: &'static str) {
        let mut text = text.into();
        text.push('\n');
        self.print(text, lesson);
    }

    /// Get all lines as a vector of strings
    pub fn get_output(&self) -> Vec<String> {
        split_lines(self.lines.iter())
    }

    /// Lines printed by a single lesson
    pub fn lines_for(&self, lesson: &str) -> Vec<String> {
        split_lines(self.lines.iter().filter(|tl| tl.lesson == lesson))
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

fn split_lines<'a>(lines: impl Iterator<Item = &'a TranscriptLine>) -> Vec<String> {
    lines
        .flat_map(|tl| {
            let mut result: Vec<String> = tl.text.split('\n').map(|s| s.to_string()).collect();
            // Remove trailing empty string if text ended with newline
            if result.last().is_some_and(|s| s.is_empty()) {
                result.pop();
            }
            result
        })
        .collect()
}

/// A chunk of output with the lesson that produced it
#[derive(Debug, Clone)]
pub struct TranscriptLine {
    pub text: String,
    pub lesson: &'static str,
}

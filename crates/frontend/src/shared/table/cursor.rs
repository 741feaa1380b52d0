/// Cursors of the pages already visited, oldest first.
///
/// The top entry is the cursor that loaded the current page; the page before
/// it was loaded with the entry below (or with no cursor when the stack holds
/// a single entry).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CursorHistory {
    stack: Vec<String>,
}

impl CursorHistory {
    pub fn push(&mut self, cursor: impl Into<String>) {
        self.stack.push(cursor.into());
    }

    pub fn pop(&mut self) -> Option<String> {
        self.stack.pop()
    }

    pub fn top(&self) -> Option<&str> {
        self.stack.last().map(String::as_str)
    }

    /// Cursor of the previous page: `None` when there is no previous page,
    /// `Some(None)` when the previous page is the first one.
    pub fn previous(&self) -> Option<Option<String>> {
        match self.stack.len() {
            0 => None,
            n => Some(n.checked_sub(2).map(|i| self.stack[i].clone())),
        }
    }

    pub fn clear(&mut self) {
        self.stack.clear();
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

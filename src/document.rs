//! Editable text buffer with caret and selection state.
//!
//! A [`Document`] backs every text-editing control. All positions are
//! character offsets (Unicode scalar values), never byte offsets, and every
//! operation clamps out-of-range input instead of failing: boundary key
//! repeats must never produce an error.
//!
//! Invariants held after every operation:
//!
//! - `0 <= selection_begin <= selection_end <= len`
//! - `0 <= caret <= len`

use unicode_segmentation::UnicodeSegmentation;

/// Maximum number of undo steps kept per document.
const HISTORY_LIMIT: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Snapshot {
    text: String,
    caret: usize,
}

/// Text buffer plus caret/selection state machine.
///
/// The effective state is the combination of caret position, selection range
/// and the selection-gesture flag. While a gesture is active (between
/// [`begin_selection`](Self::begin_selection) and
/// [`end_selection`](Self::end_selection)) the selection spans from the
/// gesture anchor to the caret. Outside a gesture, caret moves leave the
/// selection range untouched.
#[derive(Debug, Clone, Default)]
pub struct Document {
    text: String,
    caret: usize,
    selection_begin: usize,
    selection_end: usize,
    anchor: usize,
    selecting: bool,
    undo: Vec<Snapshot>,
    redo: Vec<Snapshot>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document holding `text`, caret at 0 (builder).
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// The buffer contents.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the buffer in characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Caret offset in characters.
    pub fn caret_position(&self) -> usize {
        self.caret
    }

    /// Start of the selection range (inclusive).
    pub fn selection_begin(&self) -> usize {
        self.selection_begin
    }

    /// End of the selection range (exclusive).
    pub fn selection_end(&self) -> usize {
        self.selection_end
    }

    /// Whether the selection range is non-empty.
    pub fn has_selection(&self) -> bool {
        self.selection_begin != self.selection_end
    }

    /// Whether a selection gesture is in progress.
    pub fn is_selecting(&self) -> bool {
        self.selecting
    }

    /// The selected characters.
    pub fn selected_text(&self) -> &str {
        let begin = self.byte_offset(self.selection_begin);
        let end = self.byte_offset(self.selection_end);
        &self.text[begin..end]
    }

    /// The text before the caret. Used to measure the caret's x offset.
    pub fn text_before_caret(&self) -> &str {
        &self.text[..self.byte_offset(self.caret)]
    }

    /// Whether [`undo`](Self::undo) would change the document.
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// Whether [`redo`](Self::redo) would change the document.
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    // -----------------------------------------------------------------------
    // Editing
    // -----------------------------------------------------------------------

    /// Replace the whole buffer.
    ///
    /// The caret returns to 0, the selection collapses to `[0, 0)`, any
    /// selection gesture ends and the undo history is dropped.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.caret = 0;
        self.anchor = 0;
        self.selection_begin = 0;
        self.selection_end = 0;
        self.selecting = false;
        self.undo.clear();
        self.redo.clear();
    }

    /// Replace the selection (if any) with `text` and advance the caret past it.
    pub fn insert_text(&mut self, text: &str) {
        if text.is_empty() && !self.has_selection() {
            return;
        }
        self.record();
        if self.has_selection() {
            self.remove_range(self.selection_begin, self.selection_end);
            self.caret = self.selection_begin;
        }
        let at = self.byte_offset(self.caret);
        self.text.insert_str(at, text);
        self.caret += text.chars().count();
        self.selecting = false;
        self.collapse_selection();
    }

    /// Replace the selection (if any) with a single character.
    pub fn insert_char(&mut self, ch: char) {
        let mut buf = [0u8; 4];
        self.insert_text(ch.encode_utf8(&mut buf));
    }

    /// Delete the selected range and move the caret to its start.
    ///
    /// No-op when the selection is empty.
    pub fn delete_selection(&mut self) {
        if !self.has_selection() {
            return;
        }
        self.record();
        self.remove_range(self.selection_begin, self.selection_end);
        self.caret = self.selection_begin;
        self.collapse_selection();
    }

    /// Backspace: delete the selection, or the character before the caret.
    pub fn delete_char_before_caret(&mut self) {
        if self.has_selection() {
            self.delete_selection();
            return;
        }
        if self.caret == 0 {
            return;
        }
        self.record();
        self.remove_range(self.caret - 1, self.caret);
        self.caret -= 1;
        self.collapse_selection();
    }

    /// Delete forward: delete the selection, or the character after the caret.
    pub fn delete_char_after_caret(&mut self) {
        if self.has_selection() {
            self.delete_selection();
            return;
        }
        if self.caret >= self.len() {
            return;
        }
        self.record();
        self.remove_range(self.caret, self.caret + 1);
        self.collapse_selection();
    }

    /// Restore the state before the last edit. Returns `false` if there is none.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.undo.pop() else {
            return false;
        };
        self.redo.push(self.snapshot());
        self.restore(previous);
        true
    }

    /// Re-apply the last undone edit. Returns `false` if there is none.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.redo.pop() else {
            return false;
        };
        self.undo.push(self.snapshot());
        self.restore(next);
        true
    }

    // -----------------------------------------------------------------------
    // Caret movement
    // -----------------------------------------------------------------------

    /// Move the caret one character left, stopping at 0.
    pub fn move_caret_left(&mut self) {
        self.caret = self.caret.saturating_sub(1);
        self.sync_selection_from_caret();
    }

    /// Move the caret one character right, stopping at the end of the buffer.
    pub fn move_caret_right(&mut self) {
        self.caret = (self.caret + 1).min(self.len());
        self.sync_selection_from_caret();
    }

    /// Move the caret to the start of the buffer.
    pub fn move_caret_home(&mut self) {
        self.caret = 0;
        self.sync_selection_from_caret();
    }

    /// Move the caret to the end of the buffer.
    pub fn move_caret_end(&mut self) {
        self.caret = self.len();
        self.sync_selection_from_caret();
    }

    /// Move the caret to the start of the next word, or the end of the buffer.
    pub fn move_caret_next_word(&mut self) {
        let caret = self.caret;
        self.caret = self
            .word_starts()
            .into_iter()
            .find(|&start| start > caret)
            .unwrap_or_else(|| self.len());
        self.sync_selection_from_caret();
    }

    /// Move the caret to the start of the current or previous word.
    pub fn move_caret_previous_word(&mut self) {
        let caret = self.caret;
        self.caret = self
            .word_starts()
            .into_iter()
            .rev()
            .find(|&start| start < caret)
            .unwrap_or(0);
        self.sync_selection_from_caret();
    }

    /// Place the caret, clamped to the buffer.
    pub fn set_caret_position(&mut self, position: usize) {
        self.caret = position.min(self.len());
        self.sync_selection_from_caret();
    }

    // -----------------------------------------------------------------------
    // Selection
    // -----------------------------------------------------------------------

    /// Start a selection gesture anchored at the caret.
    pub fn begin_selection(&mut self) {
        self.begin_selection_at(self.caret);
    }

    /// Start a selection gesture anchored at `anchor` (clamped).
    ///
    /// Used to keep extending an existing selection from its far edge.
    pub fn begin_selection_at(&mut self, anchor: usize) {
        self.anchor = anchor.min(self.len());
        self.selecting = true;
        self.sync_selection_from_caret();
    }

    /// Finish the selection gesture, freezing the current range.
    pub fn end_selection(&mut self) {
        self.selecting = false;
    }

    /// Select `[begin, end)`. Arguments may come in either order and are
    /// clamped to the buffer; the caret moves to the end of the range.
    pub fn set_selection(&mut self, begin: usize, end: usize) {
        let len = self.len();
        let lo = begin.min(end).min(len);
        let hi = begin.max(end).min(len);
        self.selection_begin = lo;
        self.selection_end = hi;
        self.anchor = lo;
        self.caret = hi;
    }

    /// Select the whole buffer.
    pub fn select_all(&mut self) {
        self.set_selection(0, self.len());
    }

    /// Collapse the selection at the caret.
    pub fn clear_selection(&mut self) {
        self.collapse_selection();
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    /// Byte offset of the character at `index`, or the buffer end.
    fn byte_offset(&self, index: usize) -> usize {
        self.text
            .char_indices()
            .nth(index)
            .map(|(byte, _)| byte)
            .unwrap_or(self.text.len())
    }

    /// Remove characters `[begin, end)` without touching caret or history.
    fn remove_range(&mut self, begin: usize, end: usize) {
        let begin = self.byte_offset(begin);
        let end = self.byte_offset(end);
        self.text.replace_range(begin..end, "");
    }

    fn collapse_selection(&mut self) {
        self.selection_begin = self.caret;
        self.selection_end = self.caret;
        self.anchor = self.caret;
    }

    /// While a gesture is active the selection spans anchor..caret.
    fn sync_selection_from_caret(&mut self) {
        if self.selecting {
            self.selection_begin = self.anchor.min(self.caret);
            self.selection_end = self.anchor.max(self.caret);
        }
    }

    /// Character offsets where words start.
    fn word_starts(&self) -> Vec<usize> {
        let mut starts = Vec::new();
        let mut chars_seen = 0;
        let mut last_byte = 0;
        for (byte, _) in self.text.unicode_word_indices() {
            chars_seen += self.text[last_byte..byte].chars().count();
            last_byte = byte;
            starts.push(chars_seen);
        }
        starts
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot { text: self.text.clone(), caret: self.caret }
    }

    fn record(&mut self) {
        self.undo.push(self.snapshot());
        if self.undo.len() > HISTORY_LIMIT {
            self.undo.remove(0);
        }
        self.redo.clear();
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.text = snapshot.text;
        self.caret = snapshot.caret.min(self.len());
        self.selecting = false;
        self.collapse_selection();
    }
}

// ===========================================================================
// Tests
// ===========================================================================

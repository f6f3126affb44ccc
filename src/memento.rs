use crate::record::Calculation;

/// An independently-owned deep copy of the history sequence at a point in
/// time. `Calculation` is a plain owned value, so cloning the sequence is a
/// full deep copy; nothing in a memento aliases live state.
#[derive(Debug, Clone, PartialEq)]
pub struct Memento {
    state: Vec<Calculation>,
}

impl Memento {
    fn new(state: &[Calculation]) -> Self {
        Memento {
            state: state.to_vec(),
        }
    }

    fn into_state(self) -> Vec<Calculation> {
        self.state
    }
}

/// Caretaker for undo/redo: two bounded stacks of mementos.
///
/// Both stacks are capped at `max_depth`; once the undo stack is full the
/// oldest snapshot is dropped, mirroring the history store's oldest-first
/// eviction. The redo stack can never outgrow the undo stack's high-water
/// mark, but the same cap is applied for symmetry.
#[derive(Debug)]
pub struct Caretaker {
    undo: Vec<Memento>,
    redo: Vec<Memento>,
    max_depth: usize,
}

const DEFAULT_DEPTH: usize = 100;

impl Default for Caretaker {
    fn default() -> Self {
        Caretaker::new()
    }
}

impl Caretaker {
    pub fn new() -> Self {
        Caretaker::with_depth(DEFAULT_DEPTH)
    }

    pub fn with_depth(max_depth: usize) -> Self {
        Caretaker {
            undo: Vec::new(),
            redo: Vec::new(),
            max_depth,
        }
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    /// Record `state` as the newest undo point and invalidate any pending
    /// redo timeline.
    pub fn snapshot(&mut self, state: &[Calculation]) {
        push_bounded(&mut self.undo, Memento::new(state), self.max_depth);
        self.redo.clear();
    }

    /// Step back one snapshot. Returns `(state, true)` with the restored
    /// sequence, or `(current_state, false)` when there is nothing to undo.
    pub fn undo(&mut self, current_state: Vec<Calculation>) -> (Vec<Calculation>, bool) {
        match self.undo.pop() {
            Some(memento) => {
                push_bounded(&mut self.redo, Memento::new(&current_state), self.max_depth);
                (memento.into_state(), true)
            }
            None => (current_state, false),
        }
    }

    /// Step forward one snapshot; the mirror of `undo`.
    pub fn redo(&mut self, current_state: Vec<Calculation>) -> (Vec<Calculation>, bool) {
        match self.redo.pop() {
            Some(memento) => {
                push_bounded(&mut self.undo, Memento::new(&current_state), self.max_depth);
                (memento.into_state(), true)
            }
            None => (current_state, false),
        }
    }
}

fn push_bounded(stack: &mut Vec<Memento>, memento: Memento, max_depth: usize) {
    stack.push(memento);
    while stack.len() > max_depth {
        stack.remove(0);
    }
}

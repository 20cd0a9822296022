use log::trace;

/// A reversible operation over some target. Commands are plain data; this
/// pair of methods interprets them. Both return false when nothing was
/// mutated.
pub trait Command {
    type Target;

    fn apply(&self, target: &mut Self::Target) -> bool;

    fn revert(&self, target: &mut Self::Target) -> bool;
}

/// Bounded undo/redo history.
///
/// `current` is the next slot to execute: commands below it have been
/// applied, commands from it onward are the redo branch left behind by
/// undos. Executing a new command destroys that branch. When the stack is
/// at capacity with nothing undone, the oldest command is evicted to make
/// room.
#[derive(Debug)]
pub struct CommandStack<C: Command> {
    commands: Vec<C>,
    current: usize,
    capacity: usize,
}

impl<C: Command> CommandStack<C> {
    pub fn new(capacity: usize) -> CommandStack<C> {
        assert!(capacity > 1, "A command stack of capacity {} is unusable", capacity);
        CommandStack {
            commands: Vec::with_capacity(capacity),
            current: 0,
            capacity,
        }
    }

    /// Records the command and applies it to the target. Returns what
    /// `apply` returned.
    pub fn execute(&mut self, command: C, target: &mut C::Target) -> bool {
        if self.current < self.commands.len() {
            trace!(
                "Dropping {} undone command(s) behind the cursor",
                self.commands.len() - self.current
            );
            self.commands.truncate(self.current);
        } else if self.commands.len() == self.capacity {
            self.commands.remove(0);
            self.current -= 1;
        }
        self.commands.push(command);
        self.current += 1;
        self.commands[self.current - 1].apply(target)
    }

    /// Steps the cursor back and reverts the command under it. Does
    /// nothing when there is nothing to undo.
    pub fn undo(&mut self, target: &mut C::Target) -> bool {
        if self.commands.is_empty() || self.current == 0 {
            return false;
        }
        self.current -= 1;
        self.commands[self.current].revert(target);
        true
    }

    /// Re-applies the command at the cursor and steps past it. Does
    /// nothing when there is nothing to redo.
    pub fn redo(&mut self, target: &mut C::Target) -> bool {
        if self.commands.is_empty() || self.current == self.commands.len() {
            return false;
        }
        self.commands[self.current].apply(target);
        self.current += 1;
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.commands.is_empty() && self.current > 0
    }

    pub fn can_redo(&self) -> bool {
        self.current < self.commands.len()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
        self.current = 0;
    }

    pub fn is_full(&self) -> bool {
        self.commands.len() == self.capacity
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Adds to or subtracts from a running total. Reverting is exact, so
    /// the total doubles as a trace of which commands are in effect.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Add(i64);

    impl Command for Add {
        type Target = i64;

        fn apply(&self, target: &mut i64) -> bool {
            *target += self.0;
            true
        }

        fn revert(&self, target: &mut i64) -> bool {
            *target -= self.0;
            true
        }
    }

    #[test]
    fn test_execute_applies_in_order() {
        let mut stack = CommandStack::new(8);
        let mut total = 0;
        stack.execute(Add(1), &mut total);
        stack.execute(Add(2), &mut total);
        assert_eq!(total, 3);
        assert_eq!(stack.len(), 2);
        assert!(stack.can_undo());
        assert!(!stack.can_redo());
    }

    #[test]
    fn test_capacity_ring_evicts_the_oldest() {
        let mut stack = CommandStack::new(3);
        let mut total = 0;
        for value in [1, 10, 100, 1000] {
            stack.execute(Add(value), &mut total);
        }
        assert_eq!(stack.len(), 3);
        assert!(stack.is_full());
        assert!(!stack.can_redo());
        assert_eq!(total, 1111);
        // Only the newest three can be unwound; Add(1) fell off the ring
        while stack.undo(&mut total) {}
        assert_eq!(total, 1);
        assert!(!stack.can_undo());
    }

    #[test]
    fn test_new_command_discards_the_redo_branch() {
        let mut stack = CommandStack::new(8);
        let mut total = 0;
        stack.execute(Add(1), &mut total);
        stack.execute(Add(2), &mut total);
        stack.execute(Add(4), &mut total);
        assert!(stack.undo(&mut total));
        assert!(stack.undo(&mut total));
        assert_eq!(total, 1);
        assert!(stack.can_redo());

        stack.execute(Add(8), &mut total);
        assert_eq!(total, 9);
        assert_eq!(stack.len(), 2);
        assert!(!stack.can_redo());
        // The discarded Add(2) and Add(4) are gone for good
        assert!(!stack.redo(&mut total));
        assert_eq!(total, 9);
    }

    #[test]
    fn test_undo_and_redo_are_noops_at_the_boundaries() {
        let mut stack: CommandStack<Add> = CommandStack::new(4);
        let mut total = 0;
        assert!(!stack.undo(&mut total));
        assert!(!stack.redo(&mut total));
        assert_eq!(total, 0);

        stack.execute(Add(5), &mut total);
        assert!(!stack.redo(&mut total));
        assert!(stack.undo(&mut total));
        assert!(!stack.undo(&mut total));
        assert_eq!(total, 0);

        assert!(stack.redo(&mut total));
        assert_eq!(total, 5);
        assert!(!stack.redo(&mut total));
        assert_eq!(total, 5);
    }

    #[test]
    fn test_redo_replays_what_undo_unwound() {
        let mut stack = CommandStack::new(4);
        let mut total = 0;
        stack.execute(Add(3), &mut total);
        stack.execute(Add(7), &mut total);
        stack.undo(&mut total);
        stack.undo(&mut total);
        assert_eq!(total, 0);
        stack.redo(&mut total);
        stack.redo(&mut total);
        assert_eq!(total, 10);
    }

    #[test]
    fn test_clear_forgets_everything() {
        let mut stack = CommandStack::new(4);
        let mut total = 0;
        stack.execute(Add(3), &mut total);
        stack.execute(Add(7), &mut total);
        stack.clear();
        assert!(stack.is_empty());
        assert!(!stack.can_undo());
        assert!(!stack.can_redo());
        assert!(!stack.undo(&mut total));
        // Clearing the history does not touch the target
        assert_eq!(total, 10);
    }

    #[test]
    fn test_eviction_only_happens_with_nothing_undone() {
        let mut stack = CommandStack::new(3);
        let mut total = 0;
        for value in [1, 10, 100] {
            stack.execute(Add(value), &mut total);
        }
        stack.undo(&mut total);
        // The stack is at capacity but the branch truncation wins
        stack.execute(Add(1000), &mut total);
        assert_eq!(stack.len(), 3);
        assert_eq!(total, 1011);
        while stack.undo(&mut total) {}
        assert_eq!(total, 0);
    }

    #[test]
    #[should_panic]
    fn test_tiny_capacities_are_rejected() {
        CommandStack::<Add>::new(1);
    }
}

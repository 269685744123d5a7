use std::collections::VecDeque;

use compose_core::sequence::SequenceTable;

/// Feed `keys` through a compose loop over `table`, one keystroke at a time.
///
/// A complete sequence is replaced by its character. On a dead end the first
/// pending keystroke is emitted as typed and the rest are fed again, so a
/// later keystroke can still start a sequence. Pending keystrokes left at the
/// end of input are emitted as typed.
pub fn replay(table: &SequenceTable, keys: &str) -> String {
    let mut out = String::with_capacity(keys.len());
    let mut pending = String::new();
    let mut queue: VecDeque<char> = keys.chars().collect();

    while let Some(c) = queue.pop_front() {
        pending.push(c);
        if let Some(result) = table.resolve(&pending) {
            out.push_str(result);
            pending.clear();
        } else if !table.is_prefix_or_sequence(&pending) {
            let mut chars = pending.chars();
            if let Some(first) = chars.next() {
                out.push(first);
            }
            for rest in chars.rev() {
                queue.push_front(rest);
            }
            pending.clear();
        }
    }

    out.push_str(&pending);
    out
}

pub fn replay_cmd(keys: &str) {
    println!("{}", replay(SequenceTable::global(), keys));
}

use super::*;

#[test]
fn push_bumps_sequence_each_time() {
    let mut q = CommandQueue::default();
    q.push(EditorCommand::ZoomIn);
    q.push(EditorCommand::ZoomIn);
    // Identical commands still produce distinct sequence values, so a
    // reactive observer sees both.
    assert_eq!(q.seq, 2);
    assert_eq!(q.len(), 2);
}

#[test]
fn drain_returns_fifo_order_and_empties() {
    let mut q = CommandQueue::default();
    q.push(EditorCommand::ZoomIn);
    q.push(EditorCommand::DeleteSelection);
    q.push(EditorCommand::ZoomOut);
    let drained = q.drain();
    assert_eq!(
        drained,
        vec![EditorCommand::ZoomIn, EditorCommand::DeleteSelection, EditorCommand::ZoomOut]
    );
    assert!(q.is_empty());
}

#[test]
fn drain_preserves_sequence_counter() {
    let mut q = CommandQueue::default();
    q.push(EditorCommand::ZoomIn);
    q.drain();
    q.push(EditorCommand::ZoomOut);
    assert_eq!(q.seq, 2);
}

#[test]
fn edit_commands_carry_their_payload() {
    let mut q = CommandQueue::default();
    q.push(EditorCommand::EditItem { id: 41, edit: ItemEdit::Capacity(4) });
    match q.drain().pop() {
        Some(EditorCommand::EditItem { id, edit }) => {
            assert_eq!(id, 41);
            assert_eq!(edit, ItemEdit::Capacity(4));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

use futures::executor::block_on;

use super::*;

#[test]
fn task_completes_while_owner_lives() {
    let owner = Owner::new();
    let task = abort_on_cleanup(&owner, async { 7 });
    assert_eq!(block_on(task), Ok(7));
}

#[test]
fn owner_cleanup_aborts_pending_task() {
    let owner = Owner::new();
    let task = abort_on_cleanup(&owner, async { 7 });
    owner.cleanup();
    assert_eq!(block_on(task), Err(Aborted));
}

#[test]
fn aborted_task_never_runs_its_side_effects() {
    let owner = Owner::new();
    let ran = std::cell::Cell::new(false);
    let task = abort_on_cleanup(&owner, async { ran.set(true) });
    owner.cleanup();
    assert!(block_on(task).is_err());
    assert!(!ran.get());
}

#[test]
fn cleanup_of_one_owner_leaves_others_running() {
    let leaving = Owner::new();
    let staying = Owner::new();
    let dropped = abort_on_cleanup(&leaving, async { "left" });
    let kept = abort_on_cleanup(&staying, async { "stayed" });
    leaving.cleanup();
    assert_eq!(block_on(dropped), Err(Aborted));
    assert_eq!(block_on(kept), Ok("stayed"));
}

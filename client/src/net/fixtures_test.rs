use super::*;

#[test]
fn task_ids_are_unique() {
    let tasks = onboarding_tasks();
    let mut ids: Vec<_> = tasks.iter().map(|t| t.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), tasks.len());
}

#[test]
fn find_task_by_id() {
    assert_eq!(find_task("upload-id").map(|t| t.title), Some("Upload ID Proof"));
    assert!(find_task("missing").is_none());
}

#[test]
fn tasks_with_status_filters_or_passes_all() {
    let tasks = onboarding_tasks();
    assert_eq!(tasks_with_status(&tasks, None).len(), tasks.len());
    let done = tasks_with_status(&tasks, Some(TaskStatus::Completed));
    assert!(!done.is_empty());
    assert!(done.iter().all(|t| t.status == TaskStatus::Completed));
}

#[test]
fn every_required_document_is_required() {
    let docs = required_documents();
    assert_eq!(docs.len(), 6);
    assert!(docs.iter().all(|d| d.required));
}

#[test]
fn holidays_in_month_filters_by_iso_month() {
    let all = holidays();
    let january: Vec<_> = holidays_in_month(&all, 1).into_iter().map(|h| h.name).collect();
    assert_eq!(january, vec!["New Year's Day", "Republic Day"]);
    assert!(holidays_in_month(&all, 2).is_empty());
    assert!(holidays_in_month(&all, 13).is_empty());
}

#[test]
fn policies_in_category_filters() {
    let all = policies();
    let hr = policies_in_category(&all, Some(PolicyCategory::Hr));
    assert_eq!(hr.iter().map(|p| p.id).collect::<Vec<_>>(), vec!["pol3", "pol4"]);
    assert_eq!(policies_in_category(&all, None).len(), all.len());
}

#[test]
fn employee_progress_is_a_percentage() {
    assert!(employees().iter().all(|e| e.progress <= 100));
}

#[test]
fn templates_have_tasks() {
    assert!(task_templates().iter().all(|t| !t.tasks.is_empty()));
}

#[test]
fn notifications_start_with_two_unread() {
    let all = notifications();
    assert_eq!(all.len(), 4);
    assert_eq!(all.iter().filter(|n| !n.read).count(), 2);
}

use super::*;

fn task(id: &'static str, status: TaskStatus, link: Option<&'static str>) -> OnboardingTask {
    OnboardingTask {
        id,
        title: "t",
        description: "d",
        status,
        due_date: None,
        days_overdue: None,
        link,
    }
}

fn employee(progress: u32) -> EmployeeSummary {
    EmployeeSummary {
        id: "e",
        name: "n",
        email: "e@x.com",
        department: "Engineering",
        start_date: "2025-05-01",
        progress,
    }
}

// =============================================================
// TaskStatus
// =============================================================

#[test]
fn task_status_labels() {
    assert_eq!(TaskStatus::NotStarted.label(), "Not Started");
    assert_eq!(TaskStatus::InProgress.label(), "In Progress");
    assert_eq!(TaskStatus::Completed.label(), "Completed");
    assert_eq!(TaskStatus::Overdue.label(), "Overdue");
}

#[test]
fn task_status_action_labels() {
    assert_eq!(TaskStatus::NotStarted.action_label(), "Start Task");
    assert_eq!(TaskStatus::InProgress.action_label(), "Continue");
    assert_eq!(TaskStatus::Completed.action_label(), "View Details");
    assert_eq!(TaskStatus::Overdue.action_label(), "Complete Now");
}

#[test]
fn task_status_slug_parses_back() {
    for status in TaskStatus::ALL {
        assert_eq!(TaskStatus::from_slug(status.slug()), Some(status));
    }
    assert_eq!(TaskStatus::from_slug("done"), None);
}

// =============================================================
// OnboardingTask / TaskStats
// =============================================================

#[test]
fn action_path_prefers_explicit_link() {
    assert_eq!(task("a", TaskStatus::NotStarted, Some("/employee/profile")).action_path(), "/employee/profile");
    assert_eq!(task("a", TaskStatus::NotStarted, None).action_path(), "/employee/tasks/a");
}

#[test]
fn task_stats_counts_by_status() {
    let tasks = [
        task("a", TaskStatus::Completed, None),
        task("b", TaskStatus::Completed, None),
        task("c", TaskStatus::InProgress, None),
        task("d", TaskStatus::Overdue, None),
        task("e", TaskStatus::NotStarted, None),
    ];
    let stats = TaskStats::from_tasks(&tasks);
    assert_eq!(stats, TaskStats { total: 5, completed: 2, in_progress: 1, pending: 2 });
    assert_eq!(stats.percent_complete(), 40);
}

#[test]
fn task_stats_empty_is_zero_percent() {
    assert_eq!(TaskStats::from_tasks(&[]).percent_complete(), 0);
}

// =============================================================
// Holiday
// =============================================================

#[test]
fn holiday_month_parses_iso_date() {
    let h = Holiday { id: "h", name: "n", date: "2025-08-15", description: "d", kind: HolidayKind::National };
    assert_eq!(h.month(), Some(8));
    let bad = Holiday { date: "15/08/2025", ..h.clone() };
    assert_eq!(bad.month(), None);
    let out_of_range = Holiday { date: "2025-13-01", ..h };
    assert_eq!(out_of_range.month(), None);
}

// =============================================================
// OnboardingReport
// =============================================================

#[test]
fn report_buckets_and_average() {
    let report = OnboardingReport::from_employees(&[employee(100), employee(0), employee(50), employee(30)]);
    assert_eq!(report.total, 4);
    assert_eq!(report.completed, 1);
    assert_eq!(report.not_started, 1);
    assert_eq!(report.in_progress, 2);
    assert_eq!(report.average_progress, 45);
}

#[test]
fn report_of_nobody_is_empty() {
    assert_eq!(OnboardingReport::from_employees(&[]), OnboardingReport::default());
}

//! Onboarding record types rendered by pages.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TaskStatus {
    NotStarted,
    InProgress,
    Completed,
    Overdue,
}

impl TaskStatus {
    pub const ALL: [Self; 4] = [Self::NotStarted, Self::InProgress, Self::Completed, Self::Overdue];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Overdue => "Overdue",
        }
    }

    /// Button text on a task card.
    #[must_use]
    pub fn action_label(self) -> &'static str {
        match self {
            Self::NotStarted => "Start Task",
            Self::InProgress => "Continue",
            Self::Completed => "View Details",
            Self::Overdue => "Complete Now",
        }
    }

    /// CSS modifier for the status badge.
    #[must_use]
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::NotStarted => "badge badge--neutral",
            Self::InProgress => "badge badge--info",
            Self::Completed => "badge badge--success",
            Self::Overdue => "badge badge--danger",
        }
    }

    /// Parse the `?status=` filter value used by the task list.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "not_started" => Some(Self::NotStarted),
            "in_progress" => Some(Self::InProgress),
            "completed" => Some(Self::Completed),
            "overdue" => Some(Self::Overdue),
            _ => None,
        }
    }

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Overdue => "overdue",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OnboardingTask {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub status: TaskStatus,
    pub due_date: Option<&'static str>,
    pub days_overdue: Option<u32>,
    /// Page that completes the task, when it is not the task's own detail page.
    pub link: Option<&'static str>,
}

impl OnboardingTask {
    /// Where the task card's action button navigates.
    #[must_use]
    pub fn action_path(&self) -> String {
        self.link.map_or_else(|| format!("/employee/tasks/{}", self.id), str::to_owned)
    }
}

/// Counts shown in the dashboard progress card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub pending: usize,
}

impl TaskStats {
    #[must_use]
    pub fn from_tasks(tasks: &[OnboardingTask]) -> Self {
        let count = |status: TaskStatus| tasks.iter().filter(|t| t.status == status).count();
        let completed = count(TaskStatus::Completed);
        let in_progress = count(TaskStatus::InProgress);
        Self {
            total: tasks.len(),
            completed,
            in_progress,
            pending: tasks.len() - completed - in_progress,
        }
    }

    /// Completion percentage, rounded down; zero for an empty list.
    #[must_use]
    pub fn percent_complete(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        u32::try_from(self.completed * 100 / self.total).unwrap_or(100)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequiredDocument {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentStatus {
    Pending,
    Approved,
    Rejected,
}

impl DocumentStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending Review",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadedDocument {
    pub id: String,
    /// Which required document this fulfils.
    pub kind: String,
    pub file_name: String,
    pub file_size: String,
    pub status: DocumentStatus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HolidayKind {
    National,
    Regional,
    Company,
}

impl HolidayKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::National => "National",
            Self::Regional => "Regional",
            Self::Company => "Company",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Holiday {
    pub id: &'static str,
    pub name: &'static str,
    /// ISO `YYYY-MM-DD`.
    pub date: &'static str,
    pub description: &'static str,
    pub kind: HolidayKind,
}

impl Holiday {
    /// Calendar month (1-12) parsed from the ISO date.
    #[must_use]
    pub fn month(&self) -> Option<u32> {
        self.date.get(5..7)?.parse().ok().filter(|m| (1..=12).contains(m))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OfficeLocation {
    pub id: &'static str,
    pub name: &'static str,
    pub address: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolicyCategory {
    General,
    It,
    Hr,
}

impl PolicyCategory {
    pub const ALL: [Self; 3] = [Self::General, Self::It, Self::Hr];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::It => "IT",
            Self::Hr => "HR",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Policy {
    pub id: &'static str,
    pub title: &'static str,
    pub category: PolicyCategory,
    pub summary: &'static str,
    pub updated: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmployeeSummary {
    pub id: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub department: &'static str,
    pub start_date: &'static str,
    /// Onboarding completion, 0-100.
    pub progress: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub department: &'static str,
    pub tasks: &'static [&'static str],
}

/// Navbar notification. `read` flips locally when the user opens it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: &'static str,
    pub title: &'static str,
    pub message: &'static str,
    pub date: &'static str,
    pub read: bool,
}

/// Aggregates for the HR reports page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OnboardingReport {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub not_started: usize,
    pub average_progress: u32,
}

impl OnboardingReport {
    #[must_use]
    pub fn from_employees(employees: &[EmployeeSummary]) -> Self {
        let completed = employees.iter().filter(|e| e.progress >= 100).count();
        let not_started = employees.iter().filter(|e| e.progress == 0).count();
        let sum: u32 = employees.iter().map(|e| e.progress.min(100)).sum();
        let average_progress = u32::try_from(employees.len())
            .ok()
            .filter(|n| *n > 0)
            .map_or(0, |n| sum / n);
        Self {
            total: employees.len(),
            completed,
            in_progress: employees.len() - completed - not_started,
            not_started,
            average_progress,
        }
    }
}

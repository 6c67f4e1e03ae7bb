//! Hard-coded onboarding data.
//!
//! Every collection is built fresh per call so pages can own and filter
//! their copy in local signals.

#[cfg(test)]
#[path = "fixtures_test.rs"]
mod fixtures_test;

use super::types::{
    EmployeeSummary, Holiday, HolidayKind, Notification, OfficeLocation, OnboardingTask, Policy,
    PolicyCategory, RequiredDocument, TaskStatus, TaskTemplate,
};

/// Tasks assigned to the demo employee.
#[must_use]
pub fn onboarding_tasks() -> Vec<OnboardingTask> {
    vec![
        OnboardingTask {
            id: "profile",
            title: "Complete Personal Information Form",
            description: "Fill out your basic personal information including contact details and emergency contacts.",
            status: TaskStatus::InProgress,
            due_date: Some("2025-05-20"),
            days_overdue: None,
            link: Some("/employee/profile"),
        },
        OnboardingTask {
            id: "upload-id",
            title: "Upload ID Proof",
            description: "Upload a scanned copy or clear photograph of your government-issued ID card.",
            status: TaskStatus::NotStarted,
            due_date: Some("2025-05-18"),
            days_overdue: None,
            link: Some("/employee/documents"),
        },
        OnboardingTask {
            id: "company-policies",
            title: "Review Company Policies",
            description: "Read and acknowledge the company policies and code of conduct.",
            status: TaskStatus::NotStarted,
            due_date: Some("2025-05-25"),
            days_overdue: None,
            link: Some("/company-policies"),
        },
        OnboardingTask {
            id: "intro",
            title: "Introduction to Tech Mahindra",
            description: "Learn about Tech Mahindra's history, culture, and values.",
            status: TaskStatus::Completed,
            due_date: Some("2025-05-10"),
            days_overdue: None,
            link: None,
        },
        OnboardingTask {
            id: "bank-details",
            title: "Submit Bank Details",
            description: "Provide your bank account details for salary processing.",
            status: TaskStatus::Overdue,
            due_date: Some("2025-05-05"),
            days_overdue: Some(3),
            link: None,
        },
        OnboardingTask {
            id: "it-security",
            title: "IT Security Fundamentals",
            description: "Learn essential IT security practices and protocols.",
            status: TaskStatus::Completed,
            due_date: Some("2025-05-08"),
            days_overdue: None,
            link: None,
        },
    ]
}

/// Look up one task by id.
#[must_use]
pub fn find_task(id: &str) -> Option<OnboardingTask> {
    onboarding_tasks().into_iter().find(|t| t.id == id)
}

/// Tasks with `status`, or all tasks when `status` is `None`.
#[must_use]
pub fn tasks_with_status(tasks: &[OnboardingTask], status: Option<TaskStatus>) -> Vec<OnboardingTask> {
    tasks
        .iter()
        .filter(|t| status.is_none_or(|s| t.status == s))
        .cloned()
        .collect()
}

#[must_use]
pub fn required_documents() -> Vec<RequiredDocument> {
    [
        ("doc-1", "ID Card", "Upload a scanned copy of your government-issued ID card"),
        ("doc-2", "Birth Certificate", "Upload a copy of your birth certificate"),
        ("doc-3", "Aadhaar Card", "Upload a copy of your Aadhaar card"),
        ("doc-4", "PAN Card", "Upload a copy of your PAN card"),
        ("doc-5", "Resume", "Upload your latest resume"),
        ("doc-6", "Degree Certificates", "Upload your degree certificates (combined in one PDF if possible)"),
    ]
    .into_iter()
    .map(|(id, name, description)| RequiredDocument { id, name, description, required: true })
    .collect()
}

#[must_use]
pub fn holidays() -> Vec<Holiday> {
    use HolidayKind::{Company, National};
    vec![
        Holiday { id: "h1", name: "New Year's Day", date: "2025-01-01", description: "The first day of the year in the Gregorian calendar.", kind: National },
        Holiday { id: "h2", name: "Republic Day", date: "2025-01-26", description: "Honors the date on which the Constitution of India came into effect.", kind: National },
        Holiday { id: "h3", name: "Holi", date: "2025-03-14", description: "The festival of colors.", kind: National },
        Holiday { id: "h4", name: "Good Friday", date: "2025-04-18", description: "Commemorates the crucifixion of Jesus.", kind: National },
        Holiday { id: "h5", name: "Labor Day", date: "2025-05-01", description: "Celebrates the achievements of workers.", kind: National },
        Holiday { id: "h10", name: "Company Foundation Day", date: "2025-06-15", description: "Celebration of Tech Mahindra's foundation day.", kind: Company },
        Holiday { id: "h6", name: "Independence Day", date: "2025-08-15", description: "Marks the end of British rule in 1947.", kind: National },
        Holiday { id: "h7", name: "Gandhi Jayanti", date: "2025-10-02", description: "Birth anniversary of Mahatma Gandhi.", kind: National },
        Holiday { id: "h8", name: "Diwali", date: "2025-11-12", description: "The festival of lights.", kind: National },
        Holiday { id: "h9", name: "Christmas", date: "2025-12-25", description: "Commemorates the birth of Jesus Christ.", kind: National },
    ]
}

/// Holidays falling in calendar `month` (1-12).
#[must_use]
pub fn holidays_in_month(holidays: &[Holiday], month: u32) -> Vec<Holiday> {
    holidays.iter().filter(|h| h.month() == Some(month)).cloned().collect()
}

#[must_use]
pub fn office_locations() -> Vec<OfficeLocation> {
    vec![
        OfficeLocation { id: "hq", name: "Headquarters - Pune", address: "1 Tech Mahindra Park, Pune 411006, India" },
        OfficeLocation { id: "bangalore", name: "Bangalore Office", address: "Tech Mahindra Campus, Electronic City, Bangalore 560100, India" },
        OfficeLocation { id: "hyderabad", name: "Hyderabad Office", address: "Tech Mahindra Ltd, Hitech City, Hyderabad 500081, India" },
        OfficeLocation { id: "chennai", name: "Chennai Office", address: "Tech Mahindra SEZ, Chennai 600119, India" },
        OfficeLocation { id: "delhi", name: "Delhi Office", address: "Tech Mahindra Tower, Noida 201301, India" },
    ]
}

#[must_use]
pub fn policies() -> Vec<Policy> {
    vec![
        Policy {
            id: "pol1",
            title: "Code of Conduct",
            category: PolicyCategory::General,
            summary: "Standards of professional behavior, integrity, and respect expected of every employee.",
            updated: "2025-01-15",
        },
        Policy {
            id: "pol2",
            title: "IT Security Policy",
            category: PolicyCategory::It,
            summary: "Password hygiene, device patching, data classification, and incident reporting.",
            updated: "2025-02-20",
        },
        Policy {
            id: "pol3",
            title: "Leave Policy",
            category: PolicyCategory::Hr,
            summary: "Annual, sick, and parental leave entitlements and how to request them.",
            updated: "2025-03-05",
        },
        Policy {
            id: "pol4",
            title: "Work From Home Policy",
            category: PolicyCategory::Hr,
            summary: "Eligibility, approval, and availability expectations for remote work.",
            updated: "2025-01-10",
        },
        Policy {
            id: "pol5",
            title: "Travel Policy",
            category: PolicyCategory::General,
            summary: "Booking, approval, and reimbursement rules for business travel.",
            updated: "2025-04-12",
        },
    ]
}

/// Policies in `category`, or all when `None`.
#[must_use]
pub fn policies_in_category(policies: &[Policy], category: Option<PolicyCategory>) -> Vec<Policy> {
    policies
        .iter()
        .filter(|p| category.is_none_or(|c| p.category == c))
        .cloned()
        .collect()
}

#[must_use]
pub fn employees() -> Vec<EmployeeSummary> {
    vec![
        EmployeeSummary { id: "e1", name: "Rohitha", email: "rohitha@example.com", department: "Engineering", start_date: "2025-05-01", progress: 75 },
        EmployeeSummary { id: "e2", name: "Akash", email: "akash@example.com", department: "Design", start_date: "2025-05-15", progress: 30 },
        EmployeeSummary { id: "e3", name: "Kavya", email: "kavya@example.com", department: "Project Management", start_date: "2025-04-15", progress: 100 },
        EmployeeSummary { id: "e4", name: "Lauhitt", email: "lauhitt@example.com", department: "Human Resources", start_date: "2025-05-05", progress: 50 },
        EmployeeSummary { id: "e5", name: "Shishu", email: "shishu@example.com", department: "Analytics", start_date: "2025-05-20", progress: 0 },
    ]
}

#[must_use]
pub fn task_templates() -> Vec<TaskTemplate> {
    const STANDARD: &[&str] = &[
        "Complete Personal Information Form",
        "Upload ID Proof",
        "Complete IT Security Training",
        "Review Employee Handbook",
    ];
    vec![
        TaskTemplate {
            id: "tpl-1",
            name: "Software Engineer Onboarding",
            department: "Engineering",
            tasks: &[
                "Complete Personal Information Form",
                "Upload ID Proof",
                "Complete IT Security Training",
                "Review Employee Handbook",
                "Set Up Workstation",
            ],
        },
        TaskTemplate { id: "tpl-2", name: "Marketing Specialist Onboarding", department: "Marketing", tasks: STANDARD },
        TaskTemplate { id: "tpl-3", name: "HR New Hire Process", department: "HR", tasks: STANDARD },
        TaskTemplate { id: "tpl-4", name: "Finance Department Onboarding", department: "Finance", tasks: STANDARD },
    ]
}

/// Seed notifications for the navbar panel, newest first.
#[must_use]
pub fn notifications() -> Vec<Notification> {
    vec![
        Notification { id: "n1", title: "New task assigned", message: "You have been assigned a new document verification task", date: "2025-05-10", read: false },
        Notification { id: "n2", title: "Task completed", message: "John Doe completed the background verification task", date: "2025-05-09", read: false },
        Notification { id: "n3", title: "Document uploaded", message: "Jane Smith uploaded their ID proof document", date: "2025-05-08", read: true },
        Notification { id: "n4", title: "Reminder", message: "Please complete your pending tasks by the end of the week", date: "2025-05-07", read: true },
    ]
}

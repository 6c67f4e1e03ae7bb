use super::*;

fn names(list: &[EmployeeSummary]) -> Vec<&'static str> {
    list.iter().map(|e| e.name).collect()
}

#[test]
fn blank_query_keeps_everyone() {
    let all = fixtures::employees();
    assert_eq!(filter_employees(&all, "").len(), all.len());
    assert_eq!(filter_employees(&all, "   ").len(), all.len());
}

#[test]
fn query_matches_name_case_insensitively() {
    let all = fixtures::employees();
    assert_eq!(names(&filter_employees(&all, "KAVYA")), vec!["Kavya"]);
}

#[test]
fn query_matches_department_and_email() {
    let all = fixtures::employees();
    assert_eq!(names(&filter_employees(&all, "design")), vec!["Akash"]);
    assert_eq!(names(&filter_employees(&all, "shishu@")), vec!["Shishu"]);
}

#[test]
fn unmatched_query_yields_nothing() {
    let all = fixtures::employees();
    assert!(filter_employees(&all, "nobody-here").is_empty());
}

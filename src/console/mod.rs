//! Terminal rendering of fetched state.
//!
//! Each listing screen becomes a fixed-width table with the same columns the
//! web console showed; empty results render the screen's notice instead of a
//! bare header row.

use crate::models::{AdminProfile, Faculty, FacultyRequest, Hod, UpdateRequest, MASTER_ADMIN_ROLE};

/// Render a fixed-width table with a separator under the header row.
fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }

    let mut out = String::new();
    for (i, header) in headers.iter().enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        out.push_str(&format!("{:<width$}", header, width = widths[i]));
    }
    out.push('\n');
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        out.push_str(&"-".repeat(*width));
    }
    out.push('\n');
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i > 0 {
                out.push_str("  ");
            }
            out.push_str(&format!("{:<width$}", cell, width = widths[i]));
        }
        out.push('\n');
    }
    out
}

/// Table of HOD records.
pub fn hod_table(hods: &[Hod]) -> String {
    if hods.is_empty() {
        return "Currently, no HODs are available.\n".to_string();
    }
    let rows: Vec<Vec<String>> = hods
        .iter()
        .map(|h| {
            vec![
                h.id.clone(),
                h.name.clone(),
                h.username.clone(),
                h.branch.clone(),
                h.role.clone(),
            ]
        })
        .collect();
    render_table(&["ID", "NAME", "USERNAME", "BRANCH", "ROLE"], &rows)
}

/// Table of faculty records.
pub fn faculty_table(faculty: &[Faculty]) -> String {
    if faculty.is_empty() {
        return "No faculty members found.\n".to_string();
    }
    let rows: Vec<Vec<String>> = faculty
        .iter()
        .map(|f| {
            vec![
                f.id.clone(),
                f.name.clone(),
                f.faculty_username.clone(),
                f.branch.clone(),
                f.subject.clone(),
            ]
        })
        .collect();
    render_table(&["ID", "NAME", "USERNAME", "BRANCH", "SUBJECT"], &rows)
}

/// Table of new-faculty requests.
pub fn request_table(requests: &[FacultyRequest]) -> String {
    if requests.is_empty() {
        return "No requests found.\n".to_string();
    }
    let rows: Vec<Vec<String>> = requests
        .iter()
        .map(|r| {
            vec![
                r.id.clone(),
                r.candidate_name().unwrap_or("N/A").to_string(),
                r.faculty_username.clone(),
                r.branch.clone(),
                r.subject.clone(),
                r.status.as_str().to_string(),
                r.created_at.clone().unwrap_or_default(),
            ]
        })
        .collect();
    render_table(
        &[
            "REQUEST ID",
            "NAME",
            "USERNAME",
            "BRANCH",
            "SUBJECT",
            "STATUS",
            "CREATED AT",
        ],
        &rows,
    )
}

/// Table of faculty update/removal requests.
pub fn update_request_table(requests: &[UpdateRequest]) -> String {
    if requests.is_empty() {
        return "No requests found.\n".to_string();
    }
    let rows: Vec<Vec<String>> = requests
        .iter()
        .map(|r| {
            vec![
                r.request_id.clone(),
                r.faculty_username.clone(),
                r.action.as_str().to_string(),
                r.status.as_str().to_string(),
                r.removal_reason().unwrap_or("").to_string(),
            ]
        })
        .collect();
    render_table(
        &["REQUEST ID", "USERNAME", "ACTION", "STATUS", "REASON"],
        &rows,
    )
}

/// Detail card for the master admin profile.
pub fn profile_card(profile: &AdminProfile) -> String {
    let is_master = if profile.role == MASTER_ADMIN_ROLE {
        "Yes"
    } else {
        "No"
    };
    format!(
        "ID:           {}\nName:         {}\nUsername:     {}\nRole:         {}\nMaster Admin: {}\n",
        profile.id, profile.name, profile.username, profile.role, is_master
    )
}

/// Case-insensitive substring filter on faculty username, as the request
/// screens' search box did.
pub fn filter_requests(requests: Vec<FacultyRequest>, query: Option<&str>) -> Vec<FacultyRequest> {
    match query {
        Some(q) if !q.is_empty() => {
            let q = q.to_lowercase();
            requests
                .into_iter()
                .filter(|r| r.faculty_username.to_lowercase().contains(&q))
                .collect()
        }
        _ => requests,
    }
}

/// Same filter for the update/removal request listing.
pub fn filter_update_requests(
    requests: Vec<UpdateRequest>,
    query: Option<&str>,
) -> Vec<UpdateRequest> {
    match query {
        Some(q) if !q.is_empty() => {
            let q = q.to_lowercase();
            requests
                .into_iter()
                .filter(|r| r.faculty_username.to_lowercase().contains(&q))
                .collect()
        }
        _ => requests,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RequestStatus;

    fn sample_hod() -> Hod {
        Hod {
            id: "h1".to_string(),
            name: "Grace Hopper".to_string(),
            username: "grace".to_string(),
            branch: "CSE".to_string(),
            role: "hod".to_string(),
        }
    }

    fn sample_request(username: &str) -> FacultyRequest {
        FacultyRequest {
            id: "r1".to_string(),
            faculty_username: username.to_string(),
            branch: "CSE".to_string(),
            subject: "Theory".to_string(),
            status: RequestStatus::Pending,
            created_at: None,
            data: None,
        }
    }

    #[test]
    fn test_hod_table_contains_headers_and_row() {
        let table = hod_table(&[sample_hod()]);
        let mut lines = table.lines();
        let header = lines.next().unwrap();
        assert!(header.contains("USERNAME"));
        assert!(lines.next().unwrap().starts_with('-'));
        let row = lines.next().unwrap();
        assert!(row.contains("Grace Hopper"));
        assert!(row.contains("CSE"));
    }

    #[test]
    fn test_empty_hod_table_shows_notice() {
        assert_eq!(hod_table(&[]), "Currently, no HODs are available.\n");
    }

    #[test]
    fn test_request_table_missing_name_is_na() {
        let table = request_table(&[sample_request("alan@uni.edu")]);
        assert!(table.contains("N/A"));
        assert!(table.contains("pending"));
    }

    #[test]
    fn test_filter_requests_is_case_insensitive_substring() {
        let requests = vec![sample_request("Alan@uni.edu"), sample_request("bob@uni.edu")];
        let filtered = filter_requests(requests, Some("ALAN"));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].faculty_username, "Alan@uni.edu");
    }

    #[test]
    fn test_filter_requests_empty_query_keeps_all() {
        let requests = vec![sample_request("a"), sample_request("b")];
        assert_eq!(filter_requests(requests, Some("")).len(), 2);
    }

    #[test]
    fn test_profile_card_master_admin_flag() {
        let card = profile_card(&AdminProfile {
            id: "ma-1".to_string(),
            name: "Ada".to_string(),
            username: "ada".to_string(),
            role: "masterAdmin".to_string(),
        });
        assert!(card.contains("Master Admin: Yes"));
    }
}

use super::*;
use crate::remote::AdminUser;
use crate::routes::Route;

fn user(id: &str, name: &str, email: &str, first: &str, last: &str) -> AdminUser {
    AdminUser {
        user_id: id.to_string(),
        user_name: name.to_string(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: email.to_string(),
        is_admin: false,
    }
}

#[test]
fn unknown_email_flags_both_fields() {
    let (fields, msg) = credential_failure(Some(false));
    assert!(fields.email && fields.password);
    assert_eq!(msg, "Please enter correct email and password");
}

#[test]
fn known_email_flags_only_password() {
    let (fields, msg) = credential_failure(Some(true));
    assert!(!fields.email);
    assert!(fields.password);
    assert_eq!(msg, "Please enter correct password");
}

#[test]
fn failed_email_check_flags_both_fields() {
    let (fields, msg) = credential_failure(None);
    assert_eq!(
        fields,
        InvalidFields {
            email: true,
            password: true
        }
    );
    assert_eq!(msg, "Please enter correct email and password");
}

#[test]
fn dashboard_tab_follows_path() {
    assert_eq!(DashboardTab::from_path("/admin/dashboard"), DashboardTab::Dashboard);
    assert_eq!(DashboardTab::from_path("/admin/users"), DashboardTab::Users);
    assert_eq!(DashboardTab::from_path("/admin/users/7"), DashboardTab::Users);
    assert_eq!(DashboardTab::from_path("/admin/questions"), DashboardTab::Questions);
    assert_eq!(
        DashboardTab::from_path("/admin/question-full"),
        DashboardTab::QuestionFull
    );
    assert_eq!(
        DashboardTab::from_path("/admin/register-user"),
        DashboardTab::RegisterUser
    );
    assert_eq!(DashboardTab::from_path("/admin"), DashboardTab::Dashboard);
}

#[test]
fn dashboard_tab_routes_round_trip_through_paths() {
    for tab in [
        DashboardTab::Dashboard,
        DashboardTab::Users,
        DashboardTab::Questions,
        DashboardTab::QuestionFull,
        DashboardTab::RegisterUser,
    ] {
        assert_eq!(DashboardTab::from_path(&tab.route().path()), tab);
    }
    assert_eq!(DashboardTab::Users.route(), Route::AdminUsers);
}

#[test]
fn missing_stats_render_as_na() {
    assert_eq!(stat_label(None), "N/A");
    assert_eq!(stat_label(Some(42)), "42");
}

#[test]
fn search_matches_username_email_and_full_name() {
    let u = user("1", "Abebe_K", "abebe@example.com", "Abebe", "Kebede");
    assert!(user_matches(&u, "abebe_k"));
    assert!(user_matches(&u, "EXAMPLE.COM"));
    assert!(user_matches(&u, "abebe keb"));
    assert!(user_matches(&u, ""));
    assert!(!user_matches(&u, "sara"));
}

#[test]
fn removed_rows_stay_removed_after_reload() {
    let rows = vec![
        user("1", "abebe", "a@example.com", "Abebe", "Kebede"),
        user("2", "sara", "s@example.com", "Sara", "Bekele"),
    ];
    let mut table = UsersTable::default();
    table.replace_rows(rows.clone());
    table.remove("1");
    assert_eq!(table.rows().len(), 1);

    table.replace_rows(rows);
    let ids: Vec<&str> = table.rows().iter().map(|u| u.user_id.as_str()).collect();
    assert_eq!(ids, vec!["2"]);
}

#[test]
fn table_query_filters_visible_rows() {
    let mut table = UsersTable::default();
    table.replace_rows(vec![
        user("1", "abebe", "a@example.com", "Abebe", "Kebede"),
        user("2", "sara", "s@example.com", "Sara", "Bekele"),
    ]);
    table.set_query("BE");
    let names: Vec<&str> = table.visible().iter().map(|u| u.user_name.as_str()).collect();
    assert_eq!(names, vec!["abebe", "sara"]);
    table.set_query("sara");
    assert_eq!(table.visible().len(), 1);
    assert_eq!(table.rows().len(), 2);
}

#[test]
fn set_admin_updates_row_in_place() {
    let mut table = UsersTable::default();
    table.replace_rows(vec![user("9", "x_user", "x@example.com", "Xa", "Ya")]);
    table.set_admin("9", true);
    assert_eq!(table.get("9").map(|u| u.is_admin), Some(true));
}

#[test]
fn notice_text_and_kind() {
    let n = Notice::success("done");
    assert!(!n.is_error());
    assert_eq!(n.to_string(), "done");
    assert!(Notice::Error("nope".to_string()).is_error());
}

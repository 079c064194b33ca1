use std::collections::HashSet;

use crate::AppContext;
use crate::remote::AdminUser;

use super::{Notice, Submit};

/// Case-insensitive match of `query` against username, email or full name.
pub fn user_matches(user: &AdminUser, query: &str) -> bool {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return true;
    }
    user.user_name.to_lowercase().contains(&q)
        || user.email.to_lowercase().contains(&q)
        || user.full_name().to_lowercase().contains(&q)
}

/// Rows of the admin user list.
///
/// Ids deleted in this view stay hidden even if a later fetch still
/// returns them.
#[derive(Clone, Debug, Default)]
pub struct UsersTable {
    rows: Vec<AdminUser>,
    removed: HashSet<String>,
    query: String,
}

impl UsersTable {
    pub fn replace_rows(&mut self, rows: Vec<AdminUser>) {
        self.rows = rows
            .into_iter()
            .filter(|u| !self.removed.contains(&u.user_id))
            .collect();
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_lowercase();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn rows(&self) -> &[AdminUser] {
        &self.rows
    }

    pub fn visible(&self) -> Vec<&AdminUser> {
        self.rows
            .iter()
            .filter(|u| user_matches(u, &self.query))
            .collect()
    }

    pub fn get(&self, user_id: &str) -> Option<&AdminUser> {
        self.rows.iter().find(|u| u.user_id == user_id)
    }

    pub fn remove(&mut self, user_id: &str) {
        self.removed.insert(user_id.to_string());
        self.rows.retain(|u| u.user_id != user_id);
    }

    pub fn set_admin(&mut self, user_id: &str, is_admin: bool) {
        if let Some(u) = self.rows.iter_mut().find(|u| u.user_id == user_id) {
            u.is_admin = is_admin;
        }
    }
}

/// User list with its row actions; shared by the dashboard's users tab
/// and the users management view.
#[derive(Debug)]
pub struct UsersPanel {
    ctx: AppContext,
    table: UsersTable,
    notice: Option<Notice>,
}

impl UsersPanel {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            table: UsersTable::default(),
            notice: None,
        }
    }

    pub fn table(&self) -> &UsersTable {
        &self.table
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn search(&mut self, query: &str) {
        self.table.set_query(query);
    }

    pub fn load(&mut self) {
        match self.ctx.client().list_users() {
            Ok(rows) => {
                self.table.replace_rows(rows);
                self.notice = None;
            }
            Err(err) => self.notice = Some(Notice::from_error(&err, "Failed to fetch users")),
        }
    }

    pub fn delete(&mut self, user_id: &str) -> Submit {
        match self.ctx.client().delete_user(user_id) {
            Ok(_) => {
                self.table.remove(user_id);
                self.notice = Some(Notice::success("User deleted successfully"));
                Submit::Done
            }
            Err(err) => {
                self.notice = Some(Notice::from_error(&err, "Failed to delete user"));
                Submit::Failed
            }
        }
    }

    /// Flip the admin flag of a listed user.
    pub fn toggle_admin(&mut self, user_id: &str) -> Submit {
        let Some(current) = self.table.get(user_id).map(|u| u.is_admin) else {
            self.notice = Some(Notice::Error(format!("User {} is not listed", user_id)));
            return Submit::Invalid;
        };
        match self.ctx.client().set_user_admin(user_id, !current) {
            Ok(_) => {
                self.table.set_admin(user_id, !current);
                self.notice = None;
                Submit::Done
            }
            Err(err) => {
                self.notice = Some(Notice::from_error(&err, "Failed to update user"));
                Submit::Failed
            }
        }
    }
}

#[derive(Debug)]
pub struct UsersManagementScreen {
    panel: UsersPanel,
}

impl UsersManagementScreen {
    pub fn mount(ctx: AppContext) -> Self {
        let mut panel = UsersPanel::new(ctx);
        panel.load();
        Self { panel }
    }

    pub fn panel(&self) -> &UsersPanel {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut UsersPanel {
        &mut self.panel
    }

    pub fn refresh(&mut self) {
        self.panel.load();
    }
}

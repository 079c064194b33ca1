use crate::AppContext;
use crate::remote::{ApiError, DashboardStats, RecentQuestion};
use crate::routes::Route;
use crate::scope::ViewLifetime;

use super::{Submit, UsersPanel};

/// Section of the admin dashboard, derived from the current path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardTab {
    Dashboard,
    Users,
    Questions,
    QuestionFull,
    RegisterUser,
}

impl DashboardTab {
    pub fn from_path(path: &str) -> Self {
        if path.contains("/dashboard") {
            DashboardTab::Dashboard
        } else if path.contains("/questions") {
            DashboardTab::Questions
        } else if path.contains("/users") {
            DashboardTab::Users
        } else if path.contains("/question-full") {
            DashboardTab::QuestionFull
        } else if path.contains("/register-user") {
            DashboardTab::RegisterUser
        } else {
            DashboardTab::Dashboard
        }
    }

    pub fn route(&self) -> Route {
        match self {
            DashboardTab::Dashboard => Route::AdminDashboard,
            DashboardTab::Users => Route::AdminUsers,
            DashboardTab::Questions => Route::AdminQuestions,
            DashboardTab::QuestionFull => Route::AdminQuestionFull,
            DashboardTab::RegisterUser => Route::AdminRegisterUser,
        }
    }
}

/// Rendered value of one stat card.
pub fn stat_label(value: Option<u64>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| v.to_string())
}

#[derive(Debug)]
pub struct DashboardScreen {
    ctx: AppContext,
    lifetime: ViewLifetime,
    tab: DashboardTab,
    stats: DashboardStats,
    recent: Vec<RecentQuestion>,
    users: UsersPanel,
}

impl DashboardScreen {
    pub fn mount(ctx: AppContext) -> Self {
        let tab = DashboardTab::from_path(&ctx.location());
        let mut screen = Self {
            users: UsersPanel::new(ctx.clone()),
            ctx,
            lifetime: ViewLifetime::new(),
            tab,
            stats: DashboardStats::default(),
            recent: Vec::new(),
        };
        screen.load_tab();
        screen
    }

    pub fn tab(&self) -> DashboardTab {
        self.tab
    }

    pub fn stats(&self) -> &DashboardStats {
        &self.stats
    }

    pub fn recent_questions(&self) -> &[RecentQuestion] {
        &self.recent
    }

    pub fn users(&self) -> &UsersPanel {
        &self.users
    }

    pub fn lifetime(&self) -> &ViewLifetime {
        &self.lifetime
    }

    /// Switch sections through the router.
    pub fn select_tab(&mut self, tab: DashboardTab) {
        self.ctx.open(&tab.route());
        self.tab = DashboardTab::from_path(&self.ctx.location());
        self.load_tab();
    }

    fn load_tab(&mut self) {
        match self.tab {
            DashboardTab::Dashboard => self.refresh(),
            DashboardTab::Users => self.users.load(),
            _ => {}
        }
    }

    /// Fetch stats and recent questions concurrently.
    ///
    /// If either call fails every stat reads "N/A" and the list is empty.
    pub fn refresh(&mut self) {
        let scope = self.lifetime.scope();
        let client = self.ctx.client().clone();
        let stats = scope.spawn(move || client.stats());
        let client = self.ctx.client().clone();
        let recent = scope.spawn(move || client.recent_questions());

        let (Some(stats), Some(recent)) = (stats.wait(), recent.wait()) else {
            return;
        };
        match (stats, recent) {
            (Ok(stats), Ok(recent)) => {
                self.stats = stats;
                self.recent = recent;
            }
            (Err(err), _) | (_, Err(err)) => {
                log_fetch_failure(&err);
                self.stats = DashboardStats::default();
                self.recent.clear();
            }
        }
    }

    pub fn search_users(&mut self, query: &str) {
        self.users.search(query);
    }

    pub fn delete_user(&mut self, user_id: &str) -> Submit {
        self.users.delete(user_id)
    }
}

fn log_fetch_failure(err: &ApiError) {
    tracing::warn!(error = %err, "dashboard data unavailable");
}

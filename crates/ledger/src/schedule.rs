use chrono::NaiveDate;
use log::{error, info};
use model::{
    calendar::CalendarCell,
    errors::ScheduleError,
    filter::FilterSelection,
    ids::MonthId,
    training::TrainingSession,
    week::WeekWindow,
};

use crate::{
    calendar::build_month_grid,
    filter::{filter, FilterOptions},
    reminders::{NotificationSink, ReminderStore},
    week::compute_week_window,
    Ledger,
};

/// Time scope of the schedule screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeWindow {
    Day(NaiveDate),
    /// Weeks from the reference week.
    Week(i64),
    Month(MonthId),
}

impl TimeWindow {
    pub fn next(&self) -> TimeWindow {
        match self {
            TimeWindow::Day(date) => TimeWindow::Day(date.succ_opt().unwrap_or(*date)),
            TimeWindow::Week(offset) => TimeWindow::Week(offset.saturating_add(1)),
            TimeWindow::Month(month) => TimeWindow::Month(month.next().unwrap_or(*month)),
        }
    }

    pub fn prev(&self) -> TimeWindow {
        match self {
            TimeWindow::Day(date) => TimeWindow::Day(date.pred_opt().unwrap_or(*date)),
            TimeWindow::Week(offset) => TimeWindow::Week(offset.saturating_sub(1)),
            TimeWindow::Month(month) => TimeWindow::Month(month.prev().unwrap_or(*month)),
        }
    }
}

/// Session prepared for display. `reminder` is set for personal sessions only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionItem {
    pub session: TrainingSession,
    pub reminder: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleLayout {
    Month {
        month: MonthId,
        grid: Vec<CalendarCell<SessionItem>>,
        /// Filtered sessions on the reference date when it falls in the month.
        today: Vec<SessionItem>,
    },
    Week {
        window: Option<WeekWindow>,
        sessions: Vec<SessionItem>,
    },
    Day {
        date: NaiveDate,
        sessions: Vec<SessionItem>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleModel {
    pub window: TimeWindow,
    pub layout: ScheduleLayout,
    pub options: FilterOptions,
    pub selection: FilterSelection,
    /// Set when the last fetch failed. The layout is empty in that case.
    pub error: Option<String>,
}

/// State of one mounted schedule screen.
pub struct ScheduleView {
    window: TimeWindow,
    selection: FilterSelection,
    today: NaiveDate,
    reminders: ReminderStore,
    sessions: Vec<TrainingSession>,
    error: Option<String>,
}

impl ScheduleView {
    pub fn new(window: TimeWindow, today: NaiveDate) -> Self {
        ScheduleView {
            window,
            selection: FilterSelection::default(),
            today,
            reminders: ReminderStore::default(),
            sessions: vec![],
            error: None,
        }
    }

    pub fn window(&self) -> TimeWindow {
        self.window
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn reminders(&self) -> &ReminderStore {
        &self.reminders
    }

    /// Raw batch of the last fetch, before any narrowing.
    pub fn sessions(&self) -> &[TrainingSession] {
        &self.sessions
    }

    /// Fetches the current window and recomputes the model. A failed fetch is
    /// logged and leaves an empty batch with `error` set.
    pub async fn reload(&mut self, ledger: &Ledger) -> ScheduleModel {
        match self.fetch(ledger).await {
            Ok(sessions) => {
                info!("Loaded {} sessions for {:?}", sessions.len(), self.window);
                self.sessions = sessions;
                self.error = None;
            }
            Err(err) => {
                error!("Failed to load schedule for {:?}: {}", self.window, err);
                self.sessions = vec![];
                self.error = Some(err.to_string());
            }
        }
        self.compose()
    }

    pub async fn set_window(&mut self, window: TimeWindow, ledger: &Ledger) -> ScheduleModel {
        self.window = window;
        self.reload(ledger).await
    }

    pub async fn next(&mut self, ledger: &Ledger) -> ScheduleModel {
        self.set_window(self.window.next(), ledger).await
    }

    pub async fn prev(&mut self, ledger: &Ledger) -> ScheduleModel {
        self.set_window(self.window.prev(), ledger).await
    }

    pub fn set_selection(&mut self, selection: FilterSelection) -> ScheduleModel {
        self.selection = selection;
        self.compose()
    }

    pub fn reset_filters(&mut self) -> ScheduleModel {
        self.set_selection(FilterSelection::default())
    }

    /// Flips the reminder of `id`. Personal sessions of the current batch
    /// notify `sink`.
    pub fn toggle_reminder(&mut self, id: &str, sink: &dyn NotificationSink) -> bool {
        match self.sessions.iter().find(|s| s.id == id) {
            Some(session) => self.reminders.toggle_session(session, sink),
            None => self.reminders.toggle(id),
        }
    }

    /// Builds the display model from the cached batch. Always a full pass.
    pub fn compose(&self) -> ScheduleModel {
        let options = FilterOptions::collect(&self.sessions);
        let layout = match self.window {
            TimeWindow::Month(month) => self.compose_month(month),
            TimeWindow::Week(offset) => self.compose_week(offset),
            TimeWindow::Day(date) => self.compose_day(date),
        };

        ScheduleModel {
            window: self.window,
            layout,
            options,
            selection: self.selection.clone(),
            error: self.error.clone(),
        }
    }

    async fn fetch(&self, ledger: &Ledger) -> Result<Vec<TrainingSession>, ScheduleError> {
        match self.window {
            TimeWindow::Day(date) => Ok(ledger.monthly_trainings(MonthId::of(date)).await?),
            TimeWindow::Week(offset) => {
                let week = compute_week_window(offset, self.today)?;
                Ok(ledger.weekly_trainings(&week).await?)
            }
            TimeWindow::Month(month) => Ok(ledger.monthly_trainings(month).await?),
        }
    }

    fn compose_month(&self, month: MonthId) -> ScheduleLayout {
        let filtered = filter(&self.sessions, &self.selection);
        let grid = build_month_grid(month, &filtered)
            .into_iter()
            .map(|cell| cell.map(|s| self.item(s)))
            .collect();

        let today = if month.contains(self.today) {
            let key = time::fmt_date_key(self.today);
            filtered
                .into_iter()
                .filter(|s| s.date == key)
                .map(|s| self.item(s))
                .collect()
        } else {
            vec![]
        };

        ScheduleLayout::Month { month, grid, today }
    }

    fn compose_week(&self, offset: i64) -> ScheduleLayout {
        let window = match compute_week_window(offset, self.today) {
            Ok(window) => window,
            Err(err) => {
                error!("Failed to compute week window: {}", err);
                return ScheduleLayout::Week {
                    window: None,
                    sessions: vec![],
                };
            }
        };

        let scoped = self
            .sessions
            .iter()
            .filter(|s| s.day().map(|d| window.contains(d)).unwrap_or(false))
            .cloned()
            .collect::<Vec<_>>();
        ScheduleLayout::Week {
            window: Some(window),
            sessions: self.list(filter(&scoped, &self.selection)),
        }
    }

    fn compose_day(&self, date: NaiveDate) -> ScheduleLayout {
        let key = time::fmt_date_key(date);
        let scoped = self
            .sessions
            .iter()
            .filter(|s| s.date == key)
            .cloned()
            .collect::<Vec<_>>();
        ScheduleLayout::Day {
            date,
            sessions: self.list(filter(&scoped, &self.selection)),
        }
    }

    fn list(&self, mut sessions: Vec<TrainingSession>) -> Vec<SessionItem> {
        sessions.sort_by(|a, b| (&a.date, &a.time).cmp(&(&b.date, &b.time)));
        sessions.into_iter().map(|s| self.item(s)).collect()
    }

    fn item(&self, session: TrainingSession) -> SessionItem {
        SessionItem {
            reminder: self.reminders.reminder_for(&session),
            session,
        }
    }
}

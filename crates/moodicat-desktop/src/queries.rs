//! Reactive queries using dioxus-query
//!
//! Every server resource has one query capability. Mutations never patch
//! cached data; they invalidate the affected capabilities and let the
//! queries refetch.

use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::NaiveDate;
use dioxus_query::prelude::*;

use moodicat_core::chat::Resource;
use moodicat_core::models::{
    DailySummary, DiaryEntry, DiaryRange, Reminder, Task, TaskStatus, TrendPeriod, User,
};
use moodicat_core::reports::MoodTrend;
use moodicat_core::util::today;

use crate::services::{DesktopApi, DesktopAuth};

pub const TASKS_REFRESH_INTERVAL: Duration = Duration::from_secs(3);
pub const TODAY_MOOD_REFRESH_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// Shared auth service handle plus the account it acts for.
///
/// The service is compared by pointer. The account id is part of the
/// identity so cached responses never carry over between accounts.
#[derive(Clone, Default)]
pub struct ApiHandle {
    service: Option<Arc<DesktopAuth>>,
    account: Option<i64>,
}

impl ApiHandle {
    pub const fn new(service: Option<Arc<DesktopAuth>>, account: Option<i64>) -> Self {
        Self { service, account }
    }

    /// Queries only run for a connected, signed-in account.
    pub const fn is_ready(&self) -> bool {
        self.service.is_some() && self.account.is_some()
    }

    fn api(&self) -> Result<&DesktopApi, String> {
        self.service
            .as_deref()
            .map(DesktopAuth::api)
            .ok_or_else(|| "Not connected to the Moodicat server".to_string())
    }
}

impl PartialEq for ApiHandle {
    fn eq(&self, other: &Self) -> bool {
        let same_service = match (&self.service, &other.service) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        same_service && self.account == other.account
    }
}

impl Eq for ApiHandle {}

impl Hash for ApiHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.service
            .as_ref()
            .map(|arc| Arc::as_ptr(arc) as usize)
            .hash(state);
        self.account.hash(state);
    }
}

/// Notices when the signed-in account changes so every cache can be dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccountWatch {
    last: Option<Option<i64>>,
}

impl AccountWatch {
    /// Record the current account; true when it differs from the previous one.
    pub fn changed(&mut self, account: Option<i64>) -> bool {
        let changed = self.last.is_some_and(|last| last != account);
        self.last = Some(account);
        changed
    }
}

/// Query capability for the signed-in account
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CurrentUserQuery(pub ApiHandle);

impl QueryCapability for CurrentUserQuery {
    type Ok = User;
    type Err = String;
    type Keys = ();

    async fn run(&self, _keys: &Self::Keys) -> Result<Self::Ok, Self::Err> {
        tracing::debug!("CurrentUserQuery: fetching account");
        self.0.api()?.current_user().await.map_err(|e| e.to_string())
    }
}

/// Query capability for tasks, keyed by optional status filter
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TasksQuery(pub ApiHandle);

impl QueryCapability for TasksQuery {
    type Ok = Vec<Task>;
    type Err = String;
    type Keys = Option<TaskStatus>;

    async fn run(&self, status: &Self::Keys) -> Result<Self::Ok, Self::Err> {
        tracing::debug!("TasksQuery: fetching tasks (status={:?})", status);
        self.0
            .api()?
            .list_tasks(*status)
            .await
            .map_err(|e| e.to_string())
    }
}

/// Query capability for diary entries in a date range
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct DiaryQuery(pub ApiHandle);

impl QueryCapability for DiaryQuery {
    type Ok = Vec<DiaryEntry>;
    type Err = String;
    type Keys = DiaryRange;

    async fn run(&self, range: &Self::Keys) -> Result<Self::Ok, Self::Err> {
        tracing::debug!("DiaryQuery: fetching entries {} to {}", range.start, range.end);
        self.0
            .api()?
            .list_entries(*range)
            .await
            .map_err(|e| e.to_string())
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct RemindersQuery(pub ApiHandle);

impl QueryCapability for RemindersQuery {
    type Ok = Vec<Reminder>;
    type Err = String;
    type Keys = ();

    async fn run(&self, _keys: &Self::Keys) -> Result<Self::Ok, Self::Err> {
        tracing::debug!("RemindersQuery: fetching reminders");
        let mut reminders = self
            .0
            .api()?
            .list_reminders()
            .await
            .map_err(|e| e.to_string())?;
        reminders.sort_by_key(|reminder| reminder.reminder_time);
        Ok(reminders)
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct DailySummaryQuery(pub ApiHandle);

impl QueryCapability for DailySummaryQuery {
    type Ok = DailySummary;
    type Err = String;
    type Keys = NaiveDate;

    async fn run(&self, date: &Self::Keys) -> Result<Self::Ok, Self::Err> {
        tracing::debug!("DailySummaryQuery: fetching summary for {}", date);
        self.0
            .api()?
            .daily_summary(*date)
            .await
            .map_err(|e| e.to_string())
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct MoodTrendQuery(pub ApiHandle);

impl QueryCapability for MoodTrendQuery {
    type Ok = MoodTrend;
    type Err = String;
    type Keys = TrendPeriod;

    async fn run(&self, period: &Self::Keys) -> Result<Self::Ok, Self::Err> {
        tracing::debug!("MoodTrendQuery: fetching trend for {}", period);
        self.0
            .api()?
            .mood_trend(*period)
            .await
            .map_err(|e| e.to_string())
    }
}

/// Query capability for the assistant's read of today's mood
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TodayMoodQuery(pub ApiHandle);

impl QueryCapability for TodayMoodQuery {
    type Ok = Option<String>;
    type Err = String;
    type Keys = ();

    async fn run(&self, _keys: &Self::Keys) -> Result<Self::Ok, Self::Err> {
        tracing::debug!("TodayMoodQuery: fetching today's mood");
        self.0
            .api()?
            .today_mood()
            .await
            .map_err(|e| e.to_string())
    }
}

// Capabilities keep the default `matches`, so any key invalidates every
// cached query of that capability.

pub async fn invalidate_current_user_query() {
    tracing::debug!("Invalidating current user query");
    QueriesStorage::<CurrentUserQuery>::invalidate_matching(()).await;
}

/// Invalidate every task query (call after creating/updating/deleting tasks)
pub async fn invalidate_tasks_query() {
    tracing::debug!("Invalidating tasks queries");
    QueriesStorage::<TasksQuery>::invalidate_matching(None).await;
}

pub async fn invalidate_today_mood_query() {
    tracing::debug!("Invalidating today mood query");
    QueriesStorage::<TodayMoodQuery>::invalidate_matching(()).await;
}

/// Invalidate diary entries and the reports derived from them
pub async fn invalidate_diary_queries() {
    tracing::debug!("Invalidating diary queries");
    QueriesStorage::<DiaryQuery>::invalidate_matching(DiaryRange::default()).await;
    QueriesStorage::<DailySummaryQuery>::invalidate_matching(today()).await;
    invalidate_today_mood_query().await;
}

pub async fn invalidate_reminders_query() {
    tracing::debug!("Invalidating reminders query");
    QueriesStorage::<RemindersQuery>::invalidate_matching(()).await;
}

/// Refresh the caches an assistant reply may have written to.
pub async fn invalidate_resources(resources: &BTreeSet<Resource>) {
    for resource in resources {
        match resource {
            Resource::Tasks => invalidate_tasks_query().await,
            Resource::Diary => invalidate_diary_queries().await,
            Resource::Reminders => invalidate_reminders_query().await,
        }
    }
}

/// Refetch every cached response (run by `App` whenever the account changes)
pub async fn invalidate_all_queries() {
    tracing::debug!("Invalidating all queries");
    invalidate_current_user_query().await;
    invalidate_tasks_query().await;
    invalidate_diary_queries().await;
    invalidate_reminders_query().await;
    QueriesStorage::<MoodTrendQuery>::invalidate_matching(TrendPeriod::default()).await;
}

// Hooks: always call unconditionally; a missing service disables the query.

pub fn use_current_user_query(api: ApiHandle) -> UseQuery<CurrentUserQuery> {
    let enabled = api.is_ready();
    use_query(Query::new((), CurrentUserQuery(api)).enable(enabled))
}

pub fn use_tasks_query(api: ApiHandle, status: Option<TaskStatus>) -> UseQuery<TasksQuery> {
    let enabled = api.is_ready();
    use_query(Query::new(status, TasksQuery(api)).enable(enabled))
}

pub fn use_diary_query(api: ApiHandle, range: DiaryRange) -> UseQuery<DiaryQuery> {
    let enabled = api.is_ready();
    use_query(Query::new(range, DiaryQuery(api)).enable(enabled))
}

pub fn use_reminders_query(api: ApiHandle) -> UseQuery<RemindersQuery> {
    let enabled = api.is_ready();
    use_query(Query::new((), RemindersQuery(api)).enable(enabled))
}

pub fn use_daily_summary_query(api: ApiHandle, date: NaiveDate) -> UseQuery<DailySummaryQuery> {
    let enabled = api.is_ready();
    use_query(Query::new(date, DailySummaryQuery(api)).enable(enabled))
}

pub fn use_mood_trend_query(api: ApiHandle, period: TrendPeriod) -> UseQuery<MoodTrendQuery> {
    let enabled = api.is_ready();
    use_query(Query::new(period, MoodTrendQuery(api)).enable(enabled))
}

pub fn use_today_mood_query(api: ApiHandle) -> UseQuery<TodayMoodQuery> {
    let enabled = api.is_ready();
    use_query(Query::new((), TodayMoodQuery(api)).enable(enabled))
}

/// Render-friendly view of a query's state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Loadable<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T: Clone> Loadable<T> {
    /// Settled or previous result; `None` means nothing has arrived yet.
    fn from_result(res: Option<&Result<T, String>>) -> Self {
        match res {
            Some(Ok(value)) => Self::Ready(value.clone()),
            Some(Err(error)) => Self::Failed(error.clone()),
            None => Self::Loading,
        }
    }

    /// Snapshot a query, keeping the previous value visible while it refetches.
    pub fn of<Q>(query: &UseQuery<Q>) -> Self
    where
        Q: QueryCapability<Ok = T, Err = String>,
    {
        let reader = query.read();
        let state = reader.state();
        match &*state {
            QueryStateData::Pending => Self::Loading,
            QueryStateData::Loading { res, .. } => Self::from_result(res.as_ref()),
            QueryStateData::Settled { res, .. } => Self::from_result(Some(res)),
        }
    }

    pub const fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::Loading | Self::Failed(_) => None,
        }
    }
}

/// Which periodic refetches are due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RefreshDue {
    pub tasks: bool,
    pub today_mood: bool,
}

/// Tracks the periodic refetch deadlines driven by the app loop.
#[derive(Debug, Clone, Copy)]
pub struct RefreshSchedule {
    next_tasks: Instant,
    next_today_mood: Instant,
}

impl RefreshSchedule {
    pub fn new(now: Instant) -> Self {
        Self {
            next_tasks: now + TASKS_REFRESH_INTERVAL,
            next_today_mood: now + TODAY_MOOD_REFRESH_INTERVAL,
        }
    }

    /// Report due refetches and push their deadlines forward.
    pub fn poll(&mut self, now: Instant) -> RefreshDue {
        let mut due = RefreshDue::default();
        if now >= self.next_tasks {
            due.tasks = true;
            self.next_tasks = now + TASKS_REFRESH_INTERVAL;
        }
        if now >= self.next_today_mood {
            due.today_mood = true;
            self.next_today_mood = now + TODAY_MOOD_REFRESH_INTERVAL;
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;

    use moodicat_core::{ApiClient, AuthService, ClientConfig};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::services::KeyringSessionStore;

    #[test]
    fn loadable_prefers_previous_result_while_refetching() {
        let ok: Result<u8, String> = Ok(3);
        assert_eq!(Loadable::from_result(Some(&ok)), Loadable::Ready(3));

        let err: Result<u8, String> = Err("Session expired".to_string());
        assert_eq!(
            Loadable::from_result(Some(&err)),
            Loadable::Failed("Session expired".to_string())
        );
        assert_eq!(Loadable::<u8>::from_result(None), Loadable::Loading);
        assert_eq!(Loadable::Ready(3).ready(), Some(&3));
    }

    fn service() -> Arc<DesktopAuth> {
        let config = ClientConfig::new("http://localhost:10000/api/v1").unwrap();
        let api = ApiClient::new(&config, KeyringSessionStore::default()).unwrap();
        Arc::new(AuthService::new(api))
    }

    fn hash_of(handle: &ApiHandle) -> u64 {
        let mut hasher = DefaultHasher::new();
        handle.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn empty_handles_compare_equal() {
        assert!(ApiHandle::default() == ApiHandle::new(None, None));
        assert!(!ApiHandle::default().is_ready());
        assert!(ApiHandle::default().api().is_err());
    }

    #[test]
    fn handles_are_scoped_to_the_account() {
        let shared = service();
        let alice = ApiHandle::new(Some(shared.clone()), Some(1));
        let bob = ApiHandle::new(Some(shared.clone()), Some(2));

        assert!(alice != bob);
        assert!(alice == ApiHandle::new(Some(shared.clone()), Some(1)));
        assert_eq!(hash_of(&alice), hash_of(&ApiHandle::new(Some(shared), Some(1))));
        assert!(alice.is_ready());
    }

    #[test]
    fn signed_out_handle_does_not_run_queries() {
        let handle = ApiHandle::new(Some(service()), None);
        assert!(!handle.is_ready());
        assert!(handle.api().is_ok());
    }

    #[test]
    fn account_watch_reports_switches() {
        let mut watch = AccountWatch::default();
        assert!(!watch.changed(None));
        assert!(watch.changed(Some(1)));
        assert!(!watch.changed(Some(1)));
        assert!(watch.changed(None));
        assert!(watch.changed(Some(2)));
        assert!(!watch.changed(Some(2)));
    }

    #[test]
    fn schedule_waits_for_first_interval() {
        let start = Instant::now();
        let mut schedule = RefreshSchedule::new(start);
        assert_eq!(schedule.poll(start), RefreshDue::default());
        assert_eq!(
            schedule.poll(start + Duration::from_secs(1)),
            RefreshDue::default()
        );
    }

    #[test]
    fn tasks_refresh_every_three_seconds() {
        let start = Instant::now();
        let mut schedule = RefreshSchedule::new(start);

        let first = start + TASKS_REFRESH_INTERVAL;
        assert!(schedule.poll(first).tasks);
        assert!(!schedule.poll(first + Duration::from_secs(1)).tasks);
        assert!(schedule.poll(first + TASKS_REFRESH_INTERVAL).tasks);
    }

    #[test]
    fn today_mood_refreshes_every_five_minutes() {
        let start = Instant::now();
        let mut schedule = RefreshSchedule::new(start);

        let due = schedule.poll(start + Duration::from_secs(299));
        assert_eq!(
            due,
            RefreshDue {
                tasks: true,
                today_mood: false
            }
        );

        // tasks were refreshed one second ago
        let due = schedule.poll(start + TODAY_MOOD_REFRESH_INTERVAL);
        assert_eq!(
            due,
            RefreshDue {
                tasks: false,
                today_mood: true
            }
        );
    }
}

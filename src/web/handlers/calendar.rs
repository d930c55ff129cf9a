//! Calendar page handlers: month, year and day views.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use chrono::{Datelike, Duration, NaiveDate, Utc};
use serde::Deserialize;
use std::collections::HashMap;

use crate::domain::calendar::{
    month_grid, next_month, prev_month, MONTH_NAMES, WEEKDAY_LABELS,
};
use crate::domain::entities::{find_category, Category, CustomEmoji, Event, CATEGORIES};
use crate::domain::{calendar, palette};
use crate::error::AppError;
use crate::state::AppState;

/// Query parameters selecting the view and its date.
#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    #[serde(default)]
    pub view: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub month: Option<u32>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// One event rendered as a chip or list row.
pub struct EventChip {
    pub id: i64,
    pub text: String,
    /// The event's own emoji, or its category icon when none was chosen.
    pub icon: String,
    pub category: String,
}

impl From<&Event> for EventChip {
    fn from(event: &Event) -> Self {
        let icon = event
            .emoji
            .clone()
            .or_else(|| find_category(&event.category).map(|c| c.icon.to_string()))
            .unwrap_or_default();

        Self {
            id: event.id,
            text: event.text.clone(),
            icon,
            category: event.category.clone(),
        }
    }
}

/// One cell of the month grid.
///
/// `holiday` and `color` are empty strings when absent, which keeps the
/// template logic to plain emptiness checks.
pub struct DayCell {
    pub in_month: bool,
    pub day: u32,
    pub date_str: String,
    pub holiday: String,
    pub color: String,
    pub is_today: bool,
    pub is_workday: bool,
    pub events: Vec<EventChip>,
}

impl DayCell {
    fn blank() -> Self {
        Self {
            in_month: false,
            day: 0,
            date_str: String::new(),
            holiday: String::new(),
            color: String::new(),
            is_today: false,
            is_workday: false,
            events: Vec::new(),
        }
    }
}

/// Template for the month view.
#[derive(Template, WebTemplate)]
#[template(path = "month.html")]
pub struct MonthTemplate {
    pub year: i32,
    pub month_name: &'static str,
    pub country: String,
    pub weekday_labels: [&'static str; 7],
    pub weeks: Vec<Vec<DayCell>>,
    pub prev_year: i32,
    pub prev_month: u32,
    pub next_year: i32,
    pub next_month: u32,
}

/// One card of the year view.
pub struct MonthCard {
    pub month: u32,
    pub name: &'static str,
    pub count: i64,
}

/// Template for the year overview.
#[derive(Template, WebTemplate)]
#[template(path = "year.html")]
pub struct YearTemplate {
    pub year: i32,
    pub prev_year: i32,
    pub next_year: i32,
    pub months: Vec<MonthCard>,
}

/// Template for the single-day view with the add form.
#[derive(Template, WebTemplate)]
#[template(path = "day.html")]
pub struct DayTemplate {
    pub date_str: String,
    pub date_label: String,
    pub holiday: String,
    pub is_workday: bool,
    pub prev_date: String,
    pub next_date: String,
    pub events: Vec<EventChip>,
    pub categories: &'static [Category],
    pub emojis: Vec<CustomEmoji>,
}

/// Renders the calendar.
///
/// # Endpoint
///
/// `GET /?view=month|year|day&year=&month=&date=`
///
/// The view defaults to the current month. Missing date parts default to
/// today.
pub async fn calendar_handler(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> Result<Response, AppError> {
    let today = Utc::now().date_naive();

    match query.view.as_deref().unwrap_or("month") {
        "year" => {
            let year = query.year.unwrap_or_else(|| today.year());
            Ok(year_view(&state, year).await?.into_response())
        }
        "day" => {
            let date = query.date.unwrap_or(today);
            Ok(day_view(&state, date).await?.into_response())
        }
        _ => {
            let year = query.year.unwrap_or_else(|| today.year());
            let month = match query.month {
                Some(m) if (1..=12).contains(&m) => m,
                _ => today.month(),
            };
            Ok(month_view(&state, year, month, today).await?.into_response())
        }
    }
}

async fn month_view(
    state: &AppState,
    year: i32,
    month: u32,
    today: NaiveDate,
) -> Result<MonthTemplate, AppError> {
    let days = calendar::month_days(year, month);
    let first = days[0];
    let last = days[days.len() - 1];

    let mut events_by_date: HashMap<NaiveDate, Vec<Event>> = HashMap::new();
    for event in state.event_service.events_between(first, last).await? {
        events_by_date.entry(event.date).or_default().push(event);
    }

    let country = state.settings_service.country().await?;
    let holidays_by_date: HashMap<NaiveDate, String> = state
        .holiday_service
        .get_holidays(&country, year, false)
        .await
        .into_iter()
        .filter(|h| h.date.month() == month)
        .map(|h| (h.date, h.display_name().to_string()))
        .collect();

    let weeks = month_grid(year, month)
        .into_iter()
        .map(|week| {
            week.into_iter()
                .map(|slot| match slot {
                    Some(date) => {
                        day_cell(date, today, events_by_date.get(&date), &holidays_by_date)
                    }
                    None => DayCell::blank(),
                })
                .collect()
        })
        .collect();

    let (prev_y, prev_m) = prev_month(year, month);
    let (next_y, next_m) = next_month(year, month);

    Ok(MonthTemplate {
        year,
        month_name: MONTH_NAMES[(month - 1) as usize],
        country,
        weekday_labels: WEEKDAY_LABELS,
        weeks,
        prev_year: prev_y,
        prev_month: prev_m,
        next_year: next_y,
        next_month: next_m,
    })
}

fn day_cell(
    date: NaiveDate,
    today: NaiveDate,
    events: Option<&Vec<Event>>,
    holidays: &HashMap<NaiveDate, String>,
) -> DayCell {
    let events = events.map(Vec::as_slice).unwrap_or_default();

    let color = if events.is_empty() {
        String::new()
    } else {
        let total_len: usize = events.iter().map(|e| e.text.chars().count()).sum();
        palette::day_color(events.len(), total_len).to_string()
    };

    DayCell {
        in_month: true,
        day: date.day(),
        date_str: date.to_string(),
        holiday: holidays.get(&date).cloned().unwrap_or_default(),
        color,
        is_today: date == today,
        is_workday: calendar::is_workday(date),
        events: events.iter().map(EventChip::from).collect(),
    }
}

async fn year_view(state: &AppState, year: i32) -> Result<YearTemplate, AppError> {
    let counts = state.event_service.month_counts(year).await?;

    let months = (1..=12u32)
        .map(|month| MonthCard {
            month,
            name: MONTH_NAMES[(month - 1) as usize],
            count: counts[(month - 1) as usize],
        })
        .collect();

    Ok(YearTemplate {
        year,
        prev_year: year - 1,
        next_year: year + 1,
        months,
    })
}

async fn day_view(state: &AppState, date: NaiveDate) -> Result<DayTemplate, AppError> {
    let events = state.event_service.events_for_date(date).await?;
    let emojis = state.emoji_service.list_emojis().await?;

    let country = state.settings_service.country().await?;
    let holiday = state
        .holiday_service
        .get_holidays(&country, date.year(), false)
        .await
        .into_iter()
        .find(|h| h.date == date)
        .map(|h| h.display_name().to_string())
        .unwrap_or_default();

    Ok(DayTemplate {
        date_str: date.to_string(),
        date_label: date.format("%A, %B %-d, %Y").to_string(),
        holiday,
        is_workday: calendar::is_workday(date),
        prev_date: (date - Duration::days(1)).to_string(),
        next_date: (date + Duration::days(1)).to_string(),
        events: events.iter().map(EventChip::from).collect(),
        categories: &CATEGORIES,
        emojis,
    })
}

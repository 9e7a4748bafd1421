use std::future::Future;

use api::{ApiError, ApiResult};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use dioxus::prelude::*;
use store::{FormModal, Submission, Validate};

use crate::session::expire_session;

/// Validate and send the open form. Invalid drafts stay local; the error is
/// shown in the modal. On success the modal closes and `on_success` runs.
pub fn submit_form<D, Fut>(
    mut form: Signal<FormModal<D>>,
    send: impl FnOnce(Submission<D>) -> Fut + 'static,
    fallback: &'static str,
    on_success: impl FnOnce() + 'static,
) where
    D: Clone + Default + Validate + 'static,
    Fut: Future<Output = ApiResult<()>> + 'static,
{
    let Some(submission) = form.write().begin_submit() else {
        return;
    };
    spawn(async move {
        let result = send(submission).await;
        if matches!(result, Err(ApiError::Unauthorized)) {
            expire_session();
        }
        if form.write().finish_submit(result, fallback) {
            on_success();
        }
    });
}

/// Edit the open draft in place.
pub fn edit<D>(mut form: Signal<FormModal<D>>, change: impl FnOnce(&mut D))
where
    D: Clone + Default + Validate + 'static,
{
    change(form.write().draft_mut());
}

pub fn show_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%b %d, %Y").to_string())
        .unwrap_or_else(|| "-".to_string())
}

pub fn show_instant(at: DateTime<Utc>) -> String {
    at.format("%b %d, %Y %H:%M").to_string()
}

pub fn show_local(at: NaiveDateTime) -> String {
    at.format("%b %d, %Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_render_short_month() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(show_date(Some(day)), "Mar 07, 2024");
        assert_eq!(show_date(None), "-");
        assert_eq!(show_local(day.and_hms_opt(14, 5, 0).unwrap()), "Mar 07, 2024 14:05");
    }
}

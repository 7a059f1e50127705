use time::Date;
use uuid::Uuid;

use crate::entries::query::EntryQuery;
use crate::entries::repo_types::{FoodLogEntry, NewEntry};
use crate::error::AppError;
use crate::state::AppState;

pub async fn create_entry(
    st: &AppState,
    user_id: Uuid,
    calories: i32,
    log_date: Option<Date>,
) -> Result<FoodLogEntry, AppError> {
    if calories <= 0 {
        return Err(AppError::Validation(
            "calories must be a positive integer".into(),
        ));
    }

    // Profile must exist before anything is written.
    if st.profiles.find(user_id).await?.is_none() {
        return Err(AppError::Validation(format!(
            "user profile {user_id} does not exist"
        )));
    }

    let log_date = log_date.unwrap_or_else(|| st.clock.today());
    let entry = st
        .entries
        .insert(NewEntry {
            user_id,
            calories,
            log_date,
            created_at: st.clock.now(),
        })
        .await?;
    Ok(entry)
}

/// Never fails for an unknown user; the listing is just empty.
pub async fn list_entries(st: &AppState, query: EntryQuery) -> Result<Vec<FoodLogEntry>, AppError> {
    Ok(st.entries.list(&query).await?)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use time::macros::{date, datetime};

    use super::*;
    use crate::clock::FixedClock;
    use crate::profiles::services::create_profile;

    #[tokio::test]
    async fn defaults_log_date_to_today() {
        let st = AppState::fake();
        let user = create_profile(&st, 2000).await.unwrap();
        let entry = create_entry(&st, user.id, 450, None).await.unwrap();
        assert_eq!(entry.log_date, date!(2024 - 01 - 15));
        assert_eq!(entry.user_id, user.id);
        assert_eq!(entry.calories, 450);
    }

    #[tokio::test]
    async fn keeps_explicit_log_date() {
        let st = AppState::fake();
        let user = create_profile(&st, 2000).await.unwrap();
        let entry = create_entry(&st, user.id, 300, Some(date!(2023 - 12 - 31)))
            .await
            .unwrap();
        assert_eq!(entry.log_date, date!(2023 - 12 - 31));
    }

    #[tokio::test]
    async fn orphan_entry_is_rejected_and_not_stored() {
        let st = AppState::fake();
        let ghost = Uuid::new_v4();
        let err = create_entry(&st, ghost, 500, None).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let listed = list_entries(&st, EntryQuery::between(ghost, None, None))
            .await
            .unwrap();
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn rejects_non_positive_calories() {
        let st = AppState::fake();
        let user = create_profile(&st, 2000).await.unwrap();
        for calories in [0, -250] {
            let err = create_entry(&st, user.id, calories, None).await.unwrap_err();
            assert!(matches!(err, AppError::Validation(_)));
        }
        let listed = list_entries(&st, EntryQuery::between(user.id, None, None))
            .await
            .unwrap();
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn lists_all_user_entries_newest_first() {
        let clock = Arc::new(FixedClock::at(datetime!(2024-01-15 09:00 UTC)));
        let st = AppState::fake_with_clock(clock.clone());
        let user = create_profile(&st, 2000).await.unwrap();
        let other = create_profile(&st, 1800).await.unwrap();

        let jan14 = create_entry(&st, user.id, 100, Some(date!(2024 - 01 - 14))).await.unwrap();
        clock.advance(time::Duration::minutes(1));
        let jan15_a = create_entry(&st, user.id, 200, Some(date!(2024 - 01 - 15))).await.unwrap();
        clock.advance(time::Duration::minutes(1));
        let jan15_b = create_entry(&st, user.id, 300, Some(date!(2024 - 01 - 15))).await.unwrap();
        create_entry(&st, other.id, 999, Some(date!(2024 - 01 - 15))).await.unwrap();

        let listed = list_entries(&st, EntryQuery::between(user.id, None, None))
            .await
            .unwrap();
        assert_eq!(listed, vec![jan15_b, jan15_a, jan14]);
    }

    #[tokio::test]
    async fn single_day_range_returns_exactly_that_day() {
        let st = AppState::fake();
        let user = create_profile(&st, 2000).await.unwrap();
        for (day, kcal) in [
            (date!(2024 - 01 - 14), 100),
            (date!(2024 - 01 - 15), 200),
            (date!(2024 - 01 - 15), 250),
            (date!(2024 - 01 - 16), 300),
        ] {
            create_entry(&st, user.id, kcal, Some(day)).await.unwrap();
        }

        let d = date!(2024 - 01 - 15);
        let listed = list_entries(&st, EntryQuery::on_date(user.id, d)).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert!(listed.iter().all(|e| e.log_date == d));
    }

    #[tokio::test]
    async fn range_bounds_are_inclusive() {
        let st = AppState::fake();
        let user = create_profile(&st, 2000).await.unwrap();
        for day in [
            date!(2024 - 01 - 09),
            date!(2024 - 01 - 10),
            date!(2024 - 01 - 11),
            date!(2024 - 01 - 12),
            date!(2024 - 01 - 13),
        ] {
            create_entry(&st, user.id, 100, Some(day)).await.unwrap();
        }

        let q = EntryQuery::between(user.id, Some(date!(2024 - 01 - 10)), Some(date!(2024 - 01 - 12)));
        let days: Vec<Date> = list_entries(&st, q)
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.log_date)
            .collect();
        assert_eq!(
            days,
            vec![date!(2024 - 01 - 12), date!(2024 - 01 - 11), date!(2024 - 01 - 10)]
        );
    }
}

use uuid::Uuid;

use crate::error::AppError;
use crate::profiles::repo_types::UserProfile;
use crate::state::AppState;

fn ensure_positive_target(target: i32) -> Result<(), AppError> {
    if target <= 0 {
        return Err(AppError::Validation(
            "daily_calorie_target must be a positive integer".into(),
        ));
    }
    Ok(())
}

pub async fn create_profile(st: &AppState, target: i32) -> Result<UserProfile, AppError> {
    ensure_positive_target(target)?;
    let profile = st.profiles.insert(target, st.clock.now()).await?;
    Ok(profile)
}

pub async fn update_profile(st: &AppState, id: Uuid, target: i32) -> Result<UserProfile, AppError> {
    ensure_positive_target(target)?;
    st.profiles
        .update_target(id, target, st.clock.now())
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user profile {id} not found")))
}

pub async fn get_profile(st: &AppState, id: Uuid) -> Result<Option<UserProfile>, AppError> {
    Ok(st.profiles.find(id).await?)
}

use serde::Deserialize;

/// Body of `POST /profiles` and `PUT /profiles/:id`.
#[derive(Debug, Deserialize)]
pub struct ProfileTargetRequest {
    pub daily_calorie_target: i32,
}

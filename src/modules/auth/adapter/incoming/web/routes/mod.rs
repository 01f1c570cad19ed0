mod fetch_profile;
mod login_user;
mod register_user;
mod update_profile;

pub use fetch_profile::*;
pub use login_user::*;
pub use register_user::*;
pub use update_profile::*;

use serde::Serialize;
use utoipa::ToSchema;

/// Profile shape shared by register/login/profile responses.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    pub university: String,
    pub department: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub stress_level: i16,
    pub mental_health_score: i16,
}

impl From<crate::modules::auth::application::domain::entities::User> for UserDto {
    fn from(user: crate::modules::auth::application::domain::entities::User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
            student_id: user.student_id,
            university: user.university,
            department: user.department,
            avatar: user.avatar,
            stress_level: user.stress_level,
            mental_health_score: user.mental_health_score,
        }
    }
}

//! Profile aggregate

/// A customer profile. `user_id` references the IAM account, `plan_id` a
/// subscription plan owned by the plans service; both are id references
/// only. The RUC (tax registry number) is unique across profiles.
#[derive(Debug, Clone)]
pub struct Profile {
    pub id: i64,
    pub user_id: i64,
    pub plan_id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub ruc: String,
}

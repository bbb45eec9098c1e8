use uuid::Uuid;

pub struct CreateUserInput {
    pub username: String,
    pub email: String,
    pub status: Option<String>,
}

pub struct UpdateUserInput {
    pub user_id: Uuid,
    pub username: Option<String>,
    pub email: Option<String>,
    pub status: Option<String>,
}

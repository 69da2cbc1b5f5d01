/// Fields left as `None` are kept unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateProfileInput {
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub dark_mode: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangePasswordInput {
    pub current_password: String,
    pub new_password: String,
}

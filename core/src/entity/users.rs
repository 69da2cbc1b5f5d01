use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub avatar: Option<String>,
    pub dark_mode: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::saved_meal_plans::Entity")]
    SavedMealPlans,
    #[sea_orm(has_many = "super::saved_recipes::Entity")]
    SavedRecipes,
}

impl Related<super::saved_meal_plans::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SavedMealPlans.def()
    }
}

impl Related<super::saved_recipes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SavedRecipes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

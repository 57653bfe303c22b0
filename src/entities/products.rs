use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,

    /// Decimal rendered as text so no precision is lost in SQLite.
    pub price: String,

    pub maker_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::makers::Entity",
        from = "Column::MakerId",
        to = "super::makers::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Maker,
}

impl Related<super::makers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Maker.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

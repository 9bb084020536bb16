use async_trait::async_trait;
use domain_ticketing::command::CreateUserCommand;
use domain_ticketing::model::entity::{User, UserRole};
use domain_ticketing::model::vo::{UserPatch, UserProfile};
use domain_ticketing::repository::UserRepo;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveValue::Set, ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::infrastructure::database::model::users;
use crate::infrastructure::database::OrmRepo;

fn to_profile(model: users::Model) -> anyhow::Result<UserProfile> {
    Ok(UserProfile {
        user_id: model.user_id,
        fio: model.fio,
        phone: model.phone,
        login: model.login,
        role: model.role.parse()?,
    })
}

#[async_trait]
impl UserRepo for OrmRepo {
    async fn authenticate(
        &self,
        login: &str,
        password: &str,
    ) -> anyhow::Result<Option<UserProfile>> {
        users::Entity::find()
            .filter(users::Column::Login.eq(login))
            .filter(users::Column::Password.eq(password))
            .one(self.db.get_connection())
            .await?
            .map(to_profile)
            .transpose()
    }

    async fn get_by_id(&self, id: i64) -> anyhow::Result<Option<UserProfile>> {
        users::Entity::find_by_id(id)
            .one(self.db.get_connection())
            .await?
            .map(to_profile)
            .transpose()
    }

    async fn get_by_role(&self, role: UserRole) -> anyhow::Result<Vec<UserProfile>> {
        users::Entity::find()
            .filter(users::Column::Role.eq(role.as_str()))
            .order_by_asc(users::Column::Fio)
            .all(self.db.get_connection())
            .await?
            .into_iter()
            .map(to_profile)
            .collect()
    }

    async fn get_all(&self) -> anyhow::Result<Vec<UserProfile>> {
        users::Entity::find()
            .order_by_asc(users::Column::Fio)
            .all(self.db.get_connection())
            .await?
            .into_iter()
            .map(to_profile)
            .collect()
    }

    async fn insert(&self, cmd: &CreateUserCommand) -> anyhow::Result<i64> {
        let active_model = users::ActiveModel {
            fio: Set(cmd.fio.clone()),
            phone: Set(cmd.phone.clone()),
            login: Set(cmd.login.clone()),
            password: Set(cmd.password.clone()),
            role: Set(cmd.role.as_str().to_owned()),
            ..Default::default()
        };
        let result = users::Entity::insert(active_model)
            .exec(self.db.get_connection())
            .await?;
        Ok(result.last_insert_id)
    }

    async fn update(&self, id: i64, patch: &UserPatch) -> anyhow::Result<bool> {
        if patch.is_empty() {
            return Ok(false);
        }
        let mut active_model = users::ActiveModel::default();
        if let Some(fio) = &patch.fio {
            active_model.fio = Set(fio.clone());
        }
        if let Some(phone) = &patch.phone {
            active_model.phone = Set(phone.clone());
        }
        if let Some(login) = &patch.login {
            active_model.login = Set(login.clone());
        }
        if let Some(password) = &patch.password {
            active_model.password = Set(password.clone());
        }
        if let Some(role) = patch.role {
            active_model.role = Set(role.as_str().to_owned());
        }
        let result = users::Entity::update_many()
            .set(active_model)
            .filter(users::Column::UserId.eq(id))
            .exec(self.db.get_connection())
            .await?;
        Ok(result.rows_affected > 0)
    }

    async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        let result = users::Entity::delete_by_id(id)
            .exec(self.db.get_connection())
            .await?;
        Ok(result.rows_affected > 0)
    }

    async fn upsert(&self, user: &User) -> anyhow::Result<()> {
        let active_model = users::ActiveModel {
            user_id: Set(user.user_id),
            fio: Set(user.fio.clone()),
            phone: Set(user.phone.clone()),
            login: Set(user.login.clone()),
            password: Set(user.password.clone()),
            role: Set(user.role.as_str().to_owned()),
        };
        users::Entity::insert(active_model)
            .on_conflict(
                OnConflict::column(users::Column::UserId)
                    .update_columns([
                        users::Column::Fio,
                        users::Column::Phone,
                        users::Column::Login,
                        users::Column::Password,
                        users::Column::Role,
                    ])
                    .to_owned(),
            )
            .exec(self.db.get_connection())
            .await?;
        Ok(())
    }
}

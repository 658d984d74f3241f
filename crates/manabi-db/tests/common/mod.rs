pub mod topic;

use manabi_db::sea_orm::{DbConn, DbErr};

pub async fn setup_schema(db: &DbConn) -> Result<(), DbErr> {
    manabi_db::migration::migrate(db).await
}

use sea_orm::ConnectionTrait;

use super::{TaskDao, TodoDao, UserDao};

/// Repository access bound to one connection or transaction.
pub struct DaoContext<'a, C> {
    conn: &'a C,
}

impl<'a, C> DaoContext<'a, C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub fn todo(&self) -> TodoDao<'a, C> {
        TodoDao::new(self.conn)
    }

    pub fn user(&self) -> UserDao<'a, C> {
        UserDao::new(self.conn)
    }

    pub fn task(&self) -> TaskDao<'a, C> {
        TaskDao::new(self.conn)
    }
}

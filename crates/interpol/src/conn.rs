//! The driver seam: everything the engine needs from a real connection.

use crate::cast::{Escape, cast_value};
use crate::error::Error;
use crate::expand::expand;
use crate::resolve::Params;
use crate::types::CastType;
use crate::value::Value;

/// A database connection, as seen by the templating engine.
///
/// The engine never opens sockets or reads results; it only asks the
/// connection to escape scalars and to run the one fully expanded string.
pub trait Connection {
    /// Whatever the driver hands back for a successful statement.
    type Rows;

    /// Escape a scalar's textual form. Must not add quotes.
    fn escape(&self, raw: &str) -> String;

    /// Execute a fully expanded statement. `None` signals driver failure,
    /// detailed by [`Connection::last_error`].
    fn query(&mut self, sql: &str) -> Option<Self::Rows>;

    /// Driver-reported detail for the most recent failure.
    fn last_error(&self) -> String;
}

impl<C: Connection> Escape for C {
    fn escape(&self, raw: &str) -> String {
        Connection::escape(self, raw)
    }
}

/// Runs templates against a connection.
///
/// Each [`Query::run`] builds fresh pass state; nothing is cached between
/// calls, so one instance can be reused for any number of templates.
pub struct Query<C: Connection> {
    conn: C,
}

/// A successfully executed statement: the expanded SQL plus the driver's
/// rows.
#[derive(Debug, Clone)]
pub struct ExpandedQuery<R> {
    /// The final literal SQL that was sent.
    pub sql: String,
    /// The driver's result handle.
    pub rows: R,
}

impl<C: Connection> Query<C> {
    pub fn new(conn: C) -> Self {
        Self { conn }
    }

    pub fn into_connection(self) -> C {
        self.conn
    }

    /// Expand `template` with `params` and execute it.
    ///
    /// Template and cast errors surface before the connection is touched;
    /// driver failures come back as [`Error::Execution`] carrying the
    /// original template.
    pub fn run(&mut self, template: &str, params: &Params) -> Result<ExpandedQuery<C::Rows>, Error> {
        let sql = expand(template, params, &self.conn)?;
        tracing::debug!(%sql, "running query");
        match self.conn.query(&sql) {
            Some(rows) => Ok(ExpandedQuery { sql, rows }),
            None => Err(Error::Execution {
                message: self.conn.last_error(),
                query: template.to_owned(),
            }),
        }
    }

    /// Cast an ad-hoc value with this connection's escaping, outside of any
    /// template.
    pub fn cast_value(&self, value: &Value, ty: CastType, nullable: bool) -> String {
        cast_value(value, ty, nullable, &self.conn)
    }
}

use crate::types::ColumnType;
use std::fmt::{self, Display};

///
/// Statement
///
/// One DDL statement of a schema script.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Statement {
    BeginTransaction,
    CreateTable {
        table: String,
        if_not_exists: bool,
        columns: Vec<(String, ColumnType)>,
    },
    CreateIndex {
        name: String,
        table: String,
        unique: bool,
        if_not_exists: bool,
        expression: String,
    },
    Commit,
}

impl Statement {
    fn write(&self, f: &mut fmt::Formatter<'_>, upper: bool) -> fmt::Result {
        let kw = |s: &'static str| if upper { s.to_ascii_uppercase() } else { s.to_string() };
        let guard = |on: bool| if on { kw(" if not exists") } else { String::new() };

        match self {
            Self::BeginTransaction => f.write_str(&kw("begin transaction")),
            Self::Commit => f.write_str(&kw("commit")),
            Self::CreateTable {
                table,
                if_not_exists,
                columns,
            } => {
                let columns = columns
                    .iter()
                    .map(|(name, ty)| format!("{name} {ty}"))
                    .collect::<Vec<_>>()
                    .join(", ");

                write!(
                    f,
                    "{}{} {table} ({columns})",
                    kw("create table"),
                    guard(*if_not_exists)
                )
            }
            Self::CreateIndex {
                name,
                table,
                unique,
                if_not_exists,
                expression,
            } => {
                let head = if *unique {
                    kw("create unique index")
                } else {
                    kw("create index")
                };

                write!(
                    f,
                    "{head}{} {name} {} {table} ({expression})",
                    guard(*if_not_exists),
                    kw("on")
                )
            }
        }
    }
}

/// `{}` renders lower-case keywords, `{:#}` upper-case ones.
impl Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write(f, f.alternate())
    }
}

///
/// SchemaScript
///
/// Ordered DDL statements produced for one record type.
///
/// `{}` renders the canonical single-line text handed to the engine:
/// a transaction-wrapped script terminates every statement with `;`
/// (`begin transaction; create table ...; commit;`), a bare script joins
/// statements with `; ` and has no trailing separator.
/// `{:#}` renders one statement per line with upper-case keywords,
/// indenting the statements inside a transaction.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SchemaScript {
    statements: Vec<Statement>,
}

impl SchemaScript {
    pub(crate) const fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }

    #[must_use]
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    #[must_use]
    pub fn is_transactional(&self) -> bool {
        matches!(self.statements.first(), Some(Statement::BeginTransaction))
    }

    fn write_line(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let terminated = self.is_transactional();

        for (i, stmt) in self.statements.iter().enumerate() {
            if i > 0 {
                f.write_str(if terminated { " " } else { "; " })?;
            }
            write!(f, "{stmt}")?;
            if terminated {
                f.write_str(";")?;
            }
        }

        Ok(())
    }

    fn write_pretty(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let transactional = self.is_transactional();

        for (i, stmt) in self.statements.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            let nested = transactional
                && !matches!(stmt, Statement::BeginTransaction | Statement::Commit);
            if nested {
                f.write_str("\t")?;
            }
            write!(f, "{stmt:#};")?;
        }

        Ok(())
    }
}

impl Display for SchemaScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            self.write_pretty(f)
        } else {
            self.write_line(f)
        }
    }
}

impl From<SchemaScript> for String {
    fn from(script: SchemaScript) -> Self {
        script.to_string()
    }
}

///
/// TESTS
///

use crate::domain::errors::DomainError;
use sqlx::error::ErrorKind;

/// Translate a sqlx failure into the domain vocabulary.
///
/// SQLite reports unique violations as `UNIQUE constraint failed: table.column`,
/// so the slug columns are recognised from the message.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            let message = db_err.message();
            match db_err.kind() {
                ErrorKind::UniqueViolation if is_slug_violation(message) => {
                    DomainError::SlugTaken(message.to_string())
                }
                ErrorKind::UniqueViolation => DomainError::Conflict(unique_detail(message)),
                ErrorKind::ForeignKeyViolation => {
                    DomainError::NotFound("referenced record not found".into())
                }
                ErrorKind::CheckViolation => {
                    DomainError::Validation("check constraint violated".into())
                }
                _ => DomainError::Persistence(message.to_string()),
            }
        }
        sqlx::Error::RowNotFound => DomainError::NotFound("record not found".into()),
        _ => DomainError::Persistence(err.to_string()),
    }
}

fn violated_column(message: &str) -> Option<&str> {
    message
        .rsplit(": ")
        .next()
        .and_then(|target| target.split(", ").next())
}

fn is_slug_violation(message: &str) -> bool {
    violated_column(message).is_some_and(|column| column.ends_with(".slug"))
}

fn unique_detail(message: &str) -> String {
    match violated_column(message) {
        Some(column) if column.ends_with(".name") => "name already exists".into(),
        Some(column) => format!("{column} already exists"),
        None => "unique constraint violated".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_slug_columns() {
        assert!(is_slug_violation("UNIQUE constraint failed: posts.slug"));
        assert!(is_slug_violation("UNIQUE constraint failed: tags.slug"));
        assert!(!is_slug_violation("UNIQUE constraint failed: tags.name"));
        assert!(!is_slug_violation("UNIQUE constraint failed: posts.slugline"));
    }

    #[test]
    fn names_the_conflicting_column() {
        assert_eq!(
            unique_detail("UNIQUE constraint failed: categories.name"),
            "name already exists"
        );
        assert_eq!(
            unique_detail("UNIQUE constraint failed: post_tags.post_id, post_tags.tag_id"),
            "post_tags.post_id already exists"
        );
    }
}

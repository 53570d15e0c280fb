pub mod auth_dto;
pub mod driver_dto;
pub mod expense_dto;
pub mod maintenance_dto;
pub mod trip_dto;
pub mod vehicle_dto;

use serde::Deserialize;

// Parámetros de paginación para listados
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl ListQuery {
    const DEFAULT_LIMIT: i64 = 200;
    const MAX_LIMIT: i64 = 500;

    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(Self::DEFAULT_LIMIT).clamp(1, Self::MAX_LIMIT)
    }

    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0).max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_defaults() {
        let query = ListQuery::default();
        assert_eq!(query.limit(), 200);
        assert_eq!(query.offset(), 0);
    }

    #[test]
    fn test_list_query_clamps() {
        let query = ListQuery {
            limit: Some(10_000),
            offset: Some(-3),
        };
        assert_eq!(query.limit(), 500);
        assert_eq!(query.offset(), 0);

        let query = ListQuery {
            limit: Some(0),
            offset: Some(40),
        };
        assert_eq!(query.limit(), 1);
        assert_eq!(query.offset(), 40);
    }
}

// src/dashboard.rs
//! Where the property dashboard's occupancy numbers come from.

use crate::config::StatsSource;
use crate::domain::stats::DashboardStats;
use crate::errors::ServerError;
use chrono::NaiveDate;
use rusqlite::{params, Connection};

/// Produces the occupancy snapshot for a property. The connection is handed
/// in per call; providers hold no database state of their own.
pub trait DashboardDataProvider: Send + Sync {
    fn dashboard_stats(
        &self,
        conn: &Connection,
        property_id: i64,
        today: NaiveDate,
    ) -> Result<DashboardStats, ServerError>;
}

/// Fixed demo figures.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockDashboardData;

impl DashboardDataProvider for MockDashboardData {
    fn dashboard_stats(
        &self,
        _conn: &Connection,
        _property_id: i64,
        _today: NaiveDate,
    ) -> Result<DashboardStats, ServerError> {
        Ok(DashboardStats::from_counts(12, 48, 36, 8, 5))
    }
}

/// Counts rooms, beds and today's movements from the bookings table.
#[derive(Debug, Default, Clone, Copy)]
pub struct SqliteDashboardData;

impl DashboardDataProvider for SqliteDashboardData {
    fn dashboard_stats(
        &self,
        conn: &Connection,
        property_id: i64,
        today: NaiveDate,
    ) -> Result<DashboardStats, ServerError> {
        let (total_rooms, total_beds): (i64, i64) = conn
            .query_row(
                "select count(*), coalesce(sum(beds), 0) from rooms where property_id = ?",
                params![property_id],
                |r| Ok((r.get(0)?, r.get(1)?)),
            )
            .map_err(|e| ServerError::DbError(format!("room totals failed: {e}")))?;

        // A guest leaving today still holds the bed until checkout.
        let occupied_beds: i64 = conn
            .query_row(
                r#"
                select coalesce(sum(beds), 0)
                from bookings
                where property_id = ?1
                  and status in ('confirmed', 'checked_in')
                  and check_in <= ?2
                  and check_out >= ?2
                "#,
                params![property_id, today],
                |r| r.get(0),
            )
            .map_err(|e| ServerError::DbError(format!("occupied beds failed: {e}")))?;

        let arrivals_today: i64 = conn
            .query_row(
                r#"
                select count(*) from bookings
                where property_id = ?1 and check_in = ?2
                  and status not in ('cancelled', 'checked_out', 'no_show')
                "#,
                params![property_id, today],
                |r| r.get(0),
            )
            .map_err(|e| ServerError::DbError(format!("arrivals count failed: {e}")))?;

        let departures_today: i64 = conn
            .query_row(
                r#"
                select count(*) from bookings
                where property_id = ?1 and check_out = ?2
                  and status in ('confirmed', 'checked_in')
                "#,
                params![property_id, today],
                |r| r.get(0),
            )
            .map_err(|e| ServerError::DbError(format!("departures count failed: {e}")))?;

        Ok(DashboardStats::from_counts(
            total_rooms,
            total_beds,
            occupied_beds,
            arrivals_today,
            departures_today,
        ))
    }
}

pub fn provider_for(source: StatsSource) -> Box<dyn DashboardDataProvider> {
    match source {
        StatsSource::Mock => Box::new(MockDashboardData),
        StatsSource::Database => Box::new(SqliteDashboardData),
    }
}

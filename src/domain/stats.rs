// src/domain/stats.rs
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Occupancy snapshot for one property on one day. Read-only.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub occupancy: i64,
    pub current_occupancy_percentage: f64,
    pub total_rooms: i64,
    pub total_beds: i64,
    pub occupied_beds: i64,
    pub available_beds: i64,
    pub arrivals_today: i64,
    pub departures_today: i64,
}

impl DashboardStats {
    /// Derives the percentage and free beds from raw counts. On a changeover
    /// day leaving and arriving guests both count as occupied, so the derived
    /// figures are clamped to the room's capacity.
    pub fn from_counts(
        total_rooms: i64,
        total_beds: i64,
        occupied_beds: i64,
        arrivals_today: i64,
        departures_today: i64,
    ) -> Self {
        let current_occupancy_percentage = if total_beds > 0 {
            (occupied_beds as f64 / total_beds as f64 * 100.0).min(100.0)
        } else {
            0.0
        };
        DashboardStats {
            occupancy: occupied_beds,
            current_occupancy_percentage,
            total_rooms,
            total_beds,
            occupied_beds,
            available_beds: (total_beds - occupied_beds).max(0),
            arrivals_today,
            departures_today,
        }
    }
}

/// Body of `GET /api/stats`. Fixed figures until a tax/invoicing backend exists.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxStats {
    pub tax_collected: f64,
    pub invoices_generated: i64,
    pub total_revenue: f64,
    pub bookings_this_month: i64,
    pub pending_taxes: f64,
    pub last_sync: String,
}

impl TaxStats {
    pub fn mock(now: DateTime<Utc>) -> Self {
        TaxStats {
            tax_collected: 1250.50,
            invoices_generated: 45,
            total_revenue: 15750.00,
            bookings_this_month: 127,
            pending_taxes: 320.75,
            last_sync: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncResult {
    pub synced_bookings: i64,
    pub new_bookings: i64,
    pub updated_bookings: i64,
    pub last_sync: String,
    pub status: &'static str,
}

/// Body of `POST /api/sync-booking`. No booking platform is contacted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SyncResponse {
    pub success: bool,
    pub message: &'static str,
    pub result: SyncResult,
}

impl SyncResponse {
    pub fn mock(now: DateTime<Utc>) -> Self {
        SyncResponse {
            success: true,
            message: "Successfully synced with Booking.com!",
            result: SyncResult {
                synced_bookings: 3,
                new_bookings: 1,
                updated_bookings: 2,
                last_sync: now.to_rfc3339_opts(SecondsFormat::Millis, true),
                status: "success",
            },
        }
    }
}

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use skyfare_shared::pii;
use uuid::Uuid;

/// Ticket status in the lifecycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    Valid,
    Refunded,
    Used,
    Rescheduled,
    Canceled,
}

/// Order status in the lifecycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Paid,
    Ticketed,
    Completed,
    Canceled,
    Refunded,
}

/// Cabin of service; prices the fare through a fixed multiplier on the
/// flight's base price.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CabinClass {
    Economy,
    Business,
    First,
}

impl CabinClass {
    pub fn price_multiplier(&self) -> f64 {
        match self {
            CabinClass::Economy => 1.0,
            CabinClass::Business => 2.5,
            CabinClass::First => 4.0,
        }
    }
}

/// A single passenger's ticket on a flight. Prices are integer minor
/// units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub id: Uuid,
    pub ticket_number: String,
    pub order_id: Uuid,
    pub flight_id: Uuid,
    pub passenger_name: String,
    pub passenger_id_number: String,
    pub seat_number: Option<String>,
    pub cabin_class: CabinClass,
    pub price: i32,
    pub status: TicketStatus,
    pub flight_departure_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Ticket {
    pub fn new(
        order_id: Uuid,
        flight_id: Uuid,
        passenger_name: String,
        passenger_id_number: String,
        cabin_class: CabinClass,
        price: i32,
        flight_departure_time: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            ticket_number: Self::generate_ticket_number(),
            order_id,
            flight_id,
            passenger_name,
            passenger_id_number,
            seat_number: None,
            cabin_class,
            price,
            status: TicketStatus::Valid,
            flight_departure_time,
            created_at: Utc::now(),
        }
    }

    /// 13-digit numeric ticket number: a 3-digit airline prefix in the
    /// 880-999 range followed by a 10-digit serial.
    pub fn generate_ticket_number() -> String {
        let mut rng = rand::thread_rng();
        let prefix: u32 = rng.gen_range(880..=999);
        let serial: u64 = rng.gen_range(0..10_000_000_000);
        format!("{}{:010}", prefix, serial)
    }

    /// Passenger ID with the middle starred out, for display.
    pub fn masked_passenger_id(&self) -> String {
        pii::mask_id_number(&self.passenger_id_number)
    }

    /// Assign a seat at check-in.
    pub fn assign_seat(&mut self, seat_number: String) {
        self.seat_number = Some(seat_number);
    }

    /// Mark the old ticket once a rebooking has replaced it.
    pub fn mark_rescheduled(&mut self) {
        self.status = TicketStatus::Rescheduled;
    }
}

/// A customer's purchase; one order can hold several tickets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub order_number: String,
    pub status: OrderStatus,
    pub total_price: i32,
    pub created_at: DateTime<Utc>,
    pub paid_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl Order {
    /// New pending order with the payment deadline already stamped.
    pub fn new(total_price: i32) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            order_number: Self::generate_order_number(),
            status: OrderStatus::Pending,
            total_price,
            created_at: now,
            paid_at: None,
            expires_at: Some(crate::timeout::payment_deadline(now)),
        }
    }

    /// "ORD" followed by 8 uppercase hex characters.
    pub fn generate_order_number() -> String {
        let hex = Uuid::new_v4().simple().to_string();
        format!("ORD{}", hex[..8].to_uppercase())
    }

    pub fn mark_paid(&mut self, at: DateTime<Utc>) {
        self.status = OrderStatus::Paid;
        self.paid_at = Some(at);
        self.expires_at = None;
    }

    pub fn update_status(&mut self, new_status: OrderStatus) {
        self.status = new_status;
    }
}

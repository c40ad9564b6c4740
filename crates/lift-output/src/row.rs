//! Plain data row types written by output backends.

/// One completed journey, written at dropoff time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JourneyRow {
    pub passenger_id: u32,
    pub elevator_id:  u32,
    pub group_size:   u32,
    pub origin:       i32,
    pub destination:  i32,
    pub arrival_time: f64,
    pub pickup_time:  f64,
    pub dropoff_time: f64,
}

/// The whole-run summary line for one simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    /// Dispatch algorithm label ("A" or "B").
    pub algorithm:      String,
    pub seed:           u64,
    pub avg_wait:       f64,
    pub avg_trip:       f64,
    pub total_served:   u64,
    pub total_movement: f64,
}

/// Per-elevator movement totals for one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElevatorRow {
    pub elevator_id:     u32,
    pub movement_time:   f64,
    pub floors_traveled: u64,
}
